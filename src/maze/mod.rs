pub mod cell;
mod grid;

pub use cell::{Cell, Direction};
pub use grid::Grid;

use crate::error::MazeError;

/// The logical maze: a rectangular grid of cells whose connection sets
/// form a spanning tree once a generator has run over it.
///
/// Owned and mutated by a generator during a single run, read-only
/// afterward until the whole grid is replaced by the next run.
#[derive(Debug, Clone, PartialEq)]
pub struct Maze {
    grid: Grid<Cell>,
    width: u8,
    height: u8,
}

impl Maze {
    /// Allocates a grid of unvisited, connection-free cells.
    ///
    /// Zero-sized grids are rejected with [`MazeError::InvalidDimensions`];
    /// callers are expected to clamp their input to at least 2 in each
    /// dimension before calling.
    pub fn new(width: u8, height: u8) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Maze {
            grid: Grid::new(width as u16, height as u16, Cell::default()),
            width,
            height,
        })
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, coord: (u8, u8)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    /// In-bounds neighbors of `coord` whose visited flag equals `visited`,
    /// in a fixed left, right, up, down order so that seeded runs pick the
    /// same neighbor every time.
    pub fn neighbors_with_state(&self, coord: (u8, u8), visited: bool) -> Vec<(u8, u8)> {
        let (x, y) = coord;
        [
            // NOTE: This way of handling underflow/overflow is overflow-safe.
            // When x < 1 or y < 1, wrap x - 1 or y - 1 to u8::MAX to avoid underflow,
            // and let the bounds check below filter it out. When x + 1 or y + 1
            // exceeds u8::MAX, saturate at u8::MAX, which the bounds check also
            // filters out (the largest cell index numerically possible is
            // u8::MAX - 1, while the largest dimension is u8::MAX).
            (x.wrapping_sub(1), y),
            (x.saturating_add(1), y),
            (x, y.wrapping_sub(1)),
            (x, y.saturating_add(1)),
        ]
        .into_iter()
        .filter(|&c| self.is_in_bounds(c) && self[c].is_visited() == visited)
        .collect()
    }

    /// Opens a mirrored passage pair between two adjacent cells: `a`
    /// toward `b` and `b` back toward `a`. Connecting an already
    /// connected pair is a no-op.
    ///
    /// # Panics
    /// If `a` and `b` are not grid-adjacent or either is out of bounds.
    pub fn connect(&mut self, a: (u8, u8), b: (u8, u8)) {
        if !self.is_in_bounds(a) || !self.is_in_bounds(b) {
            panic!("cannot connect out-of-bounds cells {a:?} and {b:?}");
        }
        let direction = Direction::between(a, b)
            .unwrap_or_else(|| panic!("cells {a:?} and {b:?} are not adjacent"));
        self.cell_mut(a).open(direction);
        self.cell_mut(b).open(direction.opposite());
    }

    /// Marks the cell at `coord` as part of the spanning tree.
    pub fn visit(&mut self, coord: (u8, u8)) {
        self.cell_mut(coord).mark_visited();
    }

    fn cell_mut(&mut self, coord: (u8, u8)) -> &mut Cell {
        &mut self.grid[(coord.0 as u16, coord.1 as u16)]
    }
}

impl std::ops::Index<(u8, u8)> for Maze {
    type Output = Cell;

    fn index(&self, index: (u8, u8)) -> &Self::Output {
        &self.grid[(index.0 as u16, index.1 as u16)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Maze::new(0, 5),
            Err(MazeError::InvalidDimensions {
                width: 0,
                height: 5
            })
        );
        assert_eq!(
            Maze::new(3, 0),
            Err(MazeError::InvalidDimensions {
                width: 3,
                height: 0
            })
        );
        assert!(Maze::new(1, 1).is_ok());
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 5).unwrap();
        assert!(!maze.is_in_bounds((5, 5)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(maze.is_in_bounds((4, 4)));
    }

    #[test]
    fn test_connect_is_mirrored() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.connect((1, 1), (2, 1));
        assert!(maze[(1, 1)].is_open(Direction::Right));
        assert!(maze[(2, 1)].is_open(Direction::Left));
        // Repeating the connect must not grow the connection sets
        maze.connect((1, 1), (2, 1));
        assert_eq!(maze[(1, 1)].connections().count(), 1);
        assert_eq!(maze[(2, 1)].connections().count(), 1);
    }

    #[test]
    #[should_panic(expected = "not adjacent")]
    fn test_connect_rejects_non_adjacent() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.connect((0, 0), (2, 2));
    }

    #[test]
    fn test_neighbor_order_is_fixed() {
        let maze = Maze::new(3, 3).unwrap();
        // All cells start unvisited, so the full neighborhood comes back
        // in left, right, up, down order
        assert_eq!(
            maze.neighbors_with_state((1, 1), false),
            vec![(0, 1), (2, 1), (1, 0), (1, 2)]
        );
        assert_eq!(maze.neighbors_with_state((0, 0), false), vec![(1, 0), (0, 1)]);
    }

    #[test]
    fn test_neighbors_filter_by_visited() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.visit((0, 1));
        maze.visit((1, 0));
        assert_eq!(
            maze.neighbors_with_state((1, 1), true),
            vec![(0, 1), (1, 0)]
        );
        assert_eq!(
            maze.neighbors_with_state((1, 1), false),
            vec![(2, 1), (1, 2)]
        );
    }
}
