/// One of the four cardinal carving directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Unit offset of this direction in cell coordinates.
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// The coordinate one step from `coord` in this direction, or `None`
    /// if stepping would leave the unsigned coordinate space.
    pub fn step(self, coord: (u8, u8)) -> Option<(u8, u8)> {
        let (dx, dy) = self.delta();
        Some((
            coord.0.checked_add_signed(dx)?,
            coord.1.checked_add_signed(dy)?,
        ))
    }

    /// Direction from `a` to `b` if the two coordinates are grid-adjacent.
    pub fn between(a: (u8, u8), b: (u8, u8)) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.step(a) == Some(b))
    }

    fn bit(self) -> u8 {
        1 << self as u8
    }
}

/// The smallest unit of maze state: a visited flag plus the set of open
/// passages toward neighboring cells.
///
/// Passages are stored as a bitmask keyed by [`Direction`], so the
/// connection set can never hold duplicates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    visited: bool,
    connections: u8,
}

impl Cell {
    /// Whether the carving algorithm has incorporated this cell into the
    /// spanning tree yet.
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    /// Whether a passage toward `direction` is open.
    pub fn is_open(&self, direction: Direction) -> bool {
        self.connections & direction.bit() != 0
    }

    /// Opens the passage toward `direction`. Opening an already open
    /// passage is a no-op.
    pub(crate) fn open(&mut self, direction: Direction) {
        self.connections |= direction.bit();
    }

    /// Iterates over the open passages of this cell.
    pub fn connections(&self) -> impl Iterator<Item = Direction> {
        let connections = self.connections;
        Direction::ALL
            .into_iter()
            .filter(move |d| connections & d.bit() != 0)
    }
}
