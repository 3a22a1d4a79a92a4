use crate::maze::{Grid, Maze};

/// One tile of the double-resolution walkable grid. Floor and wall are
/// fixed at derivation time; the solver turns floor tiles into visited
/// tiles as it explores, which is why this is three states and not two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Floor,
    Wall,
    Visited,
}

/// The maze materialized at double resolution: a `(2W+1) x (2H+1)` tile
/// grid where odd/odd tiles are cell floors, the tile between two cells
/// is floor where a connection opened a passage, and everything else is
/// wall. The entrance and exit are holes carved through the boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Walkable {
    grid: Grid<Tile>,
}

impl Walkable {
    /// Materializes floors and walls from the cell connection sets and
    /// carves the entrance and exit through the boundary.
    pub fn from_maze(maze: &Maze) -> Self {
        let width = maze.width() as u16 * 2 + 1;
        let height = maze.height() as u16 * 2 + 1;
        let mut grid = Grid::new(width, height, Tile::Wall);
        for y in 0..maze.height() {
            for x in 0..maze.width() {
                let (tx, ty) = (x as u16 * 2 + 1, y as u16 * 2 + 1);
                grid[(tx, ty)] = Tile::Floor;
                for direction in maze[(x, y)].connections() {
                    let (dx, dy) = direction.delta();
                    // Interior tile coordinates are >= 1, so this never wraps
                    grid[(
                        tx.wrapping_add_signed(dx as i16),
                        ty.wrapping_add_signed(dy as i16),
                    )] = Tile::Floor;
                }
            }
        }
        let mut walkable = Walkable { grid };
        let entrance = walkable.entrance();
        let exit = walkable.exit();
        walkable.grid[entrance] = Tile::Floor;
        walkable.grid[exit] = Tile::Floor;
        walkable
    }

    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// The boundary hole next to the first cell. A pure function of the
    /// dimensions, recomputed on every call.
    pub fn entrance(&self) -> (u16, u16) {
        (0, 1)
    }

    /// The boundary hole next to the last cell: `(2W, 2H - 1)`.
    pub fn exit(&self) -> (u16, u16) {
        (self.width() - 1, self.height() - 2)
    }

    pub fn is_in_bounds(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width() && coord.1 < self.height()
    }

    pub fn tile(&self, coord: (u16, u16)) -> Tile {
        self.grid[coord]
    }

    /// In-bounds floor tiles adjacent to `coord` that the solver has not
    /// stepped on yet, in a fixed left, right, up, down order.
    pub fn open_neighbors(&self, coord: (u16, u16)) -> Vec<(u16, u16)> {
        let (x, y) = coord;
        [
            (x.wrapping_sub(1), y),
            (x.saturating_add(1), y),
            (x, y.wrapping_sub(1)),
            (x, y.saturating_add(1)),
        ]
        .into_iter()
        .filter(|&c| self.is_in_bounds(c) && self.grid[c] == Tile::Floor)
        .collect()
    }

    /// Marks a floor tile as stepped-on. Walls stay walls.
    pub fn mark_visited(&mut self, coord: (u16, u16)) {
        if self.grid[coord] == Tile::Floor {
            self.grid[coord] = Tile::Visited;
        }
    }

    #[cfg(test)]
    /// Overwrites a tile directly, for building broken grids in tests.
    pub fn set(&mut self, coord: (u16, u16), tile: Tile) {
        self.grid[coord] = tile;
    }
}
