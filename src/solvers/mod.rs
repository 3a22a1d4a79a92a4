mod backtrack;
mod walkable;

pub use backtrack::solve_backtrack;
pub use walkable::{Tile, Walkable};

use crate::error::MazeError;
use crate::maze::Maze;

/// Derives the walkable representation of the maze and searches it for
/// the unique entrance-to-exit path.
pub fn solve(maze: &Maze, seed: Option<u64>) -> Result<Vec<(u16, u16)>, MazeError> {
    let mut walkable = Walkable::from_maze(maze);
    let entrance = walkable.entrance();
    let exit = walkable.exit();
    solve_backtrack(&mut walkable, entrance, exit, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate};

    fn assert_simple_path(path: &[(u16, u16)], entrance: (u16, u16), exit: (u16, u16)) {
        assert_eq!(path.first(), Some(&entrance));
        assert_eq!(path.last(), Some(&exit));
        for pair in path.windows(2) {
            let dx = pair[0].0.abs_diff(pair[1].0);
            let dy = pair[0].1.abs_diff(pair[1].1);
            assert_eq!(
                dx + dy,
                1,
                "step {:?} -> {:?} is not a unit move along one axis",
                pair[0],
                pair[1]
            );
        }
        let unique: std::collections::HashSet<_> = path.iter().collect();
        assert_eq!(unique.len(), path.len(), "path revisits a tile");
    }

    #[test]
    fn test_walkable_materialization() {
        let maze = generate(2, 2, Generator::RecurBacktrack, Some(3)).unwrap();
        let walkable = Walkable::from_maze(&maze);
        assert_eq!(walkable.width(), 5);
        assert_eq!(walkable.height(), 5);
        // Cell floors sit at odd/odd coordinates
        for y in [1u16, 3] {
            for x in [1u16, 3] {
                assert_eq!(walkable.tile((x, y)), Tile::Floor);
            }
        }
        // Corners are always wall
        for corner in [(0, 0), (4, 0), (0, 4), (4, 4)] {
            assert_eq!(walkable.tile(corner), Tile::Wall);
        }
        assert_eq!(walkable.tile(walkable.entrance()), Tile::Floor);
        assert_eq!(walkable.tile(walkable.exit()), Tile::Floor);
        // 4 cell floors + 3 passages + entrance + exit
        let floors = (0..walkable.height())
            .flat_map(|y| (0..walkable.width()).map(move |x| (x, y)))
            .filter(|&c| walkable.tile(c) == Tile::Floor)
            .count();
        assert_eq!(floors, 9);
    }

    #[test]
    fn test_solves_generated_mazes() {
        for generator in [Generator::RecurBacktrack, Generator::HuntKill] {
            for (width, height) in [(2, 2), (2, 9), (9, 2), (10, 10), (25, 13)] {
                let maze = generate(width, height, generator, Some(17)).unwrap();
                let path = solve(&maze, Some(17)).unwrap();
                let entrance = (0, 1);
                let exit = (width as u16 * 2, height as u16 * 2 - 1);
                assert_simple_path(&path, entrance, exit);
            }
        }
    }

    #[test]
    fn test_smallest_maze_is_solvable() {
        let maze = generate(2, 2, Generator::HuntKill, Some(1)).unwrap();
        let path = solve(&maze, Some(1)).unwrap();
        assert_simple_path(&path, (0, 1), (4, 3));
        assert!(path.len() > 1);
    }

    #[test]
    fn test_three_by_three_scenario() {
        let maze = generate(3, 3, Generator::RecurBacktrack, Some(7)).unwrap();
        let edges: usize = (0..3u8)
            .flat_map(|y| (0..3u8).map(move |x| (x, y)))
            .map(|c| maze[c].connections().count())
            .sum::<usize>()
            / 2;
        assert_eq!(edges, 8);
        let walkable = Walkable::from_maze(&maze);
        assert_eq!(walkable.width(), 7);
        assert_eq!(walkable.height(), 7);
        let path = solve(&maze, Some(7)).unwrap();
        assert_simple_path(&path, (0, 1), (6, 5));
    }

    #[test]
    fn test_solver_is_deterministic_with_seed() {
        let maze = generate(12, 12, Generator::RecurBacktrack, Some(5)).unwrap();
        let a = solve(&maze, Some(23)).unwrap();
        let b = solve(&maze, Some(23)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_sealed_entrance_reports_no_solution() {
        let maze = generate(3, 3, Generator::RecurBacktrack, Some(11)).unwrap();
        let mut walkable = Walkable::from_maze(&maze);
        // Wall off the only tile reachable from the entrance
        walkable.set((1, 1), Tile::Wall);
        let entrance = walkable.entrance();
        let exit = walkable.exit();
        assert_eq!(
            solve_backtrack(&mut walkable, entrance, exit, Some(0)),
            Err(MazeError::NoSolutionFound)
        );
    }
}
