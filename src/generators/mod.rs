mod hunt_kill;
mod recur_backtrack;

use rand::{SeedableRng, rngs::StdRng};

use crate::error::MazeError;
use crate::maze::Maze;
use hunt_kill::hunt_and_kill;
use recur_backtrack::recursive_backtrack;

/// Get a random number generator, optionally seeded for reproducibility.
pub(crate) fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// The available carving algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    RecurBacktrack,
    HuntKill,
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::HuntKill => write!(f, "Hunt-and-Kill"),
        }
    }
}

/// Allocates a fresh grid and carves it into a perfect maze with the
/// selected algorithm.
///
/// Either algorithm leaves every cell visited and the connection sets
/// forming a spanning tree: connected, acyclic, exactly
/// `width * height - 1` undirected passages.
pub fn generate(
    width: u8,
    height: u8,
    generator: Generator,
    seed: Option<u64>,
) -> Result<Maze, MazeError> {
    let mut maze = Maze::new(width, height)?;
    tracing::debug!("[gen] carving {width}x{height} maze with {generator}");
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(&mut maze, seed),
        Generator::HuntKill => hunt_and_kill(&mut maze, seed),
    }
    Ok(maze)
}
