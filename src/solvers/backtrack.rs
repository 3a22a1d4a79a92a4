use rand::Rng;

use super::walkable::Walkable;
use crate::error::MazeError;
use crate::generators::get_rng;

/// Depth-first backtracking search over the walkable grid from `start`
/// to `goal`.
///
/// The grid is a materialized tree, so the random choice among open
/// neighbors can never go wrong: a branch either reaches the goal or
/// dead-ends and gets backtracked out of. The returned stack, in push
/// order, is the unique simple route between the two openings. Each
/// floor tile is stepped on at most once, so the search finishes after
/// at most one visit per tile.
pub fn solve_backtrack(
    walkable: &mut Walkable,
    start: (u16, u16),
    goal: (u16, u16),
    seed: Option<u64>,
) -> Result<Vec<(u16, u16)>, MazeError> {
    let mut rng = get_rng(seed);
    let mut current = start;
    // Holds the forward route; cells get popped back off when a branch dead-ends
    let mut path = Vec::new();

    loop {
        walkable.mark_visited(current);
        if current == goal {
            path.push(current);
            break;
        }
        let neighbors = walkable.open_neighbors(current);
        if !neighbors.is_empty() {
            path.push(current);
            current = neighbors[rng.random_range(0..neighbors.len())];
        } else {
            // Dead end: step back to the previous route tile. Running out
            // of tiles to step back to means the openings are not connected,
            // which a correctly derived maze cannot produce.
            current = path.pop().ok_or(MazeError::NoSolutionFound)?;
        }
    }
    tracing::debug!("[solve] found path of {} tiles", path.len());
    Ok(path)
}
