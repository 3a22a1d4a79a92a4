use rand::{Rng, rngs::StdRng};

use crate::generators::get_rng;
use crate::maze::Maze;

/// Hunt-and-Kill: carve a single random walk with no backtracking; when
/// the walk dead-ends, hunt for the first unvisited cell bordering the
/// carved region, attach it, and restart the walk from there. Compared
/// to recursive backtracking this biases toward longer corridors with
/// fewer short dead ends.
pub fn hunt_and_kill(maze: &mut Maze, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    let mut current: (u8, u8) = (
        rng.random_range(0..maze.width()),
        rng.random_range(0..maze.height()),
    );
    maze.visit(current);

    loop {
        let neighbors = maze.neighbors_with_state(current, false);
        if !neighbors.is_empty() {
            // Kill phase: keep walking into a random unvisited neighbor
            let next = neighbors[rng.random_range(0..neighbors.len())];
            maze.connect(current, next);
            maze.visit(next);
            current = next;
        } else {
            match hunt(maze, &mut rng) {
                Some(cell) => current = cell,
                // Nothing left to attach, the tree spans the grid
                None => break,
            }
        }
    }
}

/// Scans the grid in the fixed x-outer, y-inner order for the first
/// unvisited cell with at least one visited neighbor, connects it to a
/// random one of those neighbors, and returns it as the next walk
/// start. The scan order determines which cell restarts the walk and
/// with it the structural bias of the maze, so it stays fixed.
fn hunt(maze: &mut Maze, rng: &mut StdRng) -> Option<(u8, u8)> {
    for x in 0..maze.width() {
        for y in 0..maze.height() {
            if maze[(x, y)].is_visited() {
                continue;
            }
            let visited = maze.neighbors_with_state((x, y), true);
            if !visited.is_empty() {
                let neighbor = visited[rng.random_range(0..visited.len())];
                maze.connect((x, y), neighbor);
                maze.visit((x, y));
                return Some((x, y));
            }
        }
    }
    None
}
