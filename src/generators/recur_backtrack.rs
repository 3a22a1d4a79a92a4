use rand::Rng;

use crate::generators::get_rng;
use crate::maze::Maze;

/// Recursive backtracking: carve a random walk through unvisited cells,
/// backtracking through an explicit stack whenever the walk boxes
/// itself in. Every push marks exactly one new cell visited, so the
/// loop halts after `width * height` visits.
pub fn recursive_backtrack(maze: &mut Maze, seed: Option<u64>) {
    let mut rng = get_rng(seed);

    // Start carving from a random cell
    let start: (u8, u8) = (
        rng.random_range(0..maze.width()),
        rng.random_range(0..maze.height()),
    );
    maze.visit(start);

    // The stack only ever holds visited cells
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let neighbors = maze.neighbors_with_state(cell, false);
        if !neighbors.is_empty() {
            let neighbor = neighbors[rng.random_range(0..neighbors.len())];
            maze.connect(cell, neighbor);
            maze.visit(neighbor);
            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor on top to keep carving in its direction
            stack.push(neighbor);
        }
    }
}
