use rand::{Rng, rngs::StdRng};

use crate::maze::{Coord, Direction, Maze};

/// Depth-first carving over the odd-coordinate lattice.
///
/// Leaves visited flags set on carved lattice cells; the caller clears them.
pub fn recursive_backtrack(maze: &mut Maze, rng: &mut StdRng) {
    // Initialize the maze with walls
    maze.fill_walls();

    // Random odd starting point inside the border
    let start: Coord = (
        1 + 2 * rng.random_range(0..=(maze.width() - 3) / 2),
        1 + 2 * rng.random_range(0..=(maze.height() - 3) / 2),
    );
    maze[start].set_wall(false);
    maze[start].set_visited(true);

    // The stack keeps only carved cells
    let mut stack = vec![start];

    while let Some(&cell) = stack.last() {
        let neighbors = unvisited_lattice_neighbors(cell, maze);
        if neighbors.is_empty() {
            stack.pop();
            continue;
        }

        let neighbor = neighbors[rng.random_range(0..neighbors.len())];
        let between = ((cell.0 + neighbor.0) / 2, (cell.1 + neighbor.1) / 2);
        maze[between].set_wall(false);
        maze[neighbor].set_wall(false);
        maze[neighbor].set_visited(true);
        stack.push(neighbor);
    }
}

/// Interior cells two steps away from `coord` that have not been carved yet.
fn unvisited_lattice_neighbors(coord: Coord, maze: &Maze) -> Vec<Coord> {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| dir.step(coord, 2))
        .filter(|&c| maze.is_interior(c) && !maze[c].is_visited())
        .collect()
}
