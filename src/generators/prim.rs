use rand::{Rng, rngs::StdRng};

use crate::maze::{Coord, Maze};

/// Randomized Prim's algorithm over single cells.
///
/// A frontier wall is opened only when exactly one of its neighbors is already open,
/// so the open cells always form a tree. Visited flags mark cells that have been queued
/// and are left for the caller to clear.
pub fn randomized_prim(maze: &mut Maze, rng: &mut StdRng) {
    // Initialize the maze with walls
    maze.fill_walls();

    // Random starting point inside the border
    let start: Coord = (
        rng.random_range(1..maze.width() - 1),
        rng.random_range(1..maze.height() - 1),
    );
    maze[start].set_wall(false);
    maze[start].set_visited(true);

    let mut frontiers = Vec::new();
    queue_frontiers(maze, start, &mut frontiers);

    while !frontiers.is_empty() {
        // Randomly select a cell from the frontiers
        let idx = rng.random_range(0..frontiers.len());
        let frontier = frontiers.swap_remove(idx);

        let open_neighbors = maze.neighbors(frontier).len();
        if open_neighbors == 1 {
            maze[frontier].set_wall(false);
            queue_frontiers(maze, frontier, &mut frontiers);
        }
    }
}

/// Queues the interior wall neighbors of `coord` that have not been queued before.
fn queue_frontiers(maze: &mut Maze, coord: Coord, frontiers: &mut Vec<Coord>) {
    let candidates = maze
        .unvisited_neighbors(coord)
        .into_iter()
        .filter(|&c| maze.is_interior(c) && maze[c].is_wall())
        .collect::<Vec<_>>();
    for c in candidates {
        maze[c].set_visited(true);
        frontiers.push(c);
    }
}
