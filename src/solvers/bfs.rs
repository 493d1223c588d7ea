use std::collections::VecDeque;

use super::{OnVisit, Search};
use crate::maze::{Coord, Maze};

/// Breadth-first search. Cells are marked visited when queued, so the visited flags act
/// as the closed set.
pub(super) fn solve_bfs(
    maze: &mut Maze,
    start: Coord,
    goal: Coord,
    on_visit: OnVisit<'_>,
) -> Search {
    let mut search = Search::default();

    maze[start].set_visited(true);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        search.expand(maze, current, on_visit);
        if current == goal {
            search.found = true;
            break;
        }

        for neighbor in maze.neighbors(current) {
            if !maze[neighbor].is_visited() {
                maze[neighbor].set_visited(true);
                search.parents.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }
    }

    search
}
