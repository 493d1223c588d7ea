use super::{OnVisit, Search};
use crate::maze::{Coord, Maze};

/// Depth-first search with an explicit stack. Cells are marked visited when pushed.
/// The neighbor pushed last, i.e. the last in `Direction::ALL` order, is explored first.
pub(super) fn solve_dfs(
    maze: &mut Maze,
    start: Coord,
    goal: Coord,
    on_visit: OnVisit<'_>,
) -> Search {
    let mut search = Search::default();

    maze[start].set_visited(true);
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        search.expand(maze, current, on_visit);
        if current == goal {
            search.found = true;
            break;
        }

        for neighbor in maze.neighbors(current) {
            if !maze[neighbor].is_visited() {
                maze[neighbor].set_visited(true);
                search.parents.insert(neighbor, current);
                stack.push(neighbor);
            }
        }
    }

    search
}
