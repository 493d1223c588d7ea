use super::dijkstra::best_first;
use super::{OnVisit, Search};
use crate::maze::{Coord, Maze};

/// Manhattan distance, admissible and consistent on a 4-connected unit-cost grid.
fn manhattan(from: Coord, to: Coord) -> usize {
    from.0.abs_diff(to.0) as usize + from.1.abs_diff(to.1) as usize
}

pub(super) fn solve_astar(
    maze: &mut Maze,
    start: Coord,
    goal: Coord,
    on_visit: OnVisit<'_>,
) -> Search {
    best_first(maze, start, goal, on_visit, |coord| manhattan(coord, goal))
}
