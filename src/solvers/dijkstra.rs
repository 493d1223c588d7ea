use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
};

use super::{OnVisit, Search, TrackedCell};
use crate::maze::{Coord, Maze};

pub(super) fn solve_dijkstra(
    maze: &mut Maze,
    start: Coord,
    goal: Coord,
    on_visit: OnVisit<'_>,
) -> Search {
    best_first(maze, start, goal, on_visit, |_| 0)
}

/// Best-first search over unit-cost steps, ordered by traveling cost plus `heuristic`.
///
/// With a zero heuristic this is Dijkstra's algorithm. Cells are closed when popped;
/// queue entries for cells that are already closed are stale and skipped.
pub(super) fn best_first(
    maze: &mut Maze,
    start: Coord,
    goal: Coord,
    on_visit: OnVisit<'_>,
    heuristic: impl Fn(Coord) -> usize,
) -> Search {
    let mut search = Search::default();

    // Using Reverse to turn the max-heap into a min-heap
    let mut pq: BinaryHeap<Reverse<TrackedCell>> = BinaryHeap::new();
    let mut order = 0;
    pq.push(Reverse(TrackedCell {
        priority: heuristic(start),
        order,
        coord: start,
        traveling_cost: 0,
    }));

    // Minimum known cost to reach each discovered cell
    let mut costs = HashMap::from([(start, 0)]);
    let mut closed = HashSet::new();

    while let Some(Reverse(current)) = pq.pop() {
        if !closed.insert(current.coord) {
            continue;
        }

        search.expand(maze, current.coord, on_visit);
        if current.coord == goal {
            search.found = true;
            break;
        }

        let new_cost = current.traveling_cost + 1;
        for neighbor in maze.neighbors(current.coord) {
            if closed.contains(&neighbor) {
                continue;
            }
            // Only consider neighbors that we can reach with a lower cost
            let is_cheaper = costs
                .get(&neighbor)
                .is_none_or(|&existing_cost| new_cost < existing_cost);
            if !is_cheaper {
                continue;
            }
            costs.insert(neighbor, new_cost);
            search.parents.insert(neighbor, current.coord);
            order += 1;
            pq.push(Reverse(TrackedCell {
                priority: new_cost + heuristic(neighbor),
                order,
                coord: neighbor,
                traveling_cost: new_cost,
            }));
        }
    }

    search
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Cell;

    #[test]
    fn test_expands_in_cost_order() {
        let mut maze = Maze::new(7, 7).unwrap();
        maze.clear_walls();
        let start = (3, 3);
        let mut distances = Vec::new();
        solve_dijkstra(&mut maze, start, (5, 5), &mut |c: &Cell| {
            distances.push(c.x().abs_diff(start.0) + c.y().abs_diff(start.1));
        });
        assert!(distances.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(distances.last(), Some(&4));
    }

    #[test]
    fn test_equal_costs_pop_in_insertion_order() {
        let mut maze = Maze::new(5, 5).unwrap();
        maze.clear_walls();
        let mut order = Vec::new();
        solve_dijkstra(&mut maze, (2, 2), (1, 1), &mut |c: &Cell| order.push(c.coord()));
        assert_eq!(&order[..5], &[(2, 2), (2, 1), (2, 3), (1, 2), (3, 2)]);
    }

    #[test]
    fn test_never_expands_a_cell_twice() {
        let mut maze = Maze::new(9, 9).unwrap();
        maze.clear_walls();
        let mut seen = HashSet::new();
        let search = solve_dijkstra(&mut maze, (1, 1), (7, 7), &mut |c: &Cell| {
            assert!(seen.insert(c.coord()), "{:?} expanded twice", c.coord());
        });
        assert!(search.found);
        assert_eq!(search.nodes_explored, 49);
    }
}
