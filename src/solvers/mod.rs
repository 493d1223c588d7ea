use std::collections::HashMap;
use std::time::{Duration, Instant};

mod astar;
mod bfs;
mod dfs;
mod dijkstra;

use crate::maze::{Cell, Coord, Maze, MazeError};
use astar::solve_astar;
use bfs::solve_bfs;
use dfs::solve_dfs;
use dijkstra::solve_dijkstra;

/// Callback invoked once for every cell a solver expands, in expansion order.
pub type OnVisit<'a> = &'a mut dyn FnMut(&Cell);

/// Statistics for a single search run.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PathStats {
    /// Number of steps in the returned path, 0 when no path was found.
    pub path_length: usize,
    /// Number of cells expanded.
    pub nodes_explored: usize,
    pub execution_time: Duration,
}

/// Frontier entry for the priority-queue solvers.
/// Ordered by priority, then by insertion order so equal priorities pop first-in first-out.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct TrackedCell {
    /// Key the queue is ordered on
    priority: usize,
    /// Insertion sequence number
    order: usize,
    /// Coordinates of the cell in the maze
    coord: Coord,
    /// Cost to reach this cell from the start
    traveling_cost: usize,
}

/// Bookkeeping shared by every solver.
#[derive(Default)]
struct Search {
    /// Cell each discovered cell was reached from
    parents: HashMap<Coord, Coord>,
    nodes_explored: usize,
    found: bool,
}

impl Search {
    /// Marks `coord` visited, counts it and notifies the callback.
    fn expand(&mut self, maze: &mut Maze, coord: Coord, on_visit: OnVisit<'_>) {
        maze[coord].set_visited(true);
        self.nodes_explored += 1;
        on_visit(&maze[coord]);
    }

    /// Walks back from `goal` to `start` through the recorded parents.
    fn path(&self, maze: &Maze, start: Coord, goal: Coord) -> Vec<Cell> {
        if !self.found {
            return Vec::new();
        }
        let mut path = vec![maze[goal]];
        let mut current = goal;
        while current != start {
            let Some(&parent) = self.parents.get(&current) else {
                break;
            };
            path.push(maze[parent]);
            current = parent;
        }
        path.reverse();
        path
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solver {
    Bfs,
    Dfs,
    Dijkstra,
    AStar,
}

impl Solver {
    pub const ALL: [Solver; 4] = [Solver::Bfs, Solver::Dfs, Solver::Dijkstra, Solver::AStar];

    /// Searches from `start` to `goal`, marking every expanded cell visited and calling
    /// `on_visit` for it before checking whether it is the goal.
    ///
    /// A missing start or goal yields an empty path and zeroed stats. An unreachable goal
    /// yields an empty path with the explored count filled in. The maze is not reset
    /// first; call [`Maze::reset`] between runs.
    ///
    /// # Errors
    /// `OutOfBounds` if `start` or `goal` is outside the maze.
    pub fn find_path(
        &self,
        maze: &mut Maze,
        start: Option<Coord>,
        goal: Option<Coord>,
        on_visit: Option<OnVisit<'_>>,
    ) -> Result<(Vec<Cell>, PathStats), MazeError> {
        let (Some(start), Some(goal)) = (start, goal) else {
            return Ok((Vec::new(), PathStats::default()));
        };
        maze.cell(start)?;
        maze.cell(goal)?;

        let mut ignore = |_: &Cell| {};
        let on_visit: OnVisit<'_> = match on_visit {
            Some(f) => f,
            None => &mut ignore,
        };

        let timer = Instant::now();
        let search = match self {
            Solver::Bfs => solve_bfs(maze, start, goal, on_visit),
            Solver::Dfs => solve_dfs(maze, start, goal, on_visit),
            Solver::Dijkstra => solve_dijkstra(maze, start, goal, on_visit),
            Solver::AStar => solve_astar(maze, start, goal, on_visit),
        };
        let path = search.path(maze, start, goal);
        let stats = PathStats {
            path_length: path.len().saturating_sub(1),
            nodes_explored: search.nodes_explored,
            execution_time: timer.elapsed(),
        };

        tracing::debug!(
            "[solve] {}: path length {}, {} nodes explored in {:?}",
            self,
            stats.path_length,
            stats.nodes_explored,
            stats.execution_time
        );
        Ok((path, stats))
    }

    /// Runs [`Solver::find_path`] between the maze's own start and goal.
    pub fn solve(&self, maze: &mut Maze) -> Result<(Vec<Cell>, PathStats), MazeError> {
        let (start, goal) = (maze.start(), maze.goal());
        self.find_path(maze, start, goal, None)
    }
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Dijkstra => write!(f, "Dijkstra's Algorithm"),
            Solver::AStar => write!(f, "A* Search"),
        }
    }
}

impl std::str::FromStr for Solver {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bfs" => Ok(Solver::Bfs),
            "dfs" => Ok(Solver::Dfs),
            "dijkstra" => Ok(Solver::Dijkstra),
            "astar" | "a*" => Ok(Solver::AStar),
            _ => Err(format!(
                "unknown solver {s:?}, expected bfs, dfs, dijkstra or astar"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate_perfect_maze};

    /// 7x7 maze with only the border walled.
    fn open_maze() -> Maze {
        let mut maze = Maze::new(7, 7).unwrap();
        maze.clear_walls();
        maze.set_start((1, 1)).unwrap();
        maze.set_goal((5, 5)).unwrap();
        maze
    }

    fn assert_valid_path(maze: &Maze, path: &[Cell]) {
        assert_eq!(path.first().map(Cell::coord), maze.start());
        assert_eq!(path.last().map(Cell::coord), maze.goal());
        for cell in path {
            assert!(!maze[cell.coord()].is_wall(), "{:?} is a wall", cell.coord());
        }
        for pair in path.windows(2) {
            let (a, b) = (pair[0].coord(), pair[1].coord());
            assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1, "{a:?} -> {b:?}");
        }
    }

    #[test]
    fn test_open_maze_path_lengths() {
        for solver in Solver::ALL {
            let mut maze = open_maze();
            let (path, stats) = solver.solve(&mut maze).unwrap();
            assert_valid_path(&maze, &path);
            assert_eq!(stats.path_length, path.len() - 1);
            if solver == Solver::Dfs {
                assert!(stats.path_length >= 8);
            } else {
                assert_eq!(stats.path_length, 8, "{solver}");
            }
        }
    }

    #[test]
    fn test_generated_mazes() {
        for generator in Generator::ALL {
            for seed in 0..4 {
                let mut maze = generate_perfect_maze(31, 25, generator, Some(seed)).unwrap();
                let (_, bfs) = Solver::Bfs.solve(&mut maze).unwrap();
                for solver in Solver::ALL {
                    maze.reset();
                    let (path, stats) = solver.solve(&mut maze).unwrap();
                    assert_valid_path(&maze, &path);
                    assert!(stats.nodes_explored <= 31 * 25);
                    if solver == Solver::Dfs {
                        assert!(stats.path_length >= bfs.path_length);
                    } else {
                        assert_eq!(stats.path_length, bfs.path_length, "{solver} {generator}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_missing_endpoints() {
        for solver in Solver::ALL {
            let mut maze = open_maze();
            let (path, stats) = solver.find_path(&mut maze, None, Some((5, 5)), None).unwrap();
            assert!(path.is_empty());
            assert_eq!(stats, PathStats::default());
            let (path, stats) = solver.find_path(&mut maze, Some((1, 1)), None, None).unwrap();
            assert!(path.is_empty());
            assert_eq!(stats.nodes_explored, 0);
            assert!(maze.cells().all(|c| !c.is_visited()));
        }
    }

    #[test]
    fn test_out_of_bounds_endpoints() {
        let mut maze = open_maze();
        assert_eq!(
            Solver::Bfs
                .find_path(&mut maze, Some((1, 1)), Some((7, 3)), None)
                .err(),
            Some(MazeError::OutOfBounds { x: 7, y: 3 })
        );
    }

    #[test]
    fn test_walled_off_goal() {
        for solver in Solver::ALL {
            let mut maze = open_maze();
            maze.set_wall((4, 5), true).unwrap();
            maze.set_wall((5, 4), true).unwrap();
            let (path, stats) = solver.solve(&mut maze).unwrap();
            assert!(path.is_empty());
            assert_eq!(stats.path_length, 0);
            // 25 interior cells minus the two walls and the goal
            assert_eq!(stats.nodes_explored, 22, "{solver}");
        }
    }

    #[test]
    fn test_start_is_goal() {
        for solver in Solver::ALL {
            let mut maze = open_maze();
            let (path, stats) = solver
                .find_path(&mut maze, Some((3, 3)), Some((3, 3)), None)
                .unwrap();
            assert_eq!(path.len(), 1);
            assert_eq!(stats.path_length, 0);
            assert_eq!(stats.nodes_explored, 1);
        }
    }

    #[test]
    fn test_rerun_after_reset_is_identical() {
        for solver in Solver::ALL {
            let mut maze = generate_perfect_maze(21, 21, Generator::Prim, Some(8)).unwrap();
            let (first, first_stats) = solver.solve(&mut maze).unwrap();
            maze.reset();
            let (second, second_stats) = solver.solve(&mut maze).unwrap();
            let coords = |p: &[Cell]| p.iter().map(Cell::coord).collect::<Vec<_>>();
            assert_eq!(coords(&first), coords(&second));
            assert_eq!(first_stats.nodes_explored, second_stats.nodes_explored);
        }
    }

    #[test]
    fn test_on_visit_matches_exploration() {
        for solver in Solver::ALL {
            let mut maze = open_maze();
            let mut visits = Vec::new();
            let (start, goal) = (maze.start(), maze.goal());
            let (_, stats) = {
                let mut record = |cell: &Cell| {
                    assert!(cell.is_visited());
                    visits.push(cell.coord());
                };
                solver
                    .find_path(&mut maze, start, goal, Some(&mut record as OnVisit<'_>))
                    .unwrap()
            };
            assert_eq!(visits.len(), stats.nodes_explored);
            assert_eq!(visits.first(), Some(&(1, 1)));
            // The goal is reported before the search stops
            assert_eq!(visits.last(), Some(&(5, 5)));
        }
    }

    #[test]
    fn test_mark_path() {
        let mut maze = open_maze();
        let (path, _) = Solver::AStar.solve(&mut maze).unwrap();
        maze.mark_path(&path);
        assert_eq!(maze.cells().filter(|c| c.is_on_path()).count(), 9);
        maze.reset();
        assert!(maze.cells().all(|c| !c.is_on_path()));
    }

    #[test]
    fn test_solver_from_str() {
        assert_eq!("A*".parse::<Solver>(), Ok(Solver::AStar));
        assert_eq!("BFS".parse::<Solver>(), Ok(Solver::Bfs));
        assert!("greedy".parse::<Solver>().is_err());
    }
}
