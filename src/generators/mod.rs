use std::collections::{HashMap, VecDeque};

use rand::{SeedableRng, rngs::StdRng};

mod prim;
mod recur_backtrack;
mod recur_div;

use prim::randomized_prim;
use recur_backtrack::recursive_backtrack;
use recur_div::recursive_division;

use crate::maze::{Coord, Maze, MazeError};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    /// Long winding corridors.
    #[default]
    RecurBacktrack,
    /// Short branchy dead ends.
    Prim,
    /// Rectangular rooms.
    RecurDiv,
}

impl Generator {
    pub const ALL: [Generator; 3] = [
        Generator::RecurBacktrack,
        Generator::Prim,
        Generator::RecurDiv,
    ];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::Prim => write!(f, "Randomized Prim's Algorithm"),
            Generator::RecurDiv => write!(f, "Recursive Division"),
        }
    }
}

impl std::str::FromStr for Generator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "backtrack" | "recursive-backtracking" => Ok(Generator::RecurBacktrack),
            "prim" | "prims" => Ok(Generator::Prim),
            "division" | "recursive-division" => Ok(Generator::RecurDiv),
            _ => Err(format!(
                "unknown generator {s:?}, expected backtrack, prim or division"
            )),
        }
    }
}

/// Carves a new maze into `maze` in place, then fixes the start at `(1, 1)` and the goal
/// at `(width - 2, height - 2)`, both open and connected to each other.
pub fn generate_maze(maze: &mut Maze, generator: Generator, seed: Option<u64>) {
    tracing::debug!(
        "[generate] {} on {}x{} maze, seed {:?}",
        generator,
        maze.width(),
        maze.height(),
        seed
    );
    maze.clear_start();
    maze.clear_goal();

    let mut rng = get_rng(seed);
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(maze, &mut rng),
        Generator::Prim => randomized_prim(maze, &mut rng),
        Generator::RecurDiv => recursive_division(maze, &mut rng),
    }
    // Carving uses the visited flags as scratch space
    maze.reset();

    let start = (1, 1);
    let goal = (maze.width() - 2, maze.height() - 2);
    // Opening a walled endpoint can join two open cells and close a loop
    maze[start].set_wall(false);
    maze[goal].set_wall(false);
    maze.start = Some(start);
    maze.goal = Some(goal);
    connect(maze, goal, start);
}

/// Builds a new maze of the given size with `generator`.
pub fn generate_perfect_maze(
    width: usize,
    height: usize,
    generator: Generator,
    seed: Option<u64>,
) -> Result<Maze, MazeError> {
    let mut maze = Maze::new(width, height)?;
    generate_maze(&mut maze, generator, seed);
    Ok(maze)
}

/// Joins `from` to the open region containing `to` if they are not connected yet,
/// opening the shortest run of interior wall cells between them.
fn connect(maze: &mut Maze, from: Coord, to: Coord) {
    let region = maze.reachable_from(to);
    if region.contains(&from) {
        return;
    }

    let mut parents: HashMap<Coord, Coord> = HashMap::new();
    let mut queue = VecDeque::from([from]);
    let mut reached = None;
    'search: while let Some(coord) = queue.pop_front() {
        for next in maze.adjacent(coord).collect::<Vec<_>>() {
            if next == from || parents.contains_key(&next) || !maze.is_interior(next) {
                continue;
            }
            parents.insert(next, coord);
            if region.contains(&next) {
                reached = Some(next);
                break 'search;
            }
            queue.push_back(next);
        }
    }

    let Some(mut coord) = reached else {
        return;
    };
    let mut carved = 0;
    while let Some(&parent) = parents.get(&coord) {
        if parent == from {
            break;
        }
        maze[parent].set_wall(false);
        carved += 1;
        coord = parent;
    }
    tracing::debug!(
        "[generate] carved {} cells to connect {:?} with {:?}",
        carved,
        from,
        to
    );
}
