use std::hash::{Hash, Hasher};

/// Position of a cell in the maze as `(x, y)`.
pub type Coord = (u8, u8);

/// The four cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Neighbor expansion order. BFS and DFS tie-breaking depends on it.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Moves `coord` by `distance` cells in this direction.
    /// Returns `None` when the step would leave the `u8` range; callers still need to
    /// bounds check against the maze.
    pub fn step(self, coord: Coord, distance: u8) -> Option<Coord> {
        let (x, y) = coord;
        match self {
            Direction::Up => y.checked_sub(distance).map(|y| (x, y)),
            Direction::Down => y.checked_add(distance).map(|y| (x, y)),
            Direction::Left => x.checked_sub(distance).map(|x| (x, y)),
            Direction::Right => x.checked_add(distance).map(|x| (x, y)),
        }
    }
}

/// A single square of the maze.
///
/// `wall` is structural and only changes during loading or generation.
/// `visited` and `on_path` are per-run state cleared by [`Cell::reset`].
/// Two cells are equal when they sit at the same coordinate.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    coord: Coord,
    wall: bool,
    visited: bool,
    on_path: bool,
}

impl Cell {
    pub fn new(coord: Coord) -> Self {
        Cell {
            coord,
            wall: false,
            visited: false,
            on_path: false,
        }
    }

    pub fn coord(&self) -> Coord {
        self.coord
    }

    pub fn x(&self) -> u8 {
        self.coord.0
    }

    pub fn y(&self) -> u8 {
        self.coord.1
    }

    pub fn is_wall(&self) -> bool {
        self.wall
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_on_path(&self) -> bool {
        self.on_path
    }

    pub fn set_wall(&mut self, wall: bool) {
        self.wall = wall;
    }

    pub fn set_visited(&mut self, visited: bool) {
        self.visited = visited;
    }

    pub fn set_on_path(&mut self, on_path: bool) {
        self.on_path = on_path;
    }

    /// Clears the visited and path flags. Wall status is kept.
    pub fn reset(&mut self) {
        self.visited = false;
        self.on_path = false;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}
