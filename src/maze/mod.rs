pub mod cell;
mod grid;
mod text;

use std::collections::{HashSet, VecDeque};
use std::fmt;

pub use cell::{Cell, Coord, Direction};
use grid::Grid;

/// Errors raised by maze construction, lookup and text parsing.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error(
        "invalid maze dimensions {width}x{height}: both must be between {} and {}",
        Maze::MIN_SIZE,
        Maze::MAX_SIZE
    )]
    InvalidDimensions { width: usize, height: usize },
    #[error("cell ({x}, {y}) is out of bounds")]
    OutOfBounds { x: usize, y: usize },
    #[error("maze text is empty, expected a \"<width> <height>\" header")]
    MissingHeader,
    #[error("invalid maze header: {0:?}")]
    InvalidHeader(String),
    #[error("unexpected end of maze text: expected {expected} rows, found {found}")]
    UnexpectedEof { expected: usize, found: usize },
}

/// A rectangular maze of [`Cell`]s with optional start and goal positions.
///
/// Searches leave visited and path flags behind. Call [`Maze::reset`] between two runs
/// on the same maze; nothing does it automatically.
pub struct Maze {
    grid: Grid,
    pub(crate) start: Option<Coord>,
    pub(crate) goal: Option<Coord>,
}

impl Maze {
    pub const MIN_SIZE: usize = 5;
    pub const MAX_SIZE: usize = 100;

    /// Creates a maze of open cells. Both dimensions must lie in
    /// `MIN_SIZE..=MAX_SIZE`.
    pub fn new(width: usize, height: usize) -> Result<Self, MazeError> {
        let valid = Maze::MIN_SIZE..=Maze::MAX_SIZE;
        if !valid.contains(&width) || !valid.contains(&height) {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        Ok(Maze {
            grid: Grid::new(width as u8, height as u8),
            start: None,
            goal: None,
        })
    }

    pub fn width(&self) -> u8 {
        self.grid.width()
    }

    pub fn height(&self) -> u8 {
        self.grid.height()
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        self.grid.is_in_bounds(coord)
    }

    /// Whether `coord` lies inside the one-cell border.
    pub fn is_interior(&self, coord: Coord) -> bool {
        self.is_in_bounds(coord) && !self.grid.is_boundary(coord)
    }

    pub fn cell(&self, coord: Coord) -> Result<&Cell, MazeError> {
        self.grid.get(coord).ok_or(out_of_bounds(coord))
    }

    pub fn cell_mut(&mut self, coord: Coord) -> Result<&mut Cell, MazeError> {
        self.grid.get_mut(coord).ok_or(out_of_bounds(coord))
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter()
    }

    pub fn set_wall(&mut self, coord: Coord, wall: bool) -> Result<(), MazeError> {
        self.cell_mut(coord)?.set_wall(wall);
        Ok(())
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn goal(&self) -> Option<Coord> {
        self.goal
    }

    pub fn set_start(&mut self, coord: Coord) -> Result<(), MazeError> {
        self.cell(coord)?;
        self.start = Some(coord);
        Ok(())
    }

    pub fn set_goal(&mut self, coord: Coord) -> Result<(), MazeError> {
        self.cell(coord)?;
        self.goal = Some(coord);
        Ok(())
    }

    pub fn clear_start(&mut self) {
        self.start = None;
    }

    pub fn clear_goal(&mut self) {
        self.goal = None;
    }

    /// Open neighbors of `coord` one step away, in `Direction::ALL` order.
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        self.adjacent(coord)
            .filter(|&c| !self.grid[c].is_wall())
            .collect()
    }

    /// Neighbors of `coord` one step away whose visited flag is clear, walls included.
    pub fn unvisited_neighbors(&self, coord: Coord) -> Vec<Coord> {
        self.adjacent(coord)
            .filter(|&c| !self.grid[c].is_visited())
            .collect()
    }

    /// In-bounds cells one step away, in `Direction::ALL` order.
    pub fn adjacent(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        let in_bounds = self.is_in_bounds(coord);
        Direction::ALL
            .into_iter()
            .filter(move |_| in_bounds)
            .filter_map(move |dir| dir.step(coord, 1))
            .filter(|&c| self.is_in_bounds(c))
    }

    /// Clears visited and path flags on every cell. Walls are preserved.
    pub fn reset(&mut self) {
        self.grid.iter_mut().for_each(Cell::reset);
    }

    /// Flags every cell of `path` as on the path.
    pub fn mark_path(&mut self, path: &[Cell]) {
        for cell in path {
            if let Some(c) = self.grid.get_mut(cell.coord()) {
                c.set_on_path(true);
            }
        }
    }

    /// Turns every cell, border included, into a wall.
    pub fn fill_walls(&mut self) {
        self.grid.iter_mut().for_each(|cell| cell.set_wall(true));
    }

    /// Opens every interior cell and walls the one-cell border.
    pub fn clear_walls(&mut self) {
        let (width, height) = (self.width(), self.height());
        self.grid.iter_mut().for_each(|cell| {
            let (x, y) = cell.coord();
            cell.set_wall(x == 0 || y == 0 || x == width - 1 || y == height - 1);
        });
    }

    /// Open cells connected to `from` through open neighbors, `from` included.
    /// Empty if `from` is out of bounds or a wall.
    pub fn reachable_from(&self, from: Coord) -> HashSet<Coord> {
        let mut seen = HashSet::new();
        if self.grid.get(from).is_none_or(Cell::is_wall) {
            return seen;
        }
        let mut queue = VecDeque::from([from]);
        seen.insert(from);
        while let Some(coord) = queue.pop_front() {
            for neighbor in self.neighbors(coord) {
                if seen.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }
        seen
    }
}

fn out_of_bounds(coord: Coord) -> MazeError {
    MazeError::OutOfBounds {
        x: coord.0 as usize,
        y: coord.1 as usize,
    }
}

impl std::ops::Index<Coord> for Maze {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

impl std::ops::IndexMut<Coord> for Maze {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        &mut self.grid[index]
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            for x in 0..self.width() {
                let cell = &self.grid[(x, y)];
                let symbol = if self.start == Some((x, y)) {
                    'S'
                } else if self.goal == Some((x, y)) {
                    'G'
                } else if cell.is_wall() {
                    '#'
                } else if cell.is_on_path() {
                    '*'
                } else if cell.is_visited() {
                    '.'
                } else {
                    ' '
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
