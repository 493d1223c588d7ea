//! Plain-text maze format.
//!
//! The first line holds `<width> <height>`. Each of the next `height` lines holds one row:
//! `#` or `1` is a wall, `S` the start, `G` the goal, and any other character is open.
//! Rows shorter than `width` are open past their end.

use std::str::FromStr;

use super::{Maze, MazeError};

impl Maze {
    /// Parses a maze from the text format. A missing start or goal is allowed and only
    /// logged; the corresponding endpoint stays unset.
    pub fn from_text(text: &str) -> Result<Maze, MazeError> {
        let mut lines = text.lines();
        let header = lines.next().ok_or(MazeError::MissingHeader)?;
        let (width, height) = parse_header(header)?;
        let mut maze = Maze::new(width, height)?;

        for y in 0..height {
            let row = lines.next().ok_or(MazeError::UnexpectedEof {
                expected: height,
                found: y,
            })?;
            for (x, ch) in row.chars().take(width).enumerate() {
                let coord = (x as u8, y as u8);
                match ch {
                    '#' | '1' => maze[coord].set_wall(true),
                    'S' => maze.start = Some(coord),
                    'G' => maze.goal = Some(coord),
                    _ => {}
                }
            }
        }

        if maze.start.is_none() || maze.goal.is_none() {
            tracing::warn!(
                "[text] maze has no {}",
                match (maze.start, maze.goal) {
                    (None, None) => "start or goal",
                    (None, _) => "start",
                    _ => "goal",
                }
            );
        }
        Ok(maze)
    }

    /// Serializes the maze walls and endpoints. Open cells are written as `.`.
    pub fn to_text(&self) -> String {
        let mut out = format!("{} {}\n", self.width(), self.height());
        for y in 0..self.height() {
            for x in 0..self.width() {
                let ch = if self.start == Some((x, y)) {
                    'S'
                } else if self.goal == Some((x, y)) {
                    'G'
                } else if self[(x, y)].is_wall() {
                    '#'
                } else {
                    '.'
                };
                out.push(ch);
            }
            out.push('\n');
        }
        out
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), MazeError> {
    let invalid = || MazeError::InvalidHeader(line.to_string());
    let mut parts = line.split_whitespace();
    let width = parts.next().ok_or_else(invalid)?;
    let height = parts.next().ok_or_else(invalid)?;
    if parts.next().is_some() {
        return Err(invalid());
    }
    let width = width.parse::<usize>().map_err(|_| invalid())?;
    let height = height.parse::<usize>().map_err(|_| invalid())?;
    Ok((width, height))
}

impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Maze::from_text(s)
    }
}
