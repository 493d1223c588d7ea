use rand::{Rng, rngs::StdRng};

use crate::maze::Maze;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Orientation {
    Horizontal,
    Vertical,
}

/// Recursive division into rooms.
///
/// Walls only ever run along even rows or columns and gaps only sit on odd ones, so a
/// later wall can never seal a gap left by an earlier one. Every region at least two
/// cells wide and tall gets a wall, which leaves one-cell corridors joined by single
/// gaps: a spanning tree over the open cells.
pub fn recursive_division(maze: &mut Maze, rng: &mut StdRng) {
    // Clear all walls in the maze, except the boundary walls
    maze.clear_walls();

    let (width, height) = (maze.width() - 2, maze.height() - 2);
    divide(maze, (1, 1), width, height, rng);

    fn divide(maze: &mut Maze, top_left: (u8, u8), width: u8, height: u8, rng: &mut StdRng) {
        if width < 2 || height < 2 {
            return;
        }

        let (x, y) = top_left;

        let orientation = match width.cmp(&height) {
            std::cmp::Ordering::Less => Orientation::Horizontal,
            std::cmp::Ordering::Greater => Orientation::Vertical,
            std::cmp::Ordering::Equal => {
                if rng.random_bool(0.5) {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            }
        };

        match orientation {
            Orientation::Horizontal => {
                // Even rows of the region, including a trailing one on its last row
                let slots = height / 2;
                if slots == 0 {
                    return;
                }
                let y_wall = y + 1 + 2 * rng.random_range(0..slots);
                // Odd column for the hole
                let x_hole = x + 2 * rng.random_range(0..width.div_ceil(2));

                (x..x + width)
                    .filter(|&wx| wx != x_hole)
                    .for_each(|wx| maze[(wx, y_wall)].set_wall(true));

                // Recursively divide the regions above and below the wall
                divide(maze, (x, y), width, y_wall - y, rng);
                divide(maze, (x, y_wall + 1), width, y + height - y_wall - 1, rng);
            }
            Orientation::Vertical => {
                // Even columns of the region, including a trailing one on its last column
                let slots = width / 2;
                if slots == 0 {
                    return;
                }
                let x_wall = x + 1 + 2 * rng.random_range(0..slots);
                // Odd row for the hole
                let y_hole = y + 2 * rng.random_range(0..height.div_ceil(2));

                (y..y + height)
                    .filter(|&wy| wy != y_hole)
                    .for_each(|wy| maze[(x_wall, wy)].set_wall(true));

                // Recursively divide the regions left and right of the wall
                divide(maze, (x, y), x_wall - x, height, rng);
                divide(maze, (x_wall + 1, y), x + width - x_wall - 1, height, rng);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn divided(width: usize, height: usize, seed: u64) -> Maze {
        let mut maze = Maze::new(width, height).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        recursive_division(&mut maze, &mut rng);
        maze
    }

    #[test]
    fn test_odd_cells_stay_open() {
        for seed in 0..10 {
            let maze = divided(15, 11, seed);
            for y in (1..10).step_by(2) {
                for x in (1..14).step_by(2) {
                    assert!(!maze[(x, y)].is_wall(), "seed {seed}: ({x}, {y}) is a wall");
                }
            }
        }
    }

    #[test]
    fn test_interior_is_connected() {
        for seed in 0..10 {
            let maze = divided(16, 12, seed);
            let open = maze.cells().filter(|c| !c.is_wall()).count();
            assert_eq!(maze.reachable_from((1, 1)).len(), open, "seed {seed}");
        }
    }

    #[test]
    fn test_open_cells_form_a_tree() {
        let sizes = [(5, 5), (6, 6), (6, 9), (8, 6), (10, 10), (15, 11), (16, 12), (20, 20)];
        for (width, height) in sizes {
            for seed in 0..5 {
                let maze = divided(width, height, seed);
                let open = maze.cells().filter(|c| !c.is_wall()).count();
                // Count each open edge once, from its upper or left end
                let edges: usize = maze
                    .cells()
                    .filter(|c| !c.is_wall())
                    .map(|c| {
                        let (x, y) = c.coord();
                        [(x + 1, y), (x, y + 1)]
                            .into_iter()
                            .filter(|&next| maze.is_in_bounds(next) && !maze[next].is_wall())
                            .count()
                    })
                    .sum();
                assert_eq!(edges, open - 1, "{width}x{height} seed {seed}");
            }
        }
    }

    #[test]
    fn test_even_sized_maze_has_no_open_square() {
        for seed in 0..10 {
            let maze = divided(6, 6, seed);
            for y in 1..4u8 {
                for x in 1..4u8 {
                    let square = [(x, y), (x + 1, y), (x, y + 1), (x + 1, y + 1)];
                    assert!(
                        square.iter().any(|&c| maze[c].is_wall()),
                        "seed {seed}: open square at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_adds_internal_walls() {
        let maze = divided(9, 9, 4);
        let border = 9 * 4 - 4;
        assert!(maze.cells().filter(|c| c.is_wall()).count() > border);
    }

    #[test]
    fn test_same_seed_same_walls() {
        let a = divided(7, 7, 11);
        let b = divided(7, 7, 11);
        assert!(a.cells().zip(b.cells()).all(|(a, b)| a.is_wall() == b.is_wall()));
    }
}
