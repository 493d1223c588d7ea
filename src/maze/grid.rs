use super::cell::{Cell, Coord};

/// Row-major storage for the cells of a maze.
pub struct Grid {
    data: Box<[Cell]>,
    width: u8,
    height: u8,
}

impl Grid {
    /// Allocates `width * height` open cells, each tagged with its own coordinate.
    pub fn new(width: u8, height: u8) -> Self {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new((x, y))))
            .collect::<Vec<_>>()
            .into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn is_boundary(&self, coord: Coord) -> bool {
        let (x, y) = coord;
        x == 0 || y == 0 || x == self.width - 1 || y == self.height - 1
    }

    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u8, y: u8) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, coord: Coord) -> Option<&Cell> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        Some(&self.data[self.ravel_index(coord.0, coord.1)])
    }

    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        if !self.is_in_bounds(coord) {
            return None;
        }
        let idx = self.ravel_index(coord.0, coord.1);
        Some(&mut self.data[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.data.iter_mut()
    }
}

impl std::ops::Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl std::ops::IndexMut<Coord> for Grid {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        let idx = self.ravel_index(index.0, index.1);
        &mut self.data[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_match_position() {
        let grid = Grid::new(6, 5);
        for y in 0..5 {
            for x in 0..6 {
                assert_eq!(grid[(x, y)].coord(), (x, y));
            }
        }
        assert_eq!(grid.iter().count(), 30);
    }

    #[test]
    fn test_boundary() {
        let grid = Grid::new(5, 5);
        assert!(grid.is_boundary((0, 2)));
        assert!(grid.is_boundary((4, 4)));
        assert!(!grid.is_boundary((2, 2)));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(5, 5);
        assert!(grid.get((5, 0)).is_none());
        assert!(grid.get((4, 4)).is_some());
    }
}
