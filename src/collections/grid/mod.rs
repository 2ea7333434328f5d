mod coord;

pub use self::coord::Coord;

use std::fmt;
use std::fmt::Display;
use std::ops::{Deref, Index, IndexMut};

/// A value that can be converted to a flat grid index given the grid width
pub trait AsGridIndex: Copy {
    fn as_grid_index(self, width: usize) -> usize;
}

impl AsGridIndex for usize {
    fn as_grid_index(self, _width: usize) -> usize {
        self
    }
}

impl AsGridIndex for Coord {
    fn as_grid_index(self, width: usize) -> usize {
        debug_assert!(self.col() < width);
        self.row() * width + self.col()
    }
}

/// A container of elements laid out in a rectangular grid, stored row by row
#[derive(Clone, Debug, PartialEq)]
pub struct Grid<T> {
    height: usize,
    width: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a new `Grid` with the given dimensions, filled with a specified value
    pub fn with_value(height: usize, width: usize, val: T) -> Grid<T>
    where
        T: Clone,
    {
        Self {
            height,
            width,
            elements: vec![val; height * width],
        }
    }

    /// Create a grid from its rows. Every row must have the same length.
    pub(crate) fn from_rows(rows: Vec<Vec<T>>) -> Grid<T> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|row| row.len() == width));
        Self {
            height,
            width,
            elements: rows.into_iter().flatten().collect(),
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.row() < self.height && coord.col() < self.width
    }

    pub fn coord_at(&self, index: usize) -> Coord {
        assert!(index < self.elements.len());
        Coord::new(index / self.width, index % self.width)
    }

    pub fn index_of(&self, coord: Coord) -> usize {
        coord.as_grid_index(self.width)
    }

    /// Returns an iterator over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.elements.chunks(self.width)
    }

    /// Returns an iterator over every element, paired with its `Coord`
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.elements
            .iter()
            .enumerate()
            .map(move |(i, e)| (self.coord_at(i), e))
    }

    /// Returns an iterator over every `Coord` in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.elements.len()).map(move |i| Coord::new(i / width, i % width))
    }
}

impl<T> Deref for Grid<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.elements
    }
}

impl<T, I: AsGridIndex> Index<I> for Grid<T> {
    type Output = T;

    fn index(&self, index: I) -> &Self::Output {
        &self.elements[index.as_grid_index(self.width)]
    }
}

impl<T, I: AsGridIndex> IndexMut<I> for Grid<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.elements[index.as_grid_index(self.width)]
    }
}

impl<T> Display for Grid<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let len = self
            .elements
            .iter()
            .map(|e| e.to_string().len())
            .max()
            .unwrap_or(0);
        for row in self.rows() {
            for element in row {
                write!(f, "{:>1$} ", element, len)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Coord, Grid};

    #[test]
    fn index_by_coord() {
        let mut grid = Grid::with_value(2, 3, 0);
        grid[Coord::new(1, 2)] = 7;
        assert_eq!(7, grid[5]);
        assert_eq!(Coord::new(1, 2), grid.coord_at(5));
        assert_eq!(5, grid.index_of(Coord::new(1, 2)));
    }

    #[test]
    fn rows_are_width_long() {
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let rows: Vec<&[i32]> = grid.rows().collect();
        assert_eq!(vec![&[1, 2, 3][..], &[4, 5, 6][..]], rows);
        assert!(grid.contains(Coord::new(1, 2)));
        assert!(!grid.contains(Coord::new(2, 0)));
    }

    #[test]
    fn display() {
        let grid = Grid::from_rows(vec![vec![1, 10], vec![2, 3]]);
        assert_eq!(" 1 10 \n 2  3 \n", grid.to_string());
    }
}
