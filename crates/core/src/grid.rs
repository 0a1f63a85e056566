//! Fixed-size, bounds-checked 2D storage.
//!
//! [`Grid`] owns a flat row-major buffer and addresses it through
//! [`Location`]s. Every accessor checks bounds and reports invalid locations
//! through its return value instead of panicking, so callers can probe cells
//! outside the grid (for example while test-placing a shape near an edge).
//!
//! # Example
//!
//! ```rust
//! use polypack_core::{Grid, Location};
//!
//! let mut grid: Grid<bool> = Grid::new(2, 3);
//! assert!(grid.set_at(Location::new(1, 2), true));
//! assert!(!grid.set_at(Location::new(2, 0), true)); // out of bounds
//!
//! let occupied: Vec<Location> = grid
//!     .iter()
//!     .filter(|&(_, &set)| set)
//!     .map(|(loc, _)| loc)
//!     .collect();
//! assert_eq!(occupied, vec![Location::new(1, 2)]);
//! ```

use crate::location::Location;
use std::fmt;

/// A rows × cols matrix of `T` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Default + Clone> Grid<T> {
    /// Creates a grid with every cell set to `T::default()`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![T::default(); rows * cols],
            rows,
            cols,
        }
    }

    /// Resets every cell to `T::default()`.
    pub fn clear(&mut self) {
        self.cells.fill(T::default());
    }
}

impl<T> Grid<T> {
    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns true if `loc` addresses a cell of this grid.
    pub fn valid_location(&self, loc: Location) -> bool {
        loc.row >= 0
            && (loc.row as usize) < self.rows
            && loc.col >= 0
            && (loc.col as usize) < self.cols
    }

    /// Returns the row-major index of `loc`, or `None` if it is out of bounds.
    pub fn index_of(&self, loc: Location) -> Option<usize> {
        if self.valid_location(loc) {
            loc.to_index(self.cols)
        } else {
            None
        }
    }

    /// Returns the location of a row-major index.
    ///
    /// The result is only meaningful for `index < self.len()`.
    pub fn location_of(&self, index: usize) -> Location {
        Location::from_index(index, self.cols.max(1))
    }

    /// Returns the value at `loc`, or `None` if the location is invalid.
    pub fn at(&self, loc: Location) -> Option<&T> {
        self.index_of(loc).map(|i| &self.cells[i])
    }

    /// Stores `value` at `loc`. Returns false (and does nothing) if the
    /// location is invalid.
    pub fn set_at(&mut self, loc: Location, value: T) -> bool {
        match self.index_of(loc) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Replaces the value at `loc` with `update(&current)`.
    ///
    /// Returns false (and does not call `update`) if the location is invalid.
    pub fn update_at<F>(&mut self, loc: Location, update: F) -> bool
    where
        F: FnOnce(&T) -> T,
    {
        match self.index_of(loc) {
            Some(i) => {
                self.cells[i] = update(&self.cells[i]);
                true
            }
            None => false,
        }
    }

    /// Iterates over every cell in row-major order.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> impl Iterator<Item = (Location, &T)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, value)| (Location::from_index(i, cols), value))
    }

    /// Iterates over every cell in column-major order.
    pub fn column_major_iter(&self) -> impl Iterator<Item = (Location, &T)> + '_ {
        (0..self.cols).flat_map(move |c| {
            (0..self.rows).map(move |r| {
                let loc = Location::new(r as i32, c as i32);
                (loc, &self.cells[r * self.cols + c])
            })
        })
    }
}

impl fmt::Display for Grid<bool> {
    /// Renders occupied cells as `#` and free cells as `.`, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.cols.max(1)).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &set in row {
                write!(f, "{}", if set { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_default_initialized() {
        let grid: Grid<i32> = Grid::new(3, 4);
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.len(), 12);
        assert!(grid.iter().all(|(_, &v)| v == 0));
    }

    #[test]
    fn test_valid_location() {
        let grid: Grid<bool> = Grid::new(2, 3);
        assert!(grid.valid_location(Location::new(0, 0)));
        assert!(grid.valid_location(Location::new(1, 2)));
        assert!(!grid.valid_location(Location::new(2, 0)));
        assert!(!grid.valid_location(Location::new(0, 3)));
        assert!(!grid.valid_location(Location::new(-1, 0)));
        assert!(!grid.valid_location(Location::new(0, -1)));
    }

    #[test]
    fn test_at_and_set_at() {
        let mut grid: Grid<u8> = Grid::new(2, 2);
        assert!(grid.set_at(Location::new(1, 0), 7));
        assert_eq!(grid.at(Location::new(1, 0)), Some(&7));
        assert_eq!(grid.at(Location::new(0, 0)), Some(&0));
        assert_eq!(grid.at(Location::new(5, 5)), None);
    }

    #[test]
    fn test_set_at_invalid_is_noop() {
        let mut grid: Grid<u8> = Grid::new(2, 2);
        let before = grid.clone();
        assert!(!grid.set_at(Location::new(-1, 1), 9));
        assert!(!grid.set_at(Location::new(0, 2), 9));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_update_at() {
        let mut grid: Grid<u32> = Grid::new(1, 3);
        assert!(grid.update_at(Location::new(0, 1), |v| v + 5));
        assert!(grid.update_at(Location::new(0, 1), |v| v * 2));
        assert_eq!(grid.at(Location::new(0, 1)), Some(&10));

        let mut called = false;
        assert!(!grid.update_at(Location::new(1, 0), |v| {
            called = true;
            *v
        }));
        assert!(!called);
    }

    #[test]
    fn test_iter_row_major_and_restartable() {
        let mut grid: Grid<usize> = Grid::new(2, 3);
        for i in 0..grid.len() {
            let loc = grid.location_of(i);
            grid.set_at(loc, i);
        }

        let first: Vec<(Location, usize)> = grid.iter().map(|(l, &v)| (l, v)).collect();
        let second: Vec<(Location, usize)> = grid.iter().map(|(l, &v)| (l, v)).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
        assert_eq!(first[0], (Location::new(0, 0), 0));
        assert_eq!(first[2], (Location::new(0, 2), 2));
        assert_eq!(first[3], (Location::new(1, 0), 3));
        assert_eq!(first[5], (Location::new(1, 2), 5));
    }

    #[test]
    fn test_column_major_iter() {
        let mut grid: Grid<usize> = Grid::new(2, 3);
        for i in 0..grid.len() {
            let loc = grid.location_of(i);
            grid.set_at(loc, i);
        }
        let values: Vec<usize> = grid.column_major_iter().map(|(_, &v)| v).collect();
        assert_eq!(values, vec![0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn test_clear() {
        let mut grid: Grid<bool> = Grid::new(2, 2);
        grid.set_at(Location::new(0, 1), true);
        grid.clear();
        assert!(grid.iter().all(|(_, &set)| !set));
    }

    #[test]
    fn test_display_bool_grid() {
        let mut grid: Grid<bool> = Grid::new(2, 3);
        grid.set_at(Location::new(0, 0), true);
        grid.set_at(Location::new(1, 2), true);
        assert_eq!(grid.to_string(), "#..\n..#");
    }

    #[test]
    fn test_empty_grid() {
        let grid: Grid<bool> = Grid::new(0, 0);
        assert!(grid.is_empty());
        assert_eq!(grid.iter().count(), 0);
        assert!(!grid.valid_location(Location::ORIGIN));
    }
}
