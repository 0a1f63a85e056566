//! Integer cell coordinates.

use std::fmt;
use std::ops::{Add, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A cell position inside a 2D grid, addressed as (row, column).
///
/// Rows grow downwards and columns grow to the right. Coordinates are signed
/// so that relative offsets (shape points, neighbor steps) share the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Location {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl Location {
    /// The origin `(0, 0)`.
    pub const ORIGIN: Location = Location { row: 0, col: 0 };

    /// Creates a new location.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Converts a row-major linear index into a location for a grid with `cols` columns.
    ///
    /// # Panics
    /// Panics if `cols` is zero.
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self::new((index / cols) as i32, (index % cols) as i32)
    }

    /// Returns the row-major linear index for a grid with `cols` columns.
    ///
    /// Returns `None` for negative coordinates. Upper bounds are not checked here.
    pub fn to_index(self, cols: usize) -> Option<usize> {
        if self.row < 0 || self.col < 0 {
            return None;
        }
        Some(self.row as usize * cols + self.col as usize)
    }

    /// Returns a new location shifted by the given row and column deltas.
    pub const fn translate(self, row_shift: i32, col_shift: i32) -> Self {
        Self::new(self.row + row_shift, self.col + col_shift)
    }

    /// Rotates this location 90° about `pivot`.
    ///
    /// The offset `(dr, dc)` from the pivot becomes `(dc, -dr)`.
    pub fn rotate_around(self, pivot: Location) -> Self {
        let offset = self - pivot;
        Self::new(offset.col, -offset.row) + pivot
    }

    /// The cell directly above.
    pub const fn up(self) -> Self {
        self.translate(-1, 0)
    }

    /// The cell above and to the left.
    pub const fn up_left(self) -> Self {
        self.translate(-1, -1)
    }

    /// The cell above and to the right.
    pub const fn up_right(self) -> Self {
        self.translate(-1, 1)
    }

    /// The cell directly to the left.
    pub const fn left(self) -> Self {
        self.translate(0, -1)
    }

    /// The cell directly to the right.
    pub const fn right(self) -> Self {
        self.translate(0, 1)
    }

    /// The cell directly below.
    pub const fn down(self) -> Self {
        self.translate(1, 0)
    }

    /// The cell below and to the left.
    pub const fn down_left(self) -> Self {
        self.translate(1, -1)
    }

    /// The cell below and to the right.
    pub const fn down_right(self) -> Self {
        self.translate(1, 1)
    }

    /// The eight surrounding cells, clockwise starting from the left:
    /// left, up-left, up, up-right, right, down-right, down, down-left.
    pub const fn neighbors(self) -> [Location; 8] {
        [
            self.left(),
            self.up_left(),
            self.up(),
            self.up_right(),
            self.right(),
            self.down_right(),
            self.down(),
            self.down_left(),
        ]
    }
}

impl Add for Location {
    type Output = Location;

    fn add(self, other: Location) -> Location {
        Location::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for Location {
    type Output = Location;

    fn sub(self, other: Location) -> Location {
        Location::new(self.row - other.row, self.col - other.col)
    }
}

impl From<(i32, i32)> for Location {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic() {
        let a = Location::new(2, 3);
        let b = Location::new(-1, 4);
        assert_eq!(a + b, Location::new(1, 7));
        assert_eq!(a - b, Location::new(3, -1));
        assert_eq!(a.translate(1, -3), Location::new(3, 0));
    }

    #[test]
    fn test_index_conversion() {
        let loc = Location::from_index(7, 3);
        assert_eq!(loc, Location::new(2, 1));
        assert_eq!(loc.to_index(3), Some(7));
        assert_eq!(Location::new(-1, 0).to_index(3), None);
    }

    #[test]
    fn test_rotate_around_pivot() {
        let pivot = Location::new(1, 1);
        // Top-left corner of a 3x3 window goes to the top-right corner.
        assert_eq!(Location::new(0, 0).rotate_around(pivot), Location::new(0, 2));
        assert_eq!(Location::new(0, 2).rotate_around(pivot), Location::new(2, 2));
        assert_eq!(Location::new(2, 2).rotate_around(pivot), Location::new(2, 0));
        assert_eq!(Location::new(2, 0).rotate_around(pivot), Location::new(0, 0));
        assert_eq!(pivot.rotate_around(pivot), pivot);
    }

    #[test]
    fn test_four_rotations_identity() {
        let pivot = Location::new(-3, 5);
        for loc in [Location::new(0, 0), Location::new(7, -2), Location::new(-3, 6)] {
            let mut current = loc;
            for _ in 0..4 {
                current = current.rotate_around(pivot);
            }
            assert_eq!(current, loc);
        }
    }

    #[test]
    fn test_neighbors_order() {
        let center = Location::new(1, 1);
        let neighbors = center.neighbors();
        assert_eq!(neighbors[0], Location::new(1, 0));
        assert_eq!(neighbors[1], Location::new(0, 0));
        assert_eq!(neighbors[2], Location::new(0, 1));
        assert_eq!(neighbors[3], Location::new(0, 2));
        assert_eq!(neighbors[4], Location::new(1, 2));
        assert_eq!(neighbors[5], Location::new(2, 2));
        assert_eq!(neighbors[6], Location::new(2, 1));
        assert_eq!(neighbors[7], Location::new(2, 0));
        assert!(!neighbors.contains(&center));
    }

    #[test]
    fn test_display() {
        assert_eq!(Location::new(3, -1).to_string(), "(3, -1)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_field_names() {
        let loc = Location::new(4, 2);
        let json = serde_json::to_string(&loc).unwrap();
        assert_eq!(json, r#"{"row":4,"col":2}"#);
    }
}
