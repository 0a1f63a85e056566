//! Rigid polyomino orientations.
//!
//! A [`Shape`] is one concrete orientation of a present: a list of distinct
//! cell offsets plus the anchor those offsets are relative to. Shapes are
//! placed into an occupancy [`Grid<bool>`] by translating every offset by the
//! target cell.

use polypack_core::{Grid, Location};
use std::collections::HashSet;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// Side length of the square working window every present fits in.
///
/// [`Shape::mirror`] and [`Shape::anchor_normalize`] operate on this window.
pub const WINDOW: usize = 3;

/// Center cell of the working window; orientations rotate about it.
pub const CENTER_PIVOT: Location = Location::new(1, 1);

/// One orientation of a present.
///
/// Equality is set equality of the points: order and anchor are ignored.
#[derive(Debug, Clone)]
pub struct Shape {
    points: Vec<Location>,
    anchor: Location,
}

impl Shape {
    /// Creates a shape from its cell offsets, anchored at the origin.
    ///
    /// Repeated offsets are dropped, keeping the first occurrence.
    pub fn new(points: Vec<Location>) -> Self {
        let mut seen = HashSet::with_capacity(points.len());
        let points = points.into_iter().filter(|p| seen.insert(*p)).collect();
        Self {
            points,
            anchor: Location::ORIGIN,
        }
    }

    /// The cell offsets.
    pub fn points(&self) -> &[Location] {
        &self.points
    }

    /// The anchor the offsets are relative to.
    pub fn anchor(&self) -> Location {
        self.anchor
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.points.len()
    }

    /// Returns this shape rotated 90° about `pivot`.
    pub fn rotate_around(&self, pivot: Location) -> Shape {
        Shape::new(self.points.iter().map(|p| p.rotate_around(pivot)).collect())
    }

    /// Returns this shape reflected across the vertical midline of the
    /// working window: column 0 and column 2 swap, column 1 stays.
    pub fn mirror(&self) -> Shape {
        let last = WINDOW as i32 - 1;
        Shape::new(
            self.points
                .iter()
                .map(|p| match p.col {
                    0 => Location::new(p.row, last),
                    c if c == last => Location::new(p.row, 0),
                    _ => *p,
                })
                .collect(),
        )
    }

    /// Re-bases the points so that the first occupied cell of the working
    /// window (row-major) becomes the origin.
    ///
    /// The shape is drawn into a fresh window at its current anchor. If the
    /// first occupied cell differs from the anchor, every point is shifted by
    /// `anchor - first` and the anchor moves to `first`. Normalizing twice is
    /// a no-op.
    pub fn anchor_normalize(&mut self) {
        let mut window: Grid<bool> = Grid::new(WINDOW, WINDOW);
        self.place_into(&mut window, self.anchor);

        let first = window
            .iter()
            .find(|&(_, &set)| set)
            .map(|(loc, _)| loc)
            .unwrap_or(self.anchor);
        if first == self.anchor {
            return;
        }

        let shift = self.anchor - first;
        for point in &mut self.points {
            *point = *point + shift;
        }
        self.anchor = first;
    }

    /// Consuming form of [`Shape::anchor_normalize`].
    pub fn normalized(mut self) -> Self {
        self.anchor_normalize();
        self
    }

    /// Marks every cell of this shape translated by `at` as occupied.
    ///
    /// Fails if any target cell is occupied or out of bounds; in that case the
    /// cells already marked by this call are cleared again, leaving the grid
    /// exactly as it was.
    pub fn place_into(&self, grid: &mut Grid<bool>, at: Location) -> bool {
        for (placed, point) in self.points.iter().enumerate() {
            let target = *point + at;
            if grid.at(target).copied().unwrap_or(true) {
                for undo in &self.points[..placed] {
                    grid.set_at(*undo + at, false);
                }
                return false;
            }
            grid.set_at(target, true);
        }
        true
    }

    /// Clears every cell of this shape translated by `at`.
    ///
    /// Only valid as the undo of a successful [`Shape::place_into`] at the
    /// same `at`; otherwise it clears cells this shape never set.
    pub fn remove_from(&self, grid: &mut Grid<bool>, at: Location) {
        for point in &self.points {
            grid.set_at(*point + at, false);
        }
    }

    /// Places this shape and returns a guard that removes it again when
    /// dropped, unless [`PlacedShape::keep`] is called.
    ///
    /// The guard dereferences to the grid, so nested placements can be made
    /// through it while it is alive.
    pub fn try_place<'a>(
        &'a self,
        grid: &'a mut Grid<bool>,
        at: Location,
    ) -> Option<PlacedShape<'a>> {
        if self.place_into(grid, at) {
            Some(PlacedShape {
                shape: self,
                grid,
                at,
                kept: false,
            })
        } else {
            None
        }
    }

    fn point_set(&self) -> HashSet<Location> {
        self.points.iter().copied().collect()
    }
}

impl PartialEq for Shape {
    fn eq(&self, other: &Self) -> bool {
        self.points.len() == other.points.len() && self.point_set() == other.point_set()
    }
}

impl Eq for Shape {}

impl fmt::Display for Shape {
    /// Draws the shape inside its working window.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut window: Grid<bool> = Grid::new(WINDOW, WINDOW);
        self.place_into(&mut window, self.anchor);
        write!(f, "{}", window)
    }
}

/// A shape placed into a grid, removed again on drop.
#[derive(Debug)]
pub struct PlacedShape<'a> {
    shape: &'a Shape,
    grid: &'a mut Grid<bool>,
    at: Location,
    kept: bool,
}

impl PlacedShape<'_> {
    /// The cell the shape was placed at.
    pub fn location(&self) -> Location {
        self.at
    }

    /// Leaves the shape in the grid.
    pub fn keep(mut self) {
        self.kept = true;
    }
}

impl Deref for PlacedShape<'_> {
    type Target = Grid<bool>;

    fn deref(&self) -> &Grid<bool> {
        &*self.grid
    }
}

impl DerefMut for PlacedShape<'_> {
    fn deref_mut(&mut self) -> &mut Grid<bool> {
        &mut *self.grid
    }
}

impl Drop for PlacedShape<'_> {
    fn drop(&mut self) {
        if !self.kept {
            self.shape.remove_from(&mut *self.grid, self.at);
        }
    }
}
