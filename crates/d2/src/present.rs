//! Presents and their orientation sets.
//!
//! A [`Present`] is built from the cells of one base drawing inside the 3×3
//! working window. Its variants are the distinct members of the dihedral
//! group orbit of that drawing: four quarter turns about the window center,
//! then four quarter turns of the mirrored drawing. Every variant is
//! anchor-normalized before it is compared, so congruent orientations that
//! land at different window offsets collapse into one.

use crate::shape::{Shape, CENTER_PIVOT, WINDOW};
use polypack_core::{Error, Location, Result};
use std::collections::HashSet;

/// Maximum number of distinct orientations (4 rotations × 2 reflections).
pub const MAX_VARIANTS: usize = 8;

/// A rigid piece and every orientation it may be placed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Present {
    variants: Vec<Shape>,
}

impl Present {
    /// Builds a present from the occupied cells of its base drawing.
    ///
    /// Returns [`Error::InvalidShape`] if `base_points` is empty, contains a
    /// duplicate, or leaves the working window.
    pub fn build(base_points: Vec<Location>) -> Result<Self> {
        validate_points(&base_points)?;

        let base = Shape::new(base_points);
        let mut variants = Vec::with_capacity(MAX_VARIANTS);

        let mut current = base.clone();
        for _ in 0..4 {
            retain_distinct(&mut variants, &current);
            current = current.rotate_around(CENTER_PIVOT);
        }

        let mut current = base.mirror();
        for _ in 0..4 {
            retain_distinct(&mut variants, &current);
            current = current.rotate_around(CENTER_PIVOT);
        }

        Ok(Self { variants })
    }

    /// Builds a present from rows of `#` (occupied) and `.` (free) characters.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let mut points = Vec::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.as_ref().chars().enumerate() {
                match ch {
                    '#' => points.push(Location::new(r as i32, c as i32)),
                    '.' => {}
                    other => {
                        return Err(Error::InvalidShape(format!(
                            "unexpected character '{}' at row {}, column {}",
                            other, r, c
                        )))
                    }
                }
            }
        }
        Self::build(points)
    }

    /// The distinct orientations, in discovery order.
    pub fn variants(&self) -> &[Shape] {
        &self.variants
    }

    /// Number of distinct orientations (1 to [`MAX_VARIANTS`]).
    pub fn variant_count(&self) -> usize {
        self.variants.len()
    }

    /// Number of cells, identical for every orientation.
    pub fn area(&self) -> usize {
        self.variants[0].area()
    }
}

fn validate_points(points: &[Location]) -> Result<()> {
    if points.is_empty() {
        return Err(Error::InvalidShape("present has no cells".to_string()));
    }

    let window = WINDOW as i32;
    let mut seen = HashSet::with_capacity(points.len());
    for &p in points {
        if p.row < 0 || p.row >= window || p.col < 0 || p.col >= window {
            return Err(Error::InvalidShape(format!(
                "cell {} lies outside the {}x{} window",
                p, WINDOW, WINDOW
            )));
        }
        if !seen.insert(p) {
            return Err(Error::InvalidShape(format!("duplicate cell {}", p)));
        }
    }
    Ok(())
}

fn retain_distinct(variants: &mut Vec<Shape>, candidate: &Shape) {
    let candidate = candidate.clone().normalized();
    if !variants.contains(&candidate) {
        variants.push(candidate);
    }
}
