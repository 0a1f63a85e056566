//! Packing targets and the exact feasibility search.
//!
//! A [`Space`] owns its occupancy grid and the number of units it needs of
//! each present type. [`Space::fits`] decides whether all of those units can
//! be placed without overlap using a depth-first backtracking search:
//!
//! 1. The counts are expanded into one entry per unit and ordered
//!    (see [`UnitOrder`]).
//! 2. For the unit at `index`, every free cell from `start_at` onwards is
//!    tried with every orientation of the unit's present.
//! 3. A successful placement recurses on `index + 1`. When the next unit is
//!    of the same type it resumes scanning at the current cell, since cells
//!    before it were already rejected for this type.
//! 4. A failed branch undoes its placement before the next alternative.
//!
//! On success the grid holds the witness packing. On failure it is restored
//! to its state before the call.

use crate::present::Present;
use polypack_core::{Error, FitReport, Grid, Result, SearchConfig, SearchStats, UnitOrder};
use std::fmt;

/// One packing target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Space {
    name: String,
    layout: Grid<bool>,
    counts: Vec<usize>,
}

impl Space {
    /// Creates an empty space of `rows × cols` cells requiring `counts[i]`
    /// units of present type `i`.
    pub fn new(rows: usize, cols: usize, counts: Vec<usize>) -> Self {
        Self {
            name: format!("{}x{}", cols, rows),
            layout: Grid::new(rows, cols),
            counts,
        }
    }

    /// Replaces the display name (defaults to `<cols>x<rows>`).
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The occupancy grid.
    pub fn layout(&self) -> &Grid<bool> {
        &self.layout
    }

    /// Required unit count per present type.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of required units.
    pub fn unit_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of unoccupied cells.
    pub fn free_cells(&self) -> usize {
        self.layout.iter().filter(|&(_, &set)| !set).count()
    }

    /// Number of cells the required units cover together.
    ///
    /// Types with no entry in `catalog` are skipped.
    pub fn required_area(&self, catalog: &[Present]) -> usize {
        self.counts
            .iter()
            .zip(catalog)
            .map(|(&count, present)| count * present.area())
            .sum()
    }

    /// Clears every cell, discarding a previous packing.
    pub fn reset(&mut self) {
        self.layout.clear();
    }

    /// Checks that every required present type exists in `catalog`.
    pub fn validate(&self, catalog: &[Present]) -> Result<()> {
        if let Some((index, _)) = self
            .counts
            .iter()
            .enumerate()
            .skip(catalog.len())
            .find(|&(_, &count)| count > 0)
        {
            return Err(Error::InvalidSpace(format!(
                "{} requires present {} but only {} are defined",
                self.name,
                index,
                catalog.len()
            )));
        }
        Ok(())
    }

    /// Expands the counts into one present index per required unit, in
    /// search order.
    ///
    /// Types with no entry in `catalog` are skipped.
    pub fn units(&self, catalog: &[Present], order: UnitOrder) -> Vec<usize> {
        let mut units: Vec<usize> = self
            .counts
            .iter()
            .enumerate()
            .take(catalog.len())
            .flat_map(|(index, &count)| std::iter::repeat(index).take(count))
            .collect();

        match order {
            UnitOrder::AreaAscending => {
                units.sort_by_key(|&index| (catalog[index].area(), index));
            }
            UnitOrder::AsDeclared => {}
        }
        units
    }

    /// Returns true if every required unit can be packed into the space.
    ///
    /// Uses the default [`SearchConfig`]. On success the layout keeps the
    /// packing found; call [`Space::reset`] before searching again.
    pub fn fits(&mut self, catalog: &[Present]) -> bool {
        self.fits_with(catalog, &SearchConfig::default()).fits
    }

    /// Runs the feasibility search with explicit tunables.
    pub fn fits_with(&mut self, catalog: &[Present], config: &SearchConfig) -> FitReport {
        if let Err(e) = self.validate(catalog) {
            log::warn!("{}", e);
            return FitReport::invalid();
        }

        if config.area_precheck && self.required_area(catalog) > self.free_cells() {
            log::debug!(
                "{}: required area {} exceeds {} free cells",
                self.name,
                self.required_area(catalog),
                self.free_cells()
            );
            return FitReport::precheck_rejected();
        }

        let units = self.units(catalog, config.order);
        let mut search = Search {
            catalog,
            units: &units,
            carry_forward: config.carry_forward,
            stats: SearchStats::default(),
        };
        let fits = search.run(&mut self.layout, 0, 0);

        log::debug!(
            "{}: fits={} units={} nodes={} placements={} backtracks={}",
            self.name,
            fits,
            units.len(),
            search.stats.nodes_explored,
            search.stats.placements_attempted,
            search.stats.backtracks
        );
        FitReport::searched(fits, search.stats)
    }

    /// Sizes of the 8-connected regions of free cells, in row-major
    /// discovery order.
    pub fn islands(&self) -> Vec<usize> {
        let mut labels: Grid<usize> = Grid::new(self.layout.rows(), self.layout.cols());
        let mut sizes = Vec::new();
        let mut stack = Vec::new();

        for (start, &set) in self.layout.iter() {
            if set || labels.at(start).copied().unwrap_or(0) != 0 {
                continue;
            }

            let label = sizes.len() + 1;
            let mut size = 0;
            labels.set_at(start, label);
            stack.push(start);

            while let Some(loc) = stack.pop() {
                size += 1;
                for neighbor in loc.neighbors() {
                    let free = self.layout.at(neighbor) == Some(&false);
                    if free && labels.at(neighbor) == Some(&0) {
                        labels.set_at(neighbor, label);
                        stack.push(neighbor);
                    }
                }
            }
            sizes.push(size);
        }
        sizes
    }
}

impl fmt::Display for Space {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for count in &self.counts {
            write!(f, " {}", count)?;
        }
        write!(f, "\n{}", self.layout)
    }
}

/// State of one backtracking run.
struct Search<'a> {
    catalog: &'a [Present],
    units: &'a [usize],
    carry_forward: bool,
    stats: SearchStats,
}

impl Search<'_> {
    fn run(&mut self, grid: &mut Grid<bool>, index: usize, start_at: usize) -> bool {
        self.stats.nodes_explored += 1;

        let Some(&kind) = self.units.get(index) else {
            return true;
        };
        let catalog = self.catalog;
        let present = &catalog[kind];
        let same_next = self.carry_forward && self.units.get(index + 1) == Some(&kind);

        for cell in start_at..grid.len() {
            let loc = grid.location_of(cell);
            if grid.at(loc).copied().unwrap_or(true) {
                continue;
            }

            for shape in present.variants() {
                self.stats.placements_attempted += 1;
                let Some(mut placed) = shape.try_place(grid, loc) else {
                    continue;
                };

                let next_start = if same_next { cell } else { 0 };
                if self.run(&mut placed, index + 1, next_start) {
                    placed.keep();
                    return true;
                }
                self.stats.backtracks += 1;
            }
        }
        false
    }
}
