//! Search outcome representation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters collected while running a feasibility search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Number of search frames entered (one per `(unit, start cell)` visit).
    pub nodes_explored: u64,

    /// Number of orientation placements attempted.
    pub placements_attempted: u64,

    /// Number of successful placements later undone.
    pub backtracks: u64,
}

impl SearchStats {
    /// Creates zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds another set of counters into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes_explored += other.nodes_explored;
        self.placements_attempted += other.placements_attempted;
        self.backtracks += other.backtracks;
    }
}

/// Result of one feasibility search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FitReport {
    /// Whether every required unit was placed.
    pub fits: bool,

    /// Whether the verdict came from the area precheck without searching.
    pub rejected_by_precheck: bool,

    /// Whether the space was rejected as malformed without searching.
    #[cfg_attr(feature = "serde", serde(default))]
    pub invalid: bool,

    /// Search counters.
    pub stats: SearchStats,
}

impl FitReport {
    /// Creates a report for a completed search.
    pub fn searched(fits: bool, stats: SearchStats) -> Self {
        Self {
            fits,
            rejected_by_precheck: false,
            invalid: false,
            stats,
        }
    }

    /// Creates a report for a space rejected before searching.
    pub fn precheck_rejected() -> Self {
        Self {
            fits: false,
            rejected_by_precheck: true,
            invalid: false,
            stats: SearchStats::default(),
        }
    }

    /// Creates a report for a space that names a present type the catalog
    /// lacks.
    pub fn invalid() -> Self {
        Self {
            fits: false,
            rejected_by_precheck: false,
            invalid: true,
            stats: SearchStats::default(),
        }
    }

    /// Whether a search actually ran.
    pub fn was_searched(&self) -> bool {
        !self.rejected_by_precheck && !self.invalid
    }
}
