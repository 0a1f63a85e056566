//! Search configuration.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Order in which a space's required units are attempted.
///
/// Any deterministic order yields the same feasibility verdict; only the
/// amount of work the search performs changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitOrder {
    /// Smallest presents first, ties broken by present index.
    #[default]
    AreaAscending,
    /// Present index order, exactly as the counts were declared.
    AsDeclared,
}

impl std::fmt::Display for UnitOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AreaAscending => write!(f, "area-ascending"),
            Self::AsDeclared => write!(f, "as-declared"),
        }
    }
}

/// Tunables for the feasibility search.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchConfig {
    /// Unit ordering.
    pub order: UnitOrder,

    /// When the next unit has the same present type as the current one, start
    /// its cell scan at the current unit's cell instead of the first cell.
    pub carry_forward: bool,

    /// Reject a space up front when the required cell count exceeds its free
    /// cell count. Off by default, so a plain search decides every verdict.
    pub area_precheck: bool,

    /// Number of worker threads for multi-space runs (0 = available parallelism).
    pub threads: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            order: UnitOrder::default(),
            carry_forward: true,
            area_precheck: false,
            threads: 0,
        }
    }
}

impl SearchConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the unit ordering.
    pub fn with_order(mut self, order: UnitOrder) -> Self {
        self.order = order;
        self
    }

    /// Enables or disables the same-type start carry-forward.
    pub fn with_carry_forward(mut self, enable: bool) -> Self {
        self.carry_forward = enable;
        self
    }

    /// Enables or disables the area precheck.
    pub fn with_area_precheck(mut self, enable: bool) -> Self {
        self.area_precheck = enable;
        self
    }

    /// Sets the worker thread count (0 = auto).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Resolves the worker count, substituting the machine's available
    /// parallelism for 0.
    pub fn effective_threads(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        const MAX_THREADS: usize = 4096;
        if self.threads > MAX_THREADS {
            return Err(Error::ConfigError(format!(
                "thread count {} exceeds limit {}",
                self.threads, MAX_THREADS
            )));
        }
        Ok(())
    }
}
