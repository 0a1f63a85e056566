//! # polypack Core
//!
//! Foundational types shared by the polypack crates.
//!
//! ## Core Components
//!
//! - **Coordinates**: [`Location`] - signed (row, column) cell positions with
//!   translation, 90° rotation about a pivot and 8-neighbor stepping
//! - **Storage**: [`Grid`] - fixed-size, bounds-checked row-major 2D storage
//! - **Configuration**: [`SearchConfig`], [`UnitOrder`] - feasibility search tunables
//! - **Results**: [`FitReport`], [`SearchStats`] - search verdicts and counters
//! - **Errors**: [`Error`], [`Result`]
//!
//! ## Configuration
//!
//! ```rust
//! use polypack_core::{SearchConfig, UnitOrder};
//!
//! let config = SearchConfig::new()
//!     .with_order(UnitOrder::AreaAscending)
//!     .with_carry_forward(true)
//!     .with_threads(4);
//! assert_eq!(config.effective_threads(), 4);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod grid;
pub mod location;
pub mod result;
pub mod solver;

// Re-exports
pub use error::{Error, Result};
pub use grid::Grid;
pub use location::Location;
pub use result::{FitReport, SearchStats};
pub use solver::{SearchConfig, UnitOrder};
