//! # polypack 2D
//!
//! Polyomino presents and the exact packing search for rectangular spaces.
//!
//! ## Features
//!
//! - Shapes drawn in a 3×3 working window, with rotation, mirroring and
//!   canonical re-anchoring
//! - Presents carrying every distinct orientation (up to 8)
//! - Backtracking feasibility search with a same-type start carry-forward
//! - Scoped placement guards that undo themselves on every failing path
//!
//! ## Quick Start
//!
//! ```rust
//! use polypack_d2::{Present, Space};
//!
//! // L-tromino
//! let l = Present::from_rows(&["##", "#."]).unwrap();
//! assert_eq!(l.variant_count(), 4);
//!
//! // Two L-trominoes tile a 3x2 rectangle.
//! let catalog = vec![l];
//! let mut space = Space::new(2, 3, vec![2]);
//! assert!(space.fits(&catalog));
//! println!("{}", space);
//! ```
//!
//! ## Search Configuration
//!
//! ```rust
//! use polypack_d2::{Present, SearchConfig, Space, UnitOrder};
//!
//! let catalog = vec![Present::from_rows(&["#"]).unwrap()];
//! let mut space = Space::new(2, 2, vec![4]);
//!
//! let config = SearchConfig::new()
//!     .with_order(UnitOrder::AsDeclared)
//!     .with_carry_forward(false);
//! let report = space.fits_with(&catalog, &config);
//! assert!(report.fits);
//! ```

pub mod present;
pub mod shape;
pub mod space;

// Re-exports
pub use present::{Present, MAX_VARIANTS};
pub use shape::{PlacedShape, Shape, CENTER_PIVOT, WINDOW};
pub use space::Space;
pub use polypack_core::{
    Error, FitReport, Grid, Location, Result, SearchConfig, SearchStats, UnitOrder,
};
