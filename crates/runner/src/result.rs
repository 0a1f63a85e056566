//! Run result types and recording.

use polypack_core::{FitReport, SearchStats};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Outcome of the search on one space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceResult {
    /// Position of the space in the puzzle
    pub index: usize,
    /// Space name (`<cols>x<rows>`)
    pub name: String,
    /// Whether every required unit could be packed
    pub fits: bool,
    /// Whether the area precheck decided the verdict without searching
    pub rejected_by_precheck: bool,
    /// Whether the space named a present type the catalog lacks
    #[serde(default)]
    pub invalid: bool,
    /// Cells the required units cover together
    pub required_area: usize,
    /// Cells in the space
    pub available_area: usize,
    /// required_area / available_area (0.0 for an empty space)
    pub fill_ratio: f64,
    /// Search effort
    pub stats: SearchStats,
    /// Computation time in milliseconds
    pub time_ms: u64,
    /// The witness packing, one `#`/`.` row per line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub packing: Option<String>,
}

impl SpaceResult {
    /// Creates a result from a finished search.
    pub fn new(
        index: usize,
        name: String,
        report: FitReport,
        required_area: usize,
        available_area: usize,
        time_ms: u64,
    ) -> Self {
        let fill_ratio = if available_area > 0 {
            required_area as f64 / available_area as f64
        } else {
            0.0
        };

        Self {
            index,
            name,
            fits: report.fits,
            rejected_by_precheck: report.rejected_by_precheck,
            invalid: report.invalid,
            required_area,
            available_area,
            fill_ratio,
            stats: report.stats,
            time_ms,
            packing: None,
        }
    }

    /// Attaches the rendered packing.
    pub fn with_packing(mut self, packing: String) -> Self {
        self.packing = Some(packing);
        self
    }
}

/// Results of one puzzle run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Per-space results, ordered by index
    pub spaces: Vec<SpaceResult>,
    /// Number of spaces whose units fit
    pub feasible: usize,
    /// Number of spaces tested
    pub total: usize,
    /// Wall time of the whole run in milliseconds
    pub elapsed_ms: u64,
}

impl RunSummary {
    /// Builds a summary, sorting the results by space index.
    pub fn new(mut spaces: Vec<SpaceResult>, elapsed_ms: u64) -> Self {
        spaces.sort_by_key(|r| r.index);
        let feasible = spaces.iter().filter(|r| r.fits).count();
        let total = spaces.len();
        Self {
            spaces,
            feasible,
            total,
            elapsed_ms,
        }
    }

    /// Search effort summed over every space.
    pub fn total_stats(&self) -> SearchStats {
        let mut total = SearchStats::new();
        for space in &self.spaces {
            total.merge(&space.stats);
        }
        total
    }

    /// Saves results to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }

    /// Prints a summary table to stderr.
    pub fn print_summary(&self) {
        eprintln!("\n{:=<80}", "");
        eprintln!("PACKING RESULTS");
        eprintln!("{:=<80}", "");
        eprintln!(
            "{:>5} {:<12} {:>6} {:>10} {:>8} {:>12} {:>10}",
            "#", "Space", "Fits", "Area", "Fill%", "Nodes", "Time(ms)"
        );
        eprintln!("{:-<80}", "");

        for space in &self.spaces {
            let verdict = if space.fits {
                "yes"
            } else if space.invalid {
                "invalid"
            } else if space.rejected_by_precheck {
                "area"
            } else {
                "no"
            };
            eprintln!(
                "{:>5} {:<12} {:>6} {:>10} {:>8.1} {:>12} {:>10}",
                space.index,
                space.name,
                verdict,
                format!("{}/{}", space.required_area, space.available_area),
                space.fill_ratio * 100.0,
                space.stats.nodes_explored,
                space.time_ms
            );
            if let Some(packing) = &space.packing {
                for row in packing.lines() {
                    eprintln!("      {}", row);
                }
            }
        }

        let stats = self.total_stats();
        eprintln!("{:-<80}", "");
        eprintln!(
            "feasible={}/{} nodes={} backtracks={} time={}ms",
            self.feasible, self.total, stats.nodes_explored, stats.backtracks, self.elapsed_ms
        );
        eprintln!("{:=<80}\n", "");
    }
}
