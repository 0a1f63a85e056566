//! Concurrent driver over the spaces of a puzzle.
//!
//! Every space is an independent search. Each one becomes a task on a rayon
//! pool; the task owns its space, borrows the catalog read-only and reports
//! back with a single message on an mpsc channel.

use crate::parser::Puzzle;
use crate::result::{RunSummary, SpaceResult};
use instant::Instant;
use polypack_core::{Error, Result, SearchConfig};
use polypack_d2::{Present, Space};
use rayon::ThreadPoolBuilder;
use std::sync::mpsc;

/// Configuration for puzzle runs.
#[derive(Debug, Clone, Default)]
pub struct RunnerConfig {
    /// Search tunables, including the worker count.
    pub search: SearchConfig,
    /// Whether to keep the rendered witness packing of each feasible space.
    pub render: bool,
}

impl RunnerConfig {
    /// Creates a new runner configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search tunables.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Sets the worker count (0 = one per available core).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.search.threads = threads;
        self
    }

    /// Keeps the rendered packing of each feasible space.
    pub fn with_render(mut self, render: bool) -> Self {
        self.render = render;
        self
    }
}

/// Puzzle runner.
pub struct Runner {
    config: RunnerConfig,
}

impl Runner {
    /// Creates a new runner.
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Tests every space of the puzzle and collects the results.
    pub fn run(&self, puzzle: Puzzle) -> Result<RunSummary> {
        let Puzzle { presents, spaces } = puzzle;
        if spaces.is_empty() {
            log::warn!("puzzle defines no spaces");
        }

        let start = Instant::now();
        let results = self.evaluate(&presents, spaces)?;
        let summary = RunSummary::new(results, start.elapsed().as_millis() as u64);

        log::info!(
            "{}/{} spaces feasible in {}ms",
            summary.feasible,
            summary.total,
            summary.elapsed_ms
        );
        Ok(summary)
    }

    /// Counts the spaces whose required units fit.
    pub fn count_feasible(&self, catalog: &[Present], spaces: Vec<Space>) -> Result<usize> {
        let results = self.evaluate(catalog, spaces)?;
        Ok(results.iter().filter(|r| r.fits).count())
    }

    fn evaluate(&self, catalog: &[Present], spaces: Vec<Space>) -> Result<Vec<SpaceResult>> {
        let search = &self.config.search;
        search.validate()?;

        let threads = search.effective_threads();
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| Error::Internal(format!("failed to build worker pool: {}", e)))?;
        log::debug!("testing {} spaces on {} threads", spaces.len(), threads);

        let total = spaces.len();
        let render = self.config.render;
        let (tx, rx) = mpsc::channel();

        pool.scope(move |scope| {
            for (index, space) in spaces.into_iter().enumerate() {
                let tx = tx.clone();
                scope.spawn(move |_| {
                    let result = evaluate_space(index, space, catalog, search, render);
                    // The receiver outlives the scope.
                    let _ = tx.send(result);
                });
            }
        });

        let results: Vec<SpaceResult> = rx.iter().collect();
        if results.len() != total {
            return Err(Error::Internal(format!(
                "{} of {} spaces reported a result",
                results.len(),
                total
            )));
        }
        Ok(results)
    }
}

fn evaluate_space(
    index: usize,
    mut space: Space,
    catalog: &[Present],
    config: &SearchConfig,
    render: bool,
) -> SpaceResult {
    let start = Instant::now();
    let report = space.fits_with(catalog, config);
    let elapsed = start.elapsed().as_millis() as u64;

    let result = SpaceResult::new(
        index,
        space.name().to_string(),
        report,
        space.required_area(catalog),
        space.layout().len(),
        elapsed,
    );

    if render && report.fits {
        result.with_packing(space.layout().to_string())
    } else {
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::PuzzleParser;
    use approx::assert_relative_eq;

    fn catalog() -> Vec<Present> {
        vec![
            Present::from_rows(&["#"]).unwrap(),
            Present::from_rows(&["##", "#."]).unwrap(),
        ]
    }

    fn spaces() -> Vec<Space> {
        vec![
            Space::new(2, 2, vec![4, 0]),
            Space::new(2, 2, vec![5, 0]),
            Space::new(2, 3, vec![0, 2]),
            Space::new(1, 6, vec![0, 2]),
            Space::new(3, 3, vec![3, 2]),
        ]
    }

    #[test]
    fn test_count_matches_sequential() {
        let catalog = catalog();
        let sequential = spaces()
            .into_iter()
            .filter(|space| space.clone().fits(&catalog))
            .count();

        for threads in [1, 2, 0] {
            let runner = Runner::new(RunnerConfig::new().with_threads(threads));
            assert_eq!(
                runner.count_feasible(&catalog, spaces()).unwrap(),
                sequential
            );
        }
        assert_eq!(sequential, 3);
    }

    #[test]
    fn test_run_summary_in_index_order() {
        let puzzle = Puzzle {
            presents: catalog(),
            spaces: spaces(),
        };
        let search = SearchConfig::new().with_area_precheck(true).with_threads(3);
        let summary = Runner::new(RunnerConfig::new().with_search(search))
            .run(puzzle)
            .unwrap();

        assert_eq!(summary.total, 5);
        assert_eq!(summary.feasible, 3);
        let verdicts: Vec<bool> = summary.spaces.iter().map(|r| r.fits).collect();
        assert_eq!(verdicts, vec![true, false, true, false, true]);

        let first = &summary.spaces[0];
        assert_eq!(first.index, 0);
        assert_eq!(first.name, "2x2");
        assert_relative_eq!(first.fill_ratio, 1.0);
        assert!(summary.spaces[1].rejected_by_precheck);
    }

    #[test]
    fn test_render_keeps_witness() {
        let puzzle = Puzzle {
            presents: catalog(),
            spaces: spaces(),
        };
        let summary = Runner::new(RunnerConfig::new().with_render(true))
            .run(puzzle)
            .unwrap();

        assert_eq!(summary.spaces[0].packing.as_deref(), Some("##\n##"));
        assert_eq!(summary.spaces[2].packing.as_deref(), Some("###\n###"));
        assert!(summary.spaces[1].packing.is_none());
    }

    #[test]
    fn test_empty_puzzle() {
        let puzzle = PuzzleParser::new().parse_str("0:\n#\n").unwrap();
        let summary = Runner::new(RunnerConfig::new()).run(puzzle).unwrap();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.feasible, 0);
    }

    #[test]
    fn test_unknown_present_type_reported_invalid() {
        let summary = Runner::new(RunnerConfig::new())
            .run(Puzzle {
                presents: catalog(),
                spaces: vec![Space::new(2, 2, vec![0, 0, 1])],
            })
            .unwrap();
        assert_eq!(summary.feasible, 0);
        assert!(summary.spaces[0].invalid);
        assert!(!summary.spaces[0].rejected_by_precheck);
    }

    #[test]
    fn test_rejects_invalid_config() {
        let runner = Runner::new(RunnerConfig::new().with_threads(100_000));
        let err = runner.count_feasible(&catalog(), spaces()).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
