//! Orchestration: load bars from CSV, drive the engine bar by bar, assemble
//! the end-of-run report.

use trendlab_core::engine::{Engine, RunReport};

use crate::config::RunConfig;
use crate::error::RunError;
use crate::loader::load_csv;

/// Outcome of a full run: the engine's report plus loader provenance that
/// doesn't belong on `RunReport` itself (which is owned by the core crate
/// and knows nothing about CSV files).
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub run_id: String,
    pub report: RunReport,
    pub skipped_rows: usize,
    pub bar_count: usize,
}

/// Run a full backtest from a `RunConfig`: load the CSV at `config.data_path`,
/// feed every bar through a fresh `Engine`, and return the assembled report.
pub fn run(config: &RunConfig) -> Result<RunOutcome, RunError> {
    let loaded = load_csv(&config.data_path)?;
    let mut engine = Engine::new(config.to_engine_config());

    let mut last_close = 0.0_f64;
    for bar in &loaded.bars {
        engine.on_bar(bar);
        last_close = bar.close;
    }

    let report = engine.report(last_close, 0);
    Ok(RunOutcome {
        run_id: config.run_id(),
        report,
        skipped_rows: loaded.skipped_rows,
        bar_count: loaded.bars.len(),
    })
}
