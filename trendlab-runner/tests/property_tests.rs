//! Determinism at the runner layer: the same CSV file run through `run()`
//! twice yields the same run_id and the same report, for arbitrary
//! (valid-OHLC) synthetic price paths.

use proptest::prelude::*;
use std::io::Write;
use trendlab_runner::{run, RunConfig};

fn write_csv(steps: &[i32]) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "timestamp,open,high,low,close,volume").unwrap();
    let mut price = 100.0;
    let mut ts = 0i64;
    for &step in steps {
        let open = price;
        price *= 1.0 + (step as f64) / 10_000.0;
        let close = price;
        let (high, low) = if close >= open { (close + 0.05, open - 0.05) } else { (open + 0.05, close - 0.05) };
        writeln!(f, "{ts},{open},{high},{low},{close},{}", 1000.0 + step.unsigned_abs() as f64 * 10.0).unwrap();
        ts += 60;
    }
    f
}

proptest! {
    #[test]
    fn run_id_and_report_are_stable_across_repeated_runs(
        steps in prop::collection::vec(-50i32..50, 5..200)
    ) {
        let f = write_csv(&steps);
        let cfg = RunConfig { data_path: f.path().display().to_string(), ..RunConfig::default() };

        let a = run(&cfg).unwrap();
        let b = run(&cfg).unwrap();

        prop_assert_eq!(a.run_id.clone(), b.run_id.clone());
        prop_assert_eq!(a.run_id, cfg.run_id());
        prop_assert_eq!(a.report.total_trades, b.report.total_trades);
        prop_assert_eq!(a.report.final_equity.to_bits(), b.report.final_equity.to_bits());
    }
}
