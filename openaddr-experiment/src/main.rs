//! Experiment driver: run all three probing strategies over a 1009-slot
//! table and report probe counts for the measured batch.

use std::process::ExitCode;
use std::sync::Once;

use env_logger::Builder;
use log::{error, info, LevelFilter};
use openaddr_core::ProbeStrategy;
use openaddr_experiment::{experiment_rng, run_strategy};

/// Default RNG seed when none is given on the command line.
const DEFAULT_SEED: u64 = 1009;

static INIT: Once = Once::new();

fn initialize_logger() {
    INIT.call_once(|| {
        let mut builder = Builder::new();
        builder
            .filter_level(LevelFilter::Info)
            .format_timestamp_millis()
            .parse_default_env();
        let _ = builder.try_init();
    });
}

fn main() -> ExitCode {
    initialize_logger();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(DEFAULT_SEED);
    info!("running probing experiments with seed {}", seed);

    let mut rng = experiment_rng(seed);

    // Original exercise order: quadratic, then linear, then double hashing.
    for strategy in [
        ProbeStrategy::Quadratic,
        ProbeStrategy::Linear,
        ProbeStrategy::DoubleHash,
    ] {
        match run_strategy(strategy, &mut rng) {
            Ok(report) => {
                if report.seed_failures > 0 {
                    info!(
                        "{}: {} seed keys found no vacancy",
                        strategy, report.seed_failures
                    );
                }
                println!("{}\n", report);
            }
            Err(err) => {
                error!("{} run failed: {}", strategy, err);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
