//! Per-strategy probing experiment
//!
//! Hashes 900 random keys into a 1009-slot table, then inserts 50 novel
//! keys while counting the probes they consume (the exercise 11.4-1 setup).

use std::fmt;

use log::{debug, warn};
use openaddr_core::{ProbeStrategy, ProbingHashTable, TableError};
use rand::Rng;

use crate::keygen::{novel_keys, seed_keys, NOVEL_KEY_COUNT};

/// Slot count of the experiment table (prime, so double hashing covers the
/// whole table).
pub const TABLE_SIZE: usize = 1009;

/// Number of random keys hashed before measurement starts.
pub const SEED_KEY_COUNT: usize = 900;

/// Aggregated result of one strategy run.
#[derive(Clone, Debug, PartialEq)]
pub struct StrategyReport {
    pub strategy: ProbeStrategy,
    /// Filled slots after seeding and the measured batch.
    pub occupancy: usize,
    /// Probes consumed by the measured batch of novel keys.
    pub total_probes: usize,
    /// `total_probes / NOVEL_KEY_COUNT`.
    pub average_probes: f64,
    /// Seed inserts whose probe sequence found no vacancy. Nonzero only
    /// when the strategy's sequence fails to cover the table.
    pub seed_failures: usize,
}

impl fmt::Display for StrategyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.strategy)?;
        writeln!(f, "\t{}", self.occupancy)?;
        writeln!(f, "\tProbe Count for last {}: {}", NOVEL_KEY_COUNT, self.total_probes)?;
        write!(
            f,
            "\tAverage probes for last {}: {}",
            NOVEL_KEY_COUNT, self.average_probes
        )
    }
}

/// Run the full experiment for one strategy.
///
/// Seed-phase overflow is tolerated and counted: the quadratic sequence's
/// incomplete coverage can legitimately find no vacancy, and the original
/// exercise keeps going regardless. Overflow in the measured batch is a
/// hard error, since dropping an insert there would corrupt the probe
/// accounting.
pub fn run_strategy(
    strategy: ProbeStrategy,
    rng: &mut impl Rng,
) -> Result<StrategyReport, TableError> {
    let mut table = ProbingHashTable::new(TABLE_SIZE, strategy)?;

    let mut seed_failures = 0;
    for key in seed_keys(rng, SEED_KEY_COUNT) {
        match table.insert(key) {
            Ok(_) => {}
            Err(TableError::Overflow { key, attempts }) => {
                warn!(
                    "seed key {} found no vacancy in {} attempts ({})",
                    key, attempts, strategy
                );
                seed_failures += 1;
            }
            Err(err) => return Err(err),
        }
    }
    debug!(
        "{}: seeded {} keys, {} failures, occupancy {}",
        strategy,
        SEED_KEY_COUNT,
        seed_failures,
        table.occupancy()
    );

    let mut total_probes = 0;
    for key in novel_keys(rng) {
        total_probes += table.insert(key)?;
    }

    Ok(StrategyReport {
        strategy,
        occupancy: table.occupancy(),
        total_probes,
        average_probes: total_probes as f64 / NOVEL_KEY_COUNT as f64,
        seed_failures,
    })
}
