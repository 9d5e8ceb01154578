//! Probe-count experiment driver for the open-addressing hash table
//!
//! Provides:
//! - Seeded random key generation (reproducible batches)
//! - Per-strategy experiment orchestration
//! - Probe-count report aggregation

pub mod experiment;
pub mod keygen;

pub use experiment::{run_strategy, StrategyReport, SEED_KEY_COUNT, TABLE_SIZE};
pub use keygen::{experiment_rng, novel_keys, seed_keys, NOVEL_KEY_COUNT};
