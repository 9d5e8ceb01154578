//! Open-addressing hash table with interchangeable probing strategies
//!
//! Core library providing:
//! - Fixed-capacity slot array over integer keys
//! - Linear probing, quadratic probing, and double hashing
//! - Single auxiliary hash with arithmetic probe offsets
//! - Per-insert probe counts for experiment instrumentation

pub mod error;
pub mod probe;
pub mod table;

pub use error::TableError;
pub use probe::ProbeStrategy;
pub use table::ProbingHashTable;
