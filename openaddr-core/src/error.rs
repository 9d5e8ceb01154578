//! Error types for the probing hash table

use thiserror::Error;

/// Errors surfaced by table construction, insertion, and slot reads.
///
/// All errors are reported synchronously to the caller; nothing is retried
/// internally.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Capacity too small for the probe arithmetic (`m - 1` appears as a
    /// modulus in double hashing).
    #[error("invalid capacity {capacity}: table needs at least 2 slots")]
    InvalidConfiguration { capacity: usize },

    /// The key's probe sequence found no vacancy within `attempts` tries.
    ///
    /// The table is not necessarily full: a probe sequence that does not
    /// cover every slot can exhaust its attempts while vacancies remain.
    #[error("hash table overflow: no vacancy for key {key} after {attempts} probe attempts")]
    Overflow { key: i64, attempts: usize },

    /// Slot read outside `[0, capacity)`.
    #[error("slot index {index} out of range for table of {capacity} slots")]
    OutOfRange { index: usize, capacity: usize },
}
