//! Fixed-capacity open-addressing hash table
//!
//! Provides:
//! - Slot array with Option-discriminated occupancy (no sentinel keys)
//! - Insert/search driven by an interchangeable probe strategy
//! - Per-insert probe counts for instrumentation

use log::{debug, warn};

use crate::error::TableError;
use crate::probe::ProbeStrategy;

/// Open-addressing hash table over integer keys.
///
/// Capacity and probing strategy are fixed at construction; the table never
/// grows and keys are never removed. Each slot moves from empty to filled at
/// most once.
#[derive(Debug)]
pub struct ProbingHashTable {
    /// Slot array; `None` marks an empty slot.
    slots: Vec<Option<i64>>,

    /// Count of filled slots, incremented once per successful insert.
    occupancy: usize,

    /// Probe strategy selected at construction.
    strategy: ProbeStrategy,
}

impl ProbingHashTable {
    /// Create a table with `capacity` empty slots and a fixed strategy.
    ///
    /// # Arguments
    /// * `capacity` - Number of slots (must be at least 2; `capacity - 1`
    ///   appears as a modulus in double hashing)
    /// * `strategy` - Collision-resolution strategy for every subsequent
    ///   insert and search on this table
    pub fn new(capacity: usize, strategy: ProbeStrategy) -> Result<Self, TableError> {
        if capacity <= 1 {
            return Err(TableError::InvalidConfiguration { capacity });
        }

        debug!("created {:?} table with {} slots", strategy, capacity);

        Ok(ProbingHashTable {
            slots: vec![None; capacity],
            occupancy: 0,
            strategy,
        })
    }

    /// Insert `key`, returning the number of occupied slots probed before a
    /// vacancy was found (0 when the first attempt lands).
    ///
    /// Duplicate keys are not detected: a key already present simply counts
    /// as a collision and the probe moves on, so inserting the same key
    /// twice stores it twice. Fails with [`TableError::Overflow`] when
    /// `capacity` attempts all land on occupied slots.
    pub fn insert(&mut self, key: i64) -> Result<usize, TableError> {
        let capacity = self.slots.len();

        for (attempt, slot) in self.strategy.sequence(key, capacity).enumerate() {
            if self.slots[slot].is_none() {
                self.slots[slot] = Some(key);
                self.occupancy += 1;
                return Ok(attempt);
            }
        }

        warn!(
            "probe sequence exhausted for key {} ({:?} table, {} slots, {} filled)",
            key, self.strategy, capacity, self.occupancy
        );
        Err(TableError::Overflow {
            key,
            attempts: capacity,
        })
    }

    /// Find `key`, returning its slot index.
    ///
    /// Probes the same sequence as insert. An empty slot terminates the
    /// search early: with no deletion there are no gaps to probe past, so a
    /// vacancy means the key was never stored along this path.
    pub fn search(&self, key: i64) -> Option<usize> {
        for slot in self.strategy.sequence(key, self.slots.len()) {
            match self.slots[slot] {
                Some(stored) if stored == key => return Some(slot),
                Some(_) => {} // Collision, keep probing
                None => return None,
            }
        }

        None
    }

    /// Read the slot at `index` (`None` means empty).
    pub fn slot(&self, index: usize) -> Result<Option<i64>, TableError> {
        self.slots
            .get(index)
            .copied()
            .ok_or(TableError::OutOfRange {
                index,
                capacity: self.slots.len(),
            })
    }

    /// Count of filled slots.
    pub fn occupancy(&self) -> usize {
        self.occupancy
    }

    /// Get current size (alias for [`occupancy`](Self::occupancy)).
    pub fn len(&self) -> usize {
        self.occupancy
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.occupancy == 0
    }

    /// Get capacity
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Get load factor
    pub fn load_factor(&self) -> f64 {
        self.occupancy as f64 / self.slots.len() as f64
    }

    /// Strategy selected at construction.
    pub fn strategy(&self) -> ProbeStrategy {
        self.strategy
    }

    /// Iterate over filled slots as `(slot_index, key)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.map(|key| (index, key)))
    }
}
