//! Probe-sequence arithmetic for open addressing
//!
//! Provides:
//! - Linear, quadratic, and double-hash probe functions (exercise 11.4-1)
//! - Attempt-indexed slot computation
//! - Single hash call with arithmetic offsets (no rehashing!)

use std::fmt;

/// First quadratic probing constant (c₁).
pub const C1: u64 = 1;

/// Second quadratic probing constant (c₂).
///
/// With c₁ = 1 and c₂ = 3 over an arbitrary modulus, the quadratic probe
/// sequence is not guaranteed to visit every slot. That gap is part of the
/// exercise and is deliberately left in place.
pub const C2: u64 = 3;

/// Collision-resolution strategy, fixed at table construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProbeStrategy {
    /// Attempt `i` probes `(h(k) + i) mod m`.
    Linear,
    /// Attempt `i` probes `(h(k) + c₁·i + c₂·i²) mod m`.
    Quadratic,
    /// Attempt `i` probes `(h(k) + i·h₂(k)) mod m` with
    /// `h₂(k) = 1 + (k mod (m − 1))`.
    DoubleHash,
}

impl ProbeStrategy {
    /// Auxiliary hash h(k) = k, reduced into `[0, m)`.
    ///
    /// Euclidean remainder keeps negative keys from producing negative
    /// slot indices.
    #[inline(always)]
    fn hash(key: i64, capacity: usize) -> u64 {
        key.rem_euclid(capacity as i64) as u64
    }

    /// Secondary hash h₂(k) = 1 + (k mod (m − 1)).
    ///
    /// Always non-zero, so the double-hash step never degenerates to
    /// re-probing a single slot. Full coverage additionally needs h₂(k)
    /// coprime to m, which is a property of the chosen capacity.
    #[inline(always)]
    fn hash2(key: i64, capacity: usize) -> u64 {
        1 + key.rem_euclid(capacity as i64 - 1) as u64
    }

    /// Slot probed at `attempt` for `key` in a table of `capacity` slots.
    ///
    /// Intermediate arithmetic is widened to u128 so `c₂·i²` cannot wrap
    /// for any representable capacity. Callers guarantee `capacity >= 2`
    /// (the table constructor enforces it).
    #[inline(always)]
    pub fn slot(self, key: i64, attempt: usize, capacity: usize) -> usize {
        let m = capacity as u128;
        let h = Self::hash(key, capacity) as u128;
        let i = attempt as u128;
        let slot = match self {
            ProbeStrategy::Linear => (h + i) % m,
            ProbeStrategy::Quadratic => (h + C1 as u128 * i + C2 as u128 * i * i) % m,
            ProbeStrategy::DoubleHash => (h + i * Self::hash2(key, capacity) as u128) % m,
        };
        slot as usize
    }

    /// Probe sequence for `key`: the slots visited by attempts `0..capacity`.
    pub fn sequence(self, key: i64, capacity: usize) -> impl Iterator<Item = usize> {
        (0..capacity).map(move |attempt| self.slot(key, attempt, capacity))
    }
}

impl fmt::Display for ProbeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeStrategy::Linear => write!(f, "Linear Probing"),
            ProbeStrategy::Quadratic => write!(f, "Quadratic Probing"),
            ProbeStrategy::DoubleHash => write!(f, "Double Hashing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_sequence() {
        let slots: Vec<usize> = ProbeStrategy::Linear.sequence(22, 11).collect();
        let expected: Vec<usize> = (0..11).map(|i| (22 + i) % 11).collect();
        assert_eq!(slots, expected);
        assert_eq!(slots[0], 0); // 22 mod 11
    }

    #[test]
    fn test_quadratic_sequence_exact() {
        let m = 11;
        let k = 7i64;
        for i in 0..m {
            let expected = ((k as usize) + i + 3 * i * i) % m;
            assert_eq!(ProbeStrategy::Quadratic.slot(k, i, m), expected);
        }
    }

    #[test]
    fn test_double_hash_sequence_exact() {
        let m = 11;
        let k = 37i64;
        let h2 = 1 + (k as usize) % (m - 1);
        for i in 0..m {
            let expected = ((k as usize) + i * h2) % m;
            assert_eq!(ProbeStrategy::DoubleHash.slot(k, i, m), expected);
        }
    }

    #[test]
    fn test_negative_key_normalization() {
        // -7 mod 11 = 4 under Euclidean remainder
        assert_eq!(ProbeStrategy::Linear.slot(-7, 0, 11), 4);
        for strategy in [
            ProbeStrategy::Linear,
            ProbeStrategy::Quadratic,
            ProbeStrategy::DoubleHash,
        ] {
            for i in 0..11 {
                let slot = strategy.slot(-123_456, i, 11);
                assert!(slot < 11);
            }
        }
    }

    #[test]
    fn test_double_hash_step_nonzero() {
        // h2(k) = 1 + (k mod (m - 1)) lies in [1, m - 1], so attempt 1
        // always moves off the initial slot.
        for k in [-50i64, 0, 1, 9, 10, 11, 1008, 1009] {
            let first = ProbeStrategy::DoubleHash.slot(k, 0, 11);
            let second = ProbeStrategy::DoubleHash.slot(k, 1, 11);
            assert_ne!(first, second, "key {} stalled", k);
        }
    }

    #[test]
    fn test_double_hash_full_coverage_prime_capacity() {
        // With m prime, every step 1..m is coprime to m and the sequence
        // visits all slots.
        let m = 11;
        for k in [0i64, 4, 22, 1009] {
            let mut visited: Vec<usize> = ProbeStrategy::DoubleHash.sequence(k, m).collect();
            visited.sort_unstable();
            visited.dedup();
            assert_eq!(visited.len(), m);
        }
    }

    #[test]
    fn test_strategy_display() {
        assert_eq!(ProbeStrategy::Linear.to_string(), "Linear Probing");
        assert_eq!(ProbeStrategy::Quadratic.to_string(), "Quadratic Probing");
        assert_eq!(ProbeStrategy::DoubleHash.to_string(), "Double Hashing");
    }
}
