// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tunable search bounds and size limits.
//!
//! The algorithms are exact; these values only bound the linear sweeps that
//! guard against malformed input and the tables allocated for raw integer
//! input. The defaults comfortably cover gap sets with Frobenius numbers in
//! the thousands.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SemigroupError};

/// Largest gap, partition extent or sieve bound accepted by the
/// constructors. Bitsets and sieves are allocated up to this size.
pub const MAX_GAP: i64 = 1 << 24;

/// Default upper bound for the multiplicity scan of a gap set.
pub const DEFAULT_MULTIPLICITY_SEARCH_BOUND: i64 = 10_000;

/// Default multiplier `k` in the Apéry sweep bound `max(2F + n, k * n)`.
pub const DEFAULT_APERY_SWEEP_FACTOR: i64 = 10;

/// Default limit on the modulus of an Apéry set.
pub const DEFAULT_MAX_APERY_MODULUS: i64 = 1 << 20;

/// Bounds used by the sweeping algorithms.
///
/// ```
/// use numerical_semigroups::SemigroupConfig;
///
/// let config = SemigroupConfig {
///     multiplicity_search_bound: 500,
///     ..SemigroupConfig::default()
/// };
/// assert_eq!(config.apery_sweep_factor, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SemigroupConfig {
    /// Largest value tried when scanning `1, 2, 3, ...` for the first non-gap.
    pub multiplicity_search_bound: i64,

    /// Multiplier `k` in the Apéry sweep bound `max(2F + n, k * n)`.
    pub apery_sweep_factor: i64,

    /// Largest modulus accepted by `apery_set`; one slot is allocated per residue.
    pub max_apery_modulus: i64,
}

impl Default for SemigroupConfig {
    fn default() -> Self {
        Self {
            multiplicity_search_bound: DEFAULT_MULTIPLICITY_SEARCH_BOUND,
            apery_sweep_factor: DEFAULT_APERY_SWEEP_FACTOR,
            max_apery_modulus: DEFAULT_MAX_APERY_MODULUS,
        }
    }
}

impl SemigroupConfig {
    /// Upper end of the Apéry sweep for modulus `n` over a semigroup with
    /// Frobenius number `frobenius`.
    ///
    /// # Errors
    ///
    /// [`SemigroupError::Overflow`] if the bound does not fit in an `i64`.
    pub fn apery_sweep_bound(&self, frobenius: i64, n: i64) -> Result<i64> {
        let overflow = SemigroupError::Overflow {
            what: "Apéry sweep bound",
        };
        let from_frobenius = frobenius
            .checked_mul(2)
            .and_then(|f| f.checked_add(n))
            .ok_or(overflow.clone())?;
        let from_factor = self
            .apery_sweep_factor
            .max(1)
            .checked_mul(n)
            .ok_or(overflow)?;
        Ok(from_frobenius.max(from_factor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let config = SemigroupConfig::default();
        assert_eq!(config.multiplicity_search_bound, 10_000);
        assert_eq!(config.apery_sweep_factor, 10);
        assert_eq!(config.max_apery_modulus, 1 << 20);
    }

    #[test]
    fn test_apery_sweep_bound() {
        let config = SemigroupConfig::default();
        // <3,5>: F = 7, so 2F + n = 17 < 10n = 30
        assert_eq!(config.apery_sweep_bound(7, 3), Ok(30));
        // Large Frobenius dominates
        assert_eq!(config.apery_sweep_bound(100, 3), Ok(203));
        // Trivial semigroup
        assert_eq!(config.apery_sweep_bound(-1, 1), Ok(10));
    }

    #[test]
    fn test_apery_sweep_bound_overflow() {
        let config = SemigroupConfig::default();
        let overflow = Err(SemigroupError::Overflow {
            what: "Apéry sweep bound",
        });
        assert_eq!(config.apery_sweep_bound(7, i64::MAX / 4), overflow);
        assert_eq!(config.apery_sweep_bound(i64::MAX / 2, 3), overflow);
    }
}
