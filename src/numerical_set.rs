// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Numerical sets: subsets of the non-negative integers containing 0 with
//! finite complement.
//!
//! A numerical set is fully described by its gaps. Unlike a numerical
//! semigroup it need not be closed under addition, which is exactly what
//! makes it the right object for the bijection with integer partitions:
//! every partition arises from exactly one numerical set.
//!
//! # Examples
//!
//! ```
//! use numerical_semigroups::{HasGaps, NumericalSet};
//!
//! let set = NumericalSet::new(&[1, 2, 4, 7]).unwrap();
//! assert_eq!(set.frobenius_number(), 7);
//! assert_eq!(set.multiplicity().unwrap(), 3);
//! assert_eq!(set.small_elements(), vec![0, 3, 5, 6]);
//! assert_eq!(set.partition().parts(), &[4, 2, 1, 1]);
//! assert!(set.is_semigroup());
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SemigroupError};
use crate::gaps::{closure_violation, GapSet, HasGaps};
use crate::helpers::require_gaps;
use crate::partition::Partition;

/// A numerical set, stored as its gap set and Frobenius number.
///
/// With the `serde` feature it serializes as its ascending gap list, and
/// deserialization goes through [`NumericalSet::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<i64>", into = "Vec<i64>")
)]
pub struct NumericalSet {
    gaps: GapSet,
    frobenius: i64,
}

impl NumericalSet {
    /// Build a numerical set from gap values (any order, duplicates allowed).
    ///
    /// # Errors
    ///
    /// - [`SemigroupError::InvalidGap`] if a value is zero or negative
    /// - [`SemigroupError::TooLarge`] if a value exceeds [`MAX_GAP`](crate::config::MAX_GAP)
    pub fn new(gaps: &[i64]) -> Result<Self> {
        Ok(Self::from_gap_set(require_gaps(gaps)?))
    }

    /// The numerical set with no gaps (all of ℕ₀).
    pub fn trivial() -> Self {
        Self::from_gap_set(GapSet::empty())
    }

    /// The numerical set whose gap walk gives `partition`.
    pub fn from_partition(partition: &Partition) -> Self {
        Self::from_gap_set(partition.gaps().into_iter().collect())
    }

    /// Caller guarantees 0 is not in `gaps`.
    pub(crate) fn from_gap_set(gaps: GapSet) -> Self {
        let frobenius = gaps.max().unwrap_or(-1);
        Self { gaps, frobenius }
    }

    /// Check whether the set is closed under addition.
    pub fn is_semigroup(&self) -> bool {
        closure_violation(&self.gaps).is_none()
    }

    /// Number of gaps.
    pub fn len(&self) -> usize {
        self.gaps.len()
    }

    /// Check whether the set has no gaps.
    pub fn is_empty(&self) -> bool {
        self.gaps.is_empty()
    }
}

impl HasGaps for NumericalSet {
    fn gap_set(&self) -> &GapSet {
        &self.gaps
    }

    fn frobenius_number(&self) -> i64 {
        self.frobenius
    }
}

impl From<&Partition> for NumericalSet {
    fn from(partition: &Partition) -> Self {
        Self::from_partition(partition)
    }
}

impl TryFrom<Vec<i64>> for NumericalSet {
    type Error = SemigroupError;

    fn try_from(gaps: Vec<i64>) -> Result<Self> {
        Self::new(&gaps)
    }
}

impl From<NumericalSet> for Vec<i64> {
    fn from(set: NumericalSet) -> Self {
        set.gaps.to_vec()
    }
}

impl fmt::Display for NumericalSet {
    /// Format as "NumericalSet{1, 2, 4, 7}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumericalSet{}", self.gaps)
    }
}
