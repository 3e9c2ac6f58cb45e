// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Gap sets and the capability shared by everything that has one.
//!
//! Both [`NumericalSet`](crate::NumericalSet) and
//! [`NumericalSemigroup`](crate::NumericalSemigroup) are described by a finite
//! set of positive gaps. The [`HasGaps`] trait exposes that set and provides
//! the algorithms that only depend on it, so they are written once.

pub mod gap_set;

pub use gap_set::GapSet;

use crate::config::DEFAULT_MULTIPLICITY_SEARCH_BOUND;
use crate::errors::{Result, SemigroupError};
use crate::helpers::boundary_walk;
use crate::partition::Partition;

/// Anything described by a finite gap set.
pub trait HasGaps {
    /// The gaps as a bitset.
    fn gap_set(&self) -> &GapSet;

    /// Largest gap, or -1 if there are none.
    fn frobenius_number(&self) -> i64;

    /// The gaps in ascending order.
    fn gaps(&self) -> Vec<i64> {
        self.gap_set().to_vec()
    }

    /// Check whether `n` is a gap.
    fn is_gap(&self, n: i64) -> bool {
        self.gap_set().contains(n)
    }

    /// Smallest positive non-gap, scanning up to the default search bound.
    fn multiplicity(&self) -> Result<i64> {
        self.multiplicity_within(DEFAULT_MULTIPLICITY_SEARCH_BOUND)
    }

    /// Smallest positive non-gap, scanning `1..=bound`.
    fn multiplicity_within(&self, bound: i64) -> Result<i64> {
        (1..=bound)
            .find(|&n| !self.is_gap(n))
            .ok_or(SemigroupError::MultiplicityNotFound { bound })
    }

    /// All non-gaps in `[0, F)`, ascending.
    fn small_elements(&self) -> Vec<i64> {
        (0..self.frobenius_number())
            .filter(|&n| !self.is_gap(n))
            .collect()
    }

    /// Values `x` in `[0, 2F]` such that `x + t` is a gap for some non-gap `t <= F`.
    fn atom_monoid_gaps(&self) -> GapSet {
        let frobenius = self.frobenius_number();
        let non_gaps = (0..=frobenius)
            .filter(|&t| !self.is_gap(t))
            .collect::<Vec<_>>();
        (0..=2 * frobenius)
            .filter(|&x| non_gaps.iter().any(|&t| self.is_gap(x + t)))
            .collect()
    }

    /// The partition read off the gap walk (see [`boundary_walk`]).
    fn partition(&self) -> Partition {
        Partition::from_rows(boundary_walk(self.frobenius_number(), |i| {
            self.is_gap(i)
        }))
    }
}

/// First witness `(gap, a, b)` with `a + b = gap` and `a`, `b` positive non-gaps.
///
/// `None` means the complement of `gaps` is closed under addition.
pub(crate) fn closure_violation(gaps: &GapSet) -> Option<(i64, i64, i64)> {
    let frobenius = gaps.max()?;
    for a in 1..=frobenius / 2 {
        if gaps.contains(a) {
            continue;
        }
        for b in a..=frobenius - a {
            if !gaps.contains(b) && gaps.contains(a + b) {
                return Some((a + b, a, b));
            }
        }
    }
    None
}
