// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integer partitions and their Ferrers diagrams.
//!
//! A partition is a non-increasing sequence of positive parts. It is the
//! third face of a numerical set: the gap walk of
//! [`HasGaps::partition`](crate::HasGaps::partition) produces one, and
//! [`Partition::gaps`] inverts it exactly.
//!
//! Conjugates and hook-length tables are memoized in a
//! [`SemigroupContext`], keyed by the parts.
//!
//! # Examples
//!
//! ```
//! use numerical_semigroups::{Partition, SemigroupContext};
//!
//! let mut ctx = SemigroupContext::new();
//! let p = Partition::new(&[1, 4, 2, 1]).unwrap();
//!
//! assert_eq!(p.parts(), &[4, 2, 1, 1]);
//! assert_eq!(p.gaps(), vec![1, 2, 4, 7]);
//! assert_eq!(p.conjugate(&mut ctx).parts(), &[4, 2, 1, 1]);
//! assert!(p.is_semigroup(&mut ctx));
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::context::SemigroupContext;
use crate::errors::{Result, SemigroupError};
use crate::helpers::{boundary_walk, require_within_limit};
use crate::numerical_set::NumericalSet;

/// A unit step along the boundary of a Ferrers diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Horizontal step, `(1, 0)`.
    Right,
    /// Vertical step, `(0, 1)`.
    Up,
}

impl Step {
    /// The step as a lattice vector.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Step::Right => (1, 0),
            Step::Up => (0, 1),
        }
    }
}

/// An integer partition, parts sorted in non-increasing order.
///
/// Equality and hashing are defined on the parts. With the `serde` feature a
/// partition serializes as its parts, and deserialization goes through
/// [`Partition::new`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<i64>", into = "Vec<i64>")
)]
pub struct Partition {
    parts: Vec<i64>,
}

impl Partition {
    /// Build a partition from parts in any order.
    ///
    /// # Errors
    ///
    /// - [`SemigroupError::InvalidPart`] if a part is zero or negative
    /// - [`SemigroupError::TooLarge`] if the largest gap, `largest_part + len - 1`,
    ///   exceeds [`MAX_GAP`](crate::config::MAX_GAP)
    pub fn new(parts: &[i64]) -> Result<Self> {
        if let Some(&bad) = parts.iter().find(|&&p| p <= 0) {
            return Err(SemigroupError::InvalidPart { value: bad });
        }
        let mut parts = parts.to_vec();
        parts.sort_unstable_by(|a, b| b.cmp(a));
        if let Some(&largest) = parts.first() {
            require_within_limit("partition part", largest)?;
            let frobenius = largest + parts.len() as i64 - 1;
            require_within_limit("partition Frobenius number", frobenius)?;
        }
        Ok(Self { parts })
    }

    /// The empty partition.
    pub fn empty() -> Self {
        Self { parts: Vec::new() }
    }

    /// Rows already sorted largest first, all positive.
    pub(crate) fn from_rows(rows: Vec<i64>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0] >= w[1]));
        debug_assert!(rows.iter().all(|&r| r > 0));
        Self { parts: rows }
    }

    /// The parts, largest first.
    pub fn parts(&self) -> &[i64] {
        &self.parts
    }

    /// Number of parts.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Check whether there are no parts.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Sum of the parts (number of cells in the diagram).
    pub fn size(&self) -> i64 {
        self.parts.iter().sum()
    }

    /// Largest part, or 0 for the empty partition.
    pub fn largest_part(&self) -> i64 {
        self.parts.first().copied().unwrap_or(0)
    }

    /// Inverse of the gap walk: the `i`-th smallest part `x` (0-indexed) is
    /// the gap `x + i`.
    pub fn gaps(&self) -> Vec<i64> {
        self.parts
            .iter()
            .rev()
            .enumerate()
            .map(|(i, &x)| x + i as i64)
            .collect()
    }

    /// The numerical set whose gap walk gives this partition.
    pub fn to_numerical_set(&self) -> NumericalSet {
        NumericalSet::from_partition(self)
    }

    /// Boundary of the diagram from the bottom-left corner, smallest row
    /// first: one step per integer in `[0, F]` of the gap walk.
    pub fn steps(&self) -> Vec<Step> {
        let gaps = self.gaps();
        let Some(&frobenius) = gaps.last() else {
            return Vec::new();
        };
        let mut next_gap = gaps.iter().peekable();
        (0..=frobenius)
            .map(|i| {
                if next_gap.next_if_eq(&&i).is_some() {
                    Step::Up
                } else {
                    Step::Right
                }
            })
            .collect()
    }

    /// [`Partition::steps`] as `(1, 0)` / `(0, 1)` vectors.
    ///
    /// The length is `largest_part() + len()`, the number of boundary steps,
    /// not the cell count `size()`.
    pub fn profile(&self) -> Vec<(i64, i64)> {
        self.steps().into_iter().map(Step::delta).collect()
    }

    /// Transpose of the Ferrers diagram (memoized).
    pub fn conjugate(&self, ctx: &mut SemigroupContext) -> Partition {
        Partition::from_rows(ctx.conjugate_of(&self.parts))
    }

    /// Hook length of every cell, row by row (memoized).
    pub fn hook_lengths(&self, ctx: &mut SemigroupContext) -> Vec<Vec<i64>> {
        ctx.hook_lengths_of(&self.parts)
    }

    /// Every hook length, rows concatenated; duplicates are kept.
    pub fn atom_monoid_gaps(&self, ctx: &mut SemigroupContext) -> Vec<i64> {
        crate::helpers::flatten(&self.hook_lengths(ctx))
    }

    /// The partition obtained by running the gap walk over the hook lengths.
    pub fn atom_partition(&self, ctx: &mut SemigroupContext) -> Partition {
        let mut hooks = self.atom_monoid_gaps(ctx);
        hooks.sort_unstable();
        hooks.dedup();
        let frobenius = hooks.last().copied().unwrap_or(-1);
        Partition::from_rows(boundary_walk(frobenius, |i| {
            hooks.binary_search(&i).is_ok()
        }))
    }

    /// Check whether the hook lengths regenerate this partition, which holds
    /// exactly for partitions of numerical semigroups.
    pub fn is_semigroup(&self, ctx: &mut SemigroupContext) -> bool {
        self.atom_partition(ctx) == *self
    }
}

impl TryFrom<Vec<i64>> for Partition {
    type Error = SemigroupError;

    fn try_from(parts: Vec<i64>) -> Result<Self> {
        Self::new(&parts)
    }
}

impl From<Partition> for Vec<i64> {
    fn from(partition: Partition) -> Self {
        partition.parts
    }
}

impl fmt::Display for Partition {
    /// Format as "(4, 2, 1, 1)".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", part)?;
        }
        write!(f, ")")
    }
}
