// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Numerical semigroups: cofinite additive submonoids of ℕ₀.
//!
//! A [`NumericalSemigroup`] is produced only by the two factories
//! [`NumericalSemigroup::from_generators`] and [`NumericalSemigroup::from_gaps`]
//! (or the memoizing [`SemigroupContext::semigroup_from_gaps`]). It stores its
//! gap set together with the derived invariants, and never changes afterwards:
//!
//! - `genus == |gaps|`
//! - `frobenius == max(gaps)`, or -1 without gaps
//! - `multiplicity == min(generators)`, the smallest positive element
//! - `embedding_dimension == |generators|`, the generators being minimal
//!
//! Two semigroups are equal iff their gap sets are equal.
//!
//! The algorithms are split over several files, each adding an `impl` block:
//! - `generators`: minimal generating sets
//! - `apery`: Apéry sets (memoized)
//! - `gap_poset`: the gap poset and pseudo-Frobenius numbers
//! - `weights`: weights, Kunz coordinates and related invariants
//! - `special_gaps`: symmetry and special/fundamental/forced gaps
//!
//! [`SemigroupContext::semigroup_from_gaps`]: crate::SemigroupContext::semigroup_from_gaps
//!
//! # Examples
//!
//! ```
//! use numerical_semigroups::{HasGaps, NumericalSemigroup};
//!
//! let s = NumericalSemigroup::from_generators(&[3, 5, 8]).unwrap();
//! assert_eq!(s.generators(), &[3, 5]);
//! assert_eq!(s.gaps(), vec![1, 2, 4, 7]);
//! assert_eq!(s.frobenius_number(), 7);
//! assert_eq!(s.genus(), 4);
//! assert!(s.contains(10));
//! assert!(!s.contains(7));
//! assert_eq!(format!("{}", s), "<3, 5>");
//! ```

pub mod apery;
pub mod gap_poset;
pub mod generators;
pub mod special_gaps;
pub mod weights;

pub use generators::{minimal_generating_set_from_gaps, minimal_generating_set_from_generators};

use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{Result, SemigroupError};
use crate::gaps::{closure_violation, GapSet, HasGaps};
use crate::helpers::{require_coprime, require_gaps, require_within_limit, sorted_distinct};
use crate::numerical_set::NumericalSet;

/// A numerical semigroup with its minimal generators and basic invariants.
///
/// With the `serde` feature it serializes as its ascending gap list; the
/// derived invariants are recomputed by [`NumericalSemigroup::from_gaps`] on
/// deserialization.
#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<i64>", into = "Vec<i64>")
)]
pub struct NumericalSemigroup {
    gaps: GapSet,
    generators: Vec<i64>,
    frobenius: i64,
    genus: usize,
    multiplicity: i64,
    embedding_dimension: usize,
}

impl NumericalSemigroup {
    /// The semigroup generated by `generators`.
    ///
    /// Duplicates and redundant generators are accepted; the stored generators
    /// are the minimal generating set.
    ///
    /// # Errors
    ///
    /// - [`SemigroupError::EmptyGenerators`] for an empty list
    /// - [`SemigroupError::NonPositive`] for a generator `<= 0`
    /// - [`SemigroupError::NotCoprime`] if the gcd is not 1
    /// - [`SemigroupError::Overflow`] if the sieve bound does not fit in an `i64`
    /// - [`SemigroupError::TooLarge`] if the sieve bound exceeds [`MAX_GAP`](crate::config::MAX_GAP)
    pub fn from_generators(generators: &[i64]) -> Result<Self> {
        require_coprime(generators)?;
        let sorted = sorted_distinct(generators);
        let gaps = gaps_from_generators(&sorted)?;
        let minimal = minimal_generating_set_from_gaps(&gaps)?;
        let semigroup = Self::assemble(gaps, minimal);
        debug!(
            input = ?sorted,
            generators = ?semigroup.generators,
            frobenius = semigroup.frobenius,
            genus = semigroup.genus,
            "built semigroup from generators"
        );
        Ok(semigroup)
    }

    /// The semigroup whose gaps are `gaps` (any order, duplicates allowed).
    ///
    /// An empty list gives ℕ₀.
    ///
    /// # Errors
    ///
    /// - [`SemigroupError::InvalidGap`] for a gap `<= 0`
    /// - [`SemigroupError::TooLarge`] for a gap above [`MAX_GAP`](crate::config::MAX_GAP)
    /// - [`SemigroupError::NotClosed`] if the complement is not closed under addition
    pub fn from_gaps(gaps: &[i64]) -> Result<Self> {
        Self::from_gap_set(require_gaps(gaps)?)
    }

    /// ℕ₀ itself: generator 1, no gaps.
    pub fn trivial() -> Self {
        Self::assemble(GapSet::empty(), vec![1])
    }

    /// Build from a bitset of positive gaps, validating closure.
    pub(crate) fn from_gap_set(gaps: GapSet) -> Result<Self> {
        Self::check_closed(&gaps)?;
        let generators = minimal_generating_set_from_gaps(&gaps)?;
        Ok(Self::assemble(gaps, generators))
    }

    pub(crate) fn check_closed(gaps: &GapSet) -> Result<()> {
        if gaps.contains(0) {
            return Err(SemigroupError::InvalidGap { value: 0 });
        }
        match closure_violation(gaps) {
            Some((gap, left, right)) => Err(SemigroupError::NotClosed { gap, left, right }),
            None => Ok(()),
        }
    }

    /// Caller guarantees `gaps` is closed and `generators` is its minimal
    /// generating set, sorted.
    pub(crate) fn assemble(gaps: GapSet, generators: Vec<i64>) -> Self {
        debug_assert!(!generators.is_empty());
        let frobenius = gaps.max().unwrap_or(-1);
        let genus = gaps.len();
        let multiplicity = generators[0];
        let embedding_dimension = generators.len();
        Self {
            gaps,
            generators,
            frobenius,
            genus,
            multiplicity,
            embedding_dimension,
        }
    }

    /// Minimal generators, ascending.
    pub fn generators(&self) -> &[i64] {
        &self.generators
    }

    /// Number of gaps.
    pub fn genus(&self) -> usize {
        self.genus
    }

    /// Smallest positive element.
    pub fn multiplicity(&self) -> i64 {
        self.multiplicity
    }

    /// Number of minimal generators.
    pub fn embedding_dimension(&self) -> usize {
        self.embedding_dimension
    }

    /// Check whether `n` is an element. Negative integers never are.
    pub fn contains(&self, n: i64) -> bool {
        n >= 0 && (n > self.frobenius || !self.gaps.contains(n))
    }

    /// All elements in `[0, n]`, ascending; empty if `n < 0`.
    pub fn elements_up_to(&self, n: i64) -> Vec<i64> {
        (0..=n).filter(|&k| self.contains(k)).collect()
    }

    /// Check whether this is ℕ₀.
    pub fn is_trivial(&self) -> bool {
        self.genus == 0
    }
}

impl HasGaps for NumericalSemigroup {
    fn gap_set(&self) -> &GapSet {
        &self.gaps
    }

    fn frobenius_number(&self) -> i64 {
        self.frobenius
    }

    fn multiplicity_within(&self, bound: i64) -> Result<i64> {
        if self.multiplicity <= bound {
            Ok(self.multiplicity)
        } else {
            Err(SemigroupError::MultiplicityNotFound { bound })
        }
    }
}

impl PartialEq for NumericalSemigroup {
    fn eq(&self, other: &Self) -> bool {
        self.gaps == other.gaps
    }
}

impl Eq for NumericalSemigroup {}

impl Hash for NumericalSemigroup {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.gaps.hash(state);
    }
}

impl TryFrom<NumericalSet> for NumericalSemigroup {
    type Error = SemigroupError;

    fn try_from(set: NumericalSet) -> Result<Self> {
        Self::from_gap_set(set.gap_set().clone())
    }
}

impl TryFrom<Vec<i64>> for NumericalSemigroup {
    type Error = SemigroupError;

    /// Interprets the values as gaps.
    fn try_from(gaps: Vec<i64>) -> Result<Self> {
        Self::from_gaps(&gaps)
    }
}

impl From<NumericalSemigroup> for Vec<i64> {
    fn from(semigroup: NumericalSemigroup) -> Self {
        semigroup.gaps.to_vec()
    }
}

impl From<&NumericalSemigroup> for NumericalSet {
    fn from(semigroup: &NumericalSemigroup) -> Self {
        NumericalSet::from_gap_set(semigroup.gaps.clone())
    }
}

impl fmt::Display for NumericalSemigroup {
    /// Format in generator notation, e.g. "<3, 5>".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, g) in self.generators.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", g)?;
        }
        write!(f, ">")
    }
}

/// Gaps of the semigroup generated by sorted, distinct, coprime `generators`.
fn gaps_from_generators(generators: &[i64]) -> Result<GapSet> {
    match *generators {
        [1, ..] => Ok(GapSet::empty()),
        [a, b] => gaps_of_pair(a, b),
        _ => gaps_by_sweep(generators),
    }
}

/// Two coprime generators `a < b`: every integer `>= ab` is representable,
/// and `ia + jb` with `0 <= i < b`, `0 <= j < a` covers every representable
/// value below `ab`.
fn gaps_of_pair(a: i64, b: i64) -> Result<GapSet> {
    let product = a
        .checked_mul(b)
        .ok_or(SemigroupError::Overflow { what: "a * b" })?;
    require_within_limit("sieve bound a * b", product)?;
    let mut representable = vec![false; product as usize];
    for i in 0..b {
        for j in 0..a {
            let n = i * a + j * b;
            if n < product {
                representable[n as usize] = true;
            }
        }
    }
    let gaps: GapSet = (1..product)
        .filter(|&n| !representable[n as usize])
        .collect();
    debug_assert_eq!(gaps.max(), Some(product - a - b));
    Ok(gaps)
}

/// Coin-problem reachability up to `2 * min * max`, which exceeds the
/// Frobenius number of any generator set.
fn gaps_by_sweep(generators: &[i64]) -> Result<GapSet> {
    let (Some(&smallest), Some(&largest)) = (generators.first(), generators.last()) else {
        return Err(SemigroupError::EmptyGenerators);
    };
    let bound = smallest
        .checked_mul(largest)
        .and_then(|p| p.checked_mul(2))
        .ok_or(SemigroupError::Overflow {
            what: "sieve bound 2 * min * max",
        })?;
    require_within_limit("sieve bound 2 * min * max", bound)?;
    let mut reachable = vec![false; bound as usize + 1];
    reachable[0] = true;
    for n in 1..=bound {
        reachable[n as usize] = generators
            .iter()
            .take_while(|&&g| g <= n)
            .any(|&g| reachable[(n - g) as usize]);
    }
    Ok((1..=bound).filter(|&n| !reachable[n as usize]).collect())
}
