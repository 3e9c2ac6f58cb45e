// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimal generating sets.
//!
//! A positive element is a minimal generator iff it is not the sum of two
//! positive elements. Every minimal generator lies in `[m, F + m]`, where `m`
//! is the multiplicity and `F` the Frobenius number: anything above `F + m`
//! is `m` plus an element.

use super::NumericalSemigroup;
use crate::errors::{Result, SemigroupError};
use crate::gaps::GapSet;
use crate::helpers::{require_positive, require_within_limit, sorted_distinct};

impl NumericalSemigroup {
    /// Check whether `n` is a positive element that is not the sum of two
    /// positive elements.
    pub fn is_minimal_generator(&self, n: i64) -> bool {
        n > 0
            && self.contains(n)
            && !(1..n).any(|a| self.contains(a) && self.contains(n - a))
    }
}

/// Minimal generators of the semigroup with gaps `gaps`, ascending.
///
/// Scans the non-gaps in `[1, F + m]`. The gap set is assumed closed under
/// the semigroup property; for other sets the answer is meaningless.
///
/// # Errors
///
/// [`SemigroupError::NoGenerators`] if nothing survives the scan.
pub fn minimal_generating_set_from_gaps(gaps: &GapSet) -> Result<Vec<i64>> {
    let frobenius = gaps.max().unwrap_or(-1);
    let Some(multiplicity) = (1..=frobenius.max(0) + 1).find(|&n| !gaps.contains(n)) else {
        return Err(SemigroupError::NoGenerators { frobenius });
    };
    let is_member = |n: i64| !gaps.contains(n);
    let upper = (frobenius + multiplicity).max(multiplicity);
    let generators: Vec<i64> = (multiplicity..=upper)
        .filter(|&n| is_member(n))
        .filter(|&n| !(multiplicity..=n / 2).any(|a| is_member(a) && is_member(n - a)))
        .collect();
    if generators.is_empty() {
        return Err(SemigroupError::NoGenerators { frobenius });
    }
    Ok(generators)
}

/// Drop the redundant entries of a generator list.
///
/// A generator survives iff it is not a sum of previously accepted (smaller)
/// generators. The input need not be coprime.
///
/// # Errors
///
/// [`SemigroupError::EmptyGenerators`] or [`SemigroupError::NonPositive`];
/// [`SemigroupError::TooLarge`] if the largest generator exceeds
/// [`MAX_GAP`](crate::config::MAX_GAP), since the sieve spans `[0, largest]`.
pub fn minimal_generating_set_from_generators(generators: &[i64]) -> Result<Vec<i64>> {
    if generators.is_empty() {
        return Err(SemigroupError::EmptyGenerators);
    }
    for &g in generators {
        require_positive("generator", g)?;
    }
    let sorted = sorted_distinct(generators);
    if sorted[0] == 1 {
        return Ok(vec![1]);
    }

    let largest = sorted[sorted.len() - 1];
    let largest = require_within_limit("largest generator", largest)? as usize;
    let mut representable = vec![false; largest + 1];
    representable[0] = true;
    let mut minimal = Vec::new();
    for &g in &sorted {
        let g = g as usize;
        if representable[g] {
            continue;
        }
        minimal.push(g as i64);
        for k in g..=largest {
            if representable[k - g] {
                representable[k] = true;
            }
        }
    }
    Ok(minimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap_set(values: &[i64]) -> GapSet {
        values.iter().copied().collect()
    }

    #[test]
    fn test_from_gaps() {
        assert_eq!(
            minimal_generating_set_from_gaps(&gap_set(&[1, 2, 4, 7])),
            Ok(vec![3, 5])
        );
        assert_eq!(minimal_generating_set_from_gaps(&GapSet::empty()), Ok(vec![1]));
        assert_eq!(minimal_generating_set_from_gaps(&gap_set(&[1])), Ok(vec![2, 3]));
    }

    #[test]
    fn test_from_gaps_beyond_frobenius_plus_one() {
        // <4, 6, 7, 9>: F = 5, yet 7 and 9 are minimal
        assert_eq!(
            minimal_generating_set_from_gaps(&gap_set(&[1, 2, 3, 5])),
            Ok(vec![4, 6, 7, 9])
        );
    }

    #[test]
    fn test_from_generators() {
        assert_eq!(minimal_generating_set_from_generators(&[3, 5, 8]), Ok(vec![3, 5]));
        assert_eq!(
            minimal_generating_set_from_generators(&[10, 6, 15, 16, 12]),
            Ok(vec![6, 10, 15])
        );
        assert_eq!(minimal_generating_set_from_generators(&[7, 1, 3]), Ok(vec![1]));
        // Not coprime: still reduced
        assert_eq!(minimal_generating_set_from_generators(&[4, 6, 8, 10]), Ok(vec![4, 6]));
    }

    #[test]
    fn test_from_generators_errors() {
        assert_eq!(
            minimal_generating_set_from_generators(&[]),
            Err(SemigroupError::EmptyGenerators)
        );
        assert_eq!(
            minimal_generating_set_from_generators(&[3, -1]),
            Err(SemigroupError::NonPositive {
                what: "generator",
                value: -1
            })
        );
        assert_eq!(
            minimal_generating_set_from_generators(&[3, i64::MAX]),
            Err(SemigroupError::TooLarge {
                what: "largest generator",
                value: i64::MAX,
                limit: crate::config::MAX_GAP
            })
        );
        // 1 short-circuits before the sieve
        assert_eq!(minimal_generating_set_from_generators(&[1, i64::MAX]), Ok(vec![1]));
    }

    #[test]
    fn test_is_minimal_generator() {
        let s = NumericalSemigroup::from_generators(&[3, 5]).unwrap();
        assert!(s.is_minimal_generator(3));
        assert!(s.is_minimal_generator(5));
        assert!(!s.is_minimal_generator(6));
        assert!(!s.is_minimal_generator(8));
        assert!(!s.is_minimal_generator(4)); // a gap
        assert!(!s.is_minimal_generator(0));
        assert!(!s.is_minimal_generator(-3));

        let trivial = NumericalSemigroup::trivial();
        assert!(trivial.is_minimal_generator(1));
        assert!(!trivial.is_minimal_generator(2));
    }

    #[test]
    fn test_both_paths_agree() {
        for gens in [vec![3, 5], vec![5, 7, 9], vec![4, 6, 7, 9], vec![6, 10, 15]] {
            let s = NumericalSemigroup::from_generators(&gens).unwrap();
            assert_eq!(minimal_generating_set_from_generators(&gens).unwrap(), s.generators());
        }
    }
}
