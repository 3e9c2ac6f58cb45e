// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Input validation for raw integer arguments.

use crate::config::MAX_GAP;
use crate::errors::{Result, SemigroupError};
use crate::gaps::GapSet;

/// Greatest common divisor of two integers (always non-negative).
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.abs(), b.abs());
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Greatest common divisor of a slice; 0 for an empty slice.
pub fn gcd_all(values: &[i64]) -> i64 {
    values.iter().fold(0, |acc, &v| gcd(acc, v))
}

/// Fail with [`SemigroupError::NonPositive`] unless `value > 0`.
pub fn require_positive(what: &'static str, value: i64) -> Result<i64> {
    if value > 0 {
        Ok(value)
    } else {
        Err(SemigroupError::NonPositive { what, value })
    }
}

/// Fail with [`SemigroupError::TooLarge`] if `value` exceeds [`MAX_GAP`].
pub fn require_within_limit(what: &'static str, value: i64) -> Result<i64> {
    if value <= MAX_GAP {
        Ok(value)
    } else {
        Err(SemigroupError::TooLarge {
            what,
            value,
            limit: MAX_GAP,
        })
    }
}

/// Collect raw gap values into a bitset; each must lie in `[1, MAX_GAP]`.
pub fn require_gaps(values: &[i64]) -> Result<GapSet> {
    for &g in values {
        if g <= 0 {
            return Err(SemigroupError::InvalidGap { value: g });
        }
        require_within_limit("gap", g)?;
    }
    Ok(values.iter().copied().collect())
}

/// Validate a generator list: non-empty, all positive, gcd 1.
pub fn require_coprime(generators: &[i64]) -> Result<()> {
    if generators.is_empty() {
        return Err(SemigroupError::EmptyGenerators);
    }
    for &g in generators {
        require_positive("generator", g)?;
    }
    let d = gcd_all(generators);
    if d != 1 {
        return Err(SemigroupError::NotCoprime {
            generators: generators.to_vec(),
            gcd: d,
        });
    }
    Ok(())
}

/// Sort ascending and drop duplicates.
pub fn sorted_distinct(values: &[i64]) -> Vec<i64> {
    let mut out = values.to_vec();
    out.sort_unstable();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(3, 5), 1);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(-4, 6), 2);
        assert_eq!(gcd_all(&[6, 10, 15]), 1);
        assert_eq!(gcd_all(&[4, 8, 12]), 4);
        assert_eq!(gcd_all(&[]), 0);
    }

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("modulus", 3), Ok(3));
        assert_eq!(
            require_positive("modulus", 0),
            Err(SemigroupError::NonPositive {
                what: "modulus",
                value: 0
            })
        );
    }

    #[test]
    fn test_require_within_limit() {
        assert_eq!(require_within_limit("gap", MAX_GAP), Ok(MAX_GAP));
        assert_eq!(
            require_within_limit("gap", MAX_GAP + 1),
            Err(SemigroupError::TooLarge {
                what: "gap",
                value: MAX_GAP + 1,
                limit: MAX_GAP
            })
        );
    }

    #[test]
    fn test_require_gaps() {
        assert_eq!(require_gaps(&[4, 1, 2, 1]).unwrap().to_vec(), vec![1, 2, 4]);
        assert!(require_gaps(&[]).unwrap().is_empty());
        assert_eq!(
            require_gaps(&[1, 0]),
            Err(SemigroupError::InvalidGap { value: 0 })
        );
        assert_eq!(
            require_gaps(&[1, i64::MAX]),
            Err(SemigroupError::TooLarge {
                what: "gap",
                value: i64::MAX,
                limit: MAX_GAP
            })
        );
    }

    #[test]
    fn test_require_coprime() {
        assert!(require_coprime(&[3, 5]).is_ok());
        assert!(require_coprime(&[6, 10, 15]).is_ok());
        assert_eq!(require_coprime(&[]), Err(SemigroupError::EmptyGenerators));
        assert_eq!(
            require_coprime(&[3, -5]),
            Err(SemigroupError::NonPositive {
                what: "generator",
                value: -5
            })
        );
        assert_eq!(
            require_coprime(&[4, 6]),
            Err(SemigroupError::NotCoprime {
                generators: vec![4, 6],
                gcd: 2
            })
        );
    }

    #[test]
    fn test_sorted_distinct() {
        assert_eq!(sorted_distinct(&[5, 3, 5, 8, 3]), vec![3, 5, 8]);
    }
}
