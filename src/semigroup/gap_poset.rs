// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The gap poset and pseudo-Frobenius numbers.
//!
//! Gaps are ordered by `g1 <= g2` iff `g2 - g1` is an element of the
//! semigroup. The maximal gaps under this order are the pseudo-Frobenius
//! numbers (voids); the Frobenius number is always one of them.

use super::NumericalSemigroup;
use crate::errors::Result;
use crate::poset::Poset;

impl NumericalSemigroup {
    /// The gaps ordered by membership of their differences.
    pub fn gap_poset(&self) -> Result<Poset<i64>> {
        let gaps = self.gaps.to_vec();
        let mut relations = Vec::new();
        for &lower in &gaps {
            for &upper in &gaps {
                if upper >= lower && self.contains(upper - lower) {
                    relations.push((lower, upper));
                }
            }
        }
        Poset::new(gaps, relations)
    }

    /// Pseudo-Frobenius numbers: gaps `g` such that `g + s` is an element for
    /// every positive element `s`. Ascending; empty for ℕ₀.
    pub fn void(&self) -> Vec<i64> {
        self.gaps
            .iter()
            .filter(|&g| {
                !(1..=self.frobenius - g).any(|s| self.contains(s) && self.gaps.contains(g + s))
            })
            .collect()
    }

    /// The gap poset restricted to the pseudo-Frobenius numbers.
    pub fn void_poset(&self) -> Result<Poset<i64>> {
        let void = self.void();
        Ok(self.gap_poset()?.restrict(|g| void.contains(g)))
    }

    /// Number of pseudo-Frobenius numbers.
    pub fn type_semigroup(&self) -> usize {
        self.void().len()
    }
}
