// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Weights, Kunz coordinates and invariants derived from the Apéry set.
//!
//! Two notions of effective weight are in use. [`NumericalSemigroup::effective_weight`]
//! counts the ways a gap splits into two positive elements and is defined for
//! every gap. [`NumericalSemigroup::effective_weight_of_generator`] counts the
//! gaps above a minimal generator, the convention used for the weight of a
//! semigroup in the genus-tree literature.

use std::collections::BTreeMap;

use super::NumericalSemigroup;
use crate::context::SemigroupContext;
use crate::errors::{Result, SemigroupError};

impl NumericalSemigroup {
    /// Number of pairs `s1 <= s2` of positive elements with `s1 + s2 = g`.
    pub fn effective_weight(&self, g: i64) -> usize {
        (1..=g / 2)
            .filter(|&s1| self.contains(s1) && self.contains(g - s1))
            .count()
    }

    /// [`effective_weight`](Self::effective_weight) of every gap.
    pub fn effective_weights(&self) -> BTreeMap<i64, usize> {
        self.gaps
            .iter()
            .map(|g| (g, self.effective_weight(g)))
            .collect()
    }

    /// Number of gaps greater than the minimal generator `a`.
    ///
    /// # Errors
    ///
    /// [`SemigroupError::NotMinimalGenerator`] if `a` is not a minimal generator.
    pub fn effective_weight_of_generator(&self, a: i64) -> Result<usize> {
        if !self.generators.contains(&a) {
            return Err(SemigroupError::NotMinimalGenerator { value: a });
        }
        Ok(self.gaps.iter().filter(|&g| g > a).count())
    }

    /// Sum of [`effective_weight_of_generator`](Self::effective_weight_of_generator)
    /// over the minimal generators.
    pub fn total_effective_weight(&self) -> usize {
        self.generators
            .iter()
            .map(|&a| self.gaps.iter().filter(|&g| g > a).count())
            .sum()
    }

    /// `w / n` for each `w` in the Apéry set with respect to `n`.
    pub fn apery_weight(&self, ctx: &mut SemigroupContext, n: i64) -> Result<Vec<i64>> {
        Ok(self
            .apery_set(ctx, n)?
            .into_iter()
            .map(|w| w / n)
            .collect())
    }

    /// Kunz coordinates `(w_i - i) / m` for residues `i` in `[1, m - 1]`,
    /// where `m` is the multiplicity and `w_i` the Apéry-set entry for `i`.
    pub fn kunz_coordinates(&self, ctx: &mut SemigroupContext) -> Result<Vec<i64>> {
        let m = self.multiplicity;
        let apery = self.apery_set(ctx, m)?;
        Ok(apery
            .iter()
            .zip(0..)
            .skip(1)
            .map(|(&w, i)| (w - i) / m)
            .collect())
    }

    /// Largest Kunz coordinate, or 0 for ℕ₀.
    pub fn depth(&self, ctx: &mut SemigroupContext) -> Result<i64> {
        Ok(self.kunz_coordinates(ctx)?.into_iter().max().unwrap_or(0))
    }

    /// Distinct differences between consecutive elements up to `F + m + 1`.
    pub fn delta_set(&self) -> Vec<i64> {
        let elements = self.elements_up_to(self.frobenius + self.multiplicity + 1);
        let mut deltas: Vec<i64> = elements.windows(2).map(|w| w[1] - w[0]).collect();
        deltas.sort_unstable();
        deltas.dedup();
        deltas
    }

    /// Upper bound for the catenary degree: `depth + 1`.
    ///
    /// This is not the exact catenary degree, which would need the
    /// factorizations of every element.
    pub fn catenary_degree(&self, ctx: &mut SemigroupContext) -> Result<i64> {
        Ok(self.depth(ctx)? + 1)
    }
}
