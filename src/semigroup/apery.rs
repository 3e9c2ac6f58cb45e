// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Apéry sets.
//!
//! For an element `n > 0`, the Apéry set `Ap(S, n)` holds, for each residue
//! `i` modulo `n`, the smallest element congruent to `i`. Every such
//! representative is at most `F + n`, so a sweep up to
//! [`SemigroupConfig::apery_sweep_bound`](crate::SemigroupConfig::apery_sweep_bound)
//! always fills all `n` slots for a well-formed semigroup.

use tracing::trace;

use super::NumericalSemigroup;
use crate::context::SemigroupContext;
use crate::errors::{Result, SemigroupError};
use crate::helpers::require_positive;

impl NumericalSemigroup {
    /// Apéry set with respect to `n`; slot `i` holds the smallest element
    /// congruent to `i` modulo `n` (memoized by `(gaps, n)`).
    ///
    /// # Errors
    ///
    /// - [`SemigroupError::NonPositive`] if `n <= 0`
    /// - [`SemigroupError::NotAMember`] if `n` is not an element
    /// - [`SemigroupError::TooLarge`] if `n` exceeds
    ///   [`SemigroupConfig::max_apery_modulus`](crate::SemigroupConfig::max_apery_modulus)
    /// - [`SemigroupError::Overflow`] if the sweep bound does not fit in an `i64`
    /// - [`SemigroupError::UnfilledAperySlots`] if the sweep bound is exhausted
    pub fn apery_set(&self, ctx: &mut SemigroupContext, n: i64) -> Result<Vec<i64>> {
        require_positive("modulus", n)?;
        if !self.contains(n) {
            return Err(SemigroupError::NotAMember { value: n });
        }
        if let Some(hit) = ctx.apery_lookup(&self.gaps, n) {
            return Ok(hit);
        }

        let limit = ctx.config().max_apery_modulus;
        if n > limit {
            return Err(SemigroupError::TooLarge {
                what: "Apéry modulus",
                value: n,
                limit,
            });
        }
        let bound = ctx.config().apery_sweep_bound(self.frobenius, n)?;
        let mut slots: Vec<Option<i64>> = vec![None; n as usize];
        slots[0] = Some(0);
        let mut filled = 1;
        for k in 1..=bound {
            if filled == n {
                break;
            }
            if !self.contains(k) {
                continue;
            }
            let slot = &mut slots[(k % n) as usize];
            if slot.is_none() {
                *slot = Some(k);
                filled += 1;
            }
        }
        trace!(modulus = n, bound, filled, "Apéry sweep finished");

        if filled < n {
            let missing = slots
                .iter()
                .enumerate()
                .filter(|(_, slot)| slot.is_none())
                .map(|(i, _)| i as i64)
                .collect();
            return Err(SemigroupError::UnfilledAperySlots {
                modulus: n,
                missing,
            });
        }
        let set: Vec<i64> = slots.into_iter().flatten().collect();
        ctx.apery_store(self.gaps.clone(), n, set.clone());
        Ok(set)
    }

    /// Apéry set with respect to the multiplicity.
    pub fn apery_set_of_multiplicity(&self, ctx: &mut SemigroupContext) -> Result<Vec<i64>> {
        self.apery_set(ctx, self.multiplicity)
    }
}
