// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Symmetry, special gaps and the semigroups one gap away.

use tracing::debug;

use super::NumericalSemigroup;
use crate::context::SemigroupContext;
use crate::errors::{Result, SemigroupError};

impl NumericalSemigroup {
    /// The pseudo-Frobenius numbers, the candidates for [`add_special_gap`](Self::add_special_gap).
    pub fn special_gaps(&self) -> Vec<i64> {
        self.void()
    }

    /// Type 1: `x` is a gap iff `F - x` is an element.
    pub fn is_symmetric(&self) -> bool {
        self.type_semigroup() == 1
    }

    /// Type 2 with `F / 2` as the other pseudo-Frobenius number.
    pub fn is_pseudo_symmetric(&self) -> bool {
        let void = self.void();
        void.len() == 2 && self.frobenius % 2 == 0 && void.contains(&(self.frobenius / 2))
    }

    /// Gaps `x` with `2x` and `3x` elements.
    pub fn fundamental_gaps(&self) -> Vec<i64> {
        self.gaps
            .iter()
            .filter(|&x| self.contains(2 * x) && self.contains(3 * x))
            .collect()
    }

    /// Gaps `g < F` with `F - g` an element.
    ///
    /// Every numerical semigroup with Frobenius number `F` has these as gaps.
    pub fn forced_gaps(&self) -> Vec<i64> {
        self.gaps
            .iter()
            .filter(|&g| g < self.frobenius && self.contains(self.frobenius - g))
            .collect()
    }

    /// The semigroup with the special gap `g` turned into an element.
    ///
    /// # Errors
    ///
    /// - [`SemigroupError::NotASpecialGap`] if `g` is not a pseudo-Frobenius number
    /// - [`SemigroupError::NotClosed`] if `2g` is a gap
    pub fn add_special_gap(&self, ctx: &mut SemigroupContext, g: i64) -> Result<NumericalSemigroup> {
        if !self.special_gaps().contains(&g) {
            return Err(SemigroupError::NotASpecialGap { value: g });
        }
        let result = ctx.semigroup_from_gaps(self.gaps.without(g))?;
        debug!(from = %self, gap = g, to = %result, "added special gap");
        Ok(result)
    }

    /// The semigroups `S \ {x}` for minimal generators `x < F`.
    ///
    /// Each has the same Frobenius number and genus one larger.
    pub fn frobenius_children(&self, ctx: &mut SemigroupContext) -> Result<Vec<NumericalSemigroup>> {
        self.generators
            .iter()
            .filter(|&&x| x < self.frobenius)
            .map(|&x| ctx.semigroup_from_gaps(self.gaps.with(x)))
            .collect()
    }
}
