// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Navigation of the genus tree.
//!
//! Numerical semigroups form a tree rooted at ℕ₀. The parent of `S` is
//! `S ∪ {F(S)}`, which has one gap fewer; the children of `S` are the
//! semigroups `S \ {c}` for the minimal generators `c > F(S)`, the effective
//! generators. Level `g` of the tree holds every semigroup of genus `g`, so a
//! breadth-first walk from ℕ₀ enumerates semigroups by genus:
//!
//! ```text
//! genus   0  1  2  3  4   5   6
//! count   1  1  2  4  7  12  23
//! ```
//!
//! Every step goes through [`SemigroupContext::semigroup_from_gaps`], so
//! minimal generators of revisited gap sets come from the cache.
//!
//! # Examples
//!
//! ```
//! use numerical_semigroups::{NumericalSemigroup, SemigroupContext};
//!
//! let mut ctx = SemigroupContext::new();
//! let root = NumericalSemigroup::trivial();
//! let by_genus: Vec<usize> = (1..=4)
//!     .map(|depth| root.descendants(&mut ctx, depth).len())
//!     .collect();
//! assert_eq!(by_genus, vec![1, 3, 7, 14]);
//! ```

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::context::SemigroupContext;
use crate::errors::{Result, SemigroupError};
use crate::gaps::HasGaps;
use crate::semigroup::NumericalSemigroup;

impl NumericalSemigroup {
    /// `S ∪ {F}`, or `None` for ℕ₀.
    pub fn parent(&self, ctx: &mut SemigroupContext) -> Result<Option<NumericalSemigroup>> {
        if self.is_trivial() {
            return Ok(None);
        }
        let gaps = self.gap_set().without(self.frobenius_number());
        ctx.semigroup_from_gaps(gaps).map(Some)
    }

    /// Minimal generators in `[F + 1, F + m]`, the generators whose removal
    /// yields a child. ℕ₀ has the single effective generator 1.
    pub fn effective_generators(&self) -> Vec<i64> {
        let frobenius = self.frobenius_number();
        self.generators()
            .iter()
            .copied()
            .filter(|&c| c > frobenius)
            .collect()
    }

    /// The children `S \ {c}` for each effective generator `c`, in ascending
    /// order of `c`.
    ///
    /// Candidates that do not give a valid semigroup are logged and skipped.
    pub fn children(&self, ctx: &mut SemigroupContext) -> Vec<NumericalSemigroup> {
        let mut children = Vec::new();
        for c in self.effective_generators() {
            match ctx.semigroup_from_gaps(self.gap_set().with(c)) {
                Ok(child) => children.push(child),
                Err(e) => warn!(parent = %self, generator = c, error = %e, "skipping child"),
            }
        }
        children
    }

    /// `S \ {g}` for a minimal generator `g`.
    ///
    /// # Errors
    ///
    /// - [`SemigroupError::NotMinimalGenerator`] if `g` is not a minimal generator
    /// - [`SemigroupError::SoleGenerator`] if `g` is the only generator
    pub fn remove_minimal_generator(
        &self,
        ctx: &mut SemigroupContext,
        g: i64,
    ) -> Result<NumericalSemigroup> {
        if !self.generators().contains(&g) {
            return Err(SemigroupError::NotMinimalGenerator { value: g });
        }
        if self.embedding_dimension() == 1 {
            return Err(SemigroupError::SoleGenerator { value: g });
        }
        ctx.semigroup_from_gaps(self.gap_set().with(g))
    }

    /// `[S, parent(S), …, ℕ₀]`.
    pub fn genus_path(&self, ctx: &mut SemigroupContext) -> Result<Vec<NumericalSemigroup>> {
        let mut path = vec![self.clone()];
        let mut current = self.clone();
        while let Some(parent) = current.parent(ctx)? {
            path.push(parent.clone());
            current = parent;
        }
        Ok(path)
    }

    /// Up to `n` successive parents, stopping at ℕ₀. `S` itself is excluded.
    pub fn ancestors(&self, ctx: &mut SemigroupContext, n: usize) -> Result<Vec<NumericalSemigroup>> {
        let mut ancestors = Vec::with_capacity(n);
        let mut current = self.clone();
        while ancestors.len() < n {
            match current.parent(ctx)? {
                Some(parent) => {
                    ancestors.push(parent.clone());
                    current = parent;
                }
                None => break,
            }
        }
        Ok(ancestors)
    }

    /// Every semigroup within `depth` child steps of `S`, breadth first.
    ///
    /// `S` itself is excluded; each level `1..=depth` is included.
    pub fn descendants(&self, ctx: &mut SemigroupContext, depth: usize) -> Vec<NumericalSemigroup> {
        let mut found = Vec::new();
        let mut queue: VecDeque<(NumericalSemigroup, usize)> = VecDeque::new();
        queue.push_back((self.clone(), 0));
        while let Some((current, level)) = queue.pop_front() {
            if level == depth {
                continue;
            }
            for child in current.children(ctx) {
                found.push(child.clone());
                queue.push_back((child, level + 1));
            }
        }
        debug!(root = %self, depth, count = found.len(), "enumerated descendants");
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn semigroup(generators: &[i64]) -> NumericalSemigroup {
        NumericalSemigroup::from_generators(generators).unwrap()
    }

    #[test]
    fn test_parent() {
        let mut ctx = SemigroupContext::new();
        let s = semigroup(&[3, 5]);
        let parent = s.parent(&mut ctx).unwrap().unwrap();
        assert_eq!(parent.gaps(), vec![1, 2, 4]);
        assert_eq!(parent.genus(), 3);

        let two_three = semigroup(&[2, 3]);
        assert_eq!(
            two_three.parent(&mut ctx).unwrap(),
            Some(NumericalSemigroup::trivial())
        );
        assert_eq!(NumericalSemigroup::trivial().parent(&mut ctx).unwrap(), None);
    }

    #[test]
    fn test_effective_generators() {
        assert_eq!(NumericalSemigroup::trivial().effective_generators(), vec![1]);
        assert_eq!(semigroup(&[2, 3]).effective_generators(), vec![2, 3]);
        assert!(semigroup(&[3, 5]).effective_generators().is_empty());
        assert_eq!(semigroup(&[3, 4, 5]).effective_generators(), vec![3, 4, 5]);
    }

    #[test]
    fn test_children() {
        let mut ctx = SemigroupContext::new();
        let children = semigroup(&[2, 3]).children(&mut ctx);
        let gaps: Vec<Vec<i64>> = children.iter().map(|c| c.gaps()).collect();
        assert_eq!(gaps, vec![vec![1, 2], vec![1, 3]]);
        assert_eq!(children[0], semigroup(&[3, 4, 5]));
        assert_eq!(children[1], semigroup(&[2, 5]));
        assert!(semigroup(&[3, 5]).children(&mut ctx).is_empty());
    }

    #[test]
    fn test_remove_minimal_generator() {
        let mut ctx = SemigroupContext::new();
        let s = semigroup(&[3, 5]);
        assert_eq!(s.remove_minimal_generator(&mut ctx, 3).unwrap().generators(), &[5, 6, 8, 9]);
        assert_eq!(
            s.remove_minimal_generator(&mut ctx, 6),
            Err(SemigroupError::NotMinimalGenerator { value: 6 })
        );
        assert_eq!(
            NumericalSemigroup::trivial().remove_minimal_generator(&mut ctx, 1),
            Err(SemigroupError::SoleGenerator { value: 1 })
        );
    }

    #[test]
    fn test_genus_path_and_ancestors() {
        let mut ctx = SemigroupContext::new();
        let s = semigroup(&[3, 5]);
        let path = s.genus_path(&mut ctx).unwrap();
        let genera: Vec<usize> = path.iter().map(|t| t.genus()).collect();
        assert_eq!(genera, vec![4, 3, 2, 1, 0]);
        assert_eq!(path[0], s);
        assert!(path[4].is_trivial());

        let ancestors = s.ancestors(&mut ctx, 2).unwrap();
        assert_eq!(ancestors, path[1..3].to_vec());
        assert_eq!(s.ancestors(&mut ctx, 10).unwrap().len(), 4);
        assert!(s.ancestors(&mut ctx, 0).unwrap().is_empty());
    }

    #[test]
    fn test_descendants_count_by_genus() {
        let mut ctx = SemigroupContext::new();
        let root = NumericalSemigroup::trivial();
        let all = root.descendants(&mut ctx, 6);
        let mut counts = [0usize; 7];
        for s in &all {
            counts[s.genus()] += 1;
        }
        assert_eq!(counts, [0, 1, 2, 4, 7, 12, 23]);
        assert_eq!(root.descendants(&mut ctx, 4).len(), 14);
        assert!(root.descendants(&mut ctx, 0).is_empty());
    }
}
