// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Computation context owning configuration and memo tables.
//!
//! The SemigroupContext replaces process-wide caches: whoever runs a batch
//! of computations creates one and passes it by `&mut` to the operations
//! that memoize (Apéry sets, minimal generators, conjugates, hook lengths).
//! Independent contexts share nothing, so tests stay isolated and parallel
//! workers can each own one.
//!
//! # Memory Model
//!
//! ```text
//! SemigroupContext {
//!     config: SemigroupConfig,   // search bounds, read-only during a run
//!     caches: Caches,            // key -> value, cleared only on request
//!     statistics: Statistics,    // hit/miss counters per table
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use numerical_semigroups::{NumericalSemigroup, SemigroupContext};
//!
//! let mut ctx = SemigroupContext::new();
//! let s = NumericalSemigroup::from_generators(&[3, 5]).unwrap();
//!
//! assert_eq!(s.apery_set(&mut ctx, 3).unwrap(), vec![0, 10, 5]);
//! assert_eq!(ctx.cache_stats().apery_size, 1);
//!
//! ctx.clear_apery_cache();
//! assert_eq!(ctx.cache_stats().apery_size, 0);
//! ```

pub mod memoized;
pub mod statistics;

pub use memoized::{CacheStats, Caches};
pub use statistics::{CacheKind, Statistics};

use tracing::{debug, trace};

use crate::config::SemigroupConfig;
use crate::errors::Result;
use crate::gaps::{GapSet, HasGaps};
use crate::helpers::{conjugate_parts, hook_length_matrix};
use crate::semigroup::{minimal_generating_set_from_gaps, NumericalSemigroup};

/// Configuration, memo tables and counters for a batch of computations.
#[derive(Debug, Clone, Default)]
pub struct SemigroupContext {
    config: SemigroupConfig,
    caches: Caches,
    statistics: Statistics,
}

impl SemigroupContext {
    /// Create a context with default bounds and empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with custom bounds.
    pub fn with_config(config: SemigroupConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &SemigroupConfig {
        &self.config
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// Number of entries in each memo table.
    pub fn cache_stats(&self) -> CacheStats {
        self.caches.stats()
    }

    /// Empty every memo table.
    pub fn clear_all_caches(&mut self) {
        debug!("clearing all caches");
        self.caches.clear_all();
    }

    /// Empty the Apéry-set table.
    pub fn clear_apery_cache(&mut self) {
        self.clear_cache(CacheKind::Apery);
    }

    /// Empty one memo table.
    pub fn clear_cache(&mut self, kind: CacheKind) {
        debug!(?kind, "clearing cache");
        self.caches.clear(kind);
    }

    /// Multiplicity of `set`, scanning up to the configured search bound.
    pub fn multiplicity_of(&self, set: &impl HasGaps) -> Result<i64> {
        set.multiplicity_within(self.config.multiplicity_search_bound)
    }

    /// Minimal generators of the semigroup with the given gaps (memoized).
    ///
    /// The gap set is assumed closed; see [`SemigroupContext::semigroup_from_gaps`]
    /// for the validating entry point.
    pub fn minimal_generators(&mut self, gaps: &GapSet) -> Result<Vec<i64>> {
        if let Some(hit) = self.caches.minimal_generators.get(gaps) {
            self.statistics.record_hit(CacheKind::MinimalGenerators);
            return Ok(hit.clone());
        }
        self.statistics.record_miss(CacheKind::MinimalGenerators);
        let generators = minimal_generating_set_from_gaps(gaps)?;
        trace!(%gaps, ?generators, "memoizing minimal generators");
        self.caches
            .minimal_generators
            .insert(gaps.clone(), generators.clone());
        Ok(generators)
    }

    /// Build a semigroup from a gap set, reusing memoized minimal generators.
    ///
    /// Validates closure exactly like [`NumericalSemigroup::from_gaps`].
    pub fn semigroup_from_gaps(&mut self, gaps: GapSet) -> Result<NumericalSemigroup> {
        NumericalSemigroup::check_closed(&gaps)?;
        let generators = self.minimal_generators(&gaps)?;
        Ok(NumericalSemigroup::assemble(gaps, generators))
    }

    pub(crate) fn apery_lookup(&mut self, gaps: &GapSet, modulus: i64) -> Option<Vec<i64>> {
        let found = self.caches.apery.get(&(gaps.clone(), modulus)).cloned();
        match found {
            Some(_) => self.statistics.record_hit(CacheKind::Apery),
            None => self.statistics.record_miss(CacheKind::Apery),
        }
        found
    }

    pub(crate) fn apery_store(&mut self, gaps: GapSet, modulus: i64, set: Vec<i64>) {
        self.caches.apery.insert((gaps, modulus), set);
    }

    pub(crate) fn conjugate_of(&mut self, parts: &[i64]) -> Vec<i64> {
        if let Some(hit) = self.caches.conjugates.get(parts) {
            self.statistics.record_hit(CacheKind::Conjugate);
            return hit.clone();
        }
        self.statistics.record_miss(CacheKind::Conjugate);
        let conjugate = conjugate_parts(parts);
        self.caches
            .conjugates
            .insert(parts.to_vec(), conjugate.clone());
        conjugate
    }

    pub(crate) fn hook_lengths_of(&mut self, parts: &[i64]) -> Vec<Vec<i64>> {
        if let Some(hit) = self.caches.hook_lengths.get(parts) {
            self.statistics.record_hit(CacheKind::HookLengths);
            return hit.clone();
        }
        self.statistics.record_miss(CacheKind::HookLengths);
        let conjugate = self.conjugate_of(parts);
        let hooks = hook_length_matrix(parts, &conjugate);
        self.caches
            .hook_lengths
            .insert(parts.to_vec(), hooks.clone());
        hooks
    }
}
