// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memo tables for the expensive derived quantities.
//!
//! Every value stored here is a pure function of its key, so the tables can
//! be cleared at any time without changing any result; clearing only costs
//! recomputation. There is no eviction beyond explicit clearing.

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::statistics::CacheKind;
use crate::gaps::GapSet;

/// Memoized data, keyed by immutable values.
#[derive(Debug, Default, Clone)]
pub struct Caches {
    /// Apéry sets by `(gaps, modulus)`.
    pub(crate) apery: HashMap<(GapSet, i64), Vec<i64>>,

    /// Minimal generating sets by gaps.
    pub(crate) minimal_generators: HashMap<GapSet, Vec<i64>>,

    /// Hook-length tables by partition parts.
    pub(crate) hook_lengths: HashMap<Vec<i64>, Vec<Vec<i64>>>,

    /// Conjugate parts by partition parts.
    pub(crate) conjugates: HashMap<Vec<i64>, Vec<i64>>,
}

/// Number of entries in each memo table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CacheStats {
    pub apery_size: usize,
    pub min_gen_size: usize,
    pub hooks_size: usize,
    pub conjugate_size: usize,
}

impl Caches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            apery_size: self.apery.len(),
            min_gen_size: self.minimal_generators.len(),
            hooks_size: self.hook_lengths.len(),
            conjugate_size: self.conjugates.len(),
        }
    }

    /// Empty one table.
    pub fn clear(&mut self, kind: CacheKind) {
        match kind {
            CacheKind::Apery => self.apery.clear(),
            CacheKind::MinimalGenerators => self.minimal_generators.clear(),
            CacheKind::HookLengths => self.hook_lengths.clear(),
            CacheKind::Conjugate => self.conjugates.clear(),
        }
    }

    /// Empty every table.
    pub fn clear_all(&mut self) {
        self.apery.clear();
        self.minimal_generators.clear();
        self.hook_lengths.clear();
        self.conjugates.clear();
    }
}
