// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Hit and miss counters for each memo table, stored in the context and
//! incremented by the cached lookups.

use strum::EnumCount;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// The memo tables owned by a [`SemigroupContext`](crate::SemigroupContext).
#[derive(Debug, EnumCountMacro, EnumIter, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CacheKind {
    /// Apéry sets keyed by `(gaps, modulus)`.
    Apery,
    /// Minimal generating sets keyed by gaps.
    MinimalGenerators,
    /// Hook-length tables keyed by partition parts.
    HookLengths,
    /// Conjugate partitions keyed by partition parts.
    Conjugate,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    hits: [u64; CacheKind::COUNT],
    misses: [u64; CacheKind::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    pub(crate) fn record_hit(&mut self, kind: CacheKind) {
        self.hits[kind as usize] += 1;
    }

    pub(crate) fn record_miss(&mut self, kind: CacheKind) {
        self.misses[kind as usize] += 1;
    }

    /// Lookups answered from the table.
    pub fn hits(&self, kind: CacheKind) -> u64 {
        self.hits[kind as usize]
    }

    /// Lookups that had to compute the value.
    pub fn misses(&self, kind: CacheKind) -> u64 {
        self.misses[kind as usize]
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
