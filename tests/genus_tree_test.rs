// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for genus-tree navigation.

mod common;

use std::collections::HashSet;

use common::{init_tracing, sample_semigroups, semigroup};
use numerical_semigroups::{CacheKind, HasGaps, NumericalSemigroup, SemigroupContext};

/// Number of numerical semigroups of genus 0..=7.
const SEMIGROUPS_BY_GENUS: [usize; 8] = [1, 1, 2, 4, 7, 12, 23, 39];

#[test]
fn test_counts_by_genus() {
    init_tracing();
    let mut ctx = SemigroupContext::new();
    let mut level = vec![NumericalSemigroup::trivial()];
    for (genus, &expected) in SEMIGROUPS_BY_GENUS.iter().enumerate() {
        assert_eq!(level.len(), expected, "genus {}", genus);
        assert!(level.iter().all(|s| s.genus() == genus));

        let distinct: HashSet<&NumericalSemigroup> = level.iter().collect();
        assert_eq!(distinct.len(), level.len());

        level = level.iter().flat_map(|s| s.children(&mut ctx)).collect();
    }
}

#[test]
fn test_descendants_include_every_level() {
    let mut ctx = SemigroupContext::new();
    let all = NumericalSemigroup::trivial().descendants(&mut ctx, 5);
    assert_eq!(all.len(), 1 + 2 + 4 + 7 + 12);
    let genera: Vec<usize> = all.iter().map(|s| s.genus()).collect();
    assert!(genera.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn test_child_of_parent() {
    let mut ctx = SemigroupContext::new();
    for s in sample_semigroups().into_iter().filter(|s| !s.is_trivial()) {
        let parent = s.parent(&mut ctx).unwrap().unwrap();
        assert_eq!(parent.genus(), s.genus() - 1);
        assert!(parent.children(&mut ctx).contains(&s), "{} under {}", s, parent);
        assert!(s.frobenius_number() > parent.frobenius_number());
    }
}

#[test]
fn test_genus_path_ends_at_root() {
    let mut ctx = SemigroupContext::new();
    let s = semigroup(&[5, 7, 9]);
    let path = s.genus_path(&mut ctx).unwrap();
    assert_eq!(path.len(), s.genus() + 1);
    assert_eq!(path.last(), Some(&NumericalSemigroup::trivial()));
    for pair in path.windows(2) {
        assert_eq!(pair[0].parent(&mut ctx).unwrap().as_ref(), Some(&pair[1]));
    }
}

#[test]
fn test_tree_reuses_generator_cache() {
    let mut ctx = SemigroupContext::new();
    let root = NumericalSemigroup::trivial();
    root.descendants(&mut ctx, 4);
    let misses = ctx.statistics().misses(CacheKind::MinimalGenerators);

    // Every semigroup up to genus 4 is known now
    root.descendants(&mut ctx, 4);
    assert_eq!(ctx.statistics().misses(CacheKind::MinimalGenerators), misses);
    assert_eq!(ctx.statistics().hits(CacheKind::MinimalGenerators), 14);
    assert_eq!(ctx.cache_stats().min_gen_size, 14);
}

#[test]
fn test_remove_each_generator() {
    let mut ctx = SemigroupContext::new();
    let s = semigroup(&[4, 6, 7, 9]);
    for &g in s.generators() {
        let t = s.remove_minimal_generator(&mut ctx, g).unwrap();
        assert_eq!(t.genus(), s.genus() + 1);
        assert!(!t.contains(g));
        assert!(t.is_gap(g));
    }
}
