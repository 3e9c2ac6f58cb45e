// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::sync::Once;

use numerical_semigroups::NumericalSemigroup;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a tracing subscriber once per test binary.
///
/// Output is controlled by `RUST_LOG`, e.g. `RUST_LOG=numerical_semigroups=debug`.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// The semigroup generated by `generators`, which must be valid.
pub fn semigroup(generators: &[i64]) -> NumericalSemigroup {
    NumericalSemigroup::from_generators(generators)
        .unwrap_or_else(|e| panic!("invalid generators {:?}: {}", generators, e))
}

/// A fixed sample covering embedding dimensions 1 to 4.
pub fn sample_semigroups() -> Vec<NumericalSemigroup> {
    [
        vec![1],
        vec![2, 3],
        vec![3, 5],
        vec![3, 4, 5],
        vec![4, 6, 7, 9],
        vec![5, 7, 9],
        vec![6, 10, 15],
        vec![4, 5, 11],
        vec![7, 11, 13],
    ]
    .iter()
    .map(|g| semigroup(g))
    .collect()
}
