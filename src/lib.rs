// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Numerical semigroups, numerical sets and their partitions.
//!
//! A numerical semigroup is an additive submonoid of ℕ₀ with finite
//! complement. This crate builds semigroups from generators or gaps and
//! computes their classical invariants: Frobenius number, genus,
//! multiplicity, minimal generators, Apéry sets, Kunz coordinates,
//! pseudo-Frobenius numbers and the gap poset. It also navigates the
//! genus tree rooted at ℕ₀.
//!
//! # Architecture
//!
//! The implementation separates immutable values from the data that is
//! computed once and reused:
//!
//! ## Values (Immutable)
//!
//! - [`NumericalSet`]: a finite gap set, not necessarily closed under addition
//! - [`NumericalSemigroup`]: a closed gap set with its minimal generators
//! - [`Partition`]: the Young diagram read off a gap walk
//! - [`Poset`]: a validated finite partial order
//!
//! Numerical sets and semigroups share the [`HasGaps`] capability, which
//! carries the algorithms depending only on the gaps.
//!
//! ## Context (Mutable)
//!
//! A [`SemigroupContext`] owns the configuration and the memo tables for
//! Apéry sets, minimal generators, hook lengths and conjugates. Operations
//! that memoize take `&mut SemigroupContext`; nothing is shared between
//! contexts.
//!
//! # Bijection
//!
//! Numerical sets correspond one-to-one with partitions. Walking
//! `0, 1, …, F`, each element is a step right and each gap an up step; the
//! boundary of the resulting Young diagram gives the partition, and its
//! parts give back the gaps.
//!
//! # Example
//!
//! ```
//! use numerical_semigroups::{HasGaps, NumericalSemigroup, SemigroupContext, Step};
//!
//! let mut ctx = SemigroupContext::new();
//! let s = NumericalSemigroup::from_generators(&[3, 5]).unwrap();
//!
//! assert_eq!(s.frobenius_number(), 7);
//! assert_eq!(s.apery_set(&mut ctx, 3).unwrap(), vec![0, 10, 5]);
//! assert_eq!(s.partition().parts(), &[4, 2, 1, 1]);
//! // 0 is an element, 1 a gap
//! assert_eq!(s.partition().steps()[..2], [Step::Right, Step::Up]);
//! assert!(s.is_symmetric());
//! ```

pub mod config;
pub mod context;
pub mod errors;
pub mod gaps;
pub mod helpers;
pub mod numerical_set;
pub mod partition;
pub mod poset;
pub mod semigroup;
pub mod tree;

// Re-export commonly used types
pub use config::SemigroupConfig;
pub use context::{CacheKind, CacheStats, SemigroupContext, Statistics};
pub use errors::{ErrorKind, PosetAxiom, Result, SemigroupError};
pub use gaps::{GapSet, HasGaps};
pub use numerical_set::NumericalSet;
pub use partition::{Partition, Step};
pub use poset::Poset;
pub use semigroup::{
    minimal_generating_set_from_gaps, minimal_generating_set_from_generators, NumericalSemigroup,
};
