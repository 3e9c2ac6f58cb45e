// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Stateless helpers shared by the value types.
//!
//! - `validation`: positivity, size and coprimality checks on raw integer input
//! - `combinatorics`: conjugate partitions, hook-length tables and the
//!   gap-walk that turns a gap set into a partition

pub mod combinatorics;
pub mod validation;

pub use combinatorics::{boundary_walk, conjugate_parts, flatten, hook_length_matrix};
pub use validation::{
    gcd, gcd_all, require_coprime, require_gaps, require_positive, require_within_limit,
    sorted_distinct,
};
