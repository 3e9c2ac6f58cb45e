// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ferrers-diagram arithmetic.
//!
//! Partitions are handled here as plain non-increasing slices of positive
//! parts; the [`Partition`](crate::Partition) type adds validation and caching
//! on top.
//!
//! # The gap walk
//!
//! A gap set with Frobenius number `F` is read as a lattice path: walk
//! `i = 0, 1, ..., F`, stepping right on every non-gap and up on every gap.
//! Each up-step closes a row of the Ferrers diagram whose length is the number
//! of right-steps taken so far. For `<3, 5>` (gaps `{1, 2, 4, 7}`):
//!
//! ```text
//! i     : 0 1 2 3 4 5 6 7
//! step  : R U U R U R R U
//! rows  :   1 1   2     4   ->  partition [4, 2, 1, 1]
//! ```

/// Transpose of a Ferrers diagram: `conj[j-1] = #{ i : parts[i] >= j }`.
pub fn conjugate_parts(parts: &[i64]) -> Vec<i64> {
    let largest = parts.iter().copied().max().unwrap_or(0);
    (1..=largest)
        .map(|j| parts.iter().filter(|&&p| p >= j).count() as i64)
        .collect()
}

/// Hook length of every cell, row by row.
///
/// With 1-indexed row `i` and column `j`, the hook is
/// `parts[i] - j + conjugate[j] - i + 1`.
pub fn hook_length_matrix(parts: &[i64], conjugate: &[i64]) -> Vec<Vec<i64>> {
    parts
        .iter()
        .enumerate()
        .map(|(i, &row)| {
            (0..row as usize)
                .map(|j| row - (j as i64 + 1) + conjugate[j] - (i as i64 + 1) + 1)
                .collect()
        })
        .collect()
}

/// Concatenate the rows of a ragged matrix.
pub fn flatten(matrix: &[Vec<i64>]) -> Vec<i64> {
    matrix.iter().flatten().copied().collect()
}

/// Run the gap walk over `[0, frobenius]` and return the rows, largest first.
///
/// A gap seen before any non-gap closes an empty row, which is not emitted.
pub fn boundary_walk(frobenius: i64, is_gap: impl Fn(i64) -> bool) -> Vec<i64> {
    let mut rows = Vec::new();
    let mut non_gaps = 0;
    for i in 0..=frobenius {
        if is_gap(i) {
            if non_gaps > 0 {
                rows.push(non_gaps);
            }
        } else {
            non_gaps += 1;
        }
    }
    rows.sort_unstable_by(|a, b| b.cmp(a));
    rows
}
