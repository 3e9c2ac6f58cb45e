// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! GapSet type for representing finite sets of positive integers as bitsets.
//!
//! Bit `i` (across all words) is set if `i` is a gap. Words are grown on
//! demand and trailing zero words are trimmed after every removal, so two
//! sets with the same members compare and hash equal regardless of how they
//! were built.
//!
//! # Examples
//!
//! ```
//! use numerical_semigroups::GapSet;
//!
//! let gaps: GapSet = [7, 1, 4, 2, 4].into_iter().collect();
//!
//! assert_eq!(gaps.len(), 4);
//! assert!(gaps.contains(4));
//! assert!(!gaps.contains(3));
//! assert_eq!(gaps.max(), Some(7));
//! assert_eq!(gaps.to_vec(), vec![1, 2, 4, 7]);
//! assert_eq!(format!("{}", gaps), "{1, 2, 4, 7}");
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::{Result, SemigroupError};
use crate::helpers::require_within_limit;

/// A finite set of non-negative integers stored as a bitset.
///
/// Membership, insertion and removal are O(1); iteration is in ascending order.
/// Negative values are never members. With the `serde` feature the set
/// serializes as its ascending member list, so the word layout never leaks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<i64>", into = "Vec<i64>")
)]
pub struct GapSet {
    words: Vec<u64>,
}

impl GapSet {
    /// Create an empty gap set.
    pub const fn empty() -> Self {
        Self { words: Vec::new() }
    }

    /// Check if the set contains a value.
    pub fn contains(&self, value: i64) -> bool {
        if value < 0 {
            return false;
        }
        let word_idx = (value / 64) as usize;
        let bit_idx = value % 64;
        self.words
            .get(word_idx)
            .is_some_and(|w| (w >> bit_idx) & 1 != 0)
    }

    /// Insert a value into the set.
    ///
    /// Storage grows to `value / 64 + 1` words. Use [`GapSet::try_from`] for
    /// untrusted input, which caps values at [`MAX_GAP`](crate::config::MAX_GAP).
    ///
    /// # Panics
    ///
    /// Panics if `value` is negative.
    pub fn insert(&mut self, value: i64) {
        assert!(value >= 0, "GapSet value out of range: {}", value);
        let word_idx = (value / 64) as usize;
        let bit_idx = value % 64;
        if word_idx >= self.words.len() {
            self.words.resize(word_idx + 1, 0);
        }
        self.words[word_idx] |= 1u64 << bit_idx;
    }

    /// Remove a value from the set (no-op if absent).
    pub fn remove(&mut self, value: i64) {
        if value < 0 {
            return;
        }
        let word_idx = (value / 64) as usize;
        let bit_idx = value % 64;
        if let Some(word) = self.words.get_mut(word_idx) {
            *word &= !(1u64 << bit_idx);
        }
        self.trim();
    }

    /// Return a copy with `value` inserted.
    pub fn with(&self, value: i64) -> Self {
        let mut out = self.clone();
        out.insert(value);
        out
    }

    /// Return a copy with `value` removed.
    pub fn without(&self, value: i64) -> Self {
        let mut out = self.clone();
        out.remove(value);
        out
    }

    /// Get the number of gaps in the set (population count).
    pub fn len(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Largest member, if any.
    pub fn max(&self) -> Option<i64> {
        let last = *self.words.last()?;
        let top = 63 - last.leading_zeros() as i64;
        Some((self.words.len() as i64 - 1) * 64 + top)
    }

    /// Smallest member, if any.
    pub fn min(&self) -> Option<i64> {
        self.iter().next()
    }

    /// Iterate over all members in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        GapSetIter {
            words: &self.words,
            word_idx: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    /// Members in ascending order.
    pub fn to_vec(&self) -> Vec<i64> {
        self.iter().collect()
    }

    fn trim(&mut self) {
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
    }
}

/// Iterator over members of a GapSet.
struct GapSetIter<'a> {
    words: &'a [u64],
    word_idx: usize,
    /// Remaining bits of the current word.
    current: u64,
}

impl<'a> Iterator for GapSetIter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as i64;
                self.current &= self.current - 1;
                return Some(self.word_idx as i64 * 64 + bit);
            }
            self.word_idx += 1;
            self.current = *self.words.get(self.word_idx)?;
        }
    }
}

impl FromIterator<i64> for GapSet {
    /// Collect values into a set.
    ///
    /// # Panics
    ///
    /// Panics on a negative value; validate input before collecting.
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut set = Self::empty();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl TryFrom<Vec<i64>> for GapSet {
    type Error = SemigroupError;

    /// Values must lie in `[0, MAX_GAP]`.
    fn try_from(values: Vec<i64>) -> Result<Self> {
        for &value in &values {
            if value < 0 {
                return Err(SemigroupError::InvalidGap { value });
            }
            require_within_limit("gap", value)?;
        }
        Ok(values.into_iter().collect())
    }
}

impl From<GapSet> for Vec<i64> {
    fn from(set: GapSet) -> Self {
        set.to_vec()
    }
}

impl fmt::Display for GapSet {
    /// Format a gap set as "{1, 2, 4, 7}".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let set = GapSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.max(), None);
        assert_eq!(set.min(), None);
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn test_insert_contains() {
        let mut set = GapSet::empty();
        assert!(!set.contains(0));

        set.insert(3);
        assert!(set.contains(3));
        assert_eq!(set.len(), 1);

        set.insert(130);
        assert!(set.contains(3));
        assert!(set.contains(130));
        assert!(!set.contains(64));
        assert!(!set.contains(-3));
        assert_eq!(set.len(), 2);
        assert_eq!(set.max(), Some(130));
        assert_eq!(set.min(), Some(3));
    }

    #[test]
    #[should_panic(expected = "GapSet value out of range")]
    fn test_insert_negative() {
        GapSet::empty().insert(-1);
    }

    #[test]
    fn test_remove_trims() {
        let mut set: GapSet = [1, 200].into_iter().collect();
        set.remove(200);
        assert_eq!(set, [1].into_iter().collect::<GapSet>());
        assert_eq!(set.max(), Some(1));

        set.remove(1);
        set.remove(1); // Remove again - should be idempotent
        assert!(set.is_empty());
        assert_eq!(set, GapSet::empty());
    }

    #[test]
    fn test_iter_crosses_words() {
        let set: GapSet = [0, 63, 64, 65, 127, 128].into_iter().collect();
        assert_eq!(set.to_vec(), vec![0, 63, 64, 65, 127, 128]);
    }

    #[test]
    fn test_with_without() {
        let set: GapSet = [1, 2].into_iter().collect();
        assert_eq!(set.with(5).to_vec(), vec![1, 2, 5]);
        assert_eq!(set.without(2).to_vec(), vec![1]);
        assert_eq!(set.to_vec(), vec![1, 2]);
    }

    #[test]
    fn test_equality_independent_of_history() {
        let mut grown: GapSet = [1, 2, 300].into_iter().collect();
        grown.remove(300);
        let direct: GapSet = [2, 1].into_iter().collect();
        assert_eq!(grown, direct);
    }

    #[test]
    fn test_vec_conversions() {
        let set = GapSet::try_from(vec![7, 1, 4, 1]).unwrap();
        assert_eq!(set, [1, 4, 7].into_iter().collect::<GapSet>());
        assert_eq!(Vec::from(set), vec![1, 4, 7]);
        assert!(GapSet::try_from(Vec::<i64>::new()).unwrap().is_empty());
        assert_eq!(
            GapSet::try_from(vec![2, -5]),
            Err(SemigroupError::InvalidGap { value: -5 })
        );
        assert_eq!(
            GapSet::try_from(vec![i64::MAX]),
            Err(SemigroupError::TooLarge {
                what: "gap",
                value: i64::MAX,
                limit: crate::config::MAX_GAP
            })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", GapSet::empty()), "{}");
        let set: GapSet = [1, 2, 4, 7].into_iter().collect();
        assert_eq!(format!("{}", set), "{1, 2, 4, 7}");
    }
}
