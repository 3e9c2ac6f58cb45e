// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Finite partially ordered sets.
//!
//! A [`Poset`] stores its order as the full set of related pairs `(a, b)`
//! meaning `a <= b`, including the reflexive pairs. Construction checks the
//! three axioms and rejects the value, naming the offending pair, if any
//! fails. The type is immutable: [`Poset::add_element`] and
//! [`Poset::add_relation`] return new posets.
//!
//! # Examples
//!
//! ```
//! use numerical_semigroups::Poset;
//!
//! // Divisibility on {1, 2, 4}
//! let p = Poset::new(
//!     [1, 2, 4],
//!     [(1, 1), (2, 2), (4, 4), (1, 2), (2, 4), (1, 4)],
//! )
//! .unwrap();
//!
//! assert_eq!(p.cover_relations(), vec![(1, 2), (2, 4)]);
//! assert_eq!(p.minimal_elements(), vec![1]);
//! assert_eq!(p.maximal_elements(), vec![4]);
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use crate::errors::{PosetAxiom, Result, SemigroupError};

/// A finite poset over elements of type `T`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Poset<T: Ord> {
    elements: BTreeSet<T>,
    relations: BTreeSet<(T, T)>,
}

impl<T: Ord + Clone + Debug> Poset<T> {
    /// Build a poset from its elements and its full relation set.
    ///
    /// # Errors
    ///
    /// - [`SemigroupError::PosetUnknownElement`] if a pair mentions a non-element
    /// - [`SemigroupError::PosetAxiom`] naming the missing or offending pair
    pub fn new(
        elements: impl IntoIterator<Item = T>,
        relations: impl IntoIterator<Item = (T, T)>,
    ) -> Result<Self> {
        let poset = Self {
            elements: elements.into_iter().collect(),
            relations: relations.into_iter().collect(),
        };
        poset.validate()?;
        Ok(poset)
    }

    /// The empty poset.
    pub fn empty() -> Self {
        Self {
            elements: BTreeSet::new(),
            relations: BTreeSet::new(),
        }
    }

    fn validate(&self) -> Result<()> {
        for (a, b) in &self.relations {
            for x in [a, b] {
                if !self.elements.contains(x) {
                    return Err(SemigroupError::PosetUnknownElement {
                        element: format!("{:?}", x),
                    });
                }
            }
        }

        for e in &self.elements {
            if !self.relations.contains(&(e.clone(), e.clone())) {
                return Err(axiom_error(PosetAxiom::Reflexivity, e, e));
            }
        }

        for (a, b) in &self.relations {
            if a != b && self.relations.contains(&(b.clone(), a.clone())) {
                return Err(axiom_error(PosetAxiom::Antisymmetry, a, b));
            }
        }

        let successors = self.successors();
        for (a, b) in &self.relations {
            for &c in successors.get(b).into_iter().flatten() {
                if !self.relations.contains(&(a.clone(), c.clone())) {
                    return Err(axiom_error(PosetAxiom::Transitivity, a, c));
                }
            }
        }
        Ok(())
    }

    fn successors(&self) -> BTreeMap<&T, Vec<&T>> {
        let mut map: BTreeMap<&T, Vec<&T>> = BTreeMap::new();
        for (a, b) in &self.relations {
            map.entry(a).or_default().push(b);
        }
        map
    }

    pub fn elements(&self) -> &BTreeSet<T> {
        &self.elements
    }

    pub fn relations(&self) -> &BTreeSet<(T, T)> {
        &self.relations
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Check `a <= b`.
    pub fn less_eq(&self, a: &T, b: &T) -> bool {
        self.relations.contains(&(a.clone(), b.clone()))
    }

    /// Check `a < b`.
    pub fn less(&self, a: &T, b: &T) -> bool {
        a != b && self.less_eq(a, b)
    }

    /// Pairs `a < b` with nothing strictly between them.
    pub fn cover_relations(&self) -> Vec<(T, T)> {
        self.relations
            .iter()
            .filter(|(a, b)| a != b)
            .filter(|(a, b)| {
                !self
                    .elements
                    .iter()
                    .any(|c| self.less(a, c) && self.less(c, b))
            })
            .cloned()
            .collect()
    }

    /// Elements with nothing strictly below them.
    pub fn minimal_elements(&self) -> Vec<T> {
        self.elements
            .iter()
            .filter(|e| !self.elements.iter().any(|x| self.less(x, e)))
            .cloned()
            .collect()
    }

    /// Elements with nothing strictly above them.
    pub fn maximal_elements(&self) -> Vec<T> {
        self.elements
            .iter()
            .filter(|e| !self.elements.iter().any(|x| self.less(e, x)))
            .cloned()
            .collect()
    }

    /// A new poset with `element` added, incomparable to everything else.
    pub fn add_element(&self, element: T) -> Self {
        let mut out = self.clone();
        out.relations.insert((element.clone(), element.clone()));
        out.elements.insert(element);
        out
    }

    /// A new poset with `a <= b` added and the order closed transitively.
    ///
    /// # Errors
    ///
    /// [`SemigroupError::PosetUnknownElement`] if `a` or `b` is not an
    /// element, [`SemigroupError::PosetAxiom`] if the closure creates a cycle.
    pub fn add_relation(&self, a: T, b: T) -> Result<Self> {
        let mut out = self.clone();
        out.relations.insert((a, b));
        loop {
            let successors = out.successors();
            let missing: Vec<(T, T)> = out
                .relations
                .iter()
                .flat_map(|(x, y)| {
                    successors
                        .get(y)
                        .into_iter()
                        .flatten()
                        .map(move |&z| (x.clone(), z.clone()))
                })
                .filter(|pair| !out.relations.contains(pair))
                .collect();
            if missing.is_empty() {
                break;
            }
            out.relations.extend(missing);
        }
        out.validate()?;
        Ok(out)
    }

    /// The induced sub-poset on the elements satisfying `keep`.
    pub fn restrict(&self, keep: impl Fn(&T) -> bool) -> Self {
        Self {
            elements: self.elements.iter().filter(|&e| keep(e)).cloned().collect(),
            relations: self
                .relations
                .iter()
                .filter(|(a, b)| keep(a) && keep(b))
                .cloned()
                .collect(),
        }
    }
}

fn axiom_error<T: Debug>(axiom: PosetAxiom, a: &T, b: &T) -> SemigroupError {
    SemigroupError::PosetAxiom {
        axiom,
        pair: format!("({:?}, {:?})", a, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> Poset<i64> {
        Poset::new([1, 2, 3], [(1, 1), (2, 2), (3, 3), (1, 2), (2, 3), (1, 3)]).unwrap()
    }

    #[test]
    fn test_valid_chain() {
        let p = chain();
        assert_eq!(p.len(), 3);
        assert!(p.less_eq(&1, &3));
        assert!(p.less(&1, &2));
        assert!(!p.less(&2, &2));
        assert!(!p.less_eq(&3, &1));
        assert_eq!(p.cover_relations(), vec![(1, 2), (2, 3)]);
        assert_eq!(p.minimal_elements(), vec![1]);
        assert_eq!(p.maximal_elements(), vec![3]);
    }

    #[test]
    fn test_missing_reflexive_pair() {
        let err = Poset::new([1, 2], [(1, 1), (1, 2)]).unwrap_err();
        assert_eq!(
            err,
            SemigroupError::PosetAxiom {
                axiom: PosetAxiom::Reflexivity,
                pair: "(2, 2)".to_string()
            }
        );
    }

    #[test]
    fn test_antisymmetry_violation() {
        let err = Poset::new([1, 2], [(1, 1), (2, 2), (1, 2), (2, 1)]).unwrap_err();
        assert_eq!(
            err,
            SemigroupError::PosetAxiom {
                axiom: PosetAxiom::Antisymmetry,
                pair: "(1, 2)".to_string()
            }
        );
    }

    #[test]
    fn test_transitivity_violation() {
        let err = Poset::new([1, 2, 3], [(1, 1), (2, 2), (3, 3), (1, 2), (2, 3)]).unwrap_err();
        assert_eq!(
            err,
            SemigroupError::PosetAxiom {
                axiom: PosetAxiom::Transitivity,
                pair: "(1, 3)".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_element() {
        let err = Poset::new([1], [(1, 1), (1, 5)]).unwrap_err();
        assert_eq!(
            err,
            SemigroupError::PosetUnknownElement {
                element: "5".to_string()
            }
        );
    }

    #[test]
    fn test_add_element_and_relation() {
        let p = Poset::new([1, 2], [(1, 1), (2, 2), (1, 2)]).unwrap();
        let q = p.add_element(3);
        assert_eq!(q.len(), 3);
        assert_eq!(q.maximal_elements(), vec![2, 3]);
        assert_eq!(p.len(), 2);

        let r = q.add_relation(2, 3).unwrap();
        assert!(r.less_eq(&1, &3));
        assert_eq!(r.maximal_elements(), vec![3]);
        assert_eq!(r.cover_relations(), vec![(1, 2), (2, 3)]);
    }

    #[test]
    fn test_add_relation_cycle_rejected() {
        let err = chain().add_relation(3, 1).unwrap_err();
        assert!(matches!(
            err,
            SemigroupError::PosetAxiom {
                axiom: PosetAxiom::Antisymmetry,
                ..
            }
        ));
    }

    #[test]
    fn test_restrict() {
        let p = chain().restrict(|&e| e != 2);
        assert_eq!(p.elements().iter().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(p.cover_relations(), vec![(1, 3)]);
    }

    #[test]
    fn test_empty() {
        let p: Poset<i64> = Poset::empty();
        assert!(p.is_empty());
        assert!(p.cover_relations().is_empty());
        assert_eq!(Poset::new(Vec::<i64>::new(), Vec::new()).unwrap(), p);
    }
}
