// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for semigroup, partition and poset construction.
//!
//! Every public operation validates its raw integer inputs at the boundary and
//! reports failures through [`SemigroupError`]. Each variant carries the
//! offending value together with the violated constraint, and
//! [`SemigroupError::kind`] groups variants into three broad kinds.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SemigroupError>;

/// Coarse classification of a [`SemigroupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed a value that violates a documented constraint.
    InvalidArgument,
    /// The operation requires a property the given value does not have.
    Precondition,
    /// An internal bound was exhausted; indicates a bug or a pathological input.
    ComputationFailure,
}

/// The partial-order axiom violated by a relation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosetAxiom {
    Reflexivity,
    Antisymmetry,
    Transitivity,
}

impl std::fmt::Display for PosetAxiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PosetAxiom::Reflexivity => "reflexivity",
            PosetAxiom::Antisymmetry => "antisymmetry",
            PosetAxiom::Transitivity => "transitivity",
        };
        f.write_str(name)
    }
}

/// Errors raised by constructors and accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SemigroupError {
    /// A generator list was empty.
    #[error("generator list is empty; at least one positive generator is required")]
    EmptyGenerators,

    /// A value that must be strictly positive was not.
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: i64 },

    /// The generators share a common factor, so the complement is infinite.
    #[error("invalid generators {generators:?}: gcd is {gcd}, expected 1")]
    NotCoprime { generators: Vec<i64>, gcd: i64 },

    /// A gap outside the positive integers (0 always belongs to a numerical set).
    #[error("invalid gap {value}: gaps must be positive integers")]
    InvalidGap { value: i64 },

    /// The complement of a gap set is not closed under addition.
    #[error("gap set is not closed: gap {gap} = {left} + {right} with {left} and {right} members")]
    NotClosed { gap: i64, left: i64, right: i64 },

    /// No minimal generator could be derived from a gap set.
    #[error("no generators derivable from gap set with Frobenius number {frobenius}")]
    NoGenerators { frobenius: i64 },

    /// An intermediate bound does not fit in a machine integer.
    #[error("{what} overflows a 64-bit integer")]
    Overflow { what: &'static str },

    /// A value would need a table larger than the crate allocates.
    #[error("{what} {value} exceeds the supported limit {limit}")]
    TooLarge {
        what: &'static str,
        value: i64,
        limit: i64,
    },

    /// The value is not an element of the semigroup.
    #[error("{value} is not an element of the semigroup")]
    NotAMember { value: i64 },

    /// A partition part was zero or negative.
    #[error("invalid partition part {value}: parts must be positive")]
    InvalidPart { value: i64 },

    /// A relation mentions an element missing from the poset.
    #[error("relation refers to {element}, which is not an element of the poset")]
    PosetUnknownElement { element: String },

    /// A relation set violates one of the partial-order axioms.
    #[error("relation set violates {axiom}: offending pair {pair}")]
    PosetAxiom { axiom: PosetAxiom, pair: String },

    /// The value is not a minimal generator of the semigroup.
    #[error("{value} is not a minimal generator")]
    NotMinimalGenerator { value: i64 },

    /// Removing the value would leave no generators.
    #[error("cannot remove {value}: it is the only generator")]
    SoleGenerator { value: i64 },

    /// The value is not a special gap of the semigroup.
    #[error("{value} is not a special gap")]
    NotASpecialGap { value: i64 },

    /// The Apéry sweep left residue classes without a representative.
    #[error("Apéry sweep modulo {modulus} left residues {missing:?} unfilled")]
    UnfilledAperySlots { modulus: i64, missing: Vec<i64> },

    /// No non-gap was found while scanning for the multiplicity.
    #[error("no positive non-gap found below the search bound {bound}")]
    MultiplicityNotFound { bound: i64 },
}

impl SemigroupError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SemigroupError::EmptyGenerators
            | SemigroupError::NonPositive { .. }
            | SemigroupError::NotCoprime { .. }
            | SemigroupError::InvalidGap { .. }
            | SemigroupError::NotClosed { .. }
            | SemigroupError::NoGenerators { .. }
            | SemigroupError::Overflow { .. }
            | SemigroupError::TooLarge { .. }
            | SemigroupError::NotAMember { .. }
            | SemigroupError::InvalidPart { .. }
            | SemigroupError::PosetUnknownElement { .. }
            | SemigroupError::PosetAxiom { .. } => ErrorKind::InvalidArgument,
            SemigroupError::NotMinimalGenerator { .. }
            | SemigroupError::SoleGenerator { .. }
            | SemigroupError::NotASpecialGap { .. } => ErrorKind::Precondition,
            SemigroupError::UnfilledAperySlots { .. }
            | SemigroupError::MultiplicityNotFound { .. } => ErrorKind::ComputationFailure,
        }
    }
}
