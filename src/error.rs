//! Error types for knot sequence operations.
//!
//! Leaf types ([`Knot`](crate::Knot), the index newtypes,
//! [`KnotArray`](crate::KnotArray) and the raw input checks) report the rule
//! they found violated as a [`KnotErrorKind`]. Sequence level operations tag
//! that rule with their own name and surface a [`KnotSequenceError`].

use thiserror::Error;

/// Which end of a knot sequence a normalized basis check refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceExtremity {
    Start,
    End,
}

impl core::fmt::Display for SequenceExtremity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Start => f.write_str("start"),
            Self::End => f.write_str("end"),
        }
    }
}

/// The catalogue of rules a knot sequence can violate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KnotErrorKind {
    /// No knot was supplied.
    #[error("the knot list is empty")]
    EmptyKnots,

    /// Parallel knot and multiplicity lists differ in length.
    #[error(
        "{knots} knots were supplied with {multiplicities} multiplicities"
    )]
    LengthMismatch { knots: usize, multiplicities: usize },

    /// An abscissa is NaN or infinite.
    #[error("abscissa {0} is not a finite number")]
    NonFiniteAbscissa(f64),

    /// A multiplicity of zero was supplied or would result from an edit.
    #[error("the knot at index {index} has a null multiplicity")]
    NullMultiplicity { index: usize },

    /// A multiplicity increment or decrement smaller than one.
    #[error("a multiplicity change must be at least 1, got {0}")]
    NullMultiplicityChange(u32),

    /// Decrementing would take a multiplicity below one.
    #[error("cannot decrement multiplicity {multiplicity} by {amount}")]
    MultiplicityUnderflow { multiplicity: u32, amount: u32 },

    /// The maximal multiplicity order is below what the strategy needs.
    #[error("the max multiplicity order {order} is smaller than {min}")]
    MaxMultiplicityOrderTooSmall { order: u32, min: u32 },

    /// The requested basis is too small for the order.
    #[error(
        "a B-spline basis of size {size} is too small, at least {min} functions are needed"
    )]
    BasisSizeTooSmall { size: usize, min: usize },

    /// Raw knots are decreasing somewhere.
    #[error("knot values are not increasing at index {index}")]
    NotIncreasing { index: usize },

    /// Raw knots repeat or decrease somewhere.
    #[error("knot values are not strictly increasing at index {index}")]
    NotStrictlyIncreasing { index: usize },

    /// A knot is repeated more often than the order allows.
    #[error(
        "the knot at index {index} has multiplicity {multiplicity}, greater than the max multiplicity order {order}"
    )]
    MultiplicityExceedsOrder {
        index: usize,
        multiplicity: u32,
        order: u32,
    },

    /// An intermediate knot reaches the order: a C0 discontinuity.
    #[error(
        "the intermediate knot at index {index} reaches the max multiplicity order {order}"
    )]
    IntermediateKnotAtOrder { index: usize, order: u32 },

    /// The cumulated boundary multiplicities never reach the order.
    #[error("the basis is not normalized at the sequence {0}")]
    NotNormalized(SequenceExtremity),

    /// The cumulated boundary multiplicities overshoot the order.
    #[error("the basis is over-defined at the sequence {0}")]
    OverDefined(SequenceExtremity),

    /// The normalized basis does not start at the origin.
    #[error(
        "the normalized basis starts at abscissa {0} instead of the origin"
    )]
    OriginNotAtZero(f64),

    /// The normalized basis does not contain a single span.
    #[error(
        "the normalized basis interval is degenerate: start index {start}, end index {end}"
    )]
    DegenerateBasisInterval { start: usize, end: usize },

    /// A periodic sequence needs at least two knots.
    #[error("{count} knots cannot define a period")]
    TooFewKnots { count: usize },

    /// A closed curve must carry the same multiplicity at both ends of its
    /// normalized basis.
    #[error(
        "closed curve boundary multiplicities differ: {start} at the start, {end} at the end"
    )]
    UnequalClosureMultiplicities { start: u32, end: u32 },

    /// Order 2 closed curves need more than one span.
    #[error("a closed curve of order 2 needs at least {min} spans, got {spans}")]
    TooFewSpansForClosedCurve { spans: usize, min: usize },

    /// The operation needs a closed curve.
    #[error("the knot sequence does not describe a closed curve")]
    NotAClosedCurve,

    /// An index past the end of its knot list.
    #[error("index {index} is out of range for a length of {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A negative value was given for an index.
    #[error("a knot index must be non-negative, got {0}")]
    NegativeIndex(i64),

    /// An index range whose start lies after its end.
    #[error("index range [{start}, {end}] is empty")]
    InvalidIndexRange { start: usize, end: usize },

    /// An edit targets a knot defining the normalized basis boundaries.
    #[error(
        "the knot at index {index} lies at or outside the normalized basis boundaries"
    )]
    KnotAtBasisBoundary { index: usize },

    /// A periodic boundary knot cannot be removed.
    #[error("the knot at index {index} bounds the period and cannot be removed")]
    PeriodicBoundaryRemoval { index: usize },

    /// An abscissa coincides with an existing knot.
    #[error("abscissa {abscissa} is too close to the knot at {knot}")]
    AbscissaTooClose { abscissa: f64, knot: f64 },

    /// An abscissa before the origin.
    #[error("abscissa {0} lies before the origin")]
    AbscissaBelowOrigin(f64),

    /// An abscissa after the end of the normalized basis.
    #[error("abscissa {abscissa} lies beyond u max {u_max}")]
    AbscissaAboveUMax { abscissa: f64, u_max: f64 },

    /// The construction parameters do not apply to this sequence family.
    #[error("{params} parameters cannot build a {family}")]
    UnsupportedParams {
        params: &'static str,
        family: &'static str,
    },
}

/// A failed knot sequence operation.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{operation}: {kind}")]
pub struct KnotSequenceError {
    /// The public operation that failed.
    pub operation: &'static str,
    /// The rule that was violated.
    pub kind: KnotErrorKind,
}

impl KnotErrorKind {
    /// Tags this violation with the operation that detected it.
    #[must_use]
    pub fn at(self, operation: &'static str) -> KnotSequenceError {
        KnotSequenceError {
            operation,
            kind: self,
        }
    }
}

impl KnotSequenceError {
    /// The basis cannot be normalized, is degenerate or misses the origin.
    #[must_use]
    pub fn is_normalized_basis_violation(&self) -> bool {
        matches!(
            self.kind,
            KnotErrorKind::NotNormalized(_)
                | KnotErrorKind::OverDefined(_)
                | KnotErrorKind::OriginNotAtZero(_)
                | KnotErrorKind::DegenerateBasisInterval { .. }
        )
    }

    /// A multiplicity is null, too large or badly placed.
    #[must_use]
    pub fn is_multiplicity_violation(&self) -> bool {
        matches!(
            self.kind,
            KnotErrorKind::NullMultiplicity { .. }
                | KnotErrorKind::NullMultiplicityChange(_)
                | KnotErrorKind::MultiplicityUnderflow { .. }
                | KnotErrorKind::MultiplicityExceedsOrder { .. }
                | KnotErrorKind::IntermediateKnotAtOrder { .. }
                | KnotErrorKind::UnequalClosureMultiplicities { .. }
        )
    }

    /// A knot could not be inserted where it was asked to.
    #[must_use]
    pub fn is_insertion_violation(&self) -> bool {
        matches!(
            self.kind,
            KnotErrorKind::AbscissaTooClose { .. }
                | KnotErrorKind::AbscissaBelowOrigin(_)
                | KnotErrorKind::AbscissaAboveUMax { .. }
        )
    }

    /// An index or index range does not address existing knots.
    #[must_use]
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(
            self.kind,
            KnotErrorKind::IndexOutOfRange { .. }
                | KnotErrorKind::InvalidIndexRange { .. }
        )
    }

    /// The raw construction input is malformed.
    #[must_use]
    pub fn is_input_violation(&self) -> bool {
        matches!(
            self.kind,
            KnotErrorKind::EmptyKnots
                | KnotErrorKind::LengthMismatch { .. }
                | KnotErrorKind::NonFiniteAbscissa(_)
                | KnotErrorKind::NotIncreasing { .. }
                | KnotErrorKind::NotStrictlyIncreasing { .. }
                | KnotErrorKind::UnsupportedParams { .. }
        )
    }
}

/// Result type for leaf level checks.
pub type CheckResult<T> = Result<T, KnotErrorKind>;

/// Result type for knot sequence operations.
pub type KnotResult<T> = Result<T, KnotSequenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_carries_operation() {
        let err = KnotErrorKind::NotNormalized(SequenceExtremity::End)
            .at("insert_knot");
        assert_eq!(
            err.to_string(),
            "insert_knot: the basis is not normalized at the sequence end"
        );
    }

    #[test]
    fn test_error_predicates() {
        let err = KnotErrorKind::OriginNotAtZero(1.0).at("new");
        assert!(err.is_normalized_basis_violation());
        assert!(!err.is_insertion_violation());

        let err = KnotErrorKind::AbscissaAboveUMax {
            abscissa: 3.5,
            u_max: 3.0,
        }
        .at("insert_knot");
        assert!(err.is_insertion_violation());
        assert!(err.to_string().contains("3.5"));

        let err = KnotErrorKind::IndexOutOfRange { index: 7, len: 5 }.at("x");
        assert!(err.is_index_out_of_range());
        assert!(!err.is_multiplicity_violation());
    }
}
