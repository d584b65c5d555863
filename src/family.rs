//! The four knot sequence families.
//!
//! A family fixes two independent choices:
//!
//! * the *topology*: an open sequence may extend beyond its normalized
//!   basis on both sides, a periodic sequence lists exactly one period and
//!   couples its first and last knots;
//! * the *representation*: increasing families present the flattened
//!   (repeated) abscissae, strictly increasing families present each
//!   distinct [`Knot`] once.
//!
//! Storage is the same for all of them, a [`KnotArray`]. The family only
//! decides how a sequence is built, where its normalized basis lies and how
//! boundary knots react to edits.

use crate::{
    CheckResult, Knot, KnotArray, KnotSequenceParams, StrictlyIncreasingIndex,
};

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// Runtime tag of a family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    OpenIncreasing,
    OpenStrictlyIncreasing,
    PeriodicIncreasing,
    PeriodicStrictlyIncreasing,
}

impl SequenceKind {
    #[inline]
    pub const fn is_periodic(self) -> bool {
        matches!(self, Self::PeriodicIncreasing | Self::PeriodicStrictlyIncreasing)
    }

    #[inline]
    pub const fn is_increasing(self) -> bool {
        matches!(self, Self::OpenIncreasing | Self::PeriodicIncreasing)
    }
}

/// Whether a sequence describes an open or a closed curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CurveClosure {
    OpenCurve,
    ClosedCurve,
}

/// Which explicit construction variants a family reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Representation {
    Increasing,
    StrictlyIncreasing,
}

/// Distinct-knot indices bounding the normalized basis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NormalizedBasis {
    /// The knot where the basis starts, at the origin.
    pub origin: StrictlyIncreasingIndex,
    /// The knot where the basis ends, at u max.
    pub end: StrictlyIncreasingIndex,
}

impl NormalizedBasis {
    /// Number of spans inside the basis.
    #[inline]
    pub fn span_count(self) -> usize {
        self.end.value().saturating_sub(self.origin.value())
    }
}

/// A knot array plus everything needed to turn it into a sequence.
#[doc(hidden)]
#[derive(Clone, Debug, PartialEq)]
pub struct Blueprint {
    pub(crate) array: KnotArray,
    pub(crate) max_multiplicity_order: u32,
    pub(crate) closure: CurveClosure,
    pub(crate) allows_c0_discontinuity: bool,
}

/// Behavior specific to one knot sequence family.
///
/// This trait is sealed; it is implemented by the four marker types of this
/// module and nothing else.
pub trait KnotSequenceFamily:
    Copy + core::fmt::Debug + Default + PartialEq + sealed::Sealed + 'static
{
    const KIND: SequenceKind;
    const NAME: &'static str;
    const CONSTRUCTOR: &'static str;

    /// What iterating over a sequence of this family yields.
    type Element: Copy + core::fmt::Debug + PartialEq;

    /// The family with the same topology and the other representation.
    type Counterpart: KnotSequenceFamily<Counterpart = Self>;

    /// Decodes construction parameters into knots.
    #[doc(hidden)]
    fn blueprint(params: &KnotSequenceParams) -> CheckResult<Blueprint>;

    /// Finds the normalized basis of `array`.
    fn locate_normalized_basis(
        array: &KnotArray,
        max_multiplicity_order: u32,
    ) -> CheckResult<NormalizedBasis>;

    /// Fails if editing the multiplicity of `index` would redefine the
    /// basis rather than refine it.
    fn check_editable_knot(
        basis: NormalizedBasis,
        index: StrictlyIncreasingIndex,
    ) -> CheckResult<()>;

    /// The knot whose multiplicity must follow any change made at `index`.
    fn coupled_knot(
        array: &KnotArray,
        index: StrictlyIncreasingIndex,
    ) -> Option<StrictlyIncreasingIndex>;

    fn is_knot_multiplicity_non_uniform(
        array: &KnotArray,
        max_multiplicity_order: u32,
    ) -> bool;

    fn elements(array: &KnotArray) -> Vec<Self::Element>;
}

/// Open sequence iterated as repeated abscissae.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenIncreasing;

/// Open sequence iterated as distinct knots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenStrictlyIncreasing;

/// Periodic sequence iterated as repeated abscissae.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PeriodicIncreasing;

/// Periodic sequence iterated as distinct knots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PeriodicStrictlyIncreasing;

fn distinct_knots(array: &KnotArray) -> Vec<Knot> {
    array.knots().to_vec()
}

open_family!(
    OpenIncreasing,
    OpenIncreasing,
    "IncreasingOpenKnotSequence",
    OpenStrictlyIncreasing,
    Increasing,
    f64,
    KnotArray::all_abscissae
);

open_family!(
    OpenStrictlyIncreasing,
    OpenStrictlyIncreasing,
    "StrictlyIncreasingOpenKnotSequence",
    OpenIncreasing,
    StrictlyIncreasing,
    Knot,
    distinct_knots
);

periodic_family!(
    PeriodicIncreasing,
    PeriodicIncreasing,
    "IncreasingPeriodicKnotSequenceClosedCurve",
    PeriodicStrictlyIncreasing,
    Increasing,
    f64,
    KnotArray::all_abscissae
);

periodic_family!(
    PeriodicStrictlyIncreasing,
    PeriodicStrictlyIncreasing,
    "StrictlyIncreasingPeriodicKnotSequenceClosedCurve",
    PeriodicIncreasing,
    StrictlyIncreasing,
    Knot,
    distinct_knots
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_flags() {
        assert!(PeriodicIncreasing::KIND.is_periodic());
        assert!(PeriodicIncreasing::KIND.is_increasing());
        assert!(!OpenStrictlyIncreasing::KIND.is_periodic());
        assert!(!OpenStrictlyIncreasing::KIND.is_increasing());
        assert_eq!(
            OpenIncreasing::CONSTRUCTOR,
            "IncreasingOpenKnotSequence::new"
        );
    }
}
