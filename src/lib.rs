//! Knot sequences for B-spline curves and surfaces.
//!
//! A knot sequence is an ordered set of abscissae, each repeated according
//! to its multiplicity, over which the piecewise polynomial B-spline basis
//! functions are built. This crate models the four families of sequences
//! used by curve and surface code:
//!
//! | Type                                               | Topology | Iterates over            |
//! |----------------------------------------------------|----------|--------------------------|
//! | [`IncreasingOpenKnotSequence`]                     | open     | repeated abscissae       |
//! | [`StrictlyIncreasingOpenKnotSequence`]             | open     | distinct [`Knot`]s       |
//! | [`IncreasingPeriodicKnotSequenceClosedCurve`]      | periodic | repeated abscissae       |
//! | [`StrictlyIncreasingPeriodicKnotSequenceClosedCurve`] | periodic | distinct [`Knot`]s    |
//!
//! Every sequence is built from a [`KnotSequenceParams`] and checked on
//! construction. Editing operations ([`KnotSequence::insert_knot()`],
//! [`KnotSequence::raise_knot_multiplicity()`], ...) never touch the
//! sequence they are called on: they return a new, fully revalidated
//! sequence or an error.
//!
//! The normalized basis of a sequence always starts at the origin
//! ([`KNOT_SEQUENCE_ORIGIN`]) and ends at [`KnotSequence::u_max()`].
//!
//! # Examples
//!
//! ```
//! use bspline_knots::prelude::*;
//!
//! let sequence = IncreasingOpenKnotSequence::new(
//!     KnotSequenceParams::IncreasingOpen {
//!         max_multiplicity_order: 3,
//!         knots: vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0],
//!     },
//! )
//! .unwrap();
//! assert_eq!(sequence.u_max(), 3.0);
//!
//! let refined = sequence.insert_knot(&[1.5], 2).unwrap();
//! assert_eq!(refined.distinct_abscissae(), vec![0.0, 1.0, 1.5, 2.0, 3.0]);
//! assert_eq!(refined.multiplicities(), vec![3, 1, 2, 1, 3]);
//! ```
//!
//! # Cargo Features
#![doc = document_features::document_features!()]
use num_traits::Float;

#[macro_use]
mod log_macros;
#[macro_use]
mod family_macros;

mod convert;
mod error;
pub mod family;
mod index;
pub mod input;
mod knot;
mod knot_array;
mod open;
mod params;
mod periodic;
mod sequence;

pub use error::*;
pub use family::{
    CurveClosure, KnotSequenceFamily, NormalizedBasis, OpenIncreasing,
    OpenStrictlyIncreasing, PeriodicIncreasing, PeriodicStrictlyIncreasing,
    SequenceKind,
};
pub use index::*;
pub use knot::*;
pub use knot_array::*;
pub use params::*;
pub use sequence::*;

/// Two abscissae closer than this are considered the same knot.
pub const KNOT_COINCIDENCE_TOLERANCE: f64 = 1.0e-9;

/// Abscissa at which the normalized basis of every sequence starts.
pub const KNOT_SEQUENCE_ORIGIN: f64 = 0.0;

/// An open sequence listing repeated abscissae.
pub type IncreasingOpenKnotSequence = KnotSequence<OpenIncreasing>;

/// An open sequence listing distinct knots with their multiplicities.
pub type StrictlyIncreasingOpenKnotSequence =
    KnotSequence<OpenStrictlyIncreasing>;

/// A periodic sequence listing one period of repeated abscissae.
pub type IncreasingPeriodicKnotSequenceClosedCurve =
    KnotSequence<PeriodicIncreasing>;

/// A periodic sequence listing one period of distinct knots.
pub type StrictlyIncreasingPeriodicKnotSequenceClosedCurve =
    KnotSequence<PeriodicStrictlyIncreasing>;

#[inline]
pub(crate) fn coincident<T: Float>(a: T, b: T, tolerance: T) -> bool {
    (a - b).abs() <= tolerance
}

pub mod prelude {
    pub use crate::{
        IncreasingIndex, IncreasingOpenKnotSequence,
        IncreasingPeriodicKnotSequenceClosedCurve, Knot, KnotResult,
        KnotSequence, KnotSequenceError, KnotSequenceFamily,
        KnotSequenceParams, StrictlyIncreasingIndex,
        StrictlyIncreasingOpenKnotSequence,
        StrictlyIncreasingPeriodicKnotSequenceClosedCurve,
    };
}
