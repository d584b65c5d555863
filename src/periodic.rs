//! Periodic knot sequences.
//!
//! A periodic sequence lists a single period: its first knot sits at the
//! origin, its last knot at the period, and both stand for the same point
//! of the closed curve. They therefore carry the same multiplicity and any
//! multiplicity change at one of them is mirrored at the other.

use crate::{
    family::{Blueprint, CurveClosure, NormalizedBasis, Representation},
    input::{
        check_max_multiplicity_order, knots_from_increasing_values,
        knots_from_strictly_increasing_values,
    },
    CheckResult, Knot, KnotArray, KnotErrorKind, KnotSequenceParams,
    StrictlyIncreasingIndex,
};

pub(crate) fn blueprint(
    params: &KnotSequenceParams,
    representation: Representation,
    family: &'static str,
) -> CheckResult<Blueprint> {
    use KnotSequenceParams as P;
    use Representation::{Increasing, StrictlyIncreasing};

    let order = params.max_multiplicity_order();
    check_max_multiplicity_order(order, 1)?;
    let array = match (params, representation) {
        (P::NoKnotPeriodicCurve { .. }, _) => no_knot(order)?,
        (P::UniformPeriodic {
            bspl_basis_size, ..
        }, _) => uniform(order, *bspl_basis_size)?,
        (P::IncreasingPeriodic { periodic_knots, .. }, Increasing) => {
            knots_from_increasing_values(periodic_knots)?
        }
        (P::StrictlyIncreasingPeriodic {
            periodic_knots,
            multiplicities,
            ..
        }, StrictlyIncreasing) => {
            knots_from_strictly_increasing_values(periodic_knots, multiplicities)?
        }
        _ => {
            return Err(KnotErrorKind::UnsupportedParams {
                params: params.name(),
                family,
            })
        }
    };
    Ok(Blueprint {
        array,
        max_multiplicity_order: order,
        closure: CurveClosure::ClosedCurve,
        allows_c0_discontinuity: false,
    })
}

/// `order + 1` unit spaced simple knots; three for order 1.
pub(crate) fn no_knot(order: u32) -> CheckResult<KnotArray> {
    let count = if order == 1 { 3 } else { order + 1 };
    unit_knots(count as usize)
}

/// A period holding `basis_size` basis functions.
pub(crate) fn uniform(order: u32, basis_size: usize) -> CheckResult<KnotArray> {
    let min = (order as usize).max(2);
    if basis_size < min {
        return Err(KnotErrorKind::BasisSizeTooSmall {
            size: basis_size,
            min,
        });
    }
    unit_knots(basis_size + 1)
}

fn unit_knots(count: usize) -> CheckResult<KnotArray> {
    KnotArray::new(
        (0..count)
            .map(|abscissa| Knot::new(abscissa as f64, 1))
            .collect::<CheckResult<Vec<_>>>()?,
    )
}

/// The whole period is the normalized basis.
pub(crate) fn locate_normalized_basis(
    array: &KnotArray,
    order: u32,
) -> CheckResult<NormalizedBasis> {
    let knots = array.knots();
    let (Some(first), Some(last)) = (knots.first(), knots.last()) else {
        return Err(KnotErrorKind::EmptyKnots);
    };
    if knots.len() < 2 {
        return Err(KnotErrorKind::TooFewKnots { count: knots.len() });
    }
    if first.multiplicity() != last.multiplicity() {
        return Err(KnotErrorKind::UnequalClosureMultiplicities {
            start: first.multiplicity(),
            end: last.multiplicity(),
        });
    }
    let basis_size = array.total_multiplicity() - last.multiplicity() as usize;
    if basis_size < order as usize {
        return Err(KnotErrorKind::BasisSizeTooSmall {
            size: basis_size,
            min: order as usize,
        });
    }
    Ok(NormalizedBasis {
        origin: StrictlyIncreasingIndex::new(0),
        end: StrictlyIncreasingIndex::new(knots.len() - 1),
    })
}

/// The first and last knots follow each other.
pub(crate) fn coupled_knot(
    array: &KnotArray,
    index: StrictlyIncreasingIndex,
) -> Option<StrictlyIncreasingIndex> {
    let last = array.last_index()?;
    if last.value() == 0 {
        None
    } else if index.value() == 0 {
        Some(last)
    } else if index == last {
        Some(StrictlyIncreasingIndex::new(0))
    } else {
        None
    }
}
