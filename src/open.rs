//! Open knot sequences.
//!
//! An open sequence may carry knots before its origin and after u max; the
//! normalized basis starts where the cumulated multiplicity counted from the
//! first knot reaches the maximal multiplicity order, and ends where the
//! same count from the last knot does.
//!
//! A closed curve can be described by an open sequence too. Its knots
//! outside the normalized basis then repeat the period so that the first
//! and last `order - 1` basis functions wrap around.

use crate::{
    coincident,
    family::{Blueprint, CurveClosure, NormalizedBasis, Representation},
    input::{
        check_max_multiplicity_order, knots_from_increasing_values,
        knots_from_strictly_increasing_values,
    },
    CheckResult, Knot, KnotArray, KnotErrorKind, KnotSequenceParams,
    SequenceExtremity, StrictlyIncreasingIndex, KNOT_COINCIDENCE_TOLERANCE,
};

/// Closed curves of order 2 need at least that many spans in their basis.
pub(crate) const MIN_ORDER_TWO_CLOSED_CURVE_SPANS: usize = 2;

pub(crate) fn blueprint(
    params: &KnotSequenceParams,
    representation: Representation,
    family: &'static str,
) -> CheckResult<Blueprint> {
    use KnotSequenceParams as P;
    use Representation::{Increasing, StrictlyIncreasing};

    let order = params.max_multiplicity_order();
    let (array, closure, allows_c0_discontinuity) = match (params, representation)
    {
        (P::NoKnotOpenCurve { .. }, _) => {
            (no_knot_open_curve(order)?, CurveClosure::OpenCurve, false)
        }
        (P::NoKnotClosedCurve { .. }, _) => {
            (no_knot_closed_curve(order)?, CurveClosure::ClosedCurve, false)
        }
        (P::UniformOpen {
            bspl_basis_size, ..
        }, _) => (
            uniform(order, *bspl_basis_size)?,
            CurveClosure::OpenCurve,
            false,
        ),
        (P::UniformlySpreadInterknotsOpen {
            bspl_basis_size, ..
        }, _) => (
            uniformly_spread_interknots(order, *bspl_basis_size)?,
            CurveClosure::OpenCurve,
            false,
        ),
        (P::IncreasingOpen { knots, .. }, Increasing) => {
            check_max_multiplicity_order(order, 1)?;
            (
                knots_from_increasing_values(knots)?,
                CurveClosure::OpenCurve,
                false,
            )
        }
        (P::IncreasingOpenUpToC0Discontinuity { knots, .. }, Increasing) => {
            check_max_multiplicity_order(order, 1)?;
            (
                knots_from_increasing_values(knots)?,
                CurveClosure::OpenCurve,
                true,
            )
        }
        (P::IncreasingOpenClosedCurve { periodic_knots, .. }, Increasing) => {
            check_max_multiplicity_order(order, 2)?;
            let period = knots_from_increasing_values(periodic_knots)?;
            (
                closed_curve_from_period(&period, order)?,
                CurveClosure::ClosedCurve,
                false,
            )
        }
        (P::IncreasingOpenClosedCurveAllKnots { knots, .. }, Increasing) => {
            check_max_multiplicity_order(order, 2)?;
            (
                knots_from_increasing_values(knots)?,
                CurveClosure::ClosedCurve,
                false,
            )
        }
        (P::StrictlyIncreasingOpen {
            knots,
            multiplicities,
            ..
        }, StrictlyIncreasing) => {
            check_max_multiplicity_order(order, 1)?;
            (
                knots_from_strictly_increasing_values(knots, multiplicities)?,
                CurveClosure::OpenCurve,
                false,
            )
        }
        (P::StrictlyIncreasingOpenUpToC0Discontinuity {
            knots,
            multiplicities,
            ..
        }, StrictlyIncreasing) => {
            check_max_multiplicity_order(order, 1)?;
            (
                knots_from_strictly_increasing_values(knots, multiplicities)?,
                CurveClosure::OpenCurve,
                true,
            )
        }
        (P::StrictlyIncreasingOpenClosedCurve {
            periodic_knots,
            multiplicities,
            ..
        }, StrictlyIncreasing) => {
            check_max_multiplicity_order(order, 2)?;
            let period = knots_from_strictly_increasing_values(
                periodic_knots,
                multiplicities,
            )?;
            (
                closed_curve_from_period(&period, order)?,
                CurveClosure::ClosedCurve,
                false,
            )
        }
        (P::StrictlyIncreasingOpenClosedCurveAllKnots {
            knots,
            multiplicities,
            ..
        }, StrictlyIncreasing) => {
            check_max_multiplicity_order(order, 2)?;
            (
                knots_from_strictly_increasing_values(knots, multiplicities)?,
                CurveClosure::ClosedCurve,
                false,
            )
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
        closure,
        allows_c0_discontinuity,
    })
}

/// `[0, 1]`, both knots repeated `order` times.
pub(crate) fn no_knot_open_curve(order: u32) -> CheckResult<KnotArray> {
    check_max_multiplicity_order(order, 1)?;
    KnotArray::new(vec![Knot::new(0.0, order)?, Knot::new(1.0, order)?])
}

/// A unit spaced period `[0, order]` extended into a closed curve.
pub(crate) fn no_knot_closed_curve(order: u32) -> CheckResult<KnotArray> {
    check_max_multiplicity_order(order, 2)?;
    let period = KnotArray::new(
        (0..=order)
            .map(|abscissa| Knot::new(f64::from(abscissa), 1))
            .collect::<CheckResult<Vec<_>>>()?,
    )?;
    closed_curve_from_period(&period, order)
}

/// `basis_size + order` unit spaced simple knots, the origin sitting at the
/// `order`-th one.
pub(crate) fn uniform(order: u32, basis_size: usize) -> CheckResult<KnotArray> {
    check_max_multiplicity_order(order, 2)?;
    check_basis_size(order, basis_size)?;
    let shift = f64::from(order - 1);
    KnotArray::new(
        (0..basis_size + order as usize)
            .map(|position| Knot::new(position as f64 - shift, 1))
            .collect::<CheckResult<Vec<_>>>()?,
    )
}

/// Clamped ends of multiplicity `order` around unit spaced simple knots.
pub(crate) fn uniformly_spread_interknots(
    order: u32,
    basis_size: usize,
) -> CheckResult<KnotArray> {
    check_max_multiplicity_order(order, 2)?;
    check_basis_size(order, basis_size)?;
    let interior = basis_size - order as usize;
    let mut knots = Vec::with_capacity(interior + 2);
    knots.push(Knot::new(0.0, order)?);
    for abscissa in 1..=interior {
        knots.push(Knot::new(abscissa as f64, 1)?);
    }
    knots.push(Knot::new((interior + 1) as f64, order)?);
    KnotArray::new(knots)
}

fn check_basis_size(order: u32, basis_size: usize) -> CheckResult<()> {
    if basis_size < order as usize {
        return Err(KnotErrorKind::BasisSizeTooSmall {
            size: basis_size,
            min: order as usize,
        });
    }
    Ok(())
}

/// Extends one period into an open closed-curve knot array.
///
/// The knots preceding the origin repeat the end of the period, the knots
/// following u max repeat its start, until the cumulated multiplicity at
/// each extremity equals `order`. The outermost knot added on each side
/// keeps only the multiplicity still missing.
pub(crate) fn closed_curve_from_period(
    period: &KnotArray,
    order: u32,
) -> CheckResult<KnotArray> {
    let knots = period.knots();
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
    period.check_max_multiplicity_order_consistency(order)?;

    let length = last.abscissa() - first.abscissa();
    let missing = order - first.multiplicity();

    let mut prefix = Vec::new();
    let mut remaining = missing;
    let mut cycle = 1.0;
    while remaining > 0 {
        for knot in knots[..knots.len() - 1].iter().rev() {
            let multiplicity = knot.multiplicity().min(remaining);
            prefix.push(Knot::new(
                knot.abscissa() - cycle * length,
                multiplicity,
            )?);
            remaining -= multiplicity;
            if remaining == 0 {
                break;
            }
        }
        cycle += 1.0;
    }
    prefix.reverse();

    let mut suffix = Vec::new();
    remaining = missing;
    cycle = 1.0;
    while remaining > 0 {
        for knot in &knots[1..] {
            let multiplicity = knot.multiplicity().min(remaining);
            suffix.push(Knot::new(
                knot.abscissa() + cycle * length,
                multiplicity,
            )?);
            remaining -= multiplicity;
            if remaining == 0 {
                break;
            }
        }
        cycle += 1.0;
    }

    KnotArray::new(
        prefix
            .into_iter()
            .chain(knots.iter().copied())
            .chain(suffix)
            .collect(),
    )
}

/// Rebuilds the knots outside the normalized basis from the period the
/// basis spans.
pub(crate) fn regenerate_closed_curve_exterior(
    array: &KnotArray,
    order: u32,
) -> CheckResult<KnotArray> {
    let basis = locate_normalized_basis(array, order)?;
    closed_curve_from_period(&array.sub_array(basis.origin, basis.end)?, order)
}

pub(crate) fn locate_normalized_basis(
    array: &KnotArray,
    order: u32,
) -> CheckResult<NormalizedBasis> {
    if array.is_empty() {
        return Err(KnotErrorKind::EmptyKnots);
    }
    let origin = array
        .normalized_basis_at_sequence_start(order)
        .strictly_normalized(SequenceExtremity::Start)?;
    let end = array
        .normalized_basis_at_sequence_end(order)
        .strictly_normalized(SequenceExtremity::End)?;
    if end <= origin {
        return Err(KnotErrorKind::DegenerateBasisInterval {
            start: origin.value(),
            end: end.value(),
        });
    }
    Ok(NormalizedBasis { origin, end })
}

pub(crate) fn check_editable_knot(
    basis: NormalizedBasis,
    index: StrictlyIncreasingIndex,
) -> CheckResult<()> {
    if index <= basis.origin || index >= basis.end {
        return Err(KnotErrorKind::KnotAtBasisBoundary {
            index: index.value(),
        });
    }
    Ok(())
}

/// Both extremities of the sequence are clamped.
pub(crate) fn is_knot_multiplicity_non_uniform(
    array: &KnotArray,
    order: u32,
) -> bool {
    match (array.knots().first(), array.knots().last()) {
        (Some(first), Some(last)) => {
            first.multiplicity() == order && last.multiplicity() == order
        }
        _ => false,
    }
}

/// Closure rules of an open sequence describing a closed curve.
///
/// Knots outside the basis that do not repeat the period are reported on
/// the warning channel only.
pub(crate) fn check_closed_curve(
    array: &KnotArray,
    basis: NormalizedBasis,
    order: u32,
) -> CheckResult<()> {
    let start = array.knot_multiplicity(basis.origin)?;
    let end = array.knot_multiplicity(basis.end)?;
    if start != end {
        return Err(KnotErrorKind::UnequalClosureMultiplicities { start, end });
    }
    if order == 2 && basis.span_count() < MIN_ORDER_TWO_CLOSED_CURVE_SPANS {
        return Err(KnotErrorKind::TooFewSpansForClosedCurve {
            spans: basis.span_count(),
            min: MIN_ORDER_TWO_CLOSED_CURVE_SPANS,
        });
    }
    let expected = closed_curve_from_period(
        &array.sub_array(basis.origin, basis.end)?,
        order,
    )?;
    if !same_knots(&expected, array) {
        advise!(
            "the knots outside the normalized basis do not repeat the period [0, {}]: \
             the curve is not closed with the expected continuity",
            array.knot(basis.end)?.abscissa()
        );
    }
    Ok(())
}

fn same_knots(a: &KnotArray, b: &KnotArray) -> bool {
    a.len() == b.len()
        && a.knots().iter().zip(b.knots()).all(|(a, b)| {
            a.multiplicity() == b.multiplicity()
                && coincident(
                    a.abscissa(),
                    b.abscissa(),
                    KNOT_COINCIDENCE_TOLERANCE,
                )
        })
}
