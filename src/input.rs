//! Checks on raw construction input, run before a [`KnotArray`] exists.

use crate::{CheckResult, Knot, KnotArray, KnotErrorKind};

/// Checks that `values` is non-empty, finite and non-decreasing.
pub fn check_knot_increasing_values(values: &[f64]) -> CheckResult<()> {
    check_finite(values)?;
    match values.windows(2).position(|pair| pair[1] < pair[0]) {
        Some(index) => Err(KnotErrorKind::NotIncreasing { index: index + 1 }),
        None => Ok(()),
    }
}

/// Checks that `values` is non-empty, finite and strictly increasing.
pub fn check_knot_strictly_increasing_values(
    values: &[f64],
) -> CheckResult<()> {
    check_finite(values)?;
    match values.windows(2).position(|pair| pair[1] <= pair[0]) {
        Some(index) => {
            Err(KnotErrorKind::NotStrictlyIncreasing { index: index + 1 })
        }
        None => Ok(()),
    }
}

fn check_finite(values: &[f64]) -> CheckResult<()> {
    if values.is_empty() {
        return Err(KnotErrorKind::EmptyKnots);
    }
    match values.iter().find(|value| !value.is_finite()) {
        Some(value) => Err(KnotErrorKind::NonFiniteAbscissa(*value)),
        None => Ok(()),
    }
}

/// Checks the order a construction strategy is asked for.
pub(crate) fn check_max_multiplicity_order(
    order: u32,
    min: u32,
) -> CheckResult<()> {
    if order < min {
        return Err(KnotErrorKind::MaxMultiplicityOrderTooSmall { order, min });
    }
    Ok(())
}

/// Builds the distinct knots of an increasing (repeated) knot list.
///
/// Consecutive equal values collapse into one knot whose multiplicity is
/// the length of the run.
pub fn knots_from_increasing_values(values: &[f64]) -> CheckResult<KnotArray> {
    check_knot_increasing_values(values)?;
    let mut knots: Vec<Knot> = Vec::new();
    for &value in values {
        match knots.last_mut() {
            Some(last) if last.abscissa() == value => {
                last.increment_multiplicity(1)?;
            }
            _ => knots.push(Knot::new(value, 1)?),
        }
    }
    KnotArray::new(knots)
}

/// Builds knots from distinct abscissae and their parallel multiplicities.
pub fn knots_from_strictly_increasing_values(
    values: &[f64],
    multiplicities: &[u32],
) -> CheckResult<KnotArray> {
    if values.len() != multiplicities.len() {
        return Err(KnotErrorKind::LengthMismatch {
            knots: values.len(),
            multiplicities: multiplicities.len(),
        });
    }
    check_knot_strictly_increasing_values(values)?;
    let knots = values
        .iter()
        .zip(multiplicities)
        .enumerate()
        .map(|(index, (&abscissa, &multiplicity))| {
            Knot::new(abscissa, multiplicity).map_err(|err| match err {
                KnotErrorKind::NullMultiplicity { .. } => {
                    KnotErrorKind::NullMultiplicity { index }
                }
                other => other,
            })
        })
        .collect::<CheckResult<Vec<_>>>()?;
    KnotArray::new(knots)
}
