//! A single knot: an abscissa repeated `multiplicity` times.

use crate::{CheckResult, KnotErrorKind};

/// A knot of a B-spline knot sequence.
///
/// A knot always carries a finite abscissa and a multiplicity of at least
/// one. A knot with multiplicity zero does not exist; it is simply absent
/// from its sequence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Knot {
    abscissa: f64,
    multiplicity: u32,
}

impl Knot {
    /// Creates a knot.
    ///
    /// # Errors
    ///
    /// Fails if `abscissa` is not finite or `multiplicity` is zero.
    pub fn new(abscissa: f64, multiplicity: u32) -> CheckResult<Self> {
        if !abscissa.is_finite() {
            return Err(KnotErrorKind::NonFiniteAbscissa(abscissa));
        }
        if multiplicity == 0 {
            return Err(KnotErrorKind::NullMultiplicity { index: 0 });
        }
        Ok(Self {
            abscissa,
            multiplicity,
        })
    }

    #[inline]
    pub fn abscissa(&self) -> f64 {
        self.abscissa
    }

    #[inline]
    pub fn multiplicity(&self) -> u32 {
        self.multiplicity
    }

    /// Moves the knot to `abscissa`.
    ///
    /// # Errors
    ///
    /// Fails if `abscissa` is not finite; the knot is left untouched.
    pub fn set_abscissa(&mut self, abscissa: f64) -> CheckResult<()> {
        if !abscissa.is_finite() {
            return Err(KnotErrorKind::NonFiniteAbscissa(abscissa));
        }
        self.abscissa = abscissa;
        Ok(())
    }

    /// Raises the multiplicity by `by`.
    ///
    /// # Errors
    ///
    /// Fails if `by` is zero.
    pub fn increment_multiplicity(&mut self, by: u32) -> CheckResult<()> {
        if by < 1 {
            return Err(KnotErrorKind::NullMultiplicityChange(by));
        }
        self.multiplicity = self.multiplicity.saturating_add(by);
        Ok(())
    }

    /// Lowers the multiplicity by `by`.
    ///
    /// # Errors
    ///
    /// Fails if `by` is zero or the multiplicity would drop below one.
    pub fn decrement_multiplicity(&mut self, by: u32) -> CheckResult<()> {
        if by < 1 {
            return Err(KnotErrorKind::NullMultiplicityChange(by));
        }
        if self.multiplicity <= by {
            return Err(KnotErrorKind::MultiplicityUnderflow {
                multiplicity: self.multiplicity,
                amount: by,
            });
        }
        self.multiplicity -= by;
        Ok(())
    }
}
