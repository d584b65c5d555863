//! Conversions between knot sequence families.

use crate::{
    family::{Blueprint, CurveClosure},
    open, KnotErrorKind, KnotResult, KnotSequence, KnotSequenceFamily,
    OpenIncreasing, OpenStrictlyIncreasing, PeriodicIncreasing,
    PeriodicStrictlyIncreasing,
};

impl<F: KnotSequenceFamily> KnotSequence<F> {
    /// The same knots presented in the other representation of the same
    /// topology.
    ///
    /// Never fails: both representations share one storage and one set of
    /// rules.
    pub fn into_counterpart(self) -> KnotSequence<F::Counterpart> {
        self.retag()
    }
}

macro_rules! counterpart_from {
    ($from:ty, $to:ty) => {
        impl From<KnotSequence<$from>> for KnotSequence<$to> {
            fn from(sequence: KnotSequence<$from>) -> Self {
                sequence.into_counterpart()
            }
        }
    };
}

counterpart_from!(OpenIncreasing, OpenStrictlyIncreasing);
counterpart_from!(OpenStrictlyIncreasing, OpenIncreasing);
counterpart_from!(PeriodicIncreasing, PeriodicStrictlyIncreasing);
counterpart_from!(PeriodicStrictlyIncreasing, PeriodicIncreasing);

macro_rules! closed_curve_conversions {
    ($open:ty, $periodic:ty) => {
        impl KnotSequence<$open> {
            /// The period of an open closed-curve sequence as a periodic
            /// sequence.
            ///
            /// # Errors
            ///
            /// Fails with [`KnotErrorKind::NotAClosedCurve`] if the sequence
            /// describes an open curve.
            pub fn to_periodic_closed_curve(
                &self,
            ) -> KnotResult<KnotSequence<$periodic>> {
                const OPERATION: &str = "to_periodic_closed_curve";
                if !self.is_closed_curve() {
                    return Err(KnotErrorKind::NotAClosedCurve.at(OPERATION));
                }
                let basis = self.normalized_basis();
                self.knot_array()
                    .sub_array(basis.origin, basis.end)
                    .and_then(|array| {
                        KnotSequence::assemble(Blueprint {
                            array,
                            max_multiplicity_order: self.max_multiplicity_order(),
                            closure: CurveClosure::ClosedCurve,
                            allows_c0_discontinuity: false,
                        })
                    })
                    .map_err(|kind| kind.at(OPERATION))
            }
        }

        impl KnotSequence<$periodic> {
            /// The period extended on both sides into an open closed-curve
            /// sequence.
            pub fn to_open_closed_curve(&self) -> KnotResult<KnotSequence<$open>> {
                let order = self.max_multiplicity_order();
                open::closed_curve_from_period(self.knot_array(), order)
                    .and_then(|array| {
                        KnotSequence::assemble(Blueprint {
                            array,
                            max_multiplicity_order: order,
                            closure: CurveClosure::ClosedCurve,
                            allows_c0_discontinuity: false,
                        })
                    })
                    .map_err(|kind| kind.at("to_open_closed_curve"))
            }
        }
    };
}

closed_curve_conversions!(OpenIncreasing, PeriodicIncreasing);
closed_curve_conversions!(OpenStrictlyIncreasing, PeriodicStrictlyIncreasing);

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn test_counterpart_keeps_knots() {
        let sequence =
            IncreasingOpenKnotSequence::new(KnotSequenceParams::IncreasingOpen {
                max_multiplicity_order: 2,
                knots: vec![0.0, 0.0, 0.5, 1.0, 1.0],
            })
            .unwrap();
        let strict = StrictlyIncreasingOpenKnotSequence::from(sequence.clone());
        assert_eq!(strict.knot_array(), sequence.knot_array());
        assert_eq!(strict.iter().count(), 3);
        assert_eq!(sequence.iter().count(), 5);
        assert_eq!(strict.into_counterpart(), sequence);
    }

    #[test]
    fn test_open_curve_is_not_periodic() {
        let sequence = IncreasingOpenKnotSequence::new(
            KnotSequenceParams::NoKnotOpenCurve {
                max_multiplicity_order: 3,
            },
        )
        .unwrap();
        let error = sequence.to_periodic_closed_curve().unwrap_err();
        assert_eq!(error.kind, KnotErrorKind::NotAClosedCurve);
        assert_eq!(error.operation, "to_periodic_closed_curve");
    }
}
