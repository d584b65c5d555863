//! Construction strategies for knot sequences.

/// Selects how a knot sequence is built and carries what that strategy
/// needs.
///
/// Open families accept the `NoKnot*Curve`, `Uniform*Open` strategies and
/// the explicit variants of their own representation; periodic families
/// accept `NoKnotPeriodicCurve`, `UniformPeriodic` and the periodic variant
/// of their own representation.
#[derive(Clone, Debug, PartialEq)]
pub enum KnotSequenceParams {
    /// Two knots, at 0 and 1, each repeated `max_multiplicity_order` times.
    NoKnotOpenCurve { max_multiplicity_order: u32 },

    /// The smallest uniform closed curve in open representation.
    NoKnotClosedCurve { max_multiplicity_order: u32 },

    /// Unit spaced knots of multiplicity one spanning a basis of
    /// `bspl_basis_size` functions.
    UniformOpen {
        max_multiplicity_order: u32,
        bspl_basis_size: usize,
    },

    /// Knots of multiplicity `max_multiplicity_order` at both ends and unit
    /// spaced interior knots, spanning a basis of `bspl_basis_size`
    /// functions.
    UniformlySpreadInterknotsOpen {
        max_multiplicity_order: u32,
        bspl_basis_size: usize,
    },

    /// Repeated abscissae, no C0 discontinuity.
    IncreasingOpen {
        max_multiplicity_order: u32,
        knots: Vec<f64>,
    },

    /// Repeated abscissae where intermediate knots may reach the order.
    IncreasingOpenUpToC0Discontinuity {
        max_multiplicity_order: u32,
        knots: Vec<f64>,
    },

    /// One period of repeated abscissae, from 0 to the period, extended
    /// into an open closed-curve sequence.
    IncreasingOpenClosedCurve {
        max_multiplicity_order: u32,
        periodic_knots: Vec<f64>,
    },

    /// Every repeated abscissa of an open closed-curve sequence.
    IncreasingOpenClosedCurveAllKnots {
        max_multiplicity_order: u32,
        knots: Vec<f64>,
    },

    /// Distinct abscissae with their multiplicities, no C0 discontinuity.
    StrictlyIncreasingOpen {
        max_multiplicity_order: u32,
        knots: Vec<f64>,
        multiplicities: Vec<u32>,
    },

    /// Distinct abscissae where intermediate knots may reach the order.
    StrictlyIncreasingOpenUpToC0Discontinuity {
        max_multiplicity_order: u32,
        knots: Vec<f64>,
        multiplicities: Vec<u32>,
    },

    /// One period of distinct abscissae extended into an open closed-curve
    /// sequence.
    StrictlyIncreasingOpenClosedCurve {
        max_multiplicity_order: u32,
        periodic_knots: Vec<f64>,
        multiplicities: Vec<u32>,
    },

    /// Every distinct knot of an open closed-curve sequence.
    StrictlyIncreasingOpenClosedCurveAllKnots {
        max_multiplicity_order: u32,
        knots: Vec<f64>,
        multiplicities: Vec<u32>,
    },

    /// The smallest uniform periodic sequence.
    NoKnotPeriodicCurve { max_multiplicity_order: u32 },

    /// A uniform period holding `bspl_basis_size` basis functions.
    UniformPeriodic {
        max_multiplicity_order: u32,
        bspl_basis_size: usize,
    },

    /// One period of repeated abscissae.
    IncreasingPeriodic {
        max_multiplicity_order: u32,
        periodic_knots: Vec<f64>,
    },

    /// One period of distinct abscissae with their multiplicities.
    StrictlyIncreasingPeriodic {
        max_multiplicity_order: u32,
        periodic_knots: Vec<f64>,
        multiplicities: Vec<u32>,
    },
}

impl KnotSequenceParams {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NoKnotOpenCurve { .. } => "NoKnotOpenCurve",
            Self::NoKnotClosedCurve { .. } => "NoKnotClosedCurve",
            Self::UniformOpen { .. } => "UniformOpen",
            Self::UniformlySpreadInterknotsOpen { .. } => {
                "UniformlySpreadInterknotsOpen"
            }
            Self::IncreasingOpen { .. } => "IncreasingOpen",
            Self::IncreasingOpenUpToC0Discontinuity { .. } => {
                "IncreasingOpenUpToC0Discontinuity"
            }
            Self::IncreasingOpenClosedCurve { .. } => {
                "IncreasingOpenClosedCurve"
            }
            Self::IncreasingOpenClosedCurveAllKnots { .. } => {
                "IncreasingOpenClosedCurveAllKnots"
            }
            Self::StrictlyIncreasingOpen { .. } => "StrictlyIncreasingOpen",
            Self::StrictlyIncreasingOpenUpToC0Discontinuity { .. } => {
                "StrictlyIncreasingOpenUpToC0Discontinuity"
            }
            Self::StrictlyIncreasingOpenClosedCurve { .. } => {
                "StrictlyIncreasingOpenClosedCurve"
            }
            Self::StrictlyIncreasingOpenClosedCurveAllKnots { .. } => {
                "StrictlyIncreasingOpenClosedCurveAllKnots"
            }
            Self::NoKnotPeriodicCurve { .. } => "NoKnotPeriodicCurve",
            Self::UniformPeriodic { .. } => "UniformPeriodic",
            Self::IncreasingPeriodic { .. } => "IncreasingPeriodic",
            Self::StrictlyIncreasingPeriodic { .. } => {
                "StrictlyIncreasingPeriodic"
            }
        }
    }

    /// The maximal multiplicity order every strategy carries.
    pub const fn max_multiplicity_order(&self) -> u32 {
        match self {
            Self::NoKnotOpenCurve {
                max_multiplicity_order,
            }
            | Self::NoKnotClosedCurve {
                max_multiplicity_order,
            }
            | Self::UniformOpen {
                max_multiplicity_order,
                ..
            }
            | Self::UniformlySpreadInterknotsOpen {
                max_multiplicity_order,
                ..
            }
            | Self::IncreasingOpen {
                max_multiplicity_order,
                ..
            }
            | Self::IncreasingOpenUpToC0Discontinuity {
                max_multiplicity_order,
                ..
            }
            | Self::IncreasingOpenClosedCurve {
                max_multiplicity_order,
                ..
            }
            | Self::IncreasingOpenClosedCurveAllKnots {
                max_multiplicity_order,
                ..
            }
            | Self::StrictlyIncreasingOpen {
                max_multiplicity_order,
                ..
            }
            | Self::StrictlyIncreasingOpenUpToC0Discontinuity {
                max_multiplicity_order,
                ..
            }
            | Self::StrictlyIncreasingOpenClosedCurve {
                max_multiplicity_order,
                ..
            }
            | Self::StrictlyIncreasingOpenClosedCurveAllKnots {
                max_multiplicity_order,
                ..
            }
            | Self::NoKnotPeriodicCurve {
                max_multiplicity_order,
            }
            | Self::UniformPeriodic {
                max_multiplicity_order,
                ..
            }
            | Self::IncreasingPeriodic {
                max_multiplicity_order,
                ..
            }
            | Self::StrictlyIncreasingPeriodic {
                max_multiplicity_order,
                ..
            } => *max_multiplicity_order,
        }
    }
}
