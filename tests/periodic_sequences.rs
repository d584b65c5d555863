//! Construction and editing of periodic knot sequences.

use bspline_knots::{
    IncreasingIndex, IncreasingPeriodicKnotSequenceClosedCurve, Knot,
    KnotErrorKind, KnotSequenceParams, StrictlyIncreasingIndex,
    StrictlyIncreasingPeriodicKnotSequenceClosedCurve,
};

fn index(value: usize) -> StrictlyIncreasingIndex {
    StrictlyIncreasingIndex::new(value)
}

fn periodic(order: u32, knots: &[f64]) -> IncreasingPeriodicKnotSequenceClosedCurve {
    IncreasingPeriodicKnotSequenceClosedCurve::new(
        KnotSequenceParams::IncreasingPeriodic {
            max_multiplicity_order: order,
            periodic_knots: knots.to_vec(),
        },
    )
    .unwrap()
}

#[test]
fn fully_clamped_period() {
    let sequence = periodic(3, &[0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);
    assert_eq!(sequence.multiplicities(), vec![3, 3]);
    assert!(!sequence.is_knot_multiplicity_uniform());
    assert!(!sequence.is_knot_multiplicity_non_uniform());
    assert_eq!(sequence.u_max(), 1.0);
    assert_eq!(sequence.period(), Some(1.0));
    assert_eq!(sequence.bspline_basis_size(), 3);
    assert!(sequence.is_closed_curve());
}

#[test]
fn wraparound_decrement() {
    let sequence = periodic(3, &[0.0, 0.0, 1.0, 2.0, 3.0, 3.0]);
    assert_eq!(sequence.multiplicities(), vec![2, 1, 1, 2]);

    let lowered = sequence
        .decrement_knot_multiplicity(&[index(0)], true)
        .unwrap();
    assert_eq!(lowered.multiplicities(), vec![1, 1, 1, 1]);
    assert_eq!(lowered.u_max(), 3.0);

    let from_the_end = sequence
        .decrement_knot_multiplicity(&[index(3)], true)
        .unwrap();
    assert_eq!(from_the_end, lowered);

    let both = sequence
        .decrement_knot_multiplicity(&[index(0), index(3)], true)
        .unwrap();
    assert_eq!(both, lowered);

    let error = lowered
        .decrement_knot_multiplicity(&[index(0)], true)
        .unwrap_err();
    assert_eq!(error.kind, KnotErrorKind::PeriodicBoundaryRemoval { index: 0 });
}

#[test]
fn decrement_removes_interior_knots_next_to_the_boundary() {
    let sequence = periodic(2, &[0.0, 0.0, 1.0, 2.0, 3.0, 4.0, 4.0]);
    let lowered = sequence
        .decrement_knot_multiplicity(&[index(0), index(2)], true)
        .unwrap();
    assert_eq!(lowered.distinct_abscissae(), vec![0.0, 1.0, 3.0, 4.0]);
    assert_eq!(lowered.multiplicities(), vec![1, 1, 1, 1]);
}

#[test]
fn raising_a_boundary_knot_raises_its_partner() {
    let sequence = IncreasingPeriodicKnotSequenceClosedCurve::new(
        KnotSequenceParams::NoKnotPeriodicCurve {
            max_multiplicity_order: 3,
        },
    )
    .unwrap();
    assert_eq!(sequence.distinct_abscissae(), vec![0.0, 1.0, 2.0, 3.0]);
    assert!(sequence.is_knot_spacing_uniform());
    assert!(sequence.is_knot_multiplicity_uniform());

    let raised = sequence
        .raise_knot_multiplicity(&[index(3)], 1, true)
        .unwrap();
    assert_eq!(raised.multiplicities(), vec![2, 1, 1, 2]);

    let error = sequence
        .raise_knot_multiplicity(&[index(1)], 2, true)
        .unwrap_err();
    assert!(matches!(
        error.kind,
        KnotErrorKind::IntermediateKnotAtOrder { index: 1, order: 3 }
    ));
}

#[test]
fn insert_and_remove() {
    let sequence = periodic(3, &[0.0, 1.0, 2.0, 3.0]);
    let refined = sequence.insert_knot(&[1.5], 2).unwrap();
    assert_eq!(refined.distinct_abscissae(), vec![0.0, 1.0, 1.5, 2.0, 3.0]);
    assert_eq!(refined.bspline_basis_size(), 5);

    let error = sequence.insert_knot(&[3.0 + 1e-12], 1).unwrap_err();
    assert!(error.is_insertion_violation());

    let removed = refined.remove_knot(index(2)).unwrap();
    assert_eq!(removed, sequence);
    assert!(sequence.remove_knot(index(0)).is_err());
}

#[test]
fn subset_wraps_across_periods() {
    let sequence = periodic(3, &[0.0, 0.0, 1.0, 2.0, 3.0, 3.0]);
    assert_eq!(
        sequence
            .extract_subset_of_abscissae(
                IncreasingIndex::new(2),
                IncreasingIndex::new(7)
            )
            .unwrap(),
        vec![1.0, 2.0, 3.0, 3.0, 4.0, 5.0]
    );
}

#[test]
fn span_search() {
    let sequence = periodic(2, &[0.0, 1.0, 2.5, 4.0]);
    assert_eq!(sequence.find_span(0.0).unwrap().value(), 0);
    assert_eq!(sequence.find_span(2.0).unwrap().value(), 1);
    assert_eq!(sequence.find_span(2.5).unwrap().value(), 2);
    assert_eq!(sequence.find_span(4.0).unwrap().value(), 2);
    assert!(sequence.find_span(4.5).is_err());
}

#[test]
fn uniform_period() {
    let sequence = IncreasingPeriodicKnotSequenceClosedCurve::new(
        KnotSequenceParams::UniformPeriodic {
            max_multiplicity_order: 3,
            bspl_basis_size: 5,
        },
    )
    .unwrap();
    assert_eq!(sequence.u_max(), 5.0);
    assert_eq!(sequence.bspline_basis_size(), 5);
}

#[test]
fn revert_period() {
    let sequence = periodic(2, &[0.0, 0.0, 1.0, 3.0, 3.0]);
    let reverted = sequence.revert_knot_sequence().unwrap();
    assert_eq!(reverted.distinct_abscissae(), vec![0.0, 2.0, 3.0]);
    assert_eq!(reverted.multiplicities(), vec![2, 1, 2]);
}

#[test]
fn strictly_increasing_period() {
    let sequence = StrictlyIncreasingPeriodicKnotSequenceClosedCurve::new(
        KnotSequenceParams::StrictlyIncreasingPeriodic {
            max_multiplicity_order: 3,
            periodic_knots: vec![0.0, 1.0, 2.0],
            multiplicities: vec![2, 1, 2],
        },
    )
    .unwrap();
    let knots: Vec<Knot> = sequence.iter().collect();
    assert_eq!(knots.len(), 3);
    assert_eq!(knots[1].multiplicity(), 1);

    let error = StrictlyIncreasingPeriodicKnotSequenceClosedCurve::new(
        KnotSequenceParams::StrictlyIncreasingPeriodic {
            max_multiplicity_order: 3,
            periodic_knots: vec![0.0, 1.0, 2.0],
            multiplicities: vec![2, 1, 1],
        },
    )
    .unwrap_err();
    assert_eq!(
        error.kind,
        KnotErrorKind::UnequalClosureMultiplicities { start: 2, end: 1 }
    );
    assert_eq!(
        error.operation,
        "StrictlyIncreasingPeriodicKnotSequenceClosedCurve::new"
    );
}

#[test]
fn period_too_short_for_the_order() {
    let error = IncreasingPeriodicKnotSequenceClosedCurve::new(
        KnotSequenceParams::IncreasingPeriodic {
            max_multiplicity_order: 4,
            periodic_knots: vec![0.0, 1.0, 2.0, 3.0],
        },
    )
    .unwrap_err();
    assert_eq!(
        error.kind,
        KnotErrorKind::BasisSizeTooSmall { size: 3, min: 4 }
    );
}

#[test]
fn order_one_builders() {
    let sequence = IncreasingPeriodicKnotSequenceClosedCurve::new(
        KnotSequenceParams::NoKnotPeriodicCurve {
            max_multiplicity_order: 1,
        },
    )
    .unwrap();
    assert_eq!(sequence.distinct_abscissae(), vec![0.0, 1.0, 2.0]);
    assert_eq!(sequence.u_max(), 2.0);
    assert_eq!(sequence.bspline_basis_size(), 2);

    let sequence = StrictlyIncreasingPeriodicKnotSequenceClosedCurve::new(
        KnotSequenceParams::UniformPeriodic {
            max_multiplicity_order: 1,
            bspl_basis_size: 3,
        },
    )
    .unwrap();
    assert_eq!(sequence.distinct_abscissae(), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(sequence.u_max(), 3.0);
    assert!(sequence.check_invariants().is_ok());

    let refined = sequence.insert_knot(&[1.5], 1).unwrap();
    assert_eq!(refined.bspline_basis_size(), 4);

    let error = IncreasingPeriodicKnotSequenceClosedCurve::new(
        KnotSequenceParams::UniformPeriodic {
            max_multiplicity_order: 1,
            bspl_basis_size: 1,
        },
    )
    .unwrap_err();
    assert_eq!(
        error.kind,
        KnotErrorKind::BasisSizeTooSmall { size: 1, min: 2 }
    );
}
