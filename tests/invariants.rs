//! Randomized checks of the sequence invariants.

use bspline_knots::{
    IncreasingIndex, KnotSequenceParams, StrictlyIncreasingIndex,
    StrictlyIncreasingOpenKnotSequence, KNOT_COINCIDENCE_TOLERANCE,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 12345;
const ITERATIONS: u64 = 200;

/// A clamped sequence starting at the origin with random spacing and random
/// interior multiplicities.
fn random_clamped(seed: u64) -> StrictlyIncreasingOpenKnotSequence {
    let mut rng = StdRng::seed_from_u64(seed);
    let order = rng.random_range(2..=5u32);
    let count = rng.random_range(2..12usize);

    let mut abscissa = 0.0;
    let mut knots = Vec::with_capacity(count);
    let mut multiplicities = Vec::with_capacity(count);
    for position in 0..count {
        knots.push(abscissa);
        multiplicities.push(if position == 0 || position == count - 1 {
            order
        } else {
            rng.random_range(1..order)
        });
        abscissa += rng.random_range(0.1..2.0);
    }

    StrictlyIncreasingOpenKnotSequence::new(
        KnotSequenceParams::StrictlyIncreasingOpen {
            max_multiplicity_order: order,
            knots,
            multiplicities,
        },
    )
    .unwrap()
}

#[test]
fn construction_upholds_invariants() {
    for seed in SEED..SEED + ITERATIONS {
        let sequence = random_clamped(seed);
        assert!(sequence.check_invariants().is_ok());
        assert!(sequence.check_max_multiplicity_order_consistency().is_ok());
        assert!(sequence
            .check_max_knot_multiplicity_at_intermediate_knots()
            .is_ok());
        assert_eq!(sequence.abscissa(sequence.index_knot_origin()).unwrap(), 0.0);
    }
}

#[test]
fn index_conversion_round_trip() {
    for seed in SEED..SEED + ITERATIONS {
        let sequence = random_clamped(seed);
        for position in 0..sequence.len() {
            let index = StrictlyIncreasingIndex::new(position);
            let increasing = sequence.to_increasing_index(index).unwrap();
            assert_eq!(
                sequence.to_strictly_increasing_index(increasing).unwrap(),
                index
            );
        }
        let total = sequence.all_abscissae().len();
        assert!(sequence
            .to_strictly_increasing_index(IncreasingIndex::new(total))
            .is_err());
    }
}

#[test]
fn span_contains_its_abscissa() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for seed in SEED..SEED + ITERATIONS {
        let sequence = random_clamped(seed);
        let u_max = sequence.u_max();
        for _ in 0..20 {
            let u = rng.random_range(0.0..=u_max);
            let span = sequence.find_span(u).unwrap();
            let next = StrictlyIncreasingIndex::new(span.value() + 1);
            let low = sequence.abscissa(span).unwrap();
            let high = sequence.abscissa(next).unwrap();
            assert!(low <= u + KNOT_COINCIDENCE_TOLERANCE);
            assert!(u < high || next == sequence.index_u_max());
        }
    }
}

#[test]
fn double_reversal_restores_the_knots() {
    for seed in SEED..SEED + ITERATIONS {
        let sequence = random_clamped(seed);
        let twice = sequence
            .revert_knot_sequence()
            .and_then(|reverted| reverted.revert_knot_sequence())
            .unwrap();
        assert_eq!(twice.multiplicities(), sequence.multiplicities());
        for (a, b) in twice
            .distinct_abscissae()
            .into_iter()
            .zip(sequence.distinct_abscissae())
        {
            assert!((a - b).abs() < 1e-9);
        }
    }
}

#[test]
fn edits_uphold_invariants() {
    let mut rng = StdRng::seed_from_u64(SEED);
    for seed in SEED..SEED + ITERATIONS {
        let sequence = random_clamped(seed);
        let u = rng.random_range(0.0..sequence.u_max());
        if sequence.is_abscissa_coinciding_with_knot(u) {
            continue;
        }
        let refined = sequence.insert_knot(&[u], 1).unwrap();
        assert!(refined.check_invariants().is_ok());
        assert_eq!(refined.len(), sequence.len() + 1);
        assert_eq!(refined.u_max(), sequence.u_max());

        let span = refined.find_span(u).unwrap();
        let restored = refined.remove_knot(span).unwrap();
        assert_eq!(restored.distinct_abscissae(), sequence.distinct_abscissae());
    }
}
