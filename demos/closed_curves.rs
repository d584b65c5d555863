//! Closed curves as open and as periodic knot sequences.

use bspline_knots::prelude::*;

fn main() -> Result<(), KnotSequenceError> {
    // A cubic closed curve given by one period
    let open = IncreasingOpenKnotSequence::new(
        KnotSequenceParams::IncreasingOpenClosedCurve {
            max_multiplicity_order: 3,
            periodic_knots: vec![0.0, 1.0, 2.0, 3.0],
        },
    )?;
    println!("Open closed curve:  {:?}", open.all_abscissae());
    println!("Period:             {:?}", open.period());

    // The knots outside the basis follow interior edits
    let refined = open.insert_knot(&[0.5], 1)?;
    println!("After insertion:    {:?}", refined.all_abscissae());

    // The same curve as a periodic sequence
    let periodic: IncreasingPeriodicKnotSequenceClosedCurve =
        refined.to_periodic_closed_curve()?;
    println!("\nPeriodic:           {:?}", periodic.all_abscissae());
    println!(
        "Two periods:        {:?}",
        periodic.extract_subset_of_abscissae(
            IncreasingIndex::new(0),
            IncreasingIndex::new(2 * periodic.bspline_basis_size()),
        )?
    );

    // Raising the multiplicity at the junction raises both ends
    let raised = periodic
        .raise_knot_multiplicity(&[StrictlyIncreasingIndex::new(0)], 1, true)?;
    println!("Junction raised:    {:?}", raised.multiplicities());

    let back = raised.to_open_closed_curve()?;
    println!("\nBack to open:       {:?}", back.all_abscissae());

    Ok(())
}
