//! Basic usage example for bspline-knots

use bspline_knots::prelude::*;

fn main() -> Result<(), KnotSequenceError> {
    println!("=== Open Knot Sequences ===\n");

    // Example 1: A clamped cubic sequence
    let sequence =
        IncreasingOpenKnotSequence::new(KnotSequenceParams::IncreasingOpen {
            max_multiplicity_order: 3,
            knots: vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0],
        })?;
    println!("Knots:       {:?}", sequence.all_abscissae());
    println!("u max:       {}", sequence.u_max());
    println!("Basis size:  {}", sequence.bspline_basis_size());

    // Example 2: Span lookup
    println!("\nSpans:");
    for u in [0.0, 0.5, 1.0, 2.75, 3.0] {
        println!("  u = {:.2} -> span {}", u, sequence.find_span(u)?);
    }

    // Example 3: Refinement never touches the original
    println!("\nInsertion:");
    let refined = sequence.insert_knot(&[1.5], 2)?;
    println!("  abscissae:      {:?}", refined.distinct_abscissae());
    println!("  multiplicities: {:?}", refined.multiplicities());
    println!("  original still: {:?}", sequence.distinct_abscissae());

    // Example 4: Rejected edits report the operation that failed
    println!("\nRejected edits:");
    if let Err(error) = sequence.insert_knot(&[3.5], 1) {
        println!("  {error}");
    }
    if let Err(error) =
        sequence.raise_knot_multiplicity(&[StrictlyIncreasingIndex::new(0)], 1, true)
    {
        println!("  {error}");
    }

    // Example 5: The same knots, one entry per distinct abscissa
    println!("\nDistinct knots:");
    let strict = StrictlyIncreasingOpenKnotSequence::from(refined);
    for knot in &strict {
        println!("  {:.2} x{}", knot.abscissa(), knot.multiplicity());
    }

    Ok(())
}
