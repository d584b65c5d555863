//! The knot sequence shared by all families.

use crate::{
    family::{Blueprint, CurveClosure, NormalizedBasis},
    input::check_max_multiplicity_order,
    open, CheckResult, IncreasingIndex, Knot, KnotArray, KnotErrorKind,
    KnotResult, KnotSequenceFamily, KnotSequenceParams, SequenceKind,
    StrictlyIncreasingIndex, KNOT_COINCIDENCE_TOLERANCE, KNOT_SEQUENCE_ORIGIN,
};
use core::marker::PhantomData;
use std::collections::BTreeSet;

/// A validated knot sequence of family `F`.
///
/// The knots are stored once per distinct abscissa whatever the family.
/// The normalized basis starts at the origin and ends at [`u_max()`]; its
/// boundaries are derived again from the knots after every edit.
///
/// Editing methods take `&self` and return a new sequence. On error the
/// sequence they were called on is unchanged.
///
/// [`u_max()`]: Self::u_max
#[derive(Clone, Debug, PartialEq)]
pub struct KnotSequence<F: KnotSequenceFamily> {
    array: KnotArray,
    max_multiplicity_order: u32,
    basis: NormalizedBasis,
    u_max: f64,
    closure: CurveClosure,
    allows_c0_discontinuity: bool,
    is_knot_spacing_uniform: bool,
    is_knot_multiplicity_uniform: bool,
    is_knot_multiplicity_non_uniform: bool,
    family: PhantomData<F>,
}

impl<F: KnotSequenceFamily> KnotSequence<F> {
    /// Builds a sequence from one of the construction strategies of its
    /// family.
    ///
    /// # Errors
    ///
    /// Fails if `params` selects a strategy of another family, if the input
    /// is malformed, or if the resulting knots violate a sequence rule.
    pub fn new(params: KnotSequenceParams) -> KnotResult<Self> {
        trace_edit!("building a {} from {} parameters", F::NAME, params.name());
        F::blueprint(&params)
            .and_then(Self::assemble)
            .map_err(|kind| kind.at(F::CONSTRUCTOR))
    }

    /// Validates a blueprint and derives the basis boundaries and flags.
    pub(crate) fn assemble(blueprint: Blueprint) -> CheckResult<Self> {
        let Blueprint {
            array,
            max_multiplicity_order: order,
            closure,
            allows_c0_discontinuity,
        } = blueprint;

        check_max_multiplicity_order(order, 1)?;
        if array.is_empty() {
            return Err(KnotErrorKind::EmptyKnots);
        }
        array.check_max_multiplicity_order_consistency(order)?;
        if !allows_c0_discontinuity {
            array.check_max_knot_multiplicity_at_intermediate_knots(order)?;
        }

        let basis = F::locate_normalized_basis(&array, order)?;
        let origin = array.knot(basis.origin)?.abscissa();
        if origin != KNOT_SEQUENCE_ORIGIN {
            return Err(KnotErrorKind::OriginNotAtZero(origin));
        }
        if basis.end <= basis.origin {
            return Err(KnotErrorKind::DegenerateBasisInterval {
                start: basis.origin.value(),
                end: basis.end.value(),
            });
        }
        if closure == CurveClosure::ClosedCurve && !F::KIND.is_periodic() {
            open::check_closed_curve(&array, basis, order)?;
        }

        let u_max = array.knot(basis.end)?.abscissa();
        Ok(Self {
            is_knot_spacing_uniform: array.is_knot_spacing_uniform(),
            is_knot_multiplicity_uniform: array.is_knot_multiplicity_uniform(),
            is_knot_multiplicity_non_uniform: F::is_knot_multiplicity_non_uniform(
                &array, order,
            ),
            array,
            max_multiplicity_order: order,
            basis,
            u_max,
            closure,
            allows_c0_discontinuity,
            family: PhantomData,
        })
    }

    fn blueprint_with(&self, array: KnotArray) -> Blueprint {
        Blueprint {
            array,
            max_multiplicity_order: self.max_multiplicity_order,
            closure: self.closure,
            allows_c0_discontinuity: self.allows_c0_discontinuity,
        }
    }

    /// Turns an edited copy of the knots into a new sequence.
    fn commit(&self, working: KnotArray) -> CheckResult<Self> {
        let array = if self.is_open_closed_curve() {
            open::regenerate_closed_curve_exterior(
                &working,
                self.max_multiplicity_order,
            )?
        } else {
            working
        };
        let sequence = Self::assemble(self.blueprint_with(array))?;
        trace_edit!(
            "{} edited: {} distinct knots, u max {}",
            F::NAME,
            sequence.array.len(),
            sequence.u_max
        );
        Ok(sequence)
    }

    /// Keeps every field and changes the family.
    pub(crate) fn retag<G: KnotSequenceFamily>(self) -> KnotSequence<G> {
        KnotSequence {
            array: self.array,
            max_multiplicity_order: self.max_multiplicity_order,
            basis: self.basis,
            u_max: self.u_max,
            closure: self.closure,
            allows_c0_discontinuity: self.allows_c0_discontinuity,
            is_knot_spacing_uniform: self.is_knot_spacing_uniform,
            is_knot_multiplicity_uniform: self.is_knot_multiplicity_uniform,
            is_knot_multiplicity_non_uniform: self
                .is_knot_multiplicity_non_uniform,
            family: PhantomData,
        }
    }

    fn is_open_closed_curve(&self) -> bool {
        self.closure == CurveClosure::ClosedCurve && !F::KIND.is_periodic()
    }

    #[inline]
    pub fn kind(&self) -> SequenceKind {
        F::KIND
    }

    #[inline]
    pub fn knot_array(&self) -> &KnotArray {
        &self.array
    }

    #[inline]
    pub fn max_multiplicity_order(&self) -> u32 {
        self.max_multiplicity_order
    }

    /// Abscissa where the normalized basis ends.
    #[inline]
    pub fn u_max(&self) -> f64 {
        self.u_max
    }

    /// Distinct-knot index where the normalized basis starts.
    #[inline]
    pub fn index_knot_origin(&self) -> StrictlyIncreasingIndex {
        self.basis.origin
    }

    /// Distinct-knot index where the normalized basis ends.
    #[inline]
    pub fn index_u_max(&self) -> StrictlyIncreasingIndex {
        self.basis.end
    }

    #[inline]
    pub fn normalized_basis(&self) -> NormalizedBasis {
        self.basis
    }

    #[inline]
    pub fn closure(&self) -> CurveClosure {
        self.closure
    }

    #[inline]
    pub fn is_closed_curve(&self) -> bool {
        self.closure == CurveClosure::ClosedCurve
    }

    /// Whether intermediate knots may reach the maximal multiplicity order.
    #[inline]
    pub fn allows_c0_discontinuity(&self) -> bool {
        self.allows_c0_discontinuity
    }

    #[inline]
    pub fn is_knot_spacing_uniform(&self) -> bool {
        self.is_knot_spacing_uniform
    }

    /// Every knot has multiplicity one.
    #[inline]
    pub fn is_knot_multiplicity_uniform(&self) -> bool {
        self.is_knot_multiplicity_uniform
    }

    /// Both extremities of an open sequence carry the maximal multiplicity
    /// order. Always `false` for periodic sequences.
    #[inline]
    pub fn is_knot_multiplicity_non_uniform(&self) -> bool {
        self.is_knot_multiplicity_non_uniform
    }

    /// Length of the period of a closed curve, `None` for open curves.
    pub fn period(&self) -> Option<f64> {
        self.is_closed_curve()
            .then_some(self.u_max - KNOT_SEQUENCE_ORIGIN)
    }

    /// Number of B-spline basis functions the sequence defines.
    pub fn bspline_basis_size(&self) -> usize {
        let total = self.array.total_multiplicity();
        if F::KIND.is_periodic() {
            total
                - self
                    .array
                    .knots()
                    .last()
                    .map_or(0, |knot| knot.multiplicity() as usize)
        } else {
            total - self.max_multiplicity_order as usize
        }
    }

    /// Number of distinct knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    pub fn distinct_abscissae(&self) -> Vec<f64> {
        self.array.distinct_abscissae()
    }

    pub fn multiplicities(&self) -> Vec<u32> {
        self.array.multiplicities()
    }

    /// Every abscissa repeated by its multiplicity.
    pub fn all_abscissae(&self) -> Vec<f64> {
        self.array.all_abscissae()
    }

    /// Iterates in the representation of the family: repeated abscissae for
    /// increasing families, distinct [`Knot`]s otherwise.
    pub fn iter(&self) -> std::vec::IntoIter<F::Element> {
        F::elements(&self.array).into_iter()
    }

    pub fn abscissa(&self, index: StrictlyIncreasingIndex) -> KnotResult<f64> {
        self.array
            .knot(index)
            .map(Knot::abscissa)
            .map_err(|kind| kind.at("abscissa"))
    }

    pub fn knot_multiplicity(
        &self,
        index: StrictlyIncreasingIndex,
    ) -> KnotResult<u32> {
        self.array
            .knot_multiplicity(index)
            .map_err(|kind| kind.at("knot_multiplicity"))
    }

    /// Multiplicity of the knot at `abscissa`.
    ///
    /// Returns 0 and emits a warning if no knot lies there.
    pub fn knot_multiplicity_at_abscissa(&self, abscissa: f64) -> u32 {
        match self.array.coincident_knot(abscissa) {
            Some(index) => self.array.knots()[index.value()].multiplicity(),
            None => {
                advise!(
                    "abscissa {} matches no knot of the {}, its multiplicity is 0",
                    abscissa,
                    F::NAME
                );
                0
            }
        }
    }

    pub fn is_abscissa_coinciding_with_knot(&self, abscissa: f64) -> bool {
        self.array.is_abscissa_coinciding_with_knot(abscissa)
    }

    /// First position of a distinct knot in the flattened sequence.
    pub fn to_increasing_index(
        &self,
        index: StrictlyIncreasingIndex,
    ) -> KnotResult<IncreasingIndex> {
        self.array
            .to_increasing_index(index)
            .map_err(|kind| kind.at("to_increasing_index"))
    }

    pub fn to_strictly_increasing_index(
        &self,
        index: IncreasingIndex,
    ) -> KnotResult<StrictlyIncreasingIndex> {
        self.array
            .to_strictly_increasing_index(index)
            .map_err(|kind| kind.at("to_strictly_increasing_index"))
    }

    /// Fails if a knot is repeated more often than the order allows.
    pub fn check_max_multiplicity_order_consistency(&self) -> KnotResult<()> {
        self.array
            .check_max_multiplicity_order_consistency(self.max_multiplicity_order)
            .map_err(|kind| kind.at("check_max_multiplicity_order_consistency"))
    }

    /// Fails if a knot between the first and the last one reaches the
    /// order.
    pub fn check_max_knot_multiplicity_at_intermediate_knots(
        &self,
    ) -> KnotResult<()> {
        self.array
            .check_max_knot_multiplicity_at_intermediate_knots(
                self.max_multiplicity_order,
            )
            .map_err(|kind| {
                kind.at("check_max_knot_multiplicity_at_intermediate_knots")
            })
    }

    /// Runs every construction check again on the current knots.
    pub fn check_invariants(&self) -> KnotResult<()> {
        let rebuilt = Self::assemble(self.blueprint_with(self.array.clone()))
            .map_err(|kind| kind.at("check_invariants"))?;
        debug_assert_eq!(&rebuilt, self);
        Ok(())
    }

    /// Index of the span containing `u`.
    ///
    /// Returns `i` with `knot[i] <= u < knot[i + 1]`, except at u max which
    /// belongs to the last span of the basis.
    ///
    /// # Errors
    ///
    /// Fails if `u` lies outside `[0, u_max]`.
    pub fn find_span(&self, u: f64) -> KnotResult<StrictlyIncreasingIndex> {
        self.find_span_checked(u).map_err(|kind| kind.at("find_span"))
    }

    fn find_span_checked(&self, u: f64) -> CheckResult<StrictlyIncreasingIndex> {
        if !u.is_finite() {
            return Err(KnotErrorKind::NonFiniteAbscissa(u));
        }
        if u < KNOT_SEQUENCE_ORIGIN - KNOT_COINCIDENCE_TOLERANCE {
            return Err(KnotErrorKind::AbscissaBelowOrigin(u));
        }
        if u > self.u_max + KNOT_COINCIDENCE_TOLERANCE {
            return Err(KnotErrorKind::AbscissaAboveUMax {
                abscissa: u,
                u_max: self.u_max,
            });
        }
        if let Some(index) = self.array.coincident_knot(u) {
            return Ok(if index >= self.basis.end {
                StrictlyIncreasingIndex::new(self.basis.end.value() - 1)
            } else {
                index.max(self.basis.origin)
            });
        }
        Ok(self.array.search_span(u, self.basis.origin, self.basis.end))
    }

    /// Index of the span containing `u` in the flattened sequence: the last
    /// occurrence of the knot opening the span.
    pub fn find_span_increasing(&self, u: f64) -> KnotResult<IncreasingIndex> {
        const OPERATION: &str = "find_span_increasing";
        let span = self.find_span_checked(u).map_err(|kind| kind.at(OPERATION))?;
        let first = self
            .array
            .to_increasing_index(span)
            .map_err(|kind| kind.at(OPERATION))?;
        let multiplicity = self.array.knots()[span.value()].multiplicity();
        Ok(IncreasingIndex::new(
            first.value() + multiplicity as usize - 1,
        ))
    }

    /// Flattened abscissae from `start` to `end`, both included.
    ///
    /// Periodic sequences repeat their period, so `end` may go past the
    /// listed knots.
    pub fn extract_subset_of_abscissae(
        &self,
        start: IncreasingIndex,
        end: IncreasingIndex,
    ) -> KnotResult<Vec<f64>> {
        self.extract_subset_checked(start, end)
            .map_err(|kind| kind.at("extract_subset_of_abscissae"))
    }

    fn extract_subset_checked(
        &self,
        start: IncreasingIndex,
        end: IncreasingIndex,
    ) -> CheckResult<Vec<f64>> {
        if start > end {
            return Err(KnotErrorKind::InvalidIndexRange {
                start: start.value(),
                end: end.value(),
            });
        }
        let abscissae = self.array.all_abscissae();
        if !F::KIND.is_periodic() {
            return abscissae
                .get(start.value()..=end.value())
                .map(<[f64]>::to_vec)
                .ok_or(KnotErrorKind::IndexOutOfRange {
                    index: end.value(),
                    len: abscissae.len(),
                });
        }
        let period = self.u_max - KNOT_SEQUENCE_ORIGIN;
        let cycle_len = self.bspline_basis_size();
        Ok((start.value()..=end.value())
            .map(|position| {
                abscissae[position % cycle_len]
                    + (position / cycle_len) as f64 * period
            })
            .collect())
    }

    /// Inserts a knot of multiplicity `multiplicity` at each of `abscissae`.
    ///
    /// # Errors
    ///
    /// Fails if an abscissa coincides with a knot, lies outside
    /// `[0, u_max]`, or if `multiplicity` is too large for an intermediate
    /// knot.
    pub fn insert_knot(
        &self,
        abscissae: &[f64],
        multiplicity: u32,
    ) -> KnotResult<Self> {
        self.insert_knot_checked(abscissae, multiplicity)
            .map_err(|kind| kind.at("insert_knot"))
    }

    fn insert_knot_checked(
        &self,
        abscissae: &[f64],
        multiplicity: u32,
    ) -> CheckResult<Self> {
        let order = self.max_multiplicity_order;
        for &abscissa in abscissae {
            let index = self
                .array
                .knots()
                .partition_point(|existing| existing.abscissa() < abscissa);
            let knot = Knot::new(abscissa, multiplicity).map_err(|err| match err {
                KnotErrorKind::NullMultiplicity { .. } => {
                    KnotErrorKind::NullMultiplicity { index }
                }
                other => other,
            })?;
            if let Some(existing) = self.array.coincident_knot(abscissa) {
                return Err(KnotErrorKind::AbscissaTooClose {
                    abscissa,
                    knot: self.array.knots()[existing.value()].abscissa(),
                });
            }
            if abscissa < KNOT_SEQUENCE_ORIGIN {
                return Err(KnotErrorKind::AbscissaBelowOrigin(abscissa));
            }
            if abscissa > self.u_max {
                return Err(KnotErrorKind::AbscissaAboveUMax {
                    abscissa,
                    u_max: self.u_max,
                });
            }
            if knot.multiplicity() > order {
                return Err(KnotErrorKind::MultiplicityExceedsOrder {
                    index,
                    multiplicity,
                    order,
                });
            }
            if knot.multiplicity() == order
                && self.forbids_intermediate_at_order()
            {
                return Err(KnotErrorKind::IntermediateKnotAtOrder {
                    index,
                    order,
                });
            }
        }

        let mut working = self.array.clone();
        for &abscissa in abscissae {
            working.insert_knot_mut(Knot::new(abscissa, multiplicity)?)?;
        }
        self.commit(working)
    }

    /// Resolves edit targets: range checked, boundary checked when asked,
    /// coupled periodic knots folded onto the first knot.
    fn edit_targets(
        &self,
        indices: &[StrictlyIncreasingIndex],
        check_consistency: bool,
    ) -> CheckResult<BTreeSet<StrictlyIncreasingIndex>> {
        let mut targets = BTreeSet::new();
        for &index in indices {
            self.array.knot(index)?;
            if check_consistency {
                F::check_editable_knot(self.basis, index)?;
            }
            targets.insert(match F::coupled_knot(&self.array, index) {
                Some(partner) => index.min(partner),
                None => index,
            });
        }
        Ok(targets)
    }

    fn with_coupled_knots(
        &self,
        targets: &BTreeSet<StrictlyIncreasingIndex>,
    ) -> BTreeSet<StrictlyIncreasingIndex> {
        targets
            .iter()
            .flat_map(|&index| {
                core::iter::once(index)
                    .chain(F::coupled_knot(&self.array, index))
            })
            .collect()
    }

    /// Intermediate knots may not reach the order, except for C0 sequences
    /// and order 1 bases.
    fn forbids_intermediate_at_order(&self) -> bool {
        !self.allows_c0_discontinuity && self.max_multiplicity_order > 1
    }

    fn is_intermediate(&self, index: StrictlyIncreasingIndex) -> bool {
        index.value() > 0 && index.value() + 1 < self.array.len()
    }

    /// Raises the multiplicity of each knot in `indices` by `amount`.
    ///
    /// With `check_consistency`, knots at or outside the normalized basis
    /// boundaries of an open sequence are refused. A periodic boundary knot
    /// drags its partner along.
    pub fn raise_knot_multiplicity(
        &self,
        indices: &[StrictlyIncreasingIndex],
        amount: u32,
        check_consistency: bool,
    ) -> KnotResult<Self> {
        self.raise_knot_multiplicity_checked(indices, amount, check_consistency)
            .map_err(|kind| kind.at("raise_knot_multiplicity"))
    }

    fn raise_knot_multiplicity_checked(
        &self,
        indices: &[StrictlyIncreasingIndex],
        amount: u32,
        check_consistency: bool,
    ) -> CheckResult<Self> {
        if amount < 1 {
            return Err(KnotErrorKind::NullMultiplicityChange(amount));
        }
        let order = self.max_multiplicity_order;
        let targets = self.edit_targets(indices, check_consistency)?;
        for &index in &targets {
            let multiplicity =
                self.array.knot_multiplicity(index)?.saturating_add(amount);
            if multiplicity > order {
                return Err(KnotErrorKind::MultiplicityExceedsOrder {
                    index: index.value(),
                    multiplicity,
                    order,
                });
            }
            if multiplicity == order
                && self.forbids_intermediate_at_order()
                && self.is_intermediate(index)
            {
                return Err(KnotErrorKind::IntermediateKnotAtOrder {
                    index: index.value(),
                    order,
                });
            }
        }

        let mut working = self.array.clone();
        for index in self.with_coupled_knots(&targets) {
            working.raise_knot_multiplicity_mut(index, amount)?;
        }
        self.commit(working)
    }

    /// Lowers the multiplicity of each knot in `indices` by one. A knot
    /// reaching zero is removed.
    pub fn decrement_knot_multiplicity(
        &self,
        indices: &[StrictlyIncreasingIndex],
        check_consistency: bool,
    ) -> KnotResult<Self> {
        self.decrement_knot_multiplicity_checked(indices, 1, check_consistency)
            .map_err(|kind| kind.at("decrement_knot_multiplicity"))
    }

    /// Removes the knot at `index` whatever its multiplicity.
    pub fn remove_knot(&self, index: StrictlyIncreasingIndex) -> KnotResult<Self> {
        const OPERATION: &str = "remove_knot";
        let multiplicity = self
            .array
            .knot_multiplicity(index)
            .map_err(|kind| kind.at(OPERATION))?;
        self.decrement_knot_multiplicity_checked(&[index], multiplicity, true)
            .map_err(|kind| kind.at(OPERATION))
    }

    fn decrement_knot_multiplicity_checked(
        &self,
        indices: &[StrictlyIncreasingIndex],
        amount: u32,
        check_consistency: bool,
    ) -> CheckResult<Self> {
        let targets = self.edit_targets(indices, check_consistency)?;
        for &index in &targets {
            if F::coupled_knot(&self.array, index).is_some()
                && self.array.knot_multiplicity(index)? <= amount
            {
                return Err(KnotErrorKind::PeriodicBoundaryRemoval {
                    index: index.value(),
                });
            }
        }

        let mut working = self.array.clone();
        // Highest index first so removals do not shift pending targets.
        for index in self.with_coupled_knots(&targets).into_iter().rev() {
            working.decrement_knot_multiplicity_mut(index, amount)?;
        }
        self.commit(working)
    }

    /// The sequence with its knot spacing mirrored, origin reset to 0.
    pub fn revert_knot_sequence(&self) -> KnotResult<Self> {
        self.revert_knot_sequence_checked()
            .map_err(|kind| kind.at("revert_knot_sequence"))
    }

    fn revert_knot_sequence_checked(&self) -> CheckResult<Self> {
        let mut working = self.array.revert_knot_spacing()?;
        let basis =
            F::locate_normalized_basis(&working, self.max_multiplicity_order)?;
        let origin = working.knot(basis.origin)?.abscissa();
        working.shift_abscissae_mut(KNOT_SEQUENCE_ORIGIN - origin)?;
        self.commit(working)
    }
}

impl<'a, F: KnotSequenceFamily> IntoIterator for &'a KnotSequence<F> {
    type Item = F::Element;
    type IntoIter = std::vec::IntoIter<F::Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    fn reference() -> IncreasingOpenKnotSequence {
        IncreasingOpenKnotSequence::new(KnotSequenceParams::IncreasingOpen {
            max_multiplicity_order: 3,
            knots: vec![0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0],
        })
        .unwrap()
    }

    #[test]
    fn test_find_span_resolves_coincident_abscissae() {
        let sequence = reference();
        assert_eq!(sequence.find_span(0.0).unwrap().value(), 0);
        assert_eq!(sequence.find_span(1.0).unwrap().value(), 1);
        assert_eq!(sequence.find_span(2.5).unwrap().value(), 2);
        assert_eq!(sequence.find_span(3.0).unwrap().value(), 2);
        assert_eq!(sequence.find_span_increasing(0.5).unwrap().value(), 2);
        assert_eq!(sequence.find_span_increasing(3.0).unwrap().value(), 4);
        assert!(sequence.find_span(-0.5).is_err());
        assert!(sequence.find_span(3.5).is_err());
    }

    #[test]
    fn test_failed_edit_leaves_sequence_untouched() {
        let sequence = reference();
        let before = sequence.clone();
        assert!(sequence
            .raise_knot_multiplicity(&[StrictlyIncreasingIndex::new(1)], 2, true)
            .is_err());
        assert_eq!(sequence, before);
    }

    #[test]
    fn test_remove_knot() {
        let sequence = reference()
            .remove_knot(StrictlyIncreasingIndex::new(2))
            .unwrap();
        assert_eq!(sequence.distinct_abscissae(), vec![0.0, 1.0, 3.0]);
        assert_eq!(sequence.u_max(), 3.0);
        assert!(reference().remove_knot(StrictlyIncreasingIndex::new(0)).is_err());
    }

    #[test]
    fn test_null_insertion_reports_its_position() {
        let error = reference().insert_knot(&[1.5], 0).unwrap_err();
        assert_eq!(error.kind, KnotErrorKind::NullMultiplicity { index: 2 });
        assert!(error.is_multiplicity_violation());
    }

    #[test]
    fn test_order_one_accepts_simple_intermediate_knots() {
        let sequence =
            IncreasingOpenKnotSequence::new(KnotSequenceParams::IncreasingOpen {
                max_multiplicity_order: 1,
                knots: vec![0.0, 1.0, 2.0],
            })
            .unwrap();
        let refined = sequence.insert_knot(&[0.5], 1).unwrap();
        assert_eq!(refined.distinct_abscissae(), vec![0.0, 0.5, 1.0, 2.0]);
        assert!(sequence
            .raise_knot_multiplicity(&[StrictlyIncreasingIndex::new(1)], 1, true)
            .is_err());
    }

    #[test]
    fn test_basis_size() {
        assert_eq!(reference().bspline_basis_size(), 5);
        assert_eq!(reference().period(), None);
    }
}
