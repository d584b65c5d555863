//! The distinct-knot storage shared by every knot sequence family.
//!
//! [`KnotArray`] keeps knots with strictly increasing abscissae and carries
//! the algorithms that do not depend on the topology of a sequence: the
//! multiplicity checks, uniformity tests, index conversion, span search,
//! normalized basis boundary detection and spacing reversal.
//!
//! The `*_mut` methods form the in-place editing tier. They are only ever
//! called on a working copy owned by the operation that edits it.

use crate::{
    coincident, CheckResult, IncreasingIndex, Knot, KnotErrorKind,
    SequenceExtremity, StrictlyIncreasingIndex, KNOT_COINCIDENCE_TOLERANCE,
};

/// How the cumulated multiplicities at one end of a sequence relate to the
/// maximal multiplicity order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NormalizedBasisAtExtremity {
    /// The cumulated multiplicity reaches the order exactly.
    StrictlyNormalized,
    /// The cumulated multiplicity jumps past the order.
    OverDefined,
    /// The far end of the sequence is reached before the order.
    NotNormalized,
}

/// Where the normalized basis starts or ends, and how well it is defined.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasisBoundary {
    pub index: StrictlyIncreasingIndex,
    pub status: NormalizedBasisAtExtremity,
}

impl BasisBoundary {
    /// Returns the boundary index if the basis is strictly normalized there.
    pub fn strictly_normalized(
        self,
        extremity: SequenceExtremity,
    ) -> CheckResult<StrictlyIncreasingIndex> {
        match self.status {
            NormalizedBasisAtExtremity::StrictlyNormalized => Ok(self.index),
            NormalizedBasisAtExtremity::OverDefined => {
                Err(KnotErrorKind::OverDefined(extremity))
            }
            NormalizedBasisAtExtremity::NotNormalized => {
                Err(KnotErrorKind::NotNormalized(extremity))
            }
        }
    }
}

/// Knots with strictly increasing abscissae.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KnotArray {
    knots: Vec<Knot>,
}

impl KnotArray {
    /// Wraps `knots`.
    ///
    /// # Errors
    ///
    /// Fails if the abscissae are not strictly increasing.
    pub fn new(knots: Vec<Knot>) -> CheckResult<Self> {
        if let Some(index) = knots
            .windows(2)
            .position(|pair| pair[1].abscissa() <= pair[0].abscissa())
        {
            return Err(KnotErrorKind::NotStrictlyIncreasing { index: index + 1 });
        }
        Ok(Self { knots })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    #[inline]
    pub fn knots(&self) -> &[Knot] {
        &self.knots
    }

    /// Index of the last distinct knot, `None` when empty.
    pub fn last_index(&self) -> Option<StrictlyIncreasingIndex> {
        self.knots
            .len()
            .checked_sub(1)
            .map(StrictlyIncreasingIndex::new)
    }

    /// Bounds checked access to a distinct knot.
    pub fn knot(&self, index: StrictlyIncreasingIndex) -> CheckResult<&Knot> {
        self.knots
            .get(index.value())
            .ok_or(KnotErrorKind::IndexOutOfRange {
                index: index.value(),
                len: self.knots.len(),
            })
    }

    pub fn distinct_abscissae(&self) -> Vec<f64> {
        self.knots.iter().map(Knot::abscissa).collect()
    }

    pub fn multiplicities(&self) -> Vec<u32> {
        self.knots.iter().map(Knot::multiplicity).collect()
    }

    /// The flattened abscissae, each repeated by its multiplicity.
    pub fn all_abscissae(&self) -> Vec<f64> {
        self.knots
            .iter()
            .flat_map(|knot| {
                core::iter::repeat(knot.abscissa())
                    .take(knot.multiplicity() as usize)
            })
            .collect()
    }

    /// Length of the flattened knot list.
    pub fn total_multiplicity(&self) -> usize {
        self.knots
            .iter()
            .map(|knot| knot.multiplicity() as usize)
            .sum()
    }

    pub fn knot_multiplicity(
        &self,
        index: StrictlyIncreasingIndex,
    ) -> CheckResult<u32> {
        self.knot(index).map(Knot::multiplicity)
    }

    /// Fails if any knot is repeated more than `order` times.
    pub fn check_max_multiplicity_order_consistency(
        &self,
        order: u32,
    ) -> CheckResult<()> {
        match self
            .knots
            .iter()
            .position(|knot| knot.multiplicity() > order)
        {
            Some(index) => Err(KnotErrorKind::MultiplicityExceedsOrder {
                index,
                multiplicity: self.knots[index].multiplicity(),
                order,
            }),
            None => Ok(()),
        }
    }

    /// Fails if a knot strictly between the first and the last one is
    /// repeated `order` times.
    ///
    /// An order 1 basis is discontinuous at every knot, so it never fails.
    pub fn check_max_knot_multiplicity_at_intermediate_knots(
        &self,
        order: u32,
    ) -> CheckResult<()> {
        if order <= 1 {
            return Ok(());
        }
        let last = self.knots.len().saturating_sub(1);
        match self
            .knots
            .iter()
            .enumerate()
            .skip(1)
            .take(last.saturating_sub(1))
            .find(|(_, knot)| knot.multiplicity() == order)
        {
            Some((index, _)) => {
                Err(KnotErrorKind::IntermediateKnotAtOrder { index, order })
            }
            None => Ok(()),
        }
    }

    /// Whether consecutive distinct abscissae are equally spaced.
    pub fn is_knot_spacing_uniform(&self) -> bool {
        let mut spacings = self
            .knots
            .windows(2)
            .map(|pair| pair[1].abscissa() - pair[0].abscissa());
        match spacings.next() {
            Some(first) => spacings.all(|spacing| {
                coincident(spacing, first, KNOT_COINCIDENCE_TOLERANCE)
            }),
            None => true,
        }
    }

    /// Whether every knot has multiplicity one.
    pub fn is_knot_multiplicity_uniform(&self) -> bool {
        self.knots.iter().all(|knot| knot.multiplicity() == 1)
    }

    /// The knot lying within tolerance of `abscissa`, if any.
    pub fn coincident_knot(
        &self,
        abscissa: f64,
    ) -> Option<StrictlyIncreasingIndex> {
        self.knots
            .iter()
            .position(|knot| {
                coincident(
                    knot.abscissa(),
                    abscissa,
                    KNOT_COINCIDENCE_TOLERANCE,
                )
            })
            .map(StrictlyIncreasingIndex::new)
    }

    pub fn is_abscissa_coinciding_with_knot(&self, abscissa: f64) -> bool {
        self.coincident_knot(abscissa).is_some()
    }

    /// Position of the first occurrence of a distinct knot in the flattened
    /// list.
    pub fn to_increasing_index(
        &self,
        index: StrictlyIncreasingIndex,
    ) -> CheckResult<IncreasingIndex> {
        self.knot(index)?;
        Ok(IncreasingIndex::new(
            self.knots[..index.value()]
                .iter()
                .map(|knot| knot.multiplicity() as usize)
                .sum(),
        ))
    }

    /// The distinct knot whose abscissa sits at `index` in the flattened
    /// list.
    pub fn to_strictly_increasing_index(
        &self,
        index: IncreasingIndex,
    ) -> CheckResult<StrictlyIncreasingIndex> {
        let mut cumulated = 0usize;
        for (position, knot) in self.knots.iter().enumerate() {
            cumulated += knot.multiplicity() as usize;
            if index.value() < cumulated {
                return Ok(StrictlyIncreasingIndex::new(position));
            }
        }
        Err(KnotErrorKind::IndexOutOfRange {
            index: index.value(),
            len: cumulated,
        })
    }

    /// Binary search of the span containing `u`.
    ///
    /// `u` must lie strictly between the knots at `low` and `high` and
    /// coincide with none of them; coincident abscissae are resolved by the
    /// caller. Returns `i` with `knot[i] < u < knot[i + 1]`.
    pub fn search_span(
        &self,
        u: f64,
        low: StrictlyIncreasingIndex,
        high: StrictlyIncreasingIndex,
    ) -> StrictlyIncreasingIndex {
        let mut low = low.value();
        let mut high = high.value().min(self.knots.len().saturating_sub(1));
        while high > low + 1 {
            let middle = (low + high) / 2;
            if u < self.knots[middle].abscissa() {
                high = middle;
            } else {
                low = middle;
            }
        }
        StrictlyIncreasingIndex::new(low)
    }

    /// Walks from the first knot inwards until the cumulated multiplicity
    /// reaches `order`.
    pub fn normalized_basis_at_sequence_start(
        &self,
        order: u32,
    ) -> BasisBoundary {
        Self::walk_boundary(
            self.knots.iter().enumerate(),
            order,
            StrictlyIncreasingIndex::new(self.knots.len().saturating_sub(1)),
        )
    }

    /// Walks from the last knot inwards until the cumulated multiplicity
    /// reaches `order`.
    pub fn normalized_basis_at_sequence_end(&self, order: u32) -> BasisBoundary {
        Self::walk_boundary(
            self.knots.iter().enumerate().rev(),
            order,
            StrictlyIncreasingIndex::new(0),
        )
    }

    fn walk_boundary<'a>(
        knots: impl Iterator<Item = (usize, &'a Knot)>,
        order: u32,
        far_end: StrictlyIncreasingIndex,
    ) -> BasisBoundary {
        let mut cumulated = 0u32;
        for (index, knot) in knots {
            cumulated = cumulated.saturating_add(knot.multiplicity());
            if cumulated >= order {
                return BasisBoundary {
                    index: StrictlyIncreasingIndex::new(index),
                    status: if cumulated == order {
                        NormalizedBasisAtExtremity::StrictlyNormalized
                    } else {
                        NormalizedBasisAtExtremity::OverDefined
                    },
                };
            }
        }
        BasisBoundary {
            index: far_end,
            status: NormalizedBasisAtExtremity::NotNormalized,
        }
    }

    /// Mirror image of the knot spacing.
    ///
    /// Abscissa `x` maps to `last - (x - first)` and the knot order is
    /// reversed, so every knot keeps its multiplicity and the sequence keeps
    /// its extent.
    pub fn revert_knot_spacing(&self) -> CheckResult<Self> {
        let (Some(first), Some(last)) = (self.knots.first(), self.knots.last())
        else {
            return Ok(self.clone());
        };
        let (first, last) = (first.abscissa(), last.abscissa());
        let knots = self
            .knots
            .iter()
            .rev()
            .map(|knot| {
                Knot::new(last - (knot.abscissa() - first), knot.multiplicity())
            })
            .collect::<CheckResult<Vec<_>>>()?;
        Ok(Self { knots })
    }

    /// Copy of the knots in `start..=end`.
    pub fn sub_array(
        &self,
        start: StrictlyIncreasingIndex,
        end: StrictlyIncreasingIndex,
    ) -> CheckResult<Self> {
        self.knot(end)?;
        if start > end {
            return Err(KnotErrorKind::InvalidIndexRange {
                start: start.value(),
                end: end.value(),
            });
        }
        Ok(Self {
            knots: self.knots[start.value()..=end.value()].to_vec(),
        })
    }

    /// Translates every abscissa by `offset`.
    pub(crate) fn shift_abscissae_mut(&mut self, offset: f64) -> CheckResult<()> {
        for knot in &mut self.knots {
            knot.set_abscissa(knot.abscissa() + offset)?;
        }
        Ok(())
    }

    /// Splices `knot` in at its sorted position.
    pub(crate) fn insert_knot_mut(
        &mut self,
        knot: Knot,
    ) -> CheckResult<StrictlyIncreasingIndex> {
        if let Some(existing) = self.coincident_knot(knot.abscissa()) {
            return Err(KnotErrorKind::AbscissaTooClose {
                abscissa: knot.abscissa(),
                knot: self.knots[existing.value()].abscissa(),
            });
        }
        let position = self
            .knots
            .partition_point(|existing| existing.abscissa() < knot.abscissa());
        self.knots.insert(position, knot);
        Ok(StrictlyIncreasingIndex::new(position))
    }

    pub(crate) fn raise_knot_multiplicity_mut(
        &mut self,
        index: StrictlyIncreasingIndex,
        amount: u32,
    ) -> CheckResult<()> {
        self.knot(index)?;
        self.knots[index.value()].increment_multiplicity(amount)
    }

    /// Lowers a multiplicity, removing the knot when it reaches zero.
    ///
    /// Returns `true` if the knot was removed.
    pub(crate) fn decrement_knot_multiplicity_mut(
        &mut self,
        index: StrictlyIncreasingIndex,
        amount: u32,
    ) -> CheckResult<bool> {
        let multiplicity = self.knot_multiplicity(index)?;
        if amount < 1 {
            return Err(KnotErrorKind::NullMultiplicityChange(amount));
        }
        if amount == multiplicity {
            self.remove_knot_mut(index)?;
            return Ok(true);
        }
        self.knots[index.value()].decrement_multiplicity(amount)?;
        Ok(false)
    }

    pub(crate) fn remove_knot_mut(
        &mut self,
        index: StrictlyIncreasingIndex,
    ) -> CheckResult<Knot> {
        self.knot(index)?;
        Ok(self.knots.remove(index.value()))
    }
}

impl<'a> IntoIterator for &'a KnotArray {
    type Item = &'a Knot;
    type IntoIter = core::slice::Iter<'a, Knot>;

    fn into_iter(self) -> Self::IntoIter {
        self.knots.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{
        knots_from_increasing_values, knots_from_strictly_increasing_values,
    };

    fn array(values: &[f64]) -> KnotArray {
        knots_from_increasing_values(values).unwrap()
    }

    #[test]
    fn test_rejects_unsorted_knots() {
        let knots = vec![Knot::new(1.0, 1).unwrap(), Knot::new(0.0, 1).unwrap()];
        assert_eq!(
            KnotArray::new(knots),
            Err(KnotErrorKind::NotStrictlyIncreasing { index: 1 })
        );
    }

    #[test]
    fn test_boundary_walk() {
        let knots = array(&[0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0]);

        let start = knots.normalized_basis_at_sequence_start(3);
        assert_eq!(start.index.value(), 0);
        assert_eq!(start.status, NormalizedBasisAtExtremity::StrictlyNormalized);

        let end = knots.normalized_basis_at_sequence_end(3);
        assert_eq!(end.index.value(), 3);
        assert_eq!(end.status, NormalizedBasisAtExtremity::StrictlyNormalized);

        let start = knots.normalized_basis_at_sequence_start(2);
        assert_eq!(start.status, NormalizedBasisAtExtremity::OverDefined);
        assert_eq!(
            start.strictly_normalized(SequenceExtremity::Start),
            Err(KnotErrorKind::OverDefined(SequenceExtremity::Start))
        );

        let short = array(&[0.0, 1.0]);
        let end = short.normalized_basis_at_sequence_end(3);
        assert_eq!(end.status, NormalizedBasisAtExtremity::NotNormalized);
        assert_eq!(end.index.value(), 0);
    }

    #[test]
    fn test_intermediate_knot_check() {
        let knots = array(&[0.0, 0.0, 1.0, 1.0, 2.0, 2.0]);
        assert_eq!(
            knots.check_max_knot_multiplicity_at_intermediate_knots(2),
            Err(KnotErrorKind::IntermediateKnotAtOrder { index: 1, order: 2 })
        );
        assert!(knots
            .check_max_knot_multiplicity_at_intermediate_knots(3)
            .is_ok());

        let simple = array(&[0.0, 1.0, 2.0, 3.0]);
        assert!(simple
            .check_max_knot_multiplicity_at_intermediate_knots(1)
            .is_ok());
        assert_eq!(
            knots.check_max_multiplicity_order_consistency(1),
            Err(KnotErrorKind::MultiplicityExceedsOrder {
                index: 0,
                multiplicity: 2,
                order: 1
            })
        );
    }

    #[test]
    fn test_uniformity() {
        let knots = array(&[0.0, 0.5, 1.0, 1.5]);
        assert!(knots.is_knot_spacing_uniform());
        assert!(knots.is_knot_multiplicity_uniform());

        let knots = array(&[0.0, 0.0, 1.0, 3.0]);
        assert!(!knots.is_knot_spacing_uniform());
        assert!(!knots.is_knot_multiplicity_uniform());
    }

    #[test]
    fn test_index_conversion() {
        let knots = array(&[0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 3.0]);
        let increasing = knots
            .to_increasing_index(StrictlyIncreasingIndex::new(2))
            .unwrap();
        assert_eq!(increasing.value(), 4);
        assert_eq!(
            knots
                .to_strictly_increasing_index(IncreasingIndex::new(5))
                .unwrap()
                .value(),
            2
        );
        assert_eq!(
            knots.to_strictly_increasing_index(IncreasingIndex::new(7)),
            Err(KnotErrorKind::IndexOutOfRange { index: 7, len: 7 })
        );
        assert!(knots
            .to_increasing_index(StrictlyIncreasingIndex::new(4))
            .is_err());
    }

    #[test]
    fn test_search_span() {
        let knots = array(&[0.0, 1.0, 2.5, 3.0, 4.0, 7.0]);
        let first = StrictlyIncreasingIndex::new(0);
        let last = StrictlyIncreasingIndex::new(5);
        assert_eq!(knots.search_span(0.5, first, last).value(), 0);
        assert_eq!(knots.search_span(2.7, first, last).value(), 2);
        assert_eq!(knots.search_span(6.9, first, last).value(), 4);
    }

    #[test]
    fn test_revert_knot_spacing() {
        let knots = knots_from_strictly_increasing_values(
            &[-1.0, 0.0, 0.5, 2.0],
            &[1, 2, 1, 3],
        )
        .unwrap();
        let reverted = knots.revert_knot_spacing().unwrap();
        assert_eq!(reverted.distinct_abscissae(), vec![-1.0, 0.5, 1.0, 2.0]);
        assert_eq!(reverted.multiplicities(), vec![3, 1, 2, 1]);
        assert_eq!(reverted.revert_knot_spacing().unwrap(), knots);
    }

    #[test]
    fn test_edit_tier() {
        let mut knots = array(&[0.0, 0.0, 1.0, 2.0, 2.0]);
        let index = knots.insert_knot_mut(Knot::new(1.5, 1).unwrap()).unwrap();
        assert_eq!(index.value(), 2);
        assert!(matches!(
            knots.insert_knot_mut(Knot::new(1.0 + 1e-12, 1).unwrap()),
            Err(KnotErrorKind::AbscissaTooClose { .. })
        ));

        knots
            .raise_knot_multiplicity_mut(StrictlyIncreasingIndex::new(1), 1)
            .unwrap();
        assert_eq!(knots.multiplicities(), vec![2, 2, 1, 2]);

        let removed = knots
            .decrement_knot_multiplicity_mut(StrictlyIncreasingIndex::new(2), 1)
            .unwrap();
        assert!(removed);
        assert_eq!(knots.distinct_abscissae(), vec![0.0, 1.0, 2.0]);
    }
}
