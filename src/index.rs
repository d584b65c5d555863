//! Index types for the two views of a knot sequence.
//!
//! An [`IncreasingIndex`] counts positions in the flattened knot list where
//! every knot is repeated according to its multiplicity. A
//! [`StrictlyIncreasingIndex`] counts positions in the list of distinct
//! knots. The two are never interchangeable: converting one into the other
//! walks the cumulated multiplicities, see
//! [`KnotArray::to_increasing_index()`](crate::KnotArray::to_increasing_index).

use crate::{CheckResult, KnotErrorKind};
use num_traits::PrimInt;

macro_rules! knot_index {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(usize);

        impl $name {
            #[inline]
            pub const fn new(value: usize) -> Self {
                Self(value)
            }

            /// Builds an index from any primitive integer.
            ///
            /// # Errors
            ///
            /// Fails if `value` is negative.
            pub fn try_from_value<V: PrimInt>(value: V) -> CheckResult<Self> {
                if value < V::zero() {
                    return Err(KnotErrorKind::NegativeIndex(
                        value.to_i64().unwrap_or(i64::MIN),
                    ));
                }
                Ok(Self(value.to_usize().unwrap_or(usize::MAX)))
            }

            #[inline]
            pub const fn value(self) -> usize {
                self.0
            }
        }

        impl From<usize> for $name {
            fn from(value: usize) -> Self {
                Self(value)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = KnotErrorKind;

            fn try_from(value: i64) -> CheckResult<Self> {
                Self::try_from_value(value)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

knot_index!(
    /// A position in the flattened (multiplicity-repeated) knot list.
    IncreasingIndex
);

knot_index!(
    /// A position in the list of distinct knots.
    StrictlyIncreasingIndex
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_index_rejected() {
        assert_eq!(
            IncreasingIndex::try_from(-1i64),
            Err(KnotErrorKind::NegativeIndex(-1))
        );
        assert_eq!(
            StrictlyIncreasingIndex::try_from_value(-3i32),
            Err(KnotErrorKind::NegativeIndex(-3))
        );
        assert_eq!(
            StrictlyIncreasingIndex::try_from_value(4u8).unwrap().value(),
            4
        );
    }
}
