macro_rules! open_family {
    ($family:ident, $kind:ident, $name:literal, $counterpart:ident, $representation:ident, $element:ty, $elements:path) => {
        impl crate::family::sealed::Sealed for $family {}

        impl KnotSequenceFamily for $family {
            const KIND: SequenceKind = SequenceKind::$kind;
            const NAME: &'static str = $name;
            const CONSTRUCTOR: &'static str = concat!($name, "::new");
            type Element = $element;
            type Counterpart = $counterpart;

            fn blueprint(params: &KnotSequenceParams) -> CheckResult<Blueprint> {
                crate::open::blueprint(
                    params,
                    Representation::$representation,
                    Self::NAME,
                )
            }

            fn locate_normalized_basis(
                array: &KnotArray,
                max_multiplicity_order: u32,
            ) -> CheckResult<NormalizedBasis> {
                crate::open::locate_normalized_basis(array, max_multiplicity_order)
            }

            fn check_editable_knot(
                basis: NormalizedBasis,
                index: StrictlyIncreasingIndex,
            ) -> CheckResult<()> {
                crate::open::check_editable_knot(basis, index)
            }

            fn coupled_knot(
                _array: &KnotArray,
                _index: StrictlyIncreasingIndex,
            ) -> Option<StrictlyIncreasingIndex> {
                None
            }

            fn is_knot_multiplicity_non_uniform(
                array: &KnotArray,
                max_multiplicity_order: u32,
            ) -> bool {
                crate::open::is_knot_multiplicity_non_uniform(
                    array,
                    max_multiplicity_order,
                )
            }

            fn elements(array: &KnotArray) -> Vec<$element> {
                $elements(array)
            }
        }
    };
}

macro_rules! periodic_family {
    ($family:ident, $kind:ident, $name:literal, $counterpart:ident, $representation:ident, $element:ty, $elements:path) => {
        impl crate::family::sealed::Sealed for $family {}

        impl KnotSequenceFamily for $family {
            const KIND: SequenceKind = SequenceKind::$kind;
            const NAME: &'static str = $name;
            const CONSTRUCTOR: &'static str = concat!($name, "::new");
            type Element = $element;
            type Counterpart = $counterpart;

            fn blueprint(params: &KnotSequenceParams) -> CheckResult<Blueprint> {
                crate::periodic::blueprint(
                    params,
                    Representation::$representation,
                    Self::NAME,
                )
            }

            fn locate_normalized_basis(
                array: &KnotArray,
                max_multiplicity_order: u32,
            ) -> CheckResult<NormalizedBasis> {
                crate::periodic::locate_normalized_basis(
                    array,
                    max_multiplicity_order,
                )
            }

            fn check_editable_knot(
                _basis: NormalizedBasis,
                _index: StrictlyIncreasingIndex,
            ) -> CheckResult<()> {
                Ok(())
            }

            fn coupled_knot(
                array: &KnotArray,
                index: StrictlyIncreasingIndex,
            ) -> Option<StrictlyIncreasingIndex> {
                crate::periodic::coupled_knot(array, index)
            }

            fn is_knot_multiplicity_non_uniform(
                _array: &KnotArray,
                _max_multiplicity_order: u32,
            ) -> bool {
                false
            }

            fn elements(array: &KnotArray) -> Vec<$element> {
                $elements(array)
            }
        }
    };
}
