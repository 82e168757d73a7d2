//! Axes shared by most suites, resolved from the [ConformanceMode] when a suite starts.

use crate::config::ConformanceMode;
use crate::ir::{FloatKind, IntKind, UIntKind};
use crate::{ElemType, EntryList};

const LIGHTWEIGHT_SCALARS: [ElemType; 4] = [
    ElemType::Int(IntKind::I8),
    ElemType::Int(IntKind::I32),
    ElemType::UInt(UIntKind::U32),
    ElemType::Float(FloatKind::F32),
];

const FULL_FLOATS: [ElemType; 4] = [
    ElemType::Float(FloatKind::F16),
    ElemType::Float(FloatKind::BF16),
    ElemType::Float(FloatKind::F32),
    ElemType::Float(FloatKind::F64),
];

const FULL_ATOMICS: [ElemType; 6] = [
    ElemType::Int(IntKind::I32),
    ElemType::UInt(UIntKind::U32),
    ElemType::Int(IntKind::I64),
    ElemType::UInt(UIntKind::U64),
    ElemType::Float(FloatKind::F32),
    ElemType::Float(FloatKind::F64),
];

const LIGHTWEIGHT_ATOMICS: [ElemType; 2] = [
    ElemType::Int(IntKind::I32),
    ElemType::Float(FloatKind::F32),
];

/// Widths a vector axis sweeps, the same in every mode.
pub const VECTOR_SIZES: [u32; 6] = [1, 2, 3, 4, 8, 16];

/// Every scalar kind in full mode; a narrow, a default, an unsigned and a float kind otherwise.
pub fn scalar_types(mode: ConformanceMode) -> EntryList {
    match mode {
        ConformanceMode::Full => EntryList::types(&ElemType::ALL),
        ConformanceMode::Lightweight => EntryList::types(&LIGHTWEIGHT_SCALARS),
    }
}

/// Floating-point kinds.
pub fn float_types(mode: ConformanceMode) -> EntryList {
    match mode {
        ConformanceMode::Full => EntryList::types(&FULL_FLOATS),
        ConformanceMode::Lightweight => EntryList::types(&[ElemType::Float(FloatKind::F32)]),
    }
}

/// Kinds atomic operations are tested on.
pub fn atomic_types(mode: ConformanceMode) -> EntryList {
    match mode {
        ConformanceMode::Full => EntryList::types(&FULL_ATOMICS),
        ConformanceMode::Lightweight => EntryList::types(&LIGHTWEIGHT_ATOMICS),
    }
}

/// The vector widths as a value axis.
pub fn vector_sizes() -> EntryList {
    EntryList::values(VECTOR_SIZES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn full_mode_covers_every_kind() {
        let types = scalar_types(ConformanceMode::Full);

        assert_eq!(types.len(), ElemType::ALL.len());
        assert_eq!(types.entry_at(0).map(|entry| entry.name()), Some("bool"));
    }

    #[test]
    fn lightweight_lists_are_subsets_of_full_ones() {
        let pairs = [
            (
                scalar_types(ConformanceMode::Lightweight),
                scalar_types(ConformanceMode::Full),
            ),
            (
                float_types(ConformanceMode::Lightweight),
                float_types(ConformanceMode::Full),
            ),
            (
                atomic_types(ConformanceMode::Lightweight),
                atomic_types(ConformanceMode::Full),
            ),
        ];

        for (light, full) in pairs {
            let full_names = full.names();
            assert!(light.len() < full.len());
            assert!(light.names().iter().all(|name| full_names.contains(name)));
        }
    }

    #[test]
    fn vector_sizes_are_named_by_width() {
        assert_eq!(vector_sizes().names(), vec!["1", "2", "3", "4", "8", "16"]);
    }
}
