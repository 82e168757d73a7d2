use core::fmt::Display;

use crate::{ElemVisitor, bf16, f16};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum FloatKind {
    F16,
    BF16,
    F32,
    F64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum IntKind {
    I8,
    I16,
    I32,
    I64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum UIntKind {
    U8,
    U16,
    U32,
    U64,
}

/// The scalar element kinds a type axis can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[allow(missing_docs)]
pub enum ElemType {
    Bool,
    Int(IntKind),
    UInt(UIntKind),
    Float(FloatKind),
}

impl ElemType {
    /// Every supported kind, booleans first, then signed, unsigned and float kinds by width.
    pub const ALL: [ElemType; 13] = [
        ElemType::Bool,
        ElemType::Int(IntKind::I8),
        ElemType::Int(IntKind::I16),
        ElemType::Int(IntKind::I32),
        ElemType::Int(IntKind::I64),
        ElemType::UInt(UIntKind::U8),
        ElemType::UInt(UIntKind::U16),
        ElemType::UInt(UIntKind::U32),
        ElemType::UInt(UIntKind::U64),
        ElemType::Float(FloatKind::F16),
        ElemType::Float(FloatKind::BF16),
        ElemType::Float(FloatKind::F32),
        ElemType::Float(FloatKind::F64),
    ];

    /// The canonical name of the kind, which is also the name of the Rust type it maps to.
    pub const fn name(&self) -> &'static str {
        match self {
            ElemType::Bool => "bool",
            ElemType::Int(kind) => match kind {
                IntKind::I8 => "i8",
                IntKind::I16 => "i16",
                IntKind::I32 => "i32",
                IntKind::I64 => "i64",
            },
            ElemType::UInt(kind) => match kind {
                UIntKind::U8 => "u8",
                UIntKind::U16 => "u16",
                UIntKind::U32 => "u32",
                UIntKind::U64 => "u64",
            },
            ElemType::Float(kind) => match kind {
                FloatKind::F16 => "f16",
                FloatKind::BF16 => "bf16",
                FloatKind::F32 => "f32",
                FloatKind::F64 => "f64",
            },
        }
    }

    /// Get the size in bytes.
    pub const fn size(&self) -> usize {
        match self {
            ElemType::Bool => core::mem::size_of::<bool>(),
            ElemType::Int(kind) => match kind {
                IntKind::I8 => core::mem::size_of::<i8>(),
                IntKind::I16 => core::mem::size_of::<i16>(),
                IntKind::I32 => core::mem::size_of::<i32>(),
                IntKind::I64 => core::mem::size_of::<i64>(),
            },
            ElemType::UInt(kind) => match kind {
                UIntKind::U8 => core::mem::size_of::<u8>(),
                UIntKind::U16 => core::mem::size_of::<u16>(),
                UIntKind::U32 => core::mem::size_of::<u32>(),
                UIntKind::U64 => core::mem::size_of::<u64>(),
            },
            ElemType::Float(kind) => match kind {
                FloatKind::F16 => core::mem::size_of::<f16>(),
                FloatKind::BF16 => core::mem::size_of::<bf16>(),
                FloatKind::F32 => core::mem::size_of::<f32>(),
                FloatKind::F64 => core::mem::size_of::<f64>(),
            },
        }
    }

    /// Look a kind up by its canonical name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|elem| elem.name() == name)
    }

    /// Whether the kind is a floating-point kind.
    pub fn is_float(&self) -> bool {
        matches!(self, ElemType::Float(_))
    }

    /// Whether the kind is a signed or unsigned integer kind.
    pub fn is_int(&self) -> bool {
        matches!(self, ElemType::Int(_) | ElemType::UInt(_))
    }

    /// Whether the kind can hold negative values.
    pub fn is_signed(&self) -> bool {
        matches!(self, ElemType::Int(_) | ElemType::Float(_))
    }

    /// Instantiate the visitor with the Rust type this kind stands for.
    ///
    /// This is the runtime switch that replaces a per-type template instantiation: the visitor
    /// body is monomorphized once per kind and the tag selects which copy runs.
    pub fn visit<V: ElemVisitor>(self, visitor: V) -> V::Output {
        match self {
            ElemType::Bool => visitor.visit::<bool>(),
            ElemType::Int(kind) => match kind {
                IntKind::I8 => visitor.visit::<i8>(),
                IntKind::I16 => visitor.visit::<i16>(),
                IntKind::I32 => visitor.visit::<i32>(),
                IntKind::I64 => visitor.visit::<i64>(),
            },
            ElemType::UInt(kind) => match kind {
                UIntKind::U8 => visitor.visit::<u8>(),
                UIntKind::U16 => visitor.visit::<u16>(),
                UIntKind::U32 => visitor.visit::<u32>(),
                UIntKind::U64 => visitor.visit::<u64>(),
            },
            ElemType::Float(kind) => match kind {
                FloatKind::F16 => visitor.visit::<f16>(),
                FloatKind::BF16 => visitor.visit::<bf16>(),
                FloatKind::F32 => visitor.visit::<f32>(),
                FloatKind::F64 => visitor.visit::<f64>(),
            },
        }
    }
}

impl Display for ElemType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;

    struct SizeOf;

    impl ElemVisitor for SizeOf {
        type Output = (usize, ElemType);

        fn visit<T: Scalar>(self) -> Self::Output {
            (core::mem::size_of::<T>(), T::ELEM)
        }
    }

    #[test]
    fn visit_selects_the_matching_rust_type() {
        for elem in ElemType::ALL {
            let (size, visited) = elem.visit(SizeOf);

            assert_eq!(visited, elem);
            assert_eq!(size, elem.size());
        }
    }

    #[test]
    fn names_round_trip() {
        for elem in ElemType::ALL {
            assert_eq!(ElemType::from_name(elem.name()), Some(elem));
            assert_eq!(elem.to_string(), elem.name());
        }
        assert_eq!(ElemType::from_name("float"), None);
    }
}
