use core::fmt::Debug;

use num_traits::{NumCast, ToPrimitive};

use crate::{ElemType, FloatKind, IntKind, UIntKind, bf16, f16};

/// A Rust type that can be the payload of a type axis.
pub trait Scalar: Copy + Debug + Default + PartialEq + PartialOrd + Send + Sync + 'static {
    /// The kind tag this type is registered under.
    const ELEM: ElemType;
    /// Display name used in diagnostics.
    const NAME: &'static str = Self::ELEM.name();

    /// Convert from a `f64`, falling back to the default value when the value can't be
    /// represented.
    fn from_f64(value: f64) -> Self;

    /// Widen to a `f64`.
    fn to_f64(self) -> f64;
}

/// Generic body that runs once per [ElemType], with `T` bound to the matching Rust type.
pub trait ElemVisitor {
    /// Value produced by the instantiation.
    type Output;

    /// Run the body for the scalar type `T`.
    fn visit<T: Scalar>(self) -> Self::Output;
}

macro_rules! impl_numeric {
    ($ty:ty, $elem:expr) => {
        impl Scalar for $ty {
            const ELEM: ElemType = $elem;

            fn from_f64(value: f64) -> Self {
                <$ty as NumCast>::from(value).unwrap_or_default()
            }

            fn to_f64(self) -> f64 {
                ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
            }
        }
    };
}

impl_numeric!(i8, ElemType::Int(IntKind::I8));
impl_numeric!(i16, ElemType::Int(IntKind::I16));
impl_numeric!(i32, ElemType::Int(IntKind::I32));
impl_numeric!(i64, ElemType::Int(IntKind::I64));
impl_numeric!(u8, ElemType::UInt(UIntKind::U8));
impl_numeric!(u16, ElemType::UInt(UIntKind::U16));
impl_numeric!(u32, ElemType::UInt(UIntKind::U32));
impl_numeric!(u64, ElemType::UInt(UIntKind::U64));
impl_numeric!(f16, ElemType::Float(FloatKind::F16));
impl_numeric!(bf16, ElemType::Float(FloatKind::BF16));
impl_numeric!(f32, ElemType::Float(FloatKind::F32));
impl_numeric!(f64, ElemType::Float(FloatKind::F64));

impl Scalar for bool {
    const ELEM: ElemType = ElemType::Bool;

    fn from_f64(value: f64) -> Self {
        value != 0.0
    }

    fn to_f64(self) -> f64 {
        self as u8 as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(ElemType::Int(IntKind::I8), 300.0, 0.0)]
    #[case(ElemType::Int(IntKind::I8), -12.0, -12.0)]
    #[case(ElemType::UInt(UIntKind::U16), -1.0, 0.0)]
    #[case(ElemType::Float(FloatKind::F16), 0.5, 0.5)]
    #[case(ElemType::Float(FloatKind::BF16), 2.0, 2.0)]
    #[case(ElemType::Bool, 3.0, 1.0)]
    fn from_f64_saturates_to_default(
        #[case] elem: ElemType,
        #[case] input: f64,
        #[case] expected: f64,
    ) {
        struct Convert(f64);

        impl ElemVisitor for Convert {
            type Output = f64;

            fn visit<T: Scalar>(self) -> f64 {
                T::from_f64(self.0).to_f64()
            }
        }

        assert_eq!(elem.visit(Convert(input)), expected);
    }

    #[test]
    fn names_follow_the_elem_tag() {
        assert_eq!(<f32 as Scalar>::NAME, "f32");
        assert_eq!(<bf16 as Scalar>::NAME, "bf16");
        assert_eq!(<bool as Scalar>::NAME, "bool");
    }
}
