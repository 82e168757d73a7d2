use derive_more::Display;

use crate::{ElemType, FloatKind, IntKind, Scalar, UIntKind};

/// A literal value carried by a value axis, such as a vector width or a specialization constant.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display)]
#[allow(missing_docs)]
pub enum Literal {
    #[display("{_0}")]
    Bool(bool),
    #[display("{_0}")]
    Int(i64),
    #[display("{_0}")]
    UInt(u64),
    #[display("{_0}")]
    Float(f64),
}

impl Literal {
    /// The widest element kind able to hold the literal unchanged.
    pub fn elem(&self) -> ElemType {
        match self {
            Literal::Bool(_) => ElemType::Bool,
            Literal::Int(_) => ElemType::Int(IntKind::I64),
            Literal::UInt(_) => ElemType::UInt(UIntKind::U64),
            Literal::Float(_) => ElemType::Float(FloatKind::F64),
        }
    }

    /// The value as a `f64`.
    pub fn as_f64(&self) -> f64 {
        match self {
            Literal::Bool(val) => *val as u8 as f64,
            Literal::Int(val) => *val as f64,
            Literal::UInt(val) => *val as f64,
            Literal::Float(val) => *val,
        }
    }

    /// The value as a `usize`, if it is a non-negative integer that fits.
    pub fn as_usize(&self) -> Option<usize> {
        match self {
            Literal::Int(val) => usize::try_from(*val).ok(),
            Literal::UInt(val) => usize::try_from(*val).ok(),
            Literal::Bool(_) | Literal::Float(_) => None,
        }
    }

    /// Convert the literal to a scalar type, see [Scalar::from_f64].
    pub fn cast<T: Scalar>(&self) -> T {
        T::from_f64(self.as_f64())
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Literal::Bool(value)
    }
}

impl From<i32> for Literal {
    fn from(value: i32) -> Self {
        Literal::Int(value as i64)
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Literal::Int(value)
    }
}

impl From<u32> for Literal {
    fn from(value: u32) -> Self {
        Literal::UInt(value as u64)
    }
}

impl From<u64> for Literal {
    fn from(value: u64) -> Self {
        Literal::UInt(value)
    }
}

impl From<usize> for Literal {
    fn from(value: usize) -> Self {
        Literal::UInt(value as u64)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Literal::Float(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_the_plain_value() {
        assert_eq!(Literal::from(3u32).to_string(), "3");
        assert_eq!(Literal::from(-2i32).to_string(), "-2");
        assert_eq!(Literal::from(1.5).to_string(), "1.5");
        assert_eq!(Literal::from(true).to_string(), "true");
    }

    #[test]
    fn cast_goes_through_the_scalar_conversion() {
        assert_eq!(Literal::from(16usize).cast::<u8>(), 16);
        assert_eq!(Literal::from(-1i32).cast::<u32>(), 0);
        assert!(Literal::from(2.0).cast::<bool>());
        assert_eq!(Literal::from(true).cast::<f32>(), 1.0);
        assert_eq!(Literal::from(false).cast::<u8>(), 0);
        assert_eq!(Literal::from(4u32).as_usize(), Some(4));
        assert_eq!(Literal::from(-4i32).as_usize(), None);
    }
}
