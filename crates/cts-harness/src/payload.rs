use derive_more::Display;

use crate::{ElemType, Literal};

/// What an entry stands for: an element type to instantiate, or a literal value.
#[derive(Debug, Clone, Copy, PartialEq, Display)]
pub enum Payload {
    /// An element type.
    #[display("{_0}")]
    Type(ElemType),
    /// A literal value.
    #[display("{_0}")]
    Value(Literal),
}

impl Payload {
    /// The element type, when the payload is a type.
    pub fn as_type(&self) -> Option<ElemType> {
        match self {
            Payload::Type(elem) => Some(*elem),
            Payload::Value(_) => None,
        }
    }

    /// The literal, when the payload is a value.
    pub fn as_value(&self) -> Option<Literal> {
        match self {
            Payload::Type(_) => None,
            Payload::Value(value) => Some(*value),
        }
    }
}

impl From<ElemType> for Payload {
    fn from(value: ElemType) -> Self {
        Payload::Type(value)
    }
}

impl From<Literal> for Payload {
    fn from(value: Literal) -> Self {
        Payload::Value(value)
    }
}
