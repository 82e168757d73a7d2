#![warn(missing_docs)]

//! Payload descriptors shared by the conformance harness.
//!
//! An [ElemType] is a runtime tag for one of the scalar kinds an accelerator exposes, and
//! [Scalar] binds every tag to a concrete Rust type so that a tag can be turned back into a
//! generic instantiation with [ElemType::visit].

mod elem;
mod literal;
mod pack;
mod scalar;

pub use elem::*;
pub use literal::*;
pub use pack::*;
pub use scalar::*;

pub use half::{bf16, f16};
