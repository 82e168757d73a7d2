#![warn(missing_docs)]

//! Type-combination harness for accelerator conformance suites.
//!
//! Test authors describe each axis of a sweep as an [EntryList] of element types or literal
//! values, hand the axes to [dispatch] (or to the typed [for_all_types] and
//! [for_all_combinations]), and the harness runs the action once per combination of the
//! Cartesian product, outermost axis varying slowest. Every combination carries a
//! [DiagnosticContext] naming it, so a failing check can say which combination failed.

#[macro_use]
extern crate derive_new;

mod combination;
mod diagnostic;
mod dispatch;
mod entry;
mod error;
mod payload;
mod sink;
mod testgen;

/// Harness configuration.
pub mod config;
pub mod lists;

pub use combination::*;
pub use diagnostic::*;
pub use dispatch::*;
pub use entry::*;
pub use error::*;
pub use payload::*;
pub use sink::*;

pub use cts_ir as ir;
pub use cts_ir::{ElemType, ElemVisitor, Literal, Scalar, TypePack};

#[doc(hidden)]
pub use paste;
