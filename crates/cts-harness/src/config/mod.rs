/// Conformance mode config module.
pub mod conformance;
/// Dispatch config module.
pub mod dispatch;

mod base;
mod logger;

pub use base::*;
pub use conformance::{ConformanceConfig, ConformanceMode};
pub use dispatch::{DispatchConfig, DispatchLogLevel, FailurePolicy};
pub use logger::*;
