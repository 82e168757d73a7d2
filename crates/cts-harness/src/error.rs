use thiserror::Error;

/// Errors raised by the harness, or by an action and passed through it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarnessError {
    /// A named list was built with a different number of payloads and names.
    #[error("Can't build a named entry list with {payloads} payloads and {names} names")]
    NameCountMismatch {
        /// Number of payloads supplied.
        payloads: usize,
        /// Number of names supplied.
        names: usize,
    },

    /// The product of the axis sizes doesn't fit in a `usize`.
    #[error("The combination count of axes with sizes {sizes:?} overflows")]
    CombinationOverflow {
        /// Size of every axis.
        sizes: Vec<usize>,
    },

    /// A typed dispatch met an entry whose payload isn't of the expected kind.
    #[error("Axis {axis} entry '{name}' doesn't hold a {expected}")]
    PayloadMismatch {
        /// Position of the axis in the sweep.
        axis: usize,
        /// Name of the offending entry.
        name: String,
        /// What the dispatch expected, e.g. `type` or `value`.
        expected: &'static str,
    },

    /// A combination was asked for an axis it doesn't have.
    #[error("Axis {axis} is out of range for a combination of {axes} axes")]
    AxisOutOfRange {
        /// The requested axis.
        axis: usize,
        /// Number of axes of the combination.
        axes: usize,
    },

    /// A fatal assertion stopped the sweep.
    #[error("Aborted on combination [{context}]\nCaused by:\n  {message}")]
    Aborted {
        /// Composed name of the failing combination.
        context: String,
        /// The failure message.
        message: String,
    },

    /// An action failed with its own error.
    #[error("An action failed\nCaused by:\n  {0}")]
    Action(String),
}

impl HarnessError {
    /// Wrap any displayable action error.
    pub fn action<E: core::fmt::Display>(err: E) -> Self {
        Self::Action(err.to_string())
    }
}
