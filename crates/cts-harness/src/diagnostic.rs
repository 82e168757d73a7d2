use core::fmt::Display;

/// Separator placed between the per-axis names of a composed name.
pub const DELIMITER: &str = ",";

/// Names the combination currently running, so a failing check can report it.
///
/// Two contexts built from the same lists at the same enumeration index are always equal.
#[derive(new, Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiagnosticContext {
    index: usize,
    indices: Vec<usize>,
    names: Vec<String>,
}

impl DiagnosticContext {
    /// Position of the combination in the enumeration order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Position of the entry picked on every axis.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Name of the entry picked on every axis, in axis order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The per-axis names joined with [DELIMITER].
    pub fn composed_name(&self) -> String {
        self.names.join(DELIMITER)
    }
}

impl Display for DiagnosticContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.composed_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composed_name_keeps_axis_order() {
        let context = DiagnosticContext::new(4, vec![1, 1], vec!["B".into(), "2".into()]);

        assert_eq!(context.composed_name(), "B,2");
        assert_eq!(context.to_string(), "B,2");
    }

    #[test]
    fn empty_context_has_empty_name() {
        let context = DiagnosticContext::new(0, vec![], vec![]);

        assert_eq!(context.composed_name(), "");
    }
}
