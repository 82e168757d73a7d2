/// Selects how many axis entries the standard lists carry.
#[derive(Default, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct ConformanceConfig {
    /// The conformance mode.
    #[serde(default)]
    pub mode: ConformanceMode,
}

/// Breadth of the standard type lists.
///
/// The full mode sweeps every supported kind; the lightweight mode keeps a representative subset
/// so a run stays short.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ConformanceMode {
    /// Every supported kind.
    #[serde(rename = "full")]
    Full,
    /// A representative subset.
    #[default]
    #[serde(rename = "lightweight")]
    Lightweight,
}

impl ConformanceMode {
    /// The mode of the global configuration.
    pub fn current() -> Self {
        super::HarnessConfig::get().conformance.mode
    }

    /// Parse the names accepted in configuration files and environment variables.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "full" => Some(Self::Full),
            "lightweight" | "light" => Some(Self::Lightweight),
            _ => None,
        }
    }
}
