use super::{
    conformance::{ConformanceConfig, ConformanceMode},
    dispatch::{DispatchConfig, DispatchLogLevel, FailurePolicy},
};
use std::sync::Arc;

/// Static mutex holding the global configuration, initialized as `None`.
static CTS_GLOBAL_CONFIG: spin::Mutex<Option<Arc<HarnessConfig>>> = spin::Mutex::new(None);

/// Represents the global configuration of the harness.
#[derive(Default, Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HarnessConfig {
    /// Breadth of the standard axis lists.
    #[serde(default)]
    pub conformance: ConformanceConfig,

    /// Failure policy and logging of sweeps.
    #[serde(default)]
    pub dispatch: DispatchConfig,
}

impl HarnessConfig {
    /// Retrieves the current global configuration, loading it from the current directory if not set.
    ///
    /// If no configuration is set, it attempts to load one from `cts.toml` or `CTS.toml` in the
    /// current directory or its parents (with the `config-file` feature), then applies the
    /// environment overrides. If no file is found, a default configuration is used.
    ///
    /// # Notes
    ///
    /// Calling this function takes a global lock; read it once when a sweep or sink is set up
    /// rather than once per combination.
    pub fn get() -> Arc<Self> {
        let mut state = CTS_GLOBAL_CONFIG.lock();

        if let Some(config) = state.as_ref() {
            return config.clone();
        }

        #[cfg(feature = "config-file")]
        let config = Self::from_current_dir().override_from_env();
        #[cfg(not(feature = "config-file"))]
        let config = Self::default().override_from_env();

        let config = Arc::new(config);
        *state = Some(config.clone());
        config
    }

    /// Sets the global configuration to the provided value.
    ///
    /// # Panics
    /// Panics if the configuration has already been set or read, as it cannot be overridden.
    ///
    /// # Warning
    /// This method must be called at the start of the program, before any calls to `get`. Attempting
    /// to set the configuration after it has been initialized will cause a panic.
    pub fn set(config: Self) {
        let mut state = CTS_GLOBAL_CONFIG.lock();
        if state.is_some() {
            panic!("Cannot set the global configuration multiple times.");
        }
        *state = Some(Arc::new(config));
    }

    /// Overrides configuration fields based on environment variables.
    pub fn override_from_env(self) -> Self {
        self.override_from_vars(|key| std::env::var(key).ok())
    }

    /// Overrides configuration fields from the variables returned by `var`.
    ///
    /// - `CTS_CONFORMANCE`: `full` or `lightweight`.
    /// - `CTS_FAILURE_POLICY`: `continue` or `abort`.
    /// - `CTS_DEBUG_LOG`: `stdout`, `stderr`, `1`/`true` (log to `/tmp/cts.log`), `0`/`false`
    ///   (disable), or a file path. Any value but `0`/`false` turns on full dispatch logging.
    pub fn override_from_vars<F: Fn(&str) -> Option<String>>(mut self, var: F) -> Self {
        if let Some(val) = var("CTS_CONFORMANCE") {
            match ConformanceMode::from_name(&val) {
                Some(mode) => self.conformance.mode = mode,
                None => log::warn!("Ignoring unknown CTS_CONFORMANCE value '{val}'"),
            }
        }

        if let Some(val) = var("CTS_FAILURE_POLICY") {
            match val.as_str() {
                "continue" => self.dispatch.policy = FailurePolicy::Continue,
                "abort" => self.dispatch.policy = FailurePolicy::Abort,
                _ => log::warn!("Ignoring unknown CTS_FAILURE_POLICY value '{val}'"),
            }
        }

        if let Some(val) = var("CTS_DEBUG_LOG") {
            let logger = &mut self.dispatch.logger;
            logger.level = DispatchLogLevel::Full;

            match val.as_str() {
                "stdout" => logger.stdout = true,
                "stderr" => logger.stderr = true,
                "1" | "true" => logger.file = Some("/tmp/cts.log".into()),
                "0" | "false" => logger.level = DispatchLogLevel::Disabled,
                file_path => logger.file = Some(file_path.into()),
            }
        }

        self
    }

    // Loads configuration from `cts.toml` or `CTS.toml` in the current directory or its parents.
    //
    // Traverses up the directory tree until a valid configuration file is found or the root is reached.
    // Returns a default configuration if no file is found.
    #[cfg(feature = "config-file")]
    fn from_current_dir() -> Self {
        let Ok(mut dir) = std::env::current_dir() else {
            return Self::default();
        };

        loop {
            if let Ok(content) = Self::from_file_path(dir.join("cts.toml")) {
                return content;
            }

            if let Ok(content) = Self::from_file_path(dir.join("CTS.toml")) {
                return content;
            }

            if !dir.pop() {
                break;
            }
        }

        Self::default()
    }

    /// Loads configuration from a specified file path.
    ///
    /// # Panics
    /// Panics if the file exists but isn't a valid configuration.
    #[cfg(feature = "config-file")]
    pub fn from_file_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = match toml::from_str(&content) {
            Ok(val) => val,
            Err(err) => panic!("The file provided doesn't have the right format => {err:?}"),
        };

        Ok(config)
    }
}
