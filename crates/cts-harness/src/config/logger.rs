use super::{DispatchLogLevel, HarnessConfig};
use crate::{DiagnosticContext, Failure, HarnessError};
use core::fmt::Display;
use std::{
    fs::{File, OpenOptions},
    io::{BufWriter, Write},
    path::PathBuf,
};

/// Configuration for one logger, parameterized by a log level type.
///
/// Note that you can use multiple outputs at the same time.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(bound = "")]
pub struct LoggerConfig<L: LogLevel> {
    /// Path to the log file, if file logging is enabled.
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Whether to append to the log file (true) or overwrite it (false). Defaults to true.
    #[serde(default = "append_default")]
    pub append: bool,

    /// Whether to log to standard output.
    #[serde(default)]
    pub stdout: bool,

    /// Whether to log to standard error.
    #[serde(default)]
    pub stderr: bool,

    /// Optional crate-level logging configuration (e.g., info, debug, trace).
    #[serde(default)]
    pub log: Option<LogCrateLevel>,

    /// The log level for this logger, determining verbosity.
    #[serde(default)]
    pub level: L,
}

impl<L: LogLevel> Default for LoggerConfig<L> {
    fn default() -> Self {
        Self {
            file: None,
            append: true,
            stdout: false,
            stderr: false,
            log: None,
            level: L::default(),
        }
    }
}

/// Log levels using the `log` crate.
#[derive(
    Clone, Copy, Debug, Default, serde::Serialize, serde::Deserialize, Hash, PartialEq, Eq,
)]
pub enum LogCrateLevel {
    /// Logs informational messages.
    #[default]
    #[serde(rename = "info")]
    Info,

    /// Logs debugging messages.
    #[serde(rename = "debug")]
    Debug,

    /// Logs trace-level messages.
    #[serde(rename = "trace")]
    Trace,
}

fn append_default() -> bool {
    true
}

/// Trait for types that can be used as log levels in `LoggerConfig`.
pub trait LogLevel:
    serde::de::DeserializeOwned + serde::Serialize + Clone + Copy + core::fmt::Debug + Default
{
}

/// The logger every sweep and sink of the process writes through, so each output is opened once.
static CTS_DISPATCH_LOGGER: spin::Mutex<Option<DispatchLogger>> = spin::Mutex::new(None);

/// Writes the progress of sweeps to the outputs selected in the configuration.
#[derive(Debug)]
pub struct DispatchLogger {
    loggers: Vec<LoggerKind>,
    level: DispatchLogLevel,
}

impl Default for DispatchLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchLogger {
    /// Create a logger from the global configuration.
    ///
    /// Each call opens the configured outputs again; sweeps and sinks share the one behind
    /// [with_global](Self::with_global).
    pub fn new() -> Self {
        Self::from_config(&HarnessConfig::get().dispatch.logger)
    }

    /// Run `func` with the process-wide logger, built from the global configuration on first use.
    ///
    /// The lock is held while `func` runs, so `func` must not log through this function again.
    pub fn with_global<R, F: FnOnce(&mut DispatchLogger) -> R>(func: F) -> R {
        let mut state = CTS_DISPATCH_LOGGER.lock();
        let logger = state.get_or_insert_with(Self::new);
        func(logger)
    }

    /// Create a logger from an explicit configuration.
    ///
    /// A file that can't be opened is reported through the `log` crate and left out.
    pub fn from_config(config: &LoggerConfig<DispatchLogLevel>) -> Self {
        let mut loggers = Vec::new();

        if let DispatchLogLevel::Disabled = config.level {
            return Self {
                loggers,
                level: config.level,
            };
        }

        if let Some(file) = &config.file {
            match FileLogger::new(file, config.append) {
                Ok(logger) => loggers.push(LoggerKind::File(logger)),
                Err(err) => log::warn!("Can't open dispatch log file {}: {err}", file.display()),
            }
        }
        if config.stdout {
            loggers.push(LoggerKind::Stdout);
        }
        if config.stderr {
            loggers.push(LoggerKind::Stderr);
        }
        if let Some(level) = config.log {
            loggers.push(LoggerKind::Log(level));
        }

        Self {
            loggers,
            level: config.level,
        }
    }

    /// The configured verbosity.
    pub fn level(&self) -> DispatchLogLevel {
        self.level
    }

    /// Whether every combination is logged.
    pub fn is_full(&self) -> bool {
        matches!(self.level, DispatchLogLevel::Full)
    }

    /// Log the start of a combination, only at the full level.
    pub fn log_combination(&mut self, context: &DiagnosticContext) {
        if self.is_full() {
            self.log(&format!("[{}] {context}", context.index()));
        }
    }

    /// Log a failed check.
    pub fn log_failure(&mut self, failure: &Failure) {
        if !matches!(self.level, DispatchLogLevel::Disabled) {
            self.log(&format!("FAILED {failure}"));
        }
    }

    /// Log the error that ended a sweep.
    pub fn log_error(&mut self, context: &DiagnosticContext, err: &HarnessError) {
        if !matches!(self.level, DispatchLogLevel::Disabled) {
            self.log(&format!("ERROR [{context}] {err}"));
        }
    }

    fn log<S: Display>(&mut self, msg: &S) {
        for logger in self.loggers.iter_mut() {
            logger.log(msg);
        }
    }
}

/// Represents different types of loggers.
#[derive(Debug)]
enum LoggerKind {
    /// Logs to a file.
    File(FileLogger),

    /// Logs to standard output.
    Stdout,

    /// Logs to standard error.
    Stderr,

    /// Logs using the `log` crate with a specified level.
    Log(LogCrateLevel),
}

impl LoggerKind {
    fn log<S: Display>(&mut self, msg: &S) {
        match self {
            LoggerKind::File(file_logger) => file_logger.log(msg),
            LoggerKind::Stdout => println!("{msg}"),
            LoggerKind::Stderr => eprintln!("{msg}"),
            LoggerKind::Log(level) => match level {
                LogCrateLevel::Info => log::info!("{msg}"),
                LogCrateLevel::Debug => log::debug!("{msg}"),
                LogCrateLevel::Trace => log::trace!("{msg}"),
            },
        }
    }
}

/// Logger that writes messages to a file.
#[derive(Debug)]
struct FileLogger {
    writer: BufWriter<File>,
}

impl FileLogger {
    fn new(path: &PathBuf, append: bool) -> std::io::Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .append(append)
            .truncate(!append)
            .create(true)
            .open(path)?;

        Ok(Self {
            writer: BufWriter::new(file),
        })
    }

    // Flushes after every message so a hung action still leaves its combination in the log.
    fn log<S: Display>(&mut self, msg: &S) {
        let result = writeln!(self.writer, "{msg}").and_then(|_| self.writer.flush());
        if let Err(err) = result {
            log::warn!("Can't write to the dispatch log file: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_logger_writes_failures() {
        let path = std::env::temp_dir().join(format!("cts-dispatch-{}.log", std::process::id()));
        let config = LoggerConfig {
            file: Some(path.clone()),
            append: false,
            level: DispatchLogLevel::Failures,
            ..Default::default()
        };
        let context = DiagnosticContext::new(2, vec![1, 0], vec!["i32".into(), "4".into()]);

        let mut logger = DispatchLogger::from_config(&config);
        logger.log_combination(&context);
        logger.log_failure(&Failure::new(context.clone(), "mismatch"));
        drop(logger);

        let content = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(content, "FAILED [i32,4] mismatch\n");
    }

    #[test]
    fn disabled_logger_has_no_output() {
        let config = LoggerConfig::<DispatchLogLevel> {
            stdout: true,
            ..Default::default()
        };

        let logger = DispatchLogger::from_config(&config);

        assert!(logger.loggers.is_empty());
        assert!(!logger.is_full());
    }
}
