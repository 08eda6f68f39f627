//! Logging initialization
//!
//! One-call tracing setup for applications: a console layer, and an
//! optional append-mode log file with its own level. Console verbosity
//! honors `RUST_LOG` when set.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::error::{CnvUtilsError, Result};

/// Log verbosity levels accepted in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    None,
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::None => LevelFilter::OFF,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Warning => LevelFilter::WARN,
            // tracing has no level above ERROR; critical maps onto it
            LogLevel::Error | LogLevel::Critical => LevelFilter::ERROR,
        }
    }
}

impl FromStr for LogLevel {
    type Err = CnvUtilsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" => Ok(LogLevel::None),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warning" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "critical" => Ok(LogLevel::Critical),
            _ => Err(CnvUtilsError::invalid_argument(format!(
                "log level has to be one of none, debug, info, warning, error, critical; provided option was {}",
                s
            ))),
        }
    }
}

/// Options for [`init_logging`].
///
/// File logging is disabled by default; enable it with
/// [`LoggingOptions::log_file`]. The log directory must already exist
/// (see [`crate::env::get_log_directory`]); the file itself is created
/// on demand and appended to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingOptions {
    pub console_level: LogLevel,
    pub file_level: LogLevel,
    pub log_directory: Option<PathBuf>,
    pub log_file_name: String,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            console_level: LogLevel::Info,
            file_level: LogLevel::None,
            log_directory: None,
            log_file_name: "cnv-utils.log".to_string(),
        }
    }
}

impl LoggingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the console verbosity (default: info).
    pub fn console_level(mut self, level: LogLevel) -> Self {
        self.console_level = level;
        self
    }

    /// Enable file logging into `directory`/`file_name` at `level`.
    pub fn log_file(
        mut self,
        directory: impl Into<PathBuf>,
        file_name: impl Into<String>,
        level: LogLevel,
    ) -> Self {
        self.log_directory = Some(directory.into());
        self.log_file_name = file_name.into();
        self.file_level = level;
        self
    }
}

/// Install the global tracing subscriber.
///
/// The console layer filters by `RUST_LOG` when present, otherwise by
/// the configured console level. The file layer, when enabled, filters
/// independently by the configured file level. Initializing twice in
/// one process is an error.
pub fn init_logging(options: &LoggingOptions) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(options.console_level.as_filter().into()));

    let console_layer = tracing_subscriber::fmt::layer().with_filter(env_filter);

    let file_layer = match &options.log_directory {
        Some(directory) if options.file_level != LogLevel::None => {
            let path = directory.join(&options.log_file_name);
            let file = OpenOptions::new().create(true).append(true).open(&path)?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(Mutex::new(file))
                    .with_ansi(false)
                    .with_filter(options.file_level.as_filter()),
            )
        }
        _ => None,
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| CnvUtilsError::config(format!("failed to initialize logging: {}", e)))?;

    Ok(())
}
