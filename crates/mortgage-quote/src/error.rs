use crate::config::ConfigError;
use crate::quote::QuoteError;
use crate::telemetry::TelemetryError;
use std::fmt;

/// Top-level error for binaries built on this crate.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Quote(QuoteError),
    Export(csv::Error),
    /// A CLI argument failed domain parsing (unknown state code, home type, ...).
    Argument(String),
    /// The application failed field validation; details were already surfaced
    /// per field before this bubbled up.
    Validation,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Quote(err) => write!(f, "quote error: {}", err),
            AppError::Export(err) => write!(f, "export error: {}", err),
            AppError::Argument(message) => write!(f, "invalid argument: {}", message),
            AppError::Validation => write!(f, "mortgage application failed validation"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Quote(err) => Some(err),
            AppError::Export(err) => Some(err),
            AppError::Argument(_) | AppError::Validation => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<QuoteError> for AppError {
    fn from(value: QuoteError) -> Self {
        Self::Quote(value)
    }
}

impl From<csv::Error> for AppError {
    fn from(value: csv::Error) -> Self {
        Self::Export(value)
    }
}
