use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::telos::TelosError;
use std::fmt;

/// Top-level error for embedding callers that wire the engine into a larger
/// process. Telos errors are fatal to scoring and propagate unmodified;
/// there is no fallback to a default configuration.
#[derive(Debug)]
pub enum EngineError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Telos(TelosError),
    Io(std::io::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Config(err) => write!(f, "configuration error: {}", err),
            EngineError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            EngineError::Telos(err) => write!(f, "telos error: {}", err),
            EngineError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Config(err) => Some(err),
            EngineError::Telemetry(err) => Some(err),
            EngineError::Telos(err) => Some(err),
            EngineError::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for EngineError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<TelosError> for EngineError {
    fn from(value: TelosError) -> Self {
        Self::Telos(value)
    }
}

impl From<std::io::Error> for EngineError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
