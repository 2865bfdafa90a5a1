//! Configuration loading errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("KDL parse error: {0}")]
    Parse(#[from] kdl::KdlError),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("configuration already initialized with different values")]
    AlreadyInitialized,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A value was well-formed as input but violates a configuration invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("malformed compiler version '{version}': {reason}")]
    MalformedVersion { version: String, reason: String },

    #[error("optimizer runs for compiler {version} must be non-negative, got {runs}")]
    NegativeRuns { version: String, runs: i64 },

    #[error("optimizer runs for compiler {version} exceeds {max}, got {runs}", max = u32::MAX)]
    RunsOutOfRange { version: String, runs: i64 },

    #[error("duplicate named account role: {0}")]
    DuplicateRole(String),

    #[error("named account role must not be empty")]
    EmptyRoleName,

    #[error("at least one compiler must be configured")]
    NoCompilers,

    #[error("compiler {0} is configured more than once")]
    DuplicateCompiler(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
