//! Error types for firkin
//!
//! This module defines the error types used throughout the dispatcher,
//! following a hierarchical structure with specific error variants for
//! different error categories. Every variant renders as a single line
//! naming the error kind and the offending token or name.

/// Exit code for a successful dispatch
pub const EXIT_SUCCESS: i32 = 0;
/// Exit code when an invoked handler fails
pub const EXIT_HANDLER_FAILURE: i32 = 1;
/// Exit code when the requested command is not registered
pub const EXIT_UNKNOWN_COMMAND: i32 = 2;
/// Exit code when the raw arguments cannot be parsed
pub const EXIT_MALFORMED_ARGUMENTS: i32 = 3;
/// Exit code for registration-time errors surfacing at runtime
pub const EXIT_REGISTRY_ERROR: i32 = 4;

/// Argument parsing errors
///
/// These are user input errors: the user can retry with corrected arguments.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A flag marker with no name following it
    #[error("Malformed arguments: flag marker without a name: '{token}'")]
    EmptyFlagName { token: String },

    /// An explicit binding with an empty value
    #[error("Malformed arguments: flag '--{flag}' requires a value")]
    MissingValue { flag: String },

    /// A bound value that could not be converted to the requested type
    #[error("Malformed arguments: invalid value '{value}' for '{name}': expected {expected}")]
    InvalidValue {
        name: String,
        value: String,
        expected: &'static str,
    },
}

/// Registration errors
///
/// These are programmer errors, reported synchronously to the caller with
/// no retry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// A command was registered under a name that already exists
    #[error("Duplicate command: '{name}'")]
    DuplicateCommand { name: String },

    /// A command was registered under a name that fails validation
    #[error("Invalid command name: '{name}'")]
    InvalidName { name: String },
}

/// Dispatch errors
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// The requested command is not in the registry; no handler was invoked
    #[error("Unknown command: '{name}'")]
    UnknownCommand { name: String },

    /// The invoked handler failed; the original cause is wrapped, never
    /// suppressed
    #[error("Command '{name}' failed: {source}")]
    Handler {
        name: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Top-level error type for firkin
#[derive(Debug, thiserror::Error)]
pub enum FirkinError {
    /// Argument parsing error
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Registration error
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Dispatch error
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl FirkinError {
    /// Returns the process exit code for this error
    ///
    /// Each error kind maps to a distinct non-zero code so callers can
    /// distinguish failure modes without parsing messages.
    pub fn exit_code(&self) -> i32 {
        match self {
            FirkinError::Parse(_) => EXIT_MALFORMED_ARGUMENTS,
            FirkinError::Registry(_) => EXIT_REGISTRY_ERROR,
            FirkinError::Dispatch(DispatchError::UnknownCommand { .. }) => EXIT_UNKNOWN_COMMAND,
            FirkinError::Dispatch(DispatchError::Handler { .. }) => EXIT_HANDLER_FAILURE,
        }
    }
}
