#![forbid(unsafe_code)]

//! The command and handler contract

use crate::args::ArgumentSet;
use crate::error::DispatchError;
use crate::types::CommandName;

/// The opaque error a handler may fail with
///
/// The dispatcher wraps it in [`DispatchError::Handler`] without inspecting
/// it.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Trait that all command handlers implement
///
/// A handler accepts the parsed arguments for one invocation and returns an
/// exit status, or fails with an application-defined error. Handlers are
/// assumed non-idempotent; the dispatcher never retries them.
pub trait Handler {
    /// Executes the command against the parsed arguments
    fn run(&self, args: &ArgumentSet) -> Result<i32, HandlerError>;
}

impl<F> Handler for F
where
    F: Fn(&ArgumentSet) -> Result<i32, HandlerError>,
{
    fn run(&self, args: &ArgumentSet) -> Result<i32, HandlerError> {
        self(args)
    }
}

/// A named operation with a handler and a human-readable description
///
/// Identity is the name, unique within a registry. Commands are immutable
/// after construction.
pub struct Command {
    name: CommandName,
    description: String,
    handler: Box<dyn Handler>,
}

impl Command {
    /// Creates a new command
    pub fn new(
        name: CommandName,
        description: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> Self {
        Self {
            name,
            description: description.into(),
            handler: Box::new(handler),
        }
    }

    /// Returns the command's name
    pub fn name(&self) -> &CommandName {
        &self.name
    }

    /// Returns the command's description
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Invokes the handler, returning its exit status unchanged
    ///
    /// # Errors
    ///
    /// A handler failure is wrapped in [`DispatchError::Handler`] carrying
    /// this command's name and the original cause.
    pub fn invoke(&self, args: &ArgumentSet) -> Result<i32, DispatchError> {
        self.handler
            .run(args)
            .map_err(|source| DispatchError::Handler {
                name: self.name.as_str().to_string(),
                source,
            })
    }
}

impl std::fmt::Debug for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
