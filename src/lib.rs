#![forbid(unsafe_code)]

//! firkin: command registration and dispatch for small CLI applications
//!
//! An embedding application registers named commands on a [`Dispatcher`],
//! hands it the raw process arguments, and gets back an exit status. The
//! dispatcher parses the arguments into positionals and flags, routes to
//! the registered handler, and reports failures uniformly.

pub mod args;
pub mod command;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod parser;
pub mod registry;
pub mod types;

// Re-export error types for convenient access
pub use error::{DispatchError, FirkinError, ParseError, RegistryError};

// Re-export core domain types for convenient access
pub use args::ArgumentSet;
pub use command::{Command, Handler, HandlerError};
pub use dispatch::Dispatcher;
pub use parser::{ParsedInvocation, parse};
pub use registry::CommandRegistry;
pub use types::{CommandName, FlagValue};
