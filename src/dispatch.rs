#![forbid(unsafe_code)]

//! Command dispatch
//!
//! The [`Dispatcher`] owns the command registry and ties the pieces
//! together: it parses raw process arguments, routes to the registered
//! handler, and reports failures uniformly. One process invocation parses
//! one argument set and dispatches exactly one command; registration is
//! assumed to complete before the first dispatch.

use crate::args::ArgumentSet;
use crate::command::Handler;
use crate::error::{DispatchError, EXIT_SUCCESS, FirkinError, RegistryError};
use crate::output::{ColorChoice, HelpHumanFormatter, HelpJsonlFormatter, OutputFormat, human};
use crate::parser;
use crate::registry::CommandRegistry;
use std::io;
use termcolor::WriteColor;

/// Registers commands, parses raw arguments, and routes to handlers
pub struct Dispatcher {
    program: String,
    registry: CommandRegistry,
    color: ColorChoice,
}

impl Dispatcher {
    /// Creates a dispatcher for the named program with an empty registry
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            registry: CommandRegistry::new(),
            color: ColorChoice::default(),
        }
    }

    /// Sets the color choice for error reporting
    pub fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Returns the program name used in the usage line
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Registers a command
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateCommand`] if `name` is already
    /// registered and [`RegistryError::InvalidName`] if it fails validation.
    pub fn register(
        &mut self,
        name: &str,
        description: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> Result<(), RegistryError> {
        self.registry.register(name, description, handler)
    }

    /// Returns the owned registry
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Resolves `name` and invokes its handler with `args`
    ///
    /// The handler's exit status is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::UnknownCommand`] if `name` is not
    /// registered; no handler is invoked in that case. A handler failure
    /// surfaces as [`DispatchError::Handler`] wrapping the original cause.
    pub fn dispatch(&self, name: &str, args: &ArgumentSet) -> Result<i32, DispatchError> {
        let command = self
            .registry
            .get(name)
            .ok_or_else(|| DispatchError::UnknownCommand {
                name: name.to_string(),
            })?;
        command.invoke(args)
    }

    /// Iterates over (name, description) pairs in registration order
    ///
    /// The sequence is finite and restartable: each call yields a fresh
    /// iterator over the same listing, with no side effects.
    pub fn help(&self) -> impl Iterator<Item = (&str, &str)> {
        self.registry
            .iter()
            .map(|c| (c.name().as_str(), c.description()))
    }

    /// Writes the help listing to `sink` in the requested format
    pub fn write_help(&self, format: OutputFormat, sink: &mut dyn io::Write) -> io::Result<()> {
        let rendered = match format {
            OutputFormat::Human => HelpHumanFormatter::new().format(&self.program, &self.registry),
            OutputFormat::Jsonl => HelpJsonlFormatter::new().format(&self.registry),
        };
        sink.write_all(rendered.as_bytes())
    }

    /// Parses `raw` tokens, dispatches, and reports failures to stderr
    ///
    /// Returns the process exit code: the handler's status on success, the
    /// error's code otherwise. With no command token the help listing is
    /// printed to stdout and the code is 0.
    pub fn run<I, S>(&self, raw: I) -> i32
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut stderr = human::stderr(self.color);

        let parsed = match parser::parse(raw) {
            Ok(parsed) => parsed,
            Err(e) => return self.report(&mut stderr, e.into()),
        };

        let Some(name) = parsed.command else {
            HelpHumanFormatter::new().write_to_stdout(&self.program, &self.registry);
            return EXIT_SUCCESS;
        };

        match self.dispatch(&name, &parsed.args) {
            Ok(status) => status,
            Err(e) => self.report(&mut stderr, e.into()),
        }
    }

    /// Like [`Dispatcher::run`], over the process arguments
    pub fn run_env(&self) -> i32 {
        self.run(std::env::args().skip(1))
    }

    fn report(&self, sink: &mut dyn WriteColor, error: FirkinError) -> i32 {
        // A failed stderr write has nowhere left to go
        let _ = human::write_error(sink, &error);
        error.exit_code()
    }
}
