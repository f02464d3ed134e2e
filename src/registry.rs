#![forbid(unsafe_code)]

//! Command registry
//!
//! The registry owns all registered commands, keyed by their unique name.
//! Registration order is preserved because the help listing reports commands
//! in the order they were registered. The registry is always an explicit
//! value owned by its dispatcher, never ambient state.

use crate::command::{Command, Handler};
use crate::error::RegistryError;
use crate::types::CommandName;
use std::collections::HashMap;

/// Registry for storing and looking up commands
pub struct CommandRegistry {
    // Commands in registration order; `index` maps name -> position.
    commands: Vec<Command>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Registers a command from its parts
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidName`] if `name` fails validation and
    /// [`RegistryError::DuplicateCommand`] if `name` is already registered.
    pub fn register(
        &mut self,
        name: &str,
        description: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> Result<(), RegistryError> {
        let name = CommandName::new(name).ok_or_else(|| RegistryError::InvalidName {
            name: name.to_string(),
        })?;
        self.register_command(Command::new(name, description, handler))
    }

    /// Registers an already-built command
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateCommand`] if the command's name is
    /// already registered; the registry is left unchanged.
    pub fn register_command(&mut self, command: Command) -> Result<(), RegistryError> {
        let key = command.name().as_str().to_string();
        if self.index.contains_key(&key) {
            return Err(RegistryError::DuplicateCommand { name: key });
        }
        self.index.insert(key, self.commands.len());
        self.commands.push(command);
        Ok(())
    }

    /// Looks up a command by name
    ///
    /// Returns `None` if the name is not registered.
    pub fn get(&self, name: &str) -> Option<&Command> {
        self.index.get(name).map(|&i| &self.commands[i])
    }

    /// Iterates over all commands in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }

    /// Returns the number of registered commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
