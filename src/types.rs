#![forbid(unsafe_code)]

//! Core domain types for firkin
//!
//! This module defines the fundamental types used throughout the dispatcher.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A validated command name
///
/// Command names must be non-empty, must not start with `-` (they would be
/// indistinguishable from flags), and contain only alphanumeric characters,
/// hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CommandName(String);

impl CommandName {
    /// Creates a new CommandName, validating the input
    ///
    /// Returns None if the input is empty, starts with `-`, or contains
    /// invalid characters
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        if name.starts_with('-') {
            return None;
        }
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(CommandName(name))
    }

    /// Returns the command name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CommandName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CommandName::new(value).ok_or_else(|| "Invalid command name".to_string())
    }
}

impl From<CommandName> for String {
    fn from(name: CommandName) -> Self {
        name.0
    }
}

/// The value bound to a flag within one invocation
///
/// A bare flag (`--verbose`) binds `Bool(true)`; an explicit binding
/// (`--out=dist`) binds `Text("dist")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Bool(bool),
    Text(String),
}

impl FlagValue {
    /// Returns the boolean value, treating any text binding as absent
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FlagValue::Bool(b) => Some(*b),
            FlagValue::Text(_) => None,
        }
    }

    /// Returns the bound text, treating bare flags as absent
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FlagValue::Bool(_) => None,
            FlagValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Text(s) => write!(f, "{}", s),
        }
    }
}
