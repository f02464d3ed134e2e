#![forbid(unsafe_code)]

//! Parsed arguments for one invocation
//!
//! An [`ArgumentSet`] holds the positional values and flag bindings produced
//! by [`crate::parser::parse`]. Positional order is preserved exactly as
//! supplied; flag names are unique within one invocation.

use crate::error::ParseError;
use crate::types::FlagValue;
use std::collections::HashMap;
use std::str::FromStr;

/// Positional values plus flag bindings for one invocation
///
/// The set is built by the parser and read-only thereafter. Handlers read
/// from it through the accessors below; the typed accessors convert bound
/// text on demand and report conversion failures as parse errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgumentSet {
    positionals: Vec<String>,
    flags: HashMap<String, FlagValue>,
}

impl ArgumentSet {
    /// Creates an empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the positional values in the order they were supplied
    pub fn positionals(&self) -> &[String] {
        &self.positionals
    }

    /// Returns the positional value at `index`, if present
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }

    /// Returns the value bound to `name`, if the flag was supplied
    pub fn flag(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    /// Returns true if `name` was supplied as a bare boolean flag
    pub fn is_set(&self, name: &str) -> bool {
        matches!(self.flags.get(name), Some(FlagValue::Bool(true)))
    }

    /// Returns the text bound to `name` via `--name=value`, if any
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.flags.get(name).and_then(FlagValue::as_text)
    }

    /// Returns the number of flags supplied
    pub fn flag_count(&self) -> usize {
        self.flags.len()
    }

    /// Returns true if the set holds no positionals and no flags
    pub fn is_empty(&self) -> bool {
        self.positionals.is_empty() && self.flags.is_empty()
    }

    /// Converts the value bound to `name` to `T`
    ///
    /// Returns `Ok(None)` if the flag was not supplied. A bare flag converts
    /// from its boolean representation, so `parsed_flag::<bool>` works for
    /// `--verbose` as well as `--verbose=true`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] if conversion fails.
    pub fn parsed_flag<T: FromStr>(&self, name: &str) -> Result<Option<T>, ParseError> {
        let Some(value) = self.flags.get(name) else {
            return Ok(None);
        };
        convert(&value.to_string(), name).map(Some)
    }

    /// Converts the positional value at `index` to `T`
    ///
    /// Returns `Ok(None)` if there is no positional at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidValue`] if conversion fails.
    pub fn parsed_positional<T: FromStr>(&self, index: usize) -> Result<Option<T>, ParseError> {
        let Some(value) = self.positionals.get(index) else {
            return Ok(None);
        };
        convert(value, &format!("argument {}", index + 1)).map(Some)
    }

    /// Appends a positional value (parser-internal)
    pub(crate) fn push_positional(&mut self, value: String) {
        self.positionals.push(value);
    }

    /// Binds a flag, replacing any earlier binding of the same name
    /// (parser-internal; last occurrence wins)
    pub(crate) fn bind_flag(&mut self, name: String, value: FlagValue) {
        self.flags.insert(name, value);
    }
}

fn convert<T: FromStr>(raw: &str, name: &str) -> Result<T, ParseError> {
    raw.parse().map_err(|_| ParseError::InvalidValue {
        name: name.to_string(),
        value: raw.to_string(),
        expected: std::any::type_name::<T>(),
    })
}
