#![forbid(unsafe_code)]

//! JSONL output formatter for machine-readable help listings
//!
//! Outputs one JSON object per registered command, in registration order.

use crate::registry::CommandRegistry;
use serde::Serialize;

/// JSONL formatter for the help listing
pub struct HelpJsonlFormatter;

impl HelpJsonlFormatter {
    /// Creates a new JSONL formatter
    pub fn new() -> Self {
        HelpJsonlFormatter
    }

    /// Format the help listing as JSONL
    ///
    /// Returns a string with one JSON object per line, one per command, in
    /// registration order.
    pub fn format(&self, registry: &CommandRegistry) -> String {
        let mut output = String::new();

        for command in registry.iter() {
            let record = CommandRecord {
                name: command.name().as_str(),
                description: command.description(),
            };
            if let Ok(json) = serde_json::to_string(&record) {
                output.push_str(&json);
                output.push('\n');
            }
        }

        output
    }

    /// Write the formatted listing to stdout
    pub fn write_to_stdout(&self, registry: &CommandRegistry) {
        print!("{}", self.format(registry));
    }
}

impl Default for HelpJsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Command record for JSONL output
#[derive(Debug, Serialize)]
struct CommandRecord<'a> {
    name: &'a str,
    description: &'a str,
}
