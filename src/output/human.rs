#![forbid(unsafe_code)]

//! Human-readable output
//!
//! Renders the help listing and writes one-line error reports to a
//! color-aware stream.

use crate::error::FirkinError;
use crate::output::ColorChoice;
use crate::registry::CommandRegistry;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

/// Human-readable formatter for the help listing
///
/// Commands are listed in registration order with their descriptions
/// aligned in a single column.
pub struct HelpHumanFormatter;

impl HelpHumanFormatter {
    /// Creates a new human formatter
    pub fn new() -> Self {
        HelpHumanFormatter
    }

    /// Format the help listing for human consumption
    pub fn format(&self, program: &str, registry: &CommandRegistry) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Usage: {} <command> [positional...] [--flag[=value]]...\n",
            program
        ));
        output.push('\n');

        if registry.is_empty() {
            output.push_str("No commands are registered.\n");
            return output;
        }

        let width = registry
            .iter()
            .map(|c| c.name().as_str().len())
            .max()
            .unwrap_or(0);

        output.push_str("Commands:\n");
        for command in registry.iter() {
            output.push_str(&format!(
                "  {:width$}  {}\n",
                command.name().as_str(),
                command.description(),
            ));
        }

        output
    }

    /// Write the formatted listing to stdout
    pub fn write_to_stdout(&self, program: &str, registry: &CommandRegistry) {
        print!("{}", self.format(program, registry));
    }
}

impl Default for HelpHumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Opens a color-aware stderr stream honoring the given choice
pub fn stderr(choice: ColorChoice) -> StandardStream {
    let choice = match choice {
        ColorChoice::Always => termcolor::ColorChoice::Always,
        ColorChoice::Never => termcolor::ColorChoice::Never,
        ColorChoice::Auto => {
            if io::stderr().is_terminal() {
                termcolor::ColorChoice::Auto
            } else {
                termcolor::ColorChoice::Never
            }
        }
    };
    StandardStream::stderr(choice)
}

/// Writes a one-line error report to the sink
///
/// The report names the error kind and the offending token or name via the
/// error's own display form.
pub fn write_error(sink: &mut dyn WriteColor, error: &FirkinError) -> io::Result<()> {
    sink.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
    write!(sink, "Error:")?;
    sink.reset()?;
    writeln!(sink, " {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ArgumentSet;
    use crate::error::DispatchError;
    use termcolor::NoColor;

    fn ok_handler(_args: &ArgumentSet) -> Result<i32, crate::command::HandlerError> {
        Ok(0)
    }

    fn registry_with(names: &[(&str, &str)]) -> CommandRegistry {
        let mut registry = CommandRegistry::new();
        for (name, description) in names {
            registry.register(name, *description, ok_handler).unwrap();
        }
        registry
    }

    #[test]
    fn test_format_empty_registry() {
        let formatter = HelpHumanFormatter::new();
        let output = formatter.format("demo", &CommandRegistry::new());
        assert!(output.starts_with("Usage: demo <command>"));
        assert!(output.contains("No commands are registered."));
    }

    #[test]
    fn test_format_lists_commands_in_registration_order() {
        let formatter = HelpHumanFormatter::new();
        let registry = registry_with(&[
            ("zeta", "Last alphabetically, first registered"),
            ("alpha", "First alphabetically, last registered"),
        ]);

        let output = formatter.format("demo", &registry);
        let zeta_pos = output.find("zeta").unwrap();
        let alpha_pos = output.find("alpha").unwrap();
        assert!(zeta_pos < alpha_pos, "registration order must be preserved");
    }

    #[test]
    fn test_format_aligns_descriptions() {
        let formatter = HelpHumanFormatter::new();
        let registry = registry_with(&[("go", "runs the thing"), ("longer", "runs the thing")]);

        let output = formatter.format("demo", &registry);
        let description_columns: Vec<usize> = output
            .lines()
            .filter(|l| l.starts_with("  "))
            .map(|l| l.find("runs").unwrap())
            .collect();
        assert_eq!(description_columns.len(), 2);
        assert_eq!(description_columns[0], description_columns[1]);
    }

    #[test]
    fn test_write_error_names_kind_and_token() {
        let error: FirkinError = DispatchError::UnknownCommand {
            name: "frobnicate".to_string(),
        }
        .into();

        let mut sink = NoColor::new(Vec::new());
        write_error(&mut sink, &error).unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "Error: Unknown command: 'frobnicate'\n");
    }

    #[test]
    fn test_write_error_is_one_line() {
        let error: FirkinError = DispatchError::Handler {
            name: "build".to_string(),
            source: "compile step failed".into(),
        }
        .into();

        let mut sink = NoColor::new(Vec::new());
        write_error(&mut sink, &error).unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(written.contains("compile step failed"));
    }
}
