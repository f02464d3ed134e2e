#![forbid(unsafe_code)]

//! Raw argument parsing
//!
//! Turns the raw process tokens into a command selector plus an
//! [`ArgumentSet`]. The grammar:
//!
//! - the first token, if present and not flag-shaped, is the command name;
//! - a token with a leading `-` is a flag: `--name=value` binds text,
//!   a bare `--name` binds boolean true;
//! - every other token is positional, order preserved.
//!
//! A flag never consumes the following token, so `--verbose target` is the
//! flag `verbose` plus the positional `target`. A repeated flag rebinds;
//! the last occurrence wins.

use crate::args::ArgumentSet;
use crate::error::ParseError;
use crate::types::FlagValue;

/// The result of parsing one invocation's raw tokens
///
/// `command` is `None` when the token list is empty or starts with a flag:
/// the "no command" sentinel. The name is kept raw; resolution against the
/// registry happens at dispatch time.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInvocation {
    pub command: Option<String>,
    pub args: ArgumentSet,
}

/// Parses raw tokens into a command selector and an argument set
///
/// # Errors
///
/// Returns [`ParseError::EmptyFlagName`] for a flag marker with no name
/// (`-`, `--`, `--=value`) and [`ParseError::MissingValue`] for an explicit
/// binding with an empty value (`--out=`).
pub fn parse<I, S>(raw: I) -> Result<ParsedInvocation, ParseError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut command = None;
    let mut args = ArgumentSet::new();
    let mut seen_any = false;

    for token in raw {
        let token = token.into();
        let first = !seen_any;
        seen_any = true;

        if let Some(flag) = split_flag(&token)? {
            match flag {
                Flag::Bare(name) => args.bind_flag(name, FlagValue::Bool(true)),
                Flag::Bound(name, value) => args.bind_flag(name, FlagValue::Text(value)),
            }
        } else if first {
            command = Some(token);
        } else {
            args.push_positional(token);
        }
    }

    Ok(ParsedInvocation { command, args })
}

enum Flag {
    Bare(String),
    Bound(String, String),
}

/// Classifies one token: `Ok(None)` for positionals and command names,
/// `Ok(Some(..))` for well-formed flags
fn split_flag(token: &str) -> Result<Option<Flag>, ParseError> {
    if !token.starts_with('-') {
        return Ok(None);
    }

    let body = token.trim_start_matches('-');
    match body.split_once('=') {
        None => {
            if body.is_empty() {
                return Err(ParseError::EmptyFlagName {
                    token: token.to_string(),
                });
            }
            Ok(Some(Flag::Bare(body.to_string())))
        }
        Some((name, value)) => {
            if name.is_empty() {
                return Err(ParseError::EmptyFlagName {
                    token: token.to_string(),
                });
            }
            if value.is_empty() {
                return Err(ParseError::MissingValue {
                    flag: name.to_string(),
                });
            }
            Ok(Some(Flag::Bound(name.to_string(), value.to_string())))
        }
    }
}
