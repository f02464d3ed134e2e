//! Integration tests for argument parsing
//!
//! These tests exercise the parsing contract through the public API: the
//! command selector, positional ordering, flag binding, and the malformed
//! argument failures.

use firkin::types::FlagValue;
use firkin::{ParseError, parse};

#[test]
fn test_parse_command_with_bare_flag_and_positional() {
    let parsed = parse(["build", "--verbose", "target"]).unwrap();
    assert_eq!(parsed.command.as_deref(), Some("build"));
    assert_eq!(parsed.args.positionals(), &["target"]);
    assert_eq!(parsed.args.flag("verbose"), Some(&FlagValue::Bool(true)));
}

#[test]
fn test_parse_command_with_bound_flag() {
    let parsed = parse(["build", "--out=dist"]).unwrap();
    assert_eq!(parsed.command.as_deref(), Some("build"));
    assert!(parsed.args.positionals().is_empty());
    assert_eq!(
        parsed.args.flag("out"),
        Some(&FlagValue::Text("dist".to_string()))
    );
}

#[test]
fn test_parse_empty_input_is_no_command() {
    let parsed = parse(Vec::<String>::new()).unwrap();
    assert_eq!(parsed.command, None);
    assert!(parsed.args.is_empty());
}

#[test]
fn test_parse_flag_first_means_no_command() {
    let parsed = parse(["--verbose", "build"]).unwrap();
    assert_eq!(parsed.command, None);
    assert!(parsed.args.is_set("verbose"));
    // "build" arrives after a flag, so it is positional, not the command
    assert_eq!(parsed.args.positionals(), &["build"]);
}

#[test]
fn test_parse_mixed_flags_and_positionals() {
    let parsed = parse(["sync", "src", "--dry-run", "dest", "--jobs=4"]).unwrap();
    assert_eq!(parsed.command.as_deref(), Some("sync"));
    assert_eq!(parsed.args.positionals(), &["src", "dest"]);
    assert!(parsed.args.is_set("dry-run"));
    assert_eq!(parsed.args.value_of("jobs"), Some("4"));
}

#[test]
fn test_parse_rejects_bare_markers() {
    for token in ["-", "--"] {
        let err = parse(["build", token]).unwrap_err();
        assert!(matches!(err, ParseError::EmptyFlagName { .. }));
        assert!(err.to_string().contains(token));
    }
}

#[test]
fn test_parse_rejects_empty_value_binding() {
    let err = parse(["build", "--out="]).unwrap_err();
    assert!(matches!(err, ParseError::MissingValue { .. }));
    assert!(err.to_string().contains("out"));
}

#[test]
fn test_parse_single_and_double_dash_are_equivalent() {
    let single = parse(["build", "-v"]).unwrap();
    let double = parse(["build", "--v"]).unwrap();
    assert_eq!(single.args.flag("v"), double.args.flag("v"));
}

#[test]
fn test_parse_is_deterministic() {
    let tokens = ["build", "--verbose", "a", "--out=dist", "b"];
    let first = parse(tokens).unwrap();
    let second = parse(tokens).unwrap();
    assert_eq!(first, second);
}
