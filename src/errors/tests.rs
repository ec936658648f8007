//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip, LoadError};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        Position::new(3, 7),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(error.get_impl(), &ErrorImpl::UnrecognisedCharacter { character: '@' });
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::MalformedComment, Position::new(4, 2));

    assert_eq!(error.get_position().row, 4);
    assert_eq!(error.get_position().col, 2);
}

#[test]
fn test_error_display_includes_position() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '#' },
        Position::new(1, 2),
    );

    assert_eq!(error.to_string(), "1:2: unrecognised character '#'");
}

#[test]
fn test_malformed_comment_error() {
    let error = Error::new(ErrorImpl::MalformedComment, Position::origin());

    assert_eq!(error.get_error_name(), "MalformedComment");
    assert_eq!(error.get_tip().to_string(), "comments start with `//`");
}

#[test]
fn test_unterminated_token_error() {
    let error = Error::new(
        ErrorImpl::UnterminatedToken { text: "regi".to_string() },
        Position::new(2, 1),
    );

    assert_eq!(error.get_error_name(), "UnterminatedToken");
    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.to_string(), "2:1: input ended a token early: \"regi\"");
}

#[test]
fn test_error_tip_escapes_control_characters() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '\t' },
        Position::origin(),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "`\\t` cannot start any token"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}

#[test]
fn test_load_error_context() {
    let error = LoadError::IllegalEscape { item: "\\x".to_string() }.in_recognizer("whitespace");

    assert_eq!(
        error.to_string(),
        "recognizer \"whitespace\": illegal escape \"\\\\x\""
    );

    // Wrapping twice keeps the innermost name.
    let error = error.in_recognizer("outer");
    assert!(matches!(error, LoadError::Recognizer { ref name, .. } if name == "whitespace"));
}
