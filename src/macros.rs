//! Utility macros for the lexer.
//!
//! This module defines helper macros used when building recognizers:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_ACCEPTOR!` - Creates a token acceptor for a single token kind
//!
//! These macros reduce boilerplate in the acceptor table and in tests.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$text` - The matched text
/// * `$start` - Position of the first matched character
/// * `$end` - Position just past the last matched character
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), start, end);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $text:expr, $start:expr, $end:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            text: $text,
            start: $start,
            end: $end,
        }
    };
}

/// Creates an acceptor that wraps the matched text in a token of `$kind`.
///
/// The closure captures nothing, so it coerces to a plain
/// [`TokenAcceptor`](crate::lexer::dfa::TokenAcceptor) function pointer.
///
/// # Example
///
/// ```ignore
/// let definition = RecognizerDefinition::from_pattern("and", "and", MK_ACCEPTOR!(TokenKind::And))?;
/// ```
#[macro_export]
macro_rules! MK_ACCEPTOR {
    ($kind:expr) => {
        |text: String, start: $crate::Position, end: $crate::Position| {
            $crate::MK_TOKEN!($kind, text, start, end)
        }
    };
}
