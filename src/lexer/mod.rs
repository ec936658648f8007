//! Lexical analysis module for the compiler.
//!
//! This module turns source code into a stream of tokens using a set of
//! independent DFAs run in lock-step. It handles:
//!
//! - Expansion of shorthand edge labels and compilation of small patterns
//! - Loading of ranked recognizer definitions from JSON
//! - Maximal munch with a priority tie-break between recognizers
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod dfa;
pub mod lexer;
pub mod pattern;
pub mod registry;
pub mod shorthand;
pub mod tokens;
