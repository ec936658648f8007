//! Error types and error handling for the lexer.
//!
//! This module defines the error types used by the front end. It includes:
//!
//! - Lexical diagnostics with source position information
//! - Load-time errors raised while building the recognizer registry
//! - Error names and suggestions used when rendering diagnostics

pub mod errors;

#[cfg(test)]
mod tests;
