use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

use crate::{
    lexer::{dfa::StateId, tokens::TokenKind},
    Position,
};

/// A lexical diagnostic. Tokenization records these and keeps going.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{position}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::MalformedComment => "MalformedComment",
            ErrorImpl::UnterminatedToken { .. } => "UnterminatedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { character } => ErrorTip::Suggestion(format!(
                "`{}` cannot start any token",
                character.escape_default()
            )),
            ErrorImpl::MalformedComment => {
                ErrorTip::Suggestion(String::from("comments start with `//`"))
            }
            ErrorImpl::UnterminatedToken { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("`/` is not followed by a second `/`")]
    MalformedComment,
    #[error("input ended a token early: {text:?}")]
    UnterminatedToken { text: String },
}

/// Failure while building the recognizer registry. Fatal to startup.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{key:?} is not a state id")]
    InvalidStateId { key: String },
    #[error("empty transition label on state {state}")]
    EmptyLabel { state: StateId },
    #[error("illegal escape {item:?}")]
    IllegalEscape { item: String },
    #[error("cannot resolve character class {label:?}")]
    UnresolvableClass { label: String },
    #[error("state {state} moves to both {existing} and {requested} on {character:?}")]
    ConflictingTransition {
        state: StateId,
        character: char,
        existing: StateId,
        requested: StateId,
    },
    #[error("malformed pattern {pattern:?}: {message}")]
    MalformedPattern { pattern: String, message: String },
    #[error("recognizer {name:?} accepts the empty string")]
    NullableRecognizer { name: String },
    #[error("recognizer {name:?} is declared more than once")]
    DuplicateRecognizer { name: String },
    #[error("no acceptor is bound to token kind {kind}")]
    UnboundTokenKind { kind: TokenKind },
    #[error("recognizer {name:?}: {source}")]
    Recognizer {
        name: String,
        #[source]
        source: Box<LoadError>,
    },
    #[error("invalid recognizer source: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn in_recognizer(self, name: &str) -> Self {
        match self {
            LoadError::Recognizer { .. } => self,
            other => LoadError::Recognizer {
                name: name.to_string(),
                source: Box::new(other),
            },
        }
    }
}
