use lazy_static::lazy_static;
use serde::Deserialize;
use std::{collections::HashMap, fmt::Display};

use crate::{lexer::dfa::TokenAcceptor, Position, MK_ACCEPTOR};

lazy_static! {
    /// Acceptor for every token kind, used when a recognizer is loaded from data.
    pub static ref ACCEPTORS: HashMap<TokenKind, TokenAcceptor> = {
        let mut map: HashMap<TokenKind, TokenAcceptor> = HashMap::new();
        map.insert(TokenKind::And, MK_ACCEPTOR!(TokenKind::And));
        map.insert(TokenKind::Or, MK_ACCEPTOR!(TokenKind::Or));
        map.insert(TokenKind::Not, MK_ACCEPTOR!(TokenKind::Not));
        map.insert(TokenKind::Xor, MK_ACCEPTOR!(TokenKind::Xor));
        map.insert(TokenKind::In, MK_ACCEPTOR!(TokenKind::In));
        map.insert(TokenKind::Out, MK_ACCEPTOR!(TokenKind::Out));
        map.insert(TokenKind::Bits, MK_ACCEPTOR!(TokenKind::Bits));
        map.insert(TokenKind::Clock, MK_ACCEPTOR!(TokenKind::Clock));
        map.insert(TokenKind::Register, MK_ACCEPTOR!(TokenKind::Register));
        map.insert(TokenKind::Circuit, MK_ACCEPTOR!(TokenKind::Circuit));
        map.insert(TokenKind::LeftAngle, MK_ACCEPTOR!(TokenKind::LeftAngle));
        map.insert(TokenKind::RightAngle, MK_ACCEPTOR!(TokenKind::RightAngle));
        map.insert(TokenKind::Equals, MK_ACCEPTOR!(TokenKind::Equals));
        map.insert(TokenKind::LeftBrace, MK_ACCEPTOR!(TokenKind::LeftBrace));
        map.insert(TokenKind::RightBrace, MK_ACCEPTOR!(TokenKind::RightBrace));
        map.insert(TokenKind::LeftParen, MK_ACCEPTOR!(TokenKind::LeftParen));
        map.insert(TokenKind::RightParen, MK_ACCEPTOR!(TokenKind::RightParen));
        map.insert(TokenKind::Semicolon, MK_ACCEPTOR!(TokenKind::Semicolon));
        map.insert(TokenKind::Comma, MK_ACCEPTOR!(TokenKind::Comma));
        map.insert(TokenKind::Question, MK_ACCEPTOR!(TokenKind::Question));
        map.insert(TokenKind::Colon, MK_ACCEPTOR!(TokenKind::Colon));
        map.insert(TokenKind::Identifier, MK_ACCEPTOR!(TokenKind::Identifier));
        map.insert(TokenKind::Number, MK_ACCEPTOR!(TokenKind::Number));
        map.insert(TokenKind::Ignored, MK_ACCEPTOR!(TokenKind::Ignored));
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    // Reserved
    And,
    Or,
    Not,
    Xor,
    In,
    Out,
    Bits,
    Clock,
    Register,
    Circuit,

    LeftAngle,  // <
    RightAngle, // >
    Equals,     // =
    LeftBrace,  // {
    RightBrace, // }
    LeftParen,  // (
    RightParen, // )
    Semicolon,
    Comma,
    Question,
    Colon,

    Identifier,
    Number,

    /// Whitespace. Never reaches the token stream.
    Ignored,
}

impl TokenKind {
    pub fn acceptor(&self) -> Option<TokenAcceptor> {
        ACCEPTORS.get(self).copied()
    }

    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::And
                | TokenKind::Or
                | TokenKind::Not
                | TokenKind::Xor
                | TokenKind::In
                | TokenKind::Out
                | TokenKind::Bits
                | TokenKind::Clock
                | TokenKind::Register
                | TokenKind::Circuit
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: Position,
    pub end: Position,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: Position, end: Position) -> Self {
        Token {
            kind,
            text: text.into(),
            start,
            end,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{} {} {:?}", self.start, self.end, self.kind, self.text)
    }
}
