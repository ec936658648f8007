use tracing::{debug, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        dfa::Recognizer,
        registry::Registry,
        tokens::{Token, TokenKind},
    },
    Position,
};

/// Drives every recognizer of a registry over the input in lock-step.
pub struct Lexer<'a> {
    recognizers: Vec<Recognizer<'a>>,
    // Recognizers that have not failed since the current token started.
    live: Vec<bool>,
    tokens: Vec<Token>,
    errors: Vec<Error>,
    position: Position,
    start: Position,
    // Characters consumed into the current token so far.
    lexeme: String,
    in_comment: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(registry: &'a Registry) -> Lexer<'a> {
        Lexer {
            recognizers: registry.instantiate(),
            live: vec![true; registry.len()],
            tokens: vec![],
            errors: vec![],
            position: Position::origin(),
            start: Position::origin(),
            lexeme: String::new(),
            in_comment: false,
        }
    }

    /// Splits `source` into tokens, dropping whitespace and comments.
    ///
    /// Lexical errors do not stop the scan: they are returned alongside
    /// every token that could still be recognized.
    pub fn tokenize(&mut self, source: &str) -> (Vec<Token>, Vec<Error>) {
        self.restart();

        let chars = source.chars().collect::<Vec<char>>();
        for (i, &c) in chars.iter().enumerate() {
            self.step(c, chars.get(i + 1).copied());
        }
        self.flush();

        let mut tokens = std::mem::take(&mut self.tokens);
        let errors = std::mem::take(&mut self.errors);
        tokens.retain(|token| token.kind != TokenKind::Ignored);

        debug!(
            "tokenized {} characters into {} tokens with {} errors",
            chars.len(),
            tokens.len(),
            errors.len()
        );

        (tokens, errors)
    }

    fn step(&mut self, c: char, next: Option<char>) {
        let here = self.position;
        self.position.advance(c);

        if self.in_comment {
            if c == '\n' {
                self.in_comment = false;
                self.start = self.position;
            }
            return;
        }

        if c == '/' {
            self.settle(here);

            if next == Some('/') {
                trace!("comment at {}", here);
                self.in_comment = true;
            } else {
                self.report(ErrorImpl::MalformedComment, here);
                self.start = self.position;
            }
            return;
        }

        let mut advanced = self.feed(c);
        if !advanced && !self.lexeme.is_empty() {
            // A partial match is stuck. Give it up and let `c` start afresh.
            self.abandon();
            self.start = here;
            advanced = self.feed(c);
        }

        if !advanced {
            self.report(ErrorImpl::UnrecognisedCharacter { character: c }, here);
            self.reset_all();
            self.start = self.position;
            return;
        }
        self.lexeme.push(c);

        let Some(best) = self.first_accepting() else {
            return;
        };

        // Maximal munch: wait while any accepting recognizer can take `next` too.
        let can_extend = next.is_some_and(|next| {
            self.recognizers
                .iter()
                .zip(&self.live)
                .any(|(recognizer, &live)| live && recognizer.peek(next))
        });

        if !can_extend {
            self.emit(best);
        }
    }

    /// Feeds `c` to every live recognizer. Returns whether any advanced.
    fn feed(&mut self, c: char) -> bool {
        let mut advanced = false;

        for (recognizer, live) in self.recognizers.iter_mut().zip(self.live.iter_mut()) {
            if !*live {
                continue;
            }

            if recognizer.consume(c) {
                advanced = true;
            } else {
                *live = false;
            }
        }

        advanced
    }

    fn first_accepting(&self) -> Option<usize> {
        self.recognizers
            .iter()
            .zip(&self.live)
            .position(|(recognizer, &live)| live && recognizer.is_accept())
    }

    fn emit(&mut self, index: usize) {
        let token = self.recognizers[index].accept(self.start, self.position);
        trace!("{}", token);

        self.tokens.push(token);
        self.reset_all();
        self.start = self.position;
    }

    /// Ends the current token before `here`: emits it if some recognizer
    /// accepts, otherwise reports the partial match.
    fn settle(&mut self, here: Position) {
        if self.lexeme.is_empty() {
            return;
        }

        match self.first_accepting() {
            Some(best) => {
                let token = self.recognizers[best].accept(self.start, here);
                trace!("{}", token);
                self.tokens.push(token);
                self.reset_all();
            }
            None => self.abandon(),
        }
    }

    fn abandon(&mut self) {
        let text = std::mem::take(&mut self.lexeme);
        self.report(ErrorImpl::UnterminatedToken { text }, self.start);
        self.reset_all();
    }

    fn flush(&mut self) {
        if !self.in_comment {
            self.settle(self.position);
        }
        self.reset_all();
    }

    fn report(&mut self, error: ErrorImpl, position: Position) {
        let error = Error::new(error, position);
        trace!("{}", error);
        self.errors.push(error);
    }

    fn reset_all(&mut self) {
        self.recognizers.iter_mut().for_each(Recognizer::reset);
        self.live.iter_mut().for_each(|live| *live = true);
        self.lexeme.clear();
    }

    fn restart(&mut self) {
        self.reset_all();
        self.tokens.clear();
        self.errors.clear();
        self.position = Position::origin();
        self.start = Position::origin();
        self.in_comment = false;
    }
}

pub fn tokenize(source: &str, registry: &Registry) -> (Vec<Token>, Vec<Error>) {
    Lexer::new(registry).tokenize(source)
}
