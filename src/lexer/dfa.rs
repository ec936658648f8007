use std::collections::{HashMap, HashSet};

use crate::{
    errors::errors::LoadError,
    lexer::{pattern::compile_pattern, shorthand::expand_graph, tokens::Token},
    Position,
};

pub type StateId = usize;

/// Builds a token from the matched text and its span. Must be pure.
pub type TokenAcceptor = fn(String, Position, Position) -> Token;

/// Partial transition function. Missing edges mean "no transition".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransitionTable {
    edges: HashMap<StateId, HashMap<char, StateId>>,
}

impl TransitionTable {
    pub fn new() -> Self {
        TransitionTable::default()
    }

    pub fn get(&self, state: StateId, c: char) -> Option<StateId> {
        self.edges.get(&state)?.get(&c).copied()
    }

    /// Adds `from --c--> to`. Fails with the existing target when `from`
    /// already moves somewhere else on `c`.
    pub fn add(&mut self, from: StateId, c: char, to: StateId) -> Result<(), StateId> {
        let targets = self.edges.entry(from).or_default();

        match targets.get(&c) {
            Some(&existing) if existing != to => Err(existing),
            _ => {
                targets.insert(c, to);
                Ok(())
            }
        }
    }

    pub(crate) fn add_checked(&mut self, from: StateId, c: char, to: StateId) -> Result<(), LoadError> {
        self.add(from, c, to).map_err(|existing| LoadError::ConflictingTransition {
            state: from,
            character: c,
            existing,
            requested: to,
        })
    }

    pub fn len(&self) -> usize {
        self.edges.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A recognizer as declared in the registry. Immutable and shared across scans.
#[derive(Debug, Clone)]
pub struct RecognizerDefinition {
    name: String,
    pub(crate) priority: usize,
    transitions: TransitionTable,
    start: StateId,
    accept: HashSet<StateId>,
    acceptor: TokenAcceptor,
}

impl RecognizerDefinition {
    pub fn new(
        name: impl Into<String>,
        transitions: TransitionTable,
        start: StateId,
        accept: HashSet<StateId>,
        acceptor: TokenAcceptor,
    ) -> Result<Self, LoadError> {
        let name = name.into();

        // A start state that accepts would claim an empty token at every position.
        if accept.contains(&start) {
            return Err(LoadError::NullableRecognizer { name });
        }

        Ok(RecognizerDefinition {
            name,
            priority: 0,
            transitions,
            start,
            accept,
            acceptor,
        })
    }

    /// Compiles `pattern` (see [`compile_pattern`]) into a definition.
    pub fn from_pattern(
        name: impl Into<String>,
        pattern: &str,
        acceptor: TokenAcceptor,
    ) -> Result<Self, LoadError> {
        let name = name.into();
        let compiled = compile_pattern(pattern).map_err(|e| e.in_recognizer(&name))?;

        RecognizerDefinition::new(name, compiled.transitions, compiled.start, compiled.accept, acceptor)
    }

    /// Builds a definition from a graph whose edge labels may use shorthands.
    pub fn from_graph(
        name: impl Into<String>,
        start: StateId,
        accept: HashSet<StateId>,
        graph: &HashMap<StateId, HashMap<String, StateId>>,
        acceptor: TokenAcceptor,
    ) -> Result<Self, LoadError> {
        let name = name.into();
        let transitions = expand_graph(graph).map_err(|e| e.in_recognizer(&name))?;

        RecognizerDefinition::new(name, transitions, start, accept, acceptor)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> usize {
        self.priority
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn accept_states(&self) -> &HashSet<StateId> {
        &self.accept
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    pub fn instantiate(&self) -> Recognizer<'_> {
        Recognizer::new(self)
    }
}

/// A running DFA over one definition. Holds only the state of the current match.
#[derive(Debug, Clone)]
pub struct Recognizer<'a> {
    definition: &'a RecognizerDefinition,
    state: StateId,
    prev_state: StateId,
    seen_text: String,
    // Whether the last call was an advancing consume, so rewind may drop its character.
    rewindable: bool,
}

impl<'a> Recognizer<'a> {
    pub fn new(definition: &'a RecognizerDefinition) -> Self {
        Recognizer {
            definition,
            state: definition.start,
            prev_state: definition.start,
            seen_text: String::new(),
            rewindable: false,
        }
    }

    /// Consumes a character, performing a state transition.
    ///
    /// Without an edge for `c` the recognizer resets and returns `false`. It is
    /// then out of the running for the current token.
    pub fn consume(&mut self, c: char) -> bool {
        let Some(next_state) = self.definition.transitions.get(self.state, c) else {
            self.reset();
            return false;
        };

        self.seen_text.push(c);
        self.prev_state = self.state;
        self.state = next_state;
        self.rewindable = true;
        true
    }

    /// Checks whether consuming `c` would keep the recognizer in an accept
    /// state, without changing it. Always false when not accepting now.
    pub fn peek(&self, c: char) -> bool {
        if !self.is_accept() {
            return false;
        }

        self.definition
            .transitions
            .get(self.state, c)
            .is_some_and(|next| self.definition.accept.contains(&next))
    }

    pub fn is_accept(&self) -> bool {
        self.definition.accept.contains(&self.state)
    }

    /// Builds a token from the matched text, then resets.
    ///
    /// # Panics
    ///
    /// Panics if the recognizer is not in an accept state. Callers check
    /// [`is_accept`](Self::is_accept) first.
    pub fn accept(&mut self, start: Position, end: Position) -> Token {
        assert!(
            self.is_accept(),
            "state {} of recognizer {:?} is not an accept state",
            self.state,
            self.definition.name
        );

        let text = std::mem::take(&mut self.seen_text);
        let token = (self.definition.acceptor)(text, start, end);
        self.reset();

        token
    }

    /// Returns to the start state with an empty buffer. The previous state
    /// is kept.
    pub fn reset(&mut self) {
        self.seen_text.clear();
        self.state = self.definition.start;
        self.rewindable = false;
    }

    /// Steps back to the previous state. Only one step is remembered, so a
    /// second call without a consume in between stays where the first left.
    pub fn rewind_once(&mut self) {
        self.state = self.prev_state;
        if self.rewindable {
            self.seen_text.pop();
            self.rewindable = false;
        }
    }

    pub fn state(&self) -> StateId {
        self.state
    }

    pub fn text(&self) -> &str {
        &self.seen_text
    }
}
