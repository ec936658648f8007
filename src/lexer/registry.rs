use serde::Deserialize;
use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};
use tracing::debug;

use crate::{
    errors::errors::LoadError,
    lexer::{
        dfa::{Recognizer, RecognizerDefinition, StateId},
        tokens::TokenKind,
    },
};

/// Recognizer set shipped with the compiler.
pub const BUILTIN_TOKENS: &str = include_str!("tokens.json");

#[derive(Debug, Deserialize)]
struct RegistrySource {
    recognizers: Vec<RecognizerSource>,
}

#[derive(Debug, Deserialize)]
struct RecognizerSource {
    name: String,
    kind: TokenKind,
    #[serde(flatten)]
    body: RecognizerBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecognizerBody {
    Pattern {
        pattern: String,
    },
    Graph {
        start: StateId,
        accept: HashSet<StateId>,
        // Keyed by the state id as written; integer keys do not survive `flatten`.
        graph: HashMap<String, HashMap<String, StateId>>,
    },
}

/// Recognizer definitions ranked from highest (first) to lowest (last) priority.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    definitions: Vec<RecognizerDefinition>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Loads the recognizers embedded in the library.
    pub fn builtin() -> Result<Self, LoadError> {
        Registry::from_json(BUILTIN_TOKENS)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("loading recognizers from {}", path.display());
        Registry::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let source: RegistrySource = serde_json::from_str(json)?;
        let mut registry = Registry::new();

        for recognizer in source.recognizers {
            let acceptor = recognizer
                .kind
                .acceptor()
                .ok_or(LoadError::UnboundTokenKind { kind: recognizer.kind })?;

            let definition = match recognizer.body {
                RecognizerBody::Pattern { pattern } => {
                    RecognizerDefinition::from_pattern(recognizer.name, &pattern, acceptor)?
                }
                RecognizerBody::Graph { start, accept, graph } => {
                    let graph = parse_state_keys(graph).map_err(|e| e.in_recognizer(&recognizer.name))?;
                    RecognizerDefinition::from_graph(recognizer.name, start, accept, &graph, acceptor)?
                }
            };

            registry.register(definition)?;
        }

        debug!("loaded {} recognizers", registry.len());
        Ok(registry)
    }

    /// Appends a definition at the lowest priority so far.
    pub fn register(&mut self, mut definition: RecognizerDefinition) -> Result<(), LoadError> {
        if self.get(definition.name()).is_some() {
            return Err(LoadError::DuplicateRecognizer {
                name: definition.name().to_string(),
            });
        }

        definition.priority = self.definitions.len();
        self.definitions.push(definition);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&RecognizerDefinition> {
        self.definitions.iter().find(|definition| definition.name() == name)
    }

    pub fn definitions(&self) -> &[RecognizerDefinition] {
        &self.definitions
    }

    /// Fresh running recognizers, one per definition, in priority order.
    pub fn instantiate(&self) -> Vec<Recognizer<'_>> {
        self.definitions.iter().map(RecognizerDefinition::instantiate).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

fn parse_state_keys<V>(graph: HashMap<String, V>) -> Result<HashMap<StateId, V>, LoadError> {
    graph
        .into_iter()
        .map(|(key, edges)| match key.trim().parse::<StateId>() {
            Ok(state) => Ok((state, edges)),
            Err(_) => Err(LoadError::InvalidStateId { key }),
        })
        .collect()
}
