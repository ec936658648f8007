//! Expansion of shorthand edge labels.
//!
//! A label longer than one character stands for several single-character
//! edges to the same state: either an inclusive range (`0-9`) or a `|`
//! separated list of characters and escapes (`a|b|\t`).

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

use crate::{
    errors::errors::LoadError,
    lexer::dfa::{StateId, TransitionTable},
};

lazy_static! {
    static ref RANGE_LABEL: Regex = Regex::new(r"^(.)-(.)$").expect("range label regex");
    static ref ESCAPE_ITEM: Regex = Regex::new(r"^\\(.)$").expect("escape item regex");
}

/// Resolves a label to the characters it stands for, in label order.
pub fn expand_label(label: &str) -> Result<Vec<char>, LoadError> {
    let mut chars = label.chars();

    match (chars.next(), chars.next()) {
        (None, _) => {
            return Err(LoadError::UnresolvableClass {
                label: label.to_string(),
            })
        }
        (Some(c), None) => return Ok(vec![c]),
        _ => {}
    }

    if let Some(range) = RANGE_LABEL.captures(label) {
        let low = range[1].chars().next();
        let high = range[2].chars().next();

        return match (low, high) {
            (Some(low), Some(high)) if low <= high => Ok((low..=high).collect()),
            _ => Err(LoadError::UnresolvableClass {
                label: label.to_string(),
            }),
        };
    }

    let mut expanded = Vec::new();
    for item in label.split('|') {
        let c = expand_item(item).ok_or_else(|| {
            if ESCAPE_ITEM.is_match(item) {
                LoadError::IllegalEscape {
                    item: item.to_string(),
                }
            } else {
                LoadError::UnresolvableClass {
                    label: label.to_string(),
                }
            }
        })?;

        if !expanded.contains(&c) {
            expanded.push(c);
        }
    }

    Ok(expanded)
}

fn expand_item(item: &str) -> Option<char> {
    let mut chars = item.chars();

    match (chars.next(), chars.next(), chars.next()) {
        (Some(c), None, _) => Some(c),
        (Some('\\'), Some('t'), None) => Some('\t'),
        (Some('\\'), Some('n'), None) => Some('\n'),
        (Some('\\'), Some('r'), None) => Some('\r'),
        _ => None,
    }
}

/// Builds a transition table from a graph with shorthand labels.
pub fn expand_graph(graph: &HashMap<StateId, HashMap<String, StateId>>) -> Result<TransitionTable, LoadError> {
    let mut table = TransitionTable::new();

    for (&state, edges) in graph {
        for (label, &target) in edges {
            if label.is_empty() {
                return Err(LoadError::EmptyLabel { state });
            }

            for c in expand_label(label)? {
                table.add_checked(state, c, target)?;
            }
        }
    }

    Ok(table)
}
