//! Compiler from a small regular-expression subset to a DFA.
//!
//! A pattern is a sequence of units, each optionally followed by `*`:
//!
//! | Unit | Example |
//! |------|---------|
//! | Literal character | `a`, `<`, `{` |
//! | Escape | `\t` `\n` `\r`, or `\` plus any character taken literally |
//! | Class | `[a-z]`, `[0|1]`, `[ |\t]` (shorthand label, see [`expand_label`]) |
//!
//! Groups, alternation outside brackets and nested classes are not supported.

use std::collections::HashSet;

use crate::{
    errors::errors::LoadError,
    lexer::{
        dfa::{StateId, TransitionTable},
        shorthand::expand_label,
    },
};

pub const START_STATE: StateId = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledPattern {
    pub transitions: TransitionTable,
    pub start: StateId,
    pub accept: HashSet<StateId>,
}

#[derive(Debug)]
struct Unit {
    chars: Vec<char>,
    repeat: bool,
}

pub fn compile_pattern(pattern: &str) -> Result<CompiledPattern, LoadError> {
    let units = parse_units(pattern)?;

    let mut transitions = TransitionTable::new();
    let mut frontier = vec![START_STATE];
    let mut next_state = START_STATE + 1;

    for unit in units {
        let target = next_state;
        next_state += 1;

        for &state in &frontier {
            for &c in &unit.chars {
                transitions.add_checked(state, c, target)?;
            }
        }

        if unit.repeat {
            for &c in &unit.chars {
                transitions.add_checked(target, c, target)?;
            }
            // Zero repetitions leave the previous frontier reachable.
            frontier.push(target);
        } else {
            frontier = vec![target];
        }
    }

    Ok(CompiledPattern {
        transitions,
        start: START_STATE,
        accept: frontier.into_iter().collect(),
    })
}

fn parse_units(pattern: &str) -> Result<Vec<Unit>, LoadError> {
    let malformed = |message: &str| LoadError::MalformedPattern {
        pattern: pattern.to_string(),
        message: message.to_string(),
    };

    let mut units: Vec<Unit> = Vec::new();
    let mut chars = pattern.chars();

    while let Some(c) = chars.next() {
        match c {
            '*' => match units.last_mut() {
                None => return Err(malformed("`*` has nothing to repeat")),
                Some(unit) if unit.repeat => return Err(malformed("`*` cannot follow `*`")),
                Some(unit) => unit.repeat = true,
            },
            '[' => {
                let mut label = String::new();
                loop {
                    match chars.next() {
                        None => return Err(malformed("unclosed `[`")),
                        Some('[') => return Err(malformed("classes do not nest")),
                        Some(']') => break,
                        Some(c) => label.push(c),
                    }
                }
                if label.is_empty() {
                    return Err(malformed("empty class"));
                }
                units.push(Unit {
                    chars: expand_label(&label)?,
                    repeat: false,
                });
            }
            ']' => return Err(malformed("unmatched `]`")),
            '\\' => {
                let escaped = match chars.next() {
                    None => return Err(malformed("trailing `\\`")),
                    Some('t') => '\t',
                    Some('n') => '\n',
                    Some('r') => '\r',
                    Some(c) => c,
                };
                units.push(Unit {
                    chars: vec![escaped],
                    repeat: false,
                });
            }
            c => units.push(Unit {
                chars: vec![c],
                repeat: false,
            }),
        }
    }

    if units.is_empty() {
        return Err(malformed("empty pattern"));
    }

    Ok(units)
}
