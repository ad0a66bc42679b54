use thiserror::Error;
use tracing::{debug, warn};

use crate::dfa::{Dfa, DfaDraft, TransitionRule};
use crate::validate::{self, ValidateOptions, ValidationError, ValidationWarning};

// definition file format, line oriented and order independent:
//
//   # comment
//   states: q0 q1
//   alphabet: a b
//   start: q0
//   accepting: q1
//   q0 a -> q1
//   q0,b,q0
//
// declaration lines accumulate. transitions are three tokens (optional `->`
// before the target); tokens split on commas or whitespace

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line {line}: unrecognized definition line `{text}`")]
    MalformedLine { line: usize, text: String },
    #[error("definition is not a valid automaton: {0}")]
    InvalidAutomaton(#[from] ValidationError),
}

/// Parses and validates a definition under the default policy. Either a fully
/// validated [`Dfa`] comes back or no automaton at all; there is no partial
/// success.
pub fn parse(content: &str) -> Result<Dfa, ParseError> {
    let (dfa, _) = parse_with(content, &ValidateOptions::default())?;
    Ok(dfa)
}

/// Same as [`parse`] but with an explicit validation policy, also surfacing
/// the warnings the validator attached to an accepted automaton.
pub fn parse_with(
    content: &str,
    options: &ValidateOptions,
) -> Result<(Dfa, Vec<ValidationWarning>), ParseError> {
    let draft = accumulate(content)?;

    let report = validate::validate(&draft, options);
    if let Some(error) = report.errors.into_iter().next() {
        return Err(ParseError::InvalidAutomaton(error));
    }
    for warning in &report.warnings {
        warn!("{warning}");
    }

    let dfa = Dfa::from_draft(&draft);
    debug!(
        states = dfa.state_count(),
        symbols = dfa.alphabet().len(),
        transitions = draft.transitions.len(),
        "parsed automaton definition"
    );
    Ok((dfa, report.warnings))
}

fn accumulate(content: &str) -> Result<DfaDraft, ParseError> {
    let mut draft = DfaDraft::default();

    for (index, raw) in content.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw).trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let number = index + 1;

        if let Some(rest) = line.strip_prefix("states:") {
            for token in tokens(rest) {
                push_unique(&mut draft.states, token);
            }
        } else if let Some(rest) = line.strip_prefix("alphabet:") {
            for token in tokens(rest) {
                let symbol = single_char(token).ok_or_else(|| malformed(number, line))?;
                if !draft.alphabet.contains(&symbol) {
                    draft.alphabet.push(symbol);
                }
            }
        } else if let Some(rest) = line.strip_prefix("start:") {
            let mut rest = tokens(rest);
            let state = match (rest.next(), rest.next()) {
                (Some(state), None) => state,
                _ => return Err(malformed(number, line)),
            };
            // a second start declaration has no unambiguous reading
            if draft.start.is_some() {
                return Err(malformed(number, line));
            }
            draft.start = Some(state.to_string());
        } else if let Some(rest) = line.strip_prefix("accepting:") {
            for token in tokens(rest) {
                push_unique(&mut draft.accepting, token);
            }
        } else {
            let parts: Vec<&str> = tokens(line).filter(|t| *t != "->").collect();
            let (from, symbol, to) = match parts.as_slice() {
                [from, symbol, to] => (*from, *symbol, *to),
                _ => return Err(malformed(number, line)),
            };
            let symbol = single_char(symbol).ok_or_else(|| malformed(number, line))?;
            draft.transitions.push(TransitionRule {
                from: from.to_string(),
                symbol,
                to: to.to_string(),
            });
        }
    }

    Ok(draft)
}

fn tokens(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
}

fn single_char(token: &str) -> Option<char> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn push_unique(items: &mut Vec<String>, item: &str) {
    if !items.iter().any(|existing| existing == item) {
        items.push(item.to_string());
    }
}

fn malformed(line: usize, text: &str) -> ParseError {
    ParseError::MalformedLine {
        line,
        text: text.to_string(),
    }
}
