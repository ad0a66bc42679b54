use std::collections::HashMap;

use bit_set::BitSet;
use thiserror::Error;

use crate::dfa::DfaDraft;

/// Validation policy. The default loads incomplete automatons with a warning
/// and lets the simulator reject unmatched inputs at runtime; strict callers
/// can turn the same condition into a load failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions {
    pub reject_incomplete: bool,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("automaton declares no states")]
    EmptyStates,
    #[error("automaton declares no alphabet")]
    EmptyAlphabet,
    #[error("{}", invalid_start_message(.state))]
    InvalidStart { state: Option<String> },
    #[error("accepting state `{0}` is not a declared state")]
    InvalidAccepting(String),
    #[error("transition `{from} {symbol} -> {to}` uses an undeclared state or symbol")]
    InvalidTransitionEndpoint {
        from: String,
        symbol: char,
        to: String,
    },
    #[error("conflicting transitions from `{from}` on `{symbol}`: `{first}` vs `{second}`")]
    NondeterministicTransition {
        from: String,
        symbol: char,
        first: String,
        second: String,
    },
    #[error("automaton is missing {missing} of {total} transitions")]
    IncompleteAutomaton { missing: usize, total: usize },
}

fn invalid_start_message(state: &Option<String>) -> String {
    match state {
        Some(state) => format!("start state `{state}` is not a declared state"),
        None => "no start state declared".to_string(),
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    #[error("automaton is missing {missing} of {total} transitions; unmatched inputs will be rejected")]
    IncompleteAutomaton { missing: usize, total: usize },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks a draft for structural well-formedness. Checks run in a fixed order
/// and stop at the first error, so the reported error is deterministic for a
/// given definition. Completeness (check 7) is the only warning-level check.
pub fn validate(draft: &DfaDraft, options: &ValidateOptions) -> ValidationReport {
    let mut report = ValidationReport::default();

    // 1, 2: nonempty state set and alphabet
    if draft.states.is_empty() {
        report.errors.push(ValidationError::EmptyStates);
        return report;
    }
    if draft.alphabet.is_empty() {
        report.errors.push(ValidationError::EmptyAlphabet);
        return report;
    }

    let declared = |label: &str| draft.states.iter().any(|s| s == label);

    // 3: start state declared and known
    match &draft.start {
        Some(start) if declared(start) => {}
        other => {
            report.errors.push(ValidationError::InvalidStart {
                state: other.clone(),
            });
            return report;
        }
    }

    // 4: accepting states are a subset of the state set
    for label in &draft.accepting {
        if !declared(label) {
            report
                .errors
                .push(ValidationError::InvalidAccepting(label.clone()));
            return report;
        }
    }

    // 5: transition endpoints and symbols are all declared
    for rule in &draft.transitions {
        if !declared(&rule.from) || !declared(&rule.to) || !draft.alphabet.contains(&rule.symbol) {
            report
                .errors
                .push(ValidationError::InvalidTransitionEndpoint {
                    from: rule.from.clone(),
                    symbol: rule.symbol,
                    to: rule.to.clone(),
                });
            return report;
        }
    }

    // 6: determinism, no (source, symbol) pair may map to two targets
    let mut targets: HashMap<(&str, char), &str> = HashMap::new();
    for rule in &draft.transitions {
        match targets.insert((rule.from.as_str(), rule.symbol), rule.to.as_str()) {
            Some(previous) if previous != rule.to => {
                report
                    .errors
                    .push(ValidationError::NondeterministicTransition {
                        from: rule.from.clone(),
                        symbol: rule.symbol,
                        first: previous.to_string(),
                        second: rule.to.clone(),
                    });
                return report;
            }
            _ => {}
        }
    }

    // 7: completeness over the full (state, symbol) domain
    let columns = draft.alphabet.len();
    let total = draft.states.len() * columns;
    let mut covered = BitSet::with_capacity(total);
    for rule in &draft.transitions {
        let row = draft
            .states
            .iter()
            .position(|s| *s == rule.from)
            .expect("endpoints checked above");
        let column = draft
            .alphabet
            .iter()
            .position(|c| *c == rule.symbol)
            .expect("endpoints checked above");
        covered.insert(row * columns + column);
    }

    let missing = total - covered.len();
    if missing > 0 {
        if options.reject_incomplete {
            report
                .errors
                .push(ValidationError::IncompleteAutomaton { missing, total });
        } else {
            report
                .warnings
                .push(ValidationWarning::IncompleteAutomaton { missing, total });
        }
    }

    report
}
