use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::dfa::Dfa;
use crate::report::BatchReport;

/// States visited while consuming one input line, starting at the start state.
pub type Trace = Vec<String>;

#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize)]
pub enum SimulationError {
    #[error("symbol `{symbol}` at position {position} is not in the alphabet")]
    UnknownSymbol { symbol: char, position: usize },
    #[error("no transition from state `{state}` on symbol `{symbol}`")]
    NoTransition { state: String, symbol: char },
}

/// Outcome for a single input line. An errored line is never accepted; its
/// trace covers the states reached before the error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub accepted: bool,
    pub trace: Trace,
    pub error: Option<SimulationError>,
}

/// Runs one input line through the automaton. Pure over (dfa, line): the
/// automaton is never mutated, so any number of lines can run concurrently
/// against the same `Dfa`.
pub fn simulate(dfa: &Dfa, line: &str) -> Verdict {
    let mut current = dfa.start();
    let mut trace = vec![dfa.label(current).to_string()];

    for (position, symbol) in line.chars().enumerate() {
        let column = match dfa.symbol_index(symbol) {
            Some(column) => column,
            None => {
                return Verdict {
                    accepted: false,
                    trace,
                    error: Some(SimulationError::UnknownSymbol { symbol, position }),
                };
            }
        };

        match dfa.next(current, column) {
            Some(next) => {
                current = next;
                trace.push(dfa.label(current).to_string());
            }
            None => {
                return Verdict {
                    accepted: false,
                    trace,
                    error: Some(SimulationError::NoTransition {
                        state: dfa.label(current).to_string(),
                        symbol,
                    }),
                };
            }
        }
    }

    Verdict {
        accepted: dfa.is_accepting(current),
        trace,
        error: None,
    }
}

/// Evaluates every line independently. The report is index aligned with the
/// input regardless of execution order; with the `parallel` feature the lines
/// fan out across the rayon pool and the collect joins them back in order.
#[cfg(feature = "parallel")]
pub fn simulate_all(dfa: &Dfa, lines: &[String]) -> BatchReport {
    let verdicts = lines
        .par_iter()
        .map(|line| simulate(dfa, line))
        .collect();
    debug!(lines = lines.len(), "batch simulated");
    BatchReport { verdicts }
}

#[cfg(not(feature = "parallel"))]
pub fn simulate_all(dfa: &Dfa, lines: &[String]) -> BatchReport {
    let verdicts = lines.iter().map(|line| simulate(dfa, line)).collect();
    debug!(lines = lines.len(), "batch simulated");
    BatchReport { verdicts }
}

/// Sequential batch evaluation that checks a shared flag between lines. When
/// the flag is raised the completed prefix comes back untouched; no verdict is
/// ever half-written.
pub fn simulate_all_cancellable(
    dfa: &Dfa,
    lines: &[String],
    cancel: &AtomicBool,
) -> BatchReport {
    let mut verdicts = Vec::with_capacity(lines.len());
    for line in lines {
        if cancel.load(Ordering::Relaxed) {
            debug!(
                completed = verdicts.len(),
                total = lines.len(),
                "batch cancelled"
            );
            break;
        }
        verdicts.push(simulate(dfa, line));
    }
    BatchReport { verdicts }
}
