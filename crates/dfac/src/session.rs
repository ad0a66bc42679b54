use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::dfa::Dfa;
use crate::parser::{self, ParseError};
use crate::report::{BatchReport, Summary};
use crate::sim;
use crate::validate::{ValidateOptions, ValidationWarning};

/// A loaded automaton-definition file as handed across the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedDefinition {
    pub filename: String,
    pub content: String,
}

/// A loaded test-input file: one candidate line per entry, evaluated
/// independently and in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputBatch {
    pub filename: String,
    pub input_lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub dfa: Arc<Dfa>,
    pub warnings: Vec<ValidationWarning>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchOutcome {
    pub report: BatchReport,
    pub summary: Summary,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("no automaton loaded")]
    NoAutomaton,
}

/// Holds the single active automaton for one UI session. At most one DFA is
/// live at a time; loading a new definition replaces it only after the new one
/// has fully parsed and validated, so a failed load never disturbs the
/// automaton already in use.
#[derive(Debug, Default)]
pub struct Session {
    options: ValidateOptions,
    active: Option<Arc<Dfa>>,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn with_options(options: ValidateOptions) -> Session {
        Session {
            options,
            active: None,
        }
    }

    pub fn load_definition(
        &mut self,
        definition: &LoadedDefinition,
    ) -> Result<LoadOutcome, ParseError> {
        let (dfa, warnings) = parser::parse_with(&definition.content, &self.options)?;
        let dfa = Arc::new(dfa);
        self.active = Some(Arc::clone(&dfa));
        info!(
            file = %definition.filename,
            states = dfa.state_count(),
            symbols = dfa.alphabet().len(),
            "automaton loaded"
        );
        Ok(LoadOutcome { dfa, warnings })
    }

    /// The automaton simulations currently run against, if any. Shared
    /// read-only; a later load swaps the slot without touching clones already
    /// handed out.
    pub fn active(&self) -> Option<Arc<Dfa>> {
        self.active.clone()
    }

    pub fn run_batch(&self, batch: &InputBatch) -> Result<BatchOutcome, SessionError> {
        let dfa = self.active.as_ref().ok_or(SessionError::NoAutomaton)?;
        let report = sim::simulate_all(dfa, &batch.input_lines);
        let summary = Summary::from_report(&report);
        debug!(
            file = %batch.filename,
            total = summary.total,
            accepted = summary.accepted,
            "batch evaluated"
        );
        Ok(BatchOutcome { report, summary })
    }
}
