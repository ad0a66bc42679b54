use bit_set::BitSet;
use petgraph::graph::DiGraph;

// states are interned into a label table and referred to by index everywhere
// else, which keeps the transition table dense and lookups cheap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct StateId(u32);

impl StateId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// A validated deterministic finite automaton. Immutable after construction;
/// there is no mutation API, so a shared reference can be read from any number
/// of threads at once.
///
/// Partial automatons are representable: a missing (state, symbol) entry in
/// the transition table rejects at simulation time rather than load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dfa {
    labels: Vec<String>,
    alphabet: Vec<char>,
    // states = rows, symbols = columns, None = missing transition
    table: Vec<Option<StateId>>,
    start: StateId,
    accepting: BitSet,
}

impl Dfa {
    // only reachable through the parser/validator; the draft has already been
    // checked, so label and symbol lookups cannot fail here
    pub(crate) fn from_draft(draft: &DfaDraft) -> Dfa {
        let labels = draft.states.clone();
        let alphabet = draft.alphabet.clone();

        let state_index = |label: &str| -> StateId {
            let index = labels
                .iter()
                .position(|l| l == label)
                .expect("draft passed validation");
            StateId(index as u32)
        };

        let mut table: Vec<Option<StateId>> = vec![None; labels.len() * alphabet.len()];
        for rule in &draft.transitions {
            let row = state_index(&rule.from).index();
            let column = alphabet
                .iter()
                .position(|c| *c == rule.symbol)
                .expect("draft passed validation");
            table[row * alphabet.len() + column] = Some(state_index(&rule.to));
        }

        let start = state_index(draft.start.as_deref().expect("draft passed validation"));

        let mut accepting = BitSet::with_capacity(labels.len());
        for label in &draft.accepting {
            accepting.insert(state_index(label).index());
        }

        Dfa {
            labels,
            alphabet,
            table,
            start,
            accepting,
        }
    }

    pub fn state_count(&self) -> usize {
        self.labels.len()
    }

    pub fn states(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn alphabet(&self) -> &[char] {
        &self.alphabet
    }

    pub fn start_label(&self) -> &str {
        &self.labels[self.start.index()]
    }

    pub fn accepting_labels(&self) -> impl Iterator<Item = &str> {
        self.accepting.iter().map(|i| self.labels[i].as_str())
    }

    pub(crate) fn start(&self) -> StateId {
        self.start
    }

    pub(crate) fn label(&self, state: StateId) -> &str {
        &self.labels[state.index()]
    }

    pub(crate) fn symbol_index(&self, symbol: char) -> Option<usize> {
        self.alphabet.iter().position(|c| *c == symbol)
    }

    pub(crate) fn next(&self, state: StateId, column: usize) -> Option<StateId> {
        self.table[state.index() * self.alphabet.len() + column]
    }

    pub(crate) fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(state.index())
    }

    /// Graph view of the automaton, one node per state and one edge per
    /// transition, suitable for `petgraph::dot::Dot` rendering.
    pub fn graph(&self) -> DiGraph<&str, char> {
        let mut graph = DiGraph::new();
        let nodes: Vec<_> = self
            .labels
            .iter()
            .map(|label| graph.add_node(label.as_str()))
            .collect();

        for row in 0..self.labels.len() {
            for (column, symbol) in self.alphabet.iter().enumerate() {
                if let Some(target) = self.table[row * self.alphabet.len() + column] {
                    graph.add_edge(nodes[row], nodes[target.index()], *symbol);
                }
            }
        }

        graph
    }
}

/// Accumulated declarations of a definition file before validation. The
/// parser fills one of these; `validate` decides whether it can become a
/// [`Dfa`].
#[derive(Debug, Default, Clone)]
pub struct DfaDraft {
    pub states: Vec<String>,
    pub alphabet: Vec<char>,
    pub start: Option<String>,
    pub accepting: Vec<String>,
    pub transitions: Vec<TransitionRule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRule {
    pub from: String,
    pub symbol: char,
    pub to: String,
}
