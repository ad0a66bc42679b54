mod dfa;
mod parser;
mod report;
mod session;
mod sim;
mod validate;


pub use dfa::{Dfa, DfaDraft, TransitionRule};
pub use parser::{parse, parse_with, ParseError};
pub use report::{render_plain, BatchReport, Summary};
pub use session::{
    BatchOutcome, InputBatch, LoadOutcome, LoadedDefinition, Session, SessionError,
};
pub use sim::{simulate, simulate_all, simulate_all_cancellable, SimulationError, Trace, Verdict};
pub use validate::{
    validate, ValidateOptions, ValidationError, ValidationReport, ValidationWarning,
};
