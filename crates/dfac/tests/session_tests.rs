use dfac::{
    InputBatch, LoadedDefinition, ParseError, Session, SessionError, ValidateOptions,
    ValidationError,
};

const ENDS_IN_A: &str = "\
states: q0 q1
alphabet: a b
start: q0
accepting: q1
q0 a -> q1
q0 b -> q0
q1 a -> q1
q1 b -> q0
";

fn definition(content: &str) -> LoadedDefinition {
    LoadedDefinition {
        filename: "machine.dfa".to_string(),
        content: content.to_string(),
    }
}

fn batch(lines: &[&str]) -> InputBatch {
    InputBatch {
        filename: "cases.in".to_string(),
        input_lines: lines.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn run_batch_without_automaton_fails() {
    let session = Session::new();
    assert_eq!(
        session.run_batch(&batch(&["a"])).unwrap_err(),
        SessionError::NoAutomaton
    );
}

#[test]
fn load_then_evaluate() {
    let mut session = Session::new();
    let outcome = session
        .load_definition(&definition(ENDS_IN_A))
        .expect("failed to load definition");
    assert!(outcome.warnings.is_empty());

    let result = session.run_batch(&batch(&["a", "ab", "ac"])).unwrap();
    let accepted: Vec<bool> = result.report.verdicts.iter().map(|v| v.accepted).collect();
    assert_eq!(accepted, vec![true, false, false]);
    assert_eq!(result.summary.accepted, 1);
    assert_eq!(result.summary.rejected, 1);
    assert_eq!(result.summary.errored, 1);
}

#[test]
fn failed_load_keeps_the_previous_automaton() {
    let mut session = Session::new();
    session
        .load_definition(&definition(ENDS_IN_A))
        .expect("failed to load definition");
    let before = session.active().expect("automaton should be active");

    // missing start declaration
    let err = session
        .load_definition(&definition("states: q0\nalphabet: a\nq0 a q0\n"))
        .unwrap_err();
    assert_eq!(
        err,
        ParseError::InvalidAutomaton(ValidationError::InvalidStart { state: None })
    );

    let after = session.active().expect("automaton should still be active");
    assert_eq!(*before, *after);

    // and the old automaton still answers queries
    let result = session.run_batch(&batch(&["ba"])).unwrap();
    assert!(result.report.verdicts[0].accepted);
}

#[test]
fn successful_load_replaces_the_automaton() {
    let mut session = Session::new();
    session
        .load_definition(&definition(ENDS_IN_A))
        .expect("failed to load definition");

    // accepts everything over {a}
    session
        .load_definition(&definition(
            "states: s\nalphabet: a\nstart: s\naccepting: s\ns a s\n",
        ))
        .expect("failed to load replacement");

    let result = session.run_batch(&batch(&["aaa"])).unwrap();
    assert!(result.report.verdicts[0].accepted);
}

#[test]
fn strict_session_rejects_incomplete_definitions() {
    let mut session = Session::with_options(ValidateOptions {
        reject_incomplete: true,
    });
    let partial = "states: q0 q1\nalphabet: a b\nstart: q0\naccepting: q1\nq0 a q1\n";
    let err = session.load_definition(&definition(partial)).unwrap_err();
    assert!(matches!(
        err,
        ParseError::InvalidAutomaton(ValidationError::IncompleteAutomaton { .. })
    ));
    assert!(session.active().is_none());
}

#[test]
fn lenient_session_loads_incomplete_definitions_with_warning() {
    let mut session = Session::new();
    let partial = "states: q0 q1\nalphabet: a b\nstart: q0\naccepting: q1\nq0 a q1\n";
    let outcome = session
        .load_definition(&definition(partial))
        .expect("lenient session should load partial automaton");
    assert_eq!(outcome.warnings.len(), 1);

    // the missing transition shows up per line, not as a load failure
    let result = session.run_batch(&batch(&["aa"])).unwrap();
    assert!(!result.report.verdicts[0].accepted);
    assert!(result.report.verdicts[0].error.is_some());
}

#[test]
fn boundary_records_use_the_wire_field_names() {
    let batch: InputBatch =
        serde_json::from_str(r#"{"filename":"cases.in","inputLines":["a","b"]}"#)
            .expect("failed to deserialize batch record");
    assert_eq!(batch.filename, "cases.in");
    assert_eq!(batch.input_lines, vec!["a", "b"]);

    let definition: LoadedDefinition =
        serde_json::from_str(r#"{"filename":"machine.dfa","content":"states: q0"}"#)
            .expect("failed to deserialize definition record");
    assert_eq!(definition.filename, "machine.dfa");
}
