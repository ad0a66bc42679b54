use dfac::{parse, render_plain, simulate_all, Summary};

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

fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn summary_counts_accepted_rejected_and_errored() {
    let dfa = parse(ENDS_IN_A).expect("failed to parse definition");
    let report = simulate_all(&dfa, &lines(&["a", "ba", "b", "xyz"]));

    let summary = Summary::from_report(&report);
    assert_eq!(summary.total, 4);
    assert_eq!(summary.accepted, 2);
    assert_eq!(summary.rejected, 1);
    assert_eq!(summary.errored, 1);
}

#[test]
fn summary_of_empty_batch_is_all_zero() {
    let dfa = parse(ENDS_IN_A).expect("failed to parse definition");
    let report = simulate_all(&dfa, &[]);
    let summary = Summary::from_report(&report);
    assert_eq!(summary.total, 0);
    assert_eq!(summary.accepted, 0);
}

#[test]
fn plain_rendering_matches_input_order() {
    let dfa = parse(ENDS_IN_A).expect("failed to parse definition");
    let report = simulate_all(&dfa, &lines(&["a", "b", "xyz", "ba"]));

    // errored lines render INVALID like ordinary rejections
    assert_eq!(render_plain(&report), "VALID\nINVALID\nINVALID\nVALID\n");
}

#[test]
fn report_serializes_with_traces_and_errors() {
    let dfa = parse(ENDS_IN_A).expect("failed to parse definition");
    let report = simulate_all(&dfa, &lines(&["ac"]));

    let json = serde_json::to_value(&report).expect("failed to serialize report");
    let verdict = &json["verdicts"][0];
    assert_eq!(verdict["accepted"], false);
    assert_eq!(verdict["trace"][0], "q0");
    assert_eq!(verdict["trace"][1], "q1");
    assert_eq!(verdict["error"]["UnknownSymbol"]["position"], 1);
}
