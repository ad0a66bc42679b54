use proptest::prelude::*;

use dfac::{parse, simulate, simulate_all};

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

proptest! {
    // for a complete automaton the verdict is a pure function of (dfa, line)
    #[test]
    fn simulate_is_deterministic(line in "[ab]{0,48}") {
        let dfa = parse(ENDS_IN_A).unwrap();
        prop_assert_eq!(simulate(&dfa, &line), simulate(&dfa, &line));
    }

    #[test]
    fn accepts_exactly_strings_ending_in_a(line in "[ab]{0,48}") {
        let dfa = parse(ENDS_IN_A).unwrap();
        let verdict = simulate(&dfa, &line);
        prop_assert_eq!(verdict.accepted, line.ends_with('a'));
        prop_assert_eq!(verdict.error, None);
        // one visited state per consumed symbol, plus the start state
        prop_assert_eq!(verdict.trace.len(), line.chars().count() + 1);
    }

    // the batch report matches per-line simulation at every index, whatever
    // order the pool ran the lines in
    #[test]
    fn batch_matches_sequential(lines in proptest::collection::vec("[abc]{0,16}", 0..32)) {
        let dfa = parse(ENDS_IN_A).unwrap();
        let report = simulate_all(&dfa, &lines);
        prop_assert_eq!(report.verdicts.len(), lines.len());
        for (index, line) in lines.iter().enumerate() {
            prop_assert_eq!(&report.verdicts[index], &simulate(&dfa, line));
        }
    }

    #[test]
    fn parse_is_idempotent_under_trailing_noise(blanks in 0usize..4) {
        let mut content = ENDS_IN_A.to_string();
        for _ in 0..blanks {
            content.push('\n');
        }
        let first = parse(&content).unwrap();
        let second = parse(ENDS_IN_A).unwrap();
        prop_assert_eq!(first, second);
    }
}
