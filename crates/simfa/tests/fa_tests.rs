use simfa::machines;
use simfa::{DfaDesign, NfaDesign, NfaSimulation, StateSet};

fn set(states: &[u32]) -> StateSet<u32> {
    states.iter().copied().collect()
}

fn run_dfa_vectors<S>(tests: &[(&str, bool)], dfa: &DfaDesign<S, char>, name: &str)
where
    S: Clone + Eq + std::fmt::Debug,
{
    for (test, expected_result) in tests {
        let result = dfa.accept(test.chars()).expect("transition should be defined");
        assert_eq!(result, *expected_result,
            "'{}' failed on input '{}', expect match: {}, actual match: {}",
            name,
            test,
            expected_result,
            result
        );
    }
}

fn run_nfa_vectors(tests: &[(&str, bool)], nfa: &NfaDesign<u32, char>, name: &str) {
    for (test, expected_result) in tests {
        let result = nfa.accept(test.chars());
        assert_eq!(result, *expected_result,
            "'{}' failed on input '{}', expect match: {}, actual match: {}",
            name,
            test,
            expected_result,
            result
        );
    }
}

#[test]
fn contains_ab() {
    let dfa = machines::contains_ab().expect("rulebook is deterministic");

    let test_vectors = vec![
        ("a", false),
        ("baa", false),
        ("baba", true),
        ("", false),
        ("ab", true),
        ("bbbbab", true),
        ("bbbaaa", false),
    ];

    run_dfa_vectors(&test_vectors, &dfa, "contains_ab")
}

#[test]
fn dfa_accept_is_repeatable() {
    let dfa = machines::contains_ab().expect("rulebook is deterministic");
    let copy = DfaDesign::new(
        *dfa.start_state(),
        dfa.accept_states().to_vec(),
        dfa.rulebook().clone(),
    );

    for input in ["baba", "baa", "ab", "bbbbbb"] {
        let first = dfa.accept(input.chars());
        assert_eq!(first, dfa.accept(input.chars()));
        assert_eq!(first, copy.accept(input.chars()));
    }
}

#[test]
fn third_from_last_is_b() {
    let nfa = machines::third_from_last_is_b();

    let test_vectors = vec![
        ("bab", true),
        ("bbbbb", true),
        ("bbabb", false),
        ("", false),
        ("baa", true),
        ("aabaa", true),
        ("abbaaab", false),
    ];

    run_nfa_vectors(&test_vectors, &nfa, "third_from_last_is_b")
}

#[test]
fn multiple_of_two_or_three() {
    let nfa = machines::multiple_of_two_or_three();

    let test_vectors = vec![
        ("", true),
        ("a", false),
        ("aa", true),
        ("aaa", true),
        ("aaaaa", false),
        ("aaaaaa", true),
        ("aaaaaaa", false),
    ];

    run_nfa_vectors(&test_vectors, &nfa, "multiple_of_two_or_three")
}

#[test]
fn simulation_next_state() {
    let nfa = machines::simulation_example();
    let simulation = NfaSimulation::new(&nfa);

    assert_eq!(simulation.next_state(&set(&[1, 2]), 'a'), set(&[1, 2]));
    assert_eq!(simulation.next_state(&set(&[1, 2]), 'b'), set(&[2, 3]));
    assert_eq!(simulation.next_state(&set(&[2, 3]), 'b'), set(&[1, 2, 3]));
    assert_eq!(simulation.next_state(&set(&[1, 2, 3]), 'b'), set(&[1, 2, 3]));
    assert_eq!(simulation.next_state(&set(&[1, 2, 3]), 'a'), set(&[1, 2]));
}

#[test]
fn simulation_discovers_reachable_subsets() {
    let nfa = machines::simulation_example();
    let simulation = NfaSimulation::new(&nfa);

    let subsets = simulation.discover_states_and_rules(set(&[1, 2]));
    assert_eq!(
        subsets.states(),
        &[set(&[1, 2]), set(&[2, 3]), set(&[]), set(&[1, 2, 3])]
    );
    assert_eq!(subsets.rules().len(), 8);

    let accepting: Vec<_> = subsets.accept_states().cloned().collect();
    assert_eq!(accepting, vec![set(&[2, 3]), set(&[1, 2, 3])]);
    assert!(!subsets.is_accepting(&set(&[])));

    let graph = subsets.to_graph();
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 8);
}

#[test]
fn derived_dfa() {
    let nfa = machines::simulation_example();
    let dfa = NfaSimulation::new(&nfa)
        .to_dfa_design()
        .expect("derived rules are deterministic");

    assert_eq!(*dfa.start_state(), set(&[1, 2]));

    let test_vectors = vec![
        ("aaa", false),
        ("aab", true),
        ("bbbabb", true),
        ("ab", true),
        ("bbbbb", true),
        ("", false),
        ("ba", false),
    ];

    run_dfa_vectors(&test_vectors, &dfa, "simulation_example (derived)");

    for (input, _) in &test_vectors {
        assert_eq!(
            dfa.accept(input.chars()).expect("transition should be defined"),
            nfa.accept(input.chars()),
            "derived DFA disagrees with NFA on '{}'",
            input
        );
    }
}

#[test]
fn derived_dfa_from_free_moves() {
    let nfa = machines::multiple_of_two_or_three();
    let dfa = NfaSimulation::new(&nfa)
        .to_dfa_design()
        .expect("derived rules are deterministic");

    // the start closure, then six lockstep positions of the two cycles
    assert_eq!(dfa.rulebook().rules().len(), 7);

    for n in 0..13 {
        let input = "a".repeat(n);
        assert_eq!(
            dfa.accept(input.chars()).expect("transition should be defined"),
            n % 2 == 0 || n % 3 == 0,
            "length {}",
            n
        );
    }
}
