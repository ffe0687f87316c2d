use proptest::prelude::*;
use simfa::{NfaDesign, NfaRulebook, NfaSimulation, Rule, StateSet};

const STATES: u32 = 6;

fn symbol() -> impl Strategy<Value = char> {
    prop_oneof![Just('a'), Just('b')]
}

fn rule() -> impl Strategy<Value = Rule<u32, char>> {
    (0..STATES, proptest::option::weighted(0.7, symbol()), 0..STATES).prop_map(
        |(state, character, next_state)| match character {
            Some(c) => Rule::new(state, c, next_state),
            None => Rule::free_move(state, next_state),
        },
    )
}

fn state_set() -> impl Strategy<Value = StateSet<u32>> {
    proptest::collection::btree_set(0..STATES, 0..4).prop_map(|states| states.into_iter().collect())
}

fn nfa_design() -> impl Strategy<Value = NfaDesign<u32, char>> {
    (
        0..STATES,
        state_set(),
        proptest::collection::vec(rule(), 0..16),
    )
        .prop_map(|(start, accept, rules)| NfaDesign::new(start, accept, NfaRulebook::new(rules)))
}

fn input() -> impl Strategy<Value = String> {
    proptest::collection::vec(symbol(), 0..12).prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn free_move_closure_is_idempotent(nfa in nfa_design(), states in state_set()) {
        let rulebook = nfa.rulebook();
        let closure = rulebook.follow_free_moves(&states);
        prop_assert!(states.is_subset(&closure));
        prop_assert_eq!(rulebook.follow_free_moves(&closure), closure);
    }

    #[test]
    fn nfa_accept_is_deterministic(nfa in nfa_design(), input in input()) {
        prop_assert_eq!(nfa.accept(input.chars()), nfa.accept(input.chars()));
    }

    #[test]
    fn derived_dfa_agrees_with_nfa(nfa in nfa_design(), input in input()) {
        let dfa = NfaSimulation::new(&nfa).to_dfa_design().expect("derived rules are deterministic");
        let alphabet = nfa.rulebook().alphabet();

        // the derived DFA only has rules for characters the NFA uses
        if input.chars().all(|c| alphabet.contains(&c)) {
            prop_assert_eq!(dfa.accept(input.chars()), Ok(nfa.accept(input.chars())));
        } else {
            prop_assert!(dfa.accept(input.chars()).is_err());
        }
    }
}
