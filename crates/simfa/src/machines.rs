//! Small ready-made machines over `char` input.

use crate::dfa::{DfaDesign, DfaRulebook};
use crate::error::AutomatonError;
use crate::nfa::{NfaDesign, NfaRulebook};
use crate::rule::Rule;
use crate::state::StateSet;

/// Accepts strings over {a, b} containing the substring "ab".
pub fn contains_ab() -> Result<DfaDesign<u32, char>, AutomatonError> {
    let rulebook = DfaRulebook::new(vec![
        Rule::new(1, 'a', 2), Rule::new(1, 'b', 1),
        Rule::new(2, 'a', 2), Rule::new(2, 'b', 3),
        Rule::new(3, 'a', 3), Rule::new(3, 'b', 3),
    ])?;
    Ok(DfaDesign::new(1, vec![3], rulebook))
}

/// Accepts strings over {a, b} whose third-from-last character is 'b'.
pub fn third_from_last_is_b() -> NfaDesign<u32, char> {
    let rulebook = NfaRulebook::new(vec![
        Rule::new(1, 'a', 1), Rule::new(1, 'b', 1), Rule::new(1, 'b', 2),
        Rule::new(2, 'a', 3), Rule::new(2, 'b', 3),
        Rule::new(3, 'a', 4), Rule::new(3, 'b', 4),
    ]);
    NfaDesign::new(1, StateSet::singleton(4), rulebook)
}

/// Accepts runs of 'a' whose length is a multiple of two or of three.
/// Two free moves from the start state pick which counter to follow.
pub fn multiple_of_two_or_three() -> NfaDesign<u32, char> {
    let rulebook = NfaRulebook::new(vec![
        Rule::free_move(1, 2), Rule::free_move(1, 4),
        Rule::new(2, 'a', 3),
        Rule::new(3, 'a', 2),
        Rule::new(4, 'a', 5),
        Rule::new(5, 'a', 6),
        Rule::new(6, 'a', 4),
    ]);
    NfaDesign::new(1, [2, 4].into_iter().collect(), rulebook)
}

// free moves on both 1 and 3 make this a useful subset construction example
pub fn simulation_example() -> NfaDesign<u32, char> {
    let rulebook = NfaRulebook::new(vec![
        Rule::new(1, 'a', 1), Rule::new(1, 'a', 2), Rule::free_move(1, 2),
        Rule::new(2, 'b', 3),
        Rule::new(3, 'b', 1), Rule::free_move(3, 2),
    ]);
    NfaDesign::new(1, StateSet::singleton(3), rulebook)
}
