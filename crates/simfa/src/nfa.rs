use std::collections::BTreeSet;
use std::fmt::Debug;

use tracing::trace;

use crate::rule::Rule;
use crate::state::StateSet;

#[derive(Debug, Clone)]
pub struct NfaRulebook<S, A> {
    rules: Vec<Rule<S, A>>,
}

impl<S, A> NfaRulebook<S, A>
where
    S: Clone + Ord + Debug,
    A: Copy + Ord + Debug,
{
    pub fn new(rules: Vec<Rule<S, A>>) -> Self {
        NfaRulebook { rules }
    }

    /// Every state reachable from `states` by one rule labelled `character`.
    /// Passing `None` follows a single round of free moves.
    pub fn next_states(&self, states: &StateSet<S>, character: Option<A>) -> StateSet<S> {
        states
            .iter()
            .flat_map(|state| self.follow_rules_for(state, character))
            .collect()
    }

    fn follow_rules_for<'r>(
        &'r self,
        state: &'r S,
        character: Option<A>,
    ) -> impl Iterator<Item = S> + 'r {
        self.rules_for(state, character).map(Rule::destination)
    }

    fn rules_for<'r>(
        &'r self,
        state: &'r S,
        character: Option<A>,
    ) -> impl Iterator<Item = &'r Rule<S, A>> + 'r {
        self.rules
            .iter()
            .filter(move |rule| rule.matches(state, character))
    }

    /// Closes `states` over free moves. Worklist based; each state is expanded
    /// at most once, so this stops once no new state turns up.
    pub fn follow_free_moves(&self, states: &StateSet<S>) -> StateSet<S> {
        let mut closure = states.clone();
        let mut frontier: Vec<S> = states.iter().cloned().collect();

        while let Some(state) = frontier.pop() {
            for next in self.follow_rules_for(&state, None) {
                if !closure.contains(&next) {
                    closure.insert(next.clone());
                    frontier.push(next);
                }
            }
        }

        closure
    }

    /// The distinct real characters used by any rule, free moves excluded.
    pub fn alphabet(&self) -> BTreeSet<A> {
        self.rules.iter().filter_map(Rule::character).collect()
    }

    pub fn rules(&self) -> &[Rule<S, A>] {
        &self.rules
    }
}

/// A running NFA. The stored set is not closed over free moves; the closure
/// is taken whenever the current states are observed.
#[derive(Debug)]
pub struct Nfa<'a, S: Ord, A> {
    current_states: StateSet<S>,
    accept_states: &'a StateSet<S>,
    rulebook: &'a NfaRulebook<S, A>,
}

impl<'a, S, A> Nfa<'a, S, A>
where
    S: Clone + Ord + Debug,
    A: Copy + Ord + Debug,
{
    pub fn new(
        current_states: StateSet<S>,
        accept_states: &'a StateSet<S>,
        rulebook: &'a NfaRulebook<S, A>,
    ) -> Self {
        Nfa {
            current_states,
            accept_states,
            rulebook,
        }
    }

    pub fn current_states(&self) -> StateSet<S> {
        self.rulebook.follow_free_moves(&self.current_states)
    }

    pub fn accepting(&self) -> bool {
        self.current_states().intersects(self.accept_states)
    }

    pub fn read_character(&mut self, character: A) {
        let next_states = self
            .rulebook
            .next_states(&self.current_states(), Some(character));
        trace!(?character, to = ?next_states, "nfa transition");
        self.current_states = next_states;
    }

    pub fn read_string<I>(&mut self, input: I)
    where
        I: IntoIterator<Item = A>,
    {
        for character in input {
            self.read_character(character);
        }
    }
}

#[derive(Debug, Clone)]
pub struct NfaDesign<S: Ord, A> {
    start_state: S,
    accept_states: StateSet<S>,
    rulebook: NfaRulebook<S, A>,
}

impl<S, A> NfaDesign<S, A>
where
    S: Clone + Ord + Debug,
    A: Copy + Ord + Debug,
{
    pub fn new(start_state: S, accept_states: StateSet<S>, rulebook: NfaRulebook<S, A>) -> Self {
        NfaDesign {
            start_state,
            accept_states,
            rulebook,
        }
    }

    pub fn to_nfa(&self) -> Nfa<'_, S, A> {
        self.to_nfa_from(StateSet::singleton(self.start_state.clone()))
    }

    // used by subset construction to probe an arbitrary set of states
    pub fn to_nfa_from(&self, current_states: StateSet<S>) -> Nfa<'_, S, A> {
        Nfa::new(current_states, &self.accept_states, &self.rulebook)
    }

    pub fn accept<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = A>,
    {
        let mut nfa = self.to_nfa();
        nfa.read_string(input);
        nfa.accepting()
    }

    pub fn start_state(&self) -> &S {
        &self.start_state
    }

    pub fn accept_states(&self) -> &StateSet<S> {
        &self.accept_states
    }

    pub fn rulebook(&self) -> &NfaRulebook<S, A> {
        &self.rulebook
    }
}
