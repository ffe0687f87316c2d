use std::collections::{HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use bit_set::BitSet;
use petgraph::graph::Graph;
use tracing::debug;

use crate::dfa::{DfaDesign, DfaRulebook};
use crate::error::AutomatonError;
use crate::nfa::NfaDesign;
use crate::rule::Rule;
use crate::state::StateSet;

/// Drives an NFA design one set of states at a time, which is all the subset
/// construction needs: every set of NFA states becomes a single DFA state.
#[derive(Debug)]
pub struct NfaSimulation<'a, S: Ord, A> {
    nfa_design: &'a NfaDesign<S, A>,
}

impl<'a, S, A> NfaSimulation<'a, S, A>
where
    S: Clone + Ord + Hash + Debug,
    A: Copy + Ord + Debug,
{
    pub fn new(nfa_design: &'a NfaDesign<S, A>) -> Self {
        NfaSimulation { nfa_design }
    }

    /// Where an NFA sitting in `states` ends up after reading `character`,
    /// free moves included on both sides.
    pub fn next_state(&self, states: &StateSet<S>, character: A) -> StateSet<S> {
        let mut nfa = self.nfa_design.to_nfa_from(states.clone());
        nfa.read_character(character);
        nfa.current_states()
    }

    /// One derived rule per character of the NFA's alphabet.
    pub fn rules_for(&self, states: &StateSet<S>) -> Vec<Rule<StateSet<S>, A>> {
        self.nfa_design
            .rulebook()
            .alphabet()
            .into_iter()
            .map(|character| Rule::new(states.clone(), character, self.next_state(states, character)))
            .collect()
    }

    /// Breadth-first search over sets of NFA states, starting at the free-move
    /// closure of `states`. Sets are keyed by their contents, so every
    /// distinct set is expanded exactly once.
    pub fn discover_states_and_rules(&self, states: StateSet<S>) -> SubsetConstruction<S, A> {
        let start_state = self.nfa_design.to_nfa_from(states).current_states();

        let mut subsets = SubsetConstruction::new(start_state.clone());
        subsets.add_state(start_state.clone(), self.is_accepting(&start_state));

        let mut work_queue: VecDeque<StateSet<S>> = VecDeque::new();
        work_queue.push_back(start_state);

        while let Some(current) = work_queue.pop_front() {
            for rule in self.rules_for(&current) {
                if subsets.index_of(&rule.next_state).is_none() {
                    let accepting = self.is_accepting(&rule.next_state);
                    subsets.add_state(rule.next_state.clone(), accepting);
                    work_queue.push_back(rule.next_state.clone());
                }
                subsets.rules.push(rule);
            }
        }

        debug!(
            states = subsets.states.len(),
            rules = subsets.rules.len(),
            "subset construction finished"
        );
        subsets
    }

    pub fn to_dfa_design(&self) -> Result<DfaDesign<StateSet<S>, A>, AutomatonError> {
        let start_states = StateSet::singleton(self.nfa_design.start_state().clone());
        self.discover_states_and_rules(start_states).into_dfa_design()
    }

    fn is_accepting(&self, states: &StateSet<S>) -> bool {
        self.nfa_design.to_nfa_from(states.clone()).accepting()
    }
}

/// The result of a subset construction: every reachable set of NFA states,
/// in discovery order, and the DFA rules between them.
#[derive(Debug, Clone)]
pub struct SubsetConstruction<S: Ord, A> {
    start_state: StateSet<S>,
    states: Vec<StateSet<S>>,
    // set -> position in `states`
    index: HashMap<StateSet<S>, usize>,
    accepting: BitSet,
    rules: Vec<Rule<StateSet<S>, A>>,
}

impl<S, A> SubsetConstruction<S, A>
where
    S: Clone + Ord + Hash + Debug,
    A: Copy + Ord + Debug,
{
    fn new(start_state: StateSet<S>) -> Self {
        SubsetConstruction {
            start_state,
            states: Vec::new(),
            index: HashMap::new(),
            accepting: BitSet::new(),
            rules: Vec::new(),
        }
    }

    fn add_state(&mut self, states: StateSet<S>, accepting: bool) -> usize {
        let id = self.states.len();
        debug!(id, ?states, accepting, "discovered subset");
        if accepting {
            self.accepting.insert(id);
        }
        self.index.insert(states.clone(), id);
        self.states.push(states);
        id
    }

    pub fn start_state(&self) -> &StateSet<S> {
        &self.start_state
    }

    pub fn states(&self) -> &[StateSet<S>] {
        &self.states
    }

    pub fn rules(&self) -> &[Rule<StateSet<S>, A>] {
        &self.rules
    }

    pub fn index_of(&self, states: &StateSet<S>) -> Option<usize> {
        self.index.get(states).copied()
    }

    pub fn is_accepting(&self, states: &StateSet<S>) -> bool {
        self.index_of(states)
            .is_some_and(|id| self.accepting.contains(id))
    }

    pub fn accept_states(&self) -> impl Iterator<Item = &StateSet<S>> + '_ {
        self.accepting.iter().map(|id| &self.states[id])
    }

    /// Node `i` of the graph is `states()[i]`; edges carry the input character.
    pub fn to_graph(&self) -> Graph<StateSet<S>, A> {
        let mut graph = Graph::with_capacity(self.states.len(), self.rules.len());
        let nodes: Vec<_> = self
            .states
            .iter()
            .map(|states| graph.add_node(states.clone()))
            .collect();

        for rule in &self.rules {
            if let (Some(from), Some(to), Some(character)) = (
                self.index_of(&rule.state),
                self.index_of(&rule.next_state),
                rule.character,
            ) {
                graph.add_edge(nodes[from], nodes[to], character);
            }
        }

        graph
    }

    pub fn into_dfa_design(self) -> Result<DfaDesign<StateSet<S>, A>, AutomatonError> {
        let accept_states: Vec<StateSet<S>> = self.accept_states().cloned().collect();
        let rulebook = DfaRulebook::new(self.rules)?;
        Ok(DfaDesign::new(self.start_state, accept_states, rulebook))
    }
}
