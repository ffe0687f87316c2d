use std::fmt::Debug;

use tracing::trace;

use crate::error::AutomatonError;
use crate::rule::Rule;

#[derive(Debug, Clone)]
pub struct DfaRulebook<S, A> {
    rules: Vec<Rule<S, A>>,
}

impl<S, A> DfaRulebook<S, A>
where
    S: Clone + Eq + Debug,
    A: Copy + Eq + Debug,
{
    /// Builds a rulebook, rejecting free moves and any (state, character) pair
    /// that more than one rule applies to.
    pub fn new(rules: Vec<Rule<S, A>>) -> Result<Self, AutomatonError> {
        for rule in &rules {
            let character = match rule.character {
                Some(c) => c,
                None => {
                    return Err(AutomatonError::FreeMoveInDfa {
                        state: format!("{:?}", rule.state),
                    })
                }
            };

            let count = rules
                .iter()
                .filter(|other| other.matches(&rule.state, Some(character)))
                .count();
            if count > 1 {
                return Err(AutomatonError::ambiguous(&rule.state, &character, count));
            }
        }

        Ok(DfaRulebook { rules })
    }

    pub fn next_state(&self, state: &S, character: A) -> Result<S, AutomatonError> {
        Ok(self.rule_for(state, character)?.destination())
    }

    fn rule_for(&self, state: &S, character: A) -> Result<&Rule<S, A>, AutomatonError> {
        let applicable: Vec<&Rule<S, A>> = self
            .rules
            .iter()
            .filter(|rule| rule.matches(state, Some(character)))
            .collect();

        match applicable.as_slice() {
            [rule] => Ok(*rule),
            [] => Err(AutomatonError::undefined(state, &character)),
            many => Err(AutomatonError::ambiguous(state, &character, many.len())),
        }
    }

    pub fn rules(&self) -> &[Rule<S, A>] {
        &self.rules
    }
}

/// A running DFA. Created by [`DfaDesign::to_dfa`] and thrown away after use.
#[derive(Debug)]
pub struct Dfa<'a, S, A> {
    current_state: S,
    accept_states: &'a [S],
    rulebook: &'a DfaRulebook<S, A>,
}

impl<'a, S, A> Dfa<'a, S, A>
where
    S: Clone + Eq + Debug,
    A: Copy + Eq + Debug,
{
    pub fn new(current_state: S, accept_states: &'a [S], rulebook: &'a DfaRulebook<S, A>) -> Self {
        Dfa {
            current_state,
            accept_states,
            rulebook,
        }
    }

    pub fn current_state(&self) -> &S {
        &self.current_state
    }

    pub fn accepting(&self) -> bool {
        self.accept_states.contains(&self.current_state)
    }

    pub fn read_character(&mut self, character: A) -> Result<(), AutomatonError> {
        let next_state = self.rulebook.next_state(&self.current_state, character)?;
        trace!(from = ?self.current_state, ?character, to = ?next_state, "dfa transition");
        self.current_state = next_state;
        Ok(())
    }

    pub fn read_string<I>(&mut self, input: I) -> Result<(), AutomatonError>
    where
        I: IntoIterator<Item = A>,
    {
        for character in input {
            self.read_character(character)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DfaDesign<S, A> {
    start_state: S,
    accept_states: Vec<S>,
    rulebook: DfaRulebook<S, A>,
}

impl<S, A> DfaDesign<S, A>
where
    S: Clone + Eq + Debug,
    A: Copy + Eq + Debug,
{
    pub fn new(start_state: S, accept_states: Vec<S>, rulebook: DfaRulebook<S, A>) -> Self {
        DfaDesign {
            start_state,
            accept_states,
            rulebook,
        }
    }

    pub fn to_dfa(&self) -> Dfa<'_, S, A> {
        Dfa::new(self.start_state.clone(), &self.accept_states, &self.rulebook)
    }

    /// Runs `input` through a fresh DFA. An `Err` means the machine has no
    /// rule for some step, which is different from rejecting the input.
    pub fn accept<I>(&self, input: I) -> Result<bool, AutomatonError>
    where
        I: IntoIterator<Item = A>,
    {
        let mut dfa = self.to_dfa();
        dfa.read_string(input)?;
        Ok(dfa.accepting())
    }

    pub fn start_state(&self) -> &S {
        &self.start_state
    }

    pub fn accept_states(&self) -> &[S] {
        &self.accept_states
    }

    pub fn rulebook(&self) -> &DfaRulebook<S, A> {
        &self.rulebook
    }
}
