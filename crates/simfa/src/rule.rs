use std::fmt::Display;

/// A single labelled transition. `character == None` marks a free move,
/// which is followed without consuming input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule<S, A> {
    pub(crate) state: S,
    pub(crate) character: Option<A>,
    pub(crate) next_state: S,
}

impl<S: Clone + Eq, A: Copy + Eq> Rule<S, A> {
    pub fn new(state: S, character: A, next_state: S) -> Self {
        Rule {
            state,
            character: Some(character),
            next_state,
        }
    }

    pub fn free_move(state: S, next_state: S) -> Self {
        Rule {
            state,
            character: None,
            next_state,
        }
    }

    // `None` only ever matches free moves and `Some(c)` only ever matches real input
    pub fn matches(&self, state: &S, character: Option<A>) -> bool {
        self.state == *state && self.character == character
    }

    pub fn destination(&self) -> S {
        self.next_state.clone()
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn character(&self) -> Option<A> {
        self.character
    }

    pub fn is_free_move(&self) -> bool {
        self.character.is_none()
    }
}

impl<S: Display, A: Display> Display for Rule<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.character {
            Some(c) => write!(f, "{} --{}--> {}", self.state, c, self.next_state),
            None => write!(f, "{} --ε--> {}", self.state, self.next_state),
        }
    }
}
