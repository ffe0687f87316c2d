use std::fmt::Debug;

use thiserror::Error;

// states and symbols are rendered with Debug so the error stays non-generic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    #[error("no rule for state {state} on input {character}")]
    UndefinedTransition { state: String, character: String },
    #[error("{count} rules apply to state {state} on input {character}")]
    AmbiguousTransition {
        state: String,
        character: String,
        count: usize,
    },
    #[error("free move from state {state} is not allowed in a DFA rulebook")]
    FreeMoveInDfa { state: String },
}

impl AutomatonError {
    pub(crate) fn undefined<S: Debug, A: Debug>(state: &S, character: &A) -> Self {
        AutomatonError::UndefinedTransition {
            state: format!("{:?}", state),
            character: format!("{:?}", character),
        }
    }

    pub(crate) fn ambiguous<S: Debug, A: Debug>(state: &S, character: &A, count: usize) -> Self {
        AutomatonError::AmbiguousTransition {
            state: format!("{:?}", state),
            character: format!("{:?}", character),
            count,
        }
    }
}
