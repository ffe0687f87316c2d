mod dfa;
mod error;
pub mod machines;
mod nfa;
mod rule;
mod simulation;
mod state;


pub use dfa::{Dfa, DfaDesign, DfaRulebook};
pub use error::AutomatonError;
pub use nfa::{Nfa, NfaDesign, NfaRulebook};
pub use rule::Rule;
pub use simulation::{NfaSimulation, SubsetConstruction};
pub use state::StateSet;
