use std::collections::BTreeSet;
use std::fmt::{self, Debug, Display};

/// A set of automaton states.
///
/// Elements are kept in sorted order, so two sets holding the same states
/// compare and hash equal no matter how they were built. This is what lets a
/// `StateSet` act as a single state of a subset-constructed DFA.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateSet<S: Ord> {
    states: BTreeSet<S>,
}

impl<S: Ord> StateSet<S> {
    pub fn new() -> Self {
        StateSet {
            states: BTreeSet::new(),
        }
    }

    pub fn singleton(state: S) -> Self {
        let mut set = Self::new();
        set.insert(state);
        set
    }

    /// Returns true if the state was not already present.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &S> + '_ {
        self.states.iter()
    }

    pub fn is_subset(&self, other: &StateSet<S>) -> bool {
        self.states.is_subset(&other.states)
    }

    pub fn intersects(&self, other: &StateSet<S>) -> bool {
        !self.states.is_disjoint(&other.states)
    }
}

impl<S: Ord + Clone> StateSet<S> {
    pub fn union_with(&mut self, other: &StateSet<S>) {
        self.states.extend(other.states.iter().cloned());
    }
}

impl<S: Ord> Default for StateSet<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Ord> FromIterator<S> for StateSet<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        StateSet {
            states: iter.into_iter().collect(),
        }
    }
}

impl<S: Ord> Extend<S> for StateSet<S> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.states.extend(iter)
    }
}

impl<S: Ord> IntoIterator for StateSet<S> {
    type Item = S;
    type IntoIter = std::collections::btree_set::IntoIter<S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.into_iter()
    }
}

impl<'a, S: Ord> IntoIterator for &'a StateSet<S> {
    type Item = &'a S;
    type IntoIter = std::collections::btree_set::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}

impl<S: Ord + Debug> Debug for StateSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.states.iter()).finish()
    }
}

impl<S: Ord + Display> Display for StateSet<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, state) in self.states.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", state)?;
        }
        write!(f, "}}")
    }
}
