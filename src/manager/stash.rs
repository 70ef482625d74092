//! This module contains [`StashMapping`], the mapping from stash names to the
//! states filed under them.

use std::collections::{btree_map, BTreeMap};

use crate::state::State;

/// A mapping from stash names to ordered lists of states.
///
/// The manager keeps its own stashes in one of these, and hooks use one to say
/// where the states they produce should be filed. Stash names iterate in
/// lexicographic order, so processing a mapping is deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StashMapping {
    stashes: BTreeMap<String, Vec<State>>,
}

impl StashMapping {
    /// Constructs a new, empty, stash mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `states` to the end of `stash`, returning the mapping.
    #[must_use]
    pub fn with(mut self, stash: &str, states: impl IntoIterator<Item = State>) -> Self {
        self.extend(stash, states);
        self
    }

    /// Adds `state` to the end of `stash`.
    pub fn push(&mut self, stash: &str, state: State) {
        self.stash_mut(stash).push(state);
    }

    /// Adds `states` to the end of `stash`.
    pub fn extend(&mut self, stash: &str, states: impl IntoIterator<Item = State>) {
        self.stash_mut(stash).extend(states);
    }

    /// Moves every state in `other` to the end of the same-named stash in
    /// `self`.
    pub fn merge(&mut self, other: StashMapping) {
        for (stash, states) in other {
            self.extend(&stash, states);
        }
    }

    /// Gets the states in `stash`, which is empty if the stash does not exist.
    #[must_use]
    pub fn get(&self, stash: &str) -> &[State] {
        self.stashes.get(stash).map(Vec::as_slice).unwrap_or_default()
    }

    /// Gets the states in `stash` for modification, creating the stash if it
    /// does not exist.
    pub fn stash_mut(&mut self, stash: &str) -> &mut Vec<State> {
        self.stashes.entry(stash.to_string()).or_default()
    }

    /// Removes all states from `stash`, leaving it empty but present.
    pub fn take(&mut self, stash: &str) -> Vec<State> {
        std::mem::take(self.stash_mut(stash))
    }

    /// Removes `stash` entirely, returning its states.
    pub fn remove(&mut self, stash: &str) -> Vec<State> {
        self.stashes.remove(stash).unwrap_or_default()
    }

    /// Checks if `stash` exists, even if it is empty.
    #[must_use]
    pub fn contains(&self, stash: &str) -> bool {
        self.stashes.contains_key(stash)
    }

    /// Gets the names of all stashes in order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.stashes.keys().map(String::as_str)
    }

    /// Gets the total number of states across all stashes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stashes.values().map(Vec::len).sum()
    }

    /// Checks if there are no states in any stash.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IntoIterator for StashMapping {
    type IntoIter = btree_map::IntoIter<String, Vec<State>>;
    type Item = (String, Vec<State>);

    fn into_iter(self) -> Self::IntoIter {
        self.stashes.into_iter()
    }
}
