//! This module contains the [`Explorer`] technique, which searches for states
//! that reach a set of goals while steering clear of another.

use std::collections::BTreeSet;

use crate::{
    constant::{AVOID_STASH, DEFAULT_NUM_FIND, FOUND_STASH},
    error::Result,
    goal::{compile, CompiledGoal, GoalMatch, GoalSpec},
    manager::SimulationManager,
    project::Address,
    state::State,
    technique::{FilterOutcome, Technique},
};

/// A technique that files states satisfying its `find` goal into the found
/// stash and states satisfying its `avoid` goal into the avoid stash, and that
/// reports completion once enough states have been found.
///
/// When the find goal is given as addresses and the state only reaches one of
/// them part way through its block, the state filed as found is the one
/// positioned exactly at the goal address. If an avoided address is reached
/// first within that block, the state is avoided instead.
///
/// When both goals match at the same point, the find goal wins unless the
/// explorer was configured with [`Self::with_avoid_priority`].
#[derive(Debug)]
pub struct Explorer {
    find:           CompiledGoal,
    avoid:          CompiledGoal,
    find_stash:     String,
    avoid_stash:    String,
    num_find:       usize,
    avoid_priority: bool,
}

impl Explorer {
    /// Constructs a new explorer searching for `find` and avoiding `avoid`.
    ///
    /// An empty `find` never matches, and neither does an empty `avoid`.
    #[must_use]
    pub fn new(find: impl Into<GoalSpec>, avoid: impl Into<GoalSpec>) -> Self {
        let find = compile(find.into(), false);
        let avoid = compile(avoid.into(), false);
        let find_stash = FOUND_STASH.to_string();
        let avoid_stash = AVOID_STASH.to_string();
        let num_find = DEFAULT_NUM_FIND;
        let avoid_priority = false;

        Self {
            find,
            avoid,
            find_stash,
            avoid_stash,
            num_find,
            avoid_priority,
        }
    }

    /// Sets the stash into which found states are filed.
    #[must_use]
    pub fn with_find_stash(mut self, stash: impl Into<String>) -> Self {
        self.find_stash = stash.into();
        self
    }

    /// Sets the stash into which avoided states are filed.
    #[must_use]
    pub fn with_avoid_stash(mut self, stash: impl Into<String>) -> Self {
        self.avoid_stash = stash.into();
        self
    }

    /// Sets the number of found states after which exploration is complete.
    #[must_use]
    pub fn with_num_find(mut self, value: usize) -> Self {
        self.num_find = value;
        self
    }

    /// Sets whether the avoid goal wins when both goals match.
    #[must_use]
    pub fn with_avoid_priority(mut self, value: bool) -> Self {
        self.avoid_priority = value;
        self
    }

    /// Gets the compiled find goal.
    #[must_use]
    pub fn find(&self) -> &CompiledGoal {
        &self.find
    }

    /// Gets the compiled avoid goal.
    #[must_use]
    pub fn avoid(&self) -> &CompiledGoal {
        &self.avoid
    }

    /// Gets the name of the stash that found states are filed into.
    #[must_use]
    pub fn find_stash(&self) -> &str {
        &self.find_stash
    }

    /// Gets the name of the stash that avoided states are filed into.
    #[must_use]
    pub fn avoid_stash(&self) -> &str {
        &self.avoid_stash
    }

    /// Decides the fate of a `state` that matched the find goal with `found`,
    /// given that the avoid goal matched it with `avoided`.
    fn resolve(&self, state: &State, found: &GoalMatch, avoided: &GoalMatch) -> FilterOutcome {
        let conflicting = avoided.is_match()
            && !(matches!(found, GoalMatch::Addresses(_))
                && matches!(avoided, GoalMatch::Addresses(_)));
        if self.avoid_priority && conflicting {
            return FilterOutcome::stash(&self.avoid_stash);
        }

        // Address information from a non-address avoid match cannot order it
        // against the find addresses, so it no longer takes part.
        let avoid_addrs = avoided.addresses();
        let GoalMatch::Addresses(find_addrs) = found else {
            return FilterOutcome::stash(&self.find_stash);
        };

        let target = if find_addrs.contains(&state.addr()) {
            Some(state.addr())
        } else {
            match first_reached(state, find_addrs, avoid_addrs) {
                Reached::Find(addr) => Some(addr),
                Reached::Avoid => return FilterOutcome::stash(&self.avoid_stash),
                Reached::Nothing => None,
            }
        };

        match target {
            Some(addr) if self.avoid_priority && avoid_addrs.contains(&addr) => {
                FilterOutcome::stash(&self.avoid_stash)
            }
            Some(addr) if addr != state.addr() => {
                FilterOutcome::replace(&self.find_stash, state.successor(addr))
            }
            _ => FilterOutcome::stash(&self.find_stash),
        }
    }
}

/// Walks the instructions of the block at `state`'s address in execution
/// order, reporting which goal is reached first.
fn first_reached(
    state: &State,
    find_addrs: &BTreeSet<Address>,
    avoid_addrs: &BTreeSet<Address>,
) -> Reached {
    let Ok(block) = state.block() else {
        return Reached::Nothing;
    };

    for addr in block.instruction_addrs() {
        if find_addrs.contains(addr) {
            return Reached::Find(*addr);
        }
        if avoid_addrs.contains(addr) {
            return Reached::Avoid;
        }
    }

    Reached::Nothing
}

/// The first goal reached while walking a block.
enum Reached {
    Find(Address),
    Avoid,
    Nothing,
}

impl Technique for Explorer {
    fn setup(&self, manager: &mut SimulationManager) -> Result<()> {
        manager.stash_mut(&self.find_stash);
        manager.stash_mut(&self.avoid_stash);
        Ok(())
    }

    fn filter(&self, state: &State) -> Result<Option<FilterOutcome>> {
        let found = self.find.matches(state);
        let avoided = self.avoid.matches(state);

        let outcome = if found.is_match() {
            Some(self.resolve(state, &found, &avoided))
        } else if avoided.is_match() {
            Some(FilterOutcome::stash(&self.avoid_stash))
        } else {
            None
        };

        Ok(outcome)
    }

    fn complete(&self, manager: &SimulationManager) -> Result<bool> {
        Ok(manager.stash(&self.find_stash).len() >= self.num_find)
    }
}
