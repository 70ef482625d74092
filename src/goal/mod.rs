//! This module contains the goal compiler, which turns a [`GoalSpec`] into a
//! [`CompiledGoal`] that can be matched against states.
//!
//! # Matching Inside Blocks
//!
//! Exploration usually advances a state by a whole basic block at a time, so a
//! state rarely sits exactly on an address of interest. A goal over addresses
//! therefore matches a state if the goal contains the state's address, _or_ any
//! of the instruction addresses in the block that begins at the state's
//! address.
//!
//! A match over addresses reports exactly which addresses fired rather than a
//! plain boolean. This lets a caller holding two goals that both match a state
//! (such as find and avoid conditions) work out which of them is reached first.

pub mod spec;

use std::collections::BTreeSet;

use derivative::Derivative;
use serde_json::Value;
use tracing::trace;

pub use crate::goal::spec::{GoalSpec, Predicate};
use crate::{error::goal::Result, project::Address, state::State};

/// An empty set of addresses to hand out for goals with no static addresses.
static NO_ADDRESSES: BTreeSet<Address> = BTreeSet::new();

/// The result of matching a [`CompiledGoal`] against a state.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GoalMatch {
    /// The goal does not match the state.
    Unmatched,

    /// The goal matches the state, but the match carries no address
    /// information.
    ///
    /// This is the result of predicate goals, and of empty goals compiled with
    /// a default of `true`.
    Satisfied,

    /// The goal matches the state at exactly these addresses.
    ///
    /// The set is never empty.
    Addresses(BTreeSet<Address>),
}

impl GoalMatch {
    /// Checks if the goal matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        !matches!(self, Self::Unmatched)
    }

    /// Gets the addresses at which the goal matched.
    ///
    /// This is empty for [`Self::Unmatched`] and [`Self::Satisfied`].
    #[must_use]
    pub fn addresses(&self) -> &BTreeSet<Address> {
        match self {
            Self::Addresses(addresses) => addresses,
            Self::Unmatched | Self::Satisfied => &NO_ADDRESSES,
        }
    }
}

/// The executable form of a goal.
///
/// A compiled goal is pure, and so can be matched against any number of states
/// any number of times.
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub enum CompiledGoal {
    /// Always produces the same answer.
    Constant(bool),

    /// Matches states at, or whose current block contains, these addresses.
    Addresses(BTreeSet<Address>),

    /// Defers to an arbitrary predicate.
    Predicate(#[derivative(Debug = "ignore")] Predicate),
}

impl CompiledGoal {
    /// Compiles `spec`, using `default` as the result of matching when `spec`
    /// is [`GoalSpec::None`].
    #[must_use]
    pub fn new(spec: GoalSpec, default: bool) -> Self {
        match spec {
            GoalSpec::None => Self::Constant(default),
            GoalSpec::Address(address) => Self::Addresses(BTreeSet::from([address])),
            GoalSpec::Addresses(addresses) => Self::Addresses(addresses),
            GoalSpec::Predicate(predicate) => Self::Predicate(predicate),
        }
    }

    /// Gets the full set of addresses at which the goal matches, where this can
    /// be determined statically.
    ///
    /// This is empty for goals that are not built from addresses.
    #[must_use]
    pub fn static_addresses(&self) -> &BTreeSet<Address> {
        match self {
            Self::Addresses(addresses) => addresses,
            Self::Constant(_) | Self::Predicate(_) => &NO_ADDRESSES,
        }
    }

    /// Matches the goal against `state`.
    #[must_use]
    pub fn matches(&self, state: &State) -> GoalMatch {
        match self {
            Self::Constant(true) => GoalMatch::Satisfied,
            Self::Constant(false) => GoalMatch::Unmatched,
            Self::Predicate(predicate) => {
                if predicate(state) {
                    GoalMatch::Satisfied
                } else {
                    GoalMatch::Unmatched
                }
            }
            Self::Addresses(addresses) => match_addresses(addresses, state),
        }
    }
}

/// Compiles `spec` into an executable goal, with `default` as the result of
/// matching an empty specification.
#[must_use]
pub fn compile(spec: GoalSpec, default: bool) -> CompiledGoal {
    CompiledGoal::new(spec, default)
}

/// Compiles the loosely-typed goal `value` into an executable goal.
///
/// # Errors
///
/// Returns [`Err`] if `value` does not describe a goal.
pub fn compile_value(value: &Value, default: bool) -> Result<CompiledGoal> {
    let spec = GoalSpec::try_from(value)?;
    Ok(compile(spec, default))
}

/// Matches `state` against the set of `addresses`, looking inside the block at
/// the state's address when the address itself is not in the set.
///
/// A block that cannot be lifted means that no match is possible.
fn match_addresses(addresses: &BTreeSet<Address>, state: &State) -> GoalMatch {
    if addresses.is_empty() {
        return GoalMatch::Unmatched;
    }

    let addr = state.addr();
    if addresses.contains(&addr) {
        return GoalMatch::Addresses(BTreeSet::from([addr]));
    }

    match state.block() {
        Ok(block) => {
            let hits: BTreeSet<Address> = block
                .instruction_addrs()
                .iter()
                .copied()
                .filter(|address| addresses.contains(address))
                .collect();

            if hits.is_empty() {
                GoalMatch::Unmatched
            } else {
                GoalMatch::Addresses(hits)
            }
        }
        Err(error) => {
            trace!(%error, "treating unresolvable block as a goal mismatch");
            GoalMatch::Unmatched
        }
    }
}
