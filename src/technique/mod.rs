//! This module contains the definition of the [`Technique`] trait, through
//! which exploration techniques observe and override how the
//! [`SimulationManager`] advances, partitions and retires states.
//!
//! # Composition
//!
//! Any number of techniques can be attached to a manager at once, forming a
//! [`TechniqueChain`] in which registration order is priority order. Each hook
//! is composed in its own way:
//!
//! - `setup` runs once for every technique, in order, as it is attached.
//! - `step_state` and `filter` go to each technique in order, and the first
//!   technique with an opinion decides. If nobody has an opinion the manager's
//!   default behaviour applies.
//! - `step` is not composed by the chain. Step hooks nest, and each one decides
//!   for itself whether and how to call back into [`SimulationManager::step`].
//! - `complete` halts exploration as soon as any technique says so.
//!
//! A failing hook aborts the operation in progress, with the error wrapped in
//! a [`crate::error::technique::Fault`] naming the technique and hook.

pub mod chain;
pub mod dfs;
pub mod explorer;
pub mod length_limiter;

use std::{any::Any, fmt::Debug, rc::Rc};

use downcast_rs::{impl_downcast, Downcast};

pub use crate::technique::{
    chain::TechniqueChain,
    dfs::Dfs,
    explorer::Explorer,
    length_limiter::LengthLimiter,
};
use crate::{
    error::Result,
    manager::{SimulationManager, StashMapping, StepOptions},
    state::State,
};

/// A dynamically dispatched [`Technique`] instance.
pub type DynTechnique = Rc<dyn Technique>;

/// A trait representing a strategy for exploring the states held by a
/// [`SimulationManager`].
///
/// Every hook has a default that defers to the manager, so implementations
/// only override the hooks they need. Hooks take `&self`, as techniques are
/// shared between the manager and whoever attached them; any state a technique
/// keeps between calls lives behind interior mutability.
///
/// # Re-Entrancy
///
/// A `step` hook is handed the manager and typically calls back into it, which
/// can in turn invoke the `step_state` and `filter` hooks of the same
/// technique. Implementations must not hold a borrow of their own state across
/// such a call.
pub trait Technique
where
    Self: Any + Debug + Downcast,
{
    /// Gets the name used to identify the technique in logs and errors.
    ///
    /// Defaults to the unqualified type name, without any generic arguments.
    fn name(&self) -> &str {
        let name = std::any::type_name::<Self>();
        let base = name.split('<').next().unwrap_or(name);
        base.rsplit("::").next().unwrap_or(base)
    }

    /// Performs any initialization the technique needs on `manager`.
    ///
    /// This is called exactly once, before the technique is attached to the
    /// manager.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the technique cannot be used with `manager`, in which
    /// case it is not attached.
    fn setup(&self, _manager: &mut SimulationManager) -> Result<()> {
        Ok(())
    }

    /// Steps a single `state` forward.
    ///
    /// Returns [`None`] to defer to the default stepping of the state, or a
    /// mapping from stash names to the states produced, which the manager files
    /// accordingly.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if stepping fails.
    fn step_state(&self, _state: &State, _options: &StepOptions) -> Result<Option<StashMapping>> {
        Ok(None)
    }

    /// Steps every state in `stash` of `manager` forward.
    ///
    /// The default calls [`SimulationManager::step`], which moves on to the
    /// step hook of the next technique or, once there are none left, to the
    /// default algorithm. Overriding implementations decide for themselves
    /// what to call.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if stepping fails.
    fn step(&self, manager: &mut SimulationManager, stash: &str, options: &StepOptions) -> Result<()> {
        manager.step(stash, options)
    }

    /// Decides where `state` should be filed after it has been stepped.
    ///
    /// Returns [`None`] to leave the state where stepping placed it.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if filtering fails.
    fn filter(&self, _state: &State) -> Result<Option<FilterOutcome>> {
        Ok(None)
    }

    /// Checks whether `manager` has reached a state in which exploration
    /// should halt.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the check fails.
    fn complete(&self, _manager: &SimulationManager) -> Result<bool> {
        Ok(false)
    }
}

impl_downcast!(Technique);

/// The decision of a `filter` hook that has an opinion about a state.
#[derive(Clone, Debug, PartialEq)]
pub enum FilterOutcome {
    /// File the state, unchanged, under the named stash.
    Stash(String),

    /// File the provided state under the named stash in place of the state
    /// that was filtered.
    Replace(String, State),
}

impl FilterOutcome {
    /// Constructs an outcome that moves the state to `stash`.
    #[must_use]
    pub fn stash(stash: impl Into<String>) -> Self {
        Self::Stash(stash.into())
    }

    /// Constructs an outcome that files `state` in `stash` instead.
    #[must_use]
    pub fn replace(stash: impl Into<String>, state: State) -> Self {
        Self::Replace(stash.into(), state)
    }

    /// Gets the name of the stash that the outcome files into.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Stash(stash) | Self::Replace(stash, _) => stash,
        }
    }
}
