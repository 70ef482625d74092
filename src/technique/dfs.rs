//! This module contains the [`Dfs`] technique, which steps a single path at a
//! time.

use tracing::trace;

use crate::{
    constant::DEFERRED_STASH,
    error::Result,
    manager::{SimulationManager, StepOptions},
    technique::Technique,
};

/// A technique that keeps exactly one state in the stepped stash, deferring
/// any others until the current path ends.
///
/// After each step, the first successor is kept and the rest are moved to the
/// end of the deferred stash. When the stepped stash empties, the most
/// recently deferred state is resumed, giving a depth-first traversal.
#[derive(Clone, Debug)]
pub struct Dfs {
    deferred_stash: String,
}

impl Dfs {
    /// Constructs a new depth-first technique that defers states to the
    /// default deferred stash.
    #[must_use]
    pub fn new() -> Self {
        let deferred_stash = DEFERRED_STASH.to_string();
        Self { deferred_stash }
    }

    /// Sets the stash into which pending states are deferred.
    #[must_use]
    pub fn with_deferred_stash(mut self, stash: impl Into<String>) -> Self {
        self.deferred_stash = stash.into();
        self
    }

    /// Gets the name of the stash into which pending states are deferred.
    #[must_use]
    pub fn deferred_stash(&self) -> &str {
        &self.deferred_stash
    }
}

impl Default for Dfs {
    fn default() -> Self {
        Self::new()
    }
}

impl Technique for Dfs {
    fn setup(&self, manager: &mut SimulationManager) -> Result<()> {
        manager.stash_mut(&self.deferred_stash);
        Ok(())
    }

    fn step(&self, manager: &mut SimulationManager, stash: &str, options: &StepOptions) -> Result<()> {
        manager.step(stash, options)?;

        if manager.stash(stash).len() > 1 {
            manager.split(stash, &self.deferred_stash, 1)?;
        }

        if manager.stash(stash).is_empty() {
            if let Some(resumed) = manager.stash_mut(&self.deferred_stash).pop() {
                trace!(state = %resumed.id(), addr = resumed.addr(), "resuming deferred state");
                manager.stash_mut(stash).push(resumed);
            }
        }

        Ok(())
    }
}
