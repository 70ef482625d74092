//! This module contains the [`LengthLimiter`] technique, which cuts off paths
//! that grow too long.

use std::cell::Cell;

use tracing::debug;

use crate::{
    constant::CUT_STASH,
    error::Result,
    manager::{SimulationManager, StepOptions},
    state::State,
    technique::Technique,
};

/// A technique that removes states whose path has executed more than a
/// maximum number of blocks from the stepped stash.
///
/// Removed states are moved to the cut stash, or discarded entirely when the
/// limiter is [dropping](Self::dropping).
#[derive(Debug)]
pub struct LengthLimiter {
    max_length: usize,
    cut_stash:  String,
    drop:       bool,
    cut:        Cell<usize>,
}

impl LengthLimiter {
    /// Constructs a new limiter that cuts paths longer than `max_length`
    /// blocks.
    #[must_use]
    pub fn new(max_length: usize) -> Self {
        let cut_stash = CUT_STASH.to_string();
        let drop = false;
        let cut = Cell::new(0);

        Self {
            max_length,
            cut_stash,
            drop,
            cut,
        }
    }

    /// Sets the stash into which cut states are moved.
    #[must_use]
    pub fn with_cut_stash(mut self, stash: impl Into<String>) -> Self {
        self.cut_stash = stash.into();
        self
    }

    /// Discards cut states instead of keeping them in the cut stash.
    #[must_use]
    pub fn dropping(mut self) -> Self {
        self.drop = true;
        self
    }

    /// Gets the maximum number of blocks a path may execute.
    #[must_use]
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Gets the number of states cut so far.
    #[must_use]
    pub fn cut_count(&self) -> usize {
        self.cut.get()
    }

    /// Checks if `state` has exceeded the maximum path length.
    fn exceeds(&self, state: &State) -> bool {
        state.depth() > self.max_length
    }
}

impl Technique for LengthLimiter {
    fn step(&self, manager: &mut SimulationManager, stash: &str, options: &StepOptions) -> Result<()> {
        manager.step(stash, options)?;

        let cut = if self.drop {
            let states = manager.stash_mut(stash);
            let before = states.len();
            states.retain(|state| !self.exceeds(state));
            before - states.len()
        } else {
            manager.move_states(stash, &self.cut_stash, |state| self.exceeds(state))?
        };

        if cut > 0 {
            debug!(cut, max_length = self.max_length, "cut long paths");
            self.cut.set(self.cut.get() + cut);
        }

        Ok(())
    }
}
