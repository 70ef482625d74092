//! This module contains errors raised by the simulation manager itself, as
//! opposed to the techniques attached to it.

use thiserror::Error;

/// Errors from the [`crate::manager::SimulationManager`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("Exploration was stopped by the watchdog after {steps} steps")]
    StoppedByWatchdog { steps: usize },

    #[error("The stash {_0:?} does not exist")]
    NoSuchStash(String),
}
