//! This module contains the error representation for failures raised from
//! inside the hooks of an exploration technique.
//!
//! Techniques are trusted code. A failing hook is never caught by the chain;
//! instead the failure is wrapped exactly once with the name of the technique
//! and the hook that raised it, and then propagated to the caller of the
//! manager.

use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::error;

/// The hooks that a [`crate::technique::Technique`] can implement.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Hook {
    Setup,
    StepState,
    Step,
    Filter,
    Complete,
}

impl Display for Hook {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Setup => "setup",
            Self::StepState => "step_state",
            Self::Step => "step",
            Self::Filter => "filter",
            Self::Complete => "complete",
        };
        write!(f, "{name}")
    }
}

/// A failure raised by the `hook` of the named `technique`.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("Technique `{technique}` failed in `{hook}`: {source}")]
pub struct Fault {
    /// The name of the technique whose hook failed.
    pub technique: String,

    /// The hook that was executing.
    pub hook: Hook,

    /// The underlying error, unmodified.
    pub source: Box<error::Error>,
}

impl Fault {
    /// Attaches the identity of `technique` and `hook` to `error`.
    ///
    /// Errors that are already faults are returned unchanged, so that a fault
    /// raised deep inside nested `step` delegation keeps the identity of the
    /// technique that actually failed.
    #[must_use]
    pub fn wrap(technique: &str, hook: Hook, error: error::Error) -> error::Error {
        match error {
            error::Error::Technique(_) => error,
            other => error::Error::Technique(Self {
                technique: technique.to_string(),
                hook,
                source: Box::new(other),
            }),
        }
    }
}
