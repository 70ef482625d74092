//! This module contains the primary error type for the library's interface.
//! It also re-exports the more specific error types that are
//! subsystem-specific.

pub mod container;
pub mod goal;
pub mod manager;
pub mod project;
pub mod technique;

use thiserror::Error;

/// The interface result type for the library.
///
/// # Usage
///
/// Any function considered to be part of the public interface of the library
/// should return this result type. Subsystems should return the more-specific
/// child error types as appropriate.
///
/// Technique hooks also return this type, so a technique can surface any of
/// the library's errors, or its own via [`Error::other`].
pub type Result<T> = std::result::Result<T, Error>;

/// The interface error type for the library.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    /// Errors from converting goal arguments.
    #[error(transparent)]
    Goal(#[from] goal::Error),

    /// Errors from resolving program addresses.
    #[error(transparent)]
    Project(#[from] project::LocatedError),

    /// Errors from the simulation manager.
    #[error(transparent)]
    Manager(#[from] manager::Error),

    /// A failure raised by a technique hook, carrying the identity of the
    /// technique and hook.
    #[error(transparent)]
    Technique(#[from] technique::Fault),

    /// An unknown error, represented as a string.
    #[error("Unknown Error: {_0:?}")]
    Other(String),
}

impl Error {
    /// Constructs an unknown error with the provided `message`.
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}
