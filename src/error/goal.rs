//! This module contains the errors raised while turning user-facing goal
//! arguments into compiled goals.

use thiserror::Error;

/// Errors that occur when converting a loosely-typed goal argument into a
/// [`crate::goal::GoalSpec`].
///
/// These are construction-time errors and are never defaulted away.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("Unable to convert a goal of kind `{kind}` into a goal condition")]
    InvalidGoalSpecification { kind: String },

    #[error("{_0:?} is not a valid program address")]
    InvalidAddress(String),
}

/// The result type for functions that may return goal errors.
pub type Result<T> = std::result::Result<T, Error>;
