//! This module contains the error type that pertains to resolving program
//! addresses into instructions and basic blocks.

use thiserror::Error;

use crate::{error::container, project::Address};

/// Errors that occur while building a program listing or lifting a basic block
/// out of it.
///
/// Any failure to lift a block is absorbed by goal matching, so a single
/// unresolvable address never aborts a matching decision.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    #[error("No instruction is mapped at this address")]
    UnmappedAddress,

    #[error("The instruction at this address cannot be decoded")]
    UndecodableInstruction,

    #[error("A program must contain at least one instruction")]
    EmptyProgram,

    #[error("Instructions must occupy at least one byte")]
    ZeroSizedInstruction,

    #[error("The instruction overlaps the instruction at {existing:#x}")]
    OverlappingInstruction { existing: Address },
}

/// A project error with an associated program address.
pub type LocatedError = container::Located<Error>;

/// The result type for functions that may return project errors.
pub type Result<T> = std::result::Result<T, LocatedError>;

/// Make it possible to attach locations to these errors.
impl container::Locatable for Error {
    type Located = LocatedError;

    fn locate(self, address: Address) -> Self::Located {
        container::Located {
            location: address,
            payload:  self,
        }
    }
}
