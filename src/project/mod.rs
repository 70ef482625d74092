//! This module contains the boundary between exploration and the binary
//! analysis that resolves program addresses into instructions.
//!
//! Exploration only ever needs one thing from the program under analysis: the
//! ability to lift the basic block that begins at a given address. This is
//! expressed by the [`Project`] trait. The library ships [`Program`], an
//! address-indexed instruction listing that implements it.

pub mod program;

use std::{fmt::Debug, rc::Rc};

use serde::{Deserialize, Serialize};

pub use crate::project::program::{Flow, Instruction, Program};
use crate::error::project::Result;

/// A location in the program being explored.
pub type Address = u64;

/// A dynamically dispatched [`Project`] instance.
pub type DynProject = Rc<dyn Project>;

/// The interface to the program under analysis.
pub trait Project
where
    Self: Debug,
{
    /// Gets the address at which execution of the program begins.
    #[must_use]
    fn entry(&self) -> Address;

    /// Lifts the basic block that begins at `address`.
    ///
    /// Note that `address` need not be the start of a block in the program's
    /// control-flow graph. Lifting from the middle of a block yields the tail
    /// of that block.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if no block can be lifted at `address`.
    fn block(&self, address: Address) -> Result<Block>;
}

/// The way in which control leaves a basic block.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Exit {
    /// Execution continues at the next address in sequence.
    Fallthrough(Address),

    /// Execution unconditionally continues at the target.
    Jump(Address),

    /// Execution forks between the `taken` target and the `fallthrough`.
    Branch {
        taken:       Address,
        fallthrough: Address,
    },

    /// Execution of the path ends.
    Halt,
}

impl Exit {
    /// Gets the addresses at which execution may continue after the block, in
    /// the order in which successors should be produced.
    #[must_use]
    pub fn targets(&self) -> Vec<Address> {
        match self {
            Self::Fallthrough(target) | Self::Jump(target) => vec![*target],
            Self::Branch { taken, fallthrough } => vec![*taken, *fallthrough],
            Self::Halt => vec![],
        }
    }
}

/// A lifted basic block.
///
/// # Invariants
///
/// A block always contains at least one instruction, and its instruction
/// addresses are strictly increasing starting from [`Self::address`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Block {
    address:           Address,
    instruction_addrs: Vec<Address>,
    size:              u64,
    exit:              Exit,
}

impl Block {
    /// Constructs a new block at `address` containing the instructions at
    /// `instruction_addrs`, spanning `size` bytes and leaving through `exit`.
    #[must_use]
    pub fn new(address: Address, instruction_addrs: Vec<Address>, size: u64, exit: Exit) -> Self {
        Self {
            address,
            instruction_addrs,
            size,
            exit,
        }
    }

    /// Gets the address of the first instruction in the block.
    #[must_use]
    pub fn address(&self) -> Address {
        self.address
    }

    /// Gets the addresses of every instruction in the block, in execution
    /// order.
    #[must_use]
    pub fn instruction_addrs(&self) -> &[Address] {
        self.instruction_addrs.as_slice()
    }

    /// Gets the size of the block in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Gets the exit of the block.
    #[must_use]
    pub fn exit(&self) -> Exit {
        self.exit
    }

    /// Checks whether the block contains an instruction at `address`.
    #[must_use]
    pub fn contains(&self, address: Address) -> bool {
        self.instruction_addrs.binary_search(&address).is_ok()
    }
}
