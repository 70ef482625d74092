//! This module contains [`Program`], an address-indexed listing of
//! instructions that can lift basic blocks for exploration.

use std::{
    cell::RefCell,
    collections::{BTreeMap, HashMap},
    rc::Rc,
};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    constant::DEFAULT_MAX_BLOCK_INSTRUCTIONS,
    error::{
        container::Locatable,
        project::{Error, Result},
    },
    project::{Address, Block, DynProject, Exit, Project},
};

/// How control leaves a single instruction.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flow {
    /// Control continues at the following instruction.
    Next,

    /// Control unconditionally transfers to the target.
    Jump(Address),

    /// Control conditionally transfers to the target, or continues at the
    /// following instruction.
    Branch(Address),

    /// The path ends at this instruction.
    Halt,

    /// The bytes at this address do not decode to an instruction.
    Invalid,
}

impl Flow {
    /// Gets the block exit implied by this flow for an instruction whose
    /// following instruction is at `next`.
    ///
    /// Returns [`None`] if the flow does not end a block.
    #[must_use]
    pub fn exit(&self, next: Address) -> Option<Exit> {
        match self {
            Self::Next | Self::Invalid => None,
            Self::Jump(target) => Some(Exit::Jump(*target)),
            Self::Branch(target) => Some(Exit::Branch {
                taken:       *target,
                fallthrough: next,
            }),
            Self::Halt => Some(Exit::Halt),
        }
    }
}

/// A single instruction in a [`Program`].
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub address: Address,
    pub size:    u64,
    pub flow:    Flow,
}

impl Instruction {
    /// Constructs a new instruction of `size` bytes at `address`.
    #[must_use]
    pub fn new(address: Address, size: u64, flow: Flow) -> Self {
        Self {
            address,
            size,
            flow,
        }
    }

    /// Gets the address directly after this instruction.
    #[must_use]
    pub fn end(&self) -> Address {
        self.address.saturating_add(self.size)
    }
}

/// A program represented as a listing of instructions indexed by address.
///
/// # Lifting
///
/// A block can be lifted from any mapped and decodable address, including
/// addresses in the middle of what the control-flow graph would consider a
/// single block. Lifting stops:
///
/// - after an instruction that transfers control;
/// - before an address that is unmapped or does not decode;
/// - once the block holds [`Self::max_block_instructions`] instructions.
///
/// Lifted blocks are cached, as exploration tends to lift the same block many
/// times over.
#[derive(Debug)]
pub struct Program {
    /// The instructions of the program.
    instructions: BTreeMap<Address, Instruction>,

    /// The address at which execution begins.
    entry: Address,

    /// The maximum number of instructions in a single lifted block.
    max_block_instructions: usize,

    /// Blocks that have already been lifted, keyed by their start address.
    cache: RefCell<HashMap<Address, Block>>,
}

impl Program {
    /// Constructs a new program from the provided `instructions`, in any
    /// order.
    ///
    /// Execution begins at the lowest instruction address unless specified
    /// otherwise using [`Self::with_entry`].
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `instructions` is empty, or if any instruction is
    /// zero-sized or overlaps another.
    pub fn new(instructions: impl IntoIterator<Item = Instruction>) -> Result<Self> {
        let sorted = instructions
            .into_iter()
            .sorted_by_key(|instruction| instruction.address)
            .collect_vec();

        let Some(first) = sorted.first() else {
            return Err(Error::EmptyProgram.locate(0));
        };
        let entry = first.address;

        if let Some(zero_sized) = sorted.iter().find(|instruction| instruction.size == 0) {
            return Err(Error::ZeroSizedInstruction.locate(zero_sized.address));
        }

        for (previous, next) in sorted.iter().tuple_windows() {
            if previous.end() > next.address {
                return Err(Error::OverlappingInstruction {
                    existing: previous.address,
                }
                .locate(next.address));
            }
        }

        let instructions = sorted
            .into_iter()
            .map(|instruction| (instruction.address, instruction))
            .collect();
        let max_block_instructions = DEFAULT_MAX_BLOCK_INSTRUCTIONS;
        let cache = RefCell::default();

        Ok(Self {
            instructions,
            entry,
            max_block_instructions,
            cache,
        })
    }

    /// Constructs a new program by laying out the `(size, flow)` pairs in
    /// `listing` contiguously, starting at `base`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] under the same conditions as [`Self::new`].
    pub fn linear(base: Address, listing: impl IntoIterator<Item = (u64, Flow)>) -> Result<Self> {
        let mut address = base;
        let instructions = listing
            .into_iter()
            .map(|(size, flow)| {
                let instruction = Instruction::new(address, size, flow);
                address = instruction.end();
                instruction
            })
            .collect_vec();

        Self::new(instructions)
    }

    /// Sets the address at which execution begins to `entry`.
    #[must_use]
    pub fn with_entry(mut self, entry: Address) -> Self {
        self.entry = entry;
        self
    }

    /// Sets the maximum number of instructions in a lifted block to `value`.
    ///
    /// Values of zero are treated as one.
    #[must_use]
    pub fn with_max_block_instructions(mut self, value: usize) -> Self {
        self.max_block_instructions = value.max(1);
        self.cache.get_mut().clear();
        self
    }

    /// Gets the maximum number of instructions in a lifted block.
    #[must_use]
    pub fn max_block_instructions(&self) -> usize {
        self.max_block_instructions
    }

    /// Gets the instruction at `address`, if one begins there.
    #[must_use]
    pub fn instruction(&self, address: Address) -> Option<&Instruction> {
        self.instructions.get(&address)
    }

    /// Gets the number of blocks that have been lifted and cached so far.
    #[must_use]
    pub fn cached_block_count(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Wraps `self` into an [`Rc`] for sharing between states.
    #[must_use]
    pub fn in_rc(self) -> DynProject {
        Rc::new(self)
    }

    /// Lifts the block starting at `address` without consulting the cache.
    fn lift(&self, address: Address) -> Result<Block> {
        let mut current = match self.instructions.get(&address) {
            None => return Err(Error::UnmappedAddress.locate(address)),
            Some(instruction) if instruction.flow == Flow::Invalid => {
                return Err(Error::UndecodableInstruction.locate(address))
            }
            Some(instruction) => instruction,
        };

        let mut instruction_addrs = vec![];
        loop {
            instruction_addrs.push(current.address);
            let next = current.end();

            let exit = if let Some(exit) = current.flow.exit(next) {
                Some(exit)
            } else if instruction_addrs.len() >= self.max_block_instructions {
                Some(Exit::Fallthrough(next))
            } else {
                match self.instructions.get(&next) {
                    Some(instruction) if instruction.flow != Flow::Invalid => {
                        current = instruction;
                        None
                    }
                    _ => Some(Exit::Fallthrough(next)),
                }
            };

            if let Some(exit) = exit {
                let size = current.end() - address;
                return Ok(Block::new(address, instruction_addrs, size, exit));
            }
        }
    }
}

impl Project for Program {
    fn entry(&self) -> Address {
        self.entry
    }

    fn block(&self, address: Address) -> Result<Block> {
        if let Some(block) = self.cache.borrow().get(&address) {
            return Ok(block.clone());
        }

        let block = self.lift(address)?;
        trace!(
            address = format_args!("{address:#x}"),
            instructions = block.instruction_addrs().len(),
            "lifted block"
        );
        self.cache.borrow_mut().insert(address, block.clone());

        Ok(block)
    }
}
