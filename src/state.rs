//! This module contains the definition of [`State`], the handle that represents
//! one path of execution through the program during exploration.

use std::fmt::{Display, Formatter};

use derivative::Derivative;
use uuid::Uuid;

use crate::{
    error::project,
    project::{Address, Block, DynProject},
};

/// The identity of a [`State`].
///
/// Every state receives a fresh identity when it is created, including when it
/// is created as the successor of another state.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct StateId(Uuid);

impl StateId {
    /// Creates a new, unique, state identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StateId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for StateId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A `State` is a representation of a given execution path during the course
/// of exploration.
///
/// It is opaque to techniques beyond its address, identity and history, and
/// carries a shared handle to the project it executes so that its address can
/// be resolved into instructions.
#[derive(Clone, Derivative)]
#[derivative(Debug, PartialEq)]
pub struct State {
    /// The identity of this state.
    id: StateId,

    /// The identity of the state this one was produced from, if any.
    parent: Option<StateId>,

    /// The address of the next instruction to execute.
    addr: Address,

    /// The addresses at which each previous step of this path began.
    history: Vec<Address>,

    /// The program being executed.
    #[derivative(Debug = "ignore", PartialEq = "ignore")]
    project: DynProject,
}

impl State {
    /// Constructs a new state at `addr` in `project`, with no history.
    #[must_use]
    pub fn new(project: DynProject, addr: Address) -> Self {
        let id = StateId::new();
        let parent = None;
        let history = Vec::new();

        Self {
            id,
            parent,
            addr,
            history,
            project,
        }
    }

    /// Constructs a new state at the entry point of `project`.
    #[must_use]
    pub fn at_entry(project: DynProject) -> Self {
        let entry = project.entry();
        Self::new(project, entry)
    }

    /// Gets the identity of the state.
    #[must_use]
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Gets the identity of the state this one was produced from.
    #[must_use]
    pub fn parent(&self) -> Option<StateId> {
        self.parent
    }

    /// Gets the address of the next instruction to execute.
    #[must_use]
    pub fn addr(&self) -> Address {
        self.addr
    }

    /// Gets the addresses at which each previous step of this path began, in
    /// order.
    #[must_use]
    pub fn history(&self) -> &[Address] {
        self.history.as_slice()
    }

    /// Gets the number of steps taken along this path.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Gets the project being executed.
    #[must_use]
    pub fn project(&self) -> &DynProject {
        &self.project
    }

    /// Lifts the block starting at the state's current address.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the block cannot be lifted.
    pub fn block(&self) -> project::Result<Block> {
        self.project.block(self.addr)
    }

    /// Produces the state that results from executing from the current address
    /// and arriving at `target`.
    ///
    /// The successor has a fresh identity, records this state as its parent,
    /// and appends the current address to its history.
    #[must_use]
    pub fn successor(&self, target: Address) -> Self {
        let mut history = self.history.clone();
        history.push(self.addr);

        Self {
            id: StateId::new(),
            parent: Some(self.id),
            addr: target,
            history,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{
        project::{Flow, Program},
        state::State,
    };

    #[test]
    fn successors_track_lineage() -> anyhow::Result<()> {
        let program = Program::linear(0x100, [(4, Flow::Jump(0x200))])?.in_rc();
        let state = State::at_entry(program);
        let successor = state.successor(0x200);

        assert_eq!(state.addr(), 0x100);
        assert_eq!(successor.addr(), 0x200);
        assert_eq!(successor.parent(), Some(state.id()));
        assert_ne!(successor.id(), state.id());
        assert_eq!(successor.history(), &[0x100]);
        assert_eq!(successor.depth(), 1);

        Ok(())
    }

    #[test]
    fn can_lift_current_block() -> anyhow::Result<()> {
        let program = Program::linear(0x100, [(4, Flow::Next), (4, Flow::Halt)])?.in_rc();
        let state = State::at_entry(program);

        assert_eq!(state.block()?.instruction_addrs(), &[0x100, 0x104]);

        Ok(())
    }
}
