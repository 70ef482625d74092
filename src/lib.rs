//! This library implements the exploration layer of a symbolic execution
//! engine: the contract through which pluggable _exploration techniques_
//! observe and override how a [`SimulationManager`] advances, partitions and
//! retires program states, and a _goal compiler_ that turns user goals (an
//! address, a set of addresses, or a predicate) into matchers over states.
//!
//! Note that the library does not define any solver semantics or memory model.
//! The [`project::Program`] and [`state::State`] it provides model control flow
//! only, which is all that exploration needs.
//!
//! # How it Works
//!
//! From a very high level, a single iteration of exploration proceeds as
//! follows:
//!
//! 1. The manager's [`SimulationManager::step`] enters the `step` hooks of the
//!    attached techniques, outermost first, each of which decides whether to
//!    continue into the next.
//! 2. The innermost call runs the default stepping algorithm, which offers each
//!    state to the techniques' `step_state` hooks and otherwise lifts the
//!    state's block to compute its successors.
//! 3. Every produced state is offered to the techniques' `filter` hooks, which
//!    may reassign it to another stash.
//! 4. The techniques' `complete` hooks decide whether exploration halts.
//!
//! See [`technique`] for the rules by which the hooks of multiple techniques
//! are composed, and [`goal`] for how goals are matched.
//!
//! # Basic Usage
//!
//! For the most basic usage of the library, it is sufficient to construct a
//! [`SimulationManager`] over a program and call `.explore`, passing the goals
//! to find and avoid.
//!
//! ```
//! use exploration_techniques::{
//!     constant::{AVOID_STASH, FOUND_STASH},
//!     goal::GoalSpec,
//!     manager::Config,
//!     project::{Flow, Program},
//!     watchdog::LazyWatchdog,
//!     SimulationManager,
//! };
//!
//! let program = Program::linear(
//!     0x1000,
//!     [
//!         (4, Flow::Next),           // 0x1000
//!         (4, Flow::Branch(0x1010)), // 0x1004
//!         (4, Flow::Halt),           // 0x1008
//!         (4, Flow::Halt),           // 0x100c
//!         (4, Flow::Next),           // 0x1010
//!         (4, Flow::Halt),           // 0x1014
//!     ],
//! )
//! .unwrap();
//!
//! let mut manager =
//!     SimulationManager::new(program.in_rc(), Config::default(), LazyWatchdog.in_rc());
//! manager
//!     .explore(GoalSpec::Address(0x1014), GoalSpec::Address(0x1008))
//!     .unwrap();
//!
//! assert_eq!(manager.stash(FOUND_STASH)[0].addr(), 0x1014);
//! assert_eq!(manager.stash(AVOID_STASH)[0].addr(), 0x1008);
//! ```

#![warn(clippy::all, clippy::cargo, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Allows for better API naming

pub mod constant;
pub mod error;
pub mod goal;
pub mod manager;
pub mod project;
pub mod state;
pub mod technique;
pub mod watchdog;

// Re-exports to provide the library interface.
pub use goal::{compile, compile_value, CompiledGoal, GoalMatch, GoalSpec};
pub use manager::SimulationManager;
pub use technique::{DynTechnique, Technique};
