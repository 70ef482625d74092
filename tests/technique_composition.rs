//! This module is an integration test that checks how the hooks of multiple
//! techniques attached to the same manager are composed.
#![cfg(test)]

use std::{cell::Cell, rc::Rc};

use exploration_techniques::{
    constant::{ACTIVE_STASH, FOUND_STASH},
    error::{self, technique::Hook},
    manager::{SimulationManager, StashMapping, StepOptions},
    state::State,
    technique::{Explorer, FilterOutcome},
    GoalSpec,
    Technique,
};

mod common;

/// Files every state it is offered into a fixed stash, counting how often it
/// was asked.
#[derive(Debug)]
struct Sorter {
    stash: &'static str,
    asked: Cell<usize>,
}

impl Sorter {
    fn new(stash: &'static str) -> Self {
        Self {
            stash,
            asked: Cell::new(0),
        }
    }
}

impl Technique for Sorter {
    fn filter(&self, _state: &State) -> error::Result<Option<FilterOutcome>> {
        self.asked.set(self.asked.get() + 1);
        Ok(Some(FilterOutcome::stash(self.stash)))
    }
}

/// Steps every state straight to a fixed address.
#[derive(Debug)]
struct Teleport {
    target: u64,
}

impl Technique for Teleport {
    fn step_state(
        &self,
        state: &State,
        _options: &StepOptions,
    ) -> error::Result<Option<StashMapping>> {
        Ok(Some(
            StashMapping::new().with(ACTIVE_STASH, [state.successor(self.target)]),
        ))
    }
}

/// Refuses to be attached.
#[derive(Debug)]
struct Unwelcome;

impl Technique for Unwelcome {
    fn setup(&self, _manager: &mut SimulationManager) -> error::Result<()> {
        Err(error::Error::other("not today"))
    }
}

/// Leaves states alone until it has been asked `budget` times, then fails.
#[derive(Debug)]
struct Flaky {
    budget: usize,
    asked:  Cell<usize>,
}

impl Technique for Flaky {
    fn filter(&self, _state: &State) -> error::Result<Option<FilterOutcome>> {
        self.asked.set(self.asked.get() + 1);
        if self.asked.get() > self.budget {
            return Err(error::Error::other("out of patience"));
        }
        Ok(None)
    }
}

#[test]
fn earlier_filters_take_precedence() -> anyhow::Result<()> {
    let mut manager = common::new_manager_from_path(common::MAZE_PATH)?;
    let first = Rc::new(Sorter::new("first"));
    let second = Rc::new(Sorter::new("second"));
    manager.use_shared(first.clone())?;
    manager.use_shared(second.clone())?;

    manager.step(ACTIVE_STASH, &StepOptions::default())?;

    assert_eq!(manager.stash("first").len(), 2);
    assert!(manager.stash("second").is_empty());
    assert_eq!(first.asked.get(), 2);
    assert_eq!(second.asked.get(), 0);

    Ok(())
}

#[test]
fn step_state_overrides_default_successors() -> anyhow::Result<()> {
    let mut manager = common::new_manager_from_path(common::MAZE_PATH)?;
    manager.use_technique(Teleport { target: 0x1030 })?;
    manager.use_technique(Explorer::new(GoalSpec::Address(0x1034), GoalSpec::None))?;

    manager.step(ACTIVE_STASH, &StepOptions::default())?;

    // The teleported state is still filtered, and lands on the goal
    let found = manager.stash(FOUND_STASH);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].addr(), 0x1034);
    assert_eq!(found[0].history(), &[0x1000, 0x1030]);
    assert!(manager.stash(ACTIVE_STASH).is_empty());

    Ok(())
}

#[test]
fn failed_setup_does_not_attach() -> anyhow::Result<()> {
    let mut manager = common::new_manager_from_path(common::MAZE_PATH)?;

    let error = manager.use_technique(Unwelcome).unwrap_err();

    let error::Error::Technique(fault) = error else {
        panic!("Expected a technique fault");
    };
    assert_eq!(fault.technique, "Unwelcome");
    assert_eq!(fault.hook, Hook::Setup);
    assert!(manager.techniques().is_empty());

    Ok(())
}

#[test]
fn detached_techniques_are_no_longer_consulted() -> anyhow::Result<()> {
    let mut manager = common::new_manager_from_path(common::MAZE_PATH)?;
    let sorter = Rc::new(Sorter::new("sorted"));
    manager.use_shared(sorter.clone())?;

    let removed = manager.remove_technique::<Sorter>();
    assert!(removed.is_some());
    manager.step(ACTIVE_STASH, &StepOptions::default())?;

    assert_eq!(sorter.asked.get(), 0);
    assert_eq!(manager.stash(ACTIVE_STASH).len(), 2);

    Ok(())
}

#[test]
fn failing_filters_do_not_lose_states() -> anyhow::Result<()> {
    let mut manager = common::new_manager_from_path(common::MAZE_PATH)?;
    manager.use_technique(Flaky {
        budget: 3,
        asked:  Cell::new(0),
    })?;

    // The second step produces three states and fails on the second of them
    let error = manager.run(ACTIVE_STASH, &StepOptions::default()).unwrap_err();

    let error::Error::Technique(fault) = error else {
        panic!("Expected a technique fault");
    };
    assert_eq!(fault.technique, "Flaky");
    assert_eq!(fault.hook, Hook::Filter);

    let addrs: Vec<_> = manager.stash(ACTIVE_STASH).iter().map(State::addr).collect();
    assert_eq!(addrs, vec![0x1020, 0x100c]);
    assert_eq!(manager.stashes().len(), 2);
    assert!(manager.errored().is_empty());

    Ok(())
}
