//! This module contains the [`SimulationManager`], which owns the stashes of
//! states under exploration and drives them forward with the help of the
//! attached exploration techniques.

pub mod stash;
pub mod successors;

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use crate::manager::{stash::StashMapping, successors::successors};
use crate::{
    constant::{ACTIVE_STASH, DEFAULT_MAXIMUM_STEPS, DEFAULT_RECORD_ERRORS_ENABLED},
    error::{
        manager,
        project,
        technique::{Fault, Hook},
        Result,
    },
    goal::GoalSpec,
    project::DynProject,
    state::State,
    technique::{
        chain::TechniqueChain,
        explorer::Explorer,
        DynTechnique,
        FilterOutcome,
        Technique,
    },
    watchdog::{DynWatchdog, WatchdogPoll},
};

/// The simulation manager is the coordinator of exploration.
///
/// It owns every state under exploration, filed into named stashes, and the
/// chain of techniques that customise how those states are stepped, filtered
/// and retired.
///
/// # Stepping
///
/// [`Self::step`] is the stepping primitive seen by callers and techniques
/// alike. Step hooks are _nested_ rather than folded: a call to `step` made at
/// nesting depth `d` runs the step hook of the technique at position `d` in the
/// chain, and a call made once every technique has been entered runs
/// [`Self::step_default`]. A technique's step hook that wants the default
/// behaviour therefore calls `step` on the manager it is handed.
///
/// The default algorithm offers every state to the chain's `step_state` hooks,
/// falls back to [`successors`], and then offers every produced state to the
/// chain's `filter` hooks before filing it.
#[derive(Debug)]
pub struct SimulationManager {
    /// The program being explored.
    project: DynProject,

    /// The states under exploration.
    stashes: StashMapping,

    /// States that could not be stepped, with the reason why.
    errored: Vec<ErrorRecord>,

    /// The attached techniques, in priority order.
    techniques: TechniqueChain,

    /// The number of step hooks that are currently executing.
    step_depth: usize,

    /// The configuration of the manager.
    config: Config,

    /// A watchdog that gets polled between steps to check whether exploration
    /// needs to stop.
    watchdog: DynWatchdog,
}

impl SimulationManager {
    /// Constructs a new manager exploring `project`.
    ///
    /// It is created with a single active state at the entry point of the
    /// project.
    #[must_use]
    pub fn new(project: DynProject, config: Config, watchdog: DynWatchdog) -> Self {
        let mut stashes = StashMapping::new();
        stashes.push(ACTIVE_STASH, State::at_entry(project.clone()));
        let errored = Vec::new();
        let techniques = TechniqueChain::default();
        let step_depth = 0;

        Self {
            project,
            stashes,
            errored,
            techniques,
            step_depth,
            config,
            watchdog,
        }
    }

    /// Gets the program being explored.
    #[must_use]
    pub fn project(&self) -> &DynProject {
        &self.project
    }

    /// Gets the configuration of the manager.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the chain of attached techniques.
    #[must_use]
    pub fn techniques(&self) -> &TechniqueChain {
        &self.techniques
    }

    /// Attaches `technique` to the end of the chain, after calling its setup
    /// hook.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the technique's setup fails, in which case it is not
    /// attached.
    pub fn use_technique(&mut self, technique: impl Technique) -> Result<()> {
        self.use_shared(Rc::new(technique))
    }

    /// Attaches a technique that the caller also holds a handle to.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the technique's setup fails, in which case it is not
    /// attached.
    pub fn use_shared(&mut self, technique: DynTechnique) -> Result<()> {
        self.use_techniques(TechniqueChain::new(vec![technique]))
    }

    /// Attaches every technique in `chain`, in order, to the end of the chain.
    ///
    /// The setup hook of every technique is run before any of them is
    /// attached.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if any setup fails, in which case none of the techniques
    /// in `chain` are attached.
    pub fn use_techniques(&mut self, chain: TechniqueChain) -> Result<()> {
        chain.setup(self)?;
        for technique in chain {
            debug!(technique = technique.name(), "attached technique");
            self.techniques.add(technique);
        }

        Ok(())
    }

    /// Detaches the first technique of type `T` from the chain, returning it.
    pub fn remove_technique<T: Technique>(&mut self) -> Option<DynTechnique> {
        let removed = self.techniques.remove::<T>();
        if let Some(technique) = &removed {
            debug!(technique = technique.name(), "detached technique");
        }
        removed
    }

    /// Detaches exactly the provided `technique` from the chain, returning it
    /// if it was attached.
    pub fn remove_shared(&mut self, technique: &DynTechnique) -> Option<DynTechnique> {
        let removed = self.techniques.remove_instance(technique);
        if let Some(technique) = &removed {
            debug!(technique = technique.name(), "detached technique");
        }
        removed
    }

    /// Gets all of the stashes.
    #[must_use]
    pub fn stashes(&self) -> &StashMapping {
        &self.stashes
    }

    /// Gets the states in `stash`, which is empty if the stash does not exist.
    #[must_use]
    pub fn stash(&self, stash: &str) -> &[State] {
        self.stashes.get(stash)
    }

    /// Gets the states in `stash` for modification, creating the stash if it
    /// does not exist.
    pub fn stash_mut(&mut self, stash: &str) -> &mut Vec<State> {
        self.stashes.stash_mut(stash)
    }

    /// Adds `states` to the end of `stash`.
    pub fn populate(&mut self, stash: &str, states: impl IntoIterator<Item = State>) {
        self.stashes.extend(stash, states);
    }

    /// Moves every state in `from` for which `predicate` holds to the end of
    /// `to`, returning the number of states moved.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `from` does not exist.
    pub fn move_states(
        &mut self,
        from: &str,
        to: &str,
        mut predicate: impl FnMut(&State) -> bool,
    ) -> Result<usize> {
        self.require_stash(from)?;
        let (moving, staying): (Vec<_>, Vec<_>) =
            self.stashes.take(from).into_iter().partition(|state| predicate(state));
        let moved = moving.len();

        self.stashes.extend(from, staying);
        self.stashes.extend(to, moving);

        Ok(moved)
    }

    /// Keeps the first `limit` states in `from`, moving the rest to the end of
    /// `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if `from` does not exist.
    pub fn split(&mut self, from: &str, to: &str, limit: usize) -> Result<()> {
        self.require_stash(from)?;
        let stash = self.stashes.stash_mut(from);
        let rest = stash.split_off(limit.min(stash.len()));
        self.stashes.extend(to, rest);

        Ok(())
    }

    /// Removes `stash` entirely, returning its states.
    pub fn drop_stash(&mut self, stash: &str) -> Vec<State> {
        self.stashes.remove(stash)
    }

    /// Gets the states that could not be stepped.
    #[must_use]
    pub fn errored(&self) -> &[ErrorRecord] {
        self.errored.as_slice()
    }

    /// Steps every state in `stash` forward.
    ///
    /// This runs the step hook of the next technique in the nesting, or the
    /// default algorithm if every technique's hook is already executing. See
    /// the type-level documentation for details.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if any technique hook fails.
    pub fn step(&mut self, stash: &str, options: &StepOptions) -> Result<()> {
        let depth = self.step_depth;
        let Some(technique) = self.techniques.nth(depth) else {
            return self.step_default(stash, options);
        };

        self.step_depth = depth + 1;
        let result = technique.step(self, stash, options);
        self.step_depth = depth;

        result.map_err(|error| Fault::wrap(technique.name(), Hook::Step, error))
    }

    /// Steps every state in `stash` forward using the default algorithm,
    /// bypassing any step hooks that have not yet run.
    ///
    /// The `step_state` and `filter` hooks of the chain are still consulted.
    /// Nothing is filed until every state has been stepped and filtered, so a
    /// failing hook leaves the stashes exactly as they were before the call.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if any technique hook fails.
    pub fn step_default(&mut self, stash: &str, options: &StepOptions) -> Result<()> {
        let states = self.stashes.take(stash);
        debug!(stash, states = states.len(), "stepping stash");

        match self.advance(&states, stash, options) {
            Ok(Advanced { filed, failures }) => {
                for (state, error) in failures {
                    self.record_error(state, error);
                }
                self.stashes.merge(filed);
                Ok(())
            }
            Err(error) => {
                warn!(stash, %error, "restoring stash after failed step");
                self.stashes.extend(stash, states);
                Err(error)
            }
        }
    }

    /// Steps and filters `states` without touching the stashes, returning
    /// where each produced state should be filed.
    fn advance(&self, states: &[State], stash: &str, options: &StepOptions) -> Result<Advanced> {
        let mut produced = StashMapping::new();
        let mut failures = Vec::new();
        for state in states {
            if let Some(mapping) = self.techniques.step_state(state, options)? {
                produced.merge(mapping);
                continue;
            }

            match successors(state, stash, options) {
                Ok(mapping) => produced.merge(mapping),
                Err(error) => failures.push((state.clone(), error)),
            }
        }

        let mut filed = StashMapping::new();
        for (target, states) in produced {
            for state in states {
                match self.techniques.filter(&state)? {
                    None => filed.push(&target, state),
                    Some(FilterOutcome::Stash(to)) => filed.push(&to, state),
                    Some(FilterOutcome::Replace(to, replacement)) => filed.push(&to, replacement),
                }
            }
        }

        Ok(Advanced { filed, failures })
    }

    /// Checks whether exploration should halt, according to the attached
    /// techniques.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if any technique hook fails.
    pub fn complete(&self) -> Result<bool> {
        self.techniques.complete(self)
    }

    /// Steps `stash` until it is empty, the techniques report completion, or
    /// [`Config::maximum_steps`] steps have been taken, returning the number of
    /// steps taken.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if any technique hook fails, or if the watchdog requests
    /// that exploration stops.
    pub fn run(&mut self, stash: &str, options: &StepOptions) -> Result<usize> {
        let mut poll = WatchdogPoll::new(self.watchdog.clone());
        let mut steps = 0;

        while steps < self.config.maximum_steps {
            if self.stash(stash).is_empty() || self.complete()? {
                break;
            }

            if poll.check() {
                warn!(steps, "exploration stopped by watchdog");
                return Err(manager::Error::StoppedByWatchdog { steps }.into());
            }

            self.step(stash, options)?;
            steps += 1;
        }

        debug!(stash, steps, "run finished");
        Ok(steps)
    }

    /// Explores the active stash until a state satisfying `find` is found,
    /// steering away from states satisfying `avoid`.
    ///
    /// This attaches an [`Explorer`] for the duration of the run, after any
    /// techniques that are already attached. Found states are in the
    /// [`crate::constant::FOUND_STASH`] stash afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Err`] if the run fails.
    pub fn explore(&mut self, find: GoalSpec, avoid: GoalSpec) -> Result<usize> {
        let explorer: DynTechnique = Rc::new(Explorer::new(find, avoid));
        self.use_shared(explorer.clone())?;
        let result = self.run(ACTIVE_STASH, &StepOptions::default());
        self.remove_shared(&explorer);

        result
    }

    /// Records that `state` could not be stepped because of `error`.
    fn record_error(&mut self, state: State, error: project::LocatedError) {
        warn!(state = %state.id(), %error, "state could not be stepped");
        if self.config.record_errors {
            self.errored.push(ErrorRecord { state, error });
        }
    }

    /// Fails if `stash` does not exist.
    fn require_stash(&self, stash: &str) -> Result<()> {
        if self.stashes.contains(stash) {
            Ok(())
        } else {
            Err(manager::Error::NoSuchStash(stash.to_string()).into())
        }
    }
}

/// The outcome of stepping a batch of states, before anything is filed.
struct Advanced {
    /// The produced states, keyed by the stash they are to be filed in.
    filed: StashMapping,

    /// The states that could not be stepped.
    failures: Vec<(State, project::LocatedError)>,
}

/// A state that could not be stepped, along with the reason why.
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorRecord {
    pub state: State,
    pub error: project::LocatedError,
}

/// Options that control how far a single step advances a state.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepOptions {
    /// The maximum number of instructions to execute in a single step.
    ///
    /// If the block being executed is longer than this, the step stops inside
    /// the block. Defaults to [`None`], meaning that whole blocks are executed.
    pub num_inst: Option<usize>,
}

impl StepOptions {
    /// Sets the `num_inst` option to `value`.
    #[must_use]
    pub fn with_num_inst(mut self, value: usize) -> Self {
        self.num_inst = Some(value);
        self
    }
}

/// The configuration for the simulation manager.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The maximum number of steps that a single call to
    /// [`SimulationManager::run`] will take.
    ///
    /// Defaults to [`DEFAULT_MAXIMUM_STEPS`].
    pub maximum_steps: usize,

    /// Whether states that fail to step are kept in
    /// [`SimulationManager::errored`].
    ///
    /// Defaults to [`DEFAULT_RECORD_ERRORS_ENABLED`].
    pub record_errors: bool,
}

impl Config {
    /// Sets the `maximum_steps` config parameter to `value`.
    #[must_use]
    pub fn with_maximum_steps(mut self, value: usize) -> Self {
        self.maximum_steps = value;
        self
    }

    /// Sets the `record_errors` config parameter to `value`.
    #[must_use]
    pub fn with_record_errors(mut self, value: bool) -> Self {
        self.record_errors = value;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        let maximum_steps = DEFAULT_MAXIMUM_STEPS;
        let record_errors = DEFAULT_RECORD_ERRORS_ENABLED;
        Self {
            maximum_steps,
            record_errors,
        }
    }
}

#[cfg(test)]
mod test {
    use std::{
        cell::{Cell, RefCell},
        sync::{atomic::AtomicBool, Arc},
        time::Duration,
    };

    use crate::{
        constant::{ACTIVE_STASH, DEADENDED_STASH, FOUND_STASH},
        error::{self, project, technique::Hook},
        goal::GoalSpec,
        manager::{Config, SimulationManager, StepOptions},
        project::{DynProject, Flow, Program},
        state::State,
        technique::{Explorer, FilterOutcome, Technique},
        watchdog::{DeadlineWatchdog, FlagWatchdog, LazyWatchdog},
    };

    /// A program that branches at its entry block into two halting paths.
    fn diamond() -> anyhow::Result<DynProject> {
        Ok(Program::linear(
            0x0,
            [
                (4, Flow::Next),
                (4, Flow::Branch(0x10)),
                (4, Flow::Halt),
                (4, Flow::Halt),
                (4, Flow::Halt),
            ],
        )?
        .in_rc())
    }

    fn new_manager(project: DynProject) -> SimulationManager {
        SimulationManager::new(project, Config::default(), LazyWatchdog.in_rc())
    }

    #[test]
    fn can_construct_new_manager() -> anyhow::Result<()> {
        let manager = new_manager(diamond()?);

        assert_eq!(manager.stash(ACTIVE_STASH).len(), 1);
        assert_eq!(manager.stash(ACTIVE_STASH)[0].addr(), 0x0);
        assert!(manager.techniques().is_empty());

        Ok(())
    }

    #[test]
    fn default_step_forks_at_branches() -> anyhow::Result<()> {
        let mut manager = new_manager(diamond()?);
        manager.step(ACTIVE_STASH, &StepOptions::default())?;

        let addrs: Vec<_> = manager.stash(ACTIVE_STASH).iter().map(State::addr).collect();
        assert_eq!(addrs, vec![0x10, 0x8]);

        manager.step(ACTIVE_STASH, &StepOptions::default())?;
        assert!(manager.stash(ACTIVE_STASH).is_empty());
        assert_eq!(manager.stash(DEADENDED_STASH).len(), 2);

        Ok(())
    }

    #[test]
    fn run_explores_until_stash_is_empty() -> anyhow::Result<()> {
        let mut manager = new_manager(diamond()?);
        let steps = manager.run(ACTIVE_STASH, &StepOptions::default())?;

        assert_eq!(steps, 2);
        assert_eq!(manager.stash(DEADENDED_STASH).len(), 2);

        Ok(())
    }

    #[test]
    fn run_respects_maximum_steps() -> anyhow::Result<()> {
        let looping = Program::linear(0x0, [(4, Flow::Next), (4, Flow::Jump(0x0))])?.in_rc();
        let config = Config::default().with_maximum_steps(5);
        let mut manager = SimulationManager::new(looping, config, LazyWatchdog.in_rc());

        let steps = manager.run(ACTIVE_STASH, &StepOptions::default())?;

        assert_eq!(steps, 5);
        assert_eq!(manager.stash(ACTIVE_STASH)[0].depth(), 5);

        Ok(())
    }

    #[test]
    fn unliftable_states_are_recorded() -> anyhow::Result<()> {
        let project = Program::linear(0x0, [(4, Flow::Jump(0x100))])?.in_rc();
        let mut manager = new_manager(project);

        manager.run(ACTIVE_STASH, &StepOptions::default())?;

        assert!(manager.stash(ACTIVE_STASH).is_empty());
        assert_eq!(manager.errored().len(), 1);
        assert_eq!(manager.errored()[0].state.addr(), 0x100);
        assert_eq!(
            manager.errored()[0].error.payload,
            project::Error::UnmappedAddress
        );

        Ok(())
    }

    #[test]
    fn watchdog_stops_the_run() -> anyhow::Result<()> {
        let looping = Program::linear(0x0, [(4, Flow::Jump(0x0))])?.in_rc();
        let flag = Arc::new(AtomicBool::new(true));
        let watchdog = FlagWatchdog::new(flag).polling_every(1).in_rc();
        let mut manager = SimulationManager::new(looping, Config::default(), watchdog);

        let result = manager.run(ACTIVE_STASH, &StepOptions::default());

        assert_eq!(
            result,
            Err(error::Error::from(error::manager::Error::StoppedByWatchdog {
                steps: 0,
            }))
        );

        Ok(())
    }

    #[test]
    fn spent_deadline_stops_the_run() -> anyhow::Result<()> {
        let looping = Program::linear(0x0, [(4, Flow::Jump(0x0))])?.in_rc();
        let watchdog = DeadlineWatchdog::new(Duration::ZERO).in_rc();
        let mut manager = SimulationManager::new(looping, Config::default(), watchdog);

        let result = manager.run(ACTIVE_STASH, &StepOptions::default());

        assert_eq!(
            result,
            Err(error::Error::from(error::manager::Error::StoppedByWatchdog {
                steps: 0,
            }))
        );
        assert_eq!(manager.stash(ACTIVE_STASH)[0].addr(), 0x0);

        Ok(())
    }

    #[test]
    fn can_move_and_split_stashes() -> anyhow::Result<()> {
        let project = diamond()?;
        let mut manager = new_manager(project.clone());
        manager.populate(
            ACTIVE_STASH,
            [0x4, 0x8, 0xc].map(|addr| State::new(project.clone(), addr)),
        );

        let moved = manager.move_states(ACTIVE_STASH, "high", |state| state.addr() >= 0x8)?;
        assert_eq!(moved, 2);
        assert_eq!(manager.stash(ACTIVE_STASH).len(), 2);

        manager.split("high", "rest", 1)?;
        assert_eq!(manager.stash("high")[0].addr(), 0x8);
        assert_eq!(manager.stash("rest")[0].addr(), 0xc);

        let missing = manager.split("missing", "rest", 1);
        assert_eq!(
            missing,
            Err(error::Error::from(error::manager::Error::NoSuchStash(
                "missing".into()
            )))
        );

        Ok(())
    }

    /// Records the order of the nested step hooks and otherwise defers.
    #[derive(Debug)]
    struct Nesting {
        label: &'static str,
        log:   std::rc::Rc<RefCell<Vec<String>>>,
    }

    impl Technique for Nesting {
        fn step(
            &self,
            manager: &mut SimulationManager,
            stash: &str,
            options: &StepOptions,
        ) -> error::Result<()> {
            self.log.borrow_mut().push(format!("enter {}", self.label));
            manager.step(stash, options)?;
            self.log.borrow_mut().push(format!("exit {}", self.label));
            Ok(())
        }
    }

    #[test]
    fn step_hooks_nest_in_registration_order() -> anyhow::Result<()> {
        let log = std::rc::Rc::new(RefCell::new(vec![]));
        let mut manager = new_manager(diamond()?);
        manager.use_technique(Nesting {
            label: "first",
            log:   log.clone(),
        })?;
        manager.use_technique(Nesting {
            label: "second",
            log:   log.clone(),
        })?;

        manager.step(ACTIVE_STASH, &StepOptions::default())?;

        assert_eq!(
            *log.borrow(),
            vec!["enter first", "enter second", "exit second", "exit first"]
        );
        assert_eq!(manager.stash(ACTIVE_STASH).len(), 2);

        // Nesting unwinds fully, so the next step starts from the outermost hook.
        manager.step(ACTIVE_STASH, &StepOptions::default())?;
        assert_eq!(log.borrow()[4], "enter first");

        Ok(())
    }

    /// Fails in whichever hook it is asked to.
    #[derive(Debug)]
    struct Faulty;

    impl Technique for Faulty {
        fn name(&self) -> &str {
            "Faulty"
        }

        fn filter(&self, _state: &State) -> error::Result<Option<FilterOutcome>> {
            Err(error::Error::other("cannot filter"))
        }
    }

    #[test]
    fn hook_failures_carry_technique_identity() -> anyhow::Result<()> {
        let mut manager = new_manager(diamond()?);
        manager.use_technique(Faulty)?;

        let error = manager.step(ACTIVE_STASH, &StepOptions::default()).unwrap_err();

        let error::Error::Technique(fault) = error else {
            panic!("Expected a technique fault");
        };
        assert_eq!(fault.technique, "Faulty");
        assert_eq!(fault.hook, Hook::Filter);
        assert_eq!(*fault.source, error::Error::other("cannot filter"));

        Ok(())
    }

    #[test]
    fn config_fills_missing_fields_with_defaults() -> anyhow::Result<()> {
        let config: Config = serde_json::from_str(r#"{ "maximum_steps": 12 }"#)?;

        assert_eq!(config, Config::default().with_maximum_steps(12));

        Ok(())
    }

    /// Defers on its first filter call and fails on every call after that.
    #[derive(Debug, Default)]
    struct FailsAfterFirstFilter {
        calls: Cell<usize>,
    }

    impl Technique for FailsAfterFirstFilter {
        fn filter(&self, _state: &State) -> error::Result<Option<FilterOutcome>> {
            self.calls.set(self.calls.get() + 1);
            if self.calls.get() > 1 {
                Err(error::Error::other("cannot filter twice"))
            } else {
                Ok(None)
            }
        }
    }

    #[test]
    fn failed_steps_leave_stashes_untouched() -> anyhow::Result<()> {
        let mut manager = new_manager(diamond()?);
        let entry = manager.stash(ACTIVE_STASH)[0].clone();
        manager.use_technique(FailsAfterFirstFilter::default())?;

        let error = manager.step(ACTIVE_STASH, &StepOptions::default()).unwrap_err();

        let error::Error::Technique(fault) = error else {
            panic!("Expected a technique fault");
        };
        assert_eq!(fault.hook, Hook::Filter);
        assert_eq!(manager.stashes().len(), 1);
        assert_eq!(manager.stash(ACTIVE_STASH), &[entry]);
        assert!(manager.errored().is_empty());

        Ok(())
    }

    #[test]
    fn explore_keeps_previously_attached_explorers() -> anyhow::Result<()> {
        let mut manager = new_manager(diamond()?);
        manager.use_technique(Explorer::new(GoalSpec::None, GoalSpec::None).with_find_stash("mine"))?;

        manager.explore(GoalSpec::Address(0x10), GoalSpec::None)?;

        assert_eq!(manager.techniques().len(), 1);
        assert_eq!(
            manager.techniques().get::<Explorer>().map(Explorer::find_stash),
            Some("mine")
        );
        assert_eq!(manager.stash(FOUND_STASH).len(), 1);

        Ok(())
    }
}
