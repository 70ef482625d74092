//! This module contains the monitors that can halt a run of the
//! [`crate::manager::SimulationManager`] from outside of the technique chain.
//!
//! # Best-Effort Monitoring
//!
//! A watchdog is only consulted between steps of
//! [`crate::manager::SimulationManager::run`], and then only as often as the
//! [`WatchdogPoll`] schedule allows. A single long-running step, or a technique
//! hook that never returns, cannot be interrupted by it.

use std::{
    fmt::Debug,
    rc::Rc,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

use tracing::trace;

use crate::constant::DEFAULT_WATCHDOG_POLL_LOOP_ITERATIONS;

/// A dynamically dispatched [`Watchdog`] instance.
pub type DynWatchdog = Rc<dyn Watchdog>;

/// The interface to an object that can be polled to see if exploration needs
/// to stop.
pub trait Watchdog
where
    Self: Debug,
{
    /// Checks if exploration should halt and return an error.
    #[must_use]
    fn should_stop(&self) -> bool;

    /// Gets the number of steps the manager should take between polls.
    ///
    /// Defaults to [`DEFAULT_WATCHDOG_POLL_LOOP_ITERATIONS`].
    #[must_use]
    fn poll_every(&self) -> usize {
        DEFAULT_WATCHDOG_POLL_LOOP_ITERATIONS
    }
}

/// A watchdog that never stops exploration.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct LazyWatchdog;

impl LazyWatchdog {
    /// Wraps `self` into an [`Rc`].
    #[must_use]
    pub fn in_rc(self) -> DynWatchdog {
        Rc::new(self)
    }
}

impl Watchdog for LazyWatchdog {
    fn should_stop(&self) -> bool {
        false
    }

    fn poll_every(&self) -> usize {
        usize::MAX
    }
}

/// A watchdog that stops exploration once a shared flag is raised, typically
/// from another thread.
#[derive(Clone, Debug)]
pub struct FlagWatchdog {
    flag:       Arc<AtomicBool>,
    poll_every: usize,
}

impl FlagWatchdog {
    /// Constructs a new watchdog observing `flag`.
    #[must_use]
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        let poll_every = DEFAULT_WATCHDOG_POLL_LOOP_ITERATIONS;
        Self { flag, poll_every }
    }

    /// Sets the number of steps between polls. Values of zero are treated as
    /// one.
    #[must_use]
    pub fn polling_every(mut self, steps: usize) -> Self {
        self.poll_every = steps.max(1);
        self
    }

    /// Gets a handle to the observed flag, through which exploration can be
    /// stopped.
    #[must_use]
    pub fn flag(&self) -> Arc<AtomicBool> {
        self.flag.clone()
    }

    /// Wraps the watchdog into an [`Rc`].
    #[must_use]
    pub fn in_rc(self) -> DynWatchdog {
        Rc::new(self)
    }
}

impl Watchdog for FlagWatchdog {
    fn should_stop(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    fn poll_every(&self) -> usize {
        self.poll_every
    }
}

/// A watchdog that stops exploration once a time budget, counted from its
/// construction, has been spent.
#[derive(Clone, Debug)]
pub struct DeadlineWatchdog {
    started:    Instant,
    budget:     Duration,
    poll_every: usize,
}

impl DeadlineWatchdog {
    /// Constructs a new watchdog that allows exploration to run for `budget`.
    #[must_use]
    pub fn new(budget: Duration) -> Self {
        let started = Instant::now();
        let poll_every = DEFAULT_WATCHDOG_POLL_LOOP_ITERATIONS;
        Self {
            started,
            budget,
            poll_every,
        }
    }

    /// Sets the number of steps between polls. Values of zero are treated as
    /// one.
    #[must_use]
    pub fn polling_every(mut self, steps: usize) -> Self {
        self.poll_every = steps.max(1);
        self
    }

    /// Gets the time budget that has not yet been spent.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.started.elapsed())
    }

    /// Wraps the watchdog into an [`Rc`].
    #[must_use]
    pub fn in_rc(self) -> DynWatchdog {
        Rc::new(self)
    }
}

impl Watchdog for DeadlineWatchdog {
    fn should_stop(&self) -> bool {
        self.remaining().is_zero()
    }

    fn poll_every(&self) -> usize {
        self.poll_every
    }
}

/// The polling schedule of a single run.
///
/// The watchdog is polled on the first check and then once every
/// [`Watchdog::poll_every`] checks after that.
#[derive(Debug)]
pub struct WatchdogPoll {
    watchdog:   DynWatchdog,
    interval:   usize,
    until_next: usize,
}

impl WatchdogPoll {
    /// Starts a new schedule for `watchdog`.
    #[must_use]
    pub fn new(watchdog: DynWatchdog) -> Self {
        let interval = watchdog.poll_every().max(1);
        let until_next = 0;
        Self {
            watchdog,
            interval,
            until_next,
        }
    }

    /// Advances the schedule by one step, returning `true` if the watchdog was
    /// polled and asked for exploration to stop.
    pub fn check(&mut self) -> bool {
        if self.until_next > 0 {
            self.until_next -= 1;
            return false;
        }

        self.until_next = self.interval - 1;
        let stop = self.watchdog.should_stop();
        trace!(stop, "polled watchdog");
        stop
    }
}
