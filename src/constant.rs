//! This module contains constants that are needed throughout the codebase.

/// The stash that holds states that are still being explored.
pub const ACTIVE_STASH: &str = "active";

/// The stash that holds states whose paths have ended.
pub const DEADENDED_STASH: &str = "deadended";

/// The stash into which the explorer files states that reached a find goal.
pub const FOUND_STASH: &str = "found";

/// The stash into which the explorer files states that reached an avoid goal.
pub const AVOID_STASH: &str = "avoid";

/// The stash in which depth-first search parks the states it is not currently
/// following.
pub const DEFERRED_STASH: &str = "deferred";

/// The stash into which the length limiter files states whose paths grew too
/// long.
pub const CUT_STASH: &str = "cut";

/// The default maximum number of instructions in a single lifted block.
///
/// This matches the block size limit of common binary lifters.
pub const DEFAULT_MAX_BLOCK_INSTRUCTIONS: usize = 99;

/// The default maximum number of steps that a single run of the manager will
/// take.
pub const DEFAULT_MAXIMUM_STEPS: usize = 100_000;

/// The default value for whether states that fail to step are recorded.
pub const DEFAULT_RECORD_ERRORS_ENABLED: bool = true;

/// The default number of states the explorer looks for before completing.
pub const DEFAULT_NUM_FIND: usize = 1;

/// The default number of loop iterations the manager will wait before polling
/// the watchdog.
pub const DEFAULT_WATCHDOG_POLL_LOOP_ITERATIONS: usize = 100;
