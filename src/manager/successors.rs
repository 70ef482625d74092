//! This module contains the default stepping algorithm for a single state.

use crate::{
    constant::DEADENDED_STASH,
    error::project,
    manager::{stash::StashMapping, StepOptions},
    state::State,
};

/// Steps `state` forward by one block, filing its successors under `stash`.
///
/// If [`StepOptions::num_inst`] limits execution to fewer instructions than
/// the block holds, the only successor sits at the first instruction that was
/// not executed. Otherwise the exit of the block decides the successors, and a
/// state whose block halts is filed, unchanged, under the deadended stash.
///
/// # Errors
///
/// Returns [`Err`] if the block at the state's address cannot be lifted.
pub fn successors(state: &State, stash: &str, options: &StepOptions) -> project::Result<StashMapping> {
    let block = state.block()?;
    let mut mapping = StashMapping::new();

    if let Some(limit) = options.num_inst {
        if let Some(next) = block.instruction_addrs().get(limit.max(1)) {
            mapping.push(stash, state.successor(*next));
            return Ok(mapping);
        }
    }

    let targets = block.exit().targets();
    if targets.is_empty() {
        mapping.push(DEADENDED_STASH, state.clone());
    } else {
        mapping.extend(stash, targets.into_iter().map(|target| state.successor(target)));
    }

    Ok(mapping)
}
