//! This module contains common utilities for simplifying the writing of
//! integration tests for this library.

#![cfg(test)]

use std::{fs::File, io::Read};

use anyhow::anyhow;
use exploration_techniques::{
    manager::{Config, SimulationManager},
    project::{Address, DynProject, Instruction, Program},
    watchdog::LazyWatchdog,
};
use serde::{Deserialize, Serialize};

/// The path to the program used by most of the integration tests.
///
/// Its control flow graph has five blocks:
///
/// ```text
///            0x1000
///           /      \
///      0x100c      0x1020
///           \      /    \
///            0x1030    0x1028
/// ```
///
/// where `0x1000` is `[0x1000, 0x1004, 0x1008]`, `0x1030` is `[0x1030,
/// 0x1034]`, and both `0x1028` and `0x1034` halt.
#[allow(unused)] // It is actually
pub const MAZE_PATH: &str = "./asset/Maze.json";

/// A wrapper for the JSON representation of a program on disk, to enable easy
/// deserialization.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ProgramListing {
    entry:        Option<Address>,
    instructions: Vec<Instruction>,
}

/// Creates a new program from the listing in the file at the provided `path`.
#[allow(unused)] // It is actually
pub fn new_program_from_file(path: impl Into<String>) -> anyhow::Result<DynProject> {
    let path = path.into();
    let mut file = File::open(path).map_err(|_| anyhow!("File not available"))?;
    let mut contents = vec![];
    file.read_to_end(&mut contents)
        .map_err(|_| anyhow!("File could not be read"))?;

    let listing: ProgramListing = serde_json::from_slice(contents.as_slice())
        .map_err(|_| anyhow!("Could not parse program listing."))?;

    let program = Program::new(listing.instructions)?;
    let program = match listing.entry {
        Some(entry) => program.with_entry(entry),
        None => program,
    };

    Ok(program.in_rc())
}

/// Constructs a new manager over the program at the provided `path`.
///
/// It uses the default configuration for the manager and never stops due to
/// the watchdog.
#[allow(unused)] // It is actually
pub fn new_manager_from_path(path: impl Into<String>) -> anyhow::Result<SimulationManager> {
    let project = new_program_from_file(path)?;
    Ok(SimulationManager::new(
        project,
        Config::default(),
        LazyWatchdog.in_rc(),
    ))
}
