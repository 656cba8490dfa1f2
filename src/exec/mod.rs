// src/exec/mod.rs

//! Process execution layer.
//!
//! The launcher talks to a [`ProcessExecutor`] instead of spawning
//! processes itself. This keeps the core free of process plumbing and
//! makes it easy to swap in a fake executor in tests.
//!
//! - [`command`] holds [`CommandExecutor`], the production implementation
//!   built on `std::process::Command`.

pub mod command;

pub use command::CommandExecutor;

use std::path::PathBuf;

use crate::errors::Result;

/// One fully assembled forked launch.
///
/// `command` is a flat ordered argument vector whose first element is the
/// runtime executable; it is never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: Vec<String>,
    pub working_dir: Option<PathBuf>,
    pub ignore_exit_code: bool,
}

/// Trait abstracting how a forked invocation is executed.
///
/// Production code uses [`CommandExecutor`]; tests can provide their own
/// implementation that records invocations instead of spawning processes.
pub trait ProcessExecutor: Send {
    /// Run the invocation to completion and return its exit code.
    ///
    /// Fails with [`crate::LaunchError::ProcessLaunch`] when the process
    /// could not be started at all. How a non-zero exit code is treated is
    /// implementation policy, steered by `ignore_exit_code`.
    fn run(&mut self, invocation: &Invocation) -> Result<i32>;
}
