// src/exec/command.rs

//! Production process executor.

use std::process::Command;

use tracing::{debug, info};

use crate::errors::{LaunchError, Result};
use crate::exec::{Invocation, ProcessExecutor};

/// Runs invocations with `std::process::Command`, blocking until exit.
///
/// Stdio is inherited from the calling process; streaming or capturing
/// subprocess output is out of scope here. Per framework convention, a
/// non-zero exit code is an error unless the spec set `ignore_exit_code`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandExecutor;

impl ProcessExecutor for CommandExecutor {
    fn run(&mut self, invocation: &Invocation) -> Result<i32> {
        let (exe, args) = invocation
            .command
            .split_first()
            .ok_or_else(|| LaunchError::Config("assembled command is empty".to_string()))?;

        debug!(cmd = %invocation.command.join(" "), "starting forked runtime");

        let mut command = Command::new(exe);
        command.args(args);
        if let Some(dir) = &invocation.working_dir {
            command.current_dir(dir);
        }

        let status = command.status().map_err(LaunchError::ProcessLaunch)?;
        let code = status.code().unwrap_or(-1);

        info!(exit_code = code, success = status.success(), "forked runtime exited");

        if code != 0 && !invocation.ignore_exit_code {
            return Err(LaunchError::NonZeroExit(code));
        }
        Ok(code)
    }
}
