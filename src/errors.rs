// src/errors.rs

//! Crate-wide error taxonomy and result alias.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    /// The caller-supplied `LaunchSpec` is self-contradictory or incomplete.
    /// Always raised before any external action is taken.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The target unit could not be located or loaded in-process.
    #[error("Could not load entry point '{name}'")]
    Load {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The target's entry point ran but failed. `source` is the value the
    /// target itself reported, not a wrapper artifact, so callers can tell
    /// "my program failed" apart from "the program never started".
    #[error("Could not execute entry point '{name}'")]
    TargetExecution {
        name: String,
        #[source]
        source: anyhow::Error,
    },

    /// The subprocess could not be started at all.
    #[error("Failed to launch process: {0}")]
    ProcessLaunch(#[from] std::io::Error),

    /// Raised by [`crate::exec::CommandExecutor`] when the subprocess exits
    /// non-zero and `ignore_exit_code` is not set.
    #[error("Process exited with code {0}")]
    NonZeroExit(i32),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
