// src/spec.rs

//! Launch configuration model.
//!
//! A [`LaunchSpec`] is built up incrementally by the surrounding task
//! framework (or deserialized straight from declarative task configuration)
//! and validated only when it is handed to the launcher. Configuration
//! never fails: the legal combinations of `entry_point` and `archive` can
//! only be judged once both might have been set.

use serde::Deserialize;
use std::path::PathBuf;

/// One runtime property, emitted as `-D<name>=<value>` in forked mode.
///
/// Properties are kept as an ordered list of pairs rather than a map so
/// that flag order on the assembled command line matches insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

/// Configuration for one launch, consumed once by [`crate::Launcher`].
///
/// All sequences preserve insertion order; order is semantically
/// significant both for load resolution and for argument positions.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LaunchSpec {
    /// Fully qualified name of the unit to invoke. Mutually exclusive with
    /// `archive`; checked at execution time, not here.
    pub entry_point: Option<String>,

    /// Self-contained executable archive to run instead of a named entry
    /// point. Forked mode only.
    pub archive: Option<PathBuf>,

    /// Locations searched for the entry point and its dependencies. Forked
    /// mode joins these into a `-classpath` flag; non-forked mode uses them
    /// as the scope of an isolated resolution context.
    pub class_path: Vec<PathBuf>,

    /// Arguments passed verbatim to the target's entry point.
    pub program_args: Vec<String>,

    /// Options for the runtime itself. Forked mode only.
    pub runtime_args: Vec<String>,

    /// Runtime properties. Forked mode only.
    pub properties: Vec<Property>,

    /// Run the target as a separate OS process instead of in-process.
    pub forked: bool,

    /// Working directory for the forked process.
    pub working_dir: Option<PathBuf>,

    /// Explicit runtime binary; overrides the OS-determined default.
    pub runtime_exe: Option<PathBuf>,

    /// Maximum heap size, emitted as `-Xmx<value>`. Forked mode only.
    pub max_memory: Option<String>,

    /// If true, a non-zero subprocess exit code is not treated as failure.
    pub ignore_exit_code: bool,
}

impl LaunchSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class_path(&mut self, entry: impl Into<PathBuf>) {
        self.class_path.push(entry.into());
    }

    pub fn add_program_arg(&mut self, arg: impl Into<String>) {
        self.program_args.push(arg.into());
    }

    pub fn add_runtime_arg(&mut self, arg: impl Into<String>) {
        self.runtime_args.push(arg.into());
    }

    pub fn add_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.push(Property {
            name: name.into(),
            value: value.into(),
        });
    }
}
