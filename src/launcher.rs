// src/launcher.rs

//! Public dispatcher over the two execution modes.

use std::path::PathBuf;
use std::sync::Arc;

use crate::errors::{LaunchError, Result};
use crate::exec::{CommandExecutor, Invocation, ProcessExecutor};
use crate::fs::{FileSystem, RealFileSystem};
use crate::invocation;
use crate::load::{self, DefaultResolver, EntryPointResolver};
use crate::logging::{AdvisorySink, TracingSink};
use crate::platform::{NativeOs, OsClassifier, locator};
use crate::spec::LaunchSpec;

/// Validates a [`LaunchSpec`], selects forked vs. in-process execution and
/// propagates the result.
///
/// All collaborators are held behind traits with production defaults;
/// tests swap them out through the `with_*` methods. A launcher keeps no
/// state across calls, and distinct launchers may run concurrently on
/// different threads.
pub struct Launcher {
    executor: Box<dyn ProcessExecutor>,
    resolver: Box<dyn EntryPointResolver>,
    os: Box<dyn OsClassifier>,
    fs: Arc<dyn FileSystem>,
    sink: Box<dyn AdvisorySink>,
    runtime_home: Option<PathBuf>,
}

impl Launcher {
    pub fn new() -> Self {
        Self {
            executor: Box::new(CommandExecutor),
            resolver: Box::new(DefaultResolver::new()),
            os: Box::new(NativeOs),
            fs: Arc::new(RealFileSystem),
            sink: Box::new(TracingSink),
            runtime_home: locator::default_runtime_home(),
        }
    }

    pub fn with_executor(mut self, executor: impl ProcessExecutor + 'static) -> Self {
        self.executor = Box::new(executor);
        self
    }

    pub fn with_resolver(mut self, resolver: impl EntryPointResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn with_os(mut self, os: impl OsClassifier + 'static) -> Self {
        self.os = Box::new(os);
        self
    }

    pub fn with_fs(mut self, fs: Arc<dyn FileSystem>) -> Self {
        self.fs = fs;
        self
    }

    pub fn with_sink(mut self, sink: impl AdvisorySink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn with_runtime_home(mut self, home: Option<PathBuf>) -> Self {
        self.runtime_home = home;
        self
    }

    /// Execute the spec, blocking until the target completes.
    ///
    /// Forked mode yields `Some(exit_code)`; non-forked mode yields `None`.
    pub fn execute(&mut self, spec: &LaunchSpec) -> Result<Option<i32>> {
        if spec.forked {
            Ok(Some(self.execute_forked(spec)?))
        } else {
            self.execute_in_process(spec)?;
            Ok(None)
        }
    }

    /// Run the target as a subprocess of the configured runtime.
    pub fn execute_forked(&mut self, spec: &LaunchSpec) -> Result<i32> {
        match (&spec.entry_point, &spec.archive) {
            (Some(_), Some(_)) => {
                return Err(LaunchError::Config(
                    "only one of entry point and archive can be set".to_string(),
                ));
            }
            (None, None) => {
                return Err(LaunchError::Config(
                    "entry point must not be unset".to_string(),
                ));
            }
            _ => {}
        }

        let command = invocation::build_command(
            spec,
            self.os.as_ref(),
            self.fs.as_ref(),
            self.runtime_home.as_deref(),
        );
        self.sink.debug(&format!("forking: {}", command.join(" ")));

        let invocation = Invocation {
            command,
            working_dir: spec.working_dir.clone(),
            ignore_exit_code: spec.ignore_exit_code,
        };
        self.executor.run(&invocation)
    }

    /// Run the target's entry point inside the current process.
    pub fn execute_in_process(&self, spec: &LaunchSpec) -> Result<()> {
        load::invoke_in_process(spec, self.resolver.as_ref(), self.sink.as_ref())
    }
}

impl Default for Launcher {
    fn default() -> Self {
        Self::new()
    }
}
