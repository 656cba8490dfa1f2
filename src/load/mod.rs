// src/load/mod.rs

//! In-process loading and invocation of a target unit.
//!
//! The contract with a target is deliberately small: it must expose one
//! discoverable entry function taking the program arguments and reporting
//! failure through its return value. Two lookup mechanisms are shipped:
//!
//! - [`registry`] — explicit registration of statically linked units; this
//!   is the ambient context used when the spec carries no classpath.
//! - [`dylib`] — symbol lookup in dynamic libraries found via the
//!   classpath; each load gets its own isolated scope, discarded after the
//!   invocation completes.

pub mod dylib;
pub mod registry;

pub use dylib::DylibResolver;
pub use registry::EntryPointRegistry;

use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;

use libloading::Library;

use crate::errors::{LaunchError, Result};
use crate::logging::AdvisorySink;
use crate::spec::LaunchSpec;

/// Error type a target entry function reports its own failure with.
pub type EntryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Signature of a registered entry function.
pub type EntryFn = Arc<dyn Fn(&[String]) -> std::result::Result<(), EntryError> + Send + Sync>;

/// Raw signature of an entry function exported by a dynamic library.
pub type RawEntryFn = fn(&[String]) -> std::result::Result<(), EntryError>;

/// A resolved entry point, ready to be invoked exactly once.
pub enum EntryPoint {
    Registered {
        name: String,
        func: EntryFn,
    },
    /// The library handle is kept alive for as long as the function pointer
    /// can be called, and dropped with the entry point after invocation.
    Loaded {
        name: String,
        func: RawEntryFn,
        _lib: Library,
    },
}

impl Debug for EntryPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryPoint::Registered { name, .. } => {
                f.debug_struct("Registered").field("name", name).finish_non_exhaustive()
            }
            EntryPoint::Loaded { name, .. } => {
                f.debug_struct("Loaded").field("name", name).finish_non_exhaustive()
            }
        }
    }
}

impl EntryPoint {
    pub fn name(&self) -> &str {
        match self {
            EntryPoint::Registered { name, .. } => name,
            EntryPoint::Loaded { name, .. } => name,
        }
    }

    /// Invoke the entry function with the program arguments.
    pub fn invoke(self, args: &[String]) -> std::result::Result<(), EntryError> {
        match self {
            EntryPoint::Registered { func, .. } => func(args),
            EntryPoint::Loaded { func, _lib, .. } => func(args),
        }
    }
}

/// Resolves an entry-point name within a scope of search locations.
///
/// An empty scope means the ambient context: the unit must already be
/// reachable without extra configuration.
pub trait EntryPointResolver: Send + Sync + Debug {
    fn resolve(&self, name: &str, scope: &[PathBuf]) -> anyhow::Result<EntryPoint>;
}

/// Default resolver: registered units for ambient loads, dynamic libraries
/// for classpath-scoped loads.
#[derive(Debug, Clone, Default)]
pub struct DefaultResolver {
    registry: EntryPointRegistry,
    dylib: DylibResolver,
}

impl DefaultResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registry(&self) -> &EntryPointRegistry {
        &self.registry
    }
}

impl EntryPointResolver for DefaultResolver {
    fn resolve(&self, name: &str, scope: &[PathBuf]) -> anyhow::Result<EntryPoint> {
        if scope.is_empty() {
            self.registry.resolve(name, scope)
        } else {
            self.dylib.resolve(name, scope)
        }
    }
}

/// Run the target's entry point in the current process.
///
/// Forked-only fields are silently ignored in this mode; each one present
/// produces an advisory warning so the dropped configuration is visible.
pub fn invoke_in_process(
    spec: &LaunchSpec,
    resolver: &dyn EntryPointResolver,
    sink: &dyn AdvisorySink,
) -> Result<()> {
    let Some(name) = spec.entry_point.as_deref() else {
        return Err(LaunchError::Config(
            "entry point must not be unset".to_string(),
        ));
    };
    if spec.archive.is_some() {
        return Err(LaunchError::Config(
            "cannot execute an archive in non-forked mode".to_string(),
        ));
    }

    if !spec.runtime_args.is_empty() {
        sink.warn("runtime arguments ignored when running in the current process");
    }
    if spec.working_dir.is_some() {
        sink.warn("working directory ignored when running in the current process");
    }
    if !spec.properties.is_empty() {
        sink.warn("properties ignored when running in the current process");
    }

    sink.debug(&format!(
        "running in current process: {} {}",
        name,
        spec.program_args.join(" ")
    ));

    let entry = resolver
        .resolve(name, &spec.class_path)
        .map_err(|source| LaunchError::Load {
            name: name.to_string(),
            source,
        })?;

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| entry.invoke(&spec.program_args)));
    match outcome {
        Ok(Ok(())) => Ok(()),
        Ok(Err(cause)) => Err(LaunchError::TargetExecution {
            name: name.to_string(),
            source: anyhow::Error::from_boxed(cause),
        }),
        Err(payload) => Err(LaunchError::TargetExecution {
            name: name.to_string(),
            source: anyhow::anyhow!("entry point panicked: {}", panic_message(&payload)),
        }),
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
