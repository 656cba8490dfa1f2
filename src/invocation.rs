// src/invocation.rs

//! Forked command-line assembly.
//!
//! [`build_command`] is a pure function from a spec to a flat, ordered
//! argument vector. It performs no validation (the launcher does that
//! first) and never fails. Flag order is a correctness contract: runtime
//! flags must precede the target selector so the launched runtime parses
//! them as its own options rather than program arguments.

use std::path::Path;

use crate::fs::FileSystem;
use crate::platform::{self, OsClassifier, locator};
use crate::spec::LaunchSpec;

/// Assemble the ordered argument list for a forked launch.
///
/// Fixed order:
/// 1. runtime executable (explicit override, else locator result)
/// 2. runtime arguments
/// 3. `-Xmx<max_memory>` if set
/// 4. `-D<name>=<value>` per property, in insertion order
/// 5. `-classpath <joined>` if the classpath is non-empty; the flag is
///    omitted entirely for an empty classpath
/// 6. `-jar <archive>` or the bare entry-point name
/// 7. program arguments
pub fn build_command(
    spec: &LaunchSpec,
    os: &dyn OsClassifier,
    fs: &dyn FileSystem,
    runtime_home: Option<&Path>,
) -> Vec<String> {
    let mut command = Vec::new();

    let runtime = match &spec.runtime_exe {
        Some(exe) => exe.display().to_string(),
        None => locator::resolve_runtime_exe(os, fs, runtime_home)
            .display()
            .to_string(),
    };
    command.push(runtime);

    command.extend(spec.runtime_args.iter().cloned());

    if let Some(max_memory) = &spec.max_memory {
        command.push(format!("-Xmx{max_memory}"));
    }

    for property in &spec.properties {
        command.push(format!("-D{}={}", property.name, property.value));
    }

    if !spec.class_path.is_empty() {
        command.push("-classpath".to_string());
        command.push(platform::join_path_list(&spec.class_path));
    }

    if let Some(archive) = &spec.archive {
        command.push("-jar".to_string());
        command.push(archive.display().to_string());
    } else if let Some(entry_point) = &spec.entry_point {
        command.push(entry_point.clone());
    }

    command.extend(spec.program_args.iter().cloned());

    command
}
