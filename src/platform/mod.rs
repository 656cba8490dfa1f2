// src/platform/mod.rs

//! OS-family classification and path-list formatting.
//!
//! The launcher never branches on `cfg!` directly; it asks an
//! [`OsClassifier`] so that family-dependent behaviour (runtime executable
//! naming, home probing) stays testable on any host.

use std::fmt::Debug;
use std::path::PathBuf;

pub mod locator;

/// The OS families the launcher distinguishes between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    Dos,
    Netware,
    Unix,
}

/// Classifies the current host against [`OsFamily`] tags.
pub trait OsClassifier: Send + Sync + Debug {
    fn is_family(&self, family: OsFamily) -> bool;
}

/// Classifier for the OS the launcher is actually running on.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeOs;

impl OsClassifier for NativeOs {
    fn is_family(&self, family: OsFamily) -> bool {
        match family {
            OsFamily::Windows => cfg!(windows),
            OsFamily::Unix => cfg!(unix),
            // Rust does not target bare DOS or NetWare hosts.
            OsFamily::Dos | OsFamily::Netware => false,
        }
    }
}

/// Separator between entries of a path-list string.
pub const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// Join an ordered sequence of paths into the platform path-list string.
pub fn join_path_list(paths: &[PathBuf]) -> String {
    let entries: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
    entries.join(&PATH_LIST_SEPARATOR.to_string())
}
