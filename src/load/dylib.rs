// src/load/dylib.rs

//! Classpath-scoped entry-point resolution via dynamic libraries.
//!
//! Each classpath entry is either a library file or a directory holding
//! one under the conventional platform file name. Entries are probed in
//! order; the first library exporting the expected symbol wins. The
//! resulting library handle is owned by the single resolved entry point
//! and unloaded when that invocation completes, so one load never leaks
//! into the next.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, bail};
use libloading::Library;
use tracing::debug;

use crate::fs::{FileSystem, RealFileSystem};
use crate::load::{EntryPoint, EntryPointResolver, RawEntryFn};

#[derive(Debug, Clone)]
pub struct DylibResolver {
    fs: Arc<dyn FileSystem>,
}

impl DylibResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fs(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }
}

impl Default for DylibResolver {
    fn default() -> Self {
        Self {
            fs: Arc::new(RealFileSystem),
        }
    }
}

/// Exported symbol derived from an entry-point name: every character that
/// is not alphanumeric maps to `_`, so `com.example.Main` exports
/// `com_example_Main`.
fn symbol_name(entry_point: &str) -> String {
    entry_point
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Conventional library file name for an entry point, derived from the
/// last dot-separated segment: `com.example.Main` on Linux is
/// `libmain.so`.
fn library_file_name(entry_point: &str) -> String {
    let segment = entry_point
        .rsplit('.')
        .next()
        .unwrap_or(entry_point)
        .to_lowercase();
    format!(
        "{}{}{}",
        std::env::consts::DLL_PREFIX,
        segment,
        std::env::consts::DLL_SUFFIX
    )
}

impl EntryPointResolver for DylibResolver {
    fn resolve(&self, name: &str, scope: &[PathBuf]) -> anyhow::Result<EntryPoint> {
        if scope.is_empty() {
            bail!("no search locations given for entry point '{name}'");
        }

        let symbol = symbol_name(name);
        for entry in scope {
            let lib_path = if self.fs.is_file(entry) {
                entry.clone()
            } else {
                let candidate = entry.join(library_file_name(name));
                if self.fs.is_file(&candidate) {
                    candidate
                } else {
                    continue;
                }
            };

            let func = load_symbol(&lib_path, &symbol)?;
            let Some((lib, func)) = func else {
                debug!(library = %lib_path.display(), symbol = %symbol, "symbol not exported, trying next entry");
                continue;
            };

            debug!(library = %lib_path.display(), symbol = %symbol, "resolved entry point");
            return Ok(EntryPoint::Loaded {
                name: name.to_string(),
                func,
                _lib: lib,
            });
        }

        bail!(
            "entry point '{}' not found in any of {} search location(s)",
            name,
            scope.len()
        )
    }
}

/// Load `path` and look up `symbol`. A library that exists but cannot be
/// loaded is a hard error; a loadable library without the symbol is not.
fn load_symbol(path: &Path, symbol: &str) -> anyhow::Result<Option<(Library, RawEntryFn)>> {
    // SAFETY: loading a library runs its initialisers, and the symbol is
    // trusted to match `RawEntryFn`. That trust is the entry-point
    // contract; there is no way to verify a signature across a dylib
    // boundary.
    let lib = unsafe { Library::new(path) }
        .with_context(|| format!("loading library {}", path.display()))?;
    let func = match unsafe { lib.get::<RawEntryFn>(symbol.as_bytes()) } {
        Ok(sym) => *sym,
        Err(_) => return Ok(None),
    };
    Ok(Some((lib, func)))
}
