// src/load/registry.rs

//! Explicit entry-point registration.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::bail;

use crate::load::{EntryError, EntryFn, EntryPoint, EntryPointResolver};

/// Ambient lookup context for statically linked units.
///
/// The embedding framework registers entry functions by name at startup;
/// the loader consults the registry whenever a spec carries no classpath.
/// Cloning shares the underlying table.
#[derive(Clone, Default)]
pub struct EntryPointRegistry {
    entries: Arc<Mutex<HashMap<String, EntryFn>>>,
}

impl EntryPointRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `func` as the entry point for `name`. A later registration
    /// under the same name replaces the earlier one.
    pub fn register<F>(&self, name: impl Into<String>, func: F)
    where
        F: Fn(&[String]) -> Result<(), EntryError> + Send + Sync + 'static,
    {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(name.into(), Arc::new(func));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.lock().unwrap().contains_key(name)
    }
}

impl std::fmt::Debug for EntryPointRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self.entries.lock().unwrap();
        let mut names: Vec<&String> = entries.keys().collect();
        names.sort();
        f.debug_struct("EntryPointRegistry")
            .field("entries", &names)
            .finish()
    }
}

impl EntryPointResolver for EntryPointRegistry {
    fn resolve(&self, name: &str, _scope: &[PathBuf]) -> anyhow::Result<EntryPoint> {
        let entries = self.entries.lock().unwrap();
        let Some(func) = entries.get(name) else {
            bail!("no entry point registered under '{name}'");
        };
        Ok(EntryPoint::Registered {
            name: name.to_string(),
            func: Arc::clone(func),
        })
    }
}
