use std::sync::{Arc, Mutex};

use jexec::logging::AdvisorySink;
use jexec::platform::{OsClassifier, OsFamily};

/// Scripted OS classifier: reports membership of exactly the families it
/// was constructed with.
#[derive(Debug, Clone, Default)]
pub struct MockOs {
    families: Vec<OsFamily>,
}

impl MockOs {
    pub fn of(families: &[OsFamily]) -> Self {
        Self {
            families: families.to_vec(),
        }
    }
}

impl OsClassifier for MockOs {
    fn is_family(&self, family: OsFamily) -> bool {
        self.families.contains(&family)
    }
}

/// Advisory sink that records every message for later assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    warnings: Arc<Mutex<Vec<String>>>,
    debugs: Arc<Mutex<Vec<String>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn debugs(&self) -> Vec<String> {
        self.debugs.lock().unwrap().clone()
    }
}

impl AdvisorySink for RecordingSink {
    fn warn(&self, msg: &str) {
        self.warnings.lock().unwrap().push(msg.to_string());
    }

    fn debug(&self, msg: &str) {
        self.debugs.lock().unwrap().push(msg.to_string());
    }
}
