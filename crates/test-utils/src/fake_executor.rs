use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use jexec::errors::Result;
use jexec::exec::{Invocation, ProcessExecutor};

/// A fake process executor that:
/// - records every invocation it receives (command, working dir, flags)
/// - returns scripted exit codes instead of spawning real processes.
///
/// Unscripted runs return exit code 0. The fake applies no exit-code
/// policy of its own; it reports whatever was scripted so tests can check
/// how the launcher forwards codes.
#[derive(Debug, Clone, Default)]
pub struct FakeExecutor {
    invocations: Arc<Mutex<Vec<Invocation>>>,
    exit_codes: Arc<Mutex<VecDeque<i32>>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an exit code for the next run.
    pub fn script_exit_code(&self, code: i32) {
        self.exit_codes.lock().unwrap().push_back(code);
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn run_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

impl ProcessExecutor for FakeExecutor {
    fn run(&mut self, invocation: &Invocation) -> Result<i32> {
        self.invocations.lock().unwrap().push(invocation.clone());
        let code = self.exit_codes.lock().unwrap().pop_front().unwrap_or(0);
        Ok(code)
    }
}
