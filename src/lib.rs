// src/lib.rs

//! `jexec` — dual-mode launcher for JVM-style programs, used by the
//! surrounding task framework to run a configured target either
//!
//! - **forked**: as a subprocess of a runtime executable, with a
//!   byte-for-byte deterministic command line, or
//! - **non-forked**: in the current process, by resolving and invoking the
//!   target's entry function directly.
//!
//! ```no_run
//! use jexec::{LaunchSpec, Launcher};
//!
//! let mut spec = LaunchSpec::new();
//! spec.entry_point = Some("com.example.Main".to_string());
//! spec.forked = true;
//! spec.max_memory = Some("512m".to_string());
//! spec.add_program_arg("--verbose");
//!
//! let _exit_code = Launcher::new().execute(&spec)?;
//! # Ok::<(), jexec::LaunchError>(())
//! ```

pub mod errors;
pub mod exec;
pub mod fs;
pub mod invocation;
pub mod launcher;
pub mod load;
pub mod logging;
pub mod platform;
pub mod spec;

pub use errors::{LaunchError, Result};
pub use launcher::Launcher;
pub use spec::{LaunchSpec, Property};
