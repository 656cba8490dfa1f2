// src/platform/locator.rs

//! Default runtime executable resolution.
//!
//! Resolution never fails: when the conventional install location cannot be
//! probed or the probe misses, the bare command name is returned and the
//! ambient `PATH` decides at execution time.

use std::path::{Path, PathBuf};

use crate::fs::FileSystem;
use crate::platform::{OsClassifier, OsFamily};

/// How one OS family names and locates its runtime binary.
struct FamilyStrategy {
    base_name: &'static str,
    probe_home: bool,
}

fn strategy_for(os: &dyn OsClassifier) -> FamilyStrategy {
    if os.is_family(OsFamily::Netware) {
        // NetWare may have a runtime binary under the install root, but it
        // is almost never the one you want to execute. Always defer to PATH.
        FamilyStrategy {
            base_name: "java",
            probe_home: false,
        }
    } else if os.is_family(OsFamily::Windows) || os.is_family(OsFamily::Dos) {
        FamilyStrategy {
            base_name: "java.exe",
            probe_home: true,
        }
    } else {
        FamilyStrategy {
            base_name: "java",
            probe_home: true,
        }
    }
}

/// Resolve the runtime executable to use when the spec gives no explicit
/// override.
///
/// Probes `<runtime_home>/../bin/<base>`; the home metadata a runtime
/// reports is not trustworthy on every family, so a miss silently falls
/// back to the bare command name.
pub fn resolve_runtime_exe(
    os: &dyn OsClassifier,
    fs: &dyn FileSystem,
    runtime_home: Option<&Path>,
) -> PathBuf {
    let strategy = strategy_for(os);
    if !strategy.probe_home {
        return PathBuf::from(strategy.base_name);
    }

    let Some(home) = runtime_home else {
        return PathBuf::from(strategy.base_name);
    };

    let candidate = home.join("..").join("bin").join(strategy.base_name);
    if fs.is_file(&candidate) {
        fs.canonicalize(&candidate).unwrap_or(candidate)
    } else {
        PathBuf::from(strategy.base_name)
    }
}

/// Conventional runtime home of the surrounding environment, from
/// `JAVA_HOME`. `None` when unset; resolution then skips the probe.
pub fn default_runtime_home() -> Option<PathBuf> {
    std::env::var_os("JAVA_HOME").map(PathBuf::from)
}
