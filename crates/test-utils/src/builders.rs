#![allow(dead_code)]

use std::path::PathBuf;

use jexec::spec::LaunchSpec;

/// Builder for `LaunchSpec` to simplify test setup.
pub struct LaunchSpecBuilder {
    spec: LaunchSpec,
}

impl LaunchSpecBuilder {
    pub fn new() -> Self {
        Self {
            spec: LaunchSpec::new(),
        }
    }

    pub fn entry_point(mut self, name: &str) -> Self {
        self.spec.entry_point = Some(name.to_string());
        self
    }

    pub fn archive(mut self, path: &str) -> Self {
        self.spec.archive = Some(PathBuf::from(path));
        self
    }

    pub fn class_path(mut self, entry: &str) -> Self {
        self.spec.class_path.push(PathBuf::from(entry));
        self
    }

    pub fn program_arg(mut self, arg: &str) -> Self {
        self.spec.program_args.push(arg.to_string());
        self
    }

    pub fn runtime_arg(mut self, arg: &str) -> Self {
        self.spec.runtime_args.push(arg.to_string());
        self
    }

    pub fn property(mut self, name: &str, value: &str) -> Self {
        self.spec.add_property(name, value);
        self
    }

    pub fn forked(mut self, forked: bool) -> Self {
        self.spec.forked = forked;
        self
    }

    pub fn working_dir(mut self, dir: &str) -> Self {
        self.spec.working_dir = Some(PathBuf::from(dir));
        self
    }

    pub fn runtime_exe(mut self, exe: &str) -> Self {
        self.spec.runtime_exe = Some(PathBuf::from(exe));
        self
    }

    pub fn max_memory(mut self, value: &str) -> Self {
        self.spec.max_memory = Some(value.to_string());
        self
    }

    pub fn ignore_exit_code(mut self, ignore: bool) -> Self {
        self.spec.ignore_exit_code = ignore;
        self
    }

    pub fn build(self) -> LaunchSpec {
        self.spec
    }
}

impl Default for LaunchSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}
