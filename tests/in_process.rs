// tests/in_process.rs

use std::fmt;
use std::sync::{Arc, Mutex};

use jexec::LaunchError;
use jexec::launcher::Launcher;
use jexec::load::EntryPointRegistry;
use jexec_test_utils::builders::LaunchSpecBuilder;
use jexec_test_utils::mocks::RecordingSink;

/// Error type a test target raises, so cause identity can be asserted.
#[derive(Debug)]
struct TargetFailure {
    code: u32,
}

impl fmt::Display for TargetFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "target failure {}", self.code)
    }
}

impl std::error::Error for TargetFailure {}

#[test]
fn test_registered_entry_point_receives_program_args() {
    let registry = EntryPointRegistry::new();
    let received: Arc<Mutex<Vec<String>>> = Arc::default();
    {
        let received = Arc::clone(&received);
        registry.register("com.example.Main", move |args: &[String]| {
            received.lock().unwrap().extend(args.iter().cloned());
            Ok(())
        });
    }

    let mut launcher = Launcher::new().with_resolver(registry);
    let spec = LaunchSpecBuilder::new()
        .entry_point("com.example.Main")
        .program_arg("x")
        .program_arg("y")
        .build();

    let result = launcher.execute(&spec).unwrap();
    assert_eq!(result, None, "non-forked mode yields no exit code");
    assert_eq!(*received.lock().unwrap(), vec!["x".to_string(), "y".to_string()]);
}

#[test]
fn test_unknown_entry_point_is_load_error_and_nothing_runs() {
    let registry = EntryPointRegistry::new();
    let invoked = Arc::new(Mutex::new(false));
    {
        let invoked = Arc::clone(&invoked);
        registry.register("com.example.Main", move |_args: &[String]| {
            *invoked.lock().unwrap() = true;
            Ok(())
        });
    }

    let mut launcher = Launcher::new().with_resolver(registry);
    let spec = LaunchSpecBuilder::new().entry_point("com.example.Other").build();

    match launcher.execute(&spec) {
        Err(LaunchError::Load { name, .. }) => assert_eq!(name, "com.example.Other"),
        other => panic!("Expected Load error, got: {:?}", other.map(|_| ())),
    }
    assert!(!*invoked.lock().unwrap());
}

#[test]
fn test_target_failure_surfaces_as_cause() {
    let registry = EntryPointRegistry::new();
    registry.register("com.example.Failing", |_args: &[String]| {
        Err(Box::new(TargetFailure { code: 42 }) as Box<dyn std::error::Error + Send + Sync>)
    });

    let mut launcher = Launcher::new().with_resolver(registry);
    let spec = LaunchSpecBuilder::new().entry_point("com.example.Failing").build();

    match launcher.execute(&spec) {
        Err(LaunchError::TargetExecution { name, source }) => {
            assert_eq!(name, "com.example.Failing");
            // The cause must be the target's own error value, not a wrapper.
            let cause = source
                .downcast_ref::<TargetFailure>()
                .expect("cause should downcast to the target's error type");
            assert_eq!(cause.code, 42);
        }
        other => panic!("Expected TargetExecution error, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_panicking_target_surfaces_as_target_execution_error() {
    let registry = EntryPointRegistry::new();
    registry.register("com.example.Panicking", |_args: &[String]| {
        panic!("boom");
    });

    let mut launcher = Launcher::new().with_resolver(registry);
    let spec = LaunchSpecBuilder::new()
        .entry_point("com.example.Panicking")
        .build();

    match launcher.execute(&spec) {
        Err(LaunchError::TargetExecution { source, .. }) => {
            assert!(source.to_string().contains("panicked"));
            assert!(source.to_string().contains("boom"));
        }
        other => panic!("Expected TargetExecution error, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_archive_in_non_forked_mode_is_config_error() {
    let mut launcher = Launcher::new();
    let spec = LaunchSpecBuilder::new()
        .entry_point("Main")
        .archive("/srv/app.jar")
        .build();

    match launcher.execute(&spec) {
        Err(LaunchError::Config(msg)) => {
            assert!(msg.contains("non-forked"));
        }
        other => panic!("Expected Config error, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_archive_without_entry_point_is_still_config_error() {
    let mut launcher = Launcher::new();
    let spec = LaunchSpecBuilder::new().archive("/srv/app.jar").build();

    assert!(matches!(
        launcher.execute(&spec),
        Err(LaunchError::Config(_))
    ));
}

#[test]
fn test_forked_only_fields_warn_but_do_not_fail() {
    let registry = EntryPointRegistry::new();
    let invoked = Arc::new(Mutex::new(false));
    {
        let invoked = Arc::clone(&invoked);
        registry.register("com.example.Main", move |_args: &[String]| {
            *invoked.lock().unwrap() = true;
            Ok(())
        });
    }

    let sink = RecordingSink::new();
    let mut launcher = Launcher::new()
        .with_resolver(registry)
        .with_sink(sink.clone());

    let spec = LaunchSpecBuilder::new()
        .entry_point("com.example.Main")
        .runtime_arg("-verbose")
        .working_dir("/srv")
        .property("os.name", "test")
        .build();

    launcher.execute(&spec).unwrap();

    let warnings = sink.warnings();
    assert_eq!(warnings.len(), 3, "one advisory per ignored field: {warnings:?}");
    assert!(*invoked.lock().unwrap(), "the entry point still runs");
}
