// tests/invocation_properties.rs

//! Structural properties of command assembly over generated specs.

use proptest::prelude::*;

use jexec::fs::mock::MockFileSystem;
use jexec::invocation::build_command;
use jexec::platform::OsFamily;
use jexec::spec::{LaunchSpec, Property};
use jexec_test_utils::mocks::MockOs;

fn arg_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9./=-]{1,12}"
}

fn spec_strategy() -> impl Strategy<Value = LaunchSpec> {
    (
        proptest::collection::vec(arg_strategy(), 0..4),
        proptest::collection::vec(arg_strategy(), 0..4),
        proptest::collection::vec(("[a-z.]{1,8}", "[a-z0-9]{1,8}"), 0..4),
        proptest::collection::vec("/[a-z]{1,8}", 0..4),
        proptest::option::of("[0-9]{1,4}m"),
        any::<bool>(),
    )
        .prop_map(
            |(runtime_args, program_args, props, class_path, max_memory, use_archive)| {
                let mut spec = LaunchSpec::new();
                spec.runtime_exe = Some("/jvm/bin/java".into());
                spec.runtime_args = runtime_args;
                spec.program_args = program_args;
                spec.properties = props
                    .into_iter()
                    .map(|(name, value)| Property { name, value })
                    .collect();
                spec.class_path = class_path.into_iter().map(Into::into).collect();
                spec.max_memory = max_memory;
                if use_archive {
                    spec.archive = Some("/srv/app.jar".into());
                } else {
                    spec.entry_point = Some("Main".to_string());
                }
                spec
            },
        )
}

proptest! {
    #[test]
    fn prop_building_twice_is_identical(spec in spec_strategy()) {
        let os = MockOs::of(&[OsFamily::Unix]);
        let fs = MockFileSystem::new();
        prop_assert_eq!(
            build_command(&spec, &os, &fs, None),
            build_command(&spec, &os, &fs, None)
        );
    }

    #[test]
    fn prop_runtime_exe_always_first(spec in spec_strategy()) {
        let command = build_command(&spec, &MockOs::of(&[OsFamily::Unix]), &MockFileSystem::new(), None);
        prop_assert_eq!(command[0].as_str(), "/jvm/bin/java");
    }

    #[test]
    fn prop_classpath_flag_iff_classpath_nonempty(spec in spec_strategy()) {
        let command = build_command(&spec, &MockOs::of(&[OsFamily::Unix]), &MockFileSystem::new(), None);
        let has_flag = command.iter().any(|a| a == "-classpath");
        prop_assert_eq!(has_flag, !spec.class_path.is_empty());
    }

    #[test]
    fn prop_program_args_form_ordered_suffix(spec in spec_strategy()) {
        let command = build_command(&spec, &MockOs::of(&[OsFamily::Unix]), &MockFileSystem::new(), None);
        let n = spec.program_args.len();
        prop_assert_eq!(&command[command.len() - n..], spec.program_args.as_slice());
    }

    #[test]
    fn prop_runtime_args_follow_executable_in_order(spec in spec_strategy()) {
        let command = build_command(&spec, &MockOs::of(&[OsFamily::Unix]), &MockFileSystem::new(), None);
        let n = spec.runtime_args.len();
        prop_assert_eq!(&command[1..1 + n], spec.runtime_args.as_slice());
    }

    #[test]
    fn prop_target_selector_sits_between_flags_and_program_args(spec in spec_strategy()) {
        let command = build_command(&spec, &MockOs::of(&[OsFamily::Unix]), &MockFileSystem::new(), None);

        // Selector position follows structurally from the fixed flag order.
        let mut pos = 1 + spec.runtime_args.len() + spec.properties.len();
        if spec.max_memory.is_some() {
            pos += 1;
        }
        if !spec.class_path.is_empty() {
            pos += 2;
        }

        let skip = if spec.archive.is_some() {
            prop_assert_eq!(command[pos].as_str(), "-jar");
            prop_assert_eq!(command[pos + 1].as_str(), "/srv/app.jar");
            2
        } else {
            prop_assert_eq!(command[pos].as_str(), "Main");
            1
        };
        prop_assert_eq!(&command[pos + skip..], spec.program_args.as_slice());
    }
}
