// tests/dylib_resolver.rs

//! Error paths of classpath-scoped resolution. Happy-path symbol lookup
//! needs a compiled cdylib and is exercised by embedders; here we pin down
//! the load-failure taxonomy.

use std::path::PathBuf;
use std::sync::Arc;

use jexec::fs::mock::MockFileSystem;
use jexec::load::{DylibResolver, EntryPointResolver};

#[test]
fn test_empty_scope_is_an_error() {
    let resolver = DylibResolver::new();
    let err = resolver.resolve("com.example.Main", &[]).unwrap_err();
    assert!(err.to_string().contains("no search locations"));
}

#[test]
fn test_scope_without_candidate_library_reports_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let scope = vec![tmp.path().to_path_buf()];

    let resolver = DylibResolver::new();
    let err = resolver.resolve("com.example.Main", &scope).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_unloadable_library_file_is_a_hard_error() {
    // The mock claims the file exists, so the resolver commits to loading
    // it; the real loader then fails.
    let fs = MockFileSystem::new();
    fs.add_file("/srv/libmissing.so");
    let scope = vec![PathBuf::from("/srv/libmissing.so")];

    let resolver = DylibResolver::with_fs(Arc::new(fs));
    let err = resolver.resolve("com.example.Main", &scope).unwrap_err();
    assert!(err.to_string().contains("loading library"));
}
