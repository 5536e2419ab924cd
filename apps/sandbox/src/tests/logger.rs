// Unit tests for logger module initialization logic
// Tests focus on idempotence and error handling

use crate::error::SandboxError;
use crate::logger::{LOG_FILE_NAME, build_dispatch, initialize};

use std::path::PathBuf;

use tempfile::TempDir;

/// **VALUE**: Verifies that calling initialize() multiple times doesn't panic or fail.
///
/// **WHY THIS MATTERS**: Demos and tests may both try to set up logging. If the
/// second call errors, the binary would abort before sending any request.
///
/// **BUG THIS CATCHES**: Would catch if the Once or AtomicBool guards are removed,
/// causing fern to fail when trying to set a global logger twice.
#[test]
fn given_logger_initialized_when_called_again_then_returns_ok() {
    // GIVEN: A valid temporary directory
    let temp_dir = TempDir::new().unwrap();

    // WHEN: Calling initialize twice
    let result1 = initialize(temp_dir.path());
    let result2 = initialize(temp_dir.path());

    // THEN: Both should return Ok (second one logs warning but doesn't error)
    assert!(result1.is_ok(), "First initialization should succeed");
    assert!(
        result2.is_ok(),
        "Second initialization should succeed (idempotent)"
    );
}

#[test]
fn given_writable_dir_when_building_dispatch_then_creates_log_file() {
    // GIVEN
    let temp_dir = TempDir::new().unwrap();

    // WHEN
    let result = build_dispatch(temp_dir.path());

    // THEN
    assert!(result.is_ok());
    assert!(temp_dir.path().join(LOG_FILE_NAME).exists());
}

/// **VALUE**: An unwritable log directory is reported, not panicked on.
///
/// **BUG THIS CATCHES**: Would catch if `fern::log_file()` is unwrapped.
#[test]
fn given_invalid_log_dir_when_building_dispatch_then_returns_error() {
    // GIVEN: A path under a device file, which can never be a directory
    let invalid_dir = PathBuf::from("/dev/null/invalid-path");

    // WHEN
    let result = build_dispatch(&invalid_dir);

    // THEN
    match result {
        Err(SandboxError::Sandbox { message, .. }) => {
            assert!(message.contains("Failed to create log file"));
        }
        Err(other) => panic!("expected Sandbox error, got {other:?}"),
        Ok(_) => panic!("expected an error for an unwritable directory"),
    }
}
