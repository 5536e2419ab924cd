use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line, and column.
///
/// **WHY THIS MATTERS**: Every client error embeds an ErrorLocation. If capture breaks,
/// a failed STK push reports no usable position.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN: The current line
    let expected_line = line!() + 3;

    // WHEN: Creating ErrorLocation from caller
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should capture file, line, and column
    assert!(location.file.contains("error_location.rs"));
    assert_eq!(location.line, expected_line);
    assert!(location.column > 0);
}

#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    let location = ErrorLocation {
        file: "backend/mpesa-client/src/auth/mod.rs",
        line: 42,
        column: 9,
    };

    assert_eq!(
        location.to_string(),
        "[backend/mpesa-client/src/auth/mod.rs:42:9]"
    );
}

/// **VALUE**: Verifies that `#[track_caller]` propagation yields distinct call sites.
///
/// **BUG THIS CATCHES**: Would catch if `#[track_caller]` is dropped from an error
/// constructor, making every error point at the constructor itself.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    let first = capture_location();
    let second = capture_location();

    assert_eq!(first.file, second.file);
    assert_eq!(first.line + 1, second.line);
}
