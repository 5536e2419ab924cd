use crate::auth::credentials::{CONSUMER_KEY_ENV, CONSUMER_SECRET_ENV};
use crate::{CredentialError, CredentialFailure, Credentials};

use serial_test::serial;

#[test]
fn given_key_and_secret_when_building_basic_header_then_encodes_pair() {
    // GIVEN
    let credentials = Credentials::new("key", "secret").unwrap();

    // WHEN
    let header = credentials.basic_auth_header();

    // THEN
    assert_eq!(header, "Basic a2V5OnNlY3JldA==");
}

/// **VALUE**: A colon in the consumer key is rejected up front.
///
/// **WHY THIS MATTERS**: Basic auth splits `user:password` on the first
/// colon. The gateway would read a different key than the one configured and
/// answer with an opaque 400.
#[test]
fn given_key_with_colon_when_creating_credentials_then_rejected() {
    let result = Credentials::new("ab:cd", "secret");

    assert_eq!(
        result.unwrap_err().failure(),
        Some(&CredentialFailure::ContainsColon)
    );
}

#[test]
fn given_colon_in_secret_when_creating_credentials_then_accepted() {
    assert!(Credentials::new("key", "se:cret").is_ok());
}

#[test]
fn given_blank_secret_when_creating_credentials_then_rejected_as_empty() {
    let error = Credentials::new("key", "   ").unwrap_err();

    assert_eq!(error.failure(), Some(&CredentialFailure::Empty));
    assert!(error.to_string().contains("consumer_secret"));
}

#[test]
fn given_embedded_whitespace_when_creating_credentials_then_rejected() {
    let error = Credentials::new("my key", "secret").unwrap_err();

    assert_eq!(error.failure(), Some(&CredentialFailure::ContainsWhitespace));
}

#[test]
fn given_placeholder_value_when_creating_credentials_then_rejected() {
    let error = Credentials::new("your-consumer-key", "secret").unwrap_err();

    assert!(matches!(
        error.failure(),
        Some(CredentialFailure::PlaceholderDetected { .. })
    ));
}

#[test]
fn given_bracketed_or_repeated_value_when_creating_credentials_then_rejected() {
    for secret in ["<your-consumer-secret>", "abc...", "xxxxxxxxxxxx"] {
        let error = Credentials::new("key", secret).unwrap_err();

        assert!(
            matches!(
                error.failure(),
                Some(CredentialFailure::PlaceholderDetected { .. })
            ),
            "{secret} should be rejected"
        );
    }
}

/// **VALUE**: Real generated keys are never mistaken for placeholders.
///
/// **BUG THIS CATCHES**: Substring matching rejected random keys that happen
/// to contain `xxx` or `replace`, so the client could not be built at all.
#[test]
fn given_random_key_containing_placeholder_words_when_creating_credentials_then_accepted() {
    assert!(Credentials::new("GvzjNnYgNJtwgwfLBkZh65VPwfuKvs0V", "aXxxQ8replaceZ2k9").is_ok());
    assert!(Credentials::new("Placeholder7Kq2", "ChangeMeNot93xd").is_ok());
}

#[test]
fn given_credentials_when_debug_formatted_then_values_are_hidden() {
    let credentials = Credentials::new("visible_key_value", "visible_secret_value").unwrap();

    let debug = format!("{credentials:?}");

    assert!(!debug.contains("visible_key_value"));
    assert!(!debug.contains("visible_secret_value"));
}

#[test]
#[serial]
fn given_env_vars_set_when_loading_from_env_then_returns_credentials() {
    // GIVEN
    // SAFETY: serialized with every other test touching the environment
    unsafe {
        std::env::set_var(CONSUMER_KEY_ENV, "env_key");
        std::env::set_var(CONSUMER_SECRET_ENV, "env_secret");
    }

    // WHEN
    let result = Credentials::from_env();

    // THEN
    unsafe {
        std::env::remove_var(CONSUMER_KEY_ENV);
        std::env::remove_var(CONSUMER_SECRET_ENV);
    }
    let credentials = result.unwrap();
    assert_eq!(credentials.consumer_key().expose(), "env_key");
}

#[test]
#[serial]
fn given_missing_key_var_when_loading_from_env_then_reports_variable_name() {
    // GIVEN
    unsafe {
        std::env::remove_var(CONSUMER_KEY_ENV);
        std::env::set_var(CONSUMER_SECRET_ENV, "env_secret");
    }

    // WHEN
    let result = Credentials::from_env();

    // THEN
    unsafe {
        std::env::remove_var(CONSUMER_SECRET_ENV);
    }
    match result.unwrap_err() {
        CredentialError::Missing { variable, .. } => assert_eq!(variable, CONSUMER_KEY_ENV),
        other => panic!("expected Missing, got {other:?}"),
    }
}
