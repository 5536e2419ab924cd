use crate::RedactedSecret;

/// **VALUE**: Verifies that consumer secrets never leak through Debug or Display.
///
/// **WHY THIS MATTERS**: Credentials live inside the client for its whole lifetime and the
/// client is routinely logged with `{:?}`. A leaking Debug impl would write the consumer
/// secret to every log file.
#[test]
fn given_secret_when_formatted_then_value_is_redacted() {
    // GIVEN: A secret value
    let secret = RedactedSecret::new("super-secret-consumer-value");

    // WHEN: Formatting with Debug and Display
    let debug = format!("{:?}", secret);
    let display = format!("{}", secret);

    // THEN: Neither contains the secret
    assert!(!debug.contains("super-secret"));
    assert!(!display.contains("super-secret"));
    assert_eq!(debug, "RedactedSecret([REDACTED])");
}

#[test]
fn given_secret_when_exposed_then_returns_original_value() {
    let secret = RedactedSecret::new(String::from("abc123"));

    assert_eq!(secret.expose(), "abc123");
    assert_eq!(secret.len(), 6);
    assert!(!secret.is_empty());
}

/// **BUG THIS CATCHES**: Would catch a derived `Serialize` sneaking back in, which would let
/// a settings dump or error report carry the raw secret.
#[test]
fn given_secret_when_serialized_then_returns_error() {
    let secret = RedactedSecret::new("abc123");

    let result = serde_json::to_string(&secret);

    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.contains("cannot be serialized"));
    assert!(!message.contains("abc123"));
}
