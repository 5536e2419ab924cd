use crate::AccessToken;

use chrono::{DateTime, TimeDelta, Utc};

fn t0() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn given_token_issued_for_an_hour_when_checked_midway_then_is_not_expired() {
    // GIVEN
    let token = AccessToken::expiring_in("tok1", t0(), 3600);

    // WHEN
    let midway = t0() + TimeDelta::seconds(1800);

    // THEN
    assert!(!token.is_expired_at(midway));
    assert_eq!(token.seconds_until_expiry(midway), 1800);
}

/// **VALUE**: A token is stale at exactly its expiry instant, not one tick later.
///
/// **BUG THIS CATCHES**: An off-by-one `>` comparison would attach a token the
/// gateway already rejects.
#[test]
fn given_token_when_checked_at_expiry_instant_then_is_expired() {
    let token = AccessToken::expiring_in("tok1", t0(), 3600);

    assert!(token.is_expired_at(t0() + TimeDelta::seconds(3600)));
    assert!(token.is_expired_at(t0() + TimeDelta::seconds(3601)));
}

#[test]
fn given_absurd_lifetime_when_building_token_then_saturates_instead_of_panicking() {
    let token = AccessToken::expiring_in("tok1", t0(), u64::MAX);

    assert!(!token.is_expired_at(t0() + TimeDelta::days(365 * 100)));
}

#[test]
fn given_token_when_debug_formatted_then_value_is_not_printed() {
    // GIVEN
    let token = AccessToken::expiring_in("abcdefghijklmnopqrstuvwxyz", t0(), 60);

    // WHEN
    let debug = format!("{token:?}");

    // THEN
    assert!(debug.contains("abcd..."));
    assert!(!debug.contains("abcdefghijklmnopqrstuvwxyz"));
}
