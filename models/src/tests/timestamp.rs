use crate::{current_daraja_timestamp, daraja_timestamp, lipa_na_mpesa_password};

use common::Clock;

use chrono::{DateTime, NaiveDate, Utc};

const SHORT_CODE: &str = "174379";
const PASS_KEY: &str = "bfb279f9aa9bdbcf158e97dd71a467cd2e0c893059b10f78e6b72ada1ed2c919";

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[test]
fn given_local_datetime_when_formatting_then_renders_fourteen_digits() {
    // GIVEN
    let at = NaiveDate::from_ymd_opt(2023, 12, 30)
        .unwrap()
        .and_hms_opt(15, 45, 12)
        .unwrap();

    // WHEN
    let timestamp = daraja_timestamp(at);

    // THEN
    assert_eq!(timestamp, "20231230154512");
}

#[test]
fn given_single_digit_fields_when_formatting_then_zero_pads_them() {
    let at = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();

    assert_eq!(daraja_timestamp(at), "20240102030405");
}

/// **VALUE**: Daraja validates the timestamp against Nairobi wall-clock time.
///
/// **BUG THIS CATCHES**: Rendering UTC directly puts every request three hours
/// in the past, which the gateway rejects as an invalid timestamp.
#[test]
fn given_utc_clock_when_rendering_current_timestamp_then_shifts_to_east_africa_time() {
    // GIVEN
    let clock = FixedClock(
        DateTime::parse_from_rfc3339("2023-12-30T22:30:00Z")
            .unwrap()
            .with_timezone(&Utc),
    );

    // WHEN
    let timestamp = current_daraja_timestamp(&clock);

    // THEN
    assert_eq!(timestamp, "20231231013000");
}

#[test]
fn given_sandbox_shortcode_and_passkey_when_deriving_password_then_matches_known_value() {
    // WHEN
    let password = lipa_na_mpesa_password(SHORT_CODE, PASS_KEY, "20231230154512");

    // THEN
    assert_eq!(
        password,
        "MTc0Mzc5YmZiMjc5ZjlhYTliZGJjZjE1OGU5N2RkNzFhNDY3Y2QyZTBjODkzMDU5YjEwZjc4ZTZiNzJhZGExZWQyYzkxOTIwMjMxMjMwMTU0NTEy"
    );
}
