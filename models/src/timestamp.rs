//! Daraja timestamps and the Lipa na M-Pesa password.

use common::Clock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{NaiveDateTime, TimeDelta};

/// `YYYYMMDDHHMMSS`, zero padded.
pub const DARAJA_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Daraja expects local time in Nairobi (UTC+3, no DST).
const EAST_AFRICA_UTC_OFFSET_HOURS: i64 = 3;

pub fn daraja_timestamp(at: NaiveDateTime) -> String {
    at.format(DARAJA_TIMESTAMP_FORMAT).to_string()
}

/// Current time rendered as East Africa Time.
pub fn current_daraja_timestamp(clock: &dyn Clock) -> String {
    daraja_timestamp(clock.now().naive_utc() + TimeDelta::hours(EAST_AFRICA_UTC_OFFSET_HOURS))
}

/// `base64(shortcode + passkey + timestamp)`, the Password field of STK requests.
pub fn lipa_na_mpesa_password(short_code: &str, pass_key: &str, timestamp: &str) -> String {
    STANDARD.encode(format!("{short_code}{pass_key}{timestamp}"))
}
