//! Cached bearer credential.

use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};

const PREVIEW_CHARS: usize = 4;

/// A bearer token plus the absolute instant it stops being usable.
///
/// Immutable: a refresh produces a new value, it never edits this one.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    value: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Token issued at `issued_at` that lives for `expires_in_seconds`.
    pub fn expiring_in(
        value: impl Into<String>,
        issued_at: DateTime<Utc>,
        expires_in_seconds: u64,
    ) -> Self {
        let lifetime = i64::try_from(expires_in_seconds)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        let expires_at = issued_at
            .checked_add_signed(lifetime)
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        Self::new(value, expires_at)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Stale once `now` reaches the expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn seconds_until_expiry(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds()
    }

    /// First few characters followed by an ellipsis, for diagnostics.
    pub fn preview(&self) -> String {
        if self.value.chars().count() > PREVIEW_CHARS * 2 {
            let head: String = self.value.chars().take(PREVIEW_CHARS).collect();
            format!("{head}...")
        } else {
            String::from("[short token]")
        }
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &self.preview())
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
