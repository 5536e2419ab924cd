use crate::timestamp::{current_daraja_timestamp, daraja_timestamp, lipa_na_mpesa_password};

use common::Clock;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Status check for a previously initiated STK push.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StkPushQueryRequest {
    #[serde(rename = "BusinessShortCode")]
    pub business_short_code: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "CheckoutRequestID")]
    pub checkout_request_id: String,
}

impl StkPushQueryRequest {
    /// Query stamped with the current East Africa time from `clock`.
    pub fn new(
        business_short_code: impl Into<String>,
        pass_key: &str,
        checkout_request_id: impl Into<String>,
        clock: &dyn Clock,
    ) -> Self {
        let timestamp = current_daraja_timestamp(clock);
        Self::with_timestamp(business_short_code, pass_key, checkout_request_id, timestamp)
    }

    /// Query stamped with an explicit local time.
    pub fn at(
        business_short_code: impl Into<String>,
        pass_key: &str,
        checkout_request_id: impl Into<String>,
        at: NaiveDateTime,
    ) -> Self {
        Self::with_timestamp(
            business_short_code,
            pass_key,
            checkout_request_id,
            daraja_timestamp(at),
        )
    }

    fn with_timestamp(
        business_short_code: impl Into<String>,
        pass_key: &str,
        checkout_request_id: impl Into<String>,
        timestamp: String,
    ) -> Self {
        let business_short_code = business_short_code.into();
        let password = lipa_na_mpesa_password(&business_short_code, pass_key, &timestamp);

        Self {
            business_short_code,
            password,
            timestamp,
            checkout_request_id: checkout_request_id.into(),
        }
    }
}
