//! Test helpers for driving the client against a wiremock gateway.
//!
//! - A manually advanced clock for expiry scenarios
//! - Token endpoint mounting with the expected Basic credentials
//! - Request counting per path

use common::Clock;
use models::{AccessToken, StkPushRequest, StkPushTransactionType};
use mpesa_client::{Credentials, InMemoryTokenStore, MpesaClient};

use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN_PATH: &str = "/oauth/v1/generate";
pub const STK_PUSH_PATH: &str = "/mpesa/stkpush/v1/processrequest";

pub const CONSUMER_KEY: &str = "test_consumer_key";
pub const CONSUMER_SECRET: &str = "test_consumer_secret";
/// `Basic base64("test_consumer_key:test_consumer_secret")`
pub const EXPECTED_BASIC_AUTH: &str =
    "Basic dGVzdF9jb25zdW1lcl9rZXk6dGVzdF9jb25zdW1lcl9zZWNyZXQ=";

pub const SHORT_CODE: &str = "174379";
pub const PASS_KEY: &str = "bfb279f9aa9bdbcf158e97dd71a467cd2e0c893059b10f78e6b72ada1ed2c919";
pub const PHONE: &str = "254708374149";

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn starting_at(start: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self {
            now: Mutex::new(start),
        })
    }

    pub fn advance_secs(&self, seconds: i64) {
        let mut now = self.now.lock().unwrap();
        *now += TimeDelta::seconds(seconds);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

pub fn t0() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn test_credentials() -> Credentials {
    Credentials::new(CONSUMER_KEY, CONSUMER_SECRET).unwrap()
}

pub fn token_body(access_token: &str) -> Value {
    json!({ "access_token": access_token, "expires_in": "3600" })
}

fn token_mock(access_token: &str) -> Mock {
    Mock::given(method("GET"))
        .and(path(TOKEN_PATH))
        .and(query_param("grant_type", "client_credentials"))
        .and(header("Authorization", EXPECTED_BASIC_AUTH))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body(access_token)))
}

/// Token endpoint that must be hit exactly `expected` times.
pub async fn mount_token_endpoint(server: &MockServer, access_token: &str, expected: u64) {
    token_mock(access_token)
        .expect(expected)
        .mount(server)
        .await;
}

/// Token endpoint that serves `access_token` once, then falls through.
pub async fn mount_token_once(server: &MockServer, access_token: &str) {
    token_mock(access_token)
        .up_to_n_times(1)
        .expect(1)
        .mount(server)
        .await;
}

pub fn client_for(server: &MockServer, clock: Arc<ManualClock>) -> MpesaClient {
    MpesaClient::builder(test_credentials())
        .with_base_url(server.uri())
        .with_clock(clock)
        .build()
        .unwrap()
}

/// Client whose store already holds `access_token`, valid for an hour from `t0()`.
pub fn seeded_client_for(base_url: &str, access_token: &str) -> MpesaClient {
    let store = InMemoryTokenStore::with_token(AccessToken::expiring_in(access_token, t0(), 3600));

    MpesaClient::builder(test_credentials())
        .with_base_url(base_url)
        .with_clock(ManualClock::starting_at(t0()))
        .with_token_store(Arc::new(store))
        .build()
        .unwrap()
}

pub async fn count_requests(server: &MockServer, request_path: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == request_path)
        .count()
}

/// `Authorization` header of the last request sent to `request_path`.
pub async fn last_authorization(server: &MockServer, request_path: &str) -> Option<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .filter(|request| request.url.path() == request_path)
        .last()
        .and_then(|request| request.headers.get("authorization"))
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

pub fn sample_stk_push() -> StkPushRequest {
    StkPushRequest::builder()
        .with_business_short_code(SHORT_CODE)
        .with_pass_key(PASS_KEY)
        .with_timestamp(
            NaiveDate::from_ymd_opt(2023, 12, 30)
                .unwrap()
                .and_hms_opt(15, 45, 12)
                .unwrap(),
        )
        .with_transaction_type(StkPushTransactionType::CustomerPayBillOnline)
        .with_amount("1")
        .with_phone_number(PHONE)
        .with_callback_url("https://example.com/callback")
        .with_account_reference("Test")
        .with_transaction_desc("Test payment")
        .build()
        .unwrap()
}

pub fn stk_ok_body() -> Value {
    json!({
        "MerchantRequestID": "29115-34620561-1",
        "CheckoutRequestID": "ws_CO_191220191020363925",
        "ResponseCode": "0",
        "ResponseDescription": "Success. Request accepted for processing",
        "CustomerMessage": "Success. Request accepted for processing"
    })
}

pub fn conversation_ok_body() -> Value {
    json!({
        "ConversationID": "AG_20191219_00005797af5d7d75f652",
        "OriginatorConversationID": "16740-34861180-1",
        "ResponseCode": "0",
        "ResponseDescription": "Accept the service request successfully."
    })
}
