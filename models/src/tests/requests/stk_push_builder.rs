use crate::{ModelError, StkPushRequest, StkPushRequestBuilder, StkPushTransactionType};

use chrono::{NaiveDate, NaiveDateTime};

const SHORT_CODE: &str = "174379";
const PASS_KEY: &str = "bfb279f9aa9bdbcf158e97dd71a467cd2e0c893059b10f78e6b72ada1ed2c919";
const PHONE: &str = "254708374149";

fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 12, 30)
        .unwrap()
        .and_hms_opt(15, 45, 12)
        .unwrap()
}

fn complete_builder() -> StkPushRequestBuilder {
    StkPushRequest::builder()
        .with_business_short_code(SHORT_CODE)
        .with_pass_key(PASS_KEY)
        .with_timestamp(fixed_time())
        .with_transaction_type(StkPushTransactionType::CustomerPayBillOnline)
        .with_amount("1")
        .with_phone_number(PHONE)
        .with_callback_url("https://example.com/callback")
        .with_account_reference("Test")
        .with_transaction_desc("Test payment")
}

/// **VALUE**: Password and Timestamp are derived from the same instant.
///
/// **WHY THIS MATTERS**: Daraja recomputes the password from the submitted
/// timestamp. If the two were sampled separately they could straddle a second
/// boundary and the request would be rejected as unauthenticated.
#[test]
fn given_fixed_time_when_building_stk_push_then_password_and_timestamp_agree() {
    // GIVEN
    let builder = complete_builder();

    // WHEN
    let request = builder.build().unwrap();

    // THEN
    assert_eq!(request.timestamp, "20231230154512");
    assert_eq!(
        request.password,
        "MTc0Mzc5YmZiMjc5ZjlhYTliZGJjZjE1OGU5N2RkNzFhNDY3Y2QyZTBjODkzMDU5YjEwZjc4ZTZiNzJhZGExZWQyYzkxOTIwMjMxMjMwMTU0NTEy"
    );
    assert_eq!(request.transaction_type, "CustomerPayBillOnline");
}

#[test]
fn given_no_parties_when_building_then_party_a_is_phone_and_party_b_is_shortcode() {
    let request = complete_builder().build().unwrap();

    assert_eq!(request.party_a, PHONE);
    assert_eq!(request.party_b, SHORT_CODE);
}

#[test]
fn given_explicit_parties_when_building_then_they_are_kept() {
    let request = complete_builder()
        .with_party_a("254700000000")
        .with_party_b("600000")
        .build()
        .unwrap();

    assert_eq!(request.party_a, "254700000000");
    assert_eq!(request.party_b, "600000");
}

#[test]
fn given_missing_pass_key_when_building_then_returns_validation_error() {
    // GIVEN
    let builder = StkPushRequest::builder()
        .with_business_short_code(SHORT_CODE)
        .with_transaction_type(StkPushTransactionType::CustomerPayBillOnline)
        .with_amount("1")
        .with_phone_number(PHONE)
        .with_callback_url("https://example.com/callback")
        .with_account_reference("Test")
        .with_transaction_desc("Test payment");

    // WHEN
    let result = builder.build();

    // THEN
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Pass key is required");
        }
    }
}

#[test]
fn given_blank_amount_when_building_then_returns_validation_error() {
    let result = complete_builder().with_amount("   ").build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Amount cannot be empty");
        }
    }
}

#[test]
fn given_callback_without_scheme_when_building_then_returns_validation_error() {
    let result = complete_builder()
        .with_callback_url("example.com/callback")
        .build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert!(message.contains("Invalid callback URL format"));
        }
    }
}

#[test]
fn given_builder_with_pass_key_when_debug_formatted_then_pass_key_is_redacted() {
    let debug = format!("{:?}", complete_builder());

    assert!(!debug.contains(PASS_KEY));
    assert!(debug.contains("[REDACTED]"));
}
