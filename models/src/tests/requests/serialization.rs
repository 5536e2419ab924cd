use crate::{
    AccountBalanceRequest, B2cCommandId, B2cRequest, C2bCommandId, C2bRegisterRequest,
    C2bRequest, C2bResponseType, DynamicQrRequest, DynamicQrTransactionType, IdentifierType,
    ModelError, ReversalReceiverType, StkPushQueryRequest, TransactionReversalRequest,
    TransactionStatusRequest,
};

use chrono::NaiveDate;
use serde_json::{Value, json};

fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .unwrap()
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}

fn sorted(names: &[&str]) -> Vec<String> {
    let mut names: Vec<String> = names.iter().map(|name| name.to_string()).collect();
    names.sort();
    names
}

#[test]
fn given_stk_query_when_serialized_then_uses_upstream_field_names() {
    // GIVEN
    let at = NaiveDate::from_ymd_opt(2023, 12, 30)
        .unwrap()
        .and_hms_opt(15, 45, 12)
        .unwrap();
    let request = StkPushQueryRequest::at("174379", "passkey", "ws_CO_123", at);

    // WHEN
    let value = serde_json::to_value(&request).unwrap();

    // THEN
    assert_eq!(
        keys(&value),
        sorted(&[
            "BusinessShortCode",
            "Password",
            "Timestamp",
            "CheckoutRequestID"
        ])
    );
    assert_eq!(value["Timestamp"], "20231230154512");
    assert_eq!(value["CheckoutRequestID"], "ws_CO_123");
}

#[test]
fn given_c2b_register_when_serialized_then_url_fields_keep_uppercase_url_suffix() {
    let request = C2bRegisterRequest::new(
        "600984",
        C2bResponseType::Completed,
        "https://example.com/confirm",
        "https://example.com/validate",
    );

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "ShortCode": "600984",
            "ResponseType": "Completed",
            "ConfirmationURL": "https://example.com/confirm",
            "ValidationURL": "https://example.com/validate"
        })
    );
}

#[test]
fn given_c2b_transaction_when_serialized_then_matches_wire_shape() {
    let request = C2bRequest::new(
        "600984",
        C2bCommandId::CustomerBuyGoodsOnline,
        "10",
        "254708374149",
        "invoice-9",
    );

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "ShortCode": "600984",
            "CommandID": "CustomerBuyGoodsOnline",
            "Amount": "10",
            "Msisdn": "254708374149",
            "BillRefNumber": "invoice-9"
        })
    );
}

/// **VALUE**: B2C is the one operation whose `Amount` is a JSON number.
///
/// **BUG THIS CATCHES**: Sending `"Amount": "10"` here is rejected upstream
/// with a schema error.
#[test]
fn given_b2c_request_when_serialized_then_amount_is_a_number() {
    // GIVEN
    let request = B2cRequest::new(
        "testapi",
        "credential",
        B2cCommandId::BusinessPayment,
        "10",
        "600996",
        "254708374149",
        "remarks",
        "https://example.com/timeout",
        "https://example.com/result",
        "occasion",
    )
    .unwrap();

    // WHEN
    let value = serde_json::to_value(&request).unwrap();

    // THEN
    assert_eq!(value["Amount"], json!(10.0));
    assert_eq!(value["CommandID"], "BusinessPayment");
    assert_eq!(value["InitiatorName"], "testapi");
    assert_eq!(value["QueueTimeOutURL"], "https://example.com/timeout");
}

#[test]
fn given_non_numeric_b2c_amount_when_constructing_then_returns_validation_error() {
    let result = B2cRequest::new(
        "testapi",
        "credential",
        B2cCommandId::SalaryPayment,
        "ten",
        "600996",
        "254708374149",
        "remarks",
        "https://example.com/timeout",
        "https://example.com/result",
        "occasion",
    );

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => assert!(message.contains("ten")),
    }
}

#[test]
fn given_transaction_status_when_serialized_then_command_id_is_fixed() {
    let request = TransactionStatusRequest::new(
        "testapi",
        "credential",
        "OEI2AK4Q16",
        "AG_20190826_0000777ab7d848b9e721",
        "600996",
        IdentifierType::Shortcode,
        "https://example.com/result",
        "https://example.com/timeout",
        "remarks",
        "occasion",
    );

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["CommandID"], "TransactionStatusQuery");
    assert_eq!(value["IdentifierType"], "4");
    assert_eq!(
        value["OriginatorConversationId"],
        "AG_20190826_0000777ab7d848b9e721"
    );
    assert_eq!(keys(&value).len(), 11);
}

#[test]
fn given_account_balance_when_serialized_then_matches_wire_shape() {
    let request = AccountBalanceRequest::new(
        "testapi",
        "credential",
        "600996",
        IdentifierType::Shortcode,
        "remarks",
        "https://example.com/timeout",
        "https://example.com/result",
    );

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        keys(&value),
        sorted(&[
            "Initiator",
            "SecurityCredential",
            "CommandID",
            "PartyA",
            "IdentifierType",
            "Remarks",
            "QueueTimeOutURL",
            "ResultURL"
        ])
    );
    assert_eq!(value["CommandID"], "AccountBalance");
}

#[test]
fn given_reversal_with_default_receiver_when_serialized_then_identifier_is_eleven() {
    let request = TransactionReversalRequest::new(
        "testapi",
        "credential",
        "OEI2AK4Q16",
        "100",
        "600996",
        ReversalReceiverType::Default,
        "https://example.com/result",
        "https://example.com/timeout",
        "remarks",
        "occasion",
    );

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["CommandID"], "TransactionReversal");
    assert_eq!(value["ReceiverIdentifierType"], "11");
    assert_eq!(value["ReceiverParty"], "600996");
}

#[test]
fn given_dynamic_qr_when_serialized_then_uses_short_field_names() {
    let request = DynamicQrRequest::new(
        "Test Merchant",
        "invoice-1",
        "100",
        DynamicQrTransactionType::BuyGoods,
        "373132",
    );

    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(
        value,
        json!({
            "MerchantName": "Test Merchant",
            "RefNo": "invoice-1",
            "Amount": "100",
            "TrxCode": "BG",
            "CPI": "373132"
        })
    );
}
