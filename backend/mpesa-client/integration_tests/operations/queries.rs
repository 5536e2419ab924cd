use crate::helpers::{PASS_KEY, SHORT_CODE, conversation_ok_body, seeded_client_for};

use models::{
    AccountBalanceRequest, DynamicQrRequest, DynamicQrTransactionType, IdentifierType,
    ReversalReceiverType, StkPushQueryRequest, TransactionReversalRequest,
    TransactionStatusRequest,
};

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_ok(server: &MockServer, endpoint: &str, expected_body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(endpoint))
        .and(body_partial_json(expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(conversation_ok_body()))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn given_stk_query_when_sent_then_decodes_result_fields() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mpesa/stkpushquery/v1/query"))
        .and(body_partial_json(json!({
            "BusinessShortCode": SHORT_CODE,
            "Timestamp": "20231230154512",
            "CheckoutRequestID": "ws_CO_191220191020363925"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ResponseCode": "0",
            "ResponseDescription": "The service request has been accepted successsfully",
            "MerchantRequestID": "29115-34620561-1",
            "CheckoutRequestID": "ws_CO_191220191020363925",
            "ResultCode": "1032",
            "ResultDesc": "Request cancelled by user"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = seeded_client_for(&server.uri(), "tok1");
    let at = NaiveDate::from_ymd_opt(2023, 12, 30)
        .unwrap()
        .and_hms_opt(15, 45, 12)
        .unwrap();
    let request = StkPushQueryRequest::at(SHORT_CODE, PASS_KEY, "ws_CO_191220191020363925", at);

    // WHEN
    let response = client.query_stk_push_status(&request).await.unwrap();

    // THEN
    assert_eq!(response.result_code, "1032");
    assert_eq!(response.result_desc, "Request cancelled by user");
}

#[tokio::test]
async fn given_transaction_status_when_sent_then_posts_status_query() {
    let server = MockServer::start().await;
    mount_ok(
        &server,
        "/mpesa/transactionstatus/v1/query",
        json!({
            "CommandID": "TransactionStatusQuery",
            "TransactionID": "OEI2AK4Q16",
            "IdentifierType": "4"
        }),
    )
    .await;
    let client = seeded_client_for(&server.uri(), "tok1");
    let request = TransactionStatusRequest::new(
        "testapi",
        "encrypted-credential",
        "OEI2AK4Q16",
        "",
        "600996",
        IdentifierType::Shortcode,
        "https://example.com/status/result",
        "https://example.com/status/timeout",
        "Status check",
        "",
    );

    let response = client.transaction_status(&request).await.unwrap();

    assert_eq!(response.response_code, "0");
}

#[tokio::test]
async fn given_account_balance_when_sent_then_posts_balance_query() {
    let server = MockServer::start().await;
    mount_ok(
        &server,
        "/mpesa/accountbalance/v1/query",
        json!({ "CommandID": "AccountBalance", "PartyA": "600996" }),
    )
    .await;
    let client = seeded_client_for(&server.uri(), "tok1");
    let request = AccountBalanceRequest::new(
        "testapi",
        "encrypted-credential",
        "600996",
        IdentifierType::Shortcode,
        "Balance check",
        "https://example.com/balance/timeout",
        "https://example.com/balance/result",
    );

    let response = client.account_balance(&request).await.unwrap();

    assert_eq!(response.conversation_id, "AG_20191219_00005797af5d7d75f652");
}

#[tokio::test]
async fn given_reversal_when_sent_then_posts_reversal_request() {
    let server = MockServer::start().await;
    mount_ok(
        &server,
        "/mpesa/reversal/v1/request",
        json!({
            "CommandID": "TransactionReversal",
            "ReceiverIdentifierType": "11",
            "Amount": "100"
        }),
    )
    .await;
    let client = seeded_client_for(&server.uri(), "tok1");
    let request = TransactionReversalRequest::new(
        "testapi",
        "encrypted-credential",
        "OEI2AK4Q16",
        "100",
        "600996",
        ReversalReceiverType::Default,
        "https://example.com/reversal/result",
        "https://example.com/reversal/timeout",
        "Wrong recipient",
        "",
    );

    let response = client.reverse_transaction(&request).await.unwrap();

    assert_eq!(response.originator_conversation_id, "16740-34861180-1");
}

#[tokio::test]
async fn given_dynamic_qr_when_sent_then_decodes_qr_code() {
    // GIVEN
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/mpesa/qrcode/v1/generate"))
        .and(body_partial_json(json!({ "TrxCode": "BG", "CPI": "373132" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ResponseCode": "AG_20191219_000043fdf61864fe9ff5",
            "ResponseDescription": "QR Code Successfully Generated.",
            "QRCode": "iVBORw0KGgoAAAANSUhEUgAAAyAAAAMgAQAAAADzCzvFAAAH"
        })))
        .expect(1)
        .mount(&server)
        .await;
    let client = seeded_client_for(&server.uri(), "tok1");
    let request = DynamicQrRequest::new(
        "TEST SUPERMARKET",
        "Invoice Test",
        "1",
        DynamicQrTransactionType::BuyGoods,
        "373132",
    );

    // WHEN
    let response = client.generate_dynamic_qr(&request).await.unwrap();

    // THEN
    assert!(response.qr_code.starts_with("iVBOR"));
    assert_eq!(response.response_description, "QR Code Successfully Generated.");
}
