use crate::demos::{Demo, LIPA_NA_MPESA_SHORT_CODE, Profile, TEST_MSISDN, stk_push};
use crate::error::SandboxError;

use clap::ValueEnum;

fn profile() -> Profile {
    Profile {
        callback_url: "https://example.com/callback".to_string(),
        initiator_name: "testapi".to_string(),
        security_credential: "credential".to_string(),
        transaction_id: "OEI2AK4Q16".to_string(),
    }
}

/// **VALUE**: The name shown in logs is the name accepted on the command line.
#[test]
fn given_every_demo_when_displayed_then_matches_command_line_name() {
    for demo in Demo::value_variants() {
        let possible = demo.to_possible_value().unwrap();

        assert_eq!(possible.get_name(), demo.as_str());
        assert_eq!(demo.to_string(), demo.as_str());
    }
}

#[test]
fn given_command_line_name_when_looked_up_then_finds_demo() {
    assert_eq!(Demo::from_str("status", false).unwrap(), Demo::TransactionStatus);
    assert_eq!(Demo::from_str("QR", true).unwrap(), Demo::DynamicQr);
    assert!(Demo::from_str("refund", true).is_err());
}

#[test]
fn given_profile_when_building_stk_push_then_uses_sandbox_shortcode_and_msisdn() {
    // WHEN
    let request = stk_push(&profile()).unwrap();

    // THEN
    assert_eq!(request.business_short_code, LIPA_NA_MPESA_SHORT_CODE);
    assert_eq!(request.phone_number, TEST_MSISDN);
    assert_eq!(request.party_a, TEST_MSISDN);
    assert_eq!(request.callback_url, "https://example.com/callback");
    assert_eq!(request.timestamp.len(), 14);
}

#[test]
fn given_profile_without_scheme_when_building_stk_push_then_returns_request_error() {
    let mut profile = profile();
    profile.callback_url = "example.com".to_string();

    let result = stk_push(&profile);

    assert!(matches!(result, Err(SandboxError::Request { .. })));
}
