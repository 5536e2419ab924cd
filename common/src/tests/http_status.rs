use crate::HttpStatusCode;

#[test]
fn given_status_401_when_categorized_then_is_unauthorized_client_error() {
    let status = HttpStatusCode::from(401);

    assert!(status.is_unauthorized());
    assert!(status.is_client_error());
    assert!(!status.is_server_error());
    assert!(!status.is_ok());
}

#[test]
fn given_status_503_when_categorized_then_is_server_error() {
    let status = HttpStatusCode(503);

    assert!(status.is_server_error());
    assert!(!status.is_client_error());
    assert!(!status.is_unauthorized());
    assert_eq!(status.to_string(), "503");
}

#[test]
fn given_status_200_when_categorized_then_is_ok() {
    assert!(HttpStatusCode(200).is_ok());
    assert!(!HttpStatusCode(201).is_ok());
}
