use super::*;

#[test]
fn sign_out_failure_message_includes_cause() {
    let err = SessionError::Status { status: 500, body: "boom".to_owned() };
    assert_eq!(sign_out_failure_message(&err), "Sign-out failed: request failed with status 500: boom");
}

#[test]
fn sign_out_failure_message_reports_transport_errors() {
    let err = SessionError::Transport("connection refused".to_owned());
    assert_eq!(sign_out_failure_message(&err), "Sign-out failed: request failed: connection refused");
}
