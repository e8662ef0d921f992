use super::*;

fn sample_user() -> User {
    User {
        id: "u1".to_owned(),
        email: "ada@example.com".to_owned(),
        display_name: Some("Ada".to_owned()),
    }
}

#[test]
fn user_deserializes_camel_case_display_name() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","email":"ada@example.com","displayName":"Ada"}"#).unwrap();
    assert_eq!(user, sample_user());
}

#[test]
fn user_display_name_is_optional() {
    let user: User = serde_json::from_str(r#"{"id":"u2","email":"bob@example.com"}"#).unwrap();
    assert_eq!(user.display_name, None);
}

#[test]
fn user_label_prefers_display_name() {
    assert_eq!(sample_user().label(), "Ada");
}

#[test]
fn user_label_falls_back_to_email_for_blank_name() {
    let mut user = sample_user();
    user.display_name = Some("   ".to_owned());
    assert_eq!(user.label(), "ada@example.com");
    user.display_name = None;
    assert_eq!(user.label(), "ada@example.com");
}

#[test]
fn sign_up_request_serializes_display_name_in_camel_case() {
    let req = SignUpRequest {
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
        display_name: "Ada".to_owned(),
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(
        json,
        serde_json::json!({"email": "ada@example.com", "password": "hunter2", "displayName": "Ada"})
    );
}

#[test]
fn credential_requests_redact_password_in_debug() {
    let sign_in = SignInRequest { email: "ada@example.com".to_owned(), password: "hunter2".to_owned() };
    let rendered = format!("{sign_in:?}");
    assert!(rendered.contains("ada@example.com"));
    assert!(!rendered.contains("hunter2"));

    let sign_up = SignUpRequest {
        email: "ada@example.com".to_owned(),
        password: "hunter2".to_owned(),
        display_name: "Ada".to_owned(),
    };
    assert!(!format!("{sign_up:?}").contains("hunter2"));
}

#[test]
fn account_response_reads_conversation_count() {
    let account: AccountResponse = serde_json::from_str(
        r#"{"user":{"id":"u1","email":"ada@example.com","displayName":"Ada"},"conversationCount":12}"#,
    )
    .unwrap();
    assert_eq!(account.user, sample_user());
    assert_eq!(account.conversation_count, 12);
}
