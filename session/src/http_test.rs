use super::*;

#[test]
fn cookie_pair_drops_attributes() {
    assert_eq!(
        cookie_pair("session_token=abc123; Path=/; HttpOnly; SameSite=Lax"),
        Some("session_token=abc123".to_owned())
    );
}

#[test]
fn cookie_pair_rejects_malformed_headers() {
    assert_eq!(cookie_pair(""), None);
    assert_eq!(cookie_pair("; Path=/"), None);
    assert_eq!(cookie_pair("HttpOnly"), None);
}

#[test]
fn new_rejects_invalid_cookie_header() {
    let result = HttpTransport::new(&SessionConfig::default(), Some("bad\ncookie"));
    assert!(matches!(result, Err(SessionError::Transport(_))));
}

#[test]
fn new_starts_without_remembered_cookie() {
    let transport = HttpTransport::new(&SessionConfig::default(), Some("session_token=abc")).unwrap();
    assert_eq!(transport.last_set_cookie(), None);
}

fn set_cookie_headers(values: &[&str]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for value in values {
        headers.append(SET_COOKIE, HeaderValue::from_str(value).unwrap());
    }
    headers
}

#[test]
fn cookie_header_keeps_every_set_cookie() {
    let headers = set_cookie_headers(&["csrf=xyz; Path=/", "session_token=abc; HttpOnly"]);
    assert_eq!(cookie_header(&headers), Some("csrf=xyz; session_token=abc".to_owned()));
}

#[test]
fn cookie_header_skips_malformed_entries() {
    let headers = set_cookie_headers(&["HttpOnly", "session_token=abc; Path=/"]);
    assert_eq!(cookie_header(&headers), Some("session_token=abc".to_owned()));
    assert_eq!(cookie_header(&HeaderMap::new()), None);
}

#[test]
fn remember_cookie_stores_all_cookies_from_response() {
    let transport = HttpTransport::new(&SessionConfig::default(), None).unwrap();
    transport.remember_cookie(&set_cookie_headers(&["csrf=xyz; Path=/", "session_token=abc; HttpOnly"]));
    assert_eq!(transport.last_set_cookie(), Some("csrf=xyz; session_token=abc".to_owned()));

    transport.remember_cookie(&HeaderMap::new());
    assert_eq!(transport.last_set_cookie(), Some("csrf=xyz; session_token=abc".to_owned()));
}
