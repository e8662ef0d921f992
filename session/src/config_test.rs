use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_uses_defaults_when_unset() {
    let cfg = SessionConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, SessionConfig::default());
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        SessionTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = SessionConfig::from_lookup(lookup_from(&[
        ("GPTREE_BASE_URL", "https://gptree.example.test/api/"),
        ("GPTREE_REQUEST_TIMEOUT_SECS", "42"),
        ("GPTREE_CONNECT_TIMEOUT_SECS", " 7 "),
    ]))
    .unwrap();
    assert_eq!(cfg.base_url, "https://gptree.example.test/api");
    assert_eq!(cfg.timeouts, SessionTimeouts { request_secs: 42, connect_secs: 7 });
}

#[test]
fn from_lookup_rejects_non_numeric_timeout() {
    let err = SessionConfig::from_lookup(lookup_from(&[("GPTREE_REQUEST_TIMEOUT_SECS", "soon")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidNumber { var: "GPTREE_REQUEST_TIMEOUT_SECS", value: "soon".to_owned() }
    );
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    let err = SessionConfig::from_lookup(lookup_from(&[("GPTREE_CONNECT_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { var: "GPTREE_CONNECT_TIMEOUT_SECS", .. }));
}

#[test]
fn from_lookup_rejects_non_http_base_url() {
    let err = SessionConfig::from_lookup(lookup_from(&[("GPTREE_BASE_URL", "ftp://example.test")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
}

#[test]
fn url_joins_path_onto_base() {
    let cfg = SessionConfig { base_url: "http://localhost:8080".to_owned(), ..SessionConfig::default() };
    assert_eq!(cfg.url("/auth/login"), "http://localhost:8080/auth/login");
}

#[test]
fn positive_secs_rejects_zero_only() {
    assert_eq!(positive_secs("--request-timeout-secs", 5), Ok(5));
    assert_eq!(
        positive_secs("--request-timeout-secs", 0),
        Err(ConfigError::InvalidNumber { var: "--request-timeout-secs", value: "0".to_owned() })
    );
}
