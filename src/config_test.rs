use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// defaults
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.api_url, DEFAULT_API_URL);
}

#[test]
fn blank_values_count_as_unset() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("API_URL", "")])).unwrap();
    assert_eq!(config, ServerConfig { port: DEFAULT_PORT, api_url: DEFAULT_API_URL.to_owned() });
}

// =============================================================================
// PORT
// =============================================================================

#[test]
fn port_is_parsed_and_trimmed() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 ")])).unwrap();
    assert_eq!(config.port, 8080);
    assert_eq!(config.bind_addr().port(), 8080);
    assert!(config.bind_addr().ip().is_unspecified());
}

#[test]
fn invalid_ports_are_rejected() {
    for raw in ["abc", "0", "70000", "-1"] {
        let err = ServerConfig::from_lookup(lookup(&[("PORT", raw)])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidPort(raw.to_owned()), "expected rejection for {raw:?}");
    }
}

// =============================================================================
// API_URL
// =============================================================================

#[test]
fn api_url_trailing_slash_is_removed() {
    let config = ServerConfig::from_lookup(lookup(&[("API_URL", "https://api.example.com/")])).unwrap();
    assert_eq!(config.api_url, "https://api.example.com");
}

#[test]
fn api_url_keeps_path_prefix() {
    let config = ServerConfig::from_lookup(lookup(&[("API_URL", "http://10.0.0.5:5000/api")])).unwrap();
    assert_eq!(config.api_url, "http://10.0.0.5:5000/api");
}

#[test]
fn api_url_requires_http_scheme() {
    for raw in ["api.example.com", "ftp://api.example.com", "http://", "https:///"] {
        let err = ServerConfig::from_lookup(lookup(&[("API_URL", raw)])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidApiUrl(_)), "expected rejection for {raw:?}");
    }
}

#[test]
fn error_messages_name_the_variable() {
    assert!(ConfigError::InvalidPort("x".to_owned()).to_string().contains("PORT"));
    assert!(ConfigError::InvalidApiUrl("x".to_owned()).to_string().contains("API_URL"));
}
