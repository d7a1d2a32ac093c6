use super::*;

#[test]
fn endpoint_joins_with_single_slash() {
    assert_eq!(endpoint("http://api.test", "/users/login"), "http://api.test/users/login");
    assert_eq!(endpoint("http://api.test/", "/users/login"), "http://api.test/users/login");
    assert_eq!(endpoint("http://api.test", "users/register"), "http://api.test/users/register");
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    assert_eq!(endpoint("https://host/api/v1", "/users/login"), "https://host/api/v1/users/login");
}

#[test]
fn normalize_base_strips_trailing_slashes_and_space() {
    assert_eq!(normalize_base("  http://api.test//  "), "http://api.test");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn api_url_outside_browser_has_no_trailing_slash() {
    let url = api_url();
    assert!(url.starts_with("http"));
    assert!(!url.ends_with('/'));
}
