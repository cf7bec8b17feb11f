use super::*;

#[test]
fn url_joins_base_and_path() {
    let cfg = ApiConfig::with_base_url("/api");
    assert_eq!(cfg.url("/catalog/books"), "/api/catalog/books");
}

#[test]
fn trailing_slash_on_base_is_trimmed() {
    let cfg = ApiConfig::with_base_url("http://127.0.0.1:5000/api/");
    assert_eq!(cfg.url("/auth/login"), "http://127.0.0.1:5000/api/auth/login");
}

#[test]
fn default_uses_same_origin_prefix() {
    // MYBOOKSPACE_API_URL is unset in the test environment.
    let cfg = ApiConfig::default();
    assert_eq!(cfg.url("/loans/myLoans"), "/api/loans/myLoans");
}
