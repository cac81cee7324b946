use employee_directory::config::Config;

#[test]
fn defaults_to_localhost() {
    let cfg = Config::with_base_url(None).unwrap();
    assert_eq!(cfg.api_base_url, "http://localhost:3000");
}

#[test]
fn trims_trailing_slash() {
    let cfg = Config::with_base_url(Some("https://hr.example.com/".into())).unwrap();
    assert_eq!(cfg.api_base_url, "https://hr.example.com");
}

#[test]
fn rejects_non_http_scheme() {
    let err = Config::with_base_url(Some("ftp://hr.example.com".into())).unwrap_err();
    assert!(err.to_string().contains("http://"));
}

#[test]
fn rejects_unparseable_url() {
    assert!(Config::with_base_url(Some("http://exa mple.com".into())).is_err());
}
