use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("RATIO_API_UPSTREAM", "https://api.ratio.test")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.upstream, "https://api.ratio.test");
    assert_eq!(
        cfg.timeouts,
        ProxyTimeouts { request_secs: DEFAULT_PROXY_TIMEOUT_SECS, connect_secs: DEFAULT_PROXY_CONNECT_TIMEOUT_SECS }
    );
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("PORT", "8080"),
        ("RATIO_API_UPSTREAM", "http://10.0.0.5:4000/v1/"),
        ("RATIO_PROXY_TIMEOUT_SECS", "5"),
        ("RATIO_PROXY_CONNECT_TIMEOUT_SECS", "2"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.upstream, "http://10.0.0.5:4000/v1");
    assert_eq!(cfg.timeouts, ProxyTimeouts { request_secs: 5, connect_secs: 2 });
}

#[test]
fn missing_upstream_is_an_error() {
    assert_eq!(
        ServerConfig::from_lookup(lookup_from(&[])),
        Err(ConfigError::Missing { var: "RATIO_API_UPSTREAM" })
    );
    assert_eq!(
        ServerConfig::from_lookup(lookup_from(&[("RATIO_API_UPSTREAM", "  ")])),
        Err(ConfigError::Missing { var: "RATIO_API_UPSTREAM" })
    );
}

#[test]
fn upstream_without_scheme_is_rejected() {
    let err = ServerConfig::from_lookup(lookup_from(&[("RATIO_API_UPSTREAM", "api.ratio.test")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "RATIO_API_UPSTREAM", .. }));
}

#[test]
fn invalid_port_is_rejected() {
    let err =
        ServerConfig::from_lookup(lookup_from(&[("PORT", "http"), ("RATIO_API_UPSTREAM", "http://x")])).unwrap_err();
    assert_eq!(err.to_string(), "PORT has invalid value \"http\": expected a port number");
}

#[test]
fn unparsable_or_zero_timeouts_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[
        ("RATIO_API_UPSTREAM", "http://x"),
        ("RATIO_PROXY_TIMEOUT_SECS", "soon"),
        ("RATIO_PROXY_CONNECT_TIMEOUT_SECS", "0"),
    ]))
    .unwrap();
    assert_eq!(
        cfg.timeouts,
        ProxyTimeouts { request_secs: DEFAULT_PROXY_TIMEOUT_SECS, connect_secs: DEFAULT_PROXY_CONNECT_TIMEOUT_SECS }
    );
}
