use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

// =============================================================================
// DEFAULTS
// =============================================================================

#[test]
fn empty_environment_uses_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  "), ("BIND_ADDR", ""), ("SITE_ROOT", " ")])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert_eq!(config.site_root, None);
}

// =============================================================================
// OVERRIDES
// =============================================================================

#[test]
fn overrides_are_applied() {
    let config = ServerConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("BIND_ADDR", "127.0.0.1"),
        ("SITE_ROOT", "/srv/dramp/site"),
    ]))
    .unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
    assert_eq!(config.site_root.as_deref(), Some("/srv/dramp/site"));
}

#[test]
fn ipv6_bind_addr_is_accepted() {
    let config = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "::1"), ("PORT", "9000")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "[::1]:9000");
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn unparsable_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { key: "PORT", value: "eighty".to_owned() });
}

#[test]
fn out_of_range_port_is_rejected() {
    assert!(matches!(
        ServerConfig::from_lookup(lookup(&[("PORT", "70000")])),
        Err(ConfigError::Invalid { key: "PORT", .. })
    ));
}

#[test]
fn bad_bind_addr_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid BIND_ADDR: \"localhost\"");
}
