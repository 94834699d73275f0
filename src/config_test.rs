use super::*;

fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |key| pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| (*v).to_owned())
}

#[test]
fn defaults_when_unset() {
    let config = HostConfig::from_lookup(lookup_from(&[])).expect("defaults");
    assert_eq!(config.host, DEFAULT_HOST);
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_host_and_port() {
    let config = HostConfig::from_lookup(lookup_from(&[("HOST", "127.0.0.1"), ("PORT", " 8080 ")])).expect("valid");
    assert_eq!(config.bind_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = HostConfig::from_lookup(lookup_from(&[("HOST", "  "), ("PORT", "")])).expect("defaults");
    assert_eq!(config, HostConfig { host: DEFAULT_HOST.to_owned(), port: DEFAULT_PORT });
}

#[test]
fn rejects_non_numeric_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "http")])).expect_err("invalid");
    assert!(matches!(err, HostError::InvalidPort { ref raw } if raw == "http"));
}

#[test]
fn rejects_port_zero_and_overflow() {
    assert!(HostConfig::from_lookup(lookup_from(&[("PORT", "0")])).is_err());
    assert!(HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}
