use rpp_domain::config::parse_nameserver;
use rpp_domain::{CliOverrides, Config, ConfigError};
use std::io::Write;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.controller.port, 4343);
    assert_eq!(config.controller.ttl, 3600);
    assert_eq!(config.logging.level, "warn");
    assert!(config.resolver.nameservers.is_empty());
    assert_eq!(config.resolver.resolv_conf, "/etc/resolv.conf");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_toml_uses_defaults() {
    let config = Config::from_toml(
        r#"
        [controller]
        port = 5000
        "#,
    )
    .unwrap();

    assert_eq!(config.controller.port, 5000);
    assert_eq!(config.controller.ttl, 3600);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_load_from_file_with_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[resolver]
nameservers = ["192.0.2.53"]
timeout_secs = 2
attempts = 3

[logging]
level = "info"
"#
    )
    .unwrap();

    let overrides = CliOverrides {
        nameservers: vec!["198.51.100.53:5353".to_string()],
        controller_port: Some(4444),
        ttl: Some(60),
        log_level: Some("debug".to_string()),
    };

    let path = file.path().to_str().unwrap();
    let config = Config::load(Some(path), overrides).unwrap();

    assert_eq!(config.resolver.nameservers, vec!["198.51.100.53:5353"]);
    assert_eq!(config.resolver.timeout_secs, Some(2));
    assert_eq!(config.resolver.attempts, Some(3));
    assert_eq!(config.controller.port, 4444);
    assert_eq!(config.controller.ttl, 60);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_missing_file_is_read_error() {
    let result = Config::load(Some("/nonexistent/rpp.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    assert!(matches!(
        Config::from_toml("controller = 12"),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn test_validate_rejects_bad_values() {
    let mut config = Config::default();
    config.controller.port = 0;
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));

    let mut config = Config::default();
    config.resolver.attempts = Some(0);
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.resolver.nameservers = vec!["not-an-ip".to_string()];
    assert!(config.validate().is_err());
}

#[test]
fn test_parse_nameserver_forms() {
    assert_eq!(
        parse_nameserver("192.0.2.53"),
        Some("192.0.2.53:53".parse().unwrap())
    );
    assert_eq!(
        parse_nameserver("192.0.2.53:5353"),
        Some("192.0.2.53:5353".parse().unwrap())
    );
    assert_eq!(
        parse_nameserver("2001:db8::53"),
        Some("[2001:db8::53]:53".parse().unwrap())
    );
    assert_eq!(
        parse_nameserver("[2001:db8::53]:5353"),
        Some("[2001:db8::53]:5353".parse().unwrap())
    );
    assert_eq!(parse_nameserver("dns.example"), None);
}
