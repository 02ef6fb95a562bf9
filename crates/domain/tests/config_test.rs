use decoy_dns_domain::config::{ExactAnswer, PatternAnswer};
use decoy_dns_domain::{CliOverrides, Config, ConfigError, RecordType};
use std::io::Write;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert!(config.answers.reverse_ptr);
    assert_eq!(config.answers.ttl, 300);
    assert!(config.answers.exact.is_empty());
    assert!(config.answers.patterns.is_empty());
    assert!(!config.safe_box.enabled);
    assert_eq!(config.safe_box.ipv4, "127.0.0.1");
    assert_eq!(config.safe_box.ipv6, "::1");
    assert_eq!(config.logging.level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_parses_answers_and_safe_box() {
    let toml_str = r#"
        [answers]
        ttl = 60

        [[answers.exact]]
        name = "host.example.com."
        answer = "10.37.129.0"

        [[answers.exact]]
        name = "mail.example.com"
        record_type = "mx"
        answer = "10 mx.example.com."

        [[answers.patterns]]
        pattern = "*.test."
        answer = "10.0.0.1"

        [safe_box]
        enabled = true
        bypass = ["corp.example."]

        [logging]
        level = "debug"
    "#;

    let config = Config::from_toml_str(toml_str).unwrap();

    assert_eq!(config.answers.ttl, 60);
    assert_eq!(config.answers.exact.len(), 2);
    assert_eq!(config.answers.exact[0].record_type, "A");
    assert_eq!(config.answers.exact[1].parsed_type().unwrap(), RecordType::MX);
    assert_eq!(
        config.answers.patterns[0],
        PatternAnswer::new("*.test.", RecordType::A, "10.0.0.1")
    );
    assert!(config.safe_box.enabled);
    assert_eq!(config.safe_box.bypass, vec!["corp.example.".to_string()]);
    assert_eq!(config.logging.level, "debug");
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_rejects_unanswerable_record_type() {
    let mut config = Config::default();
    config
        .answers
        .exact
        .push(ExactAnswer::new("example.com.", RecordType::SOA, "x"));

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_config_rejects_unknown_record_type() {
    let toml_str = r#"
        [[answers.exact]]
        name = "example.com."
        record_type = "BOGUS"
        answer = "10.0.0.1"
    "#;
    let config = Config::from_toml_str(toml_str).unwrap();

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_config_rejects_empty_pattern() {
    let mut config = Config::default();
    config
        .answers
        .patterns
        .push(PatternAnswer::new("~", RecordType::A, "10.0.0.1"));

    assert!(config.validate().is_err());
}

#[test]
fn test_config_rejects_bad_safe_box_address() {
    let mut config = Config::default();
    config.safe_box.ipv4 = "localhost".to_string();

    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_config_parse_error() {
    let result = Config::from_toml_str("[answers\nttl = ");
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_load_from_file_applies_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nlevel = \"warn\"").unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config = Config::load(
        Some(&path),
        CliOverrides {
            log_level: Some("trace".to_string()),
            safe_box: Some(true),
        },
    )
    .unwrap();

    assert_eq!(config.logging.level, "trace");
    assert!(config.safe_box.enabled);
}

#[test]
fn test_config_load_missing_file() {
    let result = Config::load(Some("/nonexistent/decoy-dns.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead(_, _))));
}
