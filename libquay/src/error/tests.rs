use super::*;
use std::error::Error;

#[test]
fn test_network_error_message() {
    let err = QuayError::network("request to https://quay.io timed out");

    assert!(matches!(err, QuayError::Network { .. }));
    assert!(err.to_string().contains("timed out"));
    assert!(err.source().is_none());
}

#[test]
fn test_network_error_with_source() {
    let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let err = QuayError::network_with_source("failed to connect", io_err);

    assert_eq!(err.to_string(), "Network error: failed to connect");
    let source = err.source().unwrap();
    assert_eq!(source.to_string(), "refused");
}

#[test]
fn test_validation_error_with_source() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = QuayError::validation_with_source("Failed to parse tag list", json_err);

    assert!(matches!(err, QuayError::Validation { .. }));
    assert!(err.source().is_some());
}

#[test]
fn test_params_error_display() {
    let err = QuayError::params("repository must not be empty");
    assert_eq!(
        err.to_string(),
        "Invalid parameters: repository must not be empty"
    );
}

#[test]
fn test_config_error_keeps_path() {
    let err = QuayError::config("unreadable", Some("/etc/quay.yaml"));

    match err {
        QuayError::Config { path, .. } => assert_eq!(path.as_deref(), Some("/etc/quay.yaml")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_config_error_from_config_rs() {
    let cfg_err = config::ConfigError::Message("bad value".to_string());
    let err: QuayError = cfg_err.into();

    assert!(matches!(err, QuayError::Config { .. }));
    assert!(err.source().unwrap().to_string().contains("bad value"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<QuayError>();
}

#[test]
fn test_config_error_accepts_owned_path_with_str_message() {
    let path = std::path::Path::new("/etc/quay/config.yaml");
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err = QuayError::config_with_source("Failed to read", Some(path.display().to_string()), io_err);

    match err {
        QuayError::Config { message, path, .. } => {
            assert_eq!(message, "Failed to read");
            assert_eq!(path.as_deref(), Some("/etc/quay/config.yaml"));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}
