use super::*;
use std::collections::HashMap;
use std::io::Write;

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn test_verbosity_from_count() {
    assert_eq!(VerbosityLevel::from_count(0), VerbosityLevel::Normal);
    assert_eq!(VerbosityLevel::from_count(1), VerbosityLevel::Verbose);
    assert_eq!(VerbosityLevel::from_count(2), VerbosityLevel::VeryVerbose);
    assert_eq!(VerbosityLevel::from_count(3), VerbosityLevel::Trace);
    assert_eq!(VerbosityLevel::from_count(9), VerbosityLevel::Trace);
}

#[test]
fn test_verbosity_log_directive() {
    assert_eq!(VerbosityLevel::Normal.log_directive(), "warn");
    assert_eq!(VerbosityLevel::Verbose.log_directive(), "info");
    assert_eq!(VerbosityLevel::VeryVerbose.log_directive(), "debug");
    assert_eq!(VerbosityLevel::Trace.log_directive(), "trace");
}

#[test]
fn test_env_overrides_url_and_timeout() {
    let config = apply_env_overrides(
        Config::default(),
        lookup_from(&[
            (ENV_URL, "https://quay.example.com/api/v1"),
            (ENV_TIMEOUT, "42"),
        ]),
    );

    assert_eq!(config.registry.url, "https://quay.example.com/api/v1");
    assert_eq!(config.registry.timeout, 42);
}

#[test]
fn test_env_invalid_timeout_is_ignored() {
    let config = apply_env_overrides(Config::default(), lookup_from(&[(ENV_TIMEOUT, "soon")]));
    assert_eq!(config.registry.timeout, 15);
}

#[test]
fn test_env_without_variables_keeps_config() {
    let config = apply_env_overrides(Config::default(), lookup_from(&[]));
    assert_eq!(config, Config::default());
}

#[test]
fn test_build_with_explicit_config_file() {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(file, "compat:\n  legacy_limit: true").unwrap();

    let ctx = AppContext::build(Some(file.path()), VerbosityLevel::Verbose).unwrap();

    assert!(ctx.config.compat.legacy_limit);
    assert_eq!(ctx.verbosity, VerbosityLevel::Verbose);
}

#[test]
fn test_build_with_missing_explicit_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let result = AppContext::build(Some(&dir.path().join("nope.yaml")), VerbosityLevel::Normal);
    assert!(result.is_err());
}

#[test]
fn test_default_config_path_name() {
    if let Some(path) = default_config_path() {
        assert!(path.ends_with("quay/config.yaml"));
    }
}
