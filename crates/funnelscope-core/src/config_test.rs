use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(
        parse_environment("development").unwrap(),
        Environment::Development
    );
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test").unwrap(), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(
        parse_environment("production").unwrap(),
        Environment::Production
    );
}

#[test]
fn parse_environment_unknown_is_error() {
    let err = parse_environment("staging").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEnvVar { ref var, .. } if var == "FUNNELSCOPE_ENV"));
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.data_dir, std::path::PathBuf::from("./analyzer_data"));
    assert_eq!(cfg.fetch_timeout_secs, 10);
    assert_eq!(cfg.user_agent, DEFAULT_USER_AGENT);
    assert_eq!(cfg.min_content_chars, 100);
    assert!(cfg.openai_api_key.is_none());
    assert_eq!(cfg.ai_model, "gpt-4");
    assert_eq!(cfg.ai_base_url, "https://api.openai.com/v1");
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("FUNNELSCOPE_ENV", "production");
    map.insert("FUNNELSCOPE_DATA_DIR", "/var/lib/funnelscope");
    map.insert("FUNNELSCOPE_FETCH_TIMEOUT_SECS", "30");
    map.insert("FUNNELSCOPE_MIN_CONTENT_CHARS", "0");
    map.insert("OPENAI_API_KEY", "sk-test");
    map.insert("FUNNELSCOPE_AI_MODEL", "gpt-4o-mini");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.data_dir, std::path::PathBuf::from("/var/lib/funnelscope"));
    assert_eq!(cfg.fetch_timeout_secs, 30);
    assert_eq!(cfg.min_content_chars, 0);
    assert_eq!(cfg.openai_api_key.as_deref(), Some("sk-test"));
    assert_eq!(cfg.ai_model, "gpt-4o-mini");
}

#[test]
fn build_app_config_blank_api_key_is_none() {
    let mut map = HashMap::new();
    map.insert("OPENAI_API_KEY", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.openai_api_key.is_none());
}

#[test]
fn build_app_config_rejects_invalid_timeout() {
    let mut map = HashMap::new();
    map.insert("FUNNELSCOPE_FETCH_TIMEOUT_SECS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FUNNELSCOPE_FETCH_TIMEOUT_SECS"),
        "expected InvalidEnvVar(FUNNELSCOPE_FETCH_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_timeout() {
    let mut map = HashMap::new();
    map.insert("FUNNELSCOPE_FETCH_TIMEOUT_SECS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
}

#[test]
fn build_app_config_rejects_invalid_min_content_chars() {
    let mut map = HashMap::new();
    map.insert("FUNNELSCOPE_MIN_CONTENT_CHARS", "-5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FUNNELSCOPE_MIN_CONTENT_CHARS"),
        "expected InvalidEnvVar(FUNNELSCOPE_MIN_CONTENT_CHARS), got: {result:?}"
    );
}

#[test]
fn debug_redacts_api_key() {
    let mut map = HashMap::new();
    map.insert("OPENAI_API_KEY", "sk-very-secret");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("sk-very-secret"));
}
