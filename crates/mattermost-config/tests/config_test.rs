// Tests for profile loading and credential resolution.

use std::path::PathBuf;
use std::time::Duration;

use pretty_assertions::assert_eq;
use secrecy::ExposeSecret;
use tempfile::TempDir;

use mattermost_api::{AuthStrategy, Client, TlsMode};
use mattermost_config::{
    Config, ConfigError, Defaults, Profile, load_config_from, profile_to_client_options,
    resolve_auth, save_config_to,
};

const SAMPLE: &str = r#"
default_profile = "work"

[defaults]
timeout = 45

[profiles.work]
url = "https://chat.example.com"
auth_mode = "token"
token = "plain-token"

[profiles.bot]
url = "https://chat.example.com"
basepath = "/mm/api/v4"
auth_mode = "login"
login_id = "ci-bot"
password = "hunter2"
ldap_only = true
timeout = 5

[profiles.lab]
url = "https://10.0.0.5:8065"
auth_mode = "none"
insecure = true
skip_response_parsing = true
"#;

fn write_sample(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("config.toml");
    std::fs::write(&path, SAMPLE).unwrap();
    path
}

fn profile(url: &str, auth_mode: &str) -> Profile {
    Profile {
        url: url.into(),
        auth_mode: auth_mode.into(),
        ..Profile::default()
    }
}

#[test]
fn test_load_profiles_from_file() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&write_sample(&dir)).unwrap();

    assert_eq!(config.default_profile.as_deref(), Some("work"));
    assert_eq!(config.defaults.timeout, 45);
    assert_eq!(config.profiles.len(), 3);
    assert_eq!(config.profiles["bot"].login_id.as_deref(), Some("ci-bot"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&dir.path().join("absent.toml")).unwrap();

    assert_eq!(config.default_profile.as_deref(), Some("default"));
    assert_eq!(config.defaults.timeout, 30);
    assert!(config.profiles.is_empty());
}

#[test]
fn test_default_profile_builds_token_client() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&write_sample(&dir)).unwrap();

    let options = config.client_options(None).unwrap();
    assert_eq!(options.url, "https://chat.example.com");
    assert_eq!(options.basepath, "/api/v4");
    assert_eq!(options.transport.timeout, Some(Duration::from_secs(45)));
    assert_eq!(options.transport.tls, TlsMode::System);
    match options.auth {
        AuthStrategy::Token { ref token } => assert_eq!(token.expose_secret(), "plain-token"),
        ref other => panic!("expected token auth, got {}", other.label()),
    }

    let client = Client::new(options).unwrap();
    assert_eq!(client.base_url().as_str(), "https://chat.example.com/api/v4/");
}

#[test]
fn test_login_profile_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&write_sample(&dir)).unwrap();

    let options = config.client_options(Some("bot")).unwrap();
    assert_eq!(options.basepath, "/mm/api/v4");
    assert_eq!(options.transport.timeout, Some(Duration::from_secs(5)));
    match options.auth {
        AuthStrategy::Login(ref creds) => {
            assert_eq!(creds.login_id, "ci-bot");
            assert_eq!(creds.ldap_only, Some(true));
        }
        ref other => panic!("expected login auth, got {}", other.label()),
    }
}

#[test]
fn test_insecure_unauthenticated_profile() {
    let dir = TempDir::new().unwrap();
    let config = load_config_from(&write_sample(&dir)).unwrap();

    let options = config.client_options(Some("lab")).unwrap();
    assert_eq!(options.transport.tls, TlsMode::DangerAcceptInvalid);
    assert!(options.skip_response_parsing);
    assert_eq!(options.auth.label(), "none");
}

#[test]
fn test_unknown_profile() {
    let config = Config::default();
    let err = config.client_options(Some("nope")).unwrap_err();
    assert!(matches!(err, ConfigError::UnknownProfile { ref profile } if profile == "nope"));
}

#[test]
fn test_invalid_auth_mode() {
    let err = resolve_auth(&profile("https://chat.example.com", "oauth"), "invalid-auth-mode")
        .unwrap_err();
    assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "auth_mode"));
}

#[test]
fn test_missing_token_is_no_credentials() {
    let err = resolve_auth(
        &profile("https://chat.example.com", "token"),
        "mattermost-config-test-missing-token",
    )
    .unwrap_err();
    assert!(matches!(err, ConfigError::NoCredentials { .. }));
}

#[test]
fn test_invalid_url_rejected() {
    let bad = profile("not a url", "none");
    let err = profile_to_client_options(&bad, "bad-url", &Defaults::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Validation { ref field, .. } if field == "url"));
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.profiles.insert("default".into(), {
        let mut p = profile("https://chat.example.com", "token");
        p.token_env = Some("MM_TEST_TOKEN".into());
        p
    });
    save_config_to(&config, &path).unwrap();

    let loaded = load_config_from(&path).unwrap();
    let saved = &loaded.profiles["default"];
    assert_eq!(saved.url, "https://chat.example.com");
    assert_eq!(saved.token_env.as_deref(), Some("MM_TEST_TOKEN"));
    assert_eq!(saved.auth_mode, "token");
}
