//! Profile configuration for Mattermost API clients.
//!
//! TOML profiles, credential resolution (env + keyring + plaintext),
//! and translation to `mattermost_api::ClientOptions`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use mattermost_api::{AuthStrategy, ClientOptions, DEFAULT_BASEPATH, LoginCredentials, TlsMode, TransportConfig};

/// Keyring service name under which secrets are stored.
pub const KEYRING_SERVICE: &str = "mattermost";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no profile named '{profile}'")]
    UnknownProfile { profile: String },

    #[error("no credentials configured for profile '{profile}'")]
    NoCredentials { profile: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Profile used when none is named.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named server profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default)]
    pub insecure: bool,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    #[serde(default)]
    pub skip_response_parsing: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            insecure: false,
            timeout: default_timeout(),
            skip_response_parsing: false,
        }
    }
}

fn default_timeout() -> u64 {
    30
}

/// A named server profile.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Profile {
    /// Server URL (e.g., "https://chat.example.com").
    pub url: String,

    /// API path prefix; defaults to `/api/v4`.
    pub basepath: Option<String>,

    /// Auth mode: "token", "login", or "none".
    #[serde(default = "default_auth_mode")]
    pub auth_mode: String,

    /// Personal access token (plaintext, prefer keyring or env var).
    pub token: Option<String>,

    /// Environment variable name containing the token.
    pub token_env: Option<String>,

    /// Username or email for login auth.
    pub login_id: Option<String>,

    /// Password for login auth (plaintext, prefer keyring).
    pub password: Option<String>,

    /// Sign in through LDAP only.
    pub ldap_only: Option<bool>,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Override insecure TLS setting.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,

    /// Override response parsing.
    pub skip_response_parsing: Option<bool>,
}

fn default_auth_mode() -> String {
    "token".into()
}

impl Config {
    /// Look up `name`, or the default profile when `name` is `None`.
    pub fn profile<'a>(&'a self, name: Option<&'a str>) -> Result<(&'a str, &'a Profile), ConfigError> {
        let name = name
            .or(self.default_profile.as_deref())
            .unwrap_or("default");
        self.profiles
            .get(name)
            .map(|profile| (name, profile))
            .ok_or_else(|| ConfigError::UnknownProfile {
                profile: name.into(),
            })
    }

    /// Client options for a profile, with global defaults applied.
    pub fn client_options(&self, name: Option<&str>) -> Result<ClientOptions, ConfigError> {
        let (name, profile) = self.profile(name)?;
        profile_to_client_options(profile, name, &self.defaults)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "mattermost", "mattermost-api").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("mattermost");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load the full Config from `path` + environment.
///
/// Environment variables use the `MATTERMOST_` prefix with `__` between
/// nesting levels (`MATTERMOST_DEFAULTS__TIMEOUT=60`).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    debug!(path = %path.display(), "loading config");
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("MATTERMOST_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

/// Serialize config to TOML and write it to `path`.
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Credential resolution ───────────────────────────────────────────

fn keyring_secret(profile_name: &str, kind: &str) -> Option<SecretString> {
    let entry = keyring::Entry::new(KEYRING_SERVICE, &format!("{profile_name}/{kind}")).ok()?;
    entry.get_password().ok().map(SecretString::from)
}

/// Resolve a personal access token from the credential chain.
pub fn resolve_token(profile: &Profile, profile_name: &str) -> Result<SecretString, ConfigError> {
    // 1. Profile's token_env → env var lookup
    if let Some(ref env_name) = profile.token_env {
        if let Ok(val) = std::env::var(env_name) {
            return Ok(SecretString::from(val));
        }
    }

    // 2. System keyring
    if let Some(secret) = keyring_secret(profile_name, "token") {
        return Ok(secret);
    }

    // 3. Plaintext in config
    if let Some(ref token) = profile.token {
        return Ok(SecretString::from(token.clone()));
    }

    Err(ConfigError::NoCredentials {
        profile: profile_name.into(),
    })
}

/// Resolve login credentials (login id + password).
pub fn resolve_login(profile: &Profile, profile_name: &str) -> Result<LoginCredentials, ConfigError> {
    let login_id = profile
        .login_id
        .clone()
        .or_else(|| std::env::var("MATTERMOST_LOGIN_ID").ok())
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })?;

    let password = std::env::var("MATTERMOST_PASSWORD")
        .ok()
        .map(SecretString::from)
        .or_else(|| keyring_secret(profile_name, "password"))
        .or_else(|| profile.password.clone().map(SecretString::from))
        .ok_or_else(|| ConfigError::NoCredentials {
            profile: profile_name.into(),
        })?;

    let mut creds = LoginCredentials::new(login_id, password.expose_secret());
    if let Some(ldap_only) = profile.ldap_only {
        creds = creds.with_ldap_only(ldap_only);
    }
    Ok(creds)
}

/// Resolve the `AuthStrategy` selected by a profile's `auth_mode`.
pub fn resolve_auth(profile: &Profile, profile_name: &str) -> Result<AuthStrategy, ConfigError> {
    match profile.auth_mode.as_str() {
        "token" => Ok(AuthStrategy::Token {
            token: resolve_token(profile, profile_name)?,
        }),
        "login" => Ok(AuthStrategy::Login(resolve_login(profile, profile_name)?)),
        "none" => Ok(AuthStrategy::None),
        other => Err(ConfigError::Validation {
            field: "auth_mode".into(),
            reason: format!("expected 'token', 'login', or 'none', got '{other}'"),
        }),
    }
}

/// Build `ClientOptions` from a profile, falling back to `defaults` for
/// anything the profile leaves unset.
pub fn profile_to_client_options(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
) -> Result<ClientOptions, ConfigError> {
    url::Url::parse(&profile.url).map_err(|_| ConfigError::Validation {
        field: "url".into(),
        reason: format!("invalid URL: {}", profile.url),
    })?;

    let auth = resolve_auth(profile, profile_name)?;

    let tls = if profile.insecure.unwrap_or(defaults.insecure) {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsMode::CustomCa(ca_path.clone())
    } else {
        TlsMode::System
    };

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    Ok(ClientOptions::new(profile.url.clone())
        .with_basepath(profile.basepath.as_deref().unwrap_or(DEFAULT_BASEPATH))
        .with_auth(auth)
        .with_transport(TransportConfig::default().with_tls(tls).with_timeout(timeout))
        .with_skip_response_parsing(
            profile
                .skip_response_parsing
                .unwrap_or(defaults.skip_response_parsing),
        ))
}
