use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// Path of the login exchange, relative to the API base.
pub(crate) const LOGIN_PATH: &str = "/users/login";

/// Response header carrying the session token handed out by a login.
pub(crate) const TOKEN_HEADER: &str = "Token";

/// How outgoing requests are credentialed.
#[derive(Debug, Clone, Default)]
pub enum AuthStrategy {
    /// A bearer token known up front (personal access token, bot token,
    /// or a session token obtained elsewhere).
    Token { token: SecretString },

    /// Credentials exchanged for a session token at transport creation.
    Login(LoginCredentials),

    /// Unauthenticated. Only a handful of endpoints (ping, client config,
    /// login itself) accept this.
    #[default]
    None,
}

impl AuthStrategy {
    pub fn token(token: impl Into<String>) -> Self {
        Self::Token {
            token: SecretString::from(token.into()),
        }
    }

    pub fn login(login_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Login(LoginCredentials::new(login_id, password))
    }

    /// Short label for log lines; never includes secret material.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Token { .. } => "token",
            Self::Login(_) => "login",
            Self::None => "none",
        }
    }
}

/// Credentials for the `POST /users/login` exchange.
///
/// Optional fields are left out of the login payload unless set.
#[derive(Debug, Clone)]
pub struct LoginCredentials {
    pub login_id: String,
    pub password: SecretString,
    /// MFA token, when the account has MFA enabled.
    pub token: Option<String>,
    pub device_id: Option<String>,
    pub ldap_only: Option<bool>,
}

impl LoginCredentials {
    pub fn new(login_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            login_id: login_id.into(),
            password: SecretString::from(password.into()),
            token: None,
            device_id: None,
            ldap_only: None,
        }
    }

    pub fn with_mfa_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_device_id(mut self, device_id: impl Into<String>) -> Self {
        self.device_id = Some(device_id.into());
        self
    }

    pub fn with_ldap_only(mut self, ldap_only: bool) -> Self {
        self.ldap_only = Some(ldap_only);
        self
    }

    pub(crate) fn payload(&self) -> LoginPayload<'_> {
        LoginPayload {
            login_id: &self.login_id,
            password: self.password.expose_secret(),
            token: self.token.as_deref(),
            device_id: self.device_id.as_deref(),
            ldap_only: self.ldap_only,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct LoginPayload<'a> {
    login_id: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    device_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    ldap_only: Option<bool>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn unset_login_fields_are_omitted() {
        let creds = LoginCredentials::new("u", "p");
        let body = serde_json::to_value(creds.payload()).unwrap();
        assert_eq!(body, json!({ "login_id": "u", "password": "p" }));
    }

    #[test]
    fn set_login_fields_are_sent() {
        let creds = LoginCredentials::new("u", "p")
            .with_mfa_token("123456")
            .with_device_id("dev-1")
            .with_ldap_only(false);
        let body = serde_json::to_value(creds.payload()).unwrap();
        assert_eq!(
            body,
            json!({
                "login_id": "u",
                "password": "p",
                "token": "123456",
                "device_id": "dev-1",
                "ldap_only": false
            })
        );
    }

    #[test]
    fn debug_output_hides_secrets() {
        let auth = AuthStrategy::login("u", "hunter2");
        assert!(!format!("{auth:?}").contains("hunter2"));
        let auth = AuthStrategy::token("tok-secret");
        assert!(!format!("{auth:?}").contains("tok-secret"));
        assert_eq!(auth.label(), "token");
    }
}
