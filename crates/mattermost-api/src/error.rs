use reqwest::StatusCode;
use serde_json::Value;
use strum::{Display, EnumIter};
use thiserror::Error;
use url::Url;

/// Failure kinds the Mattermost server reports through HTTP status codes.
///
/// This is the single status → kind table; every 4xx/5xx outside of it
/// surfaces as [`Error::Http`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ErrorKind {
    InvalidOrMissingParameters,
    NoAccessTokenProvided,
    NotEnoughPermissions,
    ResourceNotFound,
    MethodNotAllowed,
    ContentTooLarge,
    TooManyRequests,
    InternalServerError,
    FeatureDisabled,
}

impl ErrorKind {
    pub fn from_status(status: StatusCode) -> Option<Self> {
        match status.as_u16() {
            400 => Some(Self::InvalidOrMissingParameters),
            401 => Some(Self::NoAccessTokenProvided),
            403 => Some(Self::NotEnoughPermissions),
            404 => Some(Self::ResourceNotFound),
            405 => Some(Self::MethodNotAllowed),
            413 => Some(Self::ContentTooLarge),
            429 => Some(Self::TooManyRequests),
            500 => Some(Self::InternalServerError),
            501 => Some(Self::FeatureDisabled),
            _ => None,
        }
    }

    /// The status code this kind is derived from.
    pub fn status(self) -> StatusCode {
        match self {
            Self::InvalidOrMissingParameters => StatusCode::BAD_REQUEST,
            Self::NoAccessTokenProvided => StatusCode::UNAUTHORIZED,
            Self::NotEnoughPermissions => StatusCode::FORBIDDEN,
            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::ContentTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::FeatureDisabled => StatusCode::NOT_IMPLEMENTED,
        }
    }
}

/// The raw HTTP failure behind a mapped error.
///
/// Kept as the `source()` of every taxonomy variant so error chains show
/// the exchange that produced them.
#[derive(Debug, Clone, Error)]
#[error("HTTP {status} for {url}: {body}")]
pub struct HttpError {
    pub status: StatusCode,
    pub url: Url,
    pub body: String,
}

/// Top-level error type for the `mattermost-api` crate.
#[derive(Debug, Error)]
pub enum Error {
    // ── Mapped HTTP statuses ────────────────────────────────────────
    /// 400: malformed request the caller must fix.
    #[error("Invalid or missing parameters: {message}")]
    InvalidOrMissingParameters {
        message: String,
        #[source]
        source: HttpError,
    },

    /// 401: no token, or the token was rejected.
    #[error("No access token provided: {message}")]
    NoAccessTokenProvided {
        message: String,
        #[source]
        source: HttpError,
    },

    /// 403: authenticated, but lacking the permission.
    #[error("Not enough permissions: {message}")]
    NotEnoughPermissions {
        message: String,
        #[source]
        source: HttpError,
    },

    /// 404
    #[error("Resource not found: {message}")]
    ResourceNotFound {
        message: String,
        #[source]
        source: HttpError,
    },

    /// 405
    #[error("Method not allowed: {message}")]
    MethodNotAllowed {
        message: String,
        #[source]
        source: HttpError,
    },

    /// 413
    #[error("Content too large: {message}")]
    ContentTooLarge {
        message: String,
        #[source]
        source: HttpError,
    },

    /// 429: retry after the server's advertised delay.
    #[error("Too many requests: {message}")]
    TooManyRequests {
        message: String,
        #[source]
        source: HttpError,
    },

    /// 500
    #[error("Internal server error: {message}")]
    InternalServerError {
        message: String,
        #[source]
        source: HttpError,
    },

    /// 501: disabled by the server's configuration.
    #[error("Feature disabled: {message}")]
    FeatureDisabled {
        message: String,
        #[source]
        source: HttpError,
    },

    /// Any other 4xx/5xx, propagated as-is.
    #[error(transparent)]
    Http(HttpError),

    // ── Authentication ──────────────────────────────────────────────
    /// The login exchange completed without handing out a session token.
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Request construction ────────────────────────────────────────
    /// Client options rejected at construction time.
    #[error("Invalid client options: {0}")]
    InvalidOptions(String),

    /// A path template referenced a variable that was not supplied, or the
    /// base URL cannot carry path segments.
    #[error("Cannot render path {template:?}: {reason}")]
    PathVariable { template: String, reason: String },

    /// A multipart part could not be assembled (bad MIME type, etc.)
    #[error("Multipart body error: {0}")]
    Multipart(String),

    /// A request body failed to serialize.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ── Responses ───────────────────────────────────────────────────
    /// Success status, but the body could not be decoded into the declared type.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// A parsed value was demanded but the server answered with an
    /// undocumented (non-error) status.
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus { status: StatusCode },
}

impl Error {
    /// Build the taxonomy error for `kind`.
    pub fn from_kind(kind: ErrorKind, message: String, source: HttpError) -> Self {
        match kind {
            ErrorKind::InvalidOrMissingParameters => {
                Self::InvalidOrMissingParameters { message, source }
            }
            ErrorKind::NoAccessTokenProvided => Self::NoAccessTokenProvided { message, source },
            ErrorKind::NotEnoughPermissions => Self::NotEnoughPermissions { message, source },
            ErrorKind::ResourceNotFound => Self::ResourceNotFound { message, source },
            ErrorKind::MethodNotAllowed => Self::MethodNotAllowed { message, source },
            ErrorKind::ContentTooLarge => Self::ContentTooLarge { message, source },
            ErrorKind::TooManyRequests => Self::TooManyRequests { message, source },
            ErrorKind::InternalServerError => Self::InternalServerError { message, source },
            ErrorKind::FeatureDisabled => Self::FeatureDisabled { message, source },
        }
    }

    /// Map a failed exchange onto the taxonomy.
    ///
    /// The message is the body's `message` field when the body is a JSON
    /// object carrying one, otherwise the whole decoded body, otherwise the
    /// raw text.
    pub fn from_http(source: HttpError) -> Self {
        match ErrorKind::from_status(source.status) {
            Some(kind) => {
                let message = server_message(&source.body);
                Self::from_kind(kind, message, source)
            }
            None => Self::Http(source),
        }
    }

    /// The taxonomy kind, if this error came from a mapped status.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::InvalidOrMissingParameters { .. } => Some(ErrorKind::InvalidOrMissingParameters),
            Self::NoAccessTokenProvided { .. } => Some(ErrorKind::NoAccessTokenProvided),
            Self::NotEnoughPermissions { .. } => Some(ErrorKind::NotEnoughPermissions),
            Self::ResourceNotFound { .. } => Some(ErrorKind::ResourceNotFound),
            Self::MethodNotAllowed { .. } => Some(ErrorKind::MethodNotAllowed),
            Self::ContentTooLarge { .. } => Some(ErrorKind::ContentTooLarge),
            Self::TooManyRequests { .. } => Some(ErrorKind::TooManyRequests),
            Self::InternalServerError { .. } => Some(ErrorKind::InternalServerError),
            Self::FeatureDisabled { .. } => Some(ErrorKind::FeatureDisabled),
            _ => None,
        }
    }

    /// The underlying HTTP failure, for mapped and generic HTTP errors.
    pub fn http_error(&self) -> Option<&HttpError> {
        match self {
            Self::InvalidOrMissingParameters { source, .. }
            | Self::NoAccessTokenProvided { source, .. }
            | Self::NotEnoughPermissions { source, .. }
            | Self::ResourceNotFound { source, .. }
            | Self::MethodNotAllowed { source, .. }
            | Self::ContentTooLarge { source, .. }
            | Self::TooManyRequests { source, .. }
            | Self::InternalServerError { source, .. }
            | Self::FeatureDisabled { source, .. }
            | Self::Http(source) => Some(source),
            _ => None,
        }
    }

    /// HTTP status of the failed exchange, when there was one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Transport(e) => e.status(),
            Self::UnexpectedStatus { status, .. } => Some(*status),
            other => other.http_error().map(|e| e.status),
        }
    }

    /// The server-provided message of a mapped error.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::InvalidOrMissingParameters { message, .. }
            | Self::NoAccessTokenProvided { message, .. }
            | Self::NotEnoughPermissions { message, .. }
            | Self::ResourceNotFound { message, .. }
            | Self::MethodNotAllowed { message, .. }
            | Self::ContentTooLarge { message, .. }
            | Self::TooManyRequests { message, .. }
            | Self::InternalServerError { message, .. }
            | Self::FeatureDisabled { message, .. }
            | Self::Authentication { message } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Returns `true` if re-authenticating might resolve this error.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::NoAccessTokenProvided { .. } | Self::Authentication { .. }
        )
    }

    /// Returns `true` if a caller-side retry policy may reasonably retry.
    ///
    /// The runtime itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::TooManyRequests { .. } | Self::InternalServerError { .. } => true,
            _ => false,
        }
    }

    /// Returns `true` if this is a "not found" error.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

fn server_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => match map.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => Value::Object(map).to_string(),
        },
        Ok(Value::String(text)) => text,
        Ok(other) => other.to_string(),
        Err(_) => body.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    fn http(status: u16, body: &str) -> HttpError {
        HttpError {
            status: StatusCode::from_u16(status).unwrap(),
            url: Url::parse("https://mm.example/api/v4/users/me").unwrap(),
            body: body.into(),
        }
    }

    #[test]
    fn every_kind_round_trips_through_its_status() {
        for kind in ErrorKind::iter() {
            assert_eq!(ErrorKind::from_status(kind.status()), Some(kind));
            let err = Error::from_http(http(kind.status().as_u16(), "{}"));
            assert_eq!(err.kind(), Some(kind));
            assert_eq!(err.status(), Some(kind.status()));
        }
    }

    #[test]
    fn message_field_wins() {
        let err = Error::from_http(http(403, r#"{"message":"nope","id":"api.x"}"#));
        assert_eq!(err.message(), Some("nope"));
        assert!(matches!(err, Error::NotEnoughPermissions { .. }));
    }

    #[test]
    fn decoded_body_without_message() {
        let err = Error::from_http(http(400, r#"{"id":"api.bad"}"#));
        assert_eq!(err.message(), Some(r#"{"id":"api.bad"}"#));

        let err = Error::from_http(http(400, "[1,2]"));
        assert_eq!(err.message(), Some("[1,2]"));
    }

    #[test]
    fn raw_text_when_body_is_not_json() {
        let err = Error::from_http(http(500, "<html>boom</html>"));
        assert_eq!(err.message(), Some("<html>boom</html>"));
        assert!(err.is_retryable());
    }

    #[test]
    fn unmapped_status_is_generic_http_error() {
        let err = Error::from_http(http(418, "teapot"));
        match err {
            Error::Http(ref source) => {
                assert_eq!(source.status, StatusCode::IM_A_TEAPOT);
                assert_eq!(source.body, "teapot");
            }
            ref other => panic!("expected Http error, got: {other:?}"),
        }
        assert!(err.kind().is_none());
    }

    #[test]
    fn cause_is_chained() {
        use std::error::Error as _;

        let err = Error::from_http(http(404, r#"{"message":"gone"}"#));
        let source = err.source().unwrap();
        assert!(source.to_string().contains("HTTP 404"));
        assert!(err.is_not_found());
    }
}
