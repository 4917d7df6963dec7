// Transport sessions: configured `reqwest::Client` instances bound to the
// composed API base URL.
//
// A transport carries the bearer credential and runs the error-mapping hook
// on every response before any user-registered hook sees it. It is opened
// either for the lifetime of a session scope or for a single call.

use std::fmt;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use reqwest::header::HeaderMap;
use reqwest::{Method, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};
use url::Url;

use crate::auth::{AuthStrategy, LOGIN_PATH, LoginCredentials, TOKEN_HEADER};
use crate::error::{Error, HttpError};
use crate::request::endpoint_url;

/// TLS verification mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsMode {
    /// Use the system certificate store.
    #[default]
    System,
    /// Trust an additional CA certificate from the given PEM file.
    CustomCa(PathBuf),
    /// Accept any certificate (self-signed test servers).
    DangerAcceptInvalid,
}

/// Observer notified about transport lifecycle and responses.
///
/// Hooks run after the error-mapping hook, so `on_response` only ever sees
/// responses with a non-error status.
pub trait TransportHook: Send + Sync {
    fn on_open(&self, _base_url: &Url) {}

    fn on_response(&self, _response: &Response) {}

    fn on_close(&self, _base_url: &Url) {}
}

/// Transport tuning forwarded to every `reqwest::Client` the runtime builds.
#[derive(Clone)]
pub struct TransportConfig {
    pub tls: TlsMode,
    /// Whole-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
    /// Route every request through this proxy.
    pub proxy: Option<Url>,
    pub user_agent: String,
    /// Keep a cookie jar per transport (Mattermost also sets `MMAUTHTOKEN`).
    pub cookie_store: bool,
    /// Extra headers sent with every request.
    pub default_headers: HeaderMap,
    pub hooks: Vec<Arc<dyn TransportHook>>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            tls: TlsMode::System,
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: None,
            proxy: None,
            user_agent: concat!("mattermost-api/", env!("CARGO_PKG_VERSION")).into(),
            cookie_store: true,
            default_headers: HeaderMap::new(),
            hooks: Vec::new(),
        }
    }
}

impl fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportConfig")
            .field("tls", &self.tls)
            .field("timeout", &self.timeout)
            .field("connect_timeout", &self.connect_timeout)
            .field("proxy", &self.proxy)
            .field("user_agent", &self.user_agent)
            .field("cookie_store", &self.cookie_store)
            .field("default_headers", &self.default_headers.len())
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl TransportConfig {
    /// Register an observer. Hooks run in registration order.
    pub fn with_hook(mut self, hook: Arc<dyn TransportHook>) -> Self {
        self.hooks.push(hook);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_tls(mut self, tls: TlsMode) -> Self {
        self.tls = tls;
        self
    }

    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .default_headers(self.default_headers.clone())
            .cookie_store(self.cookie_store);

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = self.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(ref proxy) = self.proxy {
            builder = builder.proxy(reqwest::Proxy::all(proxy.as_str())?);
        }

        match &self.tls {
            TlsMode::System => {}
            TlsMode::CustomCa(path) => {
                let cert_pem = std::fs::read(path)
                    .map_err(|e| Error::Tls(format!("failed to read CA cert: {e}")))?;
                let cert = reqwest::Certificate::from_pem(&cert_pem)
                    .map_err(|e| Error::Tls(format!("invalid CA cert: {e}")))?;
                builder = builder.add_root_certificate(cert);
            }
            TlsMode::DangerAcceptInvalid => {
                builder = builder.danger_accept_invalid_certs(true);
            }
        }

        builder
            .build()
            .map_err(|e| Error::Tls(format!("failed to build HTTP client: {e}")))
    }
}

/// A configured HTTP client bound to the API base URL.
pub struct Transport {
    http: reqwest::Client,
    base_url: Url,
    bearer: Option<SecretString>,
    hooks: Vec<Arc<dyn TransportHook>>,
    closed: AtomicBool,
}

impl fmt::Debug for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .field("authenticated", &self.bearer.is_some())
            .field("closed", &self.is_closed())
            .finish_non_exhaustive()
    }
}

impl Transport {
    /// Build a transport and credential it according to `auth`.
    ///
    /// For [`AuthStrategy::Login`] this performs the login exchange; a failed
    /// login fails the whole construction. Returns the bearer token now in
    /// effect, if any.
    pub(crate) async fn open(
        base_url: Url,
        auth: &AuthStrategy,
        config: &TransportConfig,
    ) -> Result<(Self, Option<SecretString>), Error> {
        let mut transport = Self {
            http: config.build_client()?,
            base_url,
            bearer: None,
            hooks: config.hooks.clone(),
            closed: AtomicBool::new(false),
        };

        transport.bearer = match auth {
            AuthStrategy::Token { token } => Some(token.clone()),
            AuthStrategy::Login(creds) => Some(transport.login(creds).await?),
            AuthStrategy::None => None,
        };

        debug!(
            base_url = %transport.base_url,
            auth = auth.label(),
            "transport opened"
        );
        for hook in &transport.hooks {
            hook.on_open(&transport.base_url);
        }

        let token = transport.bearer.clone();
        Ok((transport, token))
    }

    async fn login(&self, creds: &LoginCredentials) -> Result<SecretString, Error> {
        let url = endpoint_url(&self.base_url, LOGIN_PATH, &[])?;
        debug!(login_id = %creds.login_id, "logging in at {url}");

        // User hooks only see traffic from an opened transport.
        let resp = self.http.post(url).json(&creds.payload()).send().await?;
        let resp = map_error_response(resp).await?;

        let token = resp
            .headers()
            .get(TOKEN_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::Authentication {
                message: format!("login response carried no {TOKEN_HEADER} header"),
            })?;

        debug!("login successful");
        Ok(SecretString::from(token.to_owned()))
    }

    /// The composed API base URL (`url` joined with `basepath`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Mark the transport closed and notify hooks. Idempotent.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::AcqRel) {
            debug!(base_url = %self.base_url, "transport closed");
            for hook in &self.hooks {
                hook.on_close(&self.base_url);
            }
        }
    }

    /// Start a request against an absolute URL.
    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Credential, dispatch, and run the response hooks.
    ///
    /// The error-mapping hook always runs first: a 4xx/5xx response is
    /// turned into an [`Error`] before user hooks are consulted.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, Error> {
        let builder = match self.bearer {
            Some(ref token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        };

        let resp = map_error_response(builder.send().await?).await?;
        for hook in &self.hooks {
            hook.on_response(&resp);
        }
        Ok(resp)
    }
}

/// The error-mapping response hook.
///
/// Passes non-error responses through untouched; consumes the body of
/// 4xx/5xx responses to build the typed error.
pub(crate) async fn map_error_response(resp: Response) -> Result<Response, Error> {
    let status = resp.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return Ok(resp);
    }

    let url = resp.url().clone();
    let body = match resp.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!(%status, "failed to read error body: {e}");
            format!("failed to read error body: {e}")
        }
    };
    let err = Error::from_http(HttpError { status, url, body });
    debug!(%status, kind = ?err.kind(), "mapped error response");
    Err(err)
}

/// A transport acquired for one facet call.
///
/// Scoped transports are borrowed from the client and left open; one-shot
/// transports are closed when the guard drops, on every exit path.
#[derive(Debug)]
pub struct TransportGuard {
    transport: Arc<Transport>,
    owned: bool,
}

impl TransportGuard {
    pub(crate) fn scoped(transport: Arc<Transport>) -> Self {
        Self {
            transport,
            owned: false,
        }
    }

    pub(crate) fn one_shot(transport: Transport) -> Self {
        Self {
            transport: Arc::new(transport),
            owned: true,
        }
    }

    /// Whether this guard will close the transport on drop.
    pub fn is_one_shot(&self) -> bool {
        self.owned
    }
}

impl Deref for TransportGuard {
    type Target = Transport;

    fn deref(&self) -> &Transport {
        &self.transport
    }
}

impl Drop for TransportGuard {
    fn drop(&mut self) {
        if self.owned {
            self.transport.close();
        }
    }
}
