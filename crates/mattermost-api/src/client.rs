// Top-level client façade.
//
// Owns the options, the active credential, and (inside a session scope)
// one long-lived transport. Every facet call goes through `acquire`, which
// either lends the scoped transport or opens a one-shot transport that is
// closed when the call returns.

use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock};

use secrecy::SecretString;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::models::StatusOk;
use crate::options::ClientOptions;
use crate::request::Request;
use crate::response::{self, ApiResponse};
use crate::transport::{Transport, TransportGuard};

/// Async client for the Mattermost REST API.
///
/// Cloning is cheap and shares the options and the active-token slot.
/// Endpoints are reached through facets: `client.users().get_user("me")`.
#[derive(Clone)]
pub struct Client {
    options: Arc<ClientOptions>,
    base_url: Url,
    active_token: Arc<RwLock<Option<SecretString>>>,
    transport: Option<Arc<Transport>>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("auth", &self.options.auth.label())
            .field("transport", &self.transport)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Validate `options` and build a client. No network I/O happens here.
    pub fn new(options: ClientOptions) -> Result<Self, Error> {
        let base_url = options.base_url()?;
        Ok(Self {
            options: Arc::new(options),
            base_url,
            active_token: Arc::new(RwLock::new(None)),
            transport: None,
        })
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    /// The composed API base URL (always ending in `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The bearer token currently in use, for collaborators such as a
    /// websocket client. Empty until a transport has been opened.
    pub fn active_token(&self) -> Option<SecretString> {
        self.active_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_active_token(&self, token: SecretString) {
        *self
            .active_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(token);
    }

    /// Websocket endpoint under the API base (`wss://host/api/v4/websocket`).
    pub fn websocket_url(&self) -> Result<Url, Error> {
        let mut url = self.base_url.join("websocket")?;
        let scheme = if url.scheme() == "https" { "wss" } else { "ws" };
        url.set_scheme(scheme)
            .map_err(|()| Error::InvalidOptions(format!("cannot derive websocket URL from {url}")))?;
        Ok(url)
    }

    /// The scoped transport, while a session scope is open.
    pub fn transport(&self) -> Option<&Arc<Transport>> {
        self.transport.as_ref().filter(|t| !t.is_closed())
    }

    // ── Transport lifecycle ──────────────────────────────────────────

    async fn open_transport(&self) -> Result<Transport, Error> {
        let (transport, token) = Transport::open(
            self.base_url.clone(),
            &self.options.auth,
            &self.options.transport,
        )
        .await?;
        if let Some(token) = token {
            self.set_active_token(token);
        }
        Ok(transport)
    }

    /// Lend the scoped transport, or open a one-shot one.
    ///
    /// A one-shot transport is closed when the returned guard drops.
    pub async fn acquire(&self) -> Result<TransportGuard, Error> {
        if let Some(transport) = self.transport() {
            return Ok(TransportGuard::scoped(Arc::clone(transport)));
        }
        Ok(TransportGuard::one_shot(self.open_transport().await?))
    }

    /// Open (and immediately close) a transport just to populate
    /// [`active_token`](Self::active_token).
    pub async fn login(&self) -> Result<Option<SecretString>, Error> {
        let transport = self.open_transport().await?;
        transport.close();
        Ok(self.active_token())
    }

    /// Open a session scope.
    ///
    /// The scope works on a shallow copy of this client with its own
    /// transport and token slot, so `self` stays usable for one-shot calls
    /// and never picks up the scoped transport. With login auth the login
    /// exchange happens here, once for the whole scope. The transport is
    /// closed when the returned [`Session`] is closed or dropped.
    pub async fn session(&self) -> Result<Session, Error> {
        let mut scoped = Self {
            options: Arc::clone(&self.options),
            base_url: self.base_url.clone(),
            active_token: Arc::new(RwLock::new(self.active_token())),
            transport: None,
        };
        let transport = scoped.open_transport().await?;
        scoped.transport = Some(Arc::new(transport));
        debug!(base_url = %scoped.base_url, "session opened");
        Ok(Session { client: scoped })
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Perform `request` and decode the documented success status into `T`.
    ///
    /// This is the hook generated endpoint methods go through; it is public
    /// so endpoints without a facet method can still be called.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: Request,
    ) -> Result<ApiResponse<T>, Error> {
        self.execute_with(request, self.options.skip_response_parsing)
            .await
    }

    /// Like [`execute`](Self::execute), for endpoints answering with a bare
    /// status: a documented `204 No Content` yields [`StatusOk::ok`], a
    /// documented `200` decodes `{"status":"OK"}`.
    pub async fn execute_status(&self, request: Request) -> Result<ApiResponse<StatusOk>, Error> {
        let success = request.success;
        let (_transport, resp) = self.send(request).await?;
        response::parse_status(resp, success, self.options.skip_response_parsing).await
    }

    pub(crate) async fn execute_with<T: DeserializeOwned>(
        &self,
        request: Request,
        skip_parsing: bool,
    ) -> Result<ApiResponse<T>, Error> {
        let success = request.success;
        let (_transport, resp) = self.send(request).await?;
        response::parse(resp, success, skip_parsing).await
    }

    /// Acquire a transport and dispatch `request` through it.
    ///
    /// The guard is handed back with the response so a one-shot transport
    /// stays open until the caller has finished reading the body.
    pub async fn send(
        &self,
        request: Request,
    ) -> Result<(TransportGuard, reqwest::Response), Error> {
        let transport = self.acquire().await?;
        let builder = request.into_builder(&transport)?;
        let resp = transport.send(builder).await?;
        Ok((transport, resp))
    }
}

/// An open session scope.
///
/// Dereferences to the scoped [`Client`]; every facet call made through it
/// reuses one transport. Closing or dropping the session closes that
/// transport.
#[derive(Debug)]
pub struct Session {
    client: Client,
}

impl Session {
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Close the scope explicitly.
    pub fn close(self) {
        drop(self);
    }
}

impl Deref for Session {
    type Target = Client;

    fn deref(&self) -> &Client {
        &self.client
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(ref transport) = self.client.transport {
            transport.close();
            debug!(base_url = %self.client.base_url, "session closed");
        }
    }
}
