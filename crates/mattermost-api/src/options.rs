// ── Client configuration ──
//
// Immutable description of *how* to reach a Mattermost server: where it
// lives, how to credential requests, how to tune the transport, and whether
// facets parse responses. `mattermost-config` builds one of these from
// profiles; applications may also build one directly.

use url::Url;

use crate::auth::AuthStrategy;
use crate::error::Error;
use crate::transport::TransportConfig;

/// Default API prefix of a Mattermost server.
pub const DEFAULT_BASEPATH: &str = "/api/v4";

#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Scheme, host and optional port of the server.
    pub url: String,
    /// Path prefix joined onto `url`.
    pub basepath: String,
    pub auth: AuthStrategy,
    pub transport: TransportConfig,
    /// Return raw responses instead of parsed models.
    pub skip_response_parsing: bool,
}

impl ClientOptions {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            basepath: DEFAULT_BASEPATH.into(),
            auth: AuthStrategy::None,
            transport: TransportConfig::default(),
            skip_response_parsing: false,
        }
    }

    pub fn with_basepath(mut self, basepath: impl Into<String>) -> Self {
        self.basepath = basepath.into();
        self
    }

    pub fn with_auth(mut self, auth: AuthStrategy) -> Self {
        self.auth = auth;
        self
    }

    pub fn with_transport(mut self, transport: TransportConfig) -> Self {
        self.transport = transport;
        self
    }

    pub fn with_skip_response_parsing(mut self, skip: bool) -> Self {
        self.skip_response_parsing = skip;
        self
    }

    /// Compose the API base URL by URL-joining `basepath` onto `url`.
    ///
    /// The result always ends in `/` so endpoint paths can be appended as
    /// segments without producing `//`.
    pub fn base_url(&self) -> Result<Url, Error> {
        if self.url.trim().is_empty() {
            return Err(Error::InvalidOptions("server URL must not be empty".into()));
        }

        let server = Url::parse(self.url.trim())?;
        if server.cannot_be_a_base() || server.host_str().is_none() {
            return Err(Error::InvalidOptions(format!(
                "server URL {server} has no host"
            )));
        }

        let mut base = if self.basepath.is_empty() {
            server
        } else {
            server.join(&self.basepath)?
        };

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        base.set_query(None);
        base.set_fragment(None);
        Ok(base)
    }
}
