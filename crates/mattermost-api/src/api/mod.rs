//! API facets: stateless groupings of endpoint methods.
//!
//! A facet is `{&Client, skip_response_parsing}` and nothing else. It builds
//! a [`Request`] per call and hands it to the client, so it never caches,
//! never holds a transport of its own, and never bypasses the error hook.

use bytes::Bytes;
use serde::de::DeserializeOwned;

use crate::client::Client;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::Request;
use crate::response::{self, ApiResponse};

mod authentication;
mod bleve;
mod bots;
mod brand;
mod channels;
mod cloud;
mod cluster;
mod commands;
mod compliance;
mod data_retention;
mod elasticsearch;
mod exports;
mod files;
mod groups;
mod imports;
mod integration_actions;
mod jobs;
mod ldap;
mod migrate;
mod oauth;
mod open_graph;
mod permissions;
mod plugins;
mod posts;
mod preferences;
mod reactions;
mod roles;
mod root;
mod saml;
mod schemes;
mod search;
mod shared_channels;
mod status;
mod system;
mod teams;
mod terms_of_service;
mod threads;
mod uploads;
mod users;
mod webhooks;

pub use posts::ChannelPostsQuery;
pub use threads::ThreadsQuery;
pub use users::UserListQuery;

#[derive(Debug, Clone, Copy)]
struct Facet<'a> {
    client: &'a Client,
    skip_response_parsing: bool,
}

impl<'a> Facet<'a> {
    fn new(client: &'a Client) -> Self {
        Self {
            client,
            skip_response_parsing: client.options().skip_response_parsing,
        }
    }

    /// JSON endpoints (single values and lists alike).
    async fn call<T: DeserializeOwned>(self, request: Request) -> Result<ApiResponse<T>, Error> {
        let success = request.success;
        let (_transport, resp) = self.client.send(request).await?;
        response::parse(resp, success, self.skip_response_parsing).await
    }

    /// Endpoints answering `{"status":"OK"}` or `204 No Content`.
    async fn status(self, request: Request) -> Result<ApiResponse<StatusOk>, Error> {
        let success = request.success;
        let (_transport, resp) = self.client.send(request).await?;
        response::parse_status(resp, success, self.skip_response_parsing).await
    }

    /// Binary downloads.
    async fn bytes(self, request: Request) -> Result<ApiResponse<Bytes>, Error> {
        let success = request.success;
        let (_transport, resp) = self.client.send(request).await?;
        response::parse_bytes(resp, success, self.skip_response_parsing).await
    }
}

macro_rules! facets {
    ($($(#[$doc:meta])* $accessor:ident => $name:ident,)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy)]
            pub struct $name<'a> {
                facet: Facet<'a>,
            }

            impl $name<'_> {
                /// Whether this facet returns raw responses instead of models.
                pub fn skips_response_parsing(&self) -> bool {
                    self.facet.skip_response_parsing
                }
            }
        )*

        impl Client {
            $(
                $(#[$doc])*
                pub fn $accessor(&self) -> $name<'_> {
                    $name { facet: Facet::new(self) }
                }
            )*
        }
    };
}

facets! {
    /// Personal access tokens and MFA.
    authentication => AuthenticationApi,
    /// Bleve search index administration.
    bleve => BleveApi,
    /// Bot accounts.
    bots => BotsApi,
    /// Custom branding.
    brand => BrandApi,
    /// Channels and channel membership.
    channels => ChannelsApi,
    /// Cloud workspace subscription and billing.
    cloud => CloudApi,
    /// High-availability cluster status.
    cluster => ClusterApi,
    /// Slash commands.
    commands => CommandsApi,
    /// Compliance exports.
    compliance => ComplianceApi,
    /// Data retention policies.
    data_retention => DataRetentionApi,
    /// Elasticsearch administration.
    elasticsearch => ElasticsearchApi,
    /// Bulk export files.
    exports => ExportsApi,
    /// File uploads, downloads and metadata.
    files => FilesApi,
    /// User groups and their syncables.
    groups => GroupsApi,
    /// Bulk import files.
    imports => ImportsApi,
    /// Interactive dialogs and message actions.
    integration_actions => IntegrationActionsApi,
    /// Background jobs.
    jobs => JobsApi,
    /// LDAP synchronization.
    ldap => LdapApi,
    /// Authentication-method migrations.
    migrate => MigrateApi,
    /// OAuth 2.0 applications.
    oauth => OAuthApi,
    /// OpenGraph metadata lookups.
    open_graph => OpenGraphApi,
    /// Ancillary permissions.
    permissions => PermissionsApi,
    /// Server plugins.
    plugins => PluginsApi,
    /// Posts and threads.
    posts => PostsApi,
    /// User preferences.
    preferences => PreferencesApi,
    /// Emoji reactions.
    reactions => ReactionsApi,
    /// Roles.
    roles => RolesApi,
    /// Server-level endpoints outside any group.
    root => RootApi,
    /// SAML configuration.
    saml => SamlApi,
    /// Permission schemes.
    schemes => SchemesApi,
    /// Post, user and channel search.
    search => SearchApi,
    /// Shared channels.
    shared_channels => SharedChannelsApi,
    /// User presence.
    status => StatusApi,
    /// Server configuration, health and logs.
    system => SystemApi,
    /// Teams and team membership.
    teams => TeamsApi,
    /// Terms of service.
    terms_of_service => TermsOfServiceApi,
    /// Collapsed reply threads.
    threads => ThreadsApi,
    /// Resumable uploads.
    uploads => UploadsApi,
    /// Users.
    users => UsersApi,
    /// Incoming and outgoing webhooks.
    webhooks => WebhooksApi,
}
