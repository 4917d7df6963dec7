// mattermost-api: Async Rust client runtime for the Mattermost REST API (v4)

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod options;
pub mod request;
pub mod response;
pub mod transport;

pub use api::{
    AuthenticationApi, BleveApi, BotsApi, BrandApi, ChannelPostsQuery, ChannelsApi, CloudApi,
    ClusterApi, CommandsApi, ComplianceApi, DataRetentionApi, ElasticsearchApi, ExportsApi,
    FilesApi, GroupsApi, ImportsApi, IntegrationActionsApi, JobsApi, LdapApi, MigrateApi, OAuthApi,
    OpenGraphApi, PermissionsApi, PluginsApi, PostsApi, PreferencesApi, ReactionsApi, RolesApi,
    RootApi, SamlApi, SchemesApi, SearchApi, SharedChannelsApi, StatusApi, SystemApi, TeamsApi,
    TermsOfServiceApi, ThreadsApi, ThreadsQuery, UploadsApi, UserListQuery, UsersApi, WebhooksApi,
};
pub use auth::{AuthStrategy, LoginCredentials};
pub use client::{Client, Session};
pub use error::{Error, ErrorKind, HttpError};
pub use options::{ClientOptions, DEFAULT_BASEPATH};
pub use request::{Body, FilePart, MultipartBody, MultipartModel, Query, QueryValue, Request};
pub use response::ApiResponse;
pub use transport::{TlsMode, Transport, TransportConfig, TransportGuard, TransportHook};
