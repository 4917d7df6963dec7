use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET /system/ping`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemPing {
    pub status: String,
    #[serde(rename = "ActiveSearchBackend")]
    pub active_search_backend: String,
    /// Health-check details returned when `get_server_status` is requested.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

/// Limited client configuration, from `GET /config/client`.
///
/// Keys are server-defined (`Version`, `SiteName`, `EnableSignUpWithEmail`,
/// ...) and values are always strings.
pub type ClientConfig = HashMap<String, String>;
