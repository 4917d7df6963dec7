use serde::{Deserialize, Serialize};

/// Mattermost's bare acknowledgement body, `{"status":"OK"}`.
///
/// Also the standardized value for endpoints answering `204 No Content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusOk {
    pub status: String,
}

impl StatusOk {
    pub fn ok() -> Self {
        Self {
            status: "OK".into(),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
