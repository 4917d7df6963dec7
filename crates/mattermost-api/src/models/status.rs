use serde::{Deserialize, Serialize};

/// Presence of a user: `online`, `away`, `dnd` or `offline`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserStatus {
    pub user_id: String,
    pub status: String,
    pub manual: bool,
    pub last_activity_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnd_end_time: Option<i64>,
}
