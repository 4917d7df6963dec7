use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user account, from `GET /users/{user_id}` and friends.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub create_at: i64,
    pub update_at: i64,
    pub delete_at: i64,
    pub username: String,
    pub auth_service: String,
    pub email: String,
    pub email_verified: bool,
    pub nickname: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    /// Space-separated role names (e.g. `system_user system_admin`).
    pub roles: String,
    pub locale: String,
    pub is_bot: bool,
    pub last_picture_update: i64,
    pub timezone: HashMap<String, String>,
    pub props: HashMap<String, String>,
    pub notify_props: HashMap<String, String>,
    /// Catch-all for fields not modeled above.
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl User {
    pub fn is_deleted(&self) -> bool {
        self.delete_at > 0
    }

    pub fn role_names(&self) -> impl Iterator<Item = &str> {
        self.roles.split_whitespace()
    }
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// Body of `PUT /users/{user_id}/patch`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[allow(clippy::option_option)] // distinguishes "leave unchanged" from "clear"
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<HashMap<String, String>>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn patch_omits_unset_and_keeps_null() {
        let patch = UserPatch {
            nickname: Some(None),
            first_name: Some(Some("Ada".into())),
            ..UserPatch::default()
        };
        assert_eq!(
            serde_json::to_value(&patch).unwrap(),
            json!({ "nickname": null, "first_name": "Ada" })
        );
    }

    #[test]
    fn user_tolerates_missing_and_unknown_fields() {
        let user: User = serde_json::from_value(json!({
            "id": "u1",
            "username": "ada",
            "roles": "system_user system_admin",
            "mfa_active": true
        }))
        .unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.role_names().collect::<Vec<_>>(), ["system_user", "system_admin"]);
        assert_eq!(user.extra.get("mfa_active"), Some(&json!(true)));
        assert!(!user.is_deleted());
    }
}
