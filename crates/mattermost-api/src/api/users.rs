// Users: accounts, lookup, and session logout.

use reqwest::StatusCode;
use serde_json::Value;

use super::UsersApi;
use crate::error::Error;
use crate::models::{CreateUser, StatusOk, User, UserPatch};
use crate::request::{Body, Request};
use crate::response::ApiResponse;

/// Filters for `GET /users`. Unset fields are left out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub in_team: Option<String>,
    pub not_in_team: Option<String>,
    pub in_channel: Option<String>,
    pub not_in_channel: Option<String>,
    pub in_group: Option<String>,
    pub without_team: Option<bool>,
    pub active: Option<bool>,
    pub inactive: Option<bool>,
    pub role: Option<String>,
    pub sort: Option<String>,
}

impl UsersApi<'_> {
    /// `GET /users/{user_id}`; `"me"` names the authenticated user.
    pub async fn get_user(&self, user_id: &str) -> Result<ApiResponse<User>, Error> {
        self.facet
            .call(Request::get("/users/{user_id}").var("user_id", user_id))
            .await
    }

    /// `GET /users`
    pub async fn get_users(&self, query: &UserListQuery) -> Result<ApiResponse<Vec<User>>, Error> {
        let request = Request::get("/users")
            .param("page", query.page)
            .param("per_page", query.per_page)
            .param("in_team", query.in_team.as_deref())
            .param("not_in_team", query.not_in_team.as_deref())
            .param("in_channel", query.in_channel.as_deref())
            .param("not_in_channel", query.not_in_channel.as_deref())
            .param("in_group", query.in_group.as_deref())
            .param("without_team", query.without_team)
            .param("active", query.active)
            .param("inactive", query.inactive)
            .param("role", query.role.as_deref())
            .param("sort", query.sort.as_deref());
        self.facet.call(request).await
    }

    /// `GET /users/username/{username}`
    pub async fn get_user_by_username(&self, username: &str) -> Result<ApiResponse<User>, Error> {
        self.facet
            .call(Request::get("/users/username/{username}").var("username", username))
            .await
    }

    /// `GET /users/email/{email}`
    pub async fn get_user_by_email(&self, email: &str) -> Result<ApiResponse<User>, Error> {
        self.facet
            .call(Request::get("/users/email/{email}").var("email", email))
            .await
    }

    /// `POST /users/ids` with a bare list of ids.
    pub async fn get_users_by_ids(
        &self,
        user_ids: &[String],
        since: Option<i64>,
    ) -> Result<ApiResponse<Vec<User>>, Error> {
        let request = Request::post("/users/ids")
            .param("since", since)
            .body(Body::raw(user_ids.to_vec()));
        self.facet.call(request).await
    }

    /// `POST /users`, optionally redeeming an invitation.
    pub async fn create_user(
        &self,
        user: &CreateUser,
        invite_id: Option<&str>,
    ) -> Result<ApiResponse<User>, Error> {
        let request = Request::post("/users")
            .param("iid", invite_id)
            .json(user)?
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `PUT /users/{user_id}/patch`
    pub async fn patch_user(
        &self,
        user_id: &str,
        patch: &UserPatch,
    ) -> Result<ApiResponse<User>, Error> {
        let request = Request::put("/users/{user_id}/patch")
            .var("user_id", user_id)
            .json(patch)?;
        self.facet.call(request).await
    }

    /// `DELETE /users/{user_id}` (deactivates the account).
    pub async fn delete_user(&self, user_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::delete("/users/{user_id}").var("user_id", user_id))
            .await
    }

    /// `PUT /users/{user_id}/active`
    pub async fn update_user_active(
        &self,
        user_id: &str,
        active: bool,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let request = Request::put("/users/{user_id}/active")
            .var("user_id", user_id)
            .body(Body::raw(serde_json::json!({ "active": active })));
        self.facet.status(request).await
    }

    /// `GET /users/autocomplete`
    pub async fn autocomplete_users(
        &self,
        name: &str,
        team_id: Option<&str>,
        channel_id: Option<&str>,
        limit: Option<i64>,
    ) -> Result<ApiResponse<Value>, Error> {
        let request = Request::get("/users/autocomplete")
            .param("name", Some(name))
            .param("team_id", team_id)
            .param("channel_id", channel_id)
            .param("limit", limit);
        self.facet.call(request).await
    }

    /// `POST /users/{user_id}/typing`: broadcast a typing event.
    pub async fn publish_user_typing(
        &self,
        user_id: &str,
        channel_id: &str,
        parent_id: Option<&str>,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let mut body = serde_json::json!({ "channel_id": channel_id });
        if let Some(parent_id) = parent_id {
            body["parent_id"] = Value::from(parent_id);
        }
        let request = Request::post("/users/{user_id}/typing")
            .var("user_id", user_id)
            .body(Body::raw(body))
            .expect(StatusCode::NO_CONTENT);
        self.facet.status(request).await
    }

    /// `POST /users/logout`: revokes the session the token belongs to.
    pub async fn logout(&self) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet.status(Request::post("/users/logout")).await
    }
}
