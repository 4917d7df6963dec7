use serde_json::Value;

use super::GroupsApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl GroupsApi<'_> {
    /// `GET /groups`
    pub async fn get_groups(
        &self,
        q: Option<&str>,
        page: Option<i64>,
        per_page: Option<i64>,
        not_associated_to_team: Option<&str>,
    ) -> Result<ApiResponse<Vec<Value>>, Error> {
        let request = Request::get("/groups")
            .param("q", q)
            .param("page", page)
            .param("per_page", per_page)
            .param("not_associated_to_team", not_associated_to_team);
        self.facet.call(request).await
    }

    /// `GET /groups/{group_id}`
    pub async fn get_group(&self, group_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::get("/groups/{group_id}").var("group_id", group_id))
            .await
    }

    /// `PUT /groups/{group_id}/patch`
    pub async fn patch_group(&self, group_id: &str, patch: Value) -> Result<ApiResponse<Value>, Error> {
        let request = Request::put("/groups/{group_id}/patch")
            .var("group_id", group_id)
            .body(Body::raw(patch));
        self.facet.call(request).await
    }

    /// `GET /groups/{group_id}/members`
    pub async fn get_group_users(
        &self,
        group_id: &str,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Value>, Error> {
        let request = Request::get("/groups/{group_id}/members")
            .var("group_id", group_id)
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }

    /// `POST /groups/{group_id}/{syncable_type}s/{syncable_id}/link`
    ///
    /// `syncable_type` is `team` or `channel`.
    pub async fn link_group_syncable(
        &self,
        group_id: &str,
        syncable_type: &str,
        syncable_id: &str,
    ) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/groups/{group_id}/{syncable_type}s/{syncable_id}/link")
            .var("group_id", group_id)
            .var("syncable_type", syncable_type)
            .var("syncable_id", syncable_id)
            .expect(reqwest::StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `DELETE /groups/{group_id}/{syncable_type}s/{syncable_id}/link`
    pub async fn unlink_group_syncable(
        &self,
        group_id: &str,
        syncable_type: &str,
        syncable_id: &str,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let request = Request::delete("/groups/{group_id}/{syncable_type}s/{syncable_id}/link")
            .var("group_id", group_id)
            .var("syncable_type", syncable_type)
            .var("syncable_id", syncable_id);
        self.facet.status(request).await
    }

    /// `GET /users/{user_id}/groups`
    pub async fn get_groups_by_user(&self, user_id: &str) -> Result<ApiResponse<Vec<Value>>, Error> {
        self.facet
            .call(Request::get("/users/{user_id}/groups").var("user_id", user_id))
            .await
    }
}
