// Channels: lookup, lifecycle, and membership.

use reqwest::StatusCode;
use serde_json::json;

use super::ChannelsApi;
use crate::error::Error;
use crate::models::{Channel, ChannelMember, ChannelPatch, CreateChannel, StatusOk};
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl ChannelsApi<'_> {
    /// `GET /channels/{channel_id}`
    pub async fn get_channel(&self, channel_id: &str) -> Result<ApiResponse<Channel>, Error> {
        self.facet
            .call(Request::get("/channels/{channel_id}").var("channel_id", channel_id))
            .await
    }

    /// `GET /teams/{team_id}/channels/name/{channel_name}`
    pub async fn get_channel_by_name(
        &self,
        team_id: &str,
        channel_name: &str,
        include_deleted: Option<bool>,
    ) -> Result<ApiResponse<Channel>, Error> {
        let request = Request::get("/teams/{team_id}/channels/name/{channel_name}")
            .var("team_id", team_id)
            .var("channel_name", channel_name)
            .param("include_deleted", include_deleted);
        self.facet.call(request).await
    }

    /// `GET /users/{user_id}/teams/{team_id}/channels`
    pub async fn get_channels_for_team_for_user(
        &self,
        user_id: &str,
        team_id: &str,
        include_deleted: Option<bool>,
        last_delete_at: Option<i64>,
    ) -> Result<ApiResponse<Vec<Channel>>, Error> {
        let request = Request::get("/users/{user_id}/teams/{team_id}/channels")
            .var("user_id", user_id)
            .var("team_id", team_id)
            .param("include_deleted", include_deleted)
            .param("last_delete_at", last_delete_at);
        self.facet.call(request).await
    }

    /// `POST /channels`
    pub async fn create_channel(&self, channel: &CreateChannel) -> Result<ApiResponse<Channel>, Error> {
        let request = Request::post("/channels")
            .json(channel)?
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `POST /channels/direct` with the two member ids.
    pub async fn create_direct_channel(
        &self,
        user_id: &str,
        other_user_id: &str,
    ) -> Result<ApiResponse<Channel>, Error> {
        let request = Request::post("/channels/direct")
            .body(Body::raw(json!([user_id, other_user_id])))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `PUT /channels/{channel_id}/patch`
    pub async fn patch_channel(
        &self,
        channel_id: &str,
        patch: &ChannelPatch,
    ) -> Result<ApiResponse<Channel>, Error> {
        let request = Request::put("/channels/{channel_id}/patch")
            .var("channel_id", channel_id)
            .json(patch)?;
        self.facet.call(request).await
    }

    /// `DELETE /channels/{channel_id}` (archives unless `permanent`).
    pub async fn delete_channel(
        &self,
        channel_id: &str,
        permanent: Option<bool>,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let request = Request::delete("/channels/{channel_id}")
            .var("channel_id", channel_id)
            .param("permanent", permanent);
        self.facet.status(request).await
    }

    /// `POST /channels/{channel_id}/restore`
    pub async fn restore_channel(&self, channel_id: &str) -> Result<ApiResponse<Channel>, Error> {
        self.facet
            .call(Request::post("/channels/{channel_id}/restore").var("channel_id", channel_id))
            .await
    }

    /// `GET /channels/{channel_id}/members`
    pub async fn get_channel_members(
        &self,
        channel_id: &str,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Vec<ChannelMember>>, Error> {
        let request = Request::get("/channels/{channel_id}/members")
            .var("channel_id", channel_id)
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }

    /// `GET /channels/{channel_id}/members/{user_id}`
    pub async fn get_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse<ChannelMember>, Error> {
        let request = Request::get("/channels/{channel_id}/members/{user_id}")
            .var("channel_id", channel_id)
            .var("user_id", user_id);
        self.facet.call(request).await
    }

    /// `POST /channels/{channel_id}/members`
    pub async fn add_channel_member(
        &self,
        channel_id: &str,
        user_id: &str,
        post_root_id: Option<&str>,
    ) -> Result<ApiResponse<ChannelMember>, Error> {
        let mut body = json!({ "user_id": user_id });
        if let Some(root_id) = post_root_id {
            body["post_root_id"] = json!(root_id);
        }
        let request = Request::post("/channels/{channel_id}/members")
            .var("channel_id", channel_id)
            .body(Body::raw(body))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `DELETE /channels/{channel_id}/members/{user_id}`
    pub async fn remove_user_from_channel(
        &self,
        channel_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let request = Request::delete("/channels/{channel_id}/members/{user_id}")
            .var("channel_id", channel_id)
            .var("user_id", user_id);
        self.facet.status(request).await
    }
}
