use reqwest::StatusCode;
use serde_json::Value;

use super::WebhooksApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl WebhooksApi<'_> {
    /// `POST /hooks/incoming`
    pub async fn create_incoming_webhook(&self, hook: Value) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/hooks/incoming")
            .body(Body::raw(hook))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /hooks/incoming`
    pub async fn get_incoming_webhooks(
        &self,
        page: Option<i64>,
        per_page: Option<i64>,
        team_id: Option<&str>,
    ) -> Result<ApiResponse<Vec<Value>>, Error> {
        let request = Request::get("/hooks/incoming")
            .param("page", page)
            .param("per_page", per_page)
            .param("team_id", team_id);
        self.facet.call(request).await
    }

    /// `GET /hooks/incoming/{hook_id}`
    pub async fn get_incoming_webhook(&self, hook_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::get("/hooks/incoming/{hook_id}").var("hook_id", hook_id))
            .await
    }

    /// `DELETE /hooks/incoming/{hook_id}`
    pub async fn delete_incoming_webhook(&self, hook_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::delete("/hooks/incoming/{hook_id}").var("hook_id", hook_id))
            .await
    }

    /// `POST /hooks/outgoing`
    pub async fn create_outgoing_webhook(&self, hook: Value) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/hooks/outgoing")
            .body(Body::raw(hook))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /hooks/outgoing`
    pub async fn get_outgoing_webhooks(
        &self,
        page: Option<i64>,
        per_page: Option<i64>,
        team_id: Option<&str>,
        channel_id: Option<&str>,
    ) -> Result<ApiResponse<Vec<Value>>, Error> {
        let request = Request::get("/hooks/outgoing")
            .param("page", page)
            .param("per_page", per_page)
            .param("team_id", team_id)
            .param("channel_id", channel_id);
        self.facet.call(request).await
    }

    /// `POST /hooks/outgoing/{hook_id}/regen_token`
    pub async fn regen_outgoing_hook_token(&self, hook_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::post("/hooks/outgoing/{hook_id}/regen_token").var("hook_id", hook_id))
            .await
    }

    /// `DELETE /hooks/outgoing/{hook_id}`
    pub async fn delete_outgoing_webhook(&self, hook_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::delete("/hooks/outgoing/{hook_id}").var("hook_id", hook_id))
            .await
    }
}
