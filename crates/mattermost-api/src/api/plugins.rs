use reqwest::StatusCode;
use serde_json::Value;

use super::PluginsApi;
use crate::error::Error;
use crate::models::{StatusOk, UploadPlugin};
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl PluginsApi<'_> {
    /// `POST /plugins` as `multipart/form-data`.
    pub async fn upload_plugin(&self, plugin: &UploadPlugin) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/plugins")
            .body(Body::multipart(plugin))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /plugins`: active and inactive plugin manifests.
    pub async fn get_plugins(&self) -> Result<ApiResponse<Value>, Error> {
        self.facet.call(Request::get("/plugins")).await
    }

    /// `GET /plugins/statuses`
    pub async fn get_plugin_statuses(&self) -> Result<ApiResponse<Vec<Value>>, Error> {
        self.facet.call(Request::get("/plugins/statuses")).await
    }

    /// `POST /plugins/{plugin_id}/enable`
    pub async fn enable_plugin(&self, plugin_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::post("/plugins/{plugin_id}/enable").var("plugin_id", plugin_id))
            .await
    }

    /// `POST /plugins/{plugin_id}/disable`
    pub async fn disable_plugin(&self, plugin_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::post("/plugins/{plugin_id}/disable").var("plugin_id", plugin_id))
            .await
    }

    /// `DELETE /plugins/{plugin_id}`
    pub async fn remove_plugin(&self, plugin_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::delete("/plugins/{plugin_id}").var("plugin_id", plugin_id))
            .await
    }
}
