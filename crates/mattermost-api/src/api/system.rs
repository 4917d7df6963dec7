// System: health, configuration, logs, caches.

use serde_json::Value;

use super::SystemApi;
use crate::error::Error;
use crate::models::{ClientConfig, StatusOk, SystemPing};
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl SystemApi<'_> {
    /// `GET /system/ping`
    pub async fn ping(&self, get_server_status: Option<bool>) -> Result<ApiResponse<SystemPing>, Error> {
        self.facet
            .call(Request::get("/system/ping").param("get_server_status", get_server_status))
            .await
    }

    /// `GET /config/client?format=old`
    pub async fn get_client_config(&self) -> Result<ApiResponse<ClientConfig>, Error> {
        self.facet
            .call(Request::get("/config/client").param("format", Some("old")))
            .await
    }

    /// `GET /config`
    pub async fn get_config(&self) -> Result<ApiResponse<Value>, Error> {
        self.facet.call(Request::get("/config")).await
    }

    /// `PUT /config`: replaces the whole configuration.
    pub async fn update_config(&self, config: Value) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::put("/config").body(Body::raw(config)))
            .await
    }

    /// `POST /config/reload`
    pub async fn reload_config(&self) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet.status(Request::post("/config/reload")).await
    }

    /// `GET /logs`
    pub async fn get_logs(
        &self,
        page: Option<i64>,
        logs_per_page: Option<i64>,
    ) -> Result<ApiResponse<Vec<String>>, Error> {
        let request = Request::get("/logs")
            .param("page", page)
            .param("logs_per_page", logs_per_page);
        self.facet.call(request).await
    }

    /// `POST /caches/invalidate`
    pub async fn invalidate_caches(&self) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet.status(Request::post("/caches/invalidate")).await
    }

    /// `GET /system/timezones`
    pub async fn get_supported_timezones(&self) -> Result<ApiResponse<Vec<String>>, Error> {
        self.facet.call(Request::get("/system/timezones")).await
    }

    /// `GET /analytics/old`
    pub async fn get_analytics(
        &self,
        name: Option<&str>,
        team_id: Option<&str>,
    ) -> Result<ApiResponse<Value>, Error> {
        let request = Request::get("/analytics/old")
            .param("name", name)
            .param("team_id", team_id);
        self.facet.call(request).await
    }
}
