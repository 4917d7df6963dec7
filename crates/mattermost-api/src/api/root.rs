use serde_json::Value;

use super::RootApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl RootApi<'_> {
    /// `POST /notifications/ack`: acknowledge receipt of a push notification.
    pub async fn acknowledge_notification(&self, ack: Value) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::post("/notifications/ack").body(Body::raw(ack)))
            .await
    }

    /// `GET /redirect_location?url=...`: where a shortened URL points.
    pub async fn get_redirect_location(&self, url: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::get("/redirect_location").param("url", Some(url)))
            .await
    }

    /// `POST /client_perf`
    pub async fn submit_performance_report(&self, report: Value) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::post("/client_perf").body(Body::raw(report)))
            .await
    }
}
