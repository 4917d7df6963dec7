use bytes::Bytes;
use reqwest::StatusCode;
use serde_json::Value;

use super::ComplianceApi;
use crate::error::Error;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl ComplianceApi<'_> {
    /// `POST /compliance/reports`; `report` carries `desc`, `start_at`,
    /// `end_at`, `keywords` and `emails`.
    pub async fn create_compliance_report(&self, report: Value) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/compliance/reports")
            .body(Body::raw(report))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /compliance/reports`
    pub async fn get_compliance_reports(
        &self,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Vec<Value>>, Error> {
        let request = Request::get("/compliance/reports")
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }

    /// `GET /compliance/reports/{report_id}`
    pub async fn get_compliance_report(&self, report_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::get("/compliance/reports/{report_id}").var("report_id", report_id))
            .await
    }

    /// `GET /compliance/reports/{report_id}/download`: the zipped report.
    pub async fn download_compliance_report(&self, report_id: &str) -> Result<ApiResponse<Bytes>, Error> {
        self.facet
            .bytes(Request::get("/compliance/reports/{report_id}/download").var("report_id", report_id))
            .await
    }
}
