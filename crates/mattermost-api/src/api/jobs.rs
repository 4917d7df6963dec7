use reqwest::StatusCode;
use serde_json::Value;

use super::JobsApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl JobsApi<'_> {
    /// `GET /jobs`
    pub async fn get_jobs(&self, page: Option<i64>, per_page: Option<i64>) -> Result<ApiResponse<Vec<Value>>, Error> {
        let request = Request::get("/jobs")
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }

    /// `POST /jobs`
    pub async fn create_job(&self, job: Value) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/jobs")
            .body(Body::raw(job))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /jobs/{job_id}`
    pub async fn get_job(&self, job_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::get("/jobs/{job_id}").var("job_id", job_id))
            .await
    }

    /// `POST /jobs/{job_id}/cancel`
    pub async fn cancel_job(&self, job_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::post("/jobs/{job_id}/cancel").var("job_id", job_id))
            .await
    }

    /// `GET /jobs/type/{type}`
    pub async fn get_jobs_by_type(
        &self,
        job_type: &str,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Vec<Value>>, Error> {
        let request = Request::get("/jobs/type/{type}")
            .var("type", job_type)
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }
}
