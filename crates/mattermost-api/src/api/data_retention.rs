use reqwest::StatusCode;
use serde_json::Value;

use super::DataRetentionApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl DataRetentionApi<'_> {
    /// `GET /data_retention/policy`: the global policy.
    pub async fn get_data_retention_policy(&self) -> Result<ApiResponse<Value>, Error> {
        self.facet.call(Request::get("/data_retention/policy")).await
    }

    /// `GET /data_retention/policies`
    pub async fn get_data_retention_policies(
        &self,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Value>, Error> {
        let request = Request::get("/data_retention/policies")
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }

    /// `GET /data_retention/policies/{policy_id}`
    pub async fn get_data_retention_policy_by_id(&self, policy_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::get("/data_retention/policies/{policy_id}").var("policy_id", policy_id))
            .await
    }

    /// `POST /data_retention/policies`
    pub async fn create_data_retention_policy(&self, policy: Value) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/data_retention/policies")
            .body(Body::raw(policy))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `PATCH /data_retention/policies/{policy_id}`
    pub async fn patch_data_retention_policy(
        &self,
        policy_id: &str,
        patch: Value,
    ) -> Result<ApiResponse<Value>, Error> {
        let request = Request::patch("/data_retention/policies/{policy_id}")
            .var("policy_id", policy_id)
            .body(Body::raw(patch));
        self.facet.call(request).await
    }

    /// `DELETE /data_retention/policies/{policy_id}`
    pub async fn delete_data_retention_policy(&self, policy_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::delete("/data_retention/policies/{policy_id}").var("policy_id", policy_id))
            .await
    }
}
