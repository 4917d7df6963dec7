use reqwest::StatusCode;
use serde_json::Value;

use super::SchemesApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl SchemesApi<'_> {
    /// `GET /schemes`; `scope` is `team`, `channel`, or absent for both.
    pub async fn get_schemes(
        &self,
        scope: Option<&str>,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Vec<Value>>, Error> {
        let request = Request::get("/schemes")
            .param("scope", scope)
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }

    /// `GET /schemes/{scheme_id}`
    pub async fn get_scheme(&self, scheme_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::get("/schemes/{scheme_id}").var("scheme_id", scheme_id))
            .await
    }

    /// `POST /schemes`
    pub async fn create_scheme(&self, scheme: Value) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/schemes")
            .body(Body::raw(scheme))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `PUT /schemes/{scheme_id}/patch`
    pub async fn patch_scheme(&self, scheme_id: &str, patch: Value) -> Result<ApiResponse<Value>, Error> {
        let request = Request::put("/schemes/{scheme_id}/patch")
            .var("scheme_id", scheme_id)
            .body(Body::raw(patch));
        self.facet.call(request).await
    }

    /// `DELETE /schemes/{scheme_id}`
    pub async fn delete_scheme(&self, scheme_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::delete("/schemes/{scheme_id}").var("scheme_id", scheme_id))
            .await
    }
}
