use bytes::Bytes;
use serde_json::{Value, json};

use super::SamlApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl SamlApi<'_> {
    /// `GET /saml/metadata`: service-provider metadata XML.
    pub async fn get_saml_metadata(&self) -> Result<ApiResponse<Bytes>, Error> {
        self.facet.bytes(Request::get("/saml/metadata")).await
    }

    /// `GET /saml/certificate/status`
    pub async fn get_saml_certificate_status(&self) -> Result<ApiResponse<Value>, Error> {
        self.facet.call(Request::get("/saml/certificate/status")).await
    }

    /// `DELETE /saml/certificate/idp`
    pub async fn delete_saml_idp_certificate(&self) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet.status(Request::delete("/saml/certificate/idp")).await
    }

    /// `POST /saml/reset_auth_data`
    pub async fn reset_saml_auth_data_to_email(
        &self,
        include_deleted: bool,
        dry_run: bool,
        user_ids: &[String],
    ) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/saml/reset_auth_data").body(Body::raw(json!({
            "include_deleted": include_deleted,
            "dry_run": dry_run,
            "user_ids": user_ids,
        })));
        self.facet.call(request).await
    }
}
