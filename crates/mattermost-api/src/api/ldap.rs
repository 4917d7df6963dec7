use reqwest::StatusCode;
use serde_json::Value;

use super::LdapApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::Request;
use crate::response::ApiResponse;

impl LdapApi<'_> {
    /// `POST /ldap/sync`
    pub async fn sync_ldap(&self) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet.status(Request::post("/ldap/sync")).await
    }

    /// `POST /ldap/test`
    pub async fn test_ldap(&self) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet.status(Request::post("/ldap/test")).await
    }

    /// `GET /ldap/groups`
    pub async fn get_ldap_groups(
        &self,
        q: Option<&str>,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Value>, Error> {
        let request = Request::get("/ldap/groups")
            .param("q", q)
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }

    /// `POST /ldap/groups/{remote_id}/link`
    pub async fn link_ldap_group(&self, remote_id: &str) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/ldap/groups/{remote_id}/link")
            .var("remote_id", remote_id)
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `DELETE /ldap/groups/{remote_id}/link`
    pub async fn unlink_ldap_group(&self, remote_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::delete("/ldap/groups/{remote_id}/link").var("remote_id", remote_id))
            .await
    }
}
