use serde_json::json;

use super::MigrateApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl MigrateApi<'_> {
    /// `POST /users/migrate_auth/ldap`
    pub async fn migrate_auth_to_ldap(
        &self,
        from: &str,
        match_field: &str,
        force: bool,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let body = json!({ "from": from, "match_field": match_field, "force": force });
        self.facet
            .status(Request::post("/users/migrate_auth/ldap").body(Body::raw(body)))
            .await
    }

    /// `POST /users/migrate_auth/saml`
    pub async fn migrate_auth_to_saml(
        &self,
        from: &str,
        matches: &serde_json::Value,
        auto: bool,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let body = json!({ "from": from, "matches": matches, "auto": auto });
        self.facet
            .status(Request::post("/users/migrate_auth/saml").body(Body::raw(body)))
            .await
    }
}
