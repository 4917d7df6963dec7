use super::RolesApi;
use crate::error::Error;
use crate::models::{Role, RolePatch};
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl RolesApi<'_> {
    /// `GET /roles/{role_id}`
    pub async fn get_role(&self, role_id: &str) -> Result<ApiResponse<Role>, Error> {
        self.facet
            .call(Request::get("/roles/{role_id}").var("role_id", role_id))
            .await
    }

    /// `GET /roles/name/{role_name}`
    pub async fn get_role_by_name(&self, role_name: &str) -> Result<ApiResponse<Role>, Error> {
        self.facet
            .call(Request::get("/roles/name/{role_name}").var("role_name", role_name))
            .await
    }

    /// `POST /roles/names` with a bare list of role names.
    pub async fn get_roles_by_names(&self, names: &[String]) -> Result<ApiResponse<Vec<Role>>, Error> {
        self.facet
            .call(Request::post("/roles/names").body(Body::raw(names.to_vec())))
            .await
    }

    /// `PUT /roles/{role_id}/patch`
    pub async fn patch_role(&self, role_id: &str, patch: &RolePatch) -> Result<ApiResponse<Role>, Error> {
        let request = Request::put("/roles/{role_id}/patch")
            .var("role_id", role_id)
            .json(patch)?;
        self.facet.call(request).await
    }
}
