use super::PermissionsApi;
use crate::error::Error;
use crate::request::Request;
use crate::response::ApiResponse;

impl PermissionsApi<'_> {
    /// `GET /permissions/ancillary?subsection_permissions=...`
    ///
    /// Permissions implied by the given comma-separated subsections.
    pub async fn get_ancillary_permissions(
        &self,
        subsection_permissions: &str,
    ) -> Result<ApiResponse<Vec<String>>, Error> {
        let request = Request::get("/permissions/ancillary")
            .param("subsection_permissions", Some(subsection_permissions));
        self.facet.call(request).await
    }
}
