use super::ImportsApi;
use crate::error::Error;
use crate::request::Request;
use crate::response::ApiResponse;

impl ImportsApi<'_> {
    /// `GET /imports`: names of the import files on the server.
    pub async fn list_imports(&self) -> Result<ApiResponse<Vec<String>>, Error> {
        self.facet.call(Request::get("/imports")).await
    }
}
