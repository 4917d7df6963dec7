use bytes::Bytes;

use super::ExportsApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::Request;
use crate::response::ApiResponse;

impl ExportsApi<'_> {
    /// `GET /exports`: names of the export files on the server.
    pub async fn list_exports(&self) -> Result<ApiResponse<Vec<String>>, Error> {
        self.facet.call(Request::get("/exports")).await
    }

    /// `GET /exports/{export_name}`
    pub async fn download_export(&self, export_name: &str) -> Result<ApiResponse<Bytes>, Error> {
        self.facet
            .bytes(Request::get("/exports/{export_name}").var("export_name", export_name))
            .await
    }

    /// `DELETE /exports/{export_name}`
    pub async fn delete_export(&self, export_name: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::delete("/exports/{export_name}").var("export_name", export_name))
            .await
    }
}
