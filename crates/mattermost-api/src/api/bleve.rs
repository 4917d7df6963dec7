use super::BleveApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::Request;
use crate::response::ApiResponse;

impl BleveApi<'_> {
    /// `POST /bleve/purge_indexes`
    pub async fn purge_bleve_indexes(&self) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet.status(Request::post("/bleve/purge_indexes")).await
    }
}
