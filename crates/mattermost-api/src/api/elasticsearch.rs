use super::ElasticsearchApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::Request;
use crate::response::ApiResponse;

impl ElasticsearchApi<'_> {
    /// `POST /elasticsearch/test`: checks the configured connection.
    pub async fn test_elasticsearch(&self) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet.status(Request::post("/elasticsearch/test")).await
    }

    /// `POST /elasticsearch/purge_indexes`
    pub async fn purge_elasticsearch_indexes(&self) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet.status(Request::post("/elasticsearch/purge_indexes")).await
    }
}
