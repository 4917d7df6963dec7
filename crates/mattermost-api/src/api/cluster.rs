use serde_json::Value;

use super::ClusterApi;
use crate::error::Error;
use crate::request::Request;
use crate::response::ApiResponse;

impl ClusterApi<'_> {
    /// `GET /cluster/status`: one entry per node.
    pub async fn get_cluster_status(&self) -> Result<ApiResponse<Vec<Value>>, Error> {
        self.facet.call(Request::get("/cluster/status")).await
    }
}
