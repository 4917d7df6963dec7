use serde_json::Value;

use super::SharedChannelsApi;
use crate::error::Error;
use crate::request::Request;
use crate::response::ApiResponse;

impl SharedChannelsApi<'_> {
    /// `GET /sharedchannels/{team_id}`
    pub async fn get_all_shared_channels(
        &self,
        team_id: &str,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Vec<Value>>, Error> {
        let request = Request::get("/sharedchannels/{team_id}")
            .var("team_id", team_id)
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }

    /// `GET /sharedchannels/remote_info/{remote_id}`
    pub async fn get_remote_cluster_info(&self, remote_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::get("/sharedchannels/remote_info/{remote_id}").var("remote_id", remote_id))
            .await
    }
}
