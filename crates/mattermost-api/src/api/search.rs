use serde_json::Value;

use super::SearchApi;
use crate::error::Error;
use crate::models::{Channel, PostList, User};
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl SearchApi<'_> {
    /// `POST /teams/{team_id}/posts/search`
    ///
    /// `criteria` carries `terms`, `is_or_search`, paging and time zone
    /// offset as the server expects them.
    pub async fn search_posts(&self, team_id: &str, criteria: Value) -> Result<ApiResponse<PostList>, Error> {
        let request = Request::post("/teams/{team_id}/posts/search")
            .var("team_id", team_id)
            .body(Body::raw(criteria));
        self.facet.call(request).await
    }

    /// `POST /users/search`
    pub async fn search_users(&self, criteria: Value) -> Result<ApiResponse<Vec<User>>, Error> {
        self.facet
            .call(Request::post("/users/search").body(Body::raw(criteria)))
            .await
    }

    /// `POST /teams/{team_id}/channels/search`
    pub async fn search_channels(
        &self,
        team_id: &str,
        term: &str,
    ) -> Result<ApiResponse<Vec<Channel>>, Error> {
        let request = Request::post("/teams/{team_id}/channels/search")
            .var("team_id", team_id)
            .body(Body::raw(serde_json::json!({ "term": term })));
        self.facet.call(request).await
    }

    /// `POST /teams/search`
    pub async fn search_teams(&self, term: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::post("/teams/search").body(Body::raw(serde_json::json!({ "term": term }))))
            .await
    }
}
