use serde_json::Value;

use super::ThreadsApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::Request;
use crate::response::ApiResponse;

/// Filters for a user's thread listing. Unset fields are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreadsQuery {
    /// Only threads updated after this timestamp (ms).
    pub since: Option<i64>,
    pub deleted: Option<bool>,
    /// Embed full user and post objects.
    pub extended: Option<bool>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl ThreadsApi<'_> {
    /// `GET /users/{user_id}/teams/{team_id}/threads`
    pub async fn get_user_threads(
        &self,
        user_id: &str,
        team_id: &str,
        query: &ThreadsQuery,
    ) -> Result<ApiResponse<Value>, Error> {
        let request = Request::get("/users/{user_id}/teams/{team_id}/threads")
            .var("user_id", user_id)
            .var("team_id", team_id)
            .param("since", query.since)
            .param("deleted", query.deleted)
            .param("extended", query.extended)
            .param("page", query.page)
            .param("per_page", query.per_page);
        self.facet.call(request).await
    }

    /// `GET /users/{user_id}/teams/{team_id}/threads/{thread_id}`
    pub async fn get_user_thread(
        &self,
        user_id: &str,
        team_id: &str,
        thread_id: &str,
    ) -> Result<ApiResponse<Value>, Error> {
        let request = Request::get("/users/{user_id}/teams/{team_id}/threads/{thread_id}")
            .var("user_id", user_id)
            .var("team_id", team_id)
            .var("thread_id", thread_id);
        self.facet.call(request).await
    }

    /// `PUT /users/{user_id}/teams/{team_id}/threads/read`
    pub async fn update_threads_read_for_user(
        &self,
        user_id: &str,
        team_id: &str,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let request = Request::put("/users/{user_id}/teams/{team_id}/threads/read")
            .var("user_id", user_id)
            .var("team_id", team_id);
        self.facet.status(request).await
    }

    /// `PUT /users/{user_id}/teams/{team_id}/threads/{thread_id}/following`
    pub async fn start_following_thread(
        &self,
        user_id: &str,
        team_id: &str,
        thread_id: &str,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let request = Request::put("/users/{user_id}/teams/{team_id}/threads/{thread_id}/following")
            .var("user_id", user_id)
            .var("team_id", team_id)
            .var("thread_id", thread_id);
        self.facet.status(request).await
    }

    /// `DELETE /users/{user_id}/teams/{team_id}/threads/{thread_id}/following`
    pub async fn stop_following_thread(
        &self,
        user_id: &str,
        team_id: &str,
        thread_id: &str,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let request =
            Request::delete("/users/{user_id}/teams/{team_id}/threads/{thread_id}/following")
                .var("user_id", user_id)
                .var("team_id", team_id)
                .var("thread_id", thread_id);
        self.facet.status(request).await
    }
}
