use super::StatusApi;
use crate::error::Error;
use crate::models::UserStatus;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl StatusApi<'_> {
    /// `GET /users/{user_id}/status`
    pub async fn get_user_status(&self, user_id: &str) -> Result<ApiResponse<UserStatus>, Error> {
        self.facet
            .call(Request::get("/users/{user_id}/status").var("user_id", user_id))
            .await
    }

    /// `PUT /users/{user_id}/status`
    pub async fn update_user_status(
        &self,
        user_id: &str,
        status: &UserStatus,
    ) -> Result<ApiResponse<UserStatus>, Error> {
        let request = Request::put("/users/{user_id}/status")
            .var("user_id", user_id)
            .json(status)?;
        self.facet.call(request).await
    }

    /// `POST /users/status/ids` with a bare list of user ids.
    pub async fn get_users_statuses_by_ids(
        &self,
        user_ids: &[String],
    ) -> Result<ApiResponse<Vec<UserStatus>>, Error> {
        self.facet
            .call(Request::post("/users/status/ids").body(Body::raw(user_ids.to_vec())))
            .await
    }
}
