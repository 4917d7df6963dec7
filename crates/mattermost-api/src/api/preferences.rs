use super::PreferencesApi;
use crate::error::Error;
use crate::models::{Preference, StatusOk};
use crate::request::Request;
use crate::response::ApiResponse;

impl PreferencesApi<'_> {
    /// `GET /users/{user_id}/preferences`
    pub async fn get_preferences(&self, user_id: &str) -> Result<ApiResponse<Vec<Preference>>, Error> {
        self.facet
            .call(Request::get("/users/{user_id}/preferences").var("user_id", user_id))
            .await
    }

    /// `GET /users/{user_id}/preferences/{category}`
    pub async fn get_preferences_by_category(
        &self,
        user_id: &str,
        category: &str,
    ) -> Result<ApiResponse<Vec<Preference>>, Error> {
        let request = Request::get("/users/{user_id}/preferences/{category}")
            .var("user_id", user_id)
            .var("category", category);
        self.facet.call(request).await
    }

    /// `PUT /users/{user_id}/preferences`
    pub async fn update_preferences(
        &self,
        user_id: &str,
        preferences: &[Preference],
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let request = Request::put("/users/{user_id}/preferences")
            .var("user_id", user_id)
            .json(preferences)?;
        self.facet.status(request).await
    }

    /// `POST /users/{user_id}/preferences/delete`
    pub async fn delete_preferences(
        &self,
        user_id: &str,
        preferences: &[Preference],
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let request = Request::post("/users/{user_id}/preferences/delete")
            .var("user_id", user_id)
            .json(preferences)?;
        self.facet.status(request).await
    }
}
