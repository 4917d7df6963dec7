use reqwest::StatusCode;
use serde_json::Value;

use super::OAuthApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl OAuthApi<'_> {
    /// `POST /oauth/apps`
    pub async fn create_oauth_app(&self, app: Value) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/oauth/apps")
            .body(Body::raw(app))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /oauth/apps`
    pub async fn get_oauth_apps(
        &self,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Vec<Value>>, Error> {
        let request = Request::get("/oauth/apps")
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }

    /// `GET /oauth/apps/{app_id}`
    pub async fn get_oauth_app(&self, app_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::get("/oauth/apps/{app_id}").var("app_id", app_id))
            .await
    }

    /// `DELETE /oauth/apps/{app_id}`
    pub async fn delete_oauth_app(&self, app_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::delete("/oauth/apps/{app_id}").var("app_id", app_id))
            .await
    }

    /// `POST /oauth/apps/{app_id}/regen_secret`
    pub async fn regenerate_oauth_app_secret(&self, app_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::post("/oauth/apps/{app_id}/regen_secret").var("app_id", app_id))
            .await
    }

    /// `GET /users/{user_id}/oauth/apps/authorized`
    pub async fn get_authorized_oauth_apps_for_user(
        &self,
        user_id: &str,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Vec<Value>>, Error> {
        let request = Request::get("/users/{user_id}/oauth/apps/authorized")
            .var("user_id", user_id)
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }
}
