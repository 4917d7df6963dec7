// Personal access tokens and multi-factor authentication.
//
// Password login itself is not here: it happens when a transport opens.

use serde_json::{Value, json};

use super::AuthenticationApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl AuthenticationApi<'_> {
    /// `POST /users/{user_id}/tokens`
    pub async fn create_user_access_token(
        &self,
        user_id: &str,
        description: &str,
    ) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/users/{user_id}/tokens")
            .var("user_id", user_id)
            .body(Body::raw(json!({ "description": description })));
        self.facet.call(request).await
    }

    /// `GET /users/{user_id}/tokens`
    pub async fn get_user_access_tokens_for_user(
        &self,
        user_id: &str,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Vec<Value>>, Error> {
        let request = Request::get("/users/{user_id}/tokens")
            .var("user_id", user_id)
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }

    /// `POST /users/tokens/revoke`
    pub async fn revoke_user_access_token(&self, token_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::post("/users/tokens/revoke").body(Body::raw(json!({ "token_id": token_id }))))
            .await
    }

    /// `POST /users/tokens/disable`
    pub async fn disable_user_access_token(&self, token_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::post("/users/tokens/disable").body(Body::raw(json!({ "token_id": token_id }))))
            .await
    }

    /// `POST /users/tokens/enable`
    pub async fn enable_user_access_token(&self, token_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::post("/users/tokens/enable").body(Body::raw(json!({ "token_id": token_id }))))
            .await
    }

    /// `POST /users/mfa`: whether `login_id` must supply an MFA token.
    pub async fn check_user_mfa(&self, login_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::post("/users/mfa").body(Body::raw(json!({ "login_id": login_id }))))
            .await
    }

    /// `POST /users/{user_id}/mfa/generate`: a new MFA secret and QR code.
    pub async fn generate_mfa_secret(&self, user_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::post("/users/{user_id}/mfa/generate").var("user_id", user_id))
            .await
    }

    /// `PUT /users/{user_id}/mfa`
    pub async fn update_user_mfa(
        &self,
        user_id: &str,
        activate: bool,
        code: Option<&str>,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let mut body = json!({ "activate": activate });
        if let Some(code) = code {
            body["code"] = json!(code);
        }
        let request = Request::put("/users/{user_id}/mfa")
            .var("user_id", user_id)
            .body(Body::raw(body));
        self.facet.status(request).await
    }
}
