use reqwest::StatusCode;
use serde_json::{Value, json};

use super::TermsOfServiceApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl TermsOfServiceApi<'_> {
    /// `GET /terms_of_service`
    pub async fn get_terms_of_service(&self) -> Result<ApiResponse<Value>, Error> {
        self.facet.call(Request::get("/terms_of_service")).await
    }

    /// `POST /terms_of_service`
    pub async fn create_terms_of_service(&self, text: &str) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/terms_of_service")
            .body(Body::raw(json!({ "text": text })))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /users/{user_id}/terms_of_service`
    pub async fn get_user_terms_of_service(&self, user_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::get("/users/{user_id}/terms_of_service").var("user_id", user_id))
            .await
    }

    /// `POST /users/{user_id}/terms_of_service`
    pub async fn register_terms_of_service_action(
        &self,
        user_id: &str,
        terms_of_service_id: &str,
        accepted: bool,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let body = json!({ "serviceTermsId": terms_of_service_id, "accepted": accepted });
        let request = Request::post("/users/{user_id}/terms_of_service")
            .var("user_id", user_id)
            .body(Body::raw(body));
        self.facet.status(request).await
    }
}
