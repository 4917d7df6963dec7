use serde_json::Value;

use super::IntegrationActionsApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl IntegrationActionsApi<'_> {
    /// `POST /actions/dialogs/open`
    pub async fn open_interactive_dialog(&self, dialog: Value) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::post("/actions/dialogs/open").body(Body::raw(dialog)))
            .await
    }

    /// `POST /actions/dialogs/submit`
    pub async fn submit_interactive_dialog(&self, submission: Value) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::post("/actions/dialogs/submit").body(Body::raw(submission)))
            .await
    }

    /// `POST /posts/{post_id}/actions/{action_id}`
    pub async fn do_post_action(
        &self,
        post_id: &str,
        action_id: &str,
        selected_option: Option<&str>,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let mut request = Request::post("/posts/{post_id}/actions/{action_id}")
            .var("post_id", post_id)
            .var("action_id", action_id);
        if let Some(selected) = selected_option {
            request = request.body(Body::raw(serde_json::json!({ "selected_option": selected })));
        }
        self.facet.status(request).await
    }
}
