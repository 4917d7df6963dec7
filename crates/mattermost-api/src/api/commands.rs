use reqwest::StatusCode;
use serde_json::{Value, json};

use super::CommandsApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl CommandsApi<'_> {
    /// `GET /commands`
    pub async fn list_commands(
        &self,
        team_id: Option<&str>,
        custom_only: Option<bool>,
    ) -> Result<ApiResponse<Vec<Value>>, Error> {
        let request = Request::get("/commands")
            .param("team_id", team_id)
            .param("custom_only", custom_only);
        self.facet.call(request).await
    }

    /// `POST /commands`
    pub async fn create_command(&self, command: Value) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/commands")
            .body(Body::raw(command))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /commands/{command_id}`
    pub async fn get_command(&self, command_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::get("/commands/{command_id}").var("command_id", command_id))
            .await
    }

    /// `PUT /commands/{command_id}`
    pub async fn update_command(&self, command_id: &str, command: Value) -> Result<ApiResponse<Value>, Error> {
        let request = Request::put("/commands/{command_id}")
            .var("command_id", command_id)
            .body(Body::raw(command));
        self.facet.call(request).await
    }

    /// `DELETE /commands/{command_id}`
    pub async fn delete_command(&self, command_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::delete("/commands/{command_id}").var("command_id", command_id))
            .await
    }

    /// `POST /commands/execute`
    pub async fn execute_command(&self, channel_id: &str, command: &str) -> Result<ApiResponse<Value>, Error> {
        let body = json!({ "channel_id": channel_id, "command": command });
        self.facet
            .call(Request::post("/commands/execute").body(Body::raw(body)))
            .await
    }

    /// `GET /teams/{team_id}/commands/autocomplete`
    pub async fn list_autocomplete_commands(&self, team_id: &str) -> Result<ApiResponse<Vec<Value>>, Error> {
        self.facet
            .call(Request::get("/teams/{team_id}/commands/autocomplete").var("team_id", team_id))
            .await
    }
}
