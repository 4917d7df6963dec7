use reqwest::StatusCode;
use serde_json::json;

use super::TeamsApi;
use crate::error::Error;
use crate::models::{CreateTeam, StatusOk, Team, TeamMember, TeamPatch};
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl TeamsApi<'_> {
    /// `GET /teams/{team_id}`
    pub async fn get_team(&self, team_id: &str) -> Result<ApiResponse<Team>, Error> {
        self.facet
            .call(Request::get("/teams/{team_id}").var("team_id", team_id))
            .await
    }

    /// `GET /teams/name/{name}`
    pub async fn get_team_by_name(&self, name: &str) -> Result<ApiResponse<Team>, Error> {
        self.facet
            .call(Request::get("/teams/name/{name}").var("name", name))
            .await
    }

    /// `GET /teams`
    pub async fn get_all_teams(
        &self,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Vec<Team>>, Error> {
        let request = Request::get("/teams")
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }

    /// `GET /users/{user_id}/teams`
    pub async fn get_teams_for_user(&self, user_id: &str) -> Result<ApiResponse<Vec<Team>>, Error> {
        self.facet
            .call(Request::get("/users/{user_id}/teams").var("user_id", user_id))
            .await
    }

    /// `POST /teams`
    pub async fn create_team(&self, team: &CreateTeam) -> Result<ApiResponse<Team>, Error> {
        let request = Request::post("/teams").json(team)?.expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `PUT /teams/{team_id}/patch`
    pub async fn patch_team(&self, team_id: &str, patch: &TeamPatch) -> Result<ApiResponse<Team>, Error> {
        let request = Request::put("/teams/{team_id}/patch")
            .var("team_id", team_id)
            .json(patch)?;
        self.facet.call(request).await
    }

    /// `DELETE /teams/{team_id}`; archives unless `permanent` is set.
    pub async fn soft_delete_team(
        &self,
        team_id: &str,
        permanent: Option<bool>,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let request = Request::delete("/teams/{team_id}")
            .var("team_id", team_id)
            .param("permanent", permanent);
        self.facet.status(request).await
    }

    /// `GET /teams/{team_id}/members`
    pub async fn get_team_members(
        &self,
        team_id: &str,
        page: Option<i64>,
        per_page: Option<i64>,
    ) -> Result<ApiResponse<Vec<TeamMember>>, Error> {
        let request = Request::get("/teams/{team_id}/members")
            .var("team_id", team_id)
            .param("page", page)
            .param("per_page", per_page);
        self.facet.call(request).await
    }

    /// `POST /teams/{team_id}/members`
    pub async fn add_team_member(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse<TeamMember>, Error> {
        let request = Request::post("/teams/{team_id}/members")
            .var("team_id", team_id)
            .body(Body::raw(json!({ "team_id": team_id, "user_id": user_id })))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `DELETE /teams/{team_id}/members/{user_id}`
    pub async fn remove_team_member(
        &self,
        team_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let request = Request::delete("/teams/{team_id}/members/{user_id}")
            .var("team_id", team_id)
            .var("user_id", user_id);
        self.facet.status(request).await
    }
}
