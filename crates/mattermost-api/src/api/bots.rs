use reqwest::StatusCode;

use super::BotsApi;
use crate::error::Error;
use crate::models::{Bot, BotPatch, CreateBot};
use crate::request::Request;
use crate::response::ApiResponse;

impl BotsApi<'_> {
    /// `POST /bots`
    pub async fn create_bot(&self, bot: &CreateBot) -> Result<ApiResponse<Bot>, Error> {
        let request = Request::post("/bots").json(bot)?.expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /bots`
    pub async fn get_bots(
        &self,
        page: Option<i64>,
        per_page: Option<i64>,
        include_deleted: Option<bool>,
        only_orphaned: Option<bool>,
    ) -> Result<ApiResponse<Vec<Bot>>, Error> {
        let request = Request::get("/bots")
            .param("page", page)
            .param("per_page", per_page)
            .param("include_deleted", include_deleted)
            .param("only_orphaned", only_orphaned);
        self.facet.call(request).await
    }

    /// `GET /bots/{bot_user_id}`
    pub async fn get_bot(
        &self,
        bot_user_id: &str,
        include_deleted: Option<bool>,
    ) -> Result<ApiResponse<Bot>, Error> {
        let request = Request::get("/bots/{bot_user_id}")
            .var("bot_user_id", bot_user_id)
            .param("include_deleted", include_deleted);
        self.facet.call(request).await
    }

    /// `PUT /bots/{bot_user_id}`
    pub async fn patch_bot(&self, bot_user_id: &str, patch: &BotPatch) -> Result<ApiResponse<Bot>, Error> {
        let request = Request::put("/bots/{bot_user_id}")
            .var("bot_user_id", bot_user_id)
            .json(patch)?;
        self.facet.call(request).await
    }

    /// `POST /bots/{bot_user_id}/disable`
    pub async fn disable_bot(&self, bot_user_id: &str) -> Result<ApiResponse<Bot>, Error> {
        self.facet
            .call(Request::post("/bots/{bot_user_id}/disable").var("bot_user_id", bot_user_id))
            .await
    }

    /// `POST /bots/{bot_user_id}/enable`
    pub async fn enable_bot(&self, bot_user_id: &str) -> Result<ApiResponse<Bot>, Error> {
        self.facet
            .call(Request::post("/bots/{bot_user_id}/enable").var("bot_user_id", bot_user_id))
            .await
    }

    /// `POST /bots/{bot_user_id}/assign/{user_id}`
    pub async fn assign_bot(&self, bot_user_id: &str, user_id: &str) -> Result<ApiResponse<Bot>, Error> {
        let request = Request::post("/bots/{bot_user_id}/assign/{user_id}")
            .var("bot_user_id", bot_user_id)
            .var("user_id", user_id);
        self.facet.call(request).await
    }
}
