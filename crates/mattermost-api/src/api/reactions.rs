use std::collections::HashMap;

use reqwest::StatusCode;

use super::ReactionsApi;
use crate::error::Error;
use crate::models::{Reaction, StatusOk};
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl ReactionsApi<'_> {
    /// `POST /reactions`
    pub async fn save_reaction(&self, reaction: &Reaction) -> Result<ApiResponse<Reaction>, Error> {
        let request = Request::post("/reactions")
            .json(reaction)?
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /posts/{post_id}/reactions`
    pub async fn get_reactions(&self, post_id: &str) -> Result<ApiResponse<Vec<Reaction>>, Error> {
        self.facet
            .call(Request::get("/posts/{post_id}/reactions").var("post_id", post_id))
            .await
    }

    /// `DELETE /users/{user_id}/posts/{post_id}/reactions/{emoji_name}`
    pub async fn delete_reaction(
        &self,
        user_id: &str,
        post_id: &str,
        emoji_name: &str,
    ) -> Result<ApiResponse<StatusOk>, Error> {
        let request = Request::delete("/users/{user_id}/posts/{post_id}/reactions/{emoji_name}")
            .var("user_id", user_id)
            .var("post_id", post_id)
            .var("emoji_name", emoji_name);
        self.facet.status(request).await
    }

    /// `POST /posts/ids/reactions`: reactions keyed by post id.
    pub async fn get_bulk_reactions(
        &self,
        post_ids: &[String],
    ) -> Result<ApiResponse<HashMap<String, Vec<Reaction>>>, Error> {
        self.facet
            .call(Request::post("/posts/ids/reactions").body(Body::raw(post_ids.to_vec())))
            .await
    }
}
