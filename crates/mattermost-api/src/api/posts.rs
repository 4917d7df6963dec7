// Posts: creation, editing, channel timelines and threads.

use reqwest::StatusCode;

use super::PostsApi;
use crate::error::Error;
use crate::models::{CreatePost, Post, PostList, PostPatch, StatusOk};
use crate::request::Request;
use crate::response::ApiResponse;

/// Paging for `GET /channels/{channel_id}/posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelPostsQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Only posts modified after this timestamp (ms).
    pub since: Option<i64>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub include_deleted: Option<bool>,
}

impl PostsApi<'_> {
    /// `POST /posts`
    pub async fn create_post(
        &self,
        post: &CreatePost,
        set_online: Option<bool>,
    ) -> Result<ApiResponse<Post>, Error> {
        let request = Request::post("/posts")
            .param("set_online", set_online)
            .json(post)?
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /posts/{post_id}`
    pub async fn get_post(&self, post_id: &str) -> Result<ApiResponse<Post>, Error> {
        self.facet
            .call(Request::get("/posts/{post_id}").var("post_id", post_id))
            .await
    }

    /// `PUT /posts/{post_id}/patch`
    pub async fn patch_post(&self, post_id: &str, patch: &PostPatch) -> Result<ApiResponse<Post>, Error> {
        let request = Request::put("/posts/{post_id}/patch")
            .var("post_id", post_id)
            .json(patch)?;
        self.facet.call(request).await
    }

    /// `DELETE /posts/{post_id}`
    pub async fn delete_post(&self, post_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::delete("/posts/{post_id}").var("post_id", post_id))
            .await
    }

    /// `GET /channels/{channel_id}/posts`
    pub async fn get_posts_for_channel(
        &self,
        channel_id: &str,
        query: &ChannelPostsQuery,
    ) -> Result<ApiResponse<PostList>, Error> {
        let request = Request::get("/channels/{channel_id}/posts")
            .var("channel_id", channel_id)
            .param("page", query.page)
            .param("per_page", query.per_page)
            .param("since", query.since)
            .param("before", query.before.as_deref())
            .param("after", query.after.as_deref())
            .param("include_deleted", query.include_deleted);
        self.facet.call(request).await
    }

    /// `GET /posts/{post_id}/thread`
    pub async fn get_post_thread(&self, post_id: &str) -> Result<ApiResponse<PostList>, Error> {
        self.facet
            .call(Request::get("/posts/{post_id}/thread").var("post_id", post_id))
            .await
    }

    /// `POST /posts/{post_id}/pin`
    pub async fn pin_post(&self, post_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::post("/posts/{post_id}/pin").var("post_id", post_id))
            .await
    }

    /// `POST /posts/{post_id}/unpin`
    pub async fn unpin_post(&self, post_id: &str) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet
            .status(Request::post("/posts/{post_id}/unpin").var("post_id", post_id))
            .await
    }
}
