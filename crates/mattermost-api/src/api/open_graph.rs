use serde_json::{Value, json};

use super::OpenGraphApi;
use crate::error::Error;
use crate::request::{Body, Request};
use crate::response::ApiResponse;

impl OpenGraphApi<'_> {
    /// `POST /opengraph`: OpenGraph metadata of `url` as the server sees it.
    pub async fn open_graph(&self, url: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::post("/opengraph").body(Body::raw(json!({ "url": url }))))
            .await
    }
}
