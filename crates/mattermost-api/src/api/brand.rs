use bytes::Bytes;
use reqwest::StatusCode;

use super::BrandApi;
use crate::error::Error;
use crate::models::StatusOk;
use crate::request::{Body, FilePart, Request};
use crate::response::ApiResponse;

impl BrandApi<'_> {
    /// `GET /brand/image`
    pub async fn get_brand_image(&self) -> Result<ApiResponse<Bytes>, Error> {
        self.facet.bytes(Request::get("/brand/image")).await
    }

    /// `POST /brand/image` with the picture under the `image` field.
    pub async fn upload_brand_image(&self, file_name: &str, image: Bytes) -> Result<ApiResponse<StatusOk>, Error> {
        let part = FilePart::new("image", file_name, image);
        let request = Request::post("/brand/image")
            .body(Body::multipart(&part))
            .expect(StatusCode::CREATED);
        self.facet.status(request).await
    }

    /// `DELETE /brand/image`
    pub async fn delete_brand_image(&self) -> Result<ApiResponse<StatusOk>, Error> {
        self.facet.status(Request::delete("/brand/image")).await
    }
}
