use reqwest::StatusCode;
use serde_json::Value;

use super::UploadsApi;
use crate::error::Error;
use crate::models::FileInfo;
use crate::request::{Body, FilePart, Request};
use crate::response::ApiResponse;

impl UploadsApi<'_> {
    /// `POST /uploads`: open a resumable upload session.
    pub async fn create_upload(&self, session: Value) -> Result<ApiResponse<Value>, Error> {
        let request = Request::post("/uploads")
            .body(Body::raw(session))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /uploads/{upload_id}`
    pub async fn get_upload(&self, upload_id: &str) -> Result<ApiResponse<Value>, Error> {
        self.facet
            .call(Request::get("/uploads/{upload_id}").var("upload_id", upload_id))
            .await
    }

    /// `POST /uploads/{upload_id}` with the next chunk under the `data` field.
    ///
    /// The server answers `201` with the file info once the upload is
    /// complete; an incomplete upload (`204`) comes back raw.
    pub async fn upload_data(
        &self,
        upload_id: &str,
        file_name: &str,
        chunk: bytes::Bytes,
    ) -> Result<ApiResponse<FileInfo>, Error> {
        let part = FilePart::new("data", file_name, chunk);
        let request = Request::post("/uploads/{upload_id}")
            .var("upload_id", upload_id)
            .body(Body::multipart(&part))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }
}
