// Files: multipart upload, binary downloads, metadata.

use bytes::Bytes;
use reqwest::StatusCode;

use super::FilesApi;
use crate::error::Error;
use crate::models::{FileInfo, FileUploadResponse, PublicLink};
use crate::request::{Body, MultipartModel, Request};
use crate::response::ApiResponse;

impl FilesApi<'_> {
    /// `POST /files` as `multipart/form-data`.
    ///
    /// `channel_id` goes in the query; the model may also carry it as a
    /// form field.
    pub async fn upload_file<M: MultipartModel + ?Sized>(
        &self,
        multipart_data: &M,
        channel_id: Option<&str>,
    ) -> Result<ApiResponse<FileUploadResponse>, Error> {
        let request = Request::post("/files")
            .param("channel_id", channel_id)
            .body(Body::multipart(multipart_data))
            .expect(StatusCode::CREATED);
        self.facet.call(request).await
    }

    /// `GET /files/{file_id}`: the file's bytes.
    pub async fn get_file(&self, file_id: &str) -> Result<ApiResponse<Bytes>, Error> {
        self.facet
            .bytes(Request::get("/files/{file_id}").var("file_id", file_id))
            .await
    }

    /// `GET /files/{file_id}/thumbnail`
    pub async fn get_file_thumbnail(&self, file_id: &str) -> Result<ApiResponse<Bytes>, Error> {
        self.facet
            .bytes(Request::get("/files/{file_id}/thumbnail").var("file_id", file_id))
            .await
    }

    /// `GET /files/{file_id}/preview`
    pub async fn get_file_preview(&self, file_id: &str) -> Result<ApiResponse<Bytes>, Error> {
        self.facet
            .bytes(Request::get("/files/{file_id}/preview").var("file_id", file_id))
            .await
    }

    /// `GET /files/{file_id}/info`
    pub async fn get_file_info(&self, file_id: &str) -> Result<ApiResponse<FileInfo>, Error> {
        self.facet
            .call(Request::get("/files/{file_id}/info").var("file_id", file_id))
            .await
    }

    /// `GET /files/{file_id}/link`
    pub async fn get_file_link(&self, file_id: &str) -> Result<ApiResponse<PublicLink>, Error> {
        self.facet
            .call(Request::get("/files/{file_id}/link").var("file_id", file_id))
            .await
    }

    /// `GET /posts/{post_id}/files/info`
    pub async fn get_file_infos_for_post(
        &self,
        post_id: &str,
        include_deleted: Option<bool>,
    ) -> Result<ApiResponse<Vec<FileInfo>>, Error> {
        let request = Request::get("/posts/{post_id}/files/info")
            .var("post_id", post_id)
            .param("include_deleted", include_deleted);
        self.facet.call(request).await
    }
}
