use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::request::{FilePart, MultipartModel};

/// Metadata of an uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInfo {
    pub id: String,
    pub user_id: String,
    pub post_id: String,
    pub channel_id: String,
    pub create_at: i64,
    pub update_at: i64,
    pub delete_at: i64,
    pub name: String,
    pub extension: String,
    pub size: i64,
    pub mime_type: String,
    pub width: i64,
    pub height: i64,
    pub has_preview_image: bool,
}

/// Response of `POST /files` (201).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUploadResponse {
    pub file_infos: Vec<FileInfo>,
    pub client_ids: Vec<String>,
}

/// Response of `GET /files/{file_id}/link`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicLink {
    pub link: String,
}

/// Multipart body of `POST /files`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadFiles {
    /// Channel the files are uploaded to, sent as a form field. May be left
    /// empty when `channel_id` goes in the query instead.
    pub channel_id: Option<String>,
    /// Client-side ids correlating uploads with `client_ids` in the response.
    pub client_ids: Vec<String>,
    pub files: Vec<FilePart>,
}

impl UploadFiles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel_id(mut self, channel_id: impl Into<String>) -> Self {
        self.channel_id = Some(channel_id.into());
        self
    }

    /// Add one file under the `files` field.
    pub fn with_file(mut self, file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        self.files.push(FilePart::new("files", file_name, content));
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_ids.push(client_id.into());
        self
    }
}

impl MultipartModel for UploadFiles {
    fn form_fields(&self) -> Vec<(String, String)> {
        let mut fields = Vec::with_capacity(self.client_ids.len() + 1);
        if let Some(ref channel_id) = self.channel_id {
            fields.push(("channel_id".to_owned(), channel_id.clone()));
        }
        fields.extend(
            self.client_ids
                .iter()
                .map(|id| ("client_ids".to_owned(), id.clone())),
        );
        fields
    }

    fn file_parts(&self) -> Vec<FilePart> {
        self.files.clone()
    }
}
