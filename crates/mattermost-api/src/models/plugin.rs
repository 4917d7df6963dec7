use crate::request::{FilePart, MultipartModel};

/// Multipart body of `POST /plugins`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPlugin {
    /// The plugin bundle (`.tar.gz`).
    pub bundle: FilePart,
    /// Replace an installed plugin with the same id.
    pub force: Option<bool>,
}

impl UploadPlugin {
    pub fn new(file_name: impl Into<String>, content: impl Into<bytes::Bytes>) -> Self {
        Self {
            bundle: FilePart::new("plugin", file_name, content),
            force: None,
        }
    }
}

impl MultipartModel for UploadPlugin {
    fn form_fields(&self) -> Vec<(String, String)> {
        self.force
            .map(|force| ("force".to_owned(), force.to_string()))
            .into_iter()
            .collect()
    }

    fn file_parts(&self) -> Vec<FilePart> {
        vec![self.bundle.clone()]
    }
}
