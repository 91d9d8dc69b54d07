use async_trait::async_trait;
use serde::Deserialize;

/// A file captured by the form but not yet stored anywhere public.
#[derive(Debug, Clone)]
pub struct StagedFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Result of pushing one staged file to the storage service.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedFile {
    /// Publicly retrievable URL.
    pub url: String,
}

/// The external object-storage collaborator. An empty result means the
/// upload did not go through.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn upload(
        &self,
        files: &[StagedFile],
    ) -> Result<Vec<UploadedFile>, Box<dyn std::error::Error + Send + Sync>>;
}
