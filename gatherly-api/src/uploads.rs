//! Adapter for the external file-upload service.

use async_trait::async_trait;

use gatherly_core::upload::{FileStore, StagedFile, UploadedFile};

/// Pushes staged files to the configured upload endpoint and maps the JSON
/// reply to public URLs.
pub struct HttpFileStore {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpFileStore {
    pub fn new(endpoint: String, api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            api_key,
        }
    }
}

#[async_trait]
impl FileStore for HttpFileStore {
    async fn upload(
        &self,
        files: &[StagedFile],
    ) -> Result<Vec<UploadedFile>, Box<dyn std::error::Error + Send + Sync>> {
        let mut form = reqwest::multipart::Form::new();
        for (index, file) in files.iter().enumerate() {
            let part = reqwest::multipart::Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone())
                .mime_str(&file.content_type)?;
            form = form.part(format!("files[{index}]"), part);
        }

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("upload service error ({status}): {body}").into());
        }

        let uploaded: Vec<UploadedFile> = response.json().await?;
        Ok(uploaded)
    }
}
