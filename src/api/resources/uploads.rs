//! File uploads.
//!
//! Uploading returns a token; attach the file by adding an [`Upload`] with
//! that token to an issue before creating or updating it.

use std::fs;
use std::path::Path;

use tracing::{info, instrument};

use crate::api::client::Client;
use crate::api::error::{ApiError, Result};
use crate::api::types::{Upload, UploadEnvelope};

impl Client {
    /// Upload raw file content.
    #[instrument(skip(self, content), fields(len = content.len()))]
    pub fn upload(&self, content: Vec<u8>) -> Result<Upload> {
        let envelope: UploadEnvelope<Upload> =
            self.create_binary("/uploads.json", content, "upload")?;
        info!("File uploaded");
        Ok(envelope.upload)
    }

    /// Upload a file from disk. The returned upload carries the file name.
    #[instrument(skip(self))]
    pub fn upload_file(&self, path: &Path) -> Result<Upload> {
        let content = fs::read(path).map_err(|source| ApiError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        let upload = self.upload(content)?;
        Ok(Upload { filename, ..upload })
    }
}
