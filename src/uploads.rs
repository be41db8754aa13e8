//! Floorplan upload storage.

use std::path::{Path, PathBuf};

use base64::{engine::general_purpose, Engine as _};
use rand::Rng;
use thiserror::Error;

use crate::config::UploadsConfig;

/// Public path prefix under which stored uploads are served
pub const UPLOADS_ROUTE: &str = "/uploads";

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("please upload a floorplan")]
    MissingFile,
    #[error("unsupported file type '{0}', only JPG, PNG and PDF files are accepted")]
    UnsupportedType(String),
    #[error("file too large: {size} bytes (max: {max} bytes)")]
    TooLarge { size: usize, max: usize },
    #[error("failed to store upload: {0}")]
    Io(#[from] std::io::Error),
}

/// Accepted content types and the extension files are stored with
fn extension_for(content_type: &str) -> Option<&'static str> {
    match content_type.to_ascii_lowercase().as_str() {
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/png" => Some("png"),
        "application/pdf" => Some("pdf"),
        _ => None,
    }
}

pub fn is_image(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().starts_with("image/")
}

/// Encode file content as a base64 `data:` URL
pub fn data_url(content_type: &str, content: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        content_type.to_ascii_lowercase(),
        general_purpose::STANDARD.encode(content)
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoredUpload {
    pub file_name: String,
    pub path: PathBuf,
    pub content_type: String,
}

pub struct UploadStore {
    dir: PathBuf,
    max_file_size: usize,
    public_base_url: Option<String>,
}

impl UploadStore {
    pub fn new(config: &UploadsConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.dir),
            max_file_size: config.max_file_size,
            public_base_url: config
                .public_base_url
                .as_ref()
                .map(|url| url.trim_end_matches('/').to_string()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_file_size(&self) -> usize {
        self.max_file_size
    }

    /// Check type and size before anything touches the disk.
    pub fn validate(&self, content_type: &str, size: usize) -> Result<&'static str, UploadError> {
        let extension = extension_for(content_type)
            .ok_or_else(|| UploadError::UnsupportedType(content_type.to_string()))?;
        if size == 0 {
            return Err(UploadError::MissingFile);
        }
        if size > self.max_file_size {
            return Err(UploadError::TooLarge {
                size,
                max: self.max_file_size,
            });
        }
        Ok(extension)
    }

    /// Write the upload as `floorplan-<millis>-<random>.<ext>`.
    pub async fn save(&self, content_type: &str, content: &[u8]) -> Result<StoredUpload, UploadError> {
        let extension = self.validate(content_type, content.len())?;

        tokio::fs::create_dir_all(&self.dir).await?;

        let file_name = format!(
            "floorplan-{}-{}.{}",
            chrono::Utc::now().timestamp_millis(),
            rand::thread_rng().gen_range(0..1_000_000_000u32),
            extension
        );
        let path = self.dir.join(&file_name);
        tokio::fs::write(&path, content).await?;

        tracing::debug!(file = %path.display(), bytes = content.len(), "Stored upload");

        Ok(StoredUpload {
            file_name,
            path,
            content_type: content_type.to_ascii_lowercase(),
        })
    }

    /// Public URL of a stored file. Without a configured base URL the request
    /// host is used, and without a host the path stays relative.
    pub fn file_url(&self, host: Option<&str>, file_name: &str) -> String {
        match (&self.public_base_url, host) {
            (Some(base), _) => format!("{}{}/{}", base, UPLOADS_ROUTE, file_name),
            (None, Some(host)) => format!("http://{}{}/{}", host, UPLOADS_ROUTE, file_name),
            (None, None) => format!("{}/{}", UPLOADS_ROUTE, file_name),
        }
    }
}
