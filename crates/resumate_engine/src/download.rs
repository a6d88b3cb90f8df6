use std::path::PathBuf;
use std::time::Duration;

use futures_util::StreamExt;
use resumate_logging::{app_debug, app_info};
use url::Url;

use crate::{sanitize_file_name, AtomicFileWriter, DownloadError, SavedDocument};

#[derive(Debug, Clone)]
pub struct DownloadSettings {
    pub output_dir: PathBuf,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl DownloadSettings {
    pub fn new(output_dir: PathBuf) -> Self {
        Self {
            output_dir,
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
            max_bytes: 50 * 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait DocumentDownloader: Send + Sync {
    /// Fetches `url` and stores the body as `file_name` in the output directory.
    async fn download(&self, url: &str, file_name: &str) -> Result<SavedDocument, DownloadError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestDownloader {
    settings: DownloadSettings,
    http: reqwest::Client,
}

impl ReqwestDownloader {
    pub fn new(settings: DownloadSettings) -> Result<Self, DownloadError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| DownloadError::Network(err.to_string()))?;
        Ok(Self { settings, http })
    }

    fn too_large(&self, actual: u64) -> DownloadError {
        DownloadError::TooLarge {
            max_bytes: self.settings.max_bytes,
            actual: Some(actual),
        }
    }
}

#[async_trait::async_trait]
impl DocumentDownloader for ReqwestDownloader {
    async fn download(&self, url: &str, file_name: &str) -> Result<SavedDocument, DownloadError> {
        let parsed = Url::parse(url).map_err(|err| DownloadError::InvalidUrl(err.to_string()))?;
        let response = self
            .http
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(DownloadError::HttpStatus(status.as_u16()));
        }
        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            body.extend_from_slice(&chunk);
        }
        app_debug!("downloaded {} bytes from {}", body.len(), url);

        let byte_len = body.len() as u64;
        let safe_name = sanitize_file_name(file_name);
        let writer = AtomicFileWriter::new(self.settings.output_dir.clone());
        // Temp file, fsync and rename all block; keep them off the runtime workers.
        let path = tokio::task::spawn_blocking(move || writer.write(&safe_name, &body))
            .await
            .map_err(|err| DownloadError::Persist(err.to_string()))?
            .map_err(|err| DownloadError::Persist(err.to_string()))?;
        app_info!("saved {} ({} bytes)", path.display(), byte_len);

        Ok(SavedDocument { path, byte_len })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> DownloadError {
    if err.is_timeout() {
        return DownloadError::Timeout;
    }
    DownloadError::Network(err.to_string())
}
