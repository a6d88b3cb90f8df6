use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

pub type RequestId = u64;

/// Shown when the service refused the request without a usable `detail`.
pub const REJECTED_FALLBACK_MESSAGE: &str = "Failed to optimize resume";
/// Shown for transport failures and unusable success bodies.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while optimizing your resume";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Resume,
    CoverLetter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimizeRequest {
    pub file_path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
    pub job_description: String,
}

/// Success body of `POST /optimize-resume`, taken verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeResponse {
    pub resume_file_name: String,
    pub resume_download_url: String,
    pub cover_letter_file_name: String,
    pub cover_letter_download_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedDocument {
    pub path: PathBuf,
    pub byte_len: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    OptimizeCompleted {
        request_id: RequestId,
        result: Result<OptimizeResponse, ClientError>,
    },
    DownloadCompleted {
        request_id: RequestId,
        document: DocumentKind,
        result: Result<SavedDocument, DownloadError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
    #[error("could not read {path}: {reason}")]
    FileRead { path: String, reason: String },
    #[error("service responded with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    #[error("malformed response body: {0}")]
    MalformedResponse(String),
    #[error("network error: {0}")]
    Network(String),
}

impl ClientError {
    /// The message to put in front of the user.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            ClientError::Rejected { detail: None, .. } => REJECTED_FALLBACK_MESSAGE.to_owned(),
            _ => GENERIC_FAILURE_MESSAGE.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    #[error("invalid download url: {0}")]
    InvalidUrl(String),
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("document too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not save document: {0}")]
    Persist(String),
}
