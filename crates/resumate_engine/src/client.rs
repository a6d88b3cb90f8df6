use std::time::Duration;

use reqwest::multipart::{Form, Part};
use resumate_logging::{app_info, app_warn};
use serde::Deserialize;
use url::Url;

use crate::{ClientError, OptimizeRequest, OptimizeResponse};

pub const OPTIMIZE_PATH: &str = "/optimize-resume";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub endpoint: Url,
    pub connect_timeout: Duration,
}

impl ClientSettings {
    /// Resolves the optimize endpoint below `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let invalid = |reason: String| ClientError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason,
        };
        let base = base_url.trim().trim_end_matches('/');
        let endpoint =
            Url::parse(&format!("{base}{OPTIMIZE_PATH}")).map_err(|err| invalid(err.to_string()))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", endpoint.scheme())));
        }
        Ok(Self {
            endpoint,
            connect_timeout: Duration::from_secs(10),
        })
    }
}

#[async_trait::async_trait]
pub trait OptimizeClient: Send + Sync {
    async fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, ClientError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestOptimizeClient {
    settings: ClientSettings,
    http: reqwest::Client,
}

impl ReqwestOptimizeClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        // No overall timeout: generation can take minutes. Only the connect phase is
        // bounded, so an unreachable host ends the loading step instead of hanging it.
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .build()
            .map_err(|err| ClientError::Network(err.to_string()))?;
        Ok(Self { settings, http })
    }

    async fn build_form(request: &OptimizeRequest) -> Result<Form, ClientError> {
        let path = request.file_path.display().to_string();
        let bytes = tokio::fs::read(&request.file_path)
            .await
            .map_err(|err| ClientError::FileRead {
                path: path.clone(),
                reason: err.to_string(),
            })?;
        let part = Part::bytes(bytes)
            .file_name(request.file_name.clone())
            .mime_str(&request.mime_type)
            .map_err(|err| ClientError::FileRead {
                path,
                reason: format!("invalid MIME type {}: {err}", request.mime_type),
            })?;
        Ok(Form::new()
            .part("resume_file", part)
            .text("job_description", request.job_description.clone()))
    }
}

#[async_trait::async_trait]
impl OptimizeClient for ReqwestOptimizeClient {
    async fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, ClientError> {
        let form = Self::build_form(request).await?;
        app_info!(
            "POST {} file={} mime={} description_chars={}",
            self.settings.endpoint,
            request.file_name,
            request.mime_type,
            request.job_description.chars().count()
        );

        let response = self
            .http
            .post(self.settings.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = match response.bytes().await {
                Ok(body) => extract_detail(&body),
                Err(_) => None,
            };
            app_warn!("optimize rejected status={} detail={:?}", status, detail);
            return Err(ClientError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| ClientError::Network(err.to_string()))?;
        serde_json::from_slice::<OptimizeResponse>(&body)
            .map_err(|err| ClientError::MalformedResponse(err.to_string()))
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// Pulls a non-empty string `detail` out of an error body, if there is one.
fn extract_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    parsed
        .detail?
        .as_str()
        .filter(|detail| !detail.is_empty())
        .map(str::to_owned)
}
