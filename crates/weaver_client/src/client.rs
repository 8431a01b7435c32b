use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{ApiRequest, CodeBody, ConvertBody, ConvertReply, DebugReply, QualityCheckReply};
use crate::{ApiError, ApiOutput, FailureKind};

/// Backend origin used when the host injects no configuration.
pub const DEFAULT_BASE_URL: &str = "https://code-weaver-backend.vercel.app";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            // The deployed client configures no timeouts; hosts opt in.
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

#[async_trait::async_trait]
pub trait Backend: Send + Sync {
    async fn submit(&self, request: &ApiRequest) -> Result<ApiOutput, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestBackend {
    settings: ClientSettings,
}

impl ReqwestBackend {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = self.settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = self.settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))
    }

    fn endpoint(&self, path: &str) -> Result<reqwest::Url, ApiError> {
        let joined = format!("{}{}", self.settings.base_url.trim_end_matches('/'), path);
        reqwest::Url::parse(&joined)
            .map_err(|err| ApiError::new(FailureKind::InvalidBaseUrl, err.to_string()))
    }

    async fn post_json<B, R>(&self, path: &str, body: &B) -> Result<R, ApiError>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let client = self.build_client()?;

        let response = client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        // A reply missing the expected field is a failure, never a default.
        serde_json::from_slice(&bytes)
            .map_err(|err| ApiError::new(FailureKind::MalformedBody, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Backend for ReqwestBackend {
    async fn submit(&self, request: &ApiRequest) -> Result<ApiOutput, ApiError> {
        match request {
            ApiRequest::Convert {
                code,
                target_language,
            } => {
                let body = ConvertBody {
                    code: code.clone(),
                    target_language: target_language.clone(),
                };
                let reply: ConvertReply = self.post_json(request.path(), &body).await?;
                Ok(ApiOutput {
                    text: reply.converted_code,
                })
            }
            ApiRequest::Debug { code } => {
                let body = CodeBody { code: code.clone() };
                let reply: DebugReply = self.post_json(request.path(), &body).await?;
                Ok(ApiOutput {
                    text: reply.debugged_code,
                })
            }
            ApiRequest::QualityCheck { code } => {
                let body = CodeBody { code: code.clone() };
                let reply: QualityCheckReply = self.post_json(request.path(), &body).await?;
                Ok(ApiOutput {
                    text: reply.checked_code,
                })
            }
        }
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
