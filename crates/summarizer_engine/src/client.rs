use client_logging::{client_debug, client_info, client_warn};
use reqwest::multipart::{Form, Part};
use summarizer_core::SummarizeRequest;
use url::Url;

use crate::{ClientSettings, FailureKind, SubmitError, SummaryResponse};

/// Shown when the service rejects a request without saying why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Summarize failed";

#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    /// Performs exactly one exchange with the summarization service.
    async fn submit(&self, request: &SummarizeRequest) -> Result<SummaryResponse, SubmitError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestSummarizer {
    client: reqwest::Client,
    endpoint: Url,
}

impl ReqwestSummarizer {
    pub fn new(settings: &ClientSettings) -> Result<Self, SubmitError> {
        let endpoint = settings.summarize_url().map_err(|err| {
            SubmitError::new(FailureKind::Network, format!("invalid service url: {err}"))
        })?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(map_reqwest_error)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn build_form(request: &SummarizeRequest) -> Result<Form, SubmitError> {
        let document = &request.document;
        let file = Part::bytes(document.bytes().to_vec())
            .file_name(document.file_name().to_string())
            .mime_str(document.content_type())
            .map_err(map_reqwest_error)?;

        let form = Form::new()
            .part("file", file)
            .text("mode", request.mode.as_str());
        Ok(match &request.title {
            Some(title) if !title.is_empty() => form.text("title", title.clone()),
            _ => form,
        })
    }
}

#[async_trait::async_trait]
impl Summarizer for ReqwestSummarizer {
    async fn submit(&self, request: &SummarizeRequest) -> Result<SummaryResponse, SubmitError> {
        let form = Self::build_form(request)?;
        client_debug!(
            "POST {} file={} bytes={} mode={} titled={}",
            self.endpoint,
            request.document.file_name(),
            request.document.size(),
            request.mode,
            request.title.is_some()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(form)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                GENERIC_FAILURE_MESSAGE.to_string()
            } else {
                body
            };
            client_warn!("Summarize rejected with {}: {}", status, message);
            return Err(SubmitError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: SummaryResponse = serde_json::from_slice(&body).map_err(|err| {
            client_warn!("Summary response did not parse: {}", err);
            SubmitError::new(
                FailureKind::MalformedResponse,
                format!("Malformed summary response: {err}"),
            )
        })?;
        client_info!(
            "Summary received mode={} chars={}",
            parsed.mode,
            parsed.summary.chars().count()
        );
        Ok(parsed)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SubmitError {
    if err.is_timeout() {
        return SubmitError::new(FailureKind::Timeout, err.to_string());
    }
    SubmitError::new(FailureKind::Network, err.to_string())
}
