//! HTTP access to the matching backend.
//!
//! Every JSON endpoint answers with an envelope: `{"success": true, ...}` on
//! success, or `{"error": "..."}` (with or without `"success": false`) on
//! failure. Failures usually come with a 4xx/5xx status, so the status code is
//! only logged and the envelope decides the outcome.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

use crate::error::ApiError;
use crate::models::{JobDraft, JobId, MatchReport, SavedJob, UploadedResume};

/// Multipart field the backend reads the resume file from.
pub const RESUME_FIELD: &str = "resume";

/// A file picked in the browser, already read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime: Option<String>,
    pub bytes: Vec<u8>,
}

/// Contents of the resume form: the file plus any other text fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ResumeUpload {
    pub file: SelectedFile,
    pub fields: Vec<(String, String)>,
}

/// The backend operations the page needs.
#[allow(async_fn_in_trait)]
pub trait MatchApi {
    async fn upload_resume(&self, upload: ResumeUpload) -> Result<UploadedResume, ApiError>;

    async fn save_job(&self, draft: &JobDraft) -> Result<SavedJob, ApiError>;

    async fn match_candidates(&self, job_id: &JobId) -> Result<MatchReport, ApiError>;

    /// Address the browser should navigate to for the results file.
    fn download_url(&self, job_id: &JobId) -> Result<String, ApiError>;
}

/// Endpoint builder rooted at the configured API base.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    pub fn new(base: Url) -> Self {
        Self { base }
    }

    pub fn upload_resume(&self) -> Result<Url, ApiError> {
        self.join(&["upload_resume"])
    }

    pub fn job_description(&self) -> Result<Url, ApiError> {
        self.join(&["upload_job_description"])
    }

    pub fn match_candidates(&self, job_id: &JobId) -> Result<Url, ApiError> {
        self.join(&["match_candidates", job_id.as_str()])
    }

    pub fn download_results(&self, job_id: &JobId) -> Result<Url, ApiError> {
        self.join(&["download_results", job_id.as_str()])
    }

    /// Append path segments to the base. Segments are percent-encoded, so an
    /// identifier can never add path components of its own.
    fn join(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Endpoint(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.set_query(None);
        url.set_fragment(None);
        Ok(url)
    }
}

/// Decode a response body envelope into its payload.
///
/// A missing `success` field counts as failure; a missing `error` message
/// becomes "Unknown error".
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    let success = value.get("success").and_then(Value::as_bool).unwrap_or(false);
    if !success {
        let message = value
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");
        return Err(ApiError::Rejected(message.to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

/// `MatchApi` over reqwest. On wasm32 reqwest drives the browser's fetch.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    endpoints: Endpoints,
}

impl HttpApi {
    pub fn new(base: Url) -> Self {
        Self {
            client: Client::new(),
            endpoints: Endpoints::new(base),
        }
    }

    async fn read_envelope<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            warn!("{} returned HTTP {}", endpoint, status);
        }
        let body = response.text().await?;
        debug!("{} response: {} bytes", endpoint, body.len());
        decode_envelope(&body)
    }
}

impl MatchApi for HttpApi {
    async fn upload_resume(&self, upload: ResumeUpload) -> Result<UploadedResume, ApiError> {
        let url = self.endpoints.upload_resume()?;
        let ResumeUpload { file, fields } = upload;

        let mut part = Part::bytes(file.bytes).file_name(file.name);
        if let Some(mime) = file.mime.filter(|m| !m.is_empty()) {
            part = part.mime_str(&mime)?;
        }
        let mut form = Form::new();
        for (name, value) in fields {
            form = form.text(name, value);
        }
        let form = form.part(RESUME_FIELD, part);

        let response = self.client.post(url).multipart(form).send().await?;
        self.read_envelope("upload_resume", response).await
    }

    async fn save_job(&self, draft: &JobDraft) -> Result<SavedJob, ApiError> {
        let url = self.endpoints.job_description()?;
        let response = self.client.post(url).json(draft).send().await?;
        self.read_envelope("upload_job_description", response).await
    }

    async fn match_candidates(&self, job_id: &JobId) -> Result<MatchReport, ApiError> {
        let url = self.endpoints.match_candidates(job_id)?;
        let response = self.client.get(url).send().await?;
        self.read_envelope("match_candidates", response).await
    }

    fn download_url(&self, job_id: &JobId) -> Result<String, ApiError> {
        Ok(self.endpoints.download_results(job_id)?.to_string())
    }
}
