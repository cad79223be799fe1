//! Backend API client implementation using reqwest.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::domain::{AppError, BackendConfig, PersonnelRef, ScheduleMap};
use crate::ports::{ScheduleBackend, TokenStore};

const PERSONNEL_PATH: &str = "personnel";
const SCHEDULE_PATH: &str = "schedule/general";

/// HTTP transport for the residence backend.
///
/// Each call performs exactly one request. There is no retry and, unless
/// configured, no timeout.
pub struct HttpScheduleBackend {
    config: BackendConfig,
    client: Client,
    tokens: Box<dyn TokenStore + Send + Sync>,
}

impl std::fmt::Debug for HttpScheduleBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpScheduleBackend")
            .field("api_url", &self.config.api_url)
            .field("token", &"[REDACTED]")
            .finish()
    }
}

impl HttpScheduleBackend {
    /// Create a new HTTP backend with the given configuration and token source.
    pub fn new(
        config: &BackendConfig,
        tokens: Box<dyn TokenStore + Send + Sync>,
    ) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| AppError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config: config.clone(), client, tokens })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.read_token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let url = self.config.endpoint(path)?;
        tracing::debug!(%url, "GET");
        let body = self.send(self.authorize(self.client.get(url)))?;
        serde_json::from_str(&body).map_err(|e| AppError::BackendContract {
            endpoint: format!("GET /{}", path),
            details: e.to_string(),
        })
    }

    fn send(&self, request: RequestBuilder) -> Result<String, AppError> {
        let response = request.send().map_err(|e| AppError::Transport(e.to_string()))?;

        let status = response.status();
        let body_text = response.text().unwrap_or_default();

        if status.is_success() {
            return Ok(body_text);
        }

        Err(AppError::Backend {
            message: extract_error_message(&body_text),
            status: Some(status.as_u16()),
        })
    }
}

/// Body of `GET /personnel`.
#[derive(Debug, Deserialize)]
struct PersonnelEnvelope {
    data: Vec<PersonnelRef>,
}

/// Body of `GET /schedule/general`. A `null` payload means nothing is scheduled yet.
#[derive(Debug, Deserialize)]
struct ScheduleEnvelope {
    data: Option<ScheduleMap>,
}

/// Body of `POST /schedule/general`.
#[derive(Debug, Serialize)]
struct SaveScheduleRequest<'a> {
    schedule: &'a ScheduleMap,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed
        .get("message")
        .or_else(|| parsed.get("error"))
        .and_then(|message| message.as_str())
        .map(ToOwned::to_owned)
}

impl ScheduleBackend for HttpScheduleBackend {
    fn fetch_personnel(&self) -> Result<Vec<PersonnelRef>, AppError> {
        let envelope: PersonnelEnvelope = self.get_json(PERSONNEL_PATH)?;
        Ok(envelope.data)
    }

    fn fetch_schedule(&self) -> Result<ScheduleMap, AppError> {
        let envelope: ScheduleEnvelope = self.get_json(SCHEDULE_PATH)?;
        Ok(envelope.data.unwrap_or_default())
    }

    fn save_schedule(&self, schedule: &ScheduleMap) -> Result<(), AppError> {
        let url = self.config.endpoint(SCHEDULE_PATH)?;
        tracing::debug!(%url, personnel = schedule.len(), "POST");
        let request = self.client.post(url).json(&SaveScheduleRequest { schedule });
        self.send(self.authorize(request))?;
        Ok(())
    }
}
