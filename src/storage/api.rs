//! Tracker server client.

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::COOKIE;

use crate::error::{AppError, Result};
use crate::models::{ApiConfig, ApplicationPayload};
use crate::storage::{RecordSink, SaveReceipt};
use crate::utils::join_endpoint;

const APPLICATIONS_PATH: &str = "/api/applications";

/// Posts applications to `POST /api/applications`.
pub struct ApiClient {
    client: reqwest::Client,
    endpoint: String,
    session_cookie: Option<String>,
}

impl ApiClient {
    pub fn new(client: reqwest::Client, config: &ApiConfig) -> Result<Self> {
        let server_url = config.server_url.trim();
        if server_url.is_empty() {
            return Err(AppError::config("Please set your JobTracker server URL"));
        }
        url::Url::parse(server_url)?;

        Ok(Self {
            client,
            endpoint: join_endpoint(server_url, APPLICATIONS_PATH),
            session_cookie: config.session_cookie.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Map a tracker server response status to an outcome.
pub fn check_status(status: StatusCode, body: &str) -> Result<()> {
    if status.is_success() {
        return Ok(());
    }
    if status == StatusCode::UNAUTHORIZED {
        return Err(AppError::Unauthorized);
    }
    Err(AppError::Api {
        status: status.as_u16(),
        message: body.trim().to_string(),
    })
}

#[async_trait]
impl RecordSink for ApiClient {
    async fn save(&self, payload: &ApplicationPayload) -> Result<SaveReceipt> {
        payload.validate()?;

        let mut request = self.client.post(&self.endpoint).json(payload);
        if let Some(cookie) = &self.session_cookie {
            request = request.header(COOKIE, cookie);
        }

        log::debug!("Posting application to {}", self.endpoint);
        let response = request.send().await?;
        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                log::debug!("Could not read response body from {}: {}", self.endpoint, e);
                String::new()
            }
        };
        check_status(status, &body)?;

        log::info!(
            "Application saved: {} at {}",
            payload.position,
            payload.company_name
        );
        Ok(SaveReceipt {
            location: self.endpoint.clone(),
            replaced: false,
        })
    }
}
