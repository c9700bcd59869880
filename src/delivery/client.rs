//! HTTP client for the EmailJS REST API
//!
//! Sends a single templated email per call. The browser SDK's `send` maps to
//! `POST /api/v1.0/email/send` with the account public key as `user_id`.

use super::error::DeliveryError;
use super::traits::DeliveryClientTrait;
use crate::config::ContactConfig;
use crate::state::ContactSubmission;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Path of the send endpoint, relative to the API base
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Template parameters filled in by the email template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    /// Fixed recipient label
    pub to_name: String,
}

impl TemplateParams {
    /// Map a submitted form onto the template parameter set
    pub fn from_submission(submission: &ContactSubmission, to_name: &str) -> Self {
        Self {
            from_name: submission.name.clone(),
            from_email: submission.email.clone(),
            subject: submission.subject.clone(),
            message: submission.message.clone(),
            to_name: to_name.to_string(),
        }
    }
}

/// JSON body of the send request
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
}

/// Client for the EmailJS delivery service
pub struct EmailJsClient {
    client: reqwest::Client,
    endpoint: String,
    public_key: String,
    service_id: String,
    template_id: String,
    private_key: Option<String>,
}

impl EmailJsClient {
    /// Create a client from the loaded configuration
    pub fn new(config: &ContactConfig) -> Result<Self, DeliveryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs()))
            .build()
            .map_err(|e| DeliveryError::new(format!("Failed to create HTTP client: {e}")))?;

        let endpoint = format!("{}{}", config.api_base().trim_end_matches('/'), SEND_PATH);

        tracing::info!(
            "Initialized EmailJS client: {} (service: {}, template: {})",
            endpoint,
            config.service_id(),
            config.template_id()
        );

        Ok(Self {
            client,
            endpoint,
            public_key: config.public_key().to_string(),
            service_id: config.service_id().to_string(),
            template_id: config.template_id().to_string(),
            private_key: config.private_key.clone(),
        })
    }

    fn request_body<'a>(&'a self, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id: &self.template_id,
            user_id: &self.public_key,
            template_params: params,
            access_token: self.private_key.as_deref(),
        }
    }
}

#[async_trait]
impl DeliveryClientTrait for EmailJsClient {
    async fn send(&self, params: &TemplateParams) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&self.request_body(params))
            .send()
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        check_response(status, &body)
    }
}

/// EmailJS answers `200 OK` with a plain-text body; anything else is a rejection
fn check_response(status: StatusCode, body: &str) -> Result<(), DeliveryError> {
    if status.is_success() {
        return Ok(());
    }

    let detail = if body.trim().is_empty() {
        status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string()
    } else {
        body.trim().to_string()
    };

    Err(DeliveryError::new(format!("{} {}", status.as_u16(), detail)))
}
