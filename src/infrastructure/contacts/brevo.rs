use crate::domain::contact::{ContactGateway, NewContact};
use crate::error::{AppError, AppResult};
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

const DUPLICATE_CODE: &str = "duplicate_parameter";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateContactBody<'a> {
    email: &'a str,
    attributes: ContactAttributes<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    list_ids: Option<Vec<i64>>,
    update_enabled: bool,
}

#[derive(Debug, Serialize)]
struct ContactAttributes<'a> {
    #[serde(rename = "NOME", skip_serializing_if = "Option::is_none")]
    first_name: Option<&'a str>,
    #[serde(rename = "SMS", skip_serializing_if = "Option::is_none")]
    sms: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct BrevoError {
    code: Option<String>,
    message: Option<String>,
}

/// Brevo contacts API client
pub struct BrevoContactClient {
    api_key: String,
    base_url: String,
    list_id: Option<i64>,
    http_client: reqwest::Client,
}

impl BrevoContactClient {
    pub fn new(api_key: String, base_url: String, list_id: Option<i64>) -> AppResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::Internal(format!("Failed to build Brevo HTTP client: {}", e)))?;

        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            list_id,
            http_client,
        })
    }
}

#[async_trait]
impl ContactGateway for BrevoContactClient {
    async fn create_contact(&self, contact: &NewContact) -> AppResult<()> {
        let body = CreateContactBody {
            email: &contact.email,
            attributes: ContactAttributes {
                first_name: contact.first_name.as_deref(),
                sms: contact.sms.as_deref(),
            },
            list_ids: self.list_id.map(|id| vec![id]),
            update_enabled: false,
        };

        let response = self
            .http_client
            .post(format!("{}/contacts", self.base_url))
            .header("api-key", &self.api_key)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalService(format!("Brevo request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        let error: Option<BrevoError> = serde_json::from_str(&error_text).ok();

        if status == StatusCode::BAD_REQUEST
            && error.as_ref().and_then(|e| e.code.as_deref()) == Some(DUPLICATE_CODE)
        {
            return Err(AppError::Conflict("Contact already exists".to_string()));
        }

        let message = error
            .and_then(|e| e.message)
            .unwrap_or(error_text);
        tracing::warn!(status = %status.as_u16(), %message, "Brevo rejected contact");

        Err(AppError::ExternalService(format!(
            "Brevo contact creation failed with {}: {}",
            status, message
        )))
    }
}
