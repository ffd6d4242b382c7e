use super::dto::{ContactRequest, ContactResponse, NewContact};
use super::error::ContactServiceError;
use super::gateway::ContactGateway;
use async_trait::async_trait;
use regex::Regex;
use std::sync::{Arc, LazyLock};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
});
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{6,15}$").expect("valid phone regex"));

pub struct ContactService {
    gateway: Arc<dyn ContactGateway>,
}

impl ContactService {
    pub fn new(gateway: Arc<dyn ContactGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
pub trait ContactServiceApi: Send + Sync {
    /// Validate a signup and register it with the contact service
    async fn subscribe(&self, request: ContactRequest)
        -> Result<ContactResponse, ContactServiceError>;
}

#[async_trait]
impl ContactServiceApi for ContactService {
    async fn subscribe(
        &self,
        request: ContactRequest,
    ) -> Result<ContactResponse, ContactServiceError> {
        let contact = validate_contact(request)?;

        self.gateway.create_contact(&contact).await?;
        tracing::info!(has_sms = contact.sms.is_some(), "Contact registered");

        Ok(ContactResponse {
            email: contact.email,
        })
    }
}

fn validate_contact(request: ContactRequest) -> Result<NewContact, ContactServiceError> {
    let email = request.email.trim().to_lowercase();
    if !EMAIL_PATTERN.is_match(&email) {
        return Err(ContactServiceError::Invalid("Invalid email address".to_string()));
    }

    // spaces and dashes are common in typed phone numbers
    let sms = request
        .sms
        .map(|sms| sms.chars().filter(|c| !c.is_whitespace() && *c != '-').collect::<String>())
        .filter(|sms| !sms.is_empty());
    if let Some(sms) = &sms {
        if !PHONE_PATTERN.is_match(sms) {
            return Err(ContactServiceError::Invalid("Invalid phone number".to_string()));
        }
    }

    let first_name = request
        .first_name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty());

    Ok(NewContact {
        email,
        first_name,
        sms,
    })
}
