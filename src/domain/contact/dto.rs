use serde::{Deserialize, Serialize};

/// Newsletter / SMS signup submitted by the site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub sms: Option<String>,
}

/// A validated contact, ready to hand to the contact service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub email: String,
    pub first_name: Option<String>,
    pub sms: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactResponse {
    pub email: String,
}
