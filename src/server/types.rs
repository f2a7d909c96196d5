// Request/response bodies for the verification endpoint
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub account_number: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl VerifyResponse {
    pub fn resolved(account_name: String) -> Self {
        Self {
            success: true,
            account_name: Some(account_name),
            message: None,
        }
    }

    pub fn failed(message: String) -> Self {
        Self {
            success: false,
            account_name: None,
            message: Some(message),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub version: String,
}
