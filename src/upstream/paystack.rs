use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::{AccountLookup, LookupReply};
use crate::error::ResolveError;

/// Client for the Paystack account resolution API
#[derive(Debug, Clone)]
pub struct PaystackClient {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl PaystackClient {
    /// Build a client with the bearer secret validated up front. A missing
    /// secret is a configuration error here, not at lookup time.
    pub fn new(
        secret_key: String,
        base_url: String,
        lookup_timeout: Duration,
    ) -> Result<Self, ResolveError> {
        if secret_key.trim().is_empty() {
            return Err(ResolveError::Configuration(
                "upstream bearer secret is empty".to_string(),
            ));
        }
        let client = Client::builder()
            .timeout(lookup_timeout)
            .build()
            .map_err(|e| ResolveError::Configuration(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            secret_key,
        })
    }
}

#[async_trait]
impl AccountLookup for PaystackClient {
    async fn resolve(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<LookupReply, ResolveError> {
        let url = format!("{}/bank/resolve", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("account_number", account_number), ("bank_code", bank_code)])
            .bearer_auth(&self.secret_key)
            .send()
            .await
            .map_err(|e| ResolveError::Upstream(format!("API request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(ResolveError::Upstream(format!(
                "API returned error: {}",
                response.status()
            )));
        }

        let reply: LookupReply = response
            .json()
            .await
            .map_err(|e| ResolveError::Upstream(format!("Failed to parse response: {}", e)))?;

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_secret_is_rejected_at_construction() {
        let result = PaystackClient::new(
            "  ".to_string(),
            "https://api.paystack.co".to_string(),
            Duration::from_secs(7),
        );
        assert!(matches!(result, Err(ResolveError::Configuration(_))));
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let client = PaystackClient::new(
            "sk_test_xyz".to_string(),
            "https://api.paystack.co/".to_string(),
            Duration::from_secs(7),
        )
        .unwrap();
        assert_eq!(client.base_url, "https://api.paystack.co");
    }
}
