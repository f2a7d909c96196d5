pub mod paystack;

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::ResolveError;

/// Body of a single candidate-bank lookup. Mirrors the resolution API's JSON:
/// a 200 can still carry `status: false`, so transport success is not a match.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupReply {
    pub status: bool,
    #[serde(default)]
    pub data: Option<LookupData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LookupData {
    pub account_name: String,
}

/// One probe against the settlement network: does `bank_code` recognize
/// `account_number`, and under what display name?
#[async_trait]
pub trait AccountLookup: Send + Sync {
    async fn resolve(
        &self,
        account_number: &str,
        bank_code: &str,
    ) -> Result<LookupReply, ResolveError>;
}
