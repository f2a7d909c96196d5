use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::error::ResolveError;
use crate::upstream::AccountLookup;

/// A successful resolution: the bank that recognized the account and the
/// holder's display name it is registered under.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub bank_code: String,
    pub account_name: String,
}

/// Resolves a 10-digit account number by probing every candidate bank
/// concurrently and taking the first positive reply in candidate order.
pub struct AccountResolver {
    lookup: Arc<dyn AccountLookup>,
    bank_codes: Vec<String>,
}

impl AccountResolver {
    pub fn new(
        lookup: Arc<dyn AccountLookup>,
        bank_codes: Vec<String>,
    ) -> Result<Self, ResolveError> {
        if bank_codes.is_empty() {
            return Err(ResolveError::Configuration(
                "candidate bank list is empty".to_string(),
            ));
        }
        Ok(Self { lookup, bank_codes })
    }

    pub fn candidate_count(&self) -> usize {
        self.bank_codes.len()
    }

    pub async fn resolve(&self, account_number: &str) -> Result<Resolved, ResolveError> {
        validate_account_number(account_number)?;

        info!(
            "Verifying {} against {} banks...",
            account_number,
            self.bank_codes.len()
        );

        let lookups = self.bank_codes.iter().map(|bank_code| {
            let lookup = self.lookup.clone();
            async move {
                let outcome = lookup.resolve(account_number, bank_code).await;
                (bank_code.as_str(), outcome)
            }
        });

        // Await-all barrier: a settled-but-negative reply must not be mistaken
        // for the answer, so every candidate gets to finish before selection.
        let settled = join_all(lookups).await;

        for (bank_code, outcome) in settled {
            match outcome {
                Ok(reply) if reply.status => match reply.data {
                    Some(data) => {
                        info!(
                            "Resolved {} via bank {}: \"{}\"",
                            account_number, bank_code, data.account_name
                        );
                        return Ok(Resolved {
                            bank_code: bank_code.to_string(),
                            account_name: data.account_name,
                        });
                    }
                    None => debug!("Bank {} matched but sent no account name", bank_code),
                },
                Ok(_) => debug!("Bank {}: no match", bank_code),
                Err(e) => debug!("Bank {}: lookup failed: {}", bank_code, e),
            }
        }

        warn!("Could not resolve {} with any candidate bank", account_number);
        Err(ResolveError::NotFound)
    }
}

/// Exactly 10 ASCII digits; anything else is rejected before any network call.
fn validate_account_number(account_number: &str) -> Result<(), ResolveError> {
    if account_number.len() != 10 || !account_number.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ResolveError::InvalidInput(account_number.to_string()));
    }
    Ok(())
}
