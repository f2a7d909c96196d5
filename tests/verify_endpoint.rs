use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use account_resolver::error::ResolveError;
use account_resolver::resolver::AccountResolver;
use account_resolver::server::ResolverServer;
use account_resolver::upstream::{AccountLookup, LookupData, LookupReply};

/// In-process stand-in for the settlement network: a fixed map of
/// bank code -> account name, counting every lookup it receives.
struct ScriptedLookup {
    matches: HashMap<String, String>,
    calls: AtomicUsize,
}

impl ScriptedLookup {
    fn new(matches: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            matches: matches
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl AccountLookup for ScriptedLookup {
    async fn resolve(
        &self,
        _account_number: &str,
        bank_code: &str,
    ) -> Result<LookupReply, ResolveError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.matches.get(bank_code) {
            Some(name) => Ok(LookupReply {
                status: true,
                data: Some(LookupData {
                    account_name: name.clone(),
                }),
            }),
            None => Ok(LookupReply {
                status: false,
                data: None,
            }),
        }
    }
}

async fn spawn_server(lookup: Arc<ScriptedLookup>, codes: &[&str]) -> SocketAddr {
    let resolver =
        AccountResolver::new(lookup, codes.iter().map(|c| c.to_string()).collect()).unwrap();
    let app = ResolverServer::new(Arc::new(resolver), 0).router();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn post_verify(addr: SocketAddr, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("http://{}/verify", addr))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    let body: Value = response.json().await.unwrap();
    (status, body)
}

#[tokio::test]
async fn test_verify_returns_resolved_account_name() {
    let lookup = ScriptedLookup::new(&[("011", "JOHN DOE")]);
    let addr = spawn_server(lookup.clone(), &["058", "011"]).await;

    let (status, body) = post_verify(addr, json!({ "accountNumber": "0123456789" })).await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["accountName"], json!("JOHN DOE"));
    assert!(body.get("message").is_none());
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_malformed_account_number_is_rejected_before_any_lookup() {
    let lookup = ScriptedLookup::new(&[("011", "JOHN DOE")]);
    let addr = spawn_server(lookup.clone(), &["058", "011"]).await;

    let (status, body) = post_verify(addr, json!({ "accountNumber": "012345" })).await;

    assert_eq!(status, 400);
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["message"],
        json!("Invalid account number. It must be 10 digits.")
    );
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unknown_account_returns_not_found() {
    let lookup = ScriptedLookup::new(&[]);
    let addr = spawn_server(lookup.clone(), &["058", "011", "033"]).await;

    let (status, body) = post_verify(addr, json!({ "accountNumber": "9999999999" })).await;

    assert_eq!(status, 404);
    assert_eq!(body["success"], json!(false));
    assert_eq!(
        body["message"],
        json!("Could not verify account. Please check the number.")
    );
    assert_eq!(lookup.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_health_endpoint_reports_service() {
    let lookup = ScriptedLookup::new(&[]);
    let addr = spawn_server(lookup, &["058"]).await;

    let response = reqwest::get(format!("http://{}/health", addr)).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["service"], json!("account-resolver"));
}
