use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use account_resolver::cli::{Cli, Commands};
use account_resolver::config::{self, AppConfig};
use account_resolver::error::ResolveError;
use account_resolver::resolver::AccountResolver;
use account_resolver::server::ResolverServer;
use account_resolver::upstream::paystack::PaystackClient;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let app_config = AppConfig::load_or_default(&cli.config);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(app_config.server.log_level.clone())),
        )
        .init();

    let outcome = match cli.command {
        Some(Commands::Resolve { account_number }) => {
            run_resolve(&app_config, &account_number).await
        }
        Some(Commands::Serve { port }) => run_serve(&app_config, port).await,
        None => run_serve(&app_config, None).await,
    };

    if let Err(e) = outcome {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

/// Secret and candidate list are validated here, once, before any request is
/// served. A bad deployment fails at startup instead of per call.
fn build_resolver(app_config: &AppConfig) -> Result<AccountResolver, ResolveError> {
    let secret = config::secret_from_env().ok_or_else(|| {
        ResolveError::Configuration(format!(
            "{} is not set in environment variables",
            config::PAYSTACK_SECRET_ENV
        ))
    })?;

    let client = PaystackClient::new(
        secret,
        app_config.resolver.api_base_url.clone(),
        Duration::from_secs(app_config.resolver.lookup_timeout_secs),
    )?;

    AccountResolver::new(Arc::new(client), app_config.resolver.bank_codes.clone())
}

async fn run_serve(app_config: &AppConfig, port: Option<u16>) -> Result<(), ResolveError> {
    let resolver = build_resolver(app_config)?;
    let port = port.unwrap_or(app_config.server.port);
    ResolverServer::new(Arc::new(resolver), port).start().await
}

async fn run_resolve(app_config: &AppConfig, account_number: &str) -> Result<(), ResolveError> {
    let resolver = build_resolver(app_config)?;
    let resolved = resolver.resolve(account_number).await?;
    println!("{} ({})", resolved.account_name, resolved.bank_code);
    Ok(())
}
