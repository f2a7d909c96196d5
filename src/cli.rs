use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "account-resolver")]
#[command(about = "Bank account verification service", long_about = None)]
pub struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "resolver.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP verification server
    Serve {
        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
    /// Resolve a single account number and print the result
    Resolve {
        account_number: String,
    },
}
