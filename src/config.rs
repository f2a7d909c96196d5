use serde::{Deserialize, Serialize};

/// Environment variable holding the upstream bearer secret. The secret never
/// lives in the config file.
pub const PAYSTACK_SECRET_ENV: &str = "PAYSTACK_SECRET_KEY";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub resolver: ResolverConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub log_level: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ResolverConfig {
    /// Candidate bank codes probed during resolution, fixed at deploy time.
    #[serde(default = "default_bank_codes")]
    pub bank_codes: Vec<String>,
    /// Per-lookup timeout; a slow candidate does not hold up its siblings
    /// beyond this.
    #[serde(default = "default_lookup_timeout_secs")]
    pub lookup_timeout_secs: u64,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_bank_codes() -> Vec<String> {
    ["058", "011", "033", "057", "044", "070", "214", "035", "232"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_lookup_timeout_secs() -> u64 {
    7
}

fn default_api_base_url() -> String {
    "https://api.paystack.co".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                port: 8080,
                log_level: "info".to_string(),
            },
            resolver: ResolverConfig {
                bank_codes: default_bank_codes(),
                lookup_timeout_secs: default_lookup_timeout_secs(),
                api_base_url: default_api_base_url(),
            },
        }
    }
}

impl AppConfig {
    pub fn load_or_default(path: &str) -> Self {
        if std::path::Path::new(path).exists() {
            match std::fs::read_to_string(path) {
                Ok(s) => match toml::from_str(&s) {
                    Ok(c) => {
                        println!("Config loaded from {}", path);
                        c
                    }
                    Err(e) => {
                        eprintln!("Error parsing config: {}. Using Defaults.", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    eprintln!("Error reading config: {}. Using Defaults.", e);
                    Self::default()
                }
            }
        } else {
            println!("Config file not found at '{}'. Creating default.", path);
            let config = Self::default();
            if let Ok(s) = toml::to_string_pretty(&config) {
                let _ = std::fs::write(path, s);
            }
            config
        }
    }
}

/// Read the upstream secret from the environment. Empty or whitespace-only
/// values count as absent.
pub fn secret_from_env() -> Option<String> {
    std::env::var(PAYSTACK_SECRET_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_deploy_time_candidates() {
        let config = AppConfig::default();
        assert_eq!(config.resolver.bank_codes.len(), 9);
        assert_eq!(config.resolver.bank_codes[0], "058");
        assert_eq!(config.resolver.lookup_timeout_secs, 7);
    }

    #[test]
    fn test_partial_config_fills_in_resolver_defaults() {
        let parsed: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9100
            log_level = "debug"

            [resolver]
            bank_codes = ["058", "011"]
            "#,
        )
        .unwrap();
        assert_eq!(parsed.server.port, 9100);
        assert_eq!(parsed.resolver.bank_codes, vec!["058", "011"]);
        assert_eq!(parsed.resolver.lookup_timeout_secs, 7);
        assert_eq!(parsed.resolver.api_base_url, "https://api.paystack.co");
    }

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config = AppConfig::default();
        let s = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&s).unwrap();
        assert_eq!(parsed.resolver.bank_codes, config.resolver.bank_codes);
        assert_eq!(parsed.server.port, config.server.port);
    }
}
