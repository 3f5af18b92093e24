use thiserror::Error;

pub const WEB3_PROVIDER_URL: &str = "WEB3_PROVIDER_URL";
pub const SOLANA_PROVIDER_URL: &str = "SOLANA_PROVIDER_URL";
pub const DEFAULT_SOLANA_PROVIDER_URL: &str = "https://api.devnet.solana.com";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set in environment or .env file")]
    MissingVar(&'static str),
    #[error("{var} is not a usable RPC url: {reason}")]
    InvalidUrl { var: &'static str, reason: String },
}

/// Endpoints read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub web3_provider_url: String,
    pub solana_provider_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());

        Ok(Self {
            web3_provider_url: get(WEB3_PROVIDER_URL)
                .ok_or(ConfigError::MissingVar(WEB3_PROVIDER_URL))?,
            solana_provider_url: get(SOLANA_PROVIDER_URL)
                .unwrap_or_else(|| DEFAULT_SOLANA_PROVIDER_URL.to_string()),
        })
    }
}
