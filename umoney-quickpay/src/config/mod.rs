use anyhow::{anyhow, Result};
use dotenvy::dotenv;
use secrecy::Secret;
use serde::Deserialize;
use std::env;

/// Default separator for the canonical notification string.
pub const DEFAULT_SEPARATOR: &str = "&";

/// Hash algorithm applied to the canonical notification string.
///
/// YooMoney signs quickpay notifications with SHA-1; the other variants
/// exist for the configurable flavour of the upstream SDK.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SignatureAlgorithm {
    #[default]
    Sha1,
    Sha256,
    Md5,
}

impl std::str::FromStr for SignatureAlgorithm {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_ascii_lowercase().as_str() {
            "sha1" => Ok(SignatureAlgorithm::Sha1),
            "sha256" => Ok(SignatureAlgorithm::Sha256),
            "md5" => Ok(SignatureAlgorithm::Md5),
            other => Err(anyhow!("Unsupported signature algorithm: {}", other)),
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct QuickPayConfig {
    /// Notification secret issued in the YooMoney merchant settings.
    pub secret_key: Secret<String>,
    #[serde(default)]
    pub algorithm: SignatureAlgorithm,
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

impl QuickPayConfig {
    /// Config with the provider defaults: SHA-1 and `&`.
    pub fn new(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: Secret::new(secret_key.into()),
            algorithm: SignatureAlgorithm::default(),
            separator: default_separator(),
        }
    }

    pub fn with_algorithm(mut self, algorithm: SignatureAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let secret_key =
            env::var("UMONEY_SECRET_KEY").map_err(|_| anyhow!("UMONEY_SECRET_KEY must be set"))?;

        let algorithm = match env::var("UMONEY_SIGNATURE_ALGORITHM") {
            Ok(raw) => raw.parse()?,
            Err(_) => SignatureAlgorithm::default(),
        };

        let separator =
            env::var("UMONEY_SIGNATURE_SEPARATOR").unwrap_or_else(|_| default_separator());

        Ok(Self {
            secret_key: Secret::new(secret_key),
            algorithm,
            separator,
        })
    }
}
