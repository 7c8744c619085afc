use std::collections::HashMap;

use config::{Config, ConfigError, Environment};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::constants::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_PORT, INSECURE_DEFAULT_JWT_SECRET};

/// Process configuration, read from the environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub supabase_url: String,
    pub supabase_anon_key: Secret<String>,
    #[serde(default)]
    pub jwt_secret: Option<Secret<String>>,
    pub port: u16,
    pub allowed_origin: String,
}

impl Settings {
    /// Load from the process environment, after reading `.env` if one exists.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_environment(Environment::default())
    }

    /// Load from an explicit set of variables instead of the process environment.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        Self::from_environment(Environment::default().source(Some(vars)))
    }

    fn from_environment(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("port", i64::from(DEFAULT_PORT))?
            .set_default("allowed_origin", DEFAULT_ALLOWED_ORIGIN)?
            // `PORT=` and friends read as unset, so defaults still apply
            .add_source(environment.ignore_empty(true))
            .build()?
            .try_deserialize()
    }

    /// The configured signing secret, or the insecure built-in one.
    pub fn jwt_secret_or_default(&self) -> Secret<String> {
        match self
            .jwt_secret
            .as_ref()
            .filter(|secret| !secret.expose_secret().is_empty())
        {
            Some(secret) => secret.clone(),
            None => {
                tracing::warn!(
                    "JWT_SECRET is not set; signing tokens with the insecure default secret"
                );
                Secret::new(INSECURE_DEFAULT_JWT_SECRET.to_owned())
            }
        }
    }
}
