//! Configuration for the bartender agent.
//!
//! Values come from the process environment (after loading an optional `.env`
//! file) and are validated once at startup.

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::error::{BartenderError, BartenderResult};

/// Default `TheCocktailDB` API base URL.
pub const DEFAULT_COCKTAILDB_URL: &str = "https://www.thecocktaildb.com/api/json/v1/1";
/// Default chat completion API base URL.
pub const DEFAULT_CHAT_URL: &str = "https://api.openai.com/v1";
/// Default chat model.
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
/// Default directory holding the landing page and its assets.
pub const DEFAULT_STATIC_DIR: &str = "templates";
/// Default server port.
pub const DEFAULT_PORT: u16 = 8000;

/// Primary environment variable for the chat API key.
const API_KEY_ENV: &str = "BARTENDER_API_KEY";
/// Legacy environment variable for the chat API key.
const LEGACY_API_KEY_ENV: &str = "API_KEY";
const CHAT_URL_ENV: &str = "BARTENDER_CHAT_URL";
const MODEL_ENV: &str = "BARTENDER_MODEL";
const COCKTAILDB_URL_ENV: &str = "BARTENDER_COCKTAILDB_URL";
const STATIC_DIR_ENV: &str = "BARTENDER_STATIC_DIR";
const PORT_ENV: &str = "BARTENDER_PORT";

/// Configuration for the bartender service.
#[derive(Clone)]
pub struct BartenderConfig {
    /// API key for the chat completion service.
    pub api_key: String,
    /// Base URL of the chat completion API.
    pub chat_base_url: String,
    /// Chat model identifier.
    pub model: String,
    /// Base URL of the cocktail recipe API.
    pub cocktaildb_base_url: String,
    /// Directory served as the landing page and static assets.
    pub static_dir: PathBuf,
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl Default for BartenderConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            chat_base_url: DEFAULT_CHAT_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            cocktaildb_base_url: DEFAULT_COCKTAILDB_URL.to_string(),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            port: DEFAULT_PORT,
        }
    }
}

impl fmt::Debug for BartenderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BartenderConfig")
            .field("api_key", &"<redacted>")
            .field("chat_base_url", &self.chat_base_url)
            .field("model", &self.model)
            .field("cocktaildb_base_url", &self.cocktaildb_base_url)
            .field("static_dir", &self.static_dir)
            .field("port", &self.port)
            .finish()
    }
}

impl BartenderConfig {
    /// Create a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and validate the configuration from the environment.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    /// Returns an error if the API key is missing or a value is invalid.
    pub fn from_env() -> BartenderResult<Self> {
        if let Err(e) = dotenvy::dotenv() {
            tracing::debug!("No .env file loaded: {e}");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build and validate the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns an error if the API key is missing or a value is invalid.
    pub fn from_lookup<F>(lookup: F) -> BartenderResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let api_key = lookup(API_KEY_ENV)
            .or_else(|| lookup(LEGACY_API_KEY_ENV))
            .unwrap_or_default();

        let port = match lookup(PORT_ENV) {
            Some(raw) => raw.trim().parse().map_err(|_| {
                BartenderError::Config(format!("{PORT_ENV} is not a valid port: {raw}"))
            })?,
            None => defaults.port,
        };

        let config = Self {
            api_key,
            chat_base_url: lookup(CHAT_URL_ENV).unwrap_or(defaults.chat_base_url),
            model: lookup(MODEL_ENV).unwrap_or(defaults.model),
            cocktaildb_base_url: lookup(COCKTAILDB_URL_ENV)
                .unwrap_or(defaults.cocktaildb_base_url),
            static_dir: lookup(STATIC_DIR_ENV).map_or(defaults.static_dir, PathBuf::from),
            port,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration invariants.
    ///
    /// # Errors
    /// Returns an error if any values are missing or invalid.
    pub fn validate(&self) -> BartenderResult<()> {
        if self.api_key.trim().is_empty() {
            return Err(BartenderError::Config(format!(
                "chat API key is not set (use {API_KEY_ENV} or {LEGACY_API_KEY_ENV})"
            )));
        }

        if self.model.trim().is_empty() {
            return Err(BartenderError::Config("model must not be empty".to_string()));
        }

        Url::parse(&self.chat_base_url)?;
        Url::parse(&self.cocktaildb_base_url)?;

        Ok(())
    }

    /// Set the chat API key.
    #[must_use]
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    /// Set the chat API base URL.
    #[must_use]
    pub fn with_chat_base_url(mut self, url: impl Into<String>) -> Self {
        self.chat_base_url = url.into();
        self
    }



    /// Set the static directory.
    #[must_use]
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }

}
