//! Application state shared across all request handlers.

use std::sync::Arc;

use crate::bartender::Bartender;
use crate::config::BartenderConfig;
use crate::error::BartenderResult;

/// Shared application state.
pub struct AppState {
    /// Validated service configuration.
    pub config: BartenderConfig,
    /// Question answering pipeline.
    pub bartender: Bartender,
}

impl AppState {
    /// Create the application state with live recipe and chat clients.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid or a client cannot be created.
    pub fn new(config: BartenderConfig) -> BartenderResult<Arc<Self>> {
        config.validate()?;
        let bartender = Bartender::from_config(&config)?;
        Ok(Self::with_bartender(config, bartender))
    }

    /// Create the application state around an existing bartender.
    #[must_use]
    pub fn with_bartender(config: BartenderConfig, bartender: Bartender) -> Arc<Self> {
        Arc::new(Self { config, bartender })
    }
}
