//! Application Context
//!
//! Startup resources shared via Leptos Context API.

use leptos::prelude::*;
use rolling_logger::RollingBuffer;

use crate::config::CatalogConfig;

/// App-wide resources provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Parsed catalog configuration
    pub config: StoredValue<CatalogConfig>,
    /// Recent log lines
    pub log: StoredValue<RollingBuffer>,
}

impl AppContext {
    pub fn new(config: CatalogConfig, log: RollingBuffer) -> Self {
        Self {
            config: StoredValue::new(config),
            log: StoredValue::new(log),
        }
    }

    /// Read part of the config
    pub fn with_config<U>(&self, f: impl FnOnce(&CatalogConfig) -> U) -> U {
        self.config.with_value(f)
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
