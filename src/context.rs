//! Application Context
//!
//! Shared values provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::{FormLabels, UiConfig};

/// Read-only UI settings provided via context
#[derive(Clone)]
pub struct AppContext {
    config: Arc<UiConfig>,
}

impl AppContext {
    pub fn new(config: UiConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    pub fn labels(&self) -> &FormLabels {
        &self.config.labels
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
