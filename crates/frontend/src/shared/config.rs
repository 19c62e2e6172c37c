//! Application configuration provided through Leptos context.

use leptos::prelude::*;

use super::api_utils::api_base;

#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// e.g. "http://localhost:3000"
    pub api_base: String,
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Lifetime of a toast before it is dismissed automatically
    pub notification_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            default_page_size: 10,
            page_size_options: vec![10, 25, 50, 100],
            notification_timeout_ms: 4000,
        }
    }
}

impl AppConfig {
    /// Configuration of the running browser app.
    pub fn from_env() -> Self {
        Self {
            api_base: api_base(),
            ..Self::default()
        }
    }
}

/// Config from context, defaults when none was provided.
pub fn use_config() -> AppConfig {
    use_context::<AppConfig>().unwrap_or_default()
}
