//! Runtime configuration.
//!
//! Defaults are derived from the page location; any value can be overridden
//! per browser through localStorage (handy when the API runs elsewhere).

use crate::shared::list_utils::PageSize;
use std::sync::OnceLock;

pub const API_PORT: u16 = 3000;

const KEY_API_BASE: &str = "erp.api_base";
const KEY_LOG_LEVEL: &str = "erp.log_level";
const KEY_PAGE_SIZE: &str = "erp.page_size";

pub const DEFAULT_PAGE_SIZE: PageSize = PageSize::Rows(25);

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base: String,
    pub log_level: log::Level,
    pub default_page_size: PageSize,
}

impl AppConfig {
    pub fn load() -> Self {
        let api_base = storage_get(KEY_API_BASE)
            .map(|v| v.trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(location_api_base);
        let log_level = storage_get(KEY_LOG_LEVEL)
            .and_then(|v| parse_log_level(&v))
            .unwrap_or(log::Level::Debug);
        let default_page_size = storage_get(KEY_PAGE_SIZE)
            .and_then(|v| PageSize::parse(&v))
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self {
            api_base,
            log_level,
            default_page_size,
        }
    }

    /// Fixes the configuration for the rest of the session; the first call wins.
    pub fn install(config: AppConfig) -> &'static AppConfig {
        CONFIG.get_or_init(|| config)
    }

    /// Installed configuration, loaded on first use when nothing was installed.
    pub fn current() -> &'static AppConfig {
        CONFIG.get_or_init(Self::load)
    }
}

/// `{protocol}//{hostname}:3000` of the current page.
fn location_api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

fn storage_get(key: &str) -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()
        .flatten()?
        .get_item(key)
        .ok()
        .flatten()
}

pub fn parse_log_level(value: &str) -> Option<log::Level> {
    match value.trim().to_ascii_lowercase().as_str() {
        "error" => Some(log::Level::Error),
        "warn" => Some(log::Level::Warn),
        "info" => Some(log::Level::Info),
        "debug" => Some(log::Level::Debug),
        "trace" => Some(log::Level::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level(" WARN "), Some(log::Level::Warn));
        assert_eq!(parse_log_level("verbose"), None);
    }
}
