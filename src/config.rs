//! Console Configuration
//!
//! Both binaries read their settings from the environment:
//! - `SEARCH_SERVICE_URL`: base URL of the indexing/search service.
//! - `CONSOLE_BIND`: listen address of the web console.

use anyhow::{Context, Result};
use std::net::SocketAddr;

pub const DEFAULT_SERVICE_URL: &str = "http://localhost:8080";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub service_url: String,
    pub bind_addr: SocketAddr,
}

impl ConsoleConfig {
    pub fn from_env() -> Result<Self> {
        let service_url = std::env::var("SEARCH_SERVICE_URL").ok();
        let bind_addr = std::env::var("CONSOLE_BIND").ok();
        Self::from_values(service_url.as_deref(), bind_addr.as_deref())
    }

    pub fn from_values(service_url: Option<&str>, bind_addr: Option<&str>) -> Result<Self> {
        let service_url = resolve_service_url(DEFAULT_SERVICE_URL, service_url);
        let bind_addr = bind_addr
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()
            .with_context(|| format!("Invalid bind address: {:?}", bind_addr))?;

        Ok(Self {
            service_url,
            bind_addr,
        })
    }

    /// Applies an operator-supplied service URL on top of the configured one.
    pub fn with_service_override(mut self, override_url: Option<&str>) -> Self {
        self.service_url = resolve_service_url(&self.service_url, override_url);
        self
    }
}

/// Normalizes a service URL.
///
/// A blank override falls back to `default`, a missing scheme becomes
/// `http://`, and trailing slashes are dropped.
pub fn resolve_service_url(default: &str, override_url: Option<&str>) -> String {
    let candidate = override_url.unwrap_or(default);
    let mut trimmed = candidate.trim();
    if trimmed.is_empty() {
        trimmed = default.trim();
    }

    let normalized = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    normalized.trim_end_matches('/').to_string()
}
