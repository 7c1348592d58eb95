//! Backend base-URL resolution for the browser and the server renderer.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server renders `<meta name="teplo-api-base">` into the shell from its
//! own configuration. After hydration the client reads that tag back, so one
//! WASM build can talk to any backend. Without the tag the compile-time
//! `TEPLO_API_BASE_URL` is used, then the local default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::net::api::{ApiClient, normalize_base_url};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";
pub const API_BASE_META: &str = "teplo-api-base";

/// Where REST calls go. Provided as Leptos context by `App`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: normalize_base_url(base_url) }
    }

    /// First non-blank of `meta`, the build-time variable, the default.
    pub fn resolve(meta: Option<&str>) -> Self {
        Self::resolve_with(meta, option_env!("TEPLO_API_BASE_URL"))
    }

    fn resolve_with(meta: Option<&str>, build_time: Option<&str>) -> Self {
        let chosen = [meta, build_time]
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.trim().is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL);
        Self::new(chosen)
    }

    /// Read the base URL the server wrote into the document head.
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let meta = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.query_selector(&format!("meta[name=\"{API_BASE_META}\"]")).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            Self::resolve(meta.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::resolve(None)
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::browser(&self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}
