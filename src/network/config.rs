use web_sys::Document;

use crate::constants::SEL_API_BASE_META;

/// API route configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Same origin: endpoint paths are used as relative URLs, which is how
    /// the server-rendered storefront serves the wasm bundle.
    fn default() -> Self {
        Self {
            base_url: String::new(),
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    /// captured at build time.
    pub fn new() -> Result<Self, &'static str> {
        if let Some(url) = option_env!("API_BASE_URL") {
            Ok(Self::from_url(url))
        } else {
            Err("API_BASE_URL environment variable is not set")
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolution order: build-time `API_BASE_URL`, then
    /// `<meta name="api-base-url" content="...">`, then same origin.
    pub fn resolve(document: &Document) -> Self {
        if let Ok(config) = Self::new() {
            return config;
        }
        document
            .query_selector(SEL_API_BASE_META)
            .ok()
            .flatten()
            .and_then(|meta| meta.get_attribute("content"))
            .filter(|content| !content.trim().is_empty())
            .map(|content| Self::from_url(&content))
            .unwrap_or_default()
    }

    pub fn is_same_origin(&self) -> bool {
        self.base_url.is_empty()
    }

    /// Get a full URL for an endpoint path such as `/cart/add`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
