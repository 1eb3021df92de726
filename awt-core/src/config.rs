//! API host configuration.

/// Host used when nothing else is configured.
pub const DEFAULT_API_HOST: &str = "http://localhost:8000";

/// Where the report API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Host baked in at build time through `AWT_API_HOST`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("AWT_API_HOST").unwrap_or(DEFAULT_API_HOST))
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_HOST)
    }
}
