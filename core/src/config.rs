//! Client configuration.

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

pub const BASE_URL_VAR: &str = "RH_API_URL";
pub const LOGIN_ROUTE_VAR: &str = "RH_LOGIN_ROUTE";

/// Where the API lives and where to send the user when a call comes back 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, e.g. `http://localhost:8080/api`. Stored without trailing `/`.
    pub base_url: String,

    /// Route handed to the login redirect handler on 401.
    pub login_route: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: normalize_base_url(base_url.into())?,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        })
    }

    /// Load `.env` if present, then read `RH_API_URL` / `RH_LOGIN_ROUTE`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source; unset variables fall back to
    /// the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(base_url)?;
        if let Some(route) = lookup(LOGIN_ROUTE_VAR).filter(|r| !r.trim().is_empty()) {
            config.login_route = route;
        }
        Ok(config)
    }

    pub fn with_login_route(mut self, route: impl Into<String>) -> Self {
        self.login_route = route.into();
        self
    }

    /// Absolute URL for an endpoint path such as `/employes/3`.
    pub fn url(&self, endpoint: &str) -> String {
        if endpoint.starts_with('/') {
            format!("{}{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
        }
    }
}

fn normalize_base_url(raw: String) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(ConfigError::InvalidScheme(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}
