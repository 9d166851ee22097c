use crate::geocoding::{naver, RetryPolicy};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Runtime settings for the API client and the geocoding stack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the activity REST API
    pub api_base_url: String,
    /// Timeout applied to every API request
    pub request_timeout: Duration,
    /// Bearer token for authenticated endpoints (my reservations)
    pub access_token: Option<String>,
    pub geocode_endpoint: String,
    pub map_client_id: Option<String>,
    pub map_client_secret: Option<String>,
    pub readiness_poll_interval: Duration,
    pub readiness_deadline: Duration,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8080".to_string(),
            request_timeout: Duration::from_secs(10),
            access_token: None,
            geocode_endpoint: naver::DEFAULT_ENDPOINT.to_string(),
            map_client_id: None,
            map_client_secret: None,
            readiness_poll_interval: Duration::from_millis(100),
            readiness_deadline: Duration::from_secs(10),
            retry_attempts: 3,
            retry_delay: Duration::from_millis(1000),
        }
    }
}

impl AppConfig {
    /// Defaults overlaid with whatever is set in the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(url) = non_empty("ACTIVITY_API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Some(endpoint) = non_empty("NAVER_GEOCODE_ENDPOINT") {
            config.geocode_endpoint = endpoint;
        }
        config.access_token = non_empty("ACTIVITY_API_TOKEN");
        config.map_client_id = non_empty("NAVER_MAP_CLIENT_ID");
        config.map_client_secret = non_empty("NAVER_MAP_CLIENT_SECRET");
        config
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry_attempts, self.retry_delay)
    }

    /// Both halves of the map credentials, if configured
    pub fn map_credentials(&self) -> Option<(&str, &str)> {
        match (&self.map_client_id, &self.map_client_secret) {
            (Some(id), Some(secret)) => Some((id.as_str(), secret.as_str())),
            _ => None,
        }
    }
}
