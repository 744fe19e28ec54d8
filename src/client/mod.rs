//! HTTP client for a ZIP→county lookup service.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The service is expected to answer
//! `GET {base}/zip/{zip}` with `{"zip": "95814", "county": "Sacramento"}`.

mod async_wrapper;
pub use async_wrapper::{AsyncCountyLookupClient, AsyncCountyLookupClientImpl};

use crate::config::Config;
use crate::domain::ZipCode;
use crate::error::{LookupError, LookupResult};
use crate::models::CountyLookup;
use std::sync::Arc;
use std::time::Duration;

/// Header carrying the optional API key.
const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the county lookup service.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct CountyLookupClient {
    /// Base URL of the lookup service
    base_url: String,

    /// API key, sent only when configured
    api_key: Option<String>,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl CountyLookupClient {
    /// Create a client from configuration.
    ///
    /// Returns `None` when no lookup URL is configured.
    pub fn from_config(config: &Config) -> Option<Self> {
        let base_url = config.county_lookup_url.clone()?;
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Some(Self {
            base_url,
            api_key: config.county_lookup_api_key.clone(),
            agent: Arc::new(agent),
        })
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Resolve a ZIP code to its county.
    ///
    /// # Errors
    ///
    /// - `LookupError::NotFound` when the service answers 404
    /// - `LookupError::Network` on transport failures, other statuses, or a
    ///   response body that is not a county record for the requested ZIP
    pub fn lookup_county(&self, zip: &ZipCode) -> LookupResult<CountyLookup> {
        let url = self.build_url(&format!("/zip/{}", urlencoding::encode(zip.as_str())));
        tracing::debug!("GET {}", url);

        let mut request = self.agent.get(&url).set("Accept", "application/json");
        if let Some(key) = &self.api_key {
            request = request.set(API_KEY_HEADER, key);
        }

        let response = request.call().map_err(|e| Self::map_error(zip, e))?;
        let body = response
            .into_string()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let lookup: CountyLookup = serde_json::from_str(&body)
            .map_err(|e| LookupError::Network(format!("Malformed county response: {}", e)))?;

        if lookup.zip != *zip {
            return Err(LookupError::Network(format!(
                "Malformed county response: asked for ZIP {}, got {}",
                zip, lookup.zip
            )));
        }

        tracing::debug!("ZIP {} resolved to {:?}", zip, lookup.county);
        Ok(lookup)
    }

    /// Map a ureq error to a LookupError.
    fn map_error(zip: &ZipCode, error: ureq::Error) -> LookupError {
        match error {
            ureq::Error::Status(404, _) => LookupError::NotFound(zip.to_string()),
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());
                LookupError::Network(format!("HTTP {}: {}", code, message))
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    LookupError::Network("Connection failed".to_string())
                } else {
                    LookupError::Network(transport.to_string())
                }
            }
        }
    }
}
