//! Pollinations image generation provider
//!
//! Fetches generated photos from the pollinations.ai prompt endpoint with
//! one synchronous GET per image. The batch layer owns pacing and failure
//! policy, so there are no retries here; every outcome resolves to a
//! value.

use crate::config::VerdantConfig;
use crate::provider::{FetchRequest, ImageProvider};
use std::time::Duration;
use url::Url;
use verdant_core::{Result, VerdantError};

const DEFAULT_API_URL: &str = "https://image.pollinations.ai";
// The endpoint rejects requests without a browser-looking agent
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
const DEFAULT_TIMEOUT_SECS: u64 = 45;

/// Provider for the pollinations.ai image generation endpoint
#[derive(Debug)]
pub struct PollinationsProvider {
    base_url: Url,
    user_agent: String,
    timeout_secs: u64,
    accept_invalid_certs: bool,
}

impl PollinationsProvider {
    /// Create a provider from config, falling back to the module defaults
    pub fn from_config(config: &VerdantConfig) -> Result<Self> {
        let raw_url = config.endpoint.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
        let base_url = Url::parse(raw_url).map_err(|e| {
            VerdantError::ConfigError(format!("Invalid api_url '{}': {}", raw_url, e))
        })?;

        Ok(Self {
            base_url,
            user_agent: config
                .endpoint
                .user_agent
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            timeout_secs: config.endpoint.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: config.endpoint.accept_invalid_certs,
        })
    }

    /// Build the request URL with the prompt percent-encoded into the path
    /// and width/height/seed as query parameters
    fn request_url(&self, request: &FetchRequest) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                VerdantError::ConfigError(format!("api_url cannot be a base: {}", self.base_url))
            })?
            .pop_if_empty()
            .push("prompt")
            .push(&request.prompt);
        url.query_pairs_mut()
            .append_pair("width", &request.width.to_string())
            .append_pair("height", &request.height.to_string())
            .append_pair("seed", &request.seed.to_string());
        Ok(url)
    }

    fn build_agent(&self) -> ureq::Agent {
        let mut builder = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(self.timeout_secs)))
            .http_status_as_error(false)
            .user_agent(self.user_agent.as_str());

        if self.accept_invalid_certs {
            builder = builder.tls_config(
                ureq::tls::TlsConfig::builder()
                    .disable_verification(true)
                    .build(),
            );
        }

        builder.build().into()
    }
}

impl ImageProvider for PollinationsProvider {
    fn name(&self) -> &str {
        "pollinations"
    }

    fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>> {
        let url = self.request_url(request)?;
        let agent = self.build_agent();

        let response = agent.get(url.as_str()).call().map_err(|e| match e {
            ureq::Error::Timeout(_) => VerdantError::Timeout(self.timeout_secs),
            ureq::Error::StatusCode(code) => VerdantError::Status(code),
            other => VerdantError::NetworkError(other.to_string()),
        })?;

        let status = response.status().as_u16();
        if status != 200 {
            return Err(VerdantError::Status(status));
        }

        let mut reader = response.into_body().into_reader();
        let mut bytes = Vec::new();
        std::io::Read::read_to_end(&mut reader, &mut bytes)
            .map_err(|e| VerdantError::NetworkError(format!("Failed to read image data: {}", e)))?;
        Ok(bytes)
    }
}
