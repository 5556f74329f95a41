//! Provider registry
//!
//! Maps provider names to concrete implementations.

pub mod mock;
pub mod pollinations;

use crate::config::VerdantConfig;
use crate::provider::ImageProvider;
use verdant_core::{Result, VerdantError};

/// Create a provider by name with configuration
pub fn create_provider(name: &str, config: &VerdantConfig) -> Result<Box<dyn ImageProvider>> {
    match name {
        "mock" => Ok(Box::new(mock::MockProvider::new())),
        "pollinations" => Ok(Box::new(pollinations::PollinationsProvider::from_config(
            config,
        )?)),
        _ => Err(VerdantError::ProviderError(format!(
            "Unknown provider '{}'. Available: pollinations, mock",
            name
        ))),
    }
}

/// List all available provider names
pub fn available_providers() -> Vec<&'static str> {
    vec!["pollinations", "mock"]
}
