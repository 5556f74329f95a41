//! Verdant Gen - plant image generation pipeline
//!
//! Provides the provider framework for fetching generated plant photos
//! (the pollinations.ai HTTP endpoint, plus an offline mock), the prompt
//! template, layered configuration, and the batch orchestrator that
//! synchronizes a whole catalog of image-set bundles.

pub mod batch;
pub mod config;
pub mod prompt;
pub mod provider;
pub mod providers;

pub use batch::{sync_catalog, SyncFailure, SyncOptions, SyncReport, INTER_REQUEST_DELAY_MS};
pub use config::{EndpointConfig, GenerationConfig, VerdantConfig};
pub use prompt::PromptTemplate;
pub use provider::{FetchRequest, ImageProvider};
