//! Mock provider for offline runs and tests
//!
//! Renders a solid-color JPEG derived from the prompt without any network
//! calls.

use crate::provider::{FetchRequest, ImageProvider};
use verdant_core::{Result, VerdantError};

/// A provider that renders placeholder images locally
#[derive(Debug, Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ImageProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>> {
        // Color derived from the prompt hash so each bundle gets a distinct placeholder
        let hash_val = request
            .prompt
            .bytes()
            .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
        let r = ((hash_val >> 16) & 0xFF) as u8;
        let g = ((hash_val >> 8) & 0xFF) as u8;
        let b = (hash_val & 0xFF) as u8;

        let img = image::RgbImage::from_pixel(request.width, request.height, image::Rgb([r, g, b]));

        let mut bytes = Vec::new();
        let mut cursor = std::io::Cursor::new(&mut bytes);
        img.write_to(&mut cursor, image::ImageFormat::Jpeg)
            .map_err(|e| {
                VerdantError::ProviderError(format!("Failed to encode placeholder JPEG: {}", e))
            })?;
        Ok(bytes)
    }
}
