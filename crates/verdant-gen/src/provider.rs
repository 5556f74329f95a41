//! Image provider trait and request types

use verdant_core::Result;

/// A request for one generated image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Full generation prompt
    pub prompt: String,
    /// Target pixel width
    pub width: u32,
    /// Target pixel height
    pub height: u32,
    /// Distinguishing seed so repeated prompts do not collide on any
    /// server-side caching
    pub seed: u64,
}

/// Trait implemented by each image source (pollinations, mock).
///
/// `fetch` resolves to raw image bytes on success and an error value for
/// any transport failure, timeout or non-success status; it never panics.
/// Retry policy, if any, belongs to the caller.
pub trait ImageProvider: Send + std::fmt::Debug {
    /// Provider name (e.g. "pollinations", "mock")
    fn name(&self) -> &str;

    /// Fetch one image synchronously (blocks until complete)
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<u8>>;
}
