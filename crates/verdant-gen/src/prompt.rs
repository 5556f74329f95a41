//! Prompt construction for image generation

/// Qualifier text wrapped around the plant name. Tuned for natural-looking
/// photos rather than stylized renders; tweak freely, nothing downstream
/// depends on the wording.
const DEFAULT_PREFIX: &str = "natural realistic photograph of";
const DEFAULT_SUFFIX: &str =
    "houseplant in home setting, natural lighting, authentic indoor plant photography, high quality";

/// Template that turns a plant's display name into a generation prompt.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    pub prefix: String,
    pub suffix: String,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl PromptTemplate {
    /// Render the prompt for a display name. Pure, the name is embedded
    /// verbatim.
    pub fn render(&self, display_name: &str) -> String {
        format!("{} {} {}", self.prefix, display_name, self.suffix)
    }
}
