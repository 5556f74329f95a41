//! Layered configuration system
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variable: `VERDANT_API_URL`
//! 2. Project-local: `.verdant/config.toml`
//! 3. Global: `~/.verdant/config.toml`

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use verdant_core::{Result, VerdantError};

/// Image endpoint configuration.
///
/// Unset fields fall back to the provider module's defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EndpointConfig {
    #[serde(default)]
    pub api_url: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Accept untrusted TLS chains from the endpoint. Stays off unless
    /// explicitly requested here or via `--insecure`.
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

/// Generation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default = "default_provider")]
    pub provider: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            provider: default_provider(),
        }
    }
}

fn default_width() -> u32 {
    1024
}
fn default_height() -> u32 {
    1024
}
fn default_provider() -> String {
    "pollinations".to_string()
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerdantConfigFile {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Resolved configuration with environment variable overrides applied
#[derive(Debug, Clone, Default)]
pub struct VerdantConfig {
    pub endpoint: EndpointConfig,
    pub generation: GenerationConfig,
}

impl VerdantConfig {
    /// Load config with layered precedence: global < project < env vars
    pub fn load() -> Result<Self> {
        let mut config = VerdantConfigFile::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        let local_path = PathBuf::from(".verdant/config.toml");
        if local_path.exists() {
            let local = Self::load_file(&local_path)?;
            Self::merge_into(&mut config, local);
        }

        Self::apply_env_overrides(&mut config);

        Ok(VerdantConfig {
            endpoint: config.endpoint,
            generation: config.generation,
        })
    }

    /// Load config from a specific file path only (for testing and the
    /// `--config` flag)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        Self::apply_env_overrides(&mut config);
        Ok(VerdantConfig {
            endpoint: config.endpoint,
            generation: config.generation,
        })
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".verdant").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<VerdantConfigFile> {
        let content = std::fs::read_to_string(path)?;
        let config: VerdantConfigFile = toml::from_str(&content).map_err(|e| {
            VerdantError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    fn merge_into(base: &mut VerdantConfigFile, overlay: VerdantConfigFile) {
        if overlay.endpoint.api_url.is_some() {
            base.endpoint.api_url = overlay.endpoint.api_url;
        }
        if overlay.endpoint.user_agent.is_some() {
            base.endpoint.user_agent = overlay.endpoint.user_agent;
        }
        if overlay.endpoint.timeout_secs.is_some() {
            base.endpoint.timeout_secs = overlay.endpoint.timeout_secs;
        }
        base.endpoint.accept_invalid_certs = overlay.endpoint.accept_invalid_certs;

        if overlay.generation.width != default_width() {
            base.generation.width = overlay.generation.width;
        }
        if overlay.generation.height != default_height() {
            base.generation.height = overlay.generation.height;
        }
        if overlay.generation.provider != default_provider() {
            base.generation.provider = overlay.generation.provider;
        }
    }

    fn apply_env_overrides(config: &mut VerdantConfigFile) {
        if let Ok(url) = std::env::var("VERDANT_API_URL") {
            config.endpoint.api_url = Some(url);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_config(content: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("verdant_config_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_defaults_keep_tls_verification_on() {
        let config = VerdantConfig::default();
        assert!(!config.endpoint.accept_invalid_certs);
        assert_eq!(config.generation.width, 1024);
        assert_eq!(config.generation.height, 1024);
        assert_eq!(config.generation.provider, "pollinations");
    }

    #[test]
    fn test_load_config_from_file() {
        std::env::remove_var("VERDANT_API_URL");

        let config_str = r#"
[endpoint]
api_url = "https://images.example.com"
user_agent = "verdant-test"
timeout_secs = 10
accept_invalid_certs = true

[generation]
width = 512
provider = "mock"
"#;
        let path = temp_config(config_str);
        let config = VerdantConfig::load_from_file(&path).unwrap();

        assert_eq!(
            config.endpoint.api_url.as_deref(),
            Some("https://images.example.com")
        );
        assert_eq!(config.endpoint.user_agent.as_deref(), Some("verdant-test"));
        assert_eq!(config.endpoint.timeout_secs, Some(10));
        assert!(config.endpoint.accept_invalid_certs);
        assert_eq!(config.generation.width, 512);
        assert_eq!(config.generation.height, 1024);
        assert_eq!(config.generation.provider, "mock");

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_env_var_override() {
        let config_str = r#"
[endpoint]
api_url = "https://file.example.com"
"#;
        let path = temp_config(config_str);

        std::env::set_var("VERDANT_API_URL", "https://env.example.com");
        let config = VerdantConfig::load_from_file(&path).unwrap();
        std::env::remove_var("VERDANT_API_URL");

        assert_eq!(
            config.endpoint.api_url.as_deref(),
            Some("https://env.example.com")
        );

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let path = temp_config("endpoint = not valid toml [");
        let err = VerdantConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, VerdantError::ConfigError(_)));

        std::fs::remove_file(&path).ok();
        std::fs::remove_dir(path.parent().unwrap()).ok();
    }

    #[test]
    fn test_merge_overlay_wins() {
        let mut base = VerdantConfigFile::default();
        base.endpoint.api_url = Some("https://global.example.com".to_string());
        base.generation.width = 256;

        let mut overlay = VerdantConfigFile::default();
        overlay.endpoint.api_url = Some("https://local.example.com".to_string());

        VerdantConfig::merge_into(&mut base, overlay);

        assert_eq!(
            base.endpoint.api_url.as_deref(),
            Some("https://local.example.com")
        );
        // Overlay left width at default, base's explicit value survives
        assert_eq!(base.generation.width, 256);
    }
}
