use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Output format selected on encode.
///
/// Decoding never takes a mode: the format is detected from the first
/// character of the input.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum EncodingMode {
    /// Standard RFC 4648 Base64 with `=` padding.
    Base64,
    /// 15-bit groups over the Hangul + CJK alphabet.
    #[default]
    #[serde(alias = "base32k", alias = "unicode")]
    Wide,
}

impl EncodingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EncodingMode::Base64 => "base64",
            EncodingMode::Wide => "wide",
        }
    }
}

/// Global settings for base32k.
///
/// Every field is optional so that an override file only replaces the keys
/// it actually sets.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// Mode used by `encode` when none is given on the command line
    #[serde(default)]
    pub default_mode: Option<EncodingMode>,
    /// Wrap encoded output after this many characters (0 = off)
    #[serde(default)]
    pub wrap: Option<usize>,
    /// Maximum input size in bytes (0 = unlimited)
    #[serde(default)]
    pub max_size: Option<usize>,
}

/// Configuration loaded from TOML files.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct CodecConfig {
    #[serde(default)]
    pub settings: Settings,
}

impl CodecConfig {
    /// Parses a configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in defaults bundled with the library.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../base32k.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads configuration from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read config '{}': {}", path.display(), e))?;
        Ok(Self::from_toml(&content)?)
    }

    /// Loads configuration with user overrides from standard locations.
    ///
    /// Searches in priority order:
    /// 1. Built-in defaults (from library)
    /// 2. `~/.config/base32k/config.toml` (user overrides)
    /// 3. `./base32k.toml` (project-local overrides)
    ///
    /// Override files that fail to parse are skipped with a warning.
    pub fn load_with_overrides() -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("base32k").join("config.toml");
            config.merge_optional(&user_config_path);
        }

        config.merge_optional(Path::new("base32k.toml"));

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => {
                debug!("Loaded config overrides from {}", path.display());
                self.merge(other);
            }
            Err(e) => {
                warn!("Failed to load config from {}: {}", path.display(), e);
            }
        }
    }

    /// Merges another configuration into this one.
    ///
    /// Settings present in `other` replace the ones in `self`.
    pub fn merge(&mut self, other: CodecConfig) {
        let Settings {
            default_mode,
            wrap,
            max_size,
        } = other.settings;
        if default_mode.is_some() {
            self.settings.default_mode = default_mode;
        }
        if wrap.is_some() {
            self.settings.wrap = wrap;
        }
        if max_size.is_some() {
            self.settings.max_size = max_size;
        }
    }

    pub fn default_mode(&self) -> EncodingMode {
        self.settings.default_mode.unwrap_or_default()
    }

    pub fn wrap(&self) -> usize {
        self.settings.wrap.unwrap_or(0)
    }

    pub fn max_size(&self) -> usize {
        self.settings.max_size.unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = CodecConfig::load_default().unwrap();
        assert_eq!(config.default_mode(), EncodingMode::Wide);
        assert_eq!(config.wrap(), 0);
        assert_eq!(config.max_size(), 104_857_600);
    }

    #[test]
    fn test_load_from_toml_string() {
        let toml_content = r#"
[settings]
default_mode = "base64"
wrap = 76
"#;
        let config = CodecConfig::from_toml(toml_content).unwrap();
        assert_eq!(config.default_mode(), EncodingMode::Base64);
        assert_eq!(config.wrap(), 76);
        assert_eq!(config.settings.max_size, None);
    }

    #[test]
    fn test_mode_aliases() {
        let config = CodecConfig::from_toml("[settings]\ndefault_mode = \"base32k\"\n").unwrap();
        assert_eq!(config.default_mode(), EncodingMode::Wide);
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(CodecConfig::from_toml("[settings]\ndefault_mode = \"base85\"\n").is_err());
    }

    #[test]
    fn test_empty_config_uses_fallbacks() {
        let config = CodecConfig::from_toml("").unwrap();
        assert_eq!(config.default_mode(), EncodingMode::Wide);
        assert_eq!(config.wrap(), 0);
        assert_eq!(config.max_size(), 0);
    }

    #[test]
    fn test_merge_configs() {
        let mut base = CodecConfig::load_default().unwrap();
        let other = CodecConfig::from_toml("[settings]\nwrap = 64\n").unwrap();

        base.merge(other);

        assert_eq!(base.wrap(), 64);
        // untouched keys survive
        assert_eq!(base.default_mode(), EncodingMode::Wide);
        assert_eq!(base.max_size(), 104_857_600);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[settings]\nmax_size = 10\n").unwrap();

        let config = CodecConfig::load_from_file(&path).unwrap();
        assert_eq!(config.max_size(), 10);
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = CodecConfig::load_from_file(Path::new("/nonexistent/base32k.toml"))
            .unwrap_err();
        assert!(err.to_string().contains("Cannot read config"));
    }
}
