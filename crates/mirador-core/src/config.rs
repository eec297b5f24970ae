use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::log::LogConfig;

/// Top-level configuration for Mirador.
///
/// Loaded from `~/.config/mirador/config.toml`. Missing sections
/// fall back to defaults thanks to `#[serde(default)]`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Provider defaults used by the CLI.
    pub provider: ProviderConfig,
    /// File logging settings.
    pub logging: LogConfig,
}

/// Provider defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Whether listings include the status bar surface. Defaults to `false`;
    /// callers that want the status overlay ask for it explicitly.
    pub include_status_bar: bool,
}

/// Returns the config directory: `~/.config/mirador/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".config").join("mirador"))
}

/// Returns the config file path: `~/.config/mirador/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Loads the configuration from disk, falling back to defaults.
///
/// A missing file silently returns defaults; an unreadable or malformed
/// file prints a warning and returns defaults.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Config::default(),
        Err(e) => {
            eprintln!("Warning: {}: {e}", path.display());
            return Config::default();
        }
    };
    match toml::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: {}: {e}", path.display());
            Config::default()
        }
    }
}

/// Generates the default `config.toml` contents with explanatory comments.
///
/// This is used by `mirador init` to create a starter config file that
/// users can immediately edit.
pub fn generate_config() -> String {
    r##"# Mirador configuration
# Location: ~/.config/mirador/config.toml

[provider]
# Include the system status surface (taskbar) in listings.
include_status_bar = false

[logging]
# Enable file logging to ~/.config/mirador/logs/mirador.log.
enabled = false
# Minimum log level: "debug", "info", "warn", or "error".
level = "info"
# Maximum log file size in MB before rotation.
max_file_mb = 10
"##
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        // Arrange / Act
        let config = Config::default();

        // Assert
        assert!(!config.provider.include_status_bar);
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_toml_uses_defaults_for_missing_sections() {
        // Arrange
        let toml_str = "[provider]\ninclude_status_bar = true\n";

        // Act
        let config: Config = toml::from_str(toml_str).unwrap();

        // Assert
        assert!(config.provider.include_status_bar);
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.max_file_mb, 10);
    }

    #[test]
    fn config_template_parses_as_valid_config() {
        // Arrange
        let toml_str = generate_config();

        // Act
        let result: Result<Config, _> = toml::from_str(&toml_str);

        // Assert
        assert!(
            result.is_ok(),
            "config template is not valid TOML: {result:?}"
        );
    }

    #[test]
    fn config_template_matches_default_values() {
        // Arrange
        let toml_str = generate_config();

        // Act
        let config: Config = toml::from_str(&toml_str).unwrap();

        // Assert
        let defaults = Config::default();
        assert_eq!(
            config.provider.include_status_bar,
            defaults.provider.include_status_bar
        );
        assert_eq!(config.logging.enabled, defaults.logging.enabled);
        assert_eq!(config.logging.level, defaults.logging.level);
        assert_eq!(config.logging.max_file_mb, defaults.logging.max_file_mb);
    }
}
