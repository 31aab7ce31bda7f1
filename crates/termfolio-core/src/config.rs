use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, TermfolioError};
use crate::types::Theme;

/// Default welcome banner shown when the terminal opens on an empty transcript.
pub const DEFAULT_WELCOME: &str = "👋 Welcome to AbduBot Terminal!\n\n🤖 I'm Abdullah's AI assistant. I can help you learn about his skills, projects, and experience.\n\n💡 Try typing 'help' to see available commands, or just ask me anything in natural language!\n\nReady to explore? 🚀";

/// Top-level configuration for Termfolio.
///
/// Loaded from `~/.termfolio/config.toml` by default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermfolioConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub terminal: TerminalConfig,
}

impl TermfolioConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TermfolioConfig = toml::from_str(&content)?;
        config.validate()?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Check cross-field constraints serde cannot express.
    pub fn validate(&self) -> Result<()> {
        self.terminal.validate()
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Initial colour scheme.
    pub theme: Theme,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            theme: Theme::Dark,
        }
    }
}

/// Terminal widget settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Name shown next to the thinking indicator.
    pub bot_name: String,
    /// Prompt echoed before user input.
    pub prompt: String,
    /// Lower bound of the simulated thinking delay, in milliseconds.
    pub think_min_ms: u64,
    /// Upper bound of the simulated thinking delay, in milliseconds.
    pub think_max_ms: u64,
    /// Longest accepted input, in characters.
    pub max_input_chars: usize,
    /// Banner synthesized when the terminal opens empty.
    pub welcome_message: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            bot_name: "AbduBot".to_string(),
            prompt: "abdullah@portfolio:~$".to_string(),
            think_min_ms: 500,
            think_max_ms: 1500,
            max_input_chars: 2000,
            welcome_message: DEFAULT_WELCOME.to_string(),
        }
    }
}

impl TerminalConfig {
    /// Bounds of the thinking delay.
    pub fn think_range(&self) -> (Duration, Duration) {
        (
            Duration::from_millis(self.think_min_ms),
            Duration::from_millis(self.think_max_ms),
        )
    }

    /// Reject delay bounds and limits the session cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.think_min_ms == 0 {
            return Err(TermfolioError::Config(
                "terminal.think_min_ms must be greater than zero".to_string(),
            ));
        }
        if self.think_max_ms < self.think_min_ms {
            return Err(TermfolioError::Config(format!(
                "terminal.think_max_ms ({}) is below think_min_ms ({})",
                self.think_max_ms, self.think_min_ms
            )));
        }
        if self.max_input_chars == 0 {
            return Err(TermfolioError::Config(
                "terminal.max_input_chars must be greater than zero".to_string(),
            ));
        }
        if self.welcome_message.trim().is_empty() {
            return Err(TermfolioError::Config(
                "terminal.welcome_message must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = TermfolioConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.general.theme, Theme::Dark);
        assert_eq!(config.terminal.bot_name, "AbduBot");
        assert_eq!(config.terminal.prompt, "abdullah@portfolio:~$");
        assert_eq!(config.terminal.think_min_ms, 500);
        assert_eq!(config.terminal.think_max_ms, 1500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
log_level = "debug"
theme = "light"

[terminal]
bot_name = "Folio"
prompt = "guest@folio:~$"
think_min_ms = 100
think_max_ms = 200
"#;
        let file = create_temp_config(content);
        let config = TermfolioConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.general.theme, Theme::Light);
        assert_eq!(config.terminal.bot_name, "Folio");
        assert_eq!(config.terminal.think_min_ms, 100);
        // Unset fields use defaults
        assert_eq!(config.terminal.max_input_chars, 2000);
        assert_eq!(config.terminal.welcome_message, DEFAULT_WELCOME);
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let file = create_temp_config("[general]\nlog_level = \"warn\"\n");
        let config = TermfolioConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.terminal.think_max_ms, 1500);
    }

    #[test]
    fn test_load_rejects_zero_delay() {
        let file = create_temp_config("[terminal]\nthink_min_ms = 0\n");
        let err = TermfolioConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, TermfolioError::Config(_)));
        assert!(err.to_string().contains("think_min_ms"));
    }

    #[test]
    fn test_load_rejects_inverted_range() {
        let file = create_temp_config("[terminal]\nthink_min_ms = 900\nthink_max_ms = 100\n");
        assert!(TermfolioConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = TermfolioConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.terminal.bot_name, "AbduBot");
    }

    #[test]
    fn test_load_or_default_invalid_toml() {
        let file = create_temp_config("[terminal\nbot_name = ");
        let config = TermfolioConfig::load_or_default(file.path());
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = TermfolioConfig::default();
        config.general.theme = Theme::Light;
        config.terminal.think_max_ms = 800;
        config.save(&path).unwrap();

        let reloaded = TermfolioConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.theme, Theme::Light);
        assert_eq!(reloaded.terminal.think_max_ms, 800);
        assert_eq!(reloaded.terminal.welcome_message, config.terminal.welcome_message);
    }

    #[test]
    fn test_think_range() {
        let (min, max) = TerminalConfig::default().think_range();
        assert_eq!(min, Duration::from_millis(500));
        assert_eq!(max, Duration::from_millis(1500));
    }
}
