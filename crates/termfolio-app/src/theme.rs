//! Site colour scheme owned by the binary.
//!
//! The session only ever asks for a toggle; the current value lives here so
//! the shell can pick its palette and `main` can persist it on the way out.

use std::path::Path;
use std::sync::Mutex;

use termfolio_chat::ThemeToggle;
use termfolio_core::{TermfolioConfig, Theme};

#[derive(Debug, Default)]
pub struct ThemeManager {
    current: Mutex<Theme>,
}

impl ThemeManager {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: Mutex::new(initial),
        }
    }

    pub fn current(&self) -> Theme {
        match self.current.lock() {
            Ok(theme) => *theme,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl ThemeToggle for ThemeManager {
    fn toggle(&self) {
        let mut theme = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let previous = *theme;
        let next = previous.toggled();
        *theme = next;
        tracing::info!(from = %previous, to = %next, "Theme toggled");
    }
}

/// Persist `chosen` to `path` when the visitor changed it during the run.
///
/// Creates the file when it does not exist yet. Returns whether anything was written.
pub fn remember_theme(
    config: &mut TermfolioConfig,
    path: &Path,
    initial: Theme,
    chosen: Theme,
) -> termfolio_core::Result<bool> {
    if chosen == initial {
        return Ok(false);
    }
    config.general.theme = chosen;
    config.save(path)?;
    tracing::info!(theme = %chosen, path = %path.display(), "Theme remembered");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(ThemeManager::default().current(), Theme::Dark);
    }

    #[test]
    fn test_toggle_flips_back_and_forth() {
        let manager = ThemeManager::new(Theme::Light);
        manager.toggle();
        assert_eq!(manager.current(), Theme::Dark);
        manager.toggle();
        assert_eq!(manager.current(), Theme::Light);
    }

    #[test]
    fn test_shared_with_session_collaborators() {
        let manager = Arc::new(ThemeManager::new(Theme::Dark));
        let shared = Arc::clone(&manager);
        let collaborators =
            termfolio_chat::Collaborators::default().with_theme(move || shared.toggle());
        collaborators.theme.toggle();
        assert_eq!(manager.current(), Theme::Light);
    }

    // ---- remember_theme ----

    #[test]
    fn test_remember_creates_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".termfolio").join("config.toml");
        let mut config = TermfolioConfig::default();

        assert!(remember_theme(&mut config, &path, Theme::Dark, Theme::Light).unwrap());
        let reloaded = TermfolioConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.theme, Theme::Light);
    }

    #[test]
    fn test_remember_overwrites_existing_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = TermfolioConfig::default();
        config.terminal.bot_name = "Folio".to_string();
        config.save(&path).unwrap();

        assert!(remember_theme(&mut config, &path, Theme::Dark, Theme::Light).unwrap());
        let reloaded = TermfolioConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.theme, Theme::Light);
        assert_eq!(reloaded.terminal.bot_name, "Folio");
    }

    #[test]
    fn test_unchanged_theme_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = TermfolioConfig::default();

        assert!(!remember_theme(&mut config, &path, Theme::Light, Theme::Light).unwrap());
        assert!(!path.exists());
    }
}
