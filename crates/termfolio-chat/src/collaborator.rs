//! Collaborator interfaces the session calls out to.
//!
//! The theme manager and the presentation shell live outside this crate.
//! Both traits are implemented for plain closures so callers can pass
//! `move || ...` without a wrapper type.

use std::fmt;
use std::sync::Arc;

/// Owner of the site colour scheme.
pub trait ThemeToggle: Send + Sync {
    fn toggle(&self);
}

/// Owner of the widget's visibility; asked to hide it after `exit`.
pub trait CloseRequest: Send + Sync {
    fn request_close(&self);
}

impl<F: Fn() + Send + Sync> ThemeToggle for F {
    fn toggle(&self) {
        self()
    }
}

impl<F: Fn() + Send + Sync> CloseRequest for F {
    fn request_close(&self) {
        self()
    }
}

/// Collaborator that ignores every signal.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCollaborator;

impl ThemeToggle for NoopCollaborator {
    fn toggle(&self) {}
}

impl CloseRequest for NoopCollaborator {
    fn request_close(&self) {}
}

/// The injected collaborator set of one session.
#[derive(Clone)]
pub struct Collaborators {
    pub theme: Arc<dyn ThemeToggle>,
    pub close: Arc<dyn CloseRequest>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            theme: Arc::new(NoopCollaborator),
            close: Arc::new(NoopCollaborator),
        }
    }
}

impl fmt::Debug for Collaborators {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collaborators").finish_non_exhaustive()
    }
}

impl Collaborators {
    pub fn with_theme(mut self, theme: impl ThemeToggle + 'static) -> Self {
        self.theme = Arc::new(theme);
        self
    }

    pub fn with_close(mut self, close: impl CloseRequest + 'static) -> Self {
        self.close = Arc::new(close);
        self
    }
}
