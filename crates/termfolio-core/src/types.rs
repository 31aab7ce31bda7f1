use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

// =============================================================================
// Enums
// =============================================================================

/// Rendering style of a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    /// Echo of what the visitor typed.
    User,
    /// Canned reply from the bot.
    Bot,
    /// Reply to input that matched nothing.
    Error,
    /// Messages the terminal itself produces, e.g. the welcome banner.
    System,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryKind::User => write!(f, "user"),
            EntryKind::Bot => write!(f, "bot"),
            EntryKind::Error => write!(f, "error"),
            EntryKind::System => write!(f, "system"),
        }
    }
}

/// Visibility lifecycle of the terminal widget.
///
/// Valid transitions:
/// - Closed -> Open (open / reopen)
/// - Open -> Minimized
/// - Minimized -> Open (restore)
/// - Open -> Closed
/// - Minimized -> Closed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    #[default]
    Closed,
    Open,
    Minimized,
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifecycle::Closed => write!(f, "Closed"),
            Lifecycle::Open => write!(f, "Open"),
            Lifecycle::Minimized => write!(f, "Minimized"),
        }
    }
}

impl Lifecycle {
    /// Returns whether a transition from `self` to `target` is valid.
    pub fn can_transition_to(&self, target: &Lifecycle) -> bool {
        matches!(
            (self, target),
            (Lifecycle::Closed, Lifecycle::Open)
                | (Lifecycle::Open, Lifecycle::Minimized)
                | (Lifecycle::Minimized, Lifecycle::Open)
                | (Lifecycle::Open, Lifecycle::Closed)
                | (Lifecycle::Minimized, Lifecycle::Closed)
        )
    }

    /// Whether a delayed reply may still land in the transcript.
    pub fn accepts_replies(&self) -> bool {
        matches!(self, Lifecycle::Open | Lifecycle::Minimized)
    }
}

/// Colour scheme owned by the theme collaborator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The opposite scheme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

// =============================================================================
// TranscriptEntry
// =============================================================================

/// One line-group in the terminal transcript.
///
/// User entries carry `text`; every other kind carries `content`. The
/// constructors keep the unused field empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptEntry {
    /// Raw input as typed (user entries only).
    pub text: String,
    /// Rendered output (bot, error and system entries only).
    pub content: String,
    pub created_at: DateTime<Local>,
    pub kind: EntryKind,
}

impl TranscriptEntry {
    /// Entry echoing visitor input.
    pub fn user(text: impl Into<String>, created_at: DateTime<Local>) -> Self {
        Self {
            text: text.into(),
            content: String::new(),
            created_at,
            kind: EntryKind::User,
        }
    }

    /// Output entry of the given kind.
    ///
    /// Passing `EntryKind::User` is a caller bug; the content is stored as
    /// `text` instead so the invariant still holds.
    pub fn reply(kind: EntryKind, content: impl Into<String>, created_at: DateTime<Local>) -> Self {
        if kind == EntryKind::User {
            return Self::user(content, created_at);
        }
        Self {
            text: String::new(),
            content: content.into(),
            created_at,
            kind,
        }
    }

    /// The populated half of the entry.
    pub fn body(&self) -> &str {
        match self.kind {
            EntryKind::User => &self.text,
            _ => &self.content,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
