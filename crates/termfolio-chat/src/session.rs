//! Terminal session state.
//!
//! Owns the transcript, the input recall history and the widget lifecycle:
//! - Closed -> Open (open; greets when the transcript is empty)
//! - Open -> Minimized -> Open (minimize / restore)
//! - Open | Minimized -> Closed (close, Escape, or the `exit` command)
//!
//! `submit` echoes the input immediately and schedules the reply on the
//! session clock; `advance` resolves whatever has come due.

use std::time::Duration;

use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

use termfolio_core::config::TerminalConfig;
use termfolio_core::types::{EntryKind, Lifecycle, TranscriptEntry};

use crate::collaborator::Collaborators;
use crate::dispatcher::Dispatcher;
use crate::error::ChatError;
use crate::rules::Command;
use crate::scheduler::{PendingReply, ReplyScheduler, ReplyTicket};

/// What happened when a scheduled reply came due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyOutcome {
    /// A reply entry of `kind` was appended.
    Appended { ticket: ReplyTicket, kind: EntryKind },
    /// `clear` emptied the transcript.
    Cleared { ticket: ReplyTicket },
    /// `exit` closed the session.
    Closed { ticket: ReplyTicket },
    /// The session was closed before the reply landed.
    Dropped { ticket: ReplyTicket },
}

impl ReplyOutcome {
    pub fn ticket(&self) -> ReplyTicket {
        match self {
            ReplyOutcome::Appended { ticket, .. }
            | ReplyOutcome::Cleared { ticket }
            | ReplyOutcome::Closed { ticket }
            | ReplyOutcome::Dropped { ticket } => *ticket,
        }
    }
}

/// One terminal widget's conversation.
pub struct Session {
    id: Uuid,
    config: TerminalConfig,
    dispatcher: Dispatcher,
    collaborators: Collaborators,
    rng: StdRng,
    /// Wall-clock anchor of the scheduler's zero offset.
    epoch: DateTime<Local>,
    scheduler: ReplyScheduler,
    lifecycle: Lifecycle,
    transcript: Vec<TranscriptEntry>,
    input_history: Vec<String>,
    history_cursor: isize,
}

impl Session {
    /// Create a closed session with an OS-seeded generator.
    pub fn new(config: TerminalConfig, collaborators: Collaborators) -> Result<Self, ChatError> {
        Self::with_rng(config, collaborators, StdRng::from_os_rng())
    }

    /// Create a closed session drawing delays and reply variants from `rng`.
    pub fn with_rng(
        config: TerminalConfig,
        collaborators: Collaborators,
        rng: StdRng,
    ) -> Result<Self, ChatError> {
        config.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            config,
            dispatcher: Dispatcher::new(),
            collaborators,
            rng,
            epoch: Local::now(),
            scheduler: ReplyScheduler::new(),
            lifecycle: Lifecycle::Closed,
            transcript: Vec::new(),
            input_history: Vec::new(),
            history_cursor: -1,
        })
    }

    /// Replace the rule tables, e.g. with a test fixture.
    pub fn with_dispatcher(mut self, dispatcher: Dispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    // -----------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------

    /// Identifier of the current open period; renewed on every open.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn config(&self) -> &TerminalConfig {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn input_history(&self) -> &[String] {
        &self.input_history
    }

    pub fn history_cursor(&self) -> isize {
        self.history_cursor
    }

    /// True while any reply is still thinking.
    pub fn is_busy(&self) -> bool {
        !self.scheduler.is_empty()
    }

    pub fn pending_replies(&self) -> usize {
        self.scheduler.len()
    }

    /// Time left until the next reply lands.
    pub fn next_due(&self) -> Option<Duration> {
        self.scheduler.next_due()
    }

    // -----------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------

    /// Show the widget. Greets with the welcome banner when the transcript is empty.
    pub fn open(&mut self) -> Result<(), ChatError> {
        self.transition(Lifecycle::Open)?;
        self.id = Uuid::new_v4();
        if self.transcript.is_empty() {
            let at = self.stamp(self.scheduler.now());
            self.transcript.push(TranscriptEntry::reply(
                EntryKind::System,
                self.config.welcome_message.clone(),
                at,
            ));
        }
        tracing::info!(session_id = %self.id, "Terminal opened");
        Ok(())
    }

    pub fn minimize(&mut self) -> Result<(), ChatError> {
        self.transition(Lifecycle::Minimized)
    }

    pub fn restore(&mut self) -> Result<(), ChatError> {
        if self.lifecycle != Lifecycle::Minimized {
            return Err(ChatError::InvalidTransition {
                from: self.lifecycle,
                to: Lifecycle::Open,
            });
        }
        self.transition(Lifecycle::Open)
    }

    /// Hide the widget for good, discarding transcript, history and pending replies.
    pub fn close(&mut self) -> Result<(), ChatError> {
        self.transition(Lifecycle::Closed)?;
        self.discard();
        Ok(())
    }

    fn transition(&mut self, target: Lifecycle) -> Result<(), ChatError> {
        if !self.lifecycle.can_transition_to(&target) {
            return Err(ChatError::InvalidTransition {
                from: self.lifecycle,
                to: target,
            });
        }
        tracing::debug!(session_id = %self.id, "Terminal state: {} -> {}", self.lifecycle, target);
        self.lifecycle = target;
        Ok(())
    }

    fn discard(&mut self) {
        let dropped = self.scheduler.cancel_all();
        self.transcript.clear();
        self.input_history.clear();
        self.history_cursor = -1;
        tracing::info!(session_id = %self.id, dropped_replies = dropped, "Terminal closed");
    }

    // -----------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------

    /// Submit visitor input.
    ///
    /// Blank input is ignored (`Ok(None)`) without touching any state.
    /// Otherwise the input is echoed, recorded for recall, and a reply is
    /// scheduled after a random thinking delay.
    pub fn submit(&mut self, raw: &str) -> Result<Option<ReplyTicket>, ChatError> {
        let input = raw.trim();
        if input.is_empty() {
            return Ok(None);
        }
        if self.lifecycle != Lifecycle::Open {
            return Err(ChatError::NotOpen(self.lifecycle));
        }
        if input.chars().count() > self.config.max_input_chars {
            return Err(ChatError::InputTooLong(self.config.max_input_chars));
        }

        let at = self.stamp(self.scheduler.now());
        self.transcript.push(TranscriptEntry::user(input, at));
        self.input_history.push(input.to_string());
        self.history_cursor = -1;

        let delay = self.think_delay();
        let ticket = self.scheduler.schedule(input, delay);
        tracing::debug!(
            session_id = %self.id,
            %ticket,
            delay_ms = delay.as_millis() as u64,
            "Reply scheduled"
        );
        Ok(Some(ticket))
    }

    /// Drop a pending reply. The user entry it belongs to stays.
    pub fn cancel(&mut self, ticket: ReplyTicket) -> bool {
        self.scheduler.cancel(ticket)
    }

    fn think_delay(&mut self) -> Duration {
        let (min, max) = self.config.think_range();
        self.rng.random_range(min..=max.max(min))
    }

    // -----------------------------------------------------------------
    // Clock
    // -----------------------------------------------------------------

    /// Advance the session clock, resolving every reply that comes due.
    pub fn advance(&mut self, by: Duration) -> Vec<ReplyOutcome> {
        let due = self.scheduler.advance(by);
        due.into_iter().map(|reply| self.resolve(reply)).collect()
    }

    /// Advance the session clock to an absolute offset.
    pub fn advance_to(&mut self, offset: Duration) -> Vec<ReplyOutcome> {
        let due = self.scheduler.advance_to(offset);
        due.into_iter().map(|reply| self.resolve(reply)).collect()
    }

    fn resolve(&mut self, reply: PendingReply) -> ReplyOutcome {
        let ticket = reply.ticket;
        if !self.lifecycle.accepts_replies() {
            tracing::debug!(session_id = %self.id, %ticket, "Reply dropped, terminal closed");
            return ReplyOutcome::Dropped { ticket };
        }

        let at = self.stamp(reply.due);
        let classification = self.dispatcher.classify(&reply.input, at, &mut self.rng);

        match classification.command {
            Some(Command::Clear) => {
                self.transcript.clear();
                ReplyOutcome::Cleared { ticket }
            }
            Some(Command::Exit) => {
                self.lifecycle = Lifecycle::Closed;
                self.discard();
                self.collaborators.close.request_close();
                ReplyOutcome::Closed { ticket }
            }
            command => {
                if command == Some(Command::Theme) {
                    self.collaborators.theme.toggle();
                }
                let kind = EntryKind::from(classification.category);
                self.transcript
                    .push(TranscriptEntry::reply(kind, classification.text, at));
                ReplyOutcome::Appended { ticket, kind }
            }
        }
    }

    fn stamp(&self, offset: Duration) -> DateTime<Local> {
        self.epoch + chrono::Duration::from_std(offset).unwrap_or(chrono::Duration::zero())
    }

    // -----------------------------------------------------------------
    // Recall
    // -----------------------------------------------------------------

    /// Step back to an older input (ArrowUp). Clamps at the oldest entry.
    ///
    /// `None` means the caller should show its live draft.
    pub fn recall_previous(&mut self) -> Option<&str> {
        let last = self.input_history.len() as isize - 1;
        if self.history_cursor < last {
            self.history_cursor += 1;
        }
        self.recalled()
    }

    /// Step forward to a newer input (ArrowDown). Below the newest entry the
    /// cursor returns to the live draft and stays there.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.history_cursor > -1 {
            self.history_cursor -= 1;
        }
        self.recalled()
    }

    fn recalled(&self) -> Option<&str> {
        if self.history_cursor < 0 {
            return None;
        }
        let index = self.input_history.len() - 1 - self.history_cursor as usize;
        self.input_history.get(index).map(String::as_str)
    }
}

// =============================================================================
// Tests
// =============================================================================
