//! Line-mode presentation shell.
//!
//! Renders the session transcript to a writer and turns input lines into
//! session calls. Lines starting with `:` stand in for the widget's keys and
//! window buttons; everything else is submitted as visitor input.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use colored::{ColoredString, Colorize};
use rand::rngs::StdRng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::Instant;

use termfolio_chat::rules::QUICK_COMMANDS;
use termfolio_chat::{ChatError, Collaborators, ReplyOutcome, Session, ThemeToggle};
use termfolio_core::config::TerminalConfig;
use termfolio_core::{EntryKind, Lifecycle, Theme, TranscriptEntry};

use crate::theme::ThemeManager;

/// ANSI sequence that wipes the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const SHELL_KEYS: &str =
    ":up / :down recall history, :edit <text> set the input, :send submit it, \
     :min minimize, :restore, :esc close, :open, :quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellControl {
    Continue,
    Quit,
}

pub struct Shell<W: Write> {
    session: Session,
    theme: Arc<ThemeManager>,
    close_requested: Arc<AtomicBool>,
    out: W,
    /// Transcript entries already written to `out`.
    rendered: usize,
    /// Current content of the input field, as recall shows it.
    field: String,
    /// What the visitor had typed before recall took over the field.
    draft: String,
    /// A `clear` resolved while minimized; the screen is wiped on restore.
    wipe_pending: bool,
}

impl<W: Write> Shell<W> {
    /// Build a session wired to `theme` and to this shell's close signal.
    pub fn build(
        config: TerminalConfig,
        theme: Arc<ThemeManager>,
        rng: StdRng,
        out: W,
    ) -> Result<Self, ChatError> {
        let close_requested = Arc::new(AtomicBool::new(false));

        let toggler = Arc::clone(&theme);
        let flag = Arc::clone(&close_requested);
        let collaborators = Collaborators::default()
            .with_theme(move || toggler.toggle())
            .with_close(move || flag.store(true, Ordering::SeqCst));

        let session = Session::with_rng(config, collaborators, rng)?;
        Ok(Self {
            session,
            theme,
            close_requested,
            out,
            rendered: 0,
            field: String::new(),
            draft: String::new(),
            wipe_pending: false,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Open the terminal and print the banner.
    pub fn start(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", shell_keys_line())?;
        self.open()
    }

    // -----------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------

    pub fn handle_line(&mut self, line: &str) -> io::Result<ShellControl> {
        let trimmed = line.trim();
        match trimmed {
            ":quit" | ":q" => return Ok(ShellControl::Quit),
            ":up" => self.recall(true)?,
            ":down" => self.recall(false)?,
            ":send" => {
                let field = std::mem::take(&mut self.field);
                self.submit(&field)?;
            }
            ":esc" | ":close" => self.close()?,
            ":min" => match self.session.minimize() {
                Ok(()) => self.notice("Terminal minimized. :restore brings it back.")?,
                Err(e) => self.reject(e)?,
            },
            ":restore" => match self.session.restore() {
                Ok(()) => {
                    if std::mem::take(&mut self.wipe_pending) {
                        write!(self.out, "{}", CLEAR_SCREEN)?;
                    }
                    self.refresh()?
                }
                Err(e) => self.reject(e)?,
            },
            ":open" => self.open()?,
            ":keys" => writeln!(self.out, "{}", shell_keys_line())?,
            _ => {
                if let Some(text) = trimmed.strip_prefix(":edit ") {
                    self.field = text.to_string();
                    self.draft = text.to_string();
                } else {
                    self.submit(line)?;
                }
            }
        }
        Ok(ShellControl::Continue)
    }

    fn submit(&mut self, text: &str) -> io::Result<()> {
        match self.session.submit(text) {
            Ok(Some(_)) => {
                self.field.clear();
                self.draft.clear();
                self.refresh()?;
                let thinking = format!("🤖 {}: Thinking...", self.session.config().bot_name);
                writeln!(self.out, "{}", thinking.bright_black().italic())
            }
            Ok(None) => Ok(()),
            Err(e) => self.reject(e),
        }
    }

    fn recall(&mut self, older: bool) -> io::Result<()> {
        if self.session.history_cursor() == -1 {
            self.draft = self.field.clone();
        }
        let recalled = if older {
            self.session.recall_previous()
        } else {
            self.session.recall_next()
        };
        self.field = match recalled {
            Some(text) => text.to_string(),
            None => self.draft.clone(),
        };
        writeln!(self.out, "  ↳ {}", self.field)
    }

    fn open(&mut self) -> io::Result<()> {
        match self.session.open() {
            Ok(()) => {
                self.rendered = 0;
                self.print_quick_commands()?;
                self.refresh()
            }
            Err(e) => self.reject(e),
        }
    }

    fn close(&mut self) -> io::Result<()> {
        match self.session.close() {
            Ok(()) => {
                self.reset_view();
                self.notice("Terminal closed. :open starts a new session, :quit leaves.")
            }
            Err(e) => self.reject(e),
        }
    }

    fn reset_view(&mut self) {
        self.rendered = 0;
        self.wipe_pending = false;
        self.field.clear();
        self.draft.clear();
    }

    // -----------------------------------------------------------------
    // Clock
    // -----------------------------------------------------------------

    /// Resolve every reply due at `clock` and render the result.
    pub fn tick(&mut self, clock: Duration) -> io::Result<()> {
        let outcomes = self.session.advance_to(clock);
        for outcome in &outcomes {
            match outcome {
                ReplyOutcome::Cleared { .. } => {
                    self.rendered = 0;
                    if self.session.lifecycle() == Lifecycle::Open {
                        write!(self.out, "{}", CLEAR_SCREEN)?;
                    } else {
                        self.wipe_pending = true;
                    }
                }
                ReplyOutcome::Closed { .. } => self.reset_view(),
                ReplyOutcome::Appended { .. } | ReplyOutcome::Dropped { .. } => {}
            }
        }
        if self.close_requested.swap(false, Ordering::SeqCst) {
            self.notice("Terminal closed. :open starts a new session, :quit leaves.")?;
        }
        self.refresh()
    }

    /// Drive the shell from `input` until `:quit` or end of input.
    ///
    /// Session time follows the tokio clock from the moment `run` starts.
    /// At end of input, replies still thinking are waited out before returning.
    pub async fn run<R>(mut self, input: R) -> io::Result<W>
    where
        R: AsyncBufRead + Unpin,
    {
        let started = Instant::now();
        let mut lines = input.lines();

        loop {
            let wait = self.session.next_due();
            tokio::select! {
                line = lines.next_line() => {
                    self.tick(started.elapsed())?;
                    match line? {
                        Some(line) => {
                            if self.handle_line(&line)? == ShellControl::Quit {
                                break;
                            }
                        }
                        None => {
                            self.drain(started).await?;
                            break;
                        }
                    }
                }
                _ = sleep_for(wait) => self.tick(started.elapsed())?,
            }
            self.out.flush()?;
        }

        tracing::debug!(session_id = %self.session.id(), "Shell finished");
        self.out.flush()?;
        Ok(self.out)
    }

    async fn drain(&mut self, started: Instant) -> io::Result<()> {
        while let Some(wait) = self.session.next_due() {
            tokio::time::sleep(wait).await;
            self.tick(started.elapsed())?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------
    // Rendering
    // -----------------------------------------------------------------

    /// Write transcript entries not yet shown. Nothing is drawn while the
    /// terminal is minimized; the backlog appears on restore.
    fn refresh(&mut self) -> io::Result<()> {
        if self.session.lifecycle() != Lifecycle::Open {
            return Ok(());
        }
        let theme = self.theme.current();
        let transcript = self.session.transcript();
        let start = self.rendered.min(transcript.len());
        for entry in &transcript[start..] {
            render_entry(&mut self.out, entry, self.session.config(), theme)?;
        }
        self.rendered = transcript.len();
        Ok(())
    }

    fn print_quick_commands(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "Quick commands:".bold())?;
        for quick in QUICK_COMMANDS {
            writeln!(
                self.out,
                "  {} {:<11} {}",
                quick.icon,
                quick.command.as_str(),
                quick.description.bright_black()
            )?;
        }
        Ok(())
    }

    fn notice(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text.yellow())
    }

    fn reject(&mut self, error: ChatError) -> io::Result<()> {
        tracing::warn!(error = %error, "Shell action rejected");
        self.notice(&error.to_string())
    }
}

fn shell_keys_line() -> ColoredString {
    SHELL_KEYS.bright_black()
}

async fn sleep_for(wait: Option<Duration>) {
    match wait {
        Some(wait) => tokio::time::sleep(wait).await,
        None => std::future::pending().await,
    }
}

fn render_entry<W: Write>(
    out: &mut W,
    entry: &TranscriptEntry,
    config: &TerminalConfig,
    theme: Theme,
) -> io::Result<()> {
    let time = entry.created_at.format("%H:%M:%S").to_string();
    match entry.kind {
        EntryKind::User => writeln!(
            out,
            "{} {} {}",
            time.bright_black(),
            paint(&config.prompt, EntryKind::User, theme).bold(),
            entry.body()
        ),
        kind => {
            let label = match kind {
                EntryKind::Bot => config.bot_name.as_str(),
                EntryKind::Error => "error",
                _ => "system",
            };
            writeln!(out, "{} {}", time.bright_black(), format!("[{label}]").dimmed())?;
            for line in entry.body().lines() {
                writeln!(out, "  {}", paint(line, kind, theme))?;
            }
            Ok(())
        }
    }
}

fn paint(text: &str, kind: EntryKind, theme: Theme) -> ColoredString {
    match (kind, theme) {
        (EntryKind::User, Theme::Dark) => text.bright_green(),
        (EntryKind::User, Theme::Light) => text.green(),
        (EntryKind::Bot, Theme::Dark) => text.bright_white(),
        (EntryKind::Bot, Theme::Light) => text.black(),
        (EntryKind::System, _) => text.cyan(),
        (EntryKind::Error, _) => text.red(),
    }
}
