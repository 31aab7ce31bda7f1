//! Scripted command terminal for the portfolio site.
//!
//! Maps visitor input to canned replies through a fixed rule table and keeps
//! the per-widget session: transcript, input recall and open/minimized/closed
//! lifecycle. Replies land after a simulated thinking delay measured on a
//! virtual clock the caller advances.

pub mod collaborator;
pub mod dispatcher;
pub mod error;
pub mod rules;
pub mod scheduler;
pub mod session;

pub use collaborator::{CloseRequest, Collaborators, NoopCollaborator, ThemeToggle};
pub use dispatcher::{Classification, Dispatcher};
pub use error::ChatError;
pub use rules::{Category, Command, CommandRule, Heuristic, HeuristicReply, QuickCommand};
pub use scheduler::{PendingReply, ReplyScheduler, ReplyTicket};
pub use session::{ReplyOutcome, Session};
