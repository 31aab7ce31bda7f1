//! Reply scheduler on a virtual clock.
//!
//! Holds the "thinking" replies that are waiting for their delay to pass.
//! Time only moves when the owner calls [`ReplyScheduler::advance`], so
//! tests step the clock explicitly and the binary maps real time onto it.

use std::fmt;
use std::time::Duration;

/// Handle for one scheduled reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReplyTicket(u64);

impl fmt::Display for ReplyTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "reply#{}", self.0)
    }
}

/// A reply waiting for its due time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub ticket: ReplyTicket,
    pub input: String,
    /// Clock offset at which the reply resolves.
    pub due: Duration,
}

/// Pending replies ordered by due time.
#[derive(Debug, Default)]
pub struct ReplyScheduler {
    now: Duration,
    next_ticket: u64,
    pending: Vec<PendingReply>,
}

impl ReplyScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock offset.
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Schedule `input` to resolve `delay` from now.
    pub fn schedule(&mut self, input: impl Into<String>, delay: Duration) -> ReplyTicket {
        let ticket = ReplyTicket(self.next_ticket);
        self.next_ticket += 1;
        self.pending.push(PendingReply {
            ticket,
            input: input.into(),
            due: self.now + delay,
        });
        ticket
    }

    /// Drop one pending reply. Returns `false` for unknown or already
    /// resolved tickets.
    pub fn cancel(&mut self, ticket: ReplyTicket) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.ticket != ticket);
        self.pending.len() != before
    }

    /// Drop every pending reply, returning how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Time left until the earliest pending reply, if any.
    pub fn next_due(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|p| p.due.saturating_sub(self.now))
            .min()
    }

    /// Move the clock forward and take every reply that is now due.
    ///
    /// Returned replies are ordered by due time; ties keep scheduling order.
    pub fn advance(&mut self, by: Duration) -> Vec<PendingReply> {
        self.now += by;
        let now = self.now;

        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = waiting;

        due.sort_by_key(|p| (p.due, p.ticket));
        due
    }

    /// Move the clock to an absolute offset. Offsets in the past are ignored.
    pub fn advance_to(&mut self, offset: Duration) -> Vec<PendingReply> {
        self.advance(offset.saturating_sub(self.now))
    }
}
