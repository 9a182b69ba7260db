//! Decode-attempt tracking with a permanent lockout.
//!
//! The detector records every cipher request and counts, per `check`, how
//! many earlier requests match the same text and action inside a trailing
//! time window. Reaching the ceiling trips a terminal block: from then on
//! every `check` and `insert` fails for the rest of the process lifetime,
//! regardless of window contents. The block is a lockout, not a cooldown.

use thiserror::Error;

use crate::cipher::Action;

/// The attempt ceiling was reached, or the block has already tripped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("decode attempt limit reached; further requests are blocked")]
pub struct RateLimited;

/// One recorded cipher request.
#[derive(Debug, Clone)]
pub struct RequestRecord {
    /// The text operand of the request.
    pub text: String,
    /// Opaque key descriptor (the `Display` form of the key used).
    pub key: String,
    /// Requested direction.
    pub action: Action,
    /// Seconds since the Unix epoch.
    pub timestamp: u64,
}

/// Sliding-window counter over recorded requests with a terminal block.
///
/// Two states: open (initial) and blocked (terminal). The history grows
/// monotonically; records are never mutated or evicted, the window is
/// applied at scan time.
#[derive(Debug)]
pub struct AttackDetector {
    history: Vec<RequestRecord>,
    blocked: bool,
    tries: usize,
    window_secs: u64,
}

impl AttackDetector {
    /// Creates an open detector allowing `tries` matching requests per
    /// trailing window of `window_secs` seconds.
    pub fn new(tries: usize, window_secs: u64) -> Self {
        Self {
            history: Vec::new(),
            blocked: false,
            tries,
            window_secs,
        }
    }

    /// Whether the terminal block has tripped.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// The recorded requests, oldest first.
    pub fn history(&self) -> &[RequestRecord] {
        &self.history
    }

    /// Verifies that another `action` request for `text` is allowed at time
    /// `now`.
    ///
    /// Counts records matching `(action, text)` with a timestamp inside
    /// `[now - window, now]`; reaching the ceiling trips the permanent
    /// block. Once blocked, fails unconditionally.
    pub fn check(&mut self, text: &str, action: Action, now: u64) -> Result<(), RateLimited> {
        if self.blocked {
            return Err(RateLimited);
        }

        let from = now.saturating_sub(self.window_secs);
        let matching = self
            .history
            .iter()
            .filter(|r| r.action == action && r.text == text)
            .filter(|r| r.timestamp >= from && r.timestamp <= now)
            .count();

        if matching >= self.tries {
            self.blocked = true;
            return Err(RateLimited);
        }
        Ok(())
    }

    /// Appends a request to the history. Fails once blocked.
    pub fn insert(
        &mut self,
        text: &str,
        key: &str,
        action: Action,
        now: u64,
    ) -> Result<(), RateLimited> {
        if self.blocked {
            return Err(RateLimited);
        }
        self.history.push(RequestRecord {
            text: text.to_string(),
            key: key.to_string(),
            action,
            timestamp: now,
        });
        Ok(())
    }
}
