//! Stale-response guard for in-flight fetches.
//!
//! A page that refetches while an earlier request is still outstanding
//! must not let the earlier response overwrite the newer one. Each
//! fetch takes a [`Ticket`] from the page's [`RequestSequence`]; on
//! completion the response is applied only if its ticket is still the
//! latest issued.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic ticket issuer, one per view that fetches.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

/// Proof of which fetch a response belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding every earlier ticket.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether a completed fetch is still the latest one issued.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
