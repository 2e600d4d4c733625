//! Stale-response guard for async fetches.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of a live view. Bumping the generation (on navigation or when
/// a newer fetch supersedes an older one) invalidates every outstanding
/// ticket.
#[derive(Debug, Clone, Default)]
pub struct ViewToken {
    generation: Arc<AtomicU64>,
}

impl ViewToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket bound to the current generation. Capture one before
    /// starting a fetch, and check it before applying the result.
    pub fn ticket(&self) -> Ticket {
        Ticket {
            generation: self.generation.clone(),
            issued: self.generation.load(Ordering::Acquire),
        }
    }

    /// Invalidate all outstanding tickets.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }
}

/// A claim ticket for one in-flight fetch.
#[derive(Debug, Clone)]
pub struct Ticket {
    generation: Arc<AtomicU64>,
    issued: u64,
}

impl Ticket {
    /// Whether the view is still interested in this fetch's result.
    pub fn is_current(&self) -> bool {
        self.generation.load(Ordering::Acquire) == self.issued
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_is_current_until_invalidated() {
        let token = ViewToken::new();
        let ticket = token.ticket();
        assert!(ticket.is_current());

        token.invalidate();
        assert!(!ticket.is_current());
    }

    #[test]
    fn new_tickets_outlive_old_ones() {
        let token = ViewToken::new();
        let old = token.ticket();
        token.invalidate();
        let new = token.ticket();

        assert!(!old.is_current());
        assert!(new.is_current());
    }
}
