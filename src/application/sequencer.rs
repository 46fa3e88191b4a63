use std::sync::atomic::{AtomicU64, Ordering};

/// Ticket identifying one submission. Copyable so the async completion can
/// carry it across the await point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

/// Monotonic submission counter implementing the latest-wins policy.
///
/// Nothing stops the user from submitting while a request is in flight;
/// instead of guarding the form, each submission takes a ticket and only
/// the completion holding the most recently issued ticket may apply its
/// effects. Stale completions are discarded by the caller.
pub struct RequestSequencer {
    issued: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self { issued: AtomicU64::new(0) }
    }

    /// Issue the ticket for a new submission, invalidating all earlier ones.
    pub fn begin(&self) -> RequestTicket {
        RequestTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Whether `ticket` still belongs to the most recent submission.
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    pub fn issued_count(&self) -> u64 {
        self.issued.load(Ordering::SeqCst)
    }
}

impl Default for RequestSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_ticket_is_current_until_the_next_submission() {
        let sequencer = RequestSequencer::new();
        let first = sequencer.begin();
        assert!(sequencer.is_current(first));

        let second = sequencer.begin();
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn out_of_order_completions_resolve_to_the_latest_ticket() {
        let sequencer = RequestSequencer::new();
        let a = sequencer.begin();
        let b = sequencer.begin();
        let c = sequencer.begin();

        // Completions arriving in any order: only c may apply.
        assert!(!sequencer.is_current(b));
        assert!(sequencer.is_current(c));
        assert!(!sequencer.is_current(a));
        assert_eq!(sequencer.issued_count(), 3);
    }
}
