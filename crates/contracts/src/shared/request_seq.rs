//! Latest-wins bookkeeping for panels that refetch on filter changes.
//!
//! Every fetch takes a ticket before it is sent; when the response arrives it
//! is applied only if no newer ticket has been issued for the same panel.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a ticket that supersedes all earlier ones
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut seq = RequestSeq::new();
        let first = seq.issue();
        assert!(seq.is_current(first));

        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_out_of_order_responses() {
        let mut seq = RequestSeq::new();
        let slow = seq.issue();
        let fast = seq.issue();

        // fast resolves first and is applied, slow resolves later and is dropped
        assert!(seq.is_current(fast));
        assert!(!seq.is_current(slow));
    }
}
