/// Identifies one initiated request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic request counter. Only the latest ticket may apply its result;
/// after `close` none may.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSequence {
    latest: u64,
    closed: bool,
}

impl RequestSequence {
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        !self.closed && ticket.0 == self.latest
    }

    /// Invalidates every outstanding ticket without issuing a new one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let mut seq = RequestSequence::default();
        let a = seq.issue();
        let b = seq.issue();
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));

        seq.invalidate();
        assert!(!seq.is_current(b));
    }

    #[test]
    fn test_closed_sequence_rejects_everything() {
        let mut seq = RequestSequence::default();
        let a = seq.issue();
        seq.close();
        assert!(!seq.is_current(a));
        let b = seq.issue();
        assert!(!seq.is_current(b));
    }
}
