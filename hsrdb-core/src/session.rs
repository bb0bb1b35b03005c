//! Request session tokens
//!
//! Every fetch that can race a newer fetch for the same UI slot carries a
//! token from a monotonic sequence. A completion is committed only when its
//! token is still the sequence's current one; anything older is discarded
//! silently. There is no cancellation, only result discarding.

use serde::{Deserialize, Serialize};

/// Opaque fetch token. Compare with [`RequestSeq::is_current`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestToken(u64);

/// Monotonic token issuer for one UI slot (a search panel, a detail pane,
/// the term popover). Each slot owns its own sequence; tokens from
/// different sequences are never compared.
#[derive(Debug, Default)]
pub struct RequestSeq {
    next: u64,
    current: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch: issues a fresh token and makes it the current
    /// one, implicitly staling every outstanding token.
    pub fn begin(&mut self) -> RequestToken {
        self.next += 1;
        self.current = self.next;
        RequestToken(self.next)
    }

    /// Whether a completion carrying `token` may still be committed.
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.current
    }

    /// Whether a fetch has ever been started on this slot.
    pub fn has_begun(&self) -> bool {
        self.current != 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_begin_stales_older_token() {
        let mut seq = RequestSeq::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn out_of_order_completion_keeps_latest() {
        // Two lookups fired back to back; the first completes last.
        let mut seq = RequestSeq::new();
        let stale = seq.begin();
        let current = seq.begin();

        // Second lookup's reply lands first and is committed.
        assert!(seq.is_current(current));
        // First lookup's reply lands afterwards and must be dropped.
        assert!(!seq.is_current(stale));
    }

    #[test]
    fn fresh_sequence_has_no_current_token() {
        let seq = RequestSeq::new();
        assert!(!seq.has_begun());
    }
}
