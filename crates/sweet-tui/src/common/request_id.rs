//! Request identifiers for latest-only async results.
//!
//! Search queries race: a slower request issued earlier may complete after a
//! newer one. Display state must reflect the most recently *issued* request,
//! so each search carries an id and responses whose id is no longer the
//! active one are dropped.

/// Opaque request id for matching async results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// Tracks the latest active request and ignores stale results.
#[derive(Debug, Default)]
pub struct LatestOnly {
    next: u64,
    active: Option<RequestId>,
}

impl LatestOnly {
    /// Start a new request and mark it as active, superseding any earlier one.
    pub fn begin(&mut self) -> RequestId {
        let id = RequestId(self.next);
        self.next += 1;
        self.active = Some(id);
        id
    }

    /// Returns true if the provided id is still the active request.
    pub fn is_active(&self, id: RequestId) -> bool {
        self.active == Some(id)
    }

    /// Returns true if any request is in flight.
    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// Finish the request if it's still active.
    ///
    /// Returns true when the result should be applied and false when it is
    /// stale and must be dropped.
    pub fn finish_if_active(&mut self, id: RequestId) -> bool {
        if self.is_active(id) {
            self.active = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_request_supersedes_older() {
        let mut latest = LatestOnly::default();
        let first = latest.begin();
        let second = latest.begin();

        // The second (newer) request completes first and is applied.
        assert!(latest.finish_if_active(second));
        // The first arrives late and is dropped.
        assert!(!latest.finish_if_active(first));
    }

    #[test]
    fn in_order_completion_applies_normally() {
        let mut latest = LatestOnly::default();
        let id = latest.begin();
        assert!(latest.has_active());
        assert!(latest.finish_if_active(id));
        assert!(!latest.has_active());
    }
}
