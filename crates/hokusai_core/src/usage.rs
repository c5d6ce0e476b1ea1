//! Session usage accounting.

use serde::{Deserialize, Serialize};

/// Usage counters for one generation session.
///
/// Owned by the calling layer and threaded through explicitly; the
/// pipeline keeps no process-wide mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UsageMetrics {
    /// Generation requests completed this session
    pub requests_this_session: u32,
}

impl UsageMetrics {
    /// Creates zeroed usage counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed generation request.
    pub fn record_request(&mut self) {
        self.requests_this_session += 1;
    }
}
