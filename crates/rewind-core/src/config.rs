/// Configuration for the history system.

/// Maximum number of snapshots kept in a timeline. Oldest snapshots are
/// evicted when this limit is exceeded.
const DEFAULT_MAX_DEPTH: usize = 10_000;

/// Configuration for a [`HistoryManager`](crate::HistoryManager).
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Max snapshots in the timeline. A commit that grows the timeline past
    /// this limit evicts the oldest entries.
    pub max_depth: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
