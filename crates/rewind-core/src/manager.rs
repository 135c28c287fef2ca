/// Linear undo/redo manager over captured snapshots.
///
/// The timeline is a single ordered sequence with a cursor marking the
/// current position. Committing while the cursor sits behind the newest
/// entry first discards everything after the cursor; the abandoned redo
/// entries are unrecoverable.
use crate::config::HistoryConfig;
use crate::snapshot::Snapshot;

/// Manages the undo/redo timeline for a single tracked state.
///
/// The manager never touches a [`StateHolder`](crate::StateHolder); the
/// owning application captures snapshots from the holder, hands them to
/// [`commit`](Self::commit), and applies the snapshots returned by
/// [`undo`](Self::undo)/[`redo`](Self::redo) back to the holder.
///
/// All operations are infallible. Undo at the oldest entry, redo at the
/// newest, and any read on an empty timeline are ordinary boundary
/// outcomes signalled with `None`.
pub struct HistoryManager<T> {
    /// Committed snapshots, oldest first.
    snapshots: Vec<Snapshot<T>>,
    /// Index of the current snapshot; `None` while nothing is committed.
    cursor: Option<usize>,
    /// Configuration parameters.
    config: HistoryConfig,
}

impl<T> std::fmt::Debug for HistoryManager<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HistoryManager")
            .field("len", &self.snapshots.len())
            .field("cursor", &self.cursor)
            .field("max_depth", &self.config.max_depth)
            .finish()
    }
}

impl<T> Default for HistoryManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HistoryManager<T> {
    /// Creates an empty manager with the default configuration.
    pub fn new() -> Self {
        Self::with_config(HistoryConfig::default())
    }

    /// Creates an empty manager with the given configuration.
    pub fn with_config(config: HistoryConfig) -> Self {
        Self {
            snapshots: Vec::new(),
            cursor: None,
            config,
        }
    }

    /// Commits a snapshot as the new current entry.
    ///
    /// Entries after the cursor (the redo branch left behind by earlier
    /// undos) are discarded first, then the snapshot is appended and the
    /// cursor moves to it. If the timeline grows past the configured
    /// `max_depth`, the oldest entries are evicted.
    pub fn commit(&mut self, snapshot: Snapshot<T>) {
        if let Some(cursor) = self.cursor {
            let discarded = self.snapshots.len().saturating_sub(cursor + 1);
            if discarded > 0 {
                tracing::debug!(discarded, "commit discards redo entries");
            }
            self.snapshots.truncate(cursor + 1);
        }
        self.snapshots.push(snapshot);

        if self.snapshots.len() > self.config.max_depth {
            let excess = self.snapshots.len() - self.config.max_depth;
            tracing::debug!(evicted = excess, "timeline at max depth, evicting oldest");
            self.snapshots.drain(..excess);
        }
        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Steps the cursor back one entry and returns the snapshot there.
    ///
    /// Returns `None` without changing anything when the cursor is already
    /// at the oldest entry or the timeline is empty.
    pub fn undo(&mut self) -> Option<&Snapshot<T>> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.snapshots.get(cursor - 1)
    }

    /// Steps the cursor forward one entry and returns the snapshot there.
    ///
    /// Returns `None` without changing anything when the cursor is already
    /// at the newest entry or the timeline is empty.
    pub fn redo(&mut self) -> Option<&Snapshot<T>> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.snapshots.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.snapshots.get(cursor + 1)
    }

    /// Returns the snapshot at the cursor, if any.
    ///
    /// Pure read; never moves the cursor.
    pub fn current(&self) -> Option<&Snapshot<T>> {
        self.snapshots.get(self.cursor?)
    }

    /// Whether a call to [`undo`](Self::undo) would return a snapshot.
    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|c| c > 0)
    }

    /// Whether a call to [`redo`](Self::redo) would return a snapshot.
    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|c| c + 1 < self.snapshots.len())
    }

    /// Number of snapshots in the timeline.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether the timeline holds no snapshots.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the current snapshot, oldest = 0. `None` while empty.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The committed snapshots, oldest first.
    ///
    /// Read-only view for inspection and display.
    pub fn snapshots(&self) -> &[Snapshot<T>] {
        &self.snapshots
    }

    /// Discards all snapshots and returns to the empty state.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
    }
}
