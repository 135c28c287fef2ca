/// Core types for captured state: the snapshot and the holder that produces it.
use serde::{Deserialize, Serialize};

/// An immutable copy of a tracked state value at one instant.
///
/// A snapshot has no identity beyond its payload: two snapshots captured
/// from equal states compare equal. The payload is an independent copy, so
/// mutating the live state after capture never changes an existing snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot<T> {
    state: T,
}

impl<T: Clone> Snapshot<T> {
    /// Wraps a state value in a snapshot.
    ///
    /// [`StateHolder::capture`] is the usual way to obtain one.
    pub fn new(state: T) -> Self {
        Self { state }
    }

    /// Read-only access to the captured value.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Consumes the snapshot and returns the captured value.
    pub fn into_state(self) -> T {
        self.state
    }
}

impl<T: Clone> From<T> for Snapshot<T> {
    fn from(state: T) -> Self {
        Self::new(state)
    }
}

/// Owns the single current value of a tracked state.
///
/// The holder knows nothing about any `HistoryManager`; the owning
/// application moves snapshots between the two. In particular, restoring a
/// snapshot is not a commit and records nothing anywhere.
#[derive(Debug, Clone, Default)]
pub struct StateHolder<T> {
    state: T,
}

impl<T: Clone> StateHolder<T> {
    /// Creates a holder with an initial state.
    pub fn new(state: T) -> Self {
        Self { state }
    }

    /// Replaces the current state wholesale.
    pub fn set_state(&mut self, state: T) {
        self.state = state;
    }

    /// Read-only access to the current state.
    pub fn state(&self) -> &T {
        &self.state
    }

    /// Captures the current state as an independent snapshot.
    ///
    /// The snapshot owns a clone of the state; it never aliases the
    /// holder's live storage.
    pub fn capture(&self) -> Snapshot<T> {
        Snapshot::new(self.state.clone())
    }

    /// Overwrites the current state with the snapshot's value.
    ///
    /// The snapshot is left intact and can be restored again later.
    pub fn restore(&mut self, snapshot: &Snapshot<T>) {
        self.state = snapshot.state.clone();
    }
}
