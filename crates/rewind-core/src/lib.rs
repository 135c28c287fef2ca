/// Snapshot-based linear undo/redo history.
///
/// Provides a `HistoryManager` that keeps an ordered timeline of immutable
/// `Snapshot`s with a cursor marking the current position, and a
/// `StateHolder` that mediates copying a tracked state in and out of
/// snapshots. History is a single linear timeline: committing after an undo
/// permanently discards the abandoned redo entries.
pub mod config;
pub mod manager;
pub mod snapshot;

pub use config::HistoryConfig;
pub use manager::HistoryManager;
pub use snapshot::{Snapshot, StateHolder};
