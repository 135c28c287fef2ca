// Integration tests for the history system.
//
// These tests exercise full workflows spanning the StateHolder and
// HistoryManager together, simulating realistic usage patterns. The two
// types never talk to each other directly; every test moves snapshots
// between them by hand, the way an owning application does.

use rewind_core::{HistoryConfig, HistoryManager, StateHolder};

fn holder_and_history(initial: &str) -> (StateHolder<String>, HistoryManager<String>) {
    let holder = StateHolder::new(initial.to_string());
    let mut history = HistoryManager::new();
    history.commit(holder.capture());
    (holder, history)
}

// ── Full Workflow ──────────────────────────────────────────────────────

#[test]
fn test_set_commit_undo_redo_applies_to_holder() {
    let mut holder = StateHolder::new(String::new());
    let mut history = HistoryManager::new();

    holder.set_state("State 1".to_string());
    history.commit(holder.capture());

    holder.set_state("State 2".to_string());
    history.commit(holder.capture());

    let snapshot = history.undo().expect("undo");
    holder.restore(snapshot);
    assert_eq!(holder.state(), "State 1");

    let snapshot = history.redo().expect("redo");
    holder.restore(snapshot);
    assert_eq!(holder.state(), "State 2");
}

#[test]
fn test_editing_session_with_abandoned_redo() {
    let (mut holder, mut history) = holder_and_history("");

    // Type three words, committing after each
    for text in ["one", "one two", "one two three"] {
        holder.set_state(text.to_string());
        history.commit(holder.capture());
    }

    // Undo twice, back to "one"
    holder.restore(history.undo().expect("undo"));
    holder.restore(history.undo().expect("undo"));
    assert_eq!(holder.state(), "one");

    // Commit a different continuation; the undone entries are gone
    holder.set_state("one 2".to_string());
    history.commit(holder.capture());

    assert!(history.redo().is_none());
    let states: Vec<&str> = history
        .snapshots()
        .iter()
        .map(|s| s.state().as_str())
        .collect();
    assert_eq!(states, vec!["", "one", "one 2"]);
}

#[test]
fn test_restore_is_not_a_commit() {
    let (mut holder, mut history) = holder_and_history("start");

    holder.set_state("middle".to_string());
    history.commit(holder.capture());

    let len_before = history.len();
    let cursor_before = history.cursor();

    let snapshot = history.undo().expect("undo");
    holder.restore(snapshot);
    holder.restore(history.current().expect("current"));

    // Restores moved the holder but never touched the timeline
    assert_eq!(history.len(), len_before);
    assert_eq!(history.cursor(), cursor_before.map(|c| c - 1));
    assert_eq!(holder.state(), "start");
}

#[test]
fn test_snapshot_survives_holder_mutation() {
    let mut holder = StateHolder::new(vec![1, 2, 3]);
    let mut history = HistoryManager::new();
    history.commit(holder.capture());

    holder.set_state(vec![9, 9, 9]);
    history.commit(holder.capture());

    // Mutate again without committing, then walk back through history
    holder.set_state(vec![0]);
    holder.restore(history.undo().expect("undo"));
    assert_eq!(holder.state(), &vec![1, 2, 3]);
}

#[test]
fn test_capped_timeline_workflow() {
    let mut holder = StateHolder::new(0u32);
    let mut history = HistoryManager::with_config(HistoryConfig { max_depth: 4 });

    for i in 1..=10u32 {
        holder.set_state(i);
        history.commit(holder.capture());
    }

    assert_eq!(history.len(), 4);
    assert_eq!(history.current().expect("current").state(), &10);

    // Undo bottoms out at the oldest surviving snapshot
    while let Some(snapshot) = history.undo() {
        holder.restore(snapshot);
    }
    assert_eq!(holder.state(), &7);
}

#[test]
fn test_two_holders_one_timeline() {
    // A snapshot is a plain value; any holder can restore from it
    let mut author = StateHolder::new("draft".to_string());
    let mut reviewer = StateHolder::new(String::new());
    let mut history = HistoryManager::new();

    history.commit(author.capture());
    author.set_state("draft, revised".to_string());
    history.commit(author.capture());

    reviewer.restore(history.current().expect("current"));
    assert_eq!(reviewer.state(), "draft, revised");

    reviewer.restore(history.undo().expect("undo"));
    assert_eq!(reviewer.state(), "draft");
    assert_eq!(author.state(), "draft, revised");
}
