use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PancakeError, Result};
use crate::model::AppState;
use crate::store::DataStore;

/// Writes the whole state. Store failures propagate: a failed save is fatal.
pub fn save<S: DataStore>(store: &mut S, state: &AppState) -> Result<CmdResult> {
    store.save_state(state)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Saved to {}.", store.describe())).always()))
}

/// Replaces the state with the saved one.
///
/// A missing or unreadable document is reported and leaves `state` alone.
/// Names held by more than one collection are merged, then counters that
/// disagree with the collections are recomputed.
pub fn load<S: DataStore>(store: &S, state: &mut AppState) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    match store.load_state() {
        Ok(Some(mut loaded)) => {
            if loaded.dedupe() {
                result.add_message(CmdMessage::warning(
                    "Saved tasks listed in more than one place have been merged.",
                ));
            }
            if !loaded.counters_consistent() {
                loaded.recount();
                result.add_message(CmdMessage::warning(
                    "Saved counters were out of sync and have been recalculated.",
                ));
            }
            *state = loaded;
            result.add_message(CmdMessage::success("Tasks loaded successfully.").always());
        }
        Ok(None) => result.add_message(CmdMessage::warning("No saved tasks found.")),
        Err(PancakeError::Serialization(_)) => result.add_message(CmdMessage::error(
            "Error loading tasks. File may be corrupted.",
        )),
        Err(PancakeError::Store(reason)) => result.add_message(CmdMessage::error(format!(
            "Error loading tasks: {}",
            reason
        ))),
        Err(e) => return Err(e),
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{history, pinning, tasks, trash, vault};
    use crate::model::{LogsStatus, Status};
    use crate::store::memory::InMemoryStore;

    fn busy_state() -> AppState {
        let mut state = AppState::new();
        tasks::add(&mut state, "buy milk");
        tasks::add(&mut state, "pay rent");
        tasks::add(&mut state, "call mom");
        tasks::add(&mut state, "old idea");
        tasks::complete(&mut state, "buy milk", None);
        pinning::pin(&mut state, "pay rent");
        tasks::remove(&mut state, "old idea");
        vault::set_password(&mut state, "", "pw", "pw");
        vault::hide(&mut state, "call mom", "pw");
        state.logs_status = LogsStatus::Verbose;
        history::record(&mut state, "new buy milk");
        state
    }

    #[test]
    fn save_then_load_is_exact() {
        let mut store = InMemoryStore::new();
        let original = busy_state();
        save(&mut store, &original).unwrap();

        let mut restored = AppState::new();
        let result = load(&store, &mut restored).unwrap();
        assert_eq!(restored, original);
        assert_eq!(result.messages[0].content, "Tasks loaded successfully.");
    }

    #[test]
    fn missing_document_leaves_state() {
        let store = InMemoryStore::new();
        let mut state = busy_state();
        let before = state.clone();

        let result = load(&store, &mut state).unwrap();
        assert_eq!(result.messages[0].content, "No saved tasks found.");
        assert_eq!(state, before);
    }

    #[test]
    fn corrupt_document_leaves_state() {
        let store = InMemoryStore::with_document("{\"tasks\": {");
        let mut state = busy_state();
        let before = state.clone();

        let result = load(&store, &mut state).unwrap();
        assert!(result.messages[0].content.contains("File may be corrupted"));
        assert_eq!(state, before);
    }

    #[test]
    fn old_documents_load_with_defaults() {
        let store = InMemoryStore::with_document(
            r#"{"tasks": {"a": "Unfinished"}, "trash": ["b"], "complete": 0,
                "unfinished": 1, "important": {"c": "Complete"}}"#,
        );
        let mut state = AppState::new();

        let result = load(&store, &mut state).unwrap();
        assert_eq!(state.tasks.get("a"), Some(&Status::Unfinished));
        assert_eq!(state.important.get("c"), Some(&Status::Complete));
        assert_eq!(state.trash, vec!["b"]);
        assert!(state.secrets.is_empty());
        assert!(state.history.is_empty());
        assert_eq!(state.logs_status, LogsStatus::Important);
        // complete was 0 but "c" is Complete
        assert_eq!(state.complete, 1);
        assert!(result.messages[0].content.contains("recalculated"));
    }

    #[test]
    fn names_held_twice_are_merged_on_load() {
        let store = InMemoryStore::with_document(
            r#"{"tasks": {"a": "Complete"}, "trash": ["a"], "complete": 1, "unfinished": 0}"#,
        );
        let mut state = AppState::new();

        let result = load(&store, &mut state).unwrap();
        assert!(result.messages[0].content.contains("merged"));
        assert!(state.trash.is_empty());

        trash::recover(&mut state, "a");
        assert_eq!(state.tasks.get("a"), Some(&Status::Complete));
        assert_eq!((state.complete, state.unfinished), (1, 0));
        assert!(state.counters_consistent());
    }

    #[test]
    fn unreadable_store_is_reported() {
        let store = InMemoryStore::failing_reads();
        let mut state = busy_state();
        let before = state.clone();

        let result = load(&store, &mut state).unwrap();
        assert!(result.messages[0].content.starts_with("Error loading tasks:"));
        assert_eq!(state, before);
    }

    #[test]
    fn recovered_trash_survives_round_trip() {
        let mut store = InMemoryStore::new();
        let mut state = busy_state();
        trash::recover(&mut state, "old idea");
        save(&mut store, &state).unwrap();

        let mut restored = AppState::new();
        load(&store, &mut restored).unwrap();
        assert_eq!(restored.tasks.get("old idea"), Some(&Status::Unfinished));
        assert!(restored.counters_consistent());
    }

    #[test]
    fn save_failure_propagates() {
        let mut store = InMemoryStore::failing_writes();
        let state = busy_state();
        assert!(matches!(
            save(&mut store, &state),
            Err(PancakeError::Io(_))
        ));
    }
}
