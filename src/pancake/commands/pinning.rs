use crate::commands::{in_trash, missing, CmdMessage, CmdResult};
use crate::model::{AppState, Collection};

/// Moves a regular task to the important list, keeping its status.
pub fn pin(state: &mut AppState, name: &str) -> CmdResult {
    let result = CmdResult::default();
    match state.locate(name) {
        Some(Collection::Tasks) => {
            if let Some(status) = state.tasks.shift_remove(name) {
                if let Some(replaced) = state.important.insert(name.to_string(), status) {
                    state.count_out(replaced);
                }
            }
            result.with_message(CmdMessage::success(format!("Task pinned: {}", name)))
        }
        Some(Collection::Important) => {
            result.with_message(CmdMessage::warning("You already pinned this task."))
        }
        Some(Collection::Trash) => result.with_message(in_trash(name)),
        Some(Collection::Secrets) | None => result.with_message(missing(name)),
    }
}

/// Moves an important task back to the regular list, keeping its status.
pub fn unpin(state: &mut AppState, name: &str) -> CmdResult {
    let result = CmdResult::default();
    match state.locate(name) {
        Some(Collection::Important) => {
            if let Some(status) = state.important.shift_remove(name) {
                if let Some(replaced) = state.tasks.insert(name.to_string(), status) {
                    state.count_out(replaced);
                }
            }
            result.with_message(CmdMessage::success(format!("Task unpinned: {}", name)))
        }
        Some(Collection::Tasks) => {
            result.with_message(CmdMessage::warning("This task is not pinned."))
        }
        Some(Collection::Trash) => result.with_message(in_trash(name)),
        Some(Collection::Secrets) | None => result.with_message(missing(name)),
    }
}
