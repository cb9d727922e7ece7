//! Password-gated secret tasks.
//!
//! Every function takes the password attempt the user typed and checks it
//! before anything else. A mismatch reports "Wrong password." and leaves the
//! state untouched.
//!
//! The password is compared in plaintext, exactly as stored. An empty stored
//! password therefore accepts an empty attempt.

use crate::commands::{wrong_password, CmdMessage, CmdResult};
use crate::index::index_secrets;
use crate::model::{AppState, Collection, Status};

/// Lists the secret tasks.
pub fn reveal(state: &AppState, password: &str) -> CmdResult {
    if !state.unlocks(password) {
        return CmdResult::default().with_message(wrong_password());
    }
    let listed = index_secrets(state);
    let result = CmdResult::default();
    if listed.is_empty() {
        return result.with_message(CmdMessage::info("No secret tasks."));
    }
    result.with_listed_tasks(listed)
}

/// Hides a task, or creates a new secret one if the name is unknown.
pub fn hide(state: &mut AppState, name: &str, password: &str) -> CmdResult {
    let result = CmdResult::default();
    if !state.unlocks(password) {
        return result.with_message(wrong_password());
    }

    let status = match state.locate(name) {
        Some(Collection::Tasks) => state.tasks.shift_remove(name),
        Some(Collection::Important) => state.important.shift_remove(name),
        Some(Collection::Secrets) => {
            return result.with_message(CmdMessage::warning("This task is already hidden."))
        }
        Some(Collection::Trash) => {
            return result.with_message(CmdMessage::warning(
                "This task is in the trash and can't be hidden.",
            ))
        }
        None => {
            state.secrets.insert(name.to_string(), Status::Unfinished);
            state.count_in(Status::Unfinished);
            return result.with_message(CmdMessage::success(format!(
                "Secret task added: {}",
                name
            )));
        }
    };

    if let Some(status) = status {
        state.secrets.insert(name.to_string(), status);
    }
    result.with_message(CmdMessage::success(format!("Task hidden: {}", name)))
}

/// Moves a secret task back to the regular list, keeping its status.
pub fn unhide(state: &mut AppState, name: &str, password: &str) -> CmdResult {
    let result = CmdResult::default();
    if !state.unlocks(password) {
        return result.with_message(wrong_password());
    }

    match state.secrets.shift_remove(name) {
        Some(status) => {
            state.tasks.insert(name.to_string(), status);
            result.with_message(CmdMessage::success(format!("Task unhidden: {}", name)))
        }
        None => result.with_message(CmdMessage::warning("This task is not hidden.")),
    }
}

/// Replaces the vault password after checking the current one and that both
/// entries of the new one agree.
pub fn set_password(state: &mut AppState, current: &str, new: &str, repeated: &str) -> CmdResult {
    let result = CmdResult::default();
    if !state.unlocks(current) {
        return result.with_message(wrong_password());
    }
    if new != repeated {
        return result.with_message(CmdMessage::error("Passwords don't match."));
    }
    state.secrets_password = new.to_string();
    result.with_message(CmdMessage::success("Password changed."))
}
