use crate::commands::{missing, CmdMessage, CmdResult};
use crate::model::{AppState, Collection, Status};

/// Brings a trashed task back as unfinished. Its old status is not restored.
pub fn recover(state: &mut AppState, name: &str) -> CmdResult {
    let result = CmdResult::default();
    let live = matches!(
        state.locate(name),
        Some(Collection::Tasks | Collection::Important | Collection::Secrets)
    );
    if !state.take_from_trash(name) {
        return result.with_message(not_trashed(state, name));
    }
    // A stale trash entry of a live task is only dropped.
    if live {
        return result.with_message(CmdMessage::warning(format!(
            "'{}' is already a task, its trash entry was dropped.",
            name
        )));
    }
    state.tasks.insert(name.to_string(), Status::Unfinished);
    state.count_in(Status::Unfinished);
    result.with_message(CmdMessage::success(format!("Task recovered: {}", name)))
}

/// Brings every trashed task back as unfinished and empties the trash.
pub fn recover_all(state: &mut AppState) -> CmdResult {
    if state.trash.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("The trash is empty.").always());
    }

    let names = std::mem::take(&mut state.trash);
    let mut recovered = 0;
    for name in names {
        // Duplicate trash entries collapse into one task.
        if state.locate(&name).is_some() {
            continue;
        }
        state.tasks.insert(name, Status::Unfinished);
        state.count_in(Status::Unfinished);
        recovered += 1;
    }

    CmdResult::default().with_message(
        CmdMessage::success(format!("Recovered {} tasks from the trash.", recovered)).always(),
    )
}

/// Permanently erases one trash entry.
pub fn destroy(state: &mut AppState, name: &str) -> CmdResult {
    let result = CmdResult::default();
    if state.take_from_trash(name) {
        return result.with_message(CmdMessage::success(format!("Task destroyed: {}", name)));
    }
    result.with_message(not_trashed(state, name))
}

/// Permanently erases the whole trash, once the user has confirmed.
pub fn empty(state: &mut AppState, confirmed: bool) -> CmdResult {
    let result = CmdResult::default();
    if !confirmed {
        return result.with_message(CmdMessage::info("Operation cancelled."));
    }
    let count = state.trash.len();
    state.trash.clear();
    result.with_message(CmdMessage::success(format!(
        "Emptied the trash ({} tasks destroyed).",
        count
    )))
}

fn not_trashed(state: &AppState, name: &str) -> CmdMessage {
    match state.locate(name) {
        Some(Collection::Tasks) | Some(Collection::Important) => {
            CmdMessage::warning("This task is not in the trash.")
        }
        _ => missing(name),
    }
}
