use crate::commands::{in_trash, missing, wrong_password, CmdMessage, CmdResult};
use crate::model::{AppState, Collection, Status, TaskList};

/// Adds a new unfinished task.
///
/// Names are unique across every collection, trash included.
pub fn add(state: &mut AppState, name: &str) -> CmdResult {
    let result = CmdResult::default();
    match state.locate(name) {
        Some(Collection::Trash) => result.with_message(CmdMessage::warning(format!(
            "This task is in the trash, recover it instead: {}",
            name
        ))),
        Some(_) => result.with_message(CmdMessage::warning("Task already added.")),
        None => {
            state.tasks.insert(name.to_string(), Status::Unfinished);
            state.count_in(Status::Unfinished);
            result.with_message(CmdMessage::success(format!("Task added: {}", name)))
        }
    }
}

/// Moves a regular or pinned task to the trash. Its status is dropped.
pub fn remove(state: &mut AppState, name: &str) -> CmdResult {
    let result = CmdResult::default();
    let removed = match state.locate(name) {
        Some(Collection::Tasks) => state.tasks.shift_remove(name),
        Some(Collection::Important) => state.important.shift_remove(name),
        Some(Collection::Trash) => {
            return result.with_message(CmdMessage::warning(format!(
                "This task is already in the trash: {}",
                name
            )))
        }
        Some(Collection::Secrets) | None => return result.with_message(missing(name)),
    };

    match removed {
        Some(status) => {
            state.count_out(status);
            state.trash.push(name.to_string());
            result.with_message(CmdMessage::success(format!(
                "Task moved to the trash: {}",
                name
            )))
        }
        None => result.with_message(missing(name)),
    }
}

/// Trashes every regular task. Pinned tasks stay.
pub fn remove_all(state: &mut AppState) -> CmdResult {
    let names: Vec<String> = state.tasks.keys().cloned().collect();
    if names.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No tasks to remove."));
    }

    let mut result = CmdResult::default();
    for name in names {
        result.merge(remove(state, &name));
    }
    result
}

/// Marks a task complete. Secret tasks need the vault password.
pub fn complete(state: &mut AppState, name: &str, password: Option<&str>) -> CmdResult {
    set_status(state, name, Status::Complete, password)
}

/// Marks a task unfinished. Secret tasks need the vault password.
pub fn unfinish(state: &mut AppState, name: &str, password: Option<&str>) -> CmdResult {
    set_status(state, name, Status::Unfinished, password)
}

/// Completes every unfinished regular and pinned task.
pub fn full_complete(state: &mut AppState) -> CmdResult {
    set_all(state, Status::Complete)
}

/// Reopens every complete regular and pinned task.
pub fn full_unfinish(state: &mut AppState) -> CmdResult {
    set_all(state, Status::Unfinished)
}

fn set_status(
    state: &mut AppState,
    name: &str,
    target: Status,
    password: Option<&str>,
) -> CmdResult {
    let result = CmdResult::default();
    let collection = match state.locate(name) {
        Some(Collection::Trash) => return result.with_message(in_trash(name)),
        None => return result.with_message(missing(name)),
        Some(Collection::Secrets) if !password.is_some_and(|p| state.unlocks(p)) => {
            return result.with_message(wrong_password())
        }
        Some(collection) => collection,
    };

    let Some(list) = live_list(state, collection) else {
        return result.with_message(missing(name));
    };
    let Some(current) = list.get_mut(name) else {
        return result.with_message(missing(name));
    };

    if *current == target {
        let notice = match target {
            Status::Complete => "Task already complete.",
            Status::Unfinished => "This task is already unfinished.",
        };
        return result.with_message(CmdMessage::warning(notice));
    }

    *current = target;
    state.count_flip(target.opposite());

    let verb = match target {
        Status::Complete => "completed",
        Status::Unfinished => "marked unfinished",
    };
    result.with_message(CmdMessage::success(format!("Task {}: {}", verb, name)))
}

fn set_all(state: &mut AppState, target: Status) -> CmdResult {
    let from = target.opposite();
    let mut flipped = 0;
    for list in [&mut state.important, &mut state.tasks] {
        for status in list.values_mut().filter(|s| **s == from) {
            *status = target;
            flipped += 1;
        }
    }
    for _ in 0..flipped {
        state.count_flip(from);
    }

    let result = CmdResult::default();
    match (flipped, target) {
        (0, Status::Complete) => result.with_message(CmdMessage::info("No unfinished tasks.")),
        (0, Status::Unfinished) => result.with_message(CmdMessage::info("No completed tasks.")),
        (n, Status::Complete) => {
            result.with_message(CmdMessage::success(format!("Completed {} tasks.", n)))
        }
        (n, Status::Unfinished) => result.with_message(CmdMessage::success(format!(
            "Marked {} tasks unfinished.",
            n
        ))),
    }
}

/// The status-carrying list behind a collection.
pub(crate) fn live_list(state: &mut AppState, collection: Collection) -> Option<&mut TaskList> {
    match collection {
        Collection::Tasks => Some(&mut state.tasks),
        Collection::Important => Some(&mut state.important),
        Collection::Secrets => Some(&mut state.secrets),
        Collection::Trash => None,
    }
}
