use crate::commands::{Advancement, CmdMessage, CmdResult};
use crate::index::{index_tasks, index_trash};
use crate::model::AppState;

/// Pinned tasks, then regular ones.
pub fn tasks(state: &AppState) -> CmdResult {
    let listed = index_tasks(state);
    if listed.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("No tasks."));
    }
    CmdResult::default().with_listed_tasks(listed)
}

pub fn trash(state: &AppState) -> CmdResult {
    let listed = index_trash(state);
    if listed.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("The trash is empty."));
    }
    CmdResult::default().with_listed_tasks(listed)
}

pub fn advancement(state: &AppState) -> CmdResult {
    CmdResult::default().with_advancement(Advancement {
        complete: state.complete,
        unfinished: state.unfinished,
    })
}
