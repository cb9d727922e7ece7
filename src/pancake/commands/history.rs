use crate::commands::{CmdMessage, CmdResult};
use crate::model::AppState;

/// Appends a raw input line. Blank lines are not recorded.
pub fn record(state: &mut AppState, line: &str) {
    if !line.trim().is_empty() {
        state.history.push(line.to_string());
    }
}

pub fn show(state: &AppState) -> CmdResult {
    if state.history.is_empty() {
        return CmdResult::default().with_message(CmdMessage::info("History is empty."));
    }
    CmdResult::default().with_history(state.history.clone())
}

pub fn clear(state: &mut AppState) -> CmdResult {
    state.history.clear();
    CmdResult::default().with_message(CmdMessage::success("History cleared."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_lines_verbatim() {
        let mut state = AppState::new();
        record(&mut state, "new  buy   milk");
        record(&mut state, "   ");
        record(&mut state, "bogus");

        assert_eq!(state.history, vec!["new  buy   milk", "bogus"]);
        assert_eq!(show(&state).history.len(), 2);
    }

    #[test]
    fn clear_empties_history() {
        let mut state = AppState::new();
        record(&mut state, "tasks");
        clear(&mut state);
        assert!(state.history.is_empty());
        assert_eq!(show(&state).messages[0].content, "History is empty.");
    }
}
