use crate::commands::{CmdMessage, CmdResult};
use crate::model::{AppState, LogsStatus};

pub fn set_level(state: &mut AppState, level: LogsStatus) -> CmdResult {
    state.logs_status = level;
    CmdResult::default().with_message(CmdMessage::success(format!("Logs status set to {}.", level)))
}

/// Echoes user text. Always shown, even when logs are silenced.
pub fn log(text: &str) -> CmdResult {
    CmdResult::default().with_message(CmdMessage::info(text).always())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_level_updates_state() {
        let mut state = AppState::new();
        set_level(&mut state, LogsStatus::Silent);
        assert_eq!(state.logs_status, LogsStatus::Silent);
    }

    #[test]
    fn log_survives_silent_mode() {
        let result = log("hello there");
        assert_eq!(result.visible_messages(LogsStatus::Silent).count(), 1);
    }
}
