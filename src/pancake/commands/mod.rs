//! # Command Layer
//!
//! Pure business logic. Every function here takes `&mut AppState` (or `&AppState`)
//! plus already-gathered inputs such as a password attempt or a confirmation flag,
//! and returns a [`CmdResult`]. Nothing in this layer prompts, prints or exits.
//!
//! Operations validate membership before touching state, so a failed operation
//! leaves the state exactly as it found it and only reports why through a
//! [`CmdMessage`].

use crate::index::DisplayTask;
use crate::model::LogsStatus;

pub mod history;
pub mod listing;
pub mod logs;
pub mod persistence;
pub mod pinning;
pub mod tasks;
pub mod trash;
pub mod vault;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
    /// Shown whatever the logs status is.
    pub unconditional: bool,
}

impl CmdMessage {
    fn new(level: MessageLevel, content: impl Into<String>) -> Self {
        Self {
            level,
            content: content.into(),
            unconditional: false,
        }
    }

    pub fn info(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Info, content)
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Success, content)
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Warning, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(MessageLevel::Error, content)
    }

    pub fn always(mut self) -> Self {
        self.unconditional = true;
        self
    }

    /// Whether this message is printed under the given logs status.
    ///
    /// Warnings and errors are "important"; info and success messages narrate
    /// state changes and only show up in verbose mode.
    pub fn visible_at(&self, logs: LogsStatus) -> bool {
        if self.unconditional {
            return true;
        }
        match self.level {
            MessageLevel::Warning | MessageLevel::Error => logs >= LogsStatus::Important,
            MessageLevel::Info | MessageLevel::Success => logs >= LogsStatus::Verbose,
        }
    }
}

/// Completed vs. remaining counts, as reported by `advancement`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advancement {
    pub complete: i64,
    pub unfinished: i64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_tasks: Vec<DisplayTask>,
    pub history: Vec<String>,
    pub advancement: Option<Advancement>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_tasks(mut self, tasks: Vec<DisplayTask>) -> Self {
        self.listed_tasks = tasks;
        self
    }

    pub fn with_history(mut self, history: Vec<String>) -> Self {
        self.history = history;
        self
    }

    pub fn with_advancement(mut self, advancement: Advancement) -> Self {
        self.advancement = Some(advancement);
        self
    }

    /// Appends the messages of `other`, keeping its listings only if this result has none.
    pub fn merge(&mut self, other: CmdResult) {
        if self.listed_tasks.is_empty() {
            self.listed_tasks = other.listed_tasks;
        }
        if self.history.is_empty() {
            self.history = other.history;
        }
        if self.advancement.is_none() {
            self.advancement = other.advancement;
        }
        self.messages.extend(other.messages);
    }

    /// Messages that survive the logs status gate.
    pub fn visible_messages(&self, logs: LogsStatus) -> impl Iterator<Item = &CmdMessage> {
        self.messages.iter().filter(move |m| m.visible_at(logs))
    }
}

pub(crate) fn missing(name: &str) -> CmdMessage {
    CmdMessage::warning(format!("This task doesn't exist: {}", name))
}

pub(crate) fn in_trash(name: &str) -> CmdMessage {
    CmdMessage::warning(format!("This task is in the trash: {}", name))
}

pub(crate) fn wrong_password() -> CmdMessage {
    CmdMessage::error("Wrong password.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_hides_everything_but_unconditional() {
        let result = CmdResult::default()
            .with_message(CmdMessage::error("bad"))
            .with_message(CmdMessage::success("done"))
            .with_message(CmdMessage::info("note").always());

        let shown: Vec<_> = result
            .visible_messages(LogsStatus::Silent)
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(shown, vec!["note"]);
    }

    #[test]
    fn important_shows_warnings_and_errors() {
        let result = CmdResult::default()
            .with_message(CmdMessage::warning("careful"))
            .with_message(CmdMessage::error("bad"))
            .with_message(CmdMessage::success("done"));

        assert_eq!(result.visible_messages(LogsStatus::Important).count(), 2);
        assert_eq!(result.visible_messages(LogsStatus::Verbose).count(), 3);
    }
}
