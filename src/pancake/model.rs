use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion status of a live task. Trash entries carry none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Unfinished,
    Complete,
}

impl Status {
    pub fn opposite(self) -> Self {
        match self {
            Status::Unfinished => Status::Complete,
            Status::Complete => Status::Unfinished,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Unfinished => write!(f, "Unfinished"),
            Status::Complete => write!(f, "Complete"),
        }
    }
}

/// How chatty the dispatcher is about outcomes.
///
/// Stored as a bare integer (`0`, `1`, `2`) in the save file.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum LogsStatus {
    Silent,
    #[default]
    Important,
    Verbose,
}

impl TryFrom<u8> for LogsStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LogsStatus::Silent),
            1 => Ok(LogsStatus::Important),
            2 => Ok(LogsStatus::Verbose),
            other => Err(format!("logs status must be 0, 1 or 2 (got {})", other)),
        }
    }
}

impl From<LogsStatus> for u8 {
    fn from(value: LogsStatus) -> Self {
        match value {
            LogsStatus::Silent => 0,
            LogsStatus::Important => 1,
            LogsStatus::Verbose => 2,
        }
    }
}

impl fmt::Display for LogsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}

/// Insertion-ordered task name to status map. Enumeration order is what the user sees.
pub type TaskList = IndexMap<String, Status>;

/// The collection a task name currently lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Tasks,
    Important,
    Secrets,
    Trash,
}

/// The whole application state. This is also the save file document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppState {
    pub tasks: TaskList,
    pub important: TaskList,
    pub trash: Vec<String>,
    pub complete: i64,
    pub unfinished: i64,
    pub secrets: TaskList,
    #[serde(rename = "secrets-password")]
    pub secrets_password: String,
    #[serde(rename = "logs-status")]
    pub logs_status: LogsStatus,
    pub history: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds which collection holds `name`, if any.
    pub fn locate(&self, name: &str) -> Option<Collection> {
        if self.tasks.contains_key(name) {
            Some(Collection::Tasks)
        } else if self.important.contains_key(name) {
            Some(Collection::Important)
        } else if self.secrets.contains_key(name) {
            Some(Collection::Secrets)
        } else if self.trash.iter().any(|t| t == name) {
            Some(Collection::Trash)
        } else {
            None
        }
    }

    pub fn is_secret(&self, name: &str) -> bool {
        self.secrets.contains_key(name)
    }

    /// Plaintext exact-match check against the vault password.
    ///
    /// The password is stored and compared in the clear, so anyone with read
    /// access to the save file can read it.
    pub fn unlocks(&self, attempt: &str) -> bool {
        self.secrets_password == attempt
    }

    /// Number of tasks that carry a status.
    pub fn live_count(&self) -> usize {
        self.tasks.len() + self.important.len() + self.secrets.len()
    }

    pub fn counters_consistent(&self) -> bool {
        let (complete, unfinished) = self.tally();
        self.complete == complete && self.unfinished == unfinished
    }

    /// Rebuilds both counters from the collections.
    pub fn recount(&mut self) {
        let (complete, unfinished) = self.tally();
        self.complete = complete;
        self.unfinished = unfinished;
    }

    fn tally(&self) -> (i64, i64) {
        let statuses = self
            .tasks
            .values()
            .chain(self.important.values())
            .chain(self.secrets.values());
        let mut complete = 0;
        let mut unfinished = 0;
        for status in statuses {
            match status {
                Status::Complete => complete += 1,
                Status::Unfinished => unfinished += 1,
            }
        }
        (complete, unfinished)
    }

    pub(crate) fn count_in(&mut self, status: Status) {
        match status {
            Status::Complete => self.complete += 1,
            Status::Unfinished => self.unfinished += 1,
        }
    }

    pub(crate) fn count_out(&mut self, status: Status) {
        match status {
            Status::Complete => self.complete -= 1,
            Status::Unfinished => self.unfinished -= 1,
        }
    }

    pub(crate) fn count_flip(&mut self, from: Status) {
        self.count_out(from);
        self.count_in(from.opposite());
    }

    /// Leaves every live name in exactly one collection and drops trash
    /// entries that shadow a live task. The collection `locate` would report
    /// wins. Returns whether anything was dropped.
    pub fn dedupe(&mut self) -> bool {
        let before = self.important.len() + self.secrets.len() + self.trash.len();

        let tasks = &self.tasks;
        self.important.retain(|name, _| !tasks.contains_key(name));
        let important = &self.important;
        self.secrets
            .retain(|name, _| !tasks.contains_key(name) && !important.contains_key(name));
        let secrets = &self.secrets;
        self.trash.retain(|name| {
            !tasks.contains_key(name) && !important.contains_key(name) && !secrets.contains_key(name)
        });

        before != self.important.len() + self.secrets.len() + self.trash.len()
    }

    /// Removes the first trash entry named `name`.
    pub(crate) fn take_from_trash(&mut self, name: &str) -> bool {
        match self.trash.iter().position(|t| t == name) {
            Some(pos) => {
                self.trash.remove(pos);
                true
            }
            None => false,
        }
    }
}
