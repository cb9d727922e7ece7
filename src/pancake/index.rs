//! Display indexing.
//!
//! Every listing hands the UI a flat list of [`DisplayTask`] entries, each with
//! a 1-based [`DisplayIndex`] that restarts per collection:
//!
//! - `p1, p2, ...` for pinned (important) tasks
//! - `1, 2, ...` for regular tasks
//! - `t1, t2, ...` for trash entries
//! - `s1, s2, ...` for secret tasks
//!
//! Ordering follows the insertion order of the underlying collections.

use crate::model::{AppState, Status, TaskList};

/// A user-facing index for a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayIndex {
    Pinned(usize),
    Regular(usize),
    Trashed(usize),
    Secret(usize),
}

impl DisplayIndex {
    /// The bare position, without the collection prefix.
    pub fn position(&self) -> usize {
        match self {
            DisplayIndex::Pinned(i)
            | DisplayIndex::Regular(i)
            | DisplayIndex::Trashed(i)
            | DisplayIndex::Secret(i) => *i,
        }
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisplayIndex::Pinned(i) => write!(f, "p{}", i),
            DisplayIndex::Regular(i) => write!(f, "{}", i),
            DisplayIndex::Trashed(i) => write!(f, "t{}", i),
            DisplayIndex::Secret(i) => write!(f, "s{}", i),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayTask {
    pub index: DisplayIndex,
    pub name: String,
    /// `None` for trash entries.
    pub status: Option<Status>,
}

/// Pinned tasks first, then regular ones.
pub fn index_tasks(state: &AppState) -> Vec<DisplayTask> {
    let mut results = index_list(&state.important, DisplayIndex::Pinned);
    results.extend(index_list(&state.tasks, DisplayIndex::Regular));
    results
}

pub fn index_trash(state: &AppState) -> Vec<DisplayTask> {
    state
        .trash
        .iter()
        .enumerate()
        .map(|(i, name)| DisplayTask {
            index: DisplayIndex::Trashed(i + 1),
            name: name.clone(),
            status: None,
        })
        .collect()
}

pub fn index_secrets(state: &AppState) -> Vec<DisplayTask> {
    index_list(&state.secrets, DisplayIndex::Secret)
}

fn index_list(list: &TaskList, make: fn(usize) -> DisplayIndex) -> Vec<DisplayTask> {
    list.iter()
        .enumerate()
        .map(|(i, (name, status))| DisplayTask {
            index: make(i + 1),
            name: name.clone(),
            status: Some(*status),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_entries_come_first_with_their_own_numbering() {
        let mut state = AppState::new();
        state.tasks.insert("regular a".into(), Status::Unfinished);
        state.tasks.insert("regular b".into(), Status::Complete);
        state.important.insert("urgent".into(), Status::Unfinished);

        let indexed = index_tasks(&state);
        assert_eq!(indexed.len(), 3);
        assert_eq!(indexed[0].index, DisplayIndex::Pinned(1));
        assert_eq!(indexed[0].name, "urgent");
        assert_eq!(indexed[1].index, DisplayIndex::Regular(1));
        assert_eq!(indexed[2].index, DisplayIndex::Regular(2));
        assert_eq!(indexed[2].status, Some(Status::Complete));
    }

    #[test]
    fn trash_entries_have_no_status() {
        let mut state = AppState::new();
        state.trash.push("old".into());
        state.trash.push("older".into());

        let indexed = index_trash(&state);
        assert_eq!(indexed[1].index, DisplayIndex::Trashed(2));
        assert!(indexed.iter().all(|dt| dt.status.is_none()));
    }

    #[test]
    fn display_uses_prefixes() {
        assert_eq!(DisplayIndex::Pinned(2).to_string(), "p2");
        assert_eq!(DisplayIndex::Regular(3).to_string(), "3");
        assert_eq!(DisplayIndex::Trashed(1).to_string(), "t1");
        assert_eq!(DisplayIndex::Secret(4).to_string(), "s4");
        assert_eq!(DisplayIndex::Secret(4).position(), 4);
    }
}
