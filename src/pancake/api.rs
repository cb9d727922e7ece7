//! # API Facade
//!
//! A thin facade over the command layer. [`PancakeApi`] owns the application
//! state and the store, and every operation goes through one of its methods.
//!
//! The facade does no I/O of its own beyond what the store does on
//! `save`/`load`, never prompts and never prints. Inputs a UI has to ask the
//! user for (vault passwords, confirmations) arrive as plain arguments.
//!
//! `PancakeApi<S: DataStore>` is generic over the storage backend:
//! - Production: `PancakeApi<FileStore>`
//! - Testing: `PancakeApi<InMemoryStore>`

use crate::commands::{self, history, listing, logs, persistence, pinning, tasks, trash, vault};
use crate::error::Result;
use crate::model::{AppState, LogsStatus};
use crate::store::DataStore;

pub struct PancakeApi<S: DataStore> {
    store: S,
    state: AppState,
}

impl<S: DataStore> PancakeApi<S> {
    pub fn new(store: S) -> Self {
        Self::with_state(store, AppState::new())
    }

    pub fn with_state(store: S, state: AppState) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn logs_status(&self) -> LogsStatus {
        self.state.logs_status
    }

    pub fn list_tasks(&self) -> CmdResult {
        listing::tasks(&self.state)
    }

    pub fn list_trash(&self) -> CmdResult {
        listing::trash(&self.state)
    }

    pub fn advancement(&self) -> CmdResult {
        listing::advancement(&self.state)
    }

    pub fn add_task(&mut self, name: &str) -> CmdResult {
        tasks::add(&mut self.state, name)
    }

    pub fn remove_task(&mut self, name: &str) -> CmdResult {
        tasks::remove(&mut self.state, name)
    }

    pub fn remove_all(&mut self) -> CmdResult {
        tasks::remove_all(&mut self.state)
    }

    pub fn complete_task(&mut self, name: &str, password: Option<&str>) -> CmdResult {
        tasks::complete(&mut self.state, name, password)
    }

    pub fn unfinish_task(&mut self, name: &str, password: Option<&str>) -> CmdResult {
        tasks::unfinish(&mut self.state, name, password)
    }

    pub fn complete_all(&mut self) -> CmdResult {
        tasks::full_complete(&mut self.state)
    }

    pub fn unfinish_all(&mut self) -> CmdResult {
        tasks::full_unfinish(&mut self.state)
    }

    pub fn pin_task(&mut self, name: &str) -> CmdResult {
        pinning::pin(&mut self.state, name)
    }

    pub fn unpin_task(&mut self, name: &str) -> CmdResult {
        pinning::unpin(&mut self.state, name)
    }

    pub fn recover_task(&mut self, name: &str) -> CmdResult {
        trash::recover(&mut self.state, name)
    }

    pub fn recover_all(&mut self) -> CmdResult {
        trash::recover_all(&mut self.state)
    }

    pub fn destroy_task(&mut self, name: &str) -> CmdResult {
        trash::destroy(&mut self.state, name)
    }

    pub fn empty_trash(&mut self, confirmed: bool) -> CmdResult {
        trash::empty(&mut self.state, confirmed)
    }

    pub fn reveal_secrets(&self, password: &str) -> CmdResult {
        vault::reveal(&self.state, password)
    }

    pub fn hide_task(&mut self, name: &str, password: &str) -> CmdResult {
        vault::hide(&mut self.state, name, password)
    }

    pub fn unhide_task(&mut self, name: &str, password: &str) -> CmdResult {
        vault::unhide(&mut self.state, name, password)
    }

    pub fn set_password(&mut self, current: &str, new: &str, repeated: &str) -> CmdResult {
        vault::set_password(&mut self.state, current, new, repeated)
    }

    pub fn history(&self) -> CmdResult {
        history::show(&self.state)
    }

    pub fn clear_history(&mut self) -> CmdResult {
        history::clear(&mut self.state)
    }

    pub fn record(&mut self, line: &str) {
        history::record(&mut self.state, line)
    }

    pub fn set_logs(&mut self, level: LogsStatus) -> CmdResult {
        logs::set_level(&mut self.state, level)
    }

    pub fn log(&self, text: &str) -> CmdResult {
        logs::log(text)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        persistence::save(&mut self.store, &self.state)
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        persistence::load(&self.store, &mut self.state)
    }
}

pub use commands::{Advancement, CmdMessage, CmdResult, MessageLevel};
