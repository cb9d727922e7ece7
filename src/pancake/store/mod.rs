//! # Storage Layer
//!
//! The whole [`AppState`] is persisted as one JSON document. The [`DataStore`]
//! trait hides where that document lives:
//!
//! - [`fs::FileStore`]: production storage, a single `saved_tasks.json` file
//! - [`memory::InMemoryStore`]: keeps the serialized document in memory, for tests
//!
//! Both go through serde so a round trip in tests exercises the same encoding
//! as the file on disk.
//!
//! There is no locking and writes are not atomic: a crash mid-write leaves a
//! truncated file, which the next load reports as corrupted.

use crate::error::Result;
use crate::model::AppState;

pub mod fs;
pub mod memory;

/// Abstract interface for the save document.
pub trait DataStore {
    /// Reads the saved state.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet and
    /// `Err(PancakeError::Serialization)` when the document cannot be parsed.
    fn load_state(&self) -> Result<Option<AppState>>;

    /// Overwrites the saved state.
    fn save_state(&mut self, state: &AppState) -> Result<()>;

    /// Human readable location of the document, for messages.
    fn describe(&self) -> String;
}
