//! # PanCake Architecture
//!
//! PanCake is an interactive task manager. The library holds the whole task
//! state machine; the binary is a small read-eval-print loop around it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads lines, prompts, clears the screen, prints          │
//! │  - The ONLY place that knows about stdout/stdin/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Dispatcher (dispatch.rs)                                   │
//! │  - Parses a line into a Command                             │
//! │  - Gathers passwords/confirmations through a Prompter       │
//! │  - Records the line in history                              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the AppState and the store                          │
//! │  - One method per operation                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure state transitions on &mut AppState                  │
//! │  - Validate first, then mutate; report through CmdMessage   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore (JSON file), InMemoryStore    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State
//!
//! A task is just its name. It lives in exactly one of four collections:
//! regular tasks, important (pinned) tasks, secret tasks, or the trash. The
//! `complete` and `unfinished` counters always add up to the number of tasks
//! outside the trash.
//!
//! ## Logs status
//!
//! Commands report every outcome as a [`commands::CmdMessage`]. Whether it is
//! printed depends on the logs status (0 silent, 1 important, 2 verbose), see
//! [`commands::CmdMessage::visible_at`].
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`dispatch`]: Command parsing and dispatch
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`AppState`, `Status`, `LogsStatus`)
//! - [`index`]: Display indexing (p1, 1, t1, s1)
//! - [`config`]: Save file location
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
