//! # CLI Layer
//!
//! This module is **one possible UI client** for PanCake. It is the only place
//! in the codebase that:
//! - Reads from stdin and writes to stdout
//! - Clears the screen
//! - Decides when the process ends
//!
//! ## Structure
//!
//! - [`setup`]: process arguments (the save file override)
//! - [`commands`]: the read loop, prompter and [`UiAction`](pancake::dispatch::UiAction) handling
//! - [`print`]: rendering of listings and messages
//! - [`text`]: static help, license and changelog text

mod commands;
mod print;
mod setup;
mod text;

pub use commands::run;
