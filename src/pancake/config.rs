use std::env;
use std::path::{Path, PathBuf};

pub const SAVE_FILENAME: &str = "saved_tasks.json";

/// Where the session is saved. The save file path is the only setting that
/// lives outside the save file itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PancakeConfig {
    pub save_file: PathBuf,
}

impl PancakeConfig {
    /// Uses `save_file` when given, otherwise `saved_tasks.json` beside the executable.
    pub fn resolve(save_file: Option<PathBuf>) -> Self {
        let save_file = save_file.unwrap_or_else(default_save_file);
        Self { save_file }
    }

    pub fn save_file(&self) -> &Path {
        &self.save_file
    }
}

impl Default for PancakeConfig {
    fn default() -> Self {
        Self::resolve(None)
    }
}

/// `saved_tasks.json` next to the running binary, or in the working directory
/// when the binary's location is unknown.
pub fn default_save_file() -> PathBuf {
    let dir = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(SAVE_FILENAME)
}
