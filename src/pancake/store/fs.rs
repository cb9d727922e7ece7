use super::DataStore;
use crate::error::{PancakeError, Result};
use crate::model::AppState;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(PancakeError::Io)?;
            }
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_state(&self) -> Result<Option<AppState>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(PancakeError::Store(format!(
                    "can't read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        let state: AppState =
            serde_json::from_str(&content).map_err(PancakeError::Serialization)?;
        Ok(Some(state))
    }

    fn save_state(&mut self, state: &AppState) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(state).map_err(PancakeError::Serialization)?;
        fs::write(&self.path, content).map_err(PancakeError::Io)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
