use super::DataStore;
use crate::error::{PancakeError, Result};
use crate::model::AppState;

/// In-memory storage for testing and development.
/// Holds the serialized document, does NOT persist it.
#[derive(Default)]
pub struct InMemoryStore {
    document: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw JSON last written, if any.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl DataStore for InMemoryStore {
    fn load_state(&self) -> Result<Option<AppState>> {
        if self.fail_reads {
            return Err(PancakeError::Store("read refused".to_string()));
        }
        match &self.document {
            Some(raw) => {
                let state = serde_json::from_str(raw).map_err(PancakeError::Serialization)?;
                Ok(Some(state))
            }
            None => Ok(None),
        }
    }

    fn save_state(&mut self, state: &AppState) -> Result<()> {
        if self.fail_writes {
            return Err(PancakeError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "write refused",
            )));
        }
        self.document = Some(serde_json::to_string(state).map_err(PancakeError::Serialization)?);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    impl InMemoryStore {
        /// A store whose saved document is exactly `raw`.
        pub fn with_document(raw: &str) -> Self {
            Self {
                document: Some(raw.to_string()),
                ..Self::default()
            }
        }

        /// A store that rejects every save with an IO error.
        pub fn failing_writes() -> Self {
            Self {
                fail_writes: true,
                ..Self::default()
            }
        }

        /// A store whose document can never be read.
        pub fn failing_reads() -> Self {
            Self {
                fail_reads: true,
                ..Self::default()
            }
        }
    }
}
