//! Browser-backed implementation of the engine's storage seam.

use makerboard_core::{RouletteStorage, STORAGE_KEY, SavedRun};

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Single-slot run store over `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalRouletteStorage;

impl LocalRouletteStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn backend() -> Result<web_sys::Storage, StorageError> {
        #[cfg(target_arch = "wasm32")]
        {
            crate::dom::local_storage()
                .map_err(|err| StorageError::Unavailable(crate::dom::js_error_message(&err)))
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Err(StorageError::Unavailable(
                "localStorage only exists in the browser".to_string(),
            ))
        }
    }
}

impl RouletteStorage for LocalRouletteStorage {
    type Error = StorageError;

    fn save_run(&self, run: &SavedRun) -> Result<(), Self::Error> {
        let text = run
            .to_json()
            .map_err(|err| StorageError::Write(err.to_string()))?;
        Self::backend()?
            .set_item(STORAGE_KEY, &text)
            .map_err(|err| StorageError::Write(crate::dom::js_error_message(&err)))
    }

    fn load_run(&self) -> Result<Option<SavedRun>, Self::Error> {
        let stored = Self::backend()?
            .get_item(STORAGE_KEY)
            .map_err(|err| StorageError::Unavailable(crate::dom::js_error_message(&err)))?;
        // A malformed payload reads as "no saved run".
        Ok(stored.as_deref().and_then(SavedRun::from_autosave))
    }

    fn delete_run(&self) -> Result<(), Self::Error> {
        Self::backend()?
            .remove_item(STORAGE_KEY)
            .map_err(|err| StorageError::Write(crate::dom::js_error_message(&err)))
    }
}
