use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use scout_core::errors::StateStoreError;
use scout_core::traits::IStateStore;

/// File-per-key JSON store.
///
/// Keys are restricted to `[a-z0-9_]` names chosen by this workspace, so no
/// path sanitization beyond that contract is applied.
pub struct JsonStateStore {
    dir: PathBuf,
}

impl JsonStateStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StateStoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StateStoreError::io(dir.display().to_string(), e))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl IStateStore for JsonStateStore {
    fn load(&self, key: &str) -> Result<Option<String>, StateStoreError> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(text)),
            Err(e) => {
                // Unreadable state is treated like missing state; the owning
                // store re-initializes to its zero value.
                warn!(key, error = %e, "state document unreadable, treating as missing");
                Ok(None)
            }
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StateStoreError> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|e| StateStoreError::io(key, e))?;
        fs::rename(&tmp, &path).map_err(|e| StateStoreError::io(key, e))?;
        Ok(())
    }
}
