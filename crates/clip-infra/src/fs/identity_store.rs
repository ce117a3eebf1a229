//! Key/value store that persists the display name between runs.

use std::fs;
use std::path::{Path, PathBuf};

use clip_core::identity::USERNAME_KEY;
use clip_core::ports::{IdentityStoreError, IdentityStorePort};
use serde_json::{Map, Value};

const STORE_FILE: &str = "local_storage.json";

/// JSON object on disk, one entry per key.
///
/// Other keys in the file are preserved on write.
pub struct FileIdentityStore {
    path: PathBuf,
}

impl FileIdentityStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(STORE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<Map<String, Value>, IdentityStoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| IdentityStoreError::Store(format!("read {}: {e}", self.path.display())))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(IdentityStoreError::Corrupt("expected a JSON object".to_string())),
            Err(e) => Err(IdentityStoreError::Corrupt(e.to_string())),
        }
    }
}

impl IdentityStorePort for FileIdentityStore {
    fn load_username(&self) -> Result<Option<String>, IdentityStoreError> {
        let map = self.read_map()?;
        Ok(map
            .get(USERNAME_KEY)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
            .map(str::to_string))
    }

    fn store_username(&self, username: &str) -> Result<(), IdentityStoreError> {
        // A corrupt file is replaced rather than blocking identity forever.
        let mut map = self.read_map().unwrap_or_default();
        map.insert(USERNAME_KEY.to_string(), Value::String(username.to_string()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| IdentityStoreError::Store(format!("create {}: {e}", parent.display())))?;
        }

        let json = serde_json::to_string_pretty(&Value::Object(map))
            .map_err(|e| IdentityStoreError::Store(e.to_string()))?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| IdentityStoreError::Store(format!("write {}: {e}", tmp.display())))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| IdentityStoreError::Store(format!("rename {}: {e}", tmp.display())))?;
        Ok(())
    }
}
