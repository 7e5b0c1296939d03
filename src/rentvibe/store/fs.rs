use super::DataStore;
use crate::error::{RentError, Result};
use crate::model::StoredUser;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use uuid::Uuid;

pub const FAVORITES_FILE: &str = "favorites.json";
pub const USERS_FILE: &str = "users.json";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RentError::Io)?;
        }
        Ok(())
    }

    fn read_json<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(T::default());
        }
        debug!(path = %path.display(), "reading");
        let content = fs::read_to_string(&path).map_err(RentError::Io)?;
        serde_json::from_str(&content).map_err(RentError::Serialization)
    }

    fn write_json<T: Serialize + ?Sized>(&self, name: &str, value: &T) -> Result<()> {
        self.ensure_dir()?;
        let path = self.root.join(name);
        let content = serde_json::to_string_pretty(value).map_err(RentError::Serialization)?;

        // Atomic write: readers see either the old or the new file, never a partial one
        let tmp_file = self.root.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(RentError::Io)?;
        fs::rename(&tmp_file, &path).map_err(RentError::Io)?;
        debug!(path = %path.display(), "written");
        Ok(())
    }
}

impl DataStore for FileStore {
    fn load_favorites(&self) -> Result<Vec<String>> {
        self.read_json(FAVORITES_FILE)
    }

    fn save_favorites(&mut self, ids: &[String]) -> Result<()> {
        self.write_json(FAVORITES_FILE, ids)
    }

    fn load_users(&self) -> Result<Vec<StoredUser>> {
        self.read_json(USERS_FILE)
    }

    fn save_users(&mut self, users: &[StoredUser]) -> Result<()> {
        self.write_json(USERS_FILE, users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn missing_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested"));
        assert!(store.load_favorites().unwrap().is_empty());
        assert!(store.load_users().unwrap().is_empty());
    }

    #[test]
    fn favorites_are_a_plain_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store
            .save_favorites(&["3".to_string(), "1".to_string()])
            .unwrap();

        let raw = fs::read_to_string(dir.path().join(FAVORITES_FILE)).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed, ["3", "1"]);
        assert_eq!(store.load_favorites().unwrap(), ["3", "1"]);
    }

    #[test]
    fn corrupt_favorites_surface_as_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FAVORITES_FILE), "{not json").unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.load_favorites(),
            Err(RentError::Serialization(_))
        ));
    }

    #[test]
    fn leaves_no_tmp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.save_favorites(&["2".to_string()]).unwrap();
        store
            .save_users(&[StoredUser {
                id: Uuid::new_v4(),
                email: "a@b.c".into(),
                password_hash: "00".into(),
                salt: "00".into(),
                iterations: 1,
                created_at: Utc::now(),
            }])
            .unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let name = entry.unwrap().file_name().to_string_lossy().to_string();
            assert!(!name.ends_with(".tmp"), "leftover tmp file: {}", name);
        }
        assert_eq!(store.load_users().unwrap().len(), 1);
    }
}
