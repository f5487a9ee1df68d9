//! JSON file storage adapter for the task list
//!
//! Handles persistence of tasks to a single JSON store file. The file
//! holds the full task list as one array; every save replaces the
//! previous contents.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;

use tsugi_core::Task;

use crate::error::{AppError, Result};

/// JSON storage adapter
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Create a new storage adapter for the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the storage path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted task list.
    ///
    /// A missing file, an unreadable file, and content that does not
    /// parse as a task array all count as "no saved data" and yield an
    /// empty list. Never fails; recoveries are logged.
    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }

        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("unreadable store file {}: {}", self.path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&raw) {
            Ok(tasks) => tasks,
            Err(e) => {
                warn!(
                    "discarding malformed store file {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Write the full task list, replacing any previous contents.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| AppError::io("Failed to create data directory", e))?;
        }

        let json = serde_json::to_string_pretty(tasks)?;

        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| AppError::io("Failed to open store file", e))?;
        file.write_all(json.as_bytes())
            .map_err(|e| AppError::io("Failed to write store file", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsugi_core::TaskStore;

    fn storage_in(dir: &tempfile::TempDir) -> JsonStorage {
        JsonStorage::new(dir.path().join("todos.json"))
    }

    #[test]
    fn test_load_missing_file_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_invalid_json_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), "{not json at all").unwrap();

        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_non_array_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), r#"{"id":"1","text":"x"}"#).unwrap();

        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_load_wrong_shape_yields_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        std::fs::write(storage.path(), r#"[{"id":"1","title":"wrong field"}]"#).unwrap();

        assert!(storage.load().is_empty());
    }

    #[test]
    fn test_roundtrip_preserves_all_fields() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        let mut store = TaskStore::new();
        let first = store.add_task("Buy milk", "Work").unwrap();
        store.add_task("Read book", "Personal");
        store.toggle_task(&first);

        storage.save(store.tasks()).unwrap();
        let loaded = storage.load();

        assert_eq!(loaded, store.tasks());
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        let mut store = TaskStore::new();
        store.add_task("Task 1", "Work");
        store.add_task("Task 2", "Work");
        storage.save(store.tasks()).unwrap();

        let id = store.tasks()[0].id.clone();
        store.delete_task(&id);
        storage.save(store.tasks()).unwrap();

        let loaded = storage.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].text, "Task 2");
    }

    #[test]
    fn test_save_writes_a_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);

        let mut store = TaskStore::new();
        store.add_task("Task 1", "Work");
        storage.save(store.tasks()).unwrap();

        let raw = std::fs::read_to_string(storage.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["text"], "Task 1");
        assert_eq!(value[0]["category"], "Work");
        assert_eq!(value[0]["completed"], false);
        assert!(value[0]["id"].is_string());
    }

    #[test]
    fn test_save_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(dir.path().join("nested").join("todos.json"));

        let mut store = TaskStore::new();
        store.add_task("Task 1", "Work");
        storage.save(store.tasks()).unwrap();

        assert_eq!(storage.load().len(), 1);
    }
}
