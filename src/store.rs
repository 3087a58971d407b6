use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, info};
use crate::error::StoreError;
use crate::timetable::Configuration;

/// File-backed configuration store
///
/// Reads and writes go through a process-local lock. Saves write a sibling temp file
/// and rename it over the target, so readers never see a half-written document.
pub struct ConfigStore {
    path: PathBuf,
    default: Configuration,
    lock: Mutex<()>,
}

impl ConfigStore {
    /// Creates a store at `path`, falling back to `default` while nothing has been saved
    pub fn new<P: Into<PathBuf>>(path: P, default: Configuration) -> Self {
        ConfigStore {
            path: path.into(),
            default,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The guarded value is (), so a poisoned lock carries no broken state
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Loads the persisted configuration, or the default if none has been saved
    pub fn load(&self) -> Result<Configuration, StoreError> {
        let _guard = self.guard();

        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no saved configuration, using default");
                return Ok(self.default.clone());
            }
            Err(e) => return Err(StoreError::Io(e)),
        };

        serde_json::from_str(&contents).map_err(StoreError::Malformed)
    }

    /// Replaces the persisted configuration entirely
    pub fn save(&self, config: &Configuration) -> Result<(), StoreError> {
        let _guard = self.guard();

        let json = serde_json::to_string_pretty(config).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, json)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::Io(e));
        }

        info!(
            path = %self.path.display(),
            subjects = config.subjects.len(),
            teachers = config.teachers.len(),
            rooms = config.rooms.len(),
            "configuration saved"
        );
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
