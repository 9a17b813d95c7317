use super::backend::{validate_slot_key, StorageBackend};
use crate::error::{PinbookError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const SLOT_PREFIX: &str = "slot-";
const SLOT_EXT: &str = ".json";

/// Slots stored as one file each under a data directory:
///
/// ```text
/// <root>/
/// ├── config.json
/// └── slot-{key}.json
/// ```
pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn slot_filename(key: &str) -> String {
        format!("{}{}{}", SLOT_PREFIX, key, SLOT_EXT)
    }

    fn slot_file(&self, key: &str) -> Result<PathBuf> {
        validate_slot_key(key)?;
        Ok(self.root.join(Self::slot_filename(key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PinbookError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_file(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(PinbookError::Io)?;
        Ok(Some(content))
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        let target = self.slot_file(key)?;
        self.ensure_dir()?;

        let tmp = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp, value).map_err(PinbookError::Io)?;
        if let Err(e) = fs::rename(&tmp, &target) {
            let _ = fs::remove_file(&tmp);
            return Err(PinbookError::Io(e));
        }
        Ok(())
    }

    fn slot_keys(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(PinbookError::Io)? {
            let path = entry.map_err(PinbookError::Io)?.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
                continue;
            };
            if let Some(key) = name
                .strip_prefix(SLOT_PREFIX)
                .and_then(|rest| rest.strip_suffix(SLOT_EXT))
            {
                if validate_slot_key(key).is_ok() {
                    keys.push(key.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        self.slot_file(key)
    }
}
