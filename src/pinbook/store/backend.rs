use crate::error::{PinbookError, Result};
use std::path::PathBuf;

/// Abstract interface for raw slot I/O.
///
/// A slot is a named string value, the same shape as a browser's local
/// key-value storage. This trait handles the "how" (filesystem vs memory),
/// while `RecordStore` handles the "what" (records, validation, events).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if the slot was never written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_slot(&self, key: &str, value: &str) -> Result<()>;

    /// Keys of all slots currently stored.
    fn slot_keys(&self) -> Result<Vec<String>>;

    /// Where the slot lives. For FsBackend a real path, for MemBackend a virtual one.
    fn slot_path(&self, key: &str) -> Result<PathBuf>;
}

/// Slot keys end up in file names, so they are limited to a safe alphabet.
pub fn validate_slot_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(PinbookError::Store("Slot key cannot be empty".to_string()));
    }
    let valid = key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
    if !valid || key.starts_with('.') {
        return Err(PinbookError::Store(format!(
            "Invalid slot key '{}': use letters, digits, '.', '_' or '-'",
            key
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_keys() {
        assert!(validate_slot_key("pins").is_ok());
        assert!(validate_slot_key("pins.corrupt-20240501T093000Z").is_ok());
        assert!(validate_slot_key("work_pins-2").is_ok());
    }

    #[test]
    fn rejects_unsafe_keys() {
        assert!(validate_slot_key("").is_err());
        assert!(validate_slot_key("../etc").is_err());
        assert!(validate_slot_key(".hidden").is_err());
        assert!(validate_slot_key("a/b").is_err());
        assert!(validate_slot_key("with space").is_err());
    }
}
