use super::backend::{validate_slot_key, StorageBackend};
use crate::error::{PinbookError, Result};
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since pinbook is single-threaded.
/// This keeps the `StorageBackend` trait on `&self` without a lock.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<BTreeMap<String, String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-filled with a raw slot value, e.g. legacy or corrupt data.
    pub fn with_slot(key: &str, value: &str) -> Self {
        let backend = Self::new();
        backend
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful slot writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    /// Raw value of a slot, bypassing the trait.
    pub fn raw_slot(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn read_slot(&self, key: &str) -> Result<Option<String>> {
        validate_slot_key(key)?;
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn write_slot(&self, key: &str, value: &str) -> Result<()> {
        validate_slot_key(key)?;
        if self.simulate_write_error.get() {
            return Err(PinbookError::Store("Simulated write error".to_string()));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn slot_keys(&self) -> Result<Vec<String>> {
        Ok(self.slots.borrow().keys().cloned().collect())
    }

    fn slot_path(&self, key: &str) -> Result<PathBuf> {
        validate_slot_key(key)?;
        Ok(PathBuf::from(format!("memory://slot-{}", key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read() {
        let backend = MemBackend::new();
        assert_eq!(backend.read_slot("pins").unwrap(), None);
        backend.write_slot("pins", "[]").unwrap();
        assert_eq!(backend.read_slot("pins").unwrap().as_deref(), Some("[]"));
        assert_eq!(backend.write_count(), 1);
    }

    #[test]
    fn simulated_write_error_leaves_slot_untouched() {
        let backend = MemBackend::with_slot("pins", "[]");
        backend.set_simulate_write_error(true);
        assert!(backend.write_slot("pins", "[1]").is_err());
        assert_eq!(backend.raw_slot("pins").as_deref(), Some("[]"));
        assert_eq!(backend.write_count(), 0);
    }

    #[test]
    fn slot_keys_are_sorted() {
        let backend = MemBackend::new();
        backend.write_slot("b", "1").unwrap();
        backend.write_slot("a", "2").unwrap();
        assert_eq!(backend.slot_keys().unwrap(), vec!["a", "b"]);
    }
}
