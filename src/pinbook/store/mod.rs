//! # Storage Layer
//!
//! This module defines the storage abstraction for pinbook. The [`DataStore`] trait
//! is the only mutation surface for records; everything above it (commands, API,
//! CLI) goes through it.
//!
//! ## Write-Through Slot Model
//!
//! All records live in **one slot**: a single named value holding the whole
//! collection as a JSON array (see [`crate::model`] for the record shape).
//!
//! - **Load once**: the slot is read when the store is first used. A missing slot
//!   is an empty collection.
//! - **Write through**: every add, update and delete rewrites the full collection
//!   to the slot. There is no delta format and no batching: one mutation, one write.
//! - **Stage, then commit**: a mutation is applied to a copy first. Memory is only
//!   replaced once the write succeeded, so memory and slot never drift apart. A failed
//!   write is returned to the caller.
//!
//! ## Unreadable Data
//!
//! If the slot holds something that is not a list of records, the store starts
//! empty instead of failing, logs a warning, and copies the unreadable value to a
//! backup slot (`{key}.corrupt-{timestamp}`). The slot is then rewritten with what
//! was recovered, so later sessions load cleanly and no further backups pile up.
//! The [`LoadReport`] tells the caller this happened.
//!
//! ## Change Events
//!
//! After each successful mutation the store emits a [`StoreEvent`] to every
//! subscriber (`std::sync::mpsc` channels). UIs react to these (refresh a list,
//! close an editor) instead of the store calling into them.
//!
//! ## Implementations
//!
//! - [`record_store::RecordStore`]: the store, generic over a [`backend::StorageBackend`].
//! - [`fs_backend::FsBackend`]: production slots, one file per key.
//! - [`mem_backend::MemBackend`]: in-memory slots for testing.

use crate::error::Result;
use crate::model::{Record, RecordId};
use std::path::PathBuf;
use std::sync::mpsc::Receiver;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod record_store;

/// Default key of the slot holding the record collection.
pub const DEFAULT_SLOT_KEY: &str = "pins";

/// Outcome of loading the slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records available after loading.
    pub record_count: usize,
    /// The slot had never been written.
    pub slot_missing: bool,
    /// Set when unreadable data was found and copied aside.
    pub backup_key: Option<String>,
    /// Records dropped because their id was already taken.
    pub dropped_duplicates: usize,
}

/// Notification emitted after a mutation has been persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Added(Record),
    Updated { before: Record, after: Record },
    Deleted(Record),
}

/// Abstract interface for the record collection.
pub trait DataStore {
    /// Read the persistent slot. Only the first call reads; later calls return
    /// the first report.
    fn load(&mut self) -> Result<LoadReport>;

    /// Create a record from a name and a raw identifier.
    fn add(&mut self, name: &str, raw_identifier: &str) -> Result<Record>;

    /// Replace name and identifier of an existing record.
    fn update(&mut self, id: &RecordId, name: &str, raw_identifier: &str) -> Result<Record>;

    /// Remove a record. Removing an unknown id is a no-op.
    fn delete(&mut self, id: &RecordId) -> Result<Option<Record>>;

    /// Records in insertion order. Empty until [`DataStore::load`] ran.
    fn list(&self) -> &[Record];

    /// Look up a record by id.
    fn get(&self, id: &RecordId) -> Option<&Record>;

    /// Write an empty collection if the slot has never been written.
    /// Returns whether a write happened.
    fn init_slot(&mut self) -> Result<bool>;

    /// Receive a [`StoreEvent`] for every successful mutation from now on.
    fn subscribe(&mut self) -> Receiver<StoreEvent>;

    /// Location of the persistent slot (for display).
    fn slot_path(&self) -> Result<PathBuf>;
}
