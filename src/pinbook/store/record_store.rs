use super::backend::{validate_slot_key, StorageBackend};
use super::{DataStore, LoadReport, StoreEvent, DEFAULT_SLOT_KEY};
use crate::clock::{Clock, SystemClock};
use crate::error::{PinbookError, Result};
use crate::format::{clean_identifier, format_identifier};
use crate::model::{validate_fields, validate_name, Record, RecordId};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, info, warn};

pub struct RecordStore<B: StorageBackend> {
    backend: B,
    key: String,
    clock: Box<dyn Clock>,
    records: Vec<Record>,
    loaded: Option<LoadReport>,
    subscribers: Vec<Sender<StoreEvent>>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Store over the default slot. Nothing is read until [`DataStore::load`].
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key: DEFAULT_SLOT_KEY.to_string(),
            clock: Box::new(SystemClock::new()),
            records: Vec::new(),
            loaded: None,
            subscribers: Vec::new(),
        }
    }

    pub fn with_slot_key(mut self, key: &str) -> Result<Self> {
        validate_slot_key(key)?;
        self.key = key.to_string();
        Ok(self)
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn slot_key(&self) -> &str {
        &self.key
    }

    fn ensure_loaded(&mut self) -> Result<()> {
        if self.loaded.is_none() {
            self.load()?;
        }
        Ok(())
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|r| &r.id == id)
    }

    fn fresh_id(&self) -> RecordId {
        loop {
            let id = RecordId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    /// Writes the full collection. The only place that touches the slot after load.
    fn persist(&self, records: &[Record]) -> Result<()> {
        let payload = serde_json::to_string_pretty(records)?;
        self.backend.write_slot(&self.key, &payload)?;
        debug!(key = %self.key, count = records.len(), "persisted records");
        Ok(())
    }

    fn emit(&mut self, event: StoreEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    /// Copies an unreadable slot value aside before it gets overwritten.
    /// A value already kept in an earlier backup is not copied again.
    fn back_up(&self, raw: &str) -> Result<String> {
        let prefix = format!("{}.corrupt-", self.key);
        for existing in self.backend.slot_keys()? {
            if existing.starts_with(&prefix)
                && self.backend.read_slot(&existing)?.as_deref() == Some(raw)
            {
                debug!(backup = %existing, "unreadable value already backed up");
                return Ok(existing);
            }
        }

        let stamp = self.clock.now().format("%Y%m%dT%H%M%S%3fZ");
        let backup_key = format!("{}.corrupt-{}", self.key, stamp);
        self.backend.write_slot(&backup_key, raw)?;
        Ok(backup_key)
    }

    /// Backs up `raw`, then rewrites the slot with what could be recovered from it,
    /// so the next load starts from clean data.
    fn repair(&self, raw: &str, recovered: &[Record]) -> Result<String> {
        let backup_key = self.back_up(raw)?;
        self.persist(recovered)?;
        Ok(backup_key)
    }

    fn read_records(&self) -> Result<(Vec<Record>, LoadReport)> {
        let mut report = LoadReport::default();

        let raw = match self.backend.read_slot(&self.key)? {
            Some(raw) if !raw.trim().is_empty() && raw.trim() != "null" => raw,
            _ => {
                report.slot_missing = true;
                return Ok((Vec::new(), report));
            }
        };

        let parsed: Vec<Record> = match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                let backup_key = self.repair(&raw, &[])?;
                warn!(
                    key = %self.key,
                    backup = %backup_key,
                    error = %e,
                    "stored records are unreadable, starting empty"
                );
                report.backup_key = Some(backup_key);
                return Ok((Vec::new(), report));
            }
        };

        let mut seen = HashSet::new();
        let total = parsed.len();
        let records: Vec<Record> = parsed
            .into_iter()
            .filter(|r| seen.insert(r.id.clone()))
            .collect();

        report.dropped_duplicates = total - records.len();
        if report.dropped_duplicates > 0 {
            let backup_key = self.repair(&raw, &records)?;
            warn!(
                key = %self.key,
                backup = %backup_key,
                dropped = report.dropped_duplicates,
                "stored records contain duplicate ids, keeping the first of each"
            );
            report.backup_key = Some(backup_key);
        }

        Ok((records, report))
    }
}

impl<B: StorageBackend> DataStore for RecordStore<B> {
    fn load(&mut self) -> Result<LoadReport> {
        if let Some(report) = &self.loaded {
            return Ok(report.clone());
        }

        let (records, mut report) = self.read_records()?;
        report.record_count = records.len();
        debug!(key = %self.key, count = records.len(), "loaded records");

        self.records = records;
        self.loaded = Some(report.clone());
        Ok(report)
    }

    fn add(&mut self, name: &str, raw_identifier: &str) -> Result<Record> {
        validate_fields(name, raw_identifier)?;
        self.ensure_loaded()?;

        let record = Record::new(
            self.fresh_id(),
            name.trim().to_string(),
            format_identifier(raw_identifier),
            self.clock.now(),
        );

        let mut next = self.records.clone();
        next.push(record.clone());
        self.persist(&next)?;
        self.records = next;

        info!(id = %record.id, "record added");
        self.emit(StoreEvent::Added(record.clone()));
        Ok(record)
    }

    fn update(&mut self, id: &RecordId, name: &str, raw_identifier: &str) -> Result<Record> {
        self.ensure_loaded()?;

        // Older data may hold identifiers past today's limit; resubmitting one unchanged is fine.
        let pos = self.position(id);
        let identifier_unchanged = pos.is_some_and(|p| {
            clean_identifier(&self.records[p].identifier) == clean_identifier(raw_identifier)
        });
        if identifier_unchanged {
            validate_name(name)?;
        } else {
            validate_fields(name, raw_identifier)?;
        }

        let pos = pos.ok_or_else(|| PinbookError::RecordNotFound(id.to_string()))?;

        let mut next = self.records.clone();
        let before = next[pos].clone();
        let now = self.clock.now();
        {
            let record = &mut next[pos];
            record.name = name.trim().to_string();
            record.identifier = format_identifier(raw_identifier);
            record.updated_at = now.max(before.updated_at);
        }
        let after = next[pos].clone();

        self.persist(&next)?;
        self.records = next;

        info!(id = %after.id, "record updated");
        self.emit(StoreEvent::Updated {
            before,
            after: after.clone(),
        });
        Ok(after)
    }

    fn delete(&mut self, id: &RecordId) -> Result<Option<Record>> {
        self.ensure_loaded()?;

        let mut next = self.records.clone();
        let removed = self.position(id).map(|pos| next.remove(pos));

        self.persist(&next)?;
        self.records = next;

        match &removed {
            Some(record) => {
                info!(id = %record.id, "record deleted");
                self.emit(StoreEvent::Deleted(record.clone()));
            }
            None => debug!(id = %id, "delete of unknown record"),
        }
        Ok(removed)
    }

    fn list(&self) -> &[Record] {
        &self.records
    }

    fn get(&self, id: &RecordId) -> Option<&Record> {
        self.records.iter().find(|r| &r.id == id)
    }

    fn init_slot(&mut self) -> Result<bool> {
        let report = self.load()?;
        if !report.slot_missing {
            return Ok(false);
        }
        let written = self
            .backend
            .read_slot(&self.key)?
            .is_some_and(|raw| !raw.trim().is_empty() && raw.trim() != "null");
        if written {
            return Ok(false);
        }
        self.persist(&self.records)?;
        Ok(true)
    }

    fn subscribe(&mut self) -> Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    fn slot_path(&self) -> Result<PathBuf> {
        self.backend.slot_path(&self.key)
    }
}
