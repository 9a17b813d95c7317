use crate::error::Result;
use crate::index::{index_records, resolve, resolve_all, DisplayRecord, RecordSelector};
use crate::store::DataStore;

pub fn indexed_records<S: DataStore>(store: &S) -> Vec<DisplayRecord> {
    index_records(store.list())
}

pub fn record_by_selector<S: DataStore>(
    store: &S,
    selector: &RecordSelector,
) -> Result<DisplayRecord> {
    resolve(store.list(), selector)
}

pub fn records_by_selectors<S: DataStore>(
    store: &S,
    selectors: &[RecordSelector],
) -> Result<Vec<DisplayRecord>> {
    resolve_all(store.list(), selectors)
}
