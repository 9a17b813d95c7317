use crate::commands::{CmdMessage, CmdResult};
use crate::error::{PinbookError, Result};
use crate::index::RecordSelector;
use crate::model::RecordUpdate;
use crate::store::DataStore;

use super::helpers::record_by_selector;

/// Edits one record. Fields left as `None` keep their current value.
pub fn run<S: DataStore>(
    store: &mut S,
    selector: &RecordSelector,
    name: Option<&str>,
    identifier: Option<&str>,
) -> Result<CmdResult> {
    if name.is_none() && identifier.is_none() {
        return Err(PinbookError::Api(
            "Nothing to change: give a new name or PIN".to_string(),
        ));
    }

    let target = record_by_selector(store, selector)?;
    let mut edit = RecordUpdate::from_record(&target.record);
    if let Some(name) = name {
        edit.name = name.to_string();
    }
    if let Some(identifier) = identifier {
        edit.identifier = identifier.to_string();
    }

    let updated = store.update(&target.record.id, &edit.name, &edit.identifier)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated ({}): {}",
        target.index, updated.name
    )));
    Ok(result.with_affected_records(vec![updated]))
}
