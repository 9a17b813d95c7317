use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, name: &str, identifier: &str) -> Result<CmdResult> {
    let record = store.add(name, identifier)?;
    let index = DisplayIndex(store.list().len());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record added ({}): {}",
        index, record.name
    )));
    Ok(result.with_affected_records(vec![record]))
}
