use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecordSelector;
use crate::store::DataStore;

use super::helpers::records_by_selectors;

/// Deletes the selected records. All selectors are resolved before anything is
/// removed, so indexes refer to the listing the user saw.
pub fn run<S: DataStore>(store: &mut S, selectors: &[RecordSelector]) -> Result<CmdResult> {
    let targets = records_by_selectors(store, selectors)?;
    let mut result = CmdResult::default();

    for target in targets {
        if let Some(record) = store.delete(&target.record.id)? {
            result.add_message(CmdMessage::success(format!(
                "Record deleted ({}): {}",
                target.index, record.name
            )));
            result.affected_records.push(record);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::{empty_store, seeded_store};
    use crate::error::PinbookError;
    use crate::index::{parse_selectors, DisplayIndex};
    use crate::store::record_store::RecordStore;

    #[test]
    fn delete_first_of_two_leaves_second() {
        let (mut store, _) = empty_store();
        store.add("A", "1").unwrap();
        let b = store.add("B", "2").unwrap();

        run(&mut store, &[RecordSelector::Index(DisplayIndex(1))]).unwrap();

        assert_eq!(store.list(), &[b.clone()]);
        let raw = store.backend().raw_slot("pins").unwrap();
        let mut reopened = RecordStore::with_backend(
            crate::store::mem_backend::MemBackend::with_slot("pins", &raw),
        );
        reopened.load().unwrap();
        assert_eq!(reopened.list(), &[b]);
    }

    #[test]
    fn indexes_refer_to_listing_before_delete() {
        let (mut store, _) = seeded_store();
        let selectors = parse_selectors(&["1", "3"]).unwrap();
        let result = run(&mut store, &selectors).unwrap();

        let names: Vec<_> = result.affected_records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Jane Doe", "Bob"]);
        assert_eq!(store.list().len(), 1);
        assert_eq!(store.list()[0].name, "Short");
        assert_eq!(result.messages[1].content, "Record deleted (3): Bob");
    }

    #[test]
    fn unknown_selector_deletes_nothing() {
        let (mut store, _) = seeded_store();
        let selectors = parse_selectors(&["1", "7"]).unwrap();
        assert!(matches!(
            run(&mut store, &selectors),
            Err(PinbookError::RecordNotFound(_))
        ));
        assert_eq!(store.list().len(), 3);
    }
}
