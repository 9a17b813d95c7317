use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::RecordSelector;
use crate::store::DataStore;

use super::helpers::records_by_selectors;

pub fn run<S: DataStore>(store: &S, selectors: &[RecordSelector]) -> Result<CmdResult> {
    let records = records_by_selectors(store, selectors)?;
    Ok(CmdResult::default().with_listed_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::seeded_store;
    use crate::index::parse_selectors;

    #[test]
    fn views_selected_records() {
        let (store, _) = seeded_store();
        let id_prefix = store.list()[2].id.as_str()[..8].to_string();
        let selectors = parse_selectors(&["2".to_string(), id_prefix]).unwrap();

        let result = run(&store, &selectors).unwrap();
        let names: Vec<_> = result
            .listed_records
            .iter()
            .map(|dr| dr.record.name.as_str())
            .collect();
        assert_eq!(names, vec!["Short", "Bob"]);
    }
}
