use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::format::clean_identifier;
use crate::index::DisplayRecord;
use crate::store::DataStore;

use super::helpers::indexed_records;

/// Lists records in stored order. A search term keeps records whose name or
/// identifier contains it, ignoring case and whitespace in identifiers.
/// Matches keep their position in the full listing.
pub fn run<S: DataStore>(store: &S, search: Option<&str>) -> Result<CmdResult> {
    let all = indexed_records(store);
    let term = search.map(str::trim).filter(|t| !t.is_empty());

    let listed: Vec<DisplayRecord> = match term {
        Some(term) => all.into_iter().filter(|dr| is_match(dr, term)).collect(),
        None => all,
    };

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(match term {
            Some(term) => format!("No records match '{}'", term),
            None => "No records yet. Add one with: pinbook add <name> <pin>".to_string(),
        }));
    }
    Ok(result.with_listed_records(listed))
}

fn is_match(dr: &DisplayRecord, term: &str) -> bool {
    let term = term.to_lowercase();
    if dr.record.name.to_lowercase().contains(&term) {
        return true;
    }
    let cleaned_term = clean_identifier(&term);
    !cleaned_term.is_empty()
        && clean_identifier(&dr.record.identifier)
            .to_lowercase()
            .contains(&cleaned_term)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::{empty_store, seeded_store};
    use crate::index::DisplayIndex;

    #[test]
    fn empty_store_lists_nothing() {
        let (store, _) = empty_store();
        let result = run(&store, None).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages.len(), 1);
    }

    #[test]
    fn lists_in_stored_order() {
        let (store, _) = seeded_store();
        let result = run(&store, None).unwrap();
        let names: Vec<_> = result
            .listed_records
            .iter()
            .map(|dr| dr.record.name.as_str())
            .collect();
        assert_eq!(names, vec!["Jane Doe", "Short", "Bob"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn search_by_name_ignores_case() {
        let (store, _) = seeded_store();
        let result = run(&store, Some("BOB")).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].index, DisplayIndex(3));
    }

    #[test]
    fn search_by_identifier_ignores_grouping() {
        let (store, _) = seeded_store();
        let result = run(&store, Some("a1234")).unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].record.name, "Jane Doe");
    }

    #[test]
    fn search_without_match() {
        let (store, _) = seeded_store();
        let result = run(&store, Some("zzz")).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "No records match 'zzz'");
    }
}
