use crate::commands::{CmdMessage, CmdResult, PinbookPaths};
use crate::error::Result;
use crate::store::DataStore;
use std::fs;

pub fn run<S: DataStore>(store: &mut S, paths: &PinbookPaths) -> Result<CmdResult> {
    fs::create_dir_all(&paths.data_dir)?;
    let created = store.init_slot()?;

    let mut result = CmdResult::default();
    let location = store.slot_path()?;
    if created {
        result.add_message(CmdMessage::success(format!(
            "Initialized pinbook at {}",
            location.display()
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "pinbook already initialized at {} ({} records)",
            location.display(),
            store.list().len()
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::{empty_store, seeded_store};
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn creates_dir_and_empty_slot() {
        let dir = TempDir::new().unwrap();
        let paths = PinbookPaths::new(dir.path().join("data"));
        let (mut store, _) = empty_store();

        let result = run(&mut store, &paths).unwrap();
        assert!(paths.data_dir.is_dir());
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(store.backend().raw_slot("pins").as_deref(), Some("[]"));
    }

    #[test]
    fn existing_data_is_reported() {
        let dir = TempDir::new().unwrap();
        let paths = PinbookPaths::new(dir.path().to_path_buf());
        let (mut store, _) = seeded_store();

        let result = run(&mut store, &paths).unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Info);
        assert!(result.messages[0].content.contains("3 records"));
    }
}
