//! # API Facade
//!
//! The single entry point for pinbook operations, whatever the UI. It parses
//! selectors, dispatches to `commands/*.rs` and returns `Result<CmdResult>`.
//! No printing, no process exits.
//!
//! `PinbookApi<S: DataStore>` is generic over the store: production uses
//! `RecordStore<FsBackend>`, tests `RecordStore<MemBackend>`.
//!
//! The API also owns the loaded [`PinbookConfig`], since sharing reads its label
//! and subject. A successful `config` set refreshes it.
//!
//! Read operations see what the store has loaded; call [`PinbookApi::load`] first
//! (the [`crate::init`] context does).

use crate::commands;
use crate::config::PinbookConfig;
use crate::error::Result;
use crate::index::{parse_selectors, RecordSelector};
use crate::share::ShareTarget;
use crate::store::{DataStore, LoadReport, StoreEvent};
use std::sync::mpsc::Receiver;

pub struct PinbookApi<S: DataStore> {
    store: S,
    paths: commands::PinbookPaths,
    config: PinbookConfig,
}

impl<S: DataStore> PinbookApi<S> {
    pub fn new(store: S, paths: commands::PinbookPaths, config: PinbookConfig) -> Self {
        Self {
            store,
            paths,
            config,
        }
    }

    pub fn load(&mut self) -> Result<LoadReport> {
        self.store.load()
    }

    pub fn add_record(&mut self, name: &str, identifier: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, identifier)
    }

    pub fn update_record(
        &mut self,
        selector: &str,
        name: Option<&str>,
        identifier: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let selector: RecordSelector = selector.parse()?;
        commands::update::run(&mut self.store, &selector, name, identifier)
    }

    pub fn delete_records<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn list_records(&self, search: Option<&str>) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, search)
    }

    pub fn view_records<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn share_record(
        &self,
        selector: &str,
        target: ShareTarget,
    ) -> Result<commands::CmdResult> {
        let selector: RecordSelector = selector.parse()?;
        commands::share::run(&self.store, &self.config, &selector, target)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let is_set = matches!(action, ConfigAction::Set(..));
        let result = commands::config::run(&self.paths, action)?;
        if is_set {
            if let Some(config) = &result.config {
                self.config = config.clone();
            }
        }
        Ok(result)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        commands::init::run(&mut self.store, &self.paths)
    }

    pub fn subscribe(&mut self) -> Receiver<StoreEvent> {
        self.store.subscribe()
    }

    pub fn paths(&self) -> &commands::PinbookPaths {
        &self.paths
    }

    pub fn current_config(&self) -> &PinbookConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, PinbookPaths, SharePayload};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::fixtures::{empty_store, TestStore};
    use crate::error::PinbookError;
    use tempfile::TempDir;

    fn api(dir: &TempDir) -> PinbookApi<TestStore> {
        let (store, _) = empty_store();
        let mut api = PinbookApi::new(
            store,
            PinbookPaths::new(dir.path().to_path_buf()),
            PinbookConfig::default(),
        );
        api.load().unwrap();
        api
    }

    #[test]
    fn add_then_list() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        api.add_record("Jane Doe", "A123456789").unwrap();

        let listed = api.list_records(None).unwrap().listed_records;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].record.identifier, "A12 3456 789");
    }

    #[test]
    fn selectors_are_parsed() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        api.add_record("A", "1").unwrap();

        assert_eq!(api.view_records(&["1"]).unwrap().listed_records.len(), 1);
        assert!(matches!(
            api.view_records(&["0"]),
            Err(PinbookError::Api(_))
        ));
        assert!(matches!(
            api.update_record("x", Some("B"), None),
            Err(PinbookError::Api(_))
        ));
    }

    #[test]
    fn update_and_delete_dispatch() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        api.add_record("A", "1").unwrap();
        api.add_record("B", "2").unwrap();

        api.update_record("2", None, Some("3")).unwrap();
        assert_eq!(api.store().list()[1].identifier, "3");

        let deleted = api.delete_records(&["1"]).unwrap();
        assert_eq!(deleted.affected_records[0].name, "A");
        assert_eq!(api.store().list().len(), 1);
    }

    #[test]
    fn config_set_refreshes_share_label() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        api.add_record("Jane", "12345").unwrap();
        api.config(ConfigAction::Set("identifier-label".into(), "Code".into()))
            .unwrap();

        let share = api
            .share_record("1", ShareTarget::Clipboard)
            .unwrap()
            .share
            .unwrap();
        assert_eq!(share.text, "Jane\nCode: 12345");
        assert_eq!(api.current_config().identifier_label, "Code");
    }

    #[test]
    fn subscribers_see_api_mutations() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        let rx = api.subscribe();
        api.add_record("A", "1").unwrap();
        assert!(matches!(rx.try_recv().unwrap(), StoreEvent::Added(_)));
    }

    #[test]
    fn init_writes_slot() {
        let dir = TempDir::new().unwrap();
        let mut api = api(&dir);
        api.init().unwrap();
        assert_eq!(api.store().backend().raw_slot("pins").as_deref(), Some("[]"));
        assert_eq!(api.paths().data_dir, dir.path());
    }
}
