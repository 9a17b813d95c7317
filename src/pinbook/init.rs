use crate::api::{PinbookApi, PinbookPaths};
use crate::config::PinbookConfig;
use crate::error::{PinbookError, Result};
use crate::store::fs_backend::FsBackend;
use crate::store::record_store::RecordStore;
use crate::store::LoadReport;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the data directory, mostly for tests and portable setups.
pub const DATA_DIR_ENV: &str = "PINBOOK_DATA";

pub type FsRecordStore = RecordStore<FsBackend>;

pub struct PinbookContext {
    pub api: PinbookApi<FsRecordStore>,
    pub config: PinbookConfig,
    pub load_report: LoadReport,
}

/// `$PINBOOK_DATA` when set and non-empty, the OS data directory otherwise.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "pinbook", "pinbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PinbookError::Store("Could not determine a data directory".to_string()))
}

/// Opens the store under `data_dir` and loads it.
pub fn initialize(data_dir: &Path) -> Result<PinbookContext> {
    let config = PinbookConfig::load(data_dir)?;
    let store =
        RecordStore::with_backend(FsBackend::new(data_dir.to_path_buf()))
            .with_slot_key(&config.storage_key)?;

    let mut api = PinbookApi::new(
        store,
        PinbookPaths::new(data_dir.to_path_buf()),
        config.clone(),
    );
    let load_report = api.load()?;

    Ok(PinbookContext {
        api,
        config,
        load_report,
    })
}
