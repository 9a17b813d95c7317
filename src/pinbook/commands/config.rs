use crate::commands::{CmdMessage, CmdResult, PinbookPaths};
use crate::config::PinbookConfig;
use crate::error::{PinbookError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &PinbookPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = PinbookConfig::load(&paths.data_dir)?;
    match action {
        ConfigAction::ShowAll => Ok(CmdResult::default().with_config(config)),
        ConfigAction::ShowKey(key) => {
            let value = config
                .get(&key)
                .ok_or_else(|| PinbookError::Config(format!("Unknown config key: {}", key)))?;
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(value));
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&paths.data_dir)?;
            let shown = config.get(&key).unwrap_or(value);
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!("{} set to {}", key, shown)));
            Ok(result)
        }
    }
}
