use crate::error::{PinbookError, Result};
use std::process::{Command, Stdio};

/// Hands a link (`sms:`, `mailto:`) to the OS so the default app picks it up.
pub fn open_link(link: &str) -> Result<()> {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        // empty title argument so `start` does not treat the link as one
        c.args(["/C", "start", ""]);
        c
    } else {
        Command::new("xdg-open")
    };

    run(cmd.arg(link))
}

fn run(cmd: &mut Command) -> Result<()> {
    let program = cmd.get_program().to_string_lossy().into_owned();
    let status = cmd
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|e| PinbookError::Api(format!("Failed to run {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(PinbookError::Api(format!("{} could not open the link", program)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_api_error() {
        let result = run(&mut Command::new("pinbook-no-such-launcher"));
        assert!(matches!(result, Err(PinbookError::Api(_))));
    }
}
