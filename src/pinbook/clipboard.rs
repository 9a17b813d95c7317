use crate::error::{PinbookError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies text to the system clipboard with whatever tool the OS provides.
/// - macOS: pbcopy
/// - Linux: xclip, falling back to xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    let candidates: &[(&str, &[&str])] = if cfg!(target_os = "macos") {
        &[("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        &[("clip", &[])]
    } else {
        &[
            ("xclip", &["-selection", "clipboard"]),
            ("xsel", &["--clipboard", "--input"]),
        ]
    };

    let mut last_err = None;
    for (program, args) in candidates {
        match pipe_to(program, args, text) {
            Ok(()) => return Ok(()),
            Err(e) => last_err = Some(e),
        }
    }
    Err(last_err
        .unwrap_or_else(|| PinbookError::Api("Clipboard not supported on this platform".into())))
}

fn pipe_to(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| PinbookError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| PinbookError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| PinbookError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(PinbookError::Api(format!("{} exited with error", program)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_an_api_error() {
        let result = pipe_to("pinbook-no-such-clipboard-tool", &[], "x");
        assert!(matches!(result, Err(PinbookError::Api(_))));
    }
}
