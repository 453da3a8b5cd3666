use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Shown when the text could not be placed on the clipboard.
pub const MANUAL_COPY_HINT: &str =
    "Kopieren nicht erlaubt. Markiere den Text und kopiere manuell (Ctrl/Cmd+C).";

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard tool available (tried: {0})")]
    Unavailable(String),

    #[error("{tool} failed: {reason}")]
    Failed { tool: String, reason: String },
}

pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// A command that reads clipboard content from stdin.
#[derive(Debug, Clone)]
pub struct CopyTool {
    pub program: String,
    pub args: Vec<String>,
}

impl CopyTool {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Clipboard backed by the platform's copy utilities.
///
/// The text is always handed over on stdin, never on the command line.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    tools: Vec<CopyTool>,
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::with_tools(platform_tools())
    }
}

impl SystemClipboard {
    pub fn with_tools(tools: Vec<CopyTool>) -> Self {
        Self { tools }
    }

    fn try_tool(tool: &CopyTool, text: &str) -> Result<bool, ClipboardError> {
        let failed = |reason: String| ClipboardError::Failed {
            tool: tool.program.clone(),
            reason,
        };

        // xclip and wl-copy fork a child that owns the selection and
        // inherits stdout/stderr, so neither may be a pipe we read to EOF.
        let mut child = match Command::new(&tool.program)
            .args(&tool.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(failed(format!("spawn: {e}"))),
        };

        // stdin is dropped at the end of this statement, the tool sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child.wait().map_err(|e| failed(format!("wait: {e}")))?;
        written.map_err(|e| failed(format!("write: {e}")))?;
        if status.success() {
            Ok(true)
        } else {
            Err(failed(format!("exited with {status}")))
        }
    }
}

impl Clipboard for SystemClipboard {
    /// Try each tool in order; the first one that succeeds wins.
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut last_failure = None;
        for tool in &self.tools {
            match Self::try_tool(tool, text) {
                Ok(true) => return Ok(()),
                Ok(false) => continue,
                Err(e) => last_failure = Some(e),
            }
        }
        Err(last_failure.unwrap_or_else(|| {
            let tried: Vec<&str> = self.tools.iter().map(|t| t.program.as_str()).collect();
            ClipboardError::Unavailable(tried.join(", "))
        }))
    }
}

#[cfg(target_os = "macos")]
fn platform_tools() -> Vec<CopyTool> {
    vec![CopyTool::new("pbcopy", &[])]
}

#[cfg(windows)]
fn platform_tools() -> Vec<CopyTool> {
    vec![CopyTool::new("clip", &[])]
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_tools() -> Vec<CopyTool> {
    vec![
        CopyTool::new("wl-copy", &[]),
        CopyTool::new("xclip", &["-selection", "clipboard"]),
        CopyTool::new("xsel", &["--clipboard", "--input"]),
    ]
}
