// System clipboard access through the terminal

use anyhow::{Context, Result};
use crossterm::{clipboard::CopyToClipboard, execute};
use std::io;

/// Somewhere copied post text can go
pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

/// Writes an OSC 52 sequence so the hosting terminal sets the clipboard.
///
/// Works over SSH; terminals without OSC 52 support ignore the sequence.
#[derive(Debug, Default)]
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn copy(&mut self, text: &str) -> Result<()> {
        execute!(io::stdout(), CopyToClipboard::to_clipboard_from(text))
            .context("Failed to write clipboard sequence to the terminal")
    }
}
