//! Clipboard source for uploads.

use arboard::Clipboard;

use crate::error::{GhbinError, Result};

/// Read the current clipboard text as bytes. An empty clipboard is an input
/// error, raised before any remote call is made.
pub fn read_content() -> Result<Vec<u8>> {
    let mut clipboard = Clipboard::new()
        .map_err(|err| GhbinError::Clipboard(format!("failed to open clipboard: {err}")))?;
    let text = clipboard
        .get_text()
        .map_err(|err| GhbinError::Clipboard(format!("failed to read from clipboard: {err}")))?;
    if text.is_empty() {
        return Err(GhbinError::Input("clipboard is empty".to_string()));
    }
    Ok(text.into_bytes())
}
