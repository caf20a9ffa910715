//! Clipboard copy for generated passwords.

use copypasta::{ClipboardContext, ClipboardProvider};
use thiserror::Error;
use tracing::debug;
use zeroize::Zeroize;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("failed to copy to clipboard: {0}")]
    Copy(String),
}

/// Copy `text` to the system clipboard.
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut ctx =
        ClipboardContext::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;

    ctx.set_contents(text.to_owned())
        .map_err(|e| ClipboardError::Copy(e.to_string()))?;

    // Wipe the read-back copy
    if let Ok(mut retrieved) = ctx.get_contents() {
        retrieved.zeroize();
    }
    debug!(chars = text.len(), "copied to clipboard");
    Ok(())
}
