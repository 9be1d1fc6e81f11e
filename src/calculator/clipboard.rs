//! Copying the displayed value to the system clipboard.

use super::state::DisplayState;
use crate::error::Result;
use arboard::Clipboard;
use tracing::debug;

/// Copy the current input line of a display to the system clipboard.
///
/// Only the value is copied; the running expression stays on screen.
pub fn copy_display(display: &DisplayState) -> Result<()> {
    let value = display.current_input.as_str();
    Clipboard::new()?.set_text(value)?;

    debug!(value, "copied display to clipboard");
    Ok(())
}
