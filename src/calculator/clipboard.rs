//! Copying the accumulator to the system clipboard.

use arboard::Clipboard;

use super::engine::Calculator;
use super::format::format_plain;

/// Copy the calculator's last result to the system clipboard.
///
/// Returns the copied text on success, or an error message on failure.
pub fn copy_last_result(calc: &Calculator) -> Result<String, String> {
    let text = format_plain(calc.last_result());

    let mut clipboard =
        Clipboard::new().map_err(|e| format!("Failed to access clipboard: {}", e))?;

    clipboard
        .set_text(text.clone())
        .map_err(|e| format!("Failed to copy to clipboard: {}", e))?;

    Ok(text)
}
