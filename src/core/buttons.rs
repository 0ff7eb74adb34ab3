use crate::domain::model::{ElementId, CLASS_SPINNER};
use crate::domain::ports::Page;
use crate::utils::error::Result;

pub const DEFAULT_BUSY_LABEL: &str = "Procesando...";

/// Puts a button into its busy state around a long-running action:
/// spinner flag on, label swapped, element disabled. Returns the
/// original label so the caller can hand it back to [`restore_button`].
pub fn show_button_loading<P: Page + ?Sized>(
    page: &P,
    button: ElementId,
    text: Option<&str>,
) -> Result<String> {
    let original = page.text(button).unwrap_or_default();
    page.add_class(button, CLASS_SPINNER)?;
    page.set_text(button, text.unwrap_or(DEFAULT_BUSY_LABEL))?;
    page.set_disabled(button, true)?;
    Ok(original)
}

/// Restores a button to the exact label saved by [`show_button_loading`]
/// and re-enables it.
pub fn restore_button<P: Page + ?Sized>(
    page: &P,
    button: ElementId,
    original_text: &str,
) -> Result<()> {
    page.remove_class(button, CLASS_SPINNER)?;
    page.set_text(button, original_text)?;
    page.set_disabled(button, false)?;
    Ok(())
}
