use crate::domain::model::{ElementId, CLASS_IS_INVALID, CLASS_IS_VALID};
use crate::domain::ports::{EnhancerConfig, Page};
use crate::utils::error::Result;
use crate::utils::validation::validate_rut;

/// Validates one required field on blur. Empty (after trim) fails with
/// the required message; the configured RUT field additionally has to
/// pass the shape check. Returns whether the field is valid; a field
/// that is no longer attached counts as a no-op failure.
pub fn validate_field<P, C>(page: &P, field: ElementId, config: &C) -> Result<bool>
where
    P: Page + ?Sized,
    C: EnhancerConfig + ?Sized,
{
    if !page.contains(field) {
        return Ok(false);
    }

    let value = page.value(field).unwrap_or_default();
    let value = value.trim();

    if value.is_empty() {
        mark_field_invalid(page, field, config.required_message())?;
        return Ok(false);
    }

    if page.attr(field, "name").as_deref() == Some(config.rut_field_name())
        && !validate_rut(value)
    {
        mark_field_invalid(page, field, config.invalid_rut_message())?;
        return Ok(false);
    }

    mark_field_valid(page, field)?;
    Ok(true)
}

fn feedback_element<P: Page + ?Sized>(page: &P, field: ElementId) -> Result<ElementId> {
    match page.feedback_for(field) {
        Some(feedback) => Ok(feedback),
        None => page.create_feedback(field),
    }
}

pub fn mark_field_invalid<P: Page + ?Sized>(
    page: &P,
    field: ElementId,
    message: &str,
) -> Result<()> {
    if !page.contains(field) {
        return Ok(());
    }
    let feedback = feedback_element(page, field)?;
    page.add_class(field, CLASS_IS_INVALID)?;
    page.remove_class(field, CLASS_IS_VALID)?;
    page.set_text(feedback, message)?;
    page.set_visible(feedback, true)?;
    tracing::debug!("field {} invalid: {}", field, message);
    Ok(())
}

pub fn mark_field_valid<P: Page + ?Sized>(page: &P, field: ElementId) -> Result<()> {
    if !page.contains(field) {
        return Ok(());
    }
    let feedback = feedback_element(page, field)?;
    page.add_class(field, CLASS_IS_VALID)?;
    page.remove_class(field, CLASS_IS_INVALID)?;
    page.set_visible(feedback, false)?;
    Ok(())
}

/// Editing a field clears both validity markers until the next blur.
pub fn clear_field_validation<P: Page + ?Sized>(page: &P, field: ElementId) -> Result<()> {
    if !page.contains(field) {
        return Ok(());
    }
    page.remove_class(field, CLASS_IS_INVALID)?;
    page.remove_class(field, CLASS_IS_VALID)?;
    if let Some(feedback) = page.feedback_for(field) {
        page.set_visible(feedback, false)?;
    }
    Ok(())
}
