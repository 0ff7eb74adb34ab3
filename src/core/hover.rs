use crate::domain::model::{ElementId, HOVER_TRANSITION, STYLE_TRANSITION};
use crate::domain::ports::Page;
use crate::utils::error::Result;

/// Pointer enter/leave on a card: set the decorative transition. Both
/// directions apply the same property, matching the source styling.
pub fn apply_card_transition<P: Page + ?Sized>(page: &P, card: ElementId) -> Result<()> {
    page.set_style(card, STYLE_TRANSITION, HOVER_TRANSITION)
}
