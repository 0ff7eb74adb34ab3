use crate::domain::model::{Disposition, ElementId, ScrollBehavior};
use crate::domain::ports::Page;
use crate::utils::error::Result;

/// Click on a wired same-page anchor: the default jump navigation is
/// always prevented; the target scrolls into view only if the fragment
/// resolves to an element.
pub fn handle_anchor_click<P: Page + ?Sized>(page: &P, anchor: ElementId) -> Result<Disposition> {
    let target = page
        .attr(anchor, "href")
        .and_then(|href| href.strip_prefix('#').map(str::to_string))
        .filter(|fragment| !fragment.is_empty())
        .and_then(|fragment| page.find_fragment(&fragment));

    if let Some(target) = target {
        page.scroll_into_view(target, ScrollBehavior::Smooth)?;
        tracing::debug!("smooth scroll to {}", target);
    }

    Ok(Disposition::Prevented)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{ElementSpec, MemoryPage};

    #[test]
    fn test_anchor_scrolls_to_existing_target() {
        let page = MemoryPage::new();
        let anchor = page.add_element(ElementSpec::new("a").attr("href", "#disponibilidad"));
        let section = page.add_element(ElementSpec::new("section").html_id("disponibilidad"));

        let disposition = handle_anchor_click(&page, anchor).unwrap();

        assert_eq!(disposition, Disposition::Prevented);
        assert_eq!(page.scrolled(), vec![(section, ScrollBehavior::Smooth)]);
    }

    #[test]
    fn test_missing_target_is_noop_but_still_prevented() {
        let page = MemoryPage::new();
        let anchor = page.add_element(ElementSpec::new("a").attr("href", "#nada"));

        let disposition = handle_anchor_click(&page, anchor).unwrap();

        assert_eq!(disposition, Disposition::Prevented);
        assert!(page.scrolled().is_empty());
    }

    #[test]
    fn test_bare_hash_href_scrolls_nowhere() {
        let page = MemoryPage::new();
        let anchor = page.add_element(ElementSpec::new("a").attr("href", "#"));

        let disposition = handle_anchor_click(&page, anchor).unwrap();

        assert_eq!(disposition, Disposition::Prevented);
        assert!(page.scrolled().is_empty());
    }
}
