use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

use crate::domain::model::{ElementId, ScrollBehavior, Selector, CLASS_INVALID_FEEDBACK};
use crate::domain::ports::{Dismissible, Page};
use crate::utils::error::{EnhancerError, Result};

/// Declarative description of one element, consumed by
/// [`MemoryPage::add_element`] / [`MemoryPage::add_child`].
#[derive(Debug, Clone, Default)]
pub struct ElementSpec {
    tag: String,
    classes: Vec<String>,
    attrs: Vec<(String, String)>,
    text: String,
    value: Option<String>,
    required: bool,
}

impl ElementSpec {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            ..Self::default()
        }
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    /// Sets the `id` attribute used for fragment navigation.
    pub fn html_id(self, id: &str) -> Self {
        self.attr("id", id)
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

#[derive(Debug, Clone)]
struct Element {
    tag: String,
    classes: HashSet<String>,
    attrs: HashMap<String, String>,
    text: String,
    value: Option<String>,
    styles: HashMap<String, String>,
    disabled: bool,
    visible: bool,
    required: bool,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

#[derive(Debug, Default)]
struct Dom {
    elements: HashMap<ElementId, Element>,
    next_id: u64,
    scrolls: Vec<(ElementId, ScrollBehavior)>,
}

impl Dom {
    fn insert(&mut self, parent: Option<ElementId>, spec: ElementSpec) -> ElementId {
        self.next_id += 1;
        let id = ElementId(self.next_id);
        let element = Element {
            tag: spec.tag,
            classes: spec.classes.into_iter().collect(),
            attrs: spec.attrs.into_iter().collect(),
            text: spec.text,
            value: spec.value,
            styles: HashMap::new(),
            disabled: false,
            visible: true,
            required: spec.required,
            parent,
            children: Vec::new(),
        };
        self.elements.insert(id, element);
        if let Some(parent) = parent {
            if let Some(entry) = self.elements.get_mut(&parent) {
                entry.children.push(id);
            }
        }
        id
    }

    fn remove(&mut self, id: ElementId) {
        let Some(element) = self.elements.remove(&id) else {
            return;
        };
        if let Some(parent) = element.parent {
            if let Some(entry) = self.elements.get_mut(&parent) {
                entry.children.retain(|child| *child != id);
            }
        }
        for child in element.children {
            self.remove_subtree(child);
        }
    }

    fn remove_subtree(&mut self, id: ElementId) {
        let Some(element) = self.elements.remove(&id) else {
            return;
        };
        for child in element.children {
            self.remove_subtree(child);
        }
    }

    fn matches(&self, element: &Element, selector: &Selector) -> bool {
        match selector {
            Selector::Class(class) => element.classes.contains(class),
            Selector::Name(name) => element.attrs.get("name").is_some_and(|n| n == name),
            Selector::AnchorLink => {
                element.tag == "a"
                    && element.attrs.get("href").is_some_and(|href| href.starts_with('#'))
            }
            Selector::RequiredInput => {
                element.tag == "input" && element.required && self.has_form_ancestor(element)
            }
        }
    }

    fn has_form_ancestor(&self, element: &Element) -> bool {
        let mut current = element.parent;
        while let Some(id) = current {
            match self.elements.get(&id) {
                Some(entry) if entry.tag == "form" => return true,
                Some(entry) => current = entry.parent,
                None => return false,
            }
        }
        false
    }
}

/// In-memory page tree. Cloning shares the underlying tree, the same
/// way multiple scripts share one document.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    dom: Arc<RwLock<Dom>>,
}

impl MemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    fn write(&self) -> Result<std::sync::RwLockWriteGuard<'_, Dom>> {
        self.dom.write().map_err(|_| EnhancerError::PageError {
            message: "page tree lock poisoned".to_string(),
        })
    }

    pub fn add_element(&self, spec: ElementSpec) -> ElementId {
        self.dom
            .write()
            .map(|mut dom| dom.insert(None, spec))
            .unwrap_or(ElementId(0))
    }

    pub fn add_child(&self, parent: ElementId, spec: ElementSpec) -> ElementId {
        self.dom
            .write()
            .map(|mut dom| dom.insert(Some(parent), spec))
            .unwrap_or(ElementId(0))
    }

    /// Detaches an element and its subtree.
    pub fn remove(&self, id: ElementId) {
        if let Ok(mut dom) = self.dom.write() {
            dom.remove(id);
        }
    }

    /// Simulates the user typing into an input.
    pub fn set_value(&self, id: ElementId, value: &str) {
        if let Ok(mut dom) = self.dom.write() {
            if let Some(element) = dom.elements.get_mut(&id) {
                element.value = Some(value.to_string());
            }
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.dom
            .read()
            .ok()
            .and_then(|dom| dom.elements.get(&id).map(|e| e.classes.contains(class)))
            .unwrap_or(false)
    }

    pub fn style(&self, id: ElementId, property: &str) -> Option<String> {
        let dom = self.dom.read().ok()?;
        dom.elements.get(&id)?.styles.get(property).cloned()
    }

    pub fn is_disabled(&self, id: ElementId) -> bool {
        self.dom
            .read()
            .ok()
            .and_then(|dom| dom.elements.get(&id).map(|e| e.disabled))
            .unwrap_or(false)
    }

    pub fn is_visible(&self, id: ElementId) -> bool {
        self.dom
            .read()
            .ok()
            .and_then(|dom| dom.elements.get(&id).map(|e| e.visible))
            .unwrap_or(false)
    }

    /// Scroll requests in the order they were issued.
    pub fn scrolled(&self) -> Vec<(ElementId, ScrollBehavior)> {
        self.dom
            .read()
            .map(|dom| dom.scrolls.clone())
            .unwrap_or_default()
    }

    pub fn element_count(&self) -> usize {
        self.dom.read().map(|dom| dom.elements.len()).unwrap_or(0)
    }
}

impl Page for MemoryPage {
    fn select(&self, selector: &Selector) -> Vec<ElementId> {
        let Ok(dom) = self.dom.read() else {
            return Vec::new();
        };
        let mut ids: Vec<ElementId> = dom
            .elements
            .iter()
            .filter(|(_, element)| dom.matches(element, selector))
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids
    }

    fn contains(&self, id: ElementId) -> bool {
        self.dom
            .read()
            .map(|dom| dom.elements.contains_key(&id))
            .unwrap_or(false)
    }

    fn attr(&self, id: ElementId, name: &str) -> Option<String> {
        let dom = self.dom.read().ok()?;
        dom.elements.get(&id)?.attrs.get(name).cloned()
    }

    fn value(&self, id: ElementId) -> Option<String> {
        let dom = self.dom.read().ok()?;
        dom.elements.get(&id)?.value.clone()
    }

    fn text(&self, id: ElementId) -> Option<String> {
        let dom = self.dom.read().ok()?;
        dom.elements.get(&id).map(|e| e.text.clone())
    }

    fn find_fragment(&self, fragment: &str) -> Option<ElementId> {
        let dom = self.dom.read().ok()?;
        let mut ids: Vec<ElementId> = dom
            .elements
            .iter()
            .filter(|(_, element)| element.attrs.get("id").is_some_and(|a| a == fragment))
            .map(|(id, _)| *id)
            .collect();
        ids.sort();
        ids.first().copied()
    }

    fn set_text(&self, id: ElementId, text: &str) -> Result<()> {
        let mut dom = self.write()?;
        if let Some(element) = dom.elements.get_mut(&id) {
            element.text = text.to_string();
        }
        Ok(())
    }

    fn add_class(&self, id: ElementId, class: &str) -> Result<()> {
        let mut dom = self.write()?;
        if let Some(element) = dom.elements.get_mut(&id) {
            element.classes.insert(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&self, id: ElementId, class: &str) -> Result<()> {
        let mut dom = self.write()?;
        if let Some(element) = dom.elements.get_mut(&id) {
            element.classes.remove(class);
        }
        Ok(())
    }

    fn set_style(&self, id: ElementId, property: &str, value: &str) -> Result<()> {
        let mut dom = self.write()?;
        if let Some(element) = dom.elements.get_mut(&id) {
            element.styles.insert(property.to_string(), value.to_string());
        }
        Ok(())
    }

    fn set_disabled(&self, id: ElementId, disabled: bool) -> Result<()> {
        let mut dom = self.write()?;
        if let Some(element) = dom.elements.get_mut(&id) {
            element.disabled = disabled;
        }
        Ok(())
    }

    fn set_visible(&self, id: ElementId, visible: bool) -> Result<()> {
        let mut dom = self.write()?;
        if let Some(element) = dom.elements.get_mut(&id) {
            element.visible = visible;
        }
        Ok(())
    }

    fn scroll_into_view(&self, id: ElementId, behavior: ScrollBehavior) -> Result<()> {
        let mut dom = self.write()?;
        if dom.elements.contains_key(&id) {
            dom.scrolls.push((id, behavior));
        }
        Ok(())
    }

    fn feedback_for(&self, field: ElementId) -> Option<ElementId> {
        let dom = self.dom.read().ok()?;
        let element = dom.elements.get(&field)?;
        let scope = element.parent.unwrap_or(field);
        dom.elements
            .get(&scope)?
            .children
            .iter()
            .copied()
            .find(|child| {
                dom.elements
                    .get(child)
                    .is_some_and(|e| e.classes.contains(CLASS_INVALID_FEEDBACK))
            })
    }

    fn create_feedback(&self, field: ElementId) -> Result<ElementId> {
        let mut dom = self.write()?;
        let Some(element) = dom.elements.get(&field) else {
            return Err(EnhancerError::PageError {
                message: format!("cannot create feedback next to detached element {}", field),
            });
        };
        let scope = element.parent.unwrap_or(field);
        Ok(dom.insert(Some(scope), ElementSpec::new("div").class(CLASS_INVALID_FEEDBACK)))
    }

    fn dismissible(&self, id: ElementId) -> Option<Box<dyn Dismissible>> {
        if !self.contains(id) {
            return None;
        }
        Some(Box::new(AlertHandle {
            dom: Arc::clone(&self.dom),
            id,
        }))
    }
}

/// Owned dismissal handle for one alert in a [`MemoryPage`].
struct AlertHandle {
    dom: Arc<RwLock<Dom>>,
    id: ElementId,
}

impl Dismissible for AlertHandle {
    fn dismiss(&self) {
        if let Ok(mut dom) = self.dom.write() {
            dom.remove(self.id);
        }
    }
}
