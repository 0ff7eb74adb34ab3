use std::fmt;

/// Opaque handle for one element in the page tree. Handles stay stable
/// for the lifetime of the element; a removed element's id is never
/// reused by the in-memory adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The element queries the enhancer needs from a page adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Elements carrying a CSS class flag.
    Class(String),
    /// Inputs with a given `name` attribute.
    Name(String),
    /// Anchors whose `href` points at a same-page fragment (`#...`).
    AnchorLink,
    /// Required inputs that live inside a form.
    RequiredInput,
}

impl Selector {
    pub fn class(name: &str) -> Self {
        Selector::Class(name.to_string())
    }

    pub fn name(name: &str) -> Self {
        Selector::Name(name.to_string())
    }
}

/// One user-input event delivered to the enhancer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    Click { target: ElementId },
    Blur { target: ElementId },
    Input { target: ElementId },
    PointerEnter { target: ElementId },
    PointerLeave { target: ElementId },
}

impl PageEvent {
    pub fn target(&self) -> ElementId {
        match *self {
            PageEvent::Click { target }
            | PageEvent::Blur { target }
            | PageEvent::Input { target }
            | PageEvent::PointerEnter { target }
            | PageEvent::PointerLeave { target } => target,
        }
    }
}

/// Whether the default action of an event may proceed after the
/// enhancer handled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Default,
    Prevented,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Auto,
}

// Class flags and style keys shared with the page templates.
pub const CLASS_ALERT: &str = "alert";
pub const CLASS_CARD: &str = "card";
pub const CLASS_CURRENT_TIME: &str = "current-time";
pub const CLASS_RESERVE_CONFIRM: &str = "btn-reserve-confirm";
pub const CLASS_INVALID_FEEDBACK: &str = "invalid-feedback";
pub const CLASS_IS_VALID: &str = "is-valid";
pub const CLASS_IS_INVALID: &str = "is-invalid";
pub const CLASS_SPINNER: &str = "spinner-border";

pub const STYLE_TRANSITION: &str = "transition";
pub const HOVER_TRANSITION: &str = "all 0.3s ease";
