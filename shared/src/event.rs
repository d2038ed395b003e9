//! Typed page events, the effects behaviors ask for, and the state snapshot
//! they decide from.

use crate::theme::Theme;

/// Opaque handle for an element registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementKey(pub usize);

/// A platform event after the boundary has translated it.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// The document finished loading and the enhancer is starting.
    Loaded,
    /// The theme toggle control was clicked.
    ToggleClicked,
    /// The system color scheme changed.
    ColorSchemeChanged {
        /// Whether the dark scheme query now matches.
        prefers_dark: bool,
    },
    /// A same-page link was clicked.
    AnchorClicked {
        /// Raw `href` of the link, e.g. `#section-1`.
        href: String,
        /// Element the fragment resolved to, if any.
        target: Option<ElementKey>,
    },
    /// The section observer reported a visibility change.
    SectionIntersected {
        /// Observed section.
        section: ElementKey,
        /// Whether it is inside the trigger band.
        is_intersecting: bool,
    },
    /// A card element was found and is about to be observed.
    CardRegistered {
        /// The card.
        card: ElementKey,
    },
    /// The card observer reported a visibility change.
    CardIntersected {
        /// The card.
        card: ElementKey,
        /// Whether the card crossed the visibility threshold.
        is_intersecting: bool,
    },
}

/// One inline style property assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleDeclaration {
    /// CSS property name.
    pub property: &'static str,
    /// CSS value.
    pub value: String,
}

impl StyleDeclaration {
    /// Builds a declaration.
    pub fn new(property: &'static str, value: impl Into<String>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

/// A state change requested by a behavior; the host carries it out.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Set the root theme attribute, then persist the theme.
    ApplyTheme(Theme),
    /// Cancel the default action of the event being handled.
    PreventDefault,
    /// Smoothly scroll the element to the top of the viewport.
    ScrollIntoView(ElementKey),
    /// Assign inline style declarations to an element.
    SetStyle {
        /// Element to style.
        target: ElementKey,
        /// Declarations, applied in order.
        declarations: Vec<StyleDeclaration>,
    },
}

/// Read-only view of page state handed to every behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSnapshot {
    /// Explicit preference in storage. `None` when absent, invalid, or
    /// storage is unavailable.
    pub stored_theme: Option<Theme>,
    /// Theme currently on the root attribute.
    pub applied_theme: Option<Theme>,
    /// System dark preference. `None` without media-query support.
    pub prefers_dark: Option<bool>,
}
