//! Text element - Display text content.
//!
//! A pure display element. Cannot have children; nested content handed to
//! it through the polymorphic wrapper is dropped, matching its contract.
//!
//! # Example
//!
//! ```ignore
//! use poly_tui::elements::{text_element, TextProps};
//! use spark_signals::signal;
//!
//! // Static text
//! text_element(TextProps {
//!     content: "Hello, World!".into(),
//!     ..Default::default()
//! });
//!
//! // Reactive text
//! let message = signal("Hi".to_string());
//! text_element(TextProps {
//!     content: message.clone().into(),
//!     ..Default::default()
//! });
//! message.set("Updated".to_string()); // display follows
//! ```

use super::element::{Element, Mounted, TargetProps};
use super::types::{Children, Cleanup, PropValue};
use crate::engine::arrays::{core, text as text_arrays, visual};
use crate::engine::{allocate_index, current_parent_index, release_index};
use crate::types::{ComponentType, Style};

// =============================================================================
// Props
// =============================================================================

/// Properties for the text element.
#[derive(Default)]
pub struct TextProps {
    /// Optional element ID for lookup.
    pub id: Option<String>,

    /// Class name, forwarded verbatim.
    pub class_name: Option<String>,

    /// Style mapping, forwarded verbatim.
    pub style: Option<Style>,

    /// The text content to display.
    pub content: PropValue<String>,

    /// Whether the element is visible (default: true).
    pub visible: Option<PropValue<bool>>,
}

impl TargetProps for TextProps {
    fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    fn set_class_name(&mut self, class_name: String) {
        self.class_name = Some(class_name);
    }

    fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    fn set_style(&mut self, style: Style) {
        self.style = Some(style);
    }

    fn set_children(&mut self, _children: Children) {
        // Text has no child slot.
    }
}

// =============================================================================
// Handle
// =============================================================================

/// Handle to a mounted text element.
#[derive(Clone)]
pub struct TextHandle {
    index: usize,
}

impl TextHandle {
    /// Index in the parallel arrays.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True while the element is mounted.
    pub fn is_mounted(&self) -> bool {
        crate::engine::is_allocated(self.index)
            && core::component_type(self.index) == ComponentType::Text
    }

    /// The content currently displayed.
    pub fn content(&self) -> String {
        text_arrays::content(self.index)
    }

    /// Style currently in effect.
    pub fn style(&self) -> Style {
        visual::style(self.index)
    }
}

// =============================================================================
// Element
// =============================================================================

/// The text element type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextElement;

impl Element for TextElement {
    type Props = TextProps;
    type Handle = TextHandle;

    fn render(self, props: Self::Props) -> Mounted<TextHandle> {
        // 1. ALLOCATE INDEX
        let index = allocate_index(props.id.as_deref());

        // 2. CORE SETUP - Type, parent
        core::set_component_type(index, ComponentType::Text);
        if let Some(parent) = current_parent_index() {
            core::set_parent_index(index, Some(parent));
        }

        // 3. BIND IDENTITY AND VISUALS
        if let Some(class_name) = props.class_name {
            core::set_class_name(index, Some(class_name));
        }
        if let Some(style) = props.style {
            visual::set_style(index, style);
        }

        // 4. BIND CONTENT
        match props.content {
            PropValue::Static(v) => text_arrays::set_content(index, v),
            PropValue::Signal(s) => text_arrays::set_content_signal(index, s),
            PropValue::Getter(g) => text_arrays::set_content_getter(index, move || g()),
        }

        // 5. BIND VISIBILITY
        if let Some(visible) = props.visible {
            match visible {
                PropValue::Static(v) => core::set_visible(index, v),
                PropValue::Signal(s) => core::set_visible_signal(index, s),
                PropValue::Getter(g) => core::set_visible_getter(index, move || g()),
            }
        }

        Mounted {
            handle: TextHandle { index },
            cleanup: Box::new(move || release_index(index)),
        }
    }
}

/// Mount a text display element.
///
/// Returns a cleanup function that releases resources when called.
pub fn text_element(props: TextProps) -> Cleanup {
    TextElement.render(props).into_cleanup()
}

// =============================================================================
// Tests
// =============================================================================
