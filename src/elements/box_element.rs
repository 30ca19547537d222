//! Box element - The generic container.
//!
//! Boxes are the building blocks of element trees. They can carry a class
//! name and style, be focusable, and contain other elements as children.
//! A box is also the default target of the polymorphic wrapper.
//!
//! # Example
//!
//! ```ignore
//! use poly_tui::elements::{box_element, BoxProps};
//!
//! let cleanup = box_element(BoxProps {
//!     class_name: Some("card".to_string()),
//!     children: Some(Box::new(|| {
//!         // Child elements here
//!     })),
//!     ..Default::default()
//! });
//! ```

use super::element::{Element, Mounted, TargetProps};
use super::types::{BlurCallback, Children, Cleanup, FocusCallback, PropValue};
use crate::engine::arrays::{core, interaction, visual};
use crate::engine::{
    allocate_index, current_parent_index, pop_parent_context, push_parent_context, release_index,
};
use crate::state::focus;
use crate::types::{ComponentType, Style};

// =============================================================================
// Props
// =============================================================================

/// Properties for the box element.
#[derive(Default)]
pub struct BoxProps {
    /// Optional element ID for lookup.
    pub id: Option<String>,

    /// Class name, forwarded verbatim.
    pub class_name: Option<String>,

    /// Style mapping, forwarded verbatim.
    pub style: Option<Style>,

    /// Whether the element is visible (default: true).
    pub visible: Option<PropValue<bool>>,

    /// Whether the element can receive focus.
    pub focusable: Option<bool>,

    /// Tab index for focus navigation.
    pub tab_index: Option<i32>,

    /// Fires when the element gains focus.
    pub on_focus: Option<FocusCallback>,

    /// Fires when the element loses focus.
    pub on_blur: Option<BlurCallback>,

    /// Child render closure.
    pub children: Option<Children>,
}

impl TargetProps for BoxProps {
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

    fn set_children(&mut self, children: Children) {
        self.children = Some(children);
    }
}

// =============================================================================
// Handle
// =============================================================================

/// Handle to a mounted box.
#[derive(Clone)]
pub struct BoxHandle {
    index: usize,
}

impl BoxHandle {
    /// Index in the parallel arrays.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Element ID, while mounted.
    pub fn id(&self) -> Option<String> {
        crate::engine::element_id(self.index)
    }

    /// True while the element is mounted.
    pub fn is_mounted(&self) -> bool {
        crate::engine::is_allocated(self.index)
            && core::component_type(self.index) == ComponentType::Box
    }

    /// Current visibility.
    pub fn is_visible(&self) -> bool {
        core::visible(self.index)
    }

    /// Class name, if one was set.
    pub fn class_name(&self) -> Option<String> {
        core::class_name(self.index)
    }

    /// Style currently in effect.
    pub fn style(&self) -> Style {
        visual::style(self.index)
    }
}

// =============================================================================
// Element
// =============================================================================

/// The box element type. Unit struct; also the polymorphic wrapper's
/// default target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoxElement;

impl Element for BoxElement {
    type Props = BoxProps;
    type Handle = BoxHandle;

    fn render(self, props: Self::Props) -> Mounted<BoxHandle> {
        // 1. ALLOCATE INDEX
        let index = allocate_index(props.id.as_deref());

        // 2. CORE SETUP - Type, parent
        core::set_component_type(index, ComponentType::Box);
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

        // 4. BIND VISIBILITY
        if let Some(visible) = props.visible {
            match visible {
                PropValue::Static(v) => core::set_visible(index, v),
                PropValue::Signal(s) => core::set_visible_signal(index, s),
                PropValue::Getter(g) => core::set_visible_getter(index, move || g()),
            }
        }

        // 5. BIND INTERACTION
        let focusable = props.focusable.unwrap_or(false);
        let mut focus_cleanup: Option<Box<dyn FnOnce()>> = None;
        if focusable {
            interaction::set_focusable(index, true);
            if let Some(tab_index) = props.tab_index {
                interaction::set_tab_index(index, tab_index);
            }
            if props.on_focus.is_some() || props.on_blur.is_some() {
                let on_focus = props.on_focus;
                let on_blur = props.on_blur;
                let cleanup_fn = focus::register_callbacks(
                    index,
                    focus::FocusCallbacks {
                        on_focus: on_focus.map(|cb| -> Box<dyn Fn()> { Box::new(move || cb()) }),
                        on_blur: on_blur.map(|cb| -> Box<dyn Fn()> { Box::new(move || cb()) }),
                    },
                );
                focus_cleanup = Some(Box::new(cleanup_fn));
            }
        }

        // 6. RENDER CHILDREN
        if let Some(children) = props.children {
            push_parent_context(index);
            children();
            pop_parent_context();
        }

        // 7. HANDLE + CLEANUP
        Mounted {
            handle: BoxHandle { index },
            cleanup: Box::new(move || {
                if let Some(cleanup) = focus_cleanup {
                    cleanup();
                }
                focus::cleanup_index(index);
                release_index(index);
            }),
        }
    }
}

/// Mount a box container element.
///
/// Returns a cleanup function that releases resources when called.
pub fn box_element(props: BoxProps) -> Cleanup {
    BoxElement.render(props).into_cleanup()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reset_registry;
    use crate::state::reset_focus_state;
    use crate::types::Rgba;
    use spark_signals::signal;

    fn setup() {
        reset_registry();
        reset_focus_state();
    }

    #[test]
    fn test_box_creation() {
        setup();

        let cleanup = box_element(BoxProps {
            class_name: Some("panel".to_string()),
            ..Default::default()
        });

        assert_eq!(core::component_type(0), ComponentType::Box);
        assert_eq!(core::class_name(0), Some("panel".to_string()));

        cleanup();
        assert_eq!(core::component_type(0), ComponentType::None);
    }

    #[test]
    fn test_box_with_children() {
        setup();

        let _cleanup = box_element(BoxProps {
            children: Some(Box::new(|| {
                box_element(BoxProps::default());
            })),
            ..Default::default()
        });

        // Parent is index 0, child is index 1
        assert_eq!(core::component_type(1), ComponentType::Box);
        assert_eq!(core::parent_index(1), Some(0));
    }

    #[test]
    fn test_box_reactive_visibility() {
        setup();

        let visible = signal(true);
        let mounted = BoxElement.render(BoxProps {
            visible: Some(visible.clone().into()),
            ..Default::default()
        });

        assert!(mounted.handle.is_visible());
        visible.set(false);
        assert!(!mounted.handle.is_visible());
    }

    #[test]
    fn test_box_handle_reads_style() {
        setup();

        let style = Style {
            bg: Some(Rgba::BLUE),
            ..Default::default()
        };
        let mounted = BoxElement.render(BoxProps {
            style: Some(style.clone()),
            ..Default::default()
        });

        assert_eq!(mounted.handle.style(), style);
        assert!(mounted.handle.is_mounted());

        let handle = mounted.handle.clone();
        mounted.into_cleanup()();
        assert!(!handle.is_mounted());
    }

    #[test]
    fn test_box_focus_callbacks() {
        use std::cell::Cell;
        use std::rc::Rc;

        setup();

        let gained = Rc::new(Cell::new(false));
        let gained_clone = gained.clone();

        let mounted = BoxElement.render(BoxProps {
            focusable: Some(true),
            on_focus: Some(Rc::new(move || gained_clone.set(true))),
            ..Default::default()
        });

        focus::focus(mounted.handle.index());
        assert!(gained.get());
    }
}
