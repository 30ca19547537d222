//! Input element - Single-line text input.
//!
//! Two-way value binding via a `Signal<String>`. Always focusable. Its
//! handle is the interesting one: callers can focus the element, read and
//! write the value, and trigger submit, so a reference forwarded by the
//! polymorphic wrapper resolves to a handle with real input operations.
//!
//! # Example
//!
//! ```ignore
//! use poly_tui::elements::{input_element, InputProps};
//! use spark_signals::signal;
//!
//! let name = signal(String::new());
//! let cleanup = input_element(InputProps {
//!     placeholder: Some("Enter your name...".to_string()),
//!     ..InputProps::new(name.clone())
//! });
//!
//! name.set("Alice".to_string()); // input displays it automatically
//! ```

use spark_signals::{Signal, signal};

use super::element::{Element, Mounted, TargetProps};
use super::types::{
    BlurCallback, ChangeCallback, Children, Cleanup, FocusCallback, PropValue, SubmitCallback,
};
use crate::engine::arrays::{core, interaction, text as text_arrays, visual};
use crate::engine::{allocate_index, current_parent_index, release_index};
use crate::state::focus;
use crate::types::{ComponentType, Style};

/// Password mask character.
const MASK_CHAR: char = '\u{2022}';

// =============================================================================
// Props
// =============================================================================

/// Properties for the input element.
pub struct InputProps {
    /// Optional element ID for lookup.
    pub id: Option<String>,

    /// Class name, forwarded verbatim.
    pub class_name: Option<String>,

    /// Style mapping, forwarded verbatim.
    pub style: Option<Style>,

    /// Current value (two-way bound signal).
    pub value: Signal<String>,

    /// Placeholder text shown while the value is empty.
    pub placeholder: Option<String>,

    /// Maximum value length in characters.
    pub max_length: Option<usize>,

    /// Password mode - display is masked.
    pub password: bool,

    /// Whether the element is visible (default: true).
    pub visible: Option<PropValue<bool>>,

    /// Tab index for focus navigation.
    pub tab_index: Option<i32>,

    /// Called when the value changes through the handle.
    pub on_change: Option<ChangeCallback>,

    /// Called on submit.
    pub on_submit: Option<SubmitCallback>,

    /// Fires when the element gains focus.
    pub on_focus: Option<FocusCallback>,

    /// Fires when the element loses focus.
    pub on_blur: Option<BlurCallback>,
}

impl InputProps {
    /// Create props with the given value signal.
    pub fn new(value: Signal<String>) -> Self {
        Self {
            id: None,
            class_name: None,
            style: None,
            value,
            placeholder: None,
            max_length: None,
            password: false,
            visible: None,
            tab_index: None,
            on_change: None,
            on_submit: None,
            on_focus: None,
            on_blur: None,
        }
    }
}

impl Default for InputProps {
    fn default() -> Self {
        Self::new(signal(String::new()))
    }
}

impl TargetProps for InputProps {
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
        // Inputs have no child slot.
    }
}

// =============================================================================
// Handle
// =============================================================================

/// Handle to a mounted input.
///
/// Carries the value signal and callbacks, so value edits through the
/// handle behave exactly like user edits: max length applies and
/// `on_change` fires.
#[derive(Clone)]
pub struct InputHandle {
    index: usize,
    value: Signal<String>,
    max_length: Option<usize>,
    on_change: Option<ChangeCallback>,
    on_submit: Option<SubmitCallback>,
}

impl InputHandle {
    /// Index in the parallel arrays.
    pub fn index(&self) -> usize {
        self.index
    }

    /// True while the element is mounted.
    pub fn is_mounted(&self) -> bool {
        crate::engine::is_allocated(self.index)
            && core::component_type(self.index) == ComponentType::Input
    }

    /// Current value.
    pub fn value(&self) -> String {
        self.value.get()
    }

    /// Set the value. Truncates to max length and fires `on_change`.
    pub fn set_value(&self, value: &str) {
        let next: String = match self.max_length {
            Some(max) => value.chars().take(max).collect(),
            None => value.to_string(),
        };
        if next == self.value.get() {
            return;
        }
        self.value.set(next.clone());
        if let Some(ref on_change) = self.on_change {
            on_change(&next);
        }
    }

    /// Fire `on_submit` with the current value.
    pub fn submit(&self) {
        if let Some(ref on_submit) = self.on_submit {
            on_submit(&self.value.get());
        }
    }

    /// Focus this input.
    pub fn focus(&self) {
        focus::focus(self.index);
    }

    /// Drop focus if this input holds it.
    pub fn blur(&self) {
        if focus::is_focused(self.index) {
            focus::blur();
        }
    }

    /// True while this input holds focus.
    pub fn is_focused(&self) -> bool {
        focus::is_focused(self.index)
    }
}

// =============================================================================
// Element
// =============================================================================

/// The input element type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputElement;

impl Element for InputElement {
    type Props = InputProps;
    type Handle = InputHandle;

    fn render(self, props: Self::Props) -> Mounted<InputHandle> {
        // 1. ALLOCATE INDEX
        let index = allocate_index(props.id.as_deref());

        // 2. CORE SETUP - Type, parent
        core::set_component_type(index, ComponentType::Input);
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

        // 4. BIND DISPLAYED CONTENT
        // Password mode renders a mask of the same character length.
        if props.password {
            let value = props.value.clone();
            text_arrays::set_content_getter(index, move || {
                MASK_CHAR.to_string().repeat(value.get().chars().count())
            });
        } else {
            text_arrays::set_content_signal(index, props.value.clone());
        }
        if props.placeholder.is_some() {
            text_arrays::set_placeholder(index, props.placeholder);
        }

        // 5. BIND VISIBILITY
        if let Some(visible) = props.visible {
            match visible {
                PropValue::Static(v) => core::set_visible(index, v),
                PropValue::Signal(s) => core::set_visible_signal(index, s),
                PropValue::Getter(g) => core::set_visible_getter(index, move || g()),
            }
        }

        // 6. INTERACTION - inputs are always focusable
        interaction::set_focusable(index, true);
        if let Some(tab_index) = props.tab_index {
            interaction::set_tab_index(index, tab_index);
        }

        let mut focus_cleanup: Option<Box<dyn FnOnce()>> = None;
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

        // 7. HANDLE + CLEANUP
        Mounted {
            handle: InputHandle {
                index,
                value: props.value,
                max_length: props.max_length,
                on_change: props.on_change,
                on_submit: props.on_submit,
            },
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

/// Mount a single-line input element.
///
/// Returns a cleanup function that releases resources when called.
pub fn input_element(props: InputProps) -> Cleanup {
    InputElement.render(props).into_cleanup()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::reset_registry;
    use crate::state::reset_focus_state;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn setup() {
        reset_registry();
        reset_focus_state();
    }

    #[test]
    fn test_input_two_way_binding() {
        setup();

        let value = signal("start".to_string());
        let mounted = InputElement.render(InputProps::new(value.clone()));

        // Signal -> display
        assert_eq!(text_arrays::content(0), "start");
        value.set("edited".to_string());
        assert_eq!(text_arrays::content(0), "edited");

        // Handle -> signal
        mounted.handle.set_value("typed");
        assert_eq!(value.get(), "typed");
    }

    #[test]
    fn test_input_max_length_and_on_change() {
        setup();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();

        let mounted = InputElement.render(InputProps {
            max_length: Some(3),
            on_change: Some(Rc::new(move |v: &str| {
                seen_clone.borrow_mut().push(v.to_string());
            })),
            ..Default::default()
        });

        mounted.handle.set_value("abcdef");
        assert_eq!(mounted.handle.value(), "abc");

        // Setting the same (truncated) value again is not a change
        mounted.handle.set_value("abc");
        assert_eq!(*seen.borrow(), vec!["abc".to_string()]);
    }

    #[test]
    fn test_input_password_masks_display() {
        setup();

        let value = signal("secret".to_string());
        let _mounted = InputElement.render(InputProps {
            password: true,
            ..InputProps::new(value.clone())
        });

        assert_eq!(text_arrays::content(0), "\u{2022}".repeat(6));
        assert_eq!(value.get(), "secret"); // underlying value untouched
    }

    #[test]
    fn test_input_focus_through_handle() {
        setup();

        let mounted = InputElement.render(InputProps::default());
        assert!(!mounted.handle.is_focused());

        mounted.handle.focus();
        assert!(mounted.handle.is_focused());

        mounted.handle.blur();
        assert!(!mounted.handle.is_focused());
    }

    #[test]
    fn test_input_submit() {
        setup();

        let submitted = Rc::new(RefCell::new(String::new()));
        let submitted_clone = submitted.clone();

        let value = signal("hello".to_string());
        let mounted = InputElement.render(InputProps {
            on_submit: Some(Rc::new(move |v: &str| {
                *submitted_clone.borrow_mut() = v.to_string();
            })),
            ..InputProps::new(value)
        });

        mounted.handle.submit();
        assert_eq!(*submitted.borrow(), "hello");
    }
}
