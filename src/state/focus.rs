//! Focus system - Which element currently holds focus.
//!
//! - `FOCUSED` signal (currently focused index, -1 when none)
//! - Focus/blur callbacks per index
//! - Focus requires the focusable flag in the interaction array
//!
//! # Example
//!
//! ```ignore
//! use poly_tui::state::focus;
//!
//! focus::focus(index);
//! assert!(focus::is_focused(index));
//! focus::blur();
//! ```

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{Signal, signal};

use crate::engine::arrays::interaction;

// =============================================================================
// Focused Index Signal
// =============================================================================

thread_local! {
    static FOCUSED: Signal<i32> = signal(-1);
}

/// Currently focused element index (-1 if none).
pub fn focused_index() -> i32 {
    FOCUSED.with(|s| s.get())
}

/// Check if any element is focused.
pub fn has_focus() -> bool {
    focused_index() >= 0
}

/// Check if a specific element is focused.
pub fn is_focused(index: usize) -> bool {
    focused_index() == index as i32
}

// =============================================================================
// Focus Callbacks
// =============================================================================

/// Callbacks fired when focus changes.
#[derive(Default)]
pub struct FocusCallbacks {
    pub on_focus: Option<Box<dyn Fn()>>,
    pub on_blur: Option<Box<dyn Fn()>>,
}

thread_local! {
    static CALLBACK_REGISTRY: RefCell<HashMap<usize, Vec<FocusCallbacks>>> =
        RefCell::new(HashMap::new());
}

/// Register focus callbacks for an element.
/// Returns a cleanup function to unregister.
pub fn register_callbacks(index: usize, callbacks: FocusCallbacks) -> impl FnOnce() {
    let callback_id = CALLBACK_REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let list = reg.entry(index).or_default();
        let id = list.len();
        list.push(callbacks);
        id
    });

    move || {
        CALLBACK_REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(list) = reg.get_mut(&index) {
                if callback_id < list.len() {
                    // Slot stays so later callback IDs remain valid.
                    list[callback_id].on_focus = None;
                    list[callback_id].on_blur = None;
                }
                if list
                    .iter()
                    .all(|cb| cb.on_focus.is_none() && cb.on_blur.is_none())
                {
                    reg.remove(&index);
                }
            }
        });
    }
}

fn fire_focus(index: usize) {
    CALLBACK_REGISTRY.with(|reg| {
        if let Some(list) = reg.borrow().get(&index) {
            for cb in list {
                if let Some(ref on_focus) = cb.on_focus {
                    on_focus();
                }
            }
        }
    });
}

fn fire_blur(index: usize) {
    CALLBACK_REGISTRY.with(|reg| {
        if let Some(list) = reg.borrow().get(&index) {
            for cb in list {
                if let Some(ref on_blur) = cb.on_blur {
                    on_blur();
                }
            }
        }
    });
}

// =============================================================================
// Focus Operations
// =============================================================================

fn set_focus(new_index: i32) {
    let old_index = focused_index();
    if old_index == new_index {
        return;
    }

    FOCUSED.with(|s| s.set(new_index));

    if old_index >= 0 {
        fire_blur(old_index as usize);
    }
    if new_index >= 0 {
        fire_focus(new_index as usize);
    }
}

/// Focus an element. Ignored unless the element is focusable.
pub fn focus(index: usize) {
    if !interaction::focusable(index) {
        return;
    }
    set_focus(index as i32);
}

/// Clear focus entirely.
pub fn blur() {
    set_focus(-1);
}

/// Remove all focus state for an element (called on unmount).
///
/// Blurs first if the element was focused so on_blur still fires.
pub fn cleanup_index(index: usize) {
    if is_focused(index) {
        blur();
    }
    CALLBACK_REGISTRY.with(|reg| {
        reg.borrow_mut().remove(&index);
    });
}

/// Reset all focus state (for testing).
pub fn reset_focus_state() {
    FOCUSED.with(|s| s.set(-1));
    CALLBACK_REGISTRY.with(|reg| reg.borrow_mut().clear());
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_focus_requires_focusable() {
        reset_focus_state();

        interaction::set_focusable(0, false);
        focus(0);
        assert!(!has_focus());

        interaction::set_focusable(0, true);
        focus(0);
        assert!(is_focused(0));
    }

    #[test]
    fn test_focus_transition_fires_callbacks() {
        reset_focus_state();

        let focused = Rc::new(Cell::new(0u32));
        let blurred = Rc::new(Cell::new(0u32));
        let focused_clone = focused.clone();
        let blurred_clone = blurred.clone();

        interaction::set_focusable(1, true);
        interaction::set_focusable(2, true);

        let _cleanup = register_callbacks(
            1,
            FocusCallbacks {
                on_focus: Some(Box::new(move || focused_clone.set(focused_clone.get() + 1))),
                on_blur: Some(Box::new(move || blurred_clone.set(blurred_clone.get() + 1))),
            },
        );

        focus(1);
        assert_eq!(focused.get(), 1);
        assert_eq!(blurred.get(), 0);

        // Focusing the same index again is a no-op
        focus(1);
        assert_eq!(focused.get(), 1);

        focus(2);
        assert_eq!(blurred.get(), 1);
    }

    #[test]
    fn test_cleanup_blurs_focused_element() {
        reset_focus_state();

        interaction::set_focusable(3, true);
        focus(3);
        assert!(is_focused(3));

        cleanup_index(3);
        assert!(!has_focus());
    }
}
