//! Runtime state shared across elements.

pub mod focus;

pub use focus::{
    FocusCallbacks, blur, focus, focused_index, has_focus, is_focused, register_callbacks,
    reset_focus_state,
};
