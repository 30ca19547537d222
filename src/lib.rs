//! # poly-tui
//!
//! Polymorphic element wrapper for reactive terminal UI component trees,
//! built on [spark-signals](https://crates.io/crates/spark-signals) for
//! fine-grained reactivity.
//!
//! The headline surface is [`polymorphic`]: a wrapper that renders as a
//! caller-chosen target element, forwarding class name, style, a prop bag
//! typed to the target's own contract, children, and a handle reference.
//! When no target is selected it renders the generic container.
//!
//! ## Architecture
//!
//! Elements are indices into parallel arrays. Mounting writes props into
//! the arrays as reactive cells (static values, signals, or getters) and
//! returns a cleanup closure; state is released when the cleanup runs.
//!
//! ```text
//! polymorphic(props) -> Element::render -> registry index -> array cells
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Attr, Style, ComponentType)
//! - [`engine`] - Element registry and reactive slot arrays
//! - [`elements`] - Element trait, intrinsic elements, handles
//! - [`polymorphic`] - The polymorphic wrapper
//! - [`state`] - Focus state

pub mod elements;
pub mod engine;
pub mod polymorphic;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use engine::{
    allocate_index, allocated_count, current_parent_index, element_id, index_of, is_allocated,
    on_destroy, pop_parent_context, push_parent_context, release_index, reset_registry, SlotArray,
};

pub use elements::{
    box_element, input_element, text_element, BoxElement, BoxHandle, BoxProps, Children, Cleanup,
    Element, ElementRef, InputElement, InputHandle, InputProps, Mounted, PropValue, TargetProps,
    TextElement, TextHandle, TextProps,
};

pub use polymorphic::{polymorphic, PolyProps};

pub use state::{
    blur, focus, focused_index, has_focus, is_focused, register_callbacks, reset_focus_state,
    FocusCallbacks,
};
