//! Parallel arrays - All element state lives here.
//!
//! Each array index corresponds to one mounted element. Elements write
//! through `set_value()`, `set_signal()`, or `set_getter()`; readers call
//! `get()` and see whatever the binding currently evaluates to.
//!
//! # Array Categories
//!
//! - **core**: Component type, parent, visibility, class name
//! - **visual**: The forwarded style mapping
//! - **text**: Text content and placeholder
//! - **interaction**: Focusability and tab order

pub mod core;
pub mod interaction;
pub mod text;
pub mod visual;

/// Ensure all arrays have capacity for the given index.
///
/// Called by the registry when allocating.
pub fn ensure_all_capacity(index: usize) {
    core::ensure_capacity(index);
    visual::ensure_capacity(index);
    text::ensure_capacity(index);
    interaction::ensure_capacity(index);
}

/// Clear all array values at an index.
///
/// Called by the registry when releasing.
pub fn clear_all_at_index(index: usize) {
    core::clear_at_index(index);
    visual::clear_at_index(index);
    text::clear_at_index(index);
    interaction::clear_at_index(index);
}

/// Reset all parallel arrays to release memory.
///
/// Called automatically when the last element is released.
pub fn reset_all_arrays() {
    core::reset();
    visual::reset();
    text::reset();
    interaction::reset();
}
