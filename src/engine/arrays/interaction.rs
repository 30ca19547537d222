//! Interaction arrays - Focusability and tab order.

use super::super::slot_array::SlotArray;

thread_local! {
    /// Can the element receive focus.
    static FOCUSABLE: SlotArray<bool> = SlotArray::new(false);

    /// Tab index for focus navigation (higher = later in order).
    static TAB_INDEX: SlotArray<i32> = SlotArray::new(0);
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    FOCUSABLE.with(|arr| arr.ensure_capacity(index));
    TAB_INDEX.with(|arr| arr.ensure_capacity(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    FOCUSABLE.with(|arr| arr.clear(index));
    TAB_INDEX.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    FOCUSABLE.with(|arr| arr.clear_all());
    TAB_INDEX.with(|arr| arr.clear_all());
}

// =============================================================================
// Accessors
// =============================================================================

pub fn focusable(index: usize) -> bool {
    FOCUSABLE.with(|arr| arr.get(index))
}

pub fn set_focusable(index: usize, value: bool) {
    FOCUSABLE.with(|arr| arr.set_value(index, value));
}

pub fn tab_index(index: usize) -> i32 {
    TAB_INDEX.with(|arr| arr.get(index))
}

pub fn set_tab_index(index: usize, value: i32) {
    TAB_INDEX.with(|arr| arr.set_value(index, value));
}
