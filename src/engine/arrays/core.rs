//! Core arrays - Identity and tree structure.
//!
//! - component type: what kind of element lives at an index
//! - parent index: tree structure for recursive release
//! - visible: visibility flag (reactive)
//! - class name: caller-supplied class string, stored verbatim

use spark_signals::Signal;

use super::super::slot_array::SlotArray;
use crate::types::ComponentType;

thread_local! {
    /// Component type discriminant. `None` = unallocated.
    static COMPONENT_TYPE: SlotArray<ComponentType> = SlotArray::new(ComponentType::None);

    /// Parent element index, if mounted inside another element.
    static PARENT_INDEX: SlotArray<Option<usize>> = SlotArray::new(None);

    /// Visibility (default: true).
    static VISIBLE: SlotArray<bool> = SlotArray::new(true);

    /// Class name, if any.
    static CLASS_NAME: SlotArray<Option<String>> = SlotArray::new(None);
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    COMPONENT_TYPE.with(|arr| arr.ensure_capacity(index));
    PARENT_INDEX.with(|arr| arr.ensure_capacity(index));
    VISIBLE.with(|arr| arr.ensure_capacity(index));
    CLASS_NAME.with(|arr| arr.ensure_capacity(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    COMPONENT_TYPE.with(|arr| arr.clear(index));
    PARENT_INDEX.with(|arr| arr.clear(index));
    VISIBLE.with(|arr| arr.clear(index));
    CLASS_NAME.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    COMPONENT_TYPE.with(|arr| arr.clear_all());
    PARENT_INDEX.with(|arr| arr.clear_all());
    VISIBLE.with(|arr| arr.clear_all());
    CLASS_NAME.with(|arr| arr.clear_all());
}

// =============================================================================
// Component Type
// =============================================================================

pub fn component_type(index: usize) -> ComponentType {
    COMPONENT_TYPE.with(|arr| arr.get(index))
}

pub fn set_component_type(index: usize, ty: ComponentType) {
    COMPONENT_TYPE.with(|arr| arr.set_value(index, ty));
}

// =============================================================================
// Parent Index
// =============================================================================

pub fn parent_index(index: usize) -> Option<usize> {
    PARENT_INDEX.with(|arr| arr.get(index))
}

pub fn set_parent_index(index: usize, parent: Option<usize>) {
    PARENT_INDEX.with(|arr| arr.set_value(index, parent));
}

// =============================================================================
// Visibility
// =============================================================================

pub fn visible(index: usize) -> bool {
    VISIBLE.with(|arr| arr.get(index))
}

pub fn set_visible(index: usize, value: bool) {
    VISIBLE.with(|arr| arr.set_value(index, value));
}

pub fn set_visible_signal(index: usize, sig: Signal<bool>) {
    VISIBLE.with(|arr| arr.set_signal(index, sig));
}

pub fn set_visible_getter(index: usize, getter: impl Fn() -> bool + 'static) {
    VISIBLE.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Class Name
// =============================================================================

pub fn class_name(index: usize) -> Option<String> {
    CLASS_NAME.with(|arr| arr.get(index))
}

pub fn set_class_name(index: usize, class_name: Option<String>) {
    CLASS_NAME.with(|arr| arr.set_value(index, class_name));
}
