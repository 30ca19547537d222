//! Visual arrays - The forwarded style mapping.
//!
//! The whole `Style` value is stored per index, untouched. Nothing in the
//! engine interprets it; it is the element's own visual contract.

use spark_signals::Signal;

use super::super::slot_array::SlotArray;
use crate::types::Style;

thread_local! {
    /// Style mapping, stored verbatim.
    static STYLE: SlotArray<Style> = SlotArray::new(Style::default());
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    STYLE.with(|arr| arr.ensure_capacity(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    STYLE.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    STYLE.with(|arr| arr.clear_all());
}

// =============================================================================
// Style
// =============================================================================

pub fn style(index: usize) -> Style {
    STYLE.with(|arr| arr.get(index))
}

/// True if a style was explicitly set for this index.
pub fn has_style(index: usize) -> bool {
    STYLE.with(|arr| arr.is_set(index))
}

pub fn set_style(index: usize, style: Style) {
    STYLE.with(|arr| arr.set_value(index, style));
}

pub fn set_style_signal(index: usize, sig: Signal<Style>) {
    STYLE.with(|arr| arr.set_signal(index, sig));
}

pub fn set_style_getter(index: usize, getter: impl Fn() -> Style + 'static) {
    STYLE.with(|arr| arr.set_getter(index, getter));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attr, Rgba};

    #[test]
    fn test_style_stored_verbatim() {
        let s = Style {
            fg: Some(Rgba::RED),
            bg: Some(Rgba::BLACK),
            attrs: Some(Attr::BOLD | Attr::DIM),
            ..Default::default()
        };
        set_style(0, s.clone());
        assert_eq!(style(0), s);
        assert!(has_style(0));
    }

    #[test]
    fn test_unset_style_is_default() {
        ensure_capacity(4);
        assert_eq!(style(4), Style::default());
        assert!(!has_style(4));
    }
}
