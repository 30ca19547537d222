//! Text arrays - Content for text-bearing elements.

use spark_signals::Signal;

use super::super::slot_array::SlotArray;

thread_local! {
    /// Text content. Defaults to the empty string.
    static CONTENT: SlotArray<String> = SlotArray::new(String::new());

    /// Placeholder shown by inputs while the value is empty.
    static PLACEHOLDER: SlotArray<Option<String>> = SlotArray::new(None);
}

// =============================================================================
// Capacity Management
// =============================================================================

/// Ensure arrays have capacity for the given index.
pub fn ensure_capacity(index: usize) {
    CONTENT.with(|arr| arr.ensure_capacity(index));
    PLACEHOLDER.with(|arr| arr.ensure_capacity(index));
}

/// Clear values at index.
pub fn clear_at_index(index: usize) {
    CONTENT.with(|arr| arr.clear(index));
    PLACEHOLDER.with(|arr| arr.clear(index));
}

/// Reset all arrays.
pub fn reset() {
    CONTENT.with(|arr| arr.clear_all());
    PLACEHOLDER.with(|arr| arr.clear_all());
}

// =============================================================================
// Content
// =============================================================================

pub fn content(index: usize) -> String {
    CONTENT.with(|arr| arr.get(index))
}

pub fn set_content(index: usize, content: String) {
    CONTENT.with(|arr| arr.set_value(index, content));
}

pub fn set_content_signal(index: usize, sig: Signal<String>) {
    CONTENT.with(|arr| arr.set_signal(index, sig));
}

pub fn set_content_getter(index: usize, getter: impl Fn() -> String + 'static) {
    CONTENT.with(|arr| arr.set_getter(index, getter));
}

// =============================================================================
// Placeholder
// =============================================================================

pub fn placeholder(index: usize) -> Option<String> {
    PLACEHOLDER.with(|arr| arr.get(index))
}

pub fn set_placeholder(index: usize, placeholder: Option<String>) {
    PLACEHOLDER.with(|arr| arr.set_value(index, placeholder));
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_content_signal_stays_connected() {
        let value = signal("one".to_string());
        set_content_signal(0, value.clone());
        assert_eq!(content(0), "one");

        value.set("two".to_string());
        assert_eq!(content(0), "two");
    }
}
