//! Element types - Props values, cleanup, callbacks.
//!
//! Prop values support static values, signals, and getters so elements stay
//! reactive. The key is to pass props directly - binding a signal keeps it
//! connected, extracting the value first does not.

use std::rc::Rc;

use spark_signals::Signal;

// =============================================================================
// Cleanup and Children
// =============================================================================

/// Cleanup function returned by elements.
///
/// Call this to unmount the element and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

/// Child render closure.
///
/// Runs once, under the parent's context, mounting whatever nested content
/// the caller supplied.
pub type Children = Box<dyn FnOnce()>;

// =============================================================================
// Callback Types
// =============================================================================

/// Value change callback (Rc so it can be cloned into closures).
pub type ChangeCallback = Rc<dyn Fn(&str)>;

/// Submit callback.
pub type SubmitCallback = Rc<dyn Fn(&str)>;

/// Focus gained callback.
pub type FocusCallback = Rc<dyn Fn()>;

/// Focus lost callback.
pub type BlurCallback = Rc<dyn Fn()>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time the value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spark_signals::signal;

    #[test]
    fn test_prop_value_sources() {
        let s: PropValue<u32> = 5.into();
        assert_eq!(s.get(), 5);

        let sig = signal(1u32);
        let p: PropValue<u32> = sig.clone().into();
        assert_eq!(p.get(), 1);
        sig.set(2);
        assert_eq!(p.get(), 2);

        let g = PropValue::Getter(Rc::new(|| 10u32));
        assert_eq!(g.get(), 10);
    }
}
