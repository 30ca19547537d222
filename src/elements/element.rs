//! Element trait - The capability-typed dispatch seam.
//!
//! A renderable target is anything implementing [`Element`]: the intrinsic
//! elements in this crate, or a user-defined component. The target's prop
//! contract and handle contract ride along as associated types, so whichever
//! target a caller selects fixes - at compile time - the shape of the extra
//! props it accepts and the handle type a reference resolves to. There is no
//! runtime registry and no runtime validation.

use std::cell::RefCell;
use std::rc::Rc;

use super::types::{Children, Cleanup};
use crate::types::Style;

// =============================================================================
// Target Prop Contract
// =============================================================================

/// The prop contract every renderable target exposes.
///
/// Class name and style are part of every target's contract (intrinsic or
/// user-defined), which is what lets a wrapper forward them without knowing
/// the target. Children are offered to every target; a target without child
/// support drops them, mirroring its own contract.
pub trait TargetProps: Default {
    /// Class name currently set, if any.
    fn class_name(&self) -> Option<&str>;

    /// Set the class name.
    fn set_class_name(&mut self, class_name: String);

    /// Style currently set, if any.
    fn style(&self) -> Option<&Style>;

    /// Set the style mapping.
    fn set_style(&mut self, style: Style);

    /// Accept nested content.
    fn set_children(&mut self, children: Children);
}

// =============================================================================
// Element
// =============================================================================

/// A renderable target: an intrinsic element or a user-defined component.
///
/// `Props` is the target's own prop contract; `Handle` is what an
/// [`ElementRef`] resolves to once the target has mounted.
pub trait Element {
    /// Props accepted by this element.
    type Props: TargetProps;

    /// Handle exposed to callers through an [`ElementRef`].
    type Handle: Clone + 'static;

    /// Mount the element with the given props.
    fn render(self, props: Self::Props) -> Mounted<Self::Handle>;
}

/// Result of mounting an element: its handle plus the cleanup that
/// unmounts it.
pub struct Mounted<H> {
    pub handle: H,
    pub cleanup: Cleanup,
}

impl<H> Mounted<H> {
    /// Drop the handle and keep only the cleanup.
    pub fn into_cleanup(self) -> Cleanup {
        self.cleanup
    }
}

// =============================================================================
// Element Ref
// =============================================================================

/// Out-parameter slot through which a caller obtains a handle to a rendered
/// element.
///
/// The slot is empty until the framework binds it, after the target mounts.
/// Unmounting clears it again. Cloning shares the slot.
pub struct ElementRef<H> {
    slot: Rc<RefCell<Option<H>>>,
}

impl<H> ElementRef<H> {
    /// Create an empty reference slot.
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Bind a handle into the slot. Called by the framework after mount.
    pub fn bind(&self, handle: H) {
        *self.slot.borrow_mut() = Some(handle);
    }

    /// Empty the slot. Called by the framework on unmount.
    pub fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }

    /// True once a handle has been bound.
    pub fn is_bound(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Run a closure against the bound handle, if any.
    pub fn with<R>(&self, f: impl FnOnce(&H) -> R) -> Option<R> {
        self.slot.borrow().as_ref().map(f)
    }
}

impl<H: Clone> ElementRef<H> {
    /// Get a copy of the bound handle, if any.
    pub fn get(&self) -> Option<H> {
        self.slot.borrow().clone()
    }
}

impl<H> Clone for ElementRef<H> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<H> Default for ElementRef<H> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_ref_lifecycle() {
        let r: ElementRef<u32> = ElementRef::new();
        assert!(!r.is_bound());
        assert_eq!(r.get(), None);

        r.bind(7);
        assert!(r.is_bound());
        assert_eq!(r.get(), Some(7));
        assert_eq!(r.with(|h| h + 1), Some(8));

        // Clones share the slot
        let r2 = r.clone();
        r2.clear();
        assert!(!r.is_bound());
    }
}
