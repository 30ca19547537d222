//! SlotArray - Growable per-index reactive cells.
//!
//! Each parallel array in the engine is a `SlotArray<T>`. A cell is either
//! unset (reads as the array default) or bound to a static value, a signal,
//! or a getter. Reading a cell evaluates whatever binding is current, so
//! signal and getter bindings stay live: the element mounts once and later
//! writes to the signal show up on the next read.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::Signal;

/// One cell of a SlotArray.
enum SlotBinding<T: Clone + PartialEq + 'static> {
    /// Nothing bound; reads fall back to the array default.
    Unset,
    /// Static value.
    Value(T),
    /// Live signal; reads call `Signal::get`.
    Bound(Signal<T>),
    /// Getter closure; called on every read.
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> Clone for SlotBinding<T> {
    fn clone(&self) -> Self {
        match self {
            SlotBinding::Unset => SlotBinding::Unset,
            SlotBinding::Value(v) => SlotBinding::Value(v.clone()),
            SlotBinding::Bound(s) => SlotBinding::Bound(s.clone()),
            SlotBinding::Getter(g) => SlotBinding::Getter(g.clone()),
        }
    }
}

/// Growable array of reactive cells with a shared default.
pub struct SlotArray<T: Clone + PartialEq + 'static> {
    default: T,
    cells: RefCell<Vec<SlotBinding<T>>>,
}

impl<T: Clone + PartialEq + 'static> SlotArray<T> {
    /// Create an empty array with the given default value.
    pub fn new(default: T) -> Self {
        Self {
            default,
            cells: RefCell::new(Vec::new()),
        }
    }

    /// Grow the array so `index` is addressable.
    pub fn ensure_capacity(&self, index: usize) {
        let mut cells = self.cells.borrow_mut();
        if cells.len() <= index {
            cells.resize_with(index + 1, || SlotBinding::Unset);
        }
    }

    /// Read the current value at `index`.
    ///
    /// The binding is cloned out before evaluation so getters may re-enter
    /// this array (e.g. a getter that reads a sibling cell).
    pub fn get(&self, index: usize) -> T {
        let binding = {
            let cells = self.cells.borrow();
            cells.get(index).cloned().unwrap_or(SlotBinding::Unset)
        };
        match binding {
            SlotBinding::Unset => self.default.clone(),
            SlotBinding::Value(v) => v,
            SlotBinding::Bound(s) => s.get(),
            SlotBinding::Getter(g) => g(),
        }
    }

    /// True if the cell has any binding.
    pub fn is_set(&self, index: usize) -> bool {
        let cells = self.cells.borrow();
        !matches!(cells.get(index), None | Some(SlotBinding::Unset))
    }

    /// Bind a static value.
    pub fn set_value(&self, index: usize, value: T) {
        self.ensure_capacity(index);
        self.cells.borrow_mut()[index] = SlotBinding::Value(value);
    }

    /// Bind a signal. The connection stays live: reads see the signal's
    /// current value.
    pub fn set_signal(&self, index: usize, sig: Signal<T>) {
        self.ensure_capacity(index);
        self.cells.borrow_mut()[index] = SlotBinding::Bound(sig);
    }

    /// Bind a getter, called on every read.
    pub fn set_getter(&self, index: usize, getter: impl Fn() -> T + 'static) {
        self.ensure_capacity(index);
        self.cells.borrow_mut()[index] = SlotBinding::Getter(Rc::new(getter));
    }

    /// Clear the cell back to unset.
    pub fn clear(&self, index: usize) {
        let mut cells = self.cells.borrow_mut();
        if let Some(cell) = cells.get_mut(index) {
            *cell = SlotBinding::Unset;
        }
    }

    /// Drop all cells, releasing bound signals and getters.
    pub fn clear_all(&self) {
        self.cells.borrow_mut().clear();
    }
}
