//! Element engine - registry, reactive slot storage, parallel arrays.
//!
//! Elements are indices into parallel arrays. Mounting an element
//! allocates an index, writes its props into the arrays (preserving signal
//! and getter bindings), and returns a cleanup that releases everything.

pub mod arrays;
pub mod registry;
pub mod slot_array;

pub use registry::{
    allocate_index, allocated_count, current_parent_index, element_id, index_of, is_allocated,
    on_destroy, pop_parent_context, push_parent_context, release_index, reset_registry,
};
pub use slot_array::SlotArray;
