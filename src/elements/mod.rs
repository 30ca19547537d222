//! Elements - Renderable targets and their contracts.
//!
//! This module provides:
//! - [`element`] - The [`Element`] trait, [`TargetProps`] contract, and
//!   [`ElementRef`] out-parameter
//! - [`box_element`] - Generic container (the default polymorphic target)
//! - [`text_element`] - Text display
//! - [`input_element`] - Single-line input with a two-way bound value
//!
//! # Architecture
//!
//! Elements are indices into parallel arrays. Each element:
//! 1. Allocates an index from the registry
//! 2. Binds props into the arrays (signals and getters stay connected)
//! 3. Returns its handle and a cleanup function
//!
//! # Reactivity
//!
//! Props can be static values, signals, or getters. Pass them directly -
//! extracting a signal's value before binding breaks reactivity.

pub mod box_element;
pub mod element;
pub mod input_element;
pub mod text_element;
mod types;

pub use box_element::{BoxElement, BoxHandle, BoxProps, box_element};
pub use element::{Element, ElementRef, Mounted, TargetProps};
pub use input_element::{InputElement, InputHandle, InputProps, input_element};
pub use text_element::{TextElement, TextHandle, TextProps, text_element};
pub use types::{
    BlurCallback, ChangeCallback, Children, Cleanup, FocusCallback, PropValue, SubmitCallback,
};
