//! Polymorphic mount with an explicit target.
//!
//! Renders as an input element; the handle reference resolves to the
//! input's own handle, so the caller can focus it and edit the value.
//!
//! Run with: cargo run --example as_input

use poly_tui::{ElementRef, InputElement, InputHandle, InputProps, PolyProps, polymorphic};
use spark_signals::signal;

fn main() {
    let value = signal(String::new());
    let input_ref: ElementRef<InputHandle> = ElementRef::new();

    let cleanup = polymorphic(PolyProps {
        as_: Some(InputElement),
        class_name: Some("name-field".to_string()),
        as_props: Some(InputProps {
            placeholder: Some("Enter your name...".to_string()),
            max_length: Some(16),
            ..InputProps::new(value.clone())
        }),
        handle_ref: Some(input_ref.clone()),
        ..Default::default()
    });

    let input = input_ref.get().expect("bound after mount");
    input.focus();
    input.set_value("Alice");
    println!("focused={} value={:?}", input.is_focused(), input.value());

    cleanup();
    println!("released, ref bound={}", input_ref.is_bound());
}
