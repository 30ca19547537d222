//! Minimal polymorphic mount.
//!
//! No target selector is given, so the wrapper renders the generic
//! container with the text nested inside.
//!
//! Run with: cargo run --example hello

use poly_tui::engine::arrays::{core, text as text_arrays};
use poly_tui::{PolyProps, TextProps, polymorphic, text_element};

fn main() {
    let props: PolyProps = PolyProps {
        class_name: Some("greeting".to_string()),
        children: Some(Box::new(|| {
            text_element(TextProps {
                content: "Hello".into(),
                ..Default::default()
            });
        })),
        ..Default::default()
    };
    let cleanup = polymorphic(props);

    for index in 0..poly_tui::allocated_count() {
        println!(
            "#{index} {:?} parent={:?} class={:?} content={:?}",
            core::component_type(index),
            core::parent_index(index),
            core::class_name(index),
            text_arrays::content(index),
        );
    }

    cleanup();
    println!("released, {} elements left", poly_tui::allocated_count());
}
