//! Polymorphic wrapper - Render as a caller-chosen target.
//!
//! [`polymorphic`] takes an `as_` property selecting which element this
//! mount should render as, and forwards everything else to it: class name,
//! style, a prop bag typed to the target's own contract, children, and an
//! optional handle reference. When `as_` is absent the target defaults to
//! the generic container, [`BoxElement`].
//!
//! Because the prop bag is `C::Props` and the reference is
//! `ElementRef<C::Handle>`, the bag's shape and the handle's type always
//! agree with the selected target - a mismatch is a compile error, never a
//! runtime check.
//!
//! # Example
//!
//! ```ignore
//! use poly_tui::{polymorphic, PolyProps};
//! use poly_tui::elements::{text_element, ElementRef, InputElement, InputHandle, TextProps};
//!
//! // Defaults to a box containing the children
//! let cleanup = polymorphic(PolyProps {
//!     children: Some(Box::new(|| {
//!         text_element(TextProps { content: "Hello".into(), ..Default::default() });
//!     })),
//!     ..Default::default()
//! });
//!
//! // Renders as an input; the reference resolves to the input's own handle
//! let input_ref: ElementRef<InputHandle> = ElementRef::new();
//! let cleanup = polymorphic(PolyProps {
//!     as_: Some(InputElement),
//!     handle_ref: Some(input_ref.clone()),
//!     ..Default::default()
//! });
//! input_ref.with(|input| input.focus());
//! ```

use crate::elements::{BoxElement, Children, Cleanup, Element, ElementRef, TargetProps};
use crate::types::Style;

// =============================================================================
// Props
// =============================================================================

/// Properties for the polymorphic wrapper, generic over the target element
/// type `C` (defaulting to the generic container).
///
/// Every field is optional; an empty `PolyProps` renders an empty box.
pub struct PolyProps<C: Element = BoxElement> {
    /// The target to render as. Defaults to the generic container.
    pub as_: Option<C>,

    /// Class name forwarded to the target.
    pub class_name: Option<String>,

    /// Style mapping forwarded to the target.
    pub style: Option<Style>,

    /// Extra props, typed to the target's own prop contract and forwarded
    /// verbatim.
    pub as_props: Option<C::Props>,

    /// Nested content, passed through to the target.
    pub children: Option<Children>,

    /// Out-parameter bound to the target's handle after mount.
    pub handle_ref: Option<ElementRef<C::Handle>>,
}

impl<C: Element> Default for PolyProps<C> {
    fn default() -> Self {
        Self {
            as_: None,
            class_name: None,
            style: None,
            as_props: None,
            children: None,
            handle_ref: None,
        }
    }
}

// =============================================================================
// Polymorphic Mount
// =============================================================================

/// Mount content as the selected target element.
///
/// Resolves the target (`as_`, falling back to the target type's default
/// value), merges the wrapper-level class name and style into the prop bag,
/// hands the children over, renders the target, and binds the handle
/// reference once the mount completes.
///
/// Precedence follows spread order: the prop bag lands after the
/// wrapper-level class name and style, so a class or style already present
/// in the bag wins.
///
/// There is no failure path. Absent inputs default or are omitted, and
/// nothing is validated at runtime.
///
/// Returns a cleanup that clears the handle reference, then unmounts the
/// target.
pub fn polymorphic<C>(props: PolyProps<C>) -> Cleanup
where
    C: Element + Default,
{
    let target = props.as_.unwrap_or_default();
    let mut target_props = props.as_props.unwrap_or_default();

    if let Some(class_name) = props.class_name {
        if target_props.class_name().is_none() {
            target_props.set_class_name(class_name);
        }
    }
    if let Some(style) = props.style {
        if target_props.style().is_none() {
            target_props.set_style(style);
        }
    }
    if let Some(children) = props.children {
        target_props.set_children(children);
    }

    let mounted = target.render(target_props);

    match props.handle_ref {
        Some(handle_ref) => {
            handle_ref.bind(mounted.handle);
            let cleanup = mounted.cleanup;
            Box::new(move || {
                handle_ref.clear();
                cleanup();
            })
        }
        None => mounted.cleanup,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{
        BoxHandle, BoxProps, InputElement, InputHandle, InputProps, Mounted, PropValue,
        TextElement, TextProps, text_element,
    };
    use crate::engine::arrays::{core, interaction, text as text_arrays, visual};
    use crate::engine::reset_registry;
    use crate::state::reset_focus_state;
    use crate::types::{Attr, ComponentType, Rgba};

    fn setup() {
        reset_registry();
        reset_focus_state();
    }

    #[test]
    fn test_defaults_to_box_with_children() {
        setup();

        // No target selector, children = "Hello"
        let props: PolyProps = PolyProps {
            children: Some(Box::new(|| {
                text_element(TextProps {
                    content: "Hello".into(),
                    ..Default::default()
                });
            })),
            ..Default::default()
        };
        let _cleanup = polymorphic(props);

        // Outermost element is the generic container
        assert_eq!(core::component_type(0), ComponentType::Box);
        // The child mounted nested inside it
        assert_eq!(core::component_type(1), ComponentType::Text);
        assert_eq!(core::parent_index(1), Some(0));
        assert_eq!(text_arrays::content(1), "Hello");
    }

    #[test]
    fn test_explicit_target_renders_exactly_that_target() {
        setup();

        let _cleanup = polymorphic(PolyProps {
            as_: Some(InputElement),
            ..Default::default()
        });

        assert_eq!(core::component_type(0), ComponentType::Input);
    }

    #[test]
    fn test_class_and_style_forwarded_verbatim() {
        setup();

        let style = Style {
            fg: Some(Rgba::RED),
            attrs: Some(Attr::BOLD),
            ..Default::default()
        };
        let props: PolyProps = PolyProps {
            class_name: Some("card".to_string()),
            style: Some(style.clone()),
            ..Default::default()
        };
        let _cleanup = polymorphic(props);

        assert_eq!(core::class_name(0), Some("card".to_string()));
        assert_eq!(visual::style(0), style);
    }

    #[test]
    fn test_prop_bag_forwarded_verbatim() {
        setup();

        // Extra props in the bag reach the target untouched
        let _cleanup = polymorphic(PolyProps {
            as_: Some(BoxElement),
            as_props: Some(BoxProps {
                focusable: Some(true),
                tab_index: Some(5),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert!(interaction::focusable(0));
        assert_eq!(interaction::tab_index(0), 5);
    }

    #[test]
    fn test_prop_bag_entries_win_over_wrapper_props() {
        setup();

        // The bag is spread after class/style, so its entries take
        // precedence when both are supplied.
        let _cleanup = polymorphic(PolyProps {
            as_: Some(BoxElement),
            class_name: Some("outer".to_string()),
            style: Some(Style::fg(Rgba::RED)),
            as_props: Some(BoxProps {
                class_name: Some("inner".to_string()),
                style: Some(Style::fg(Rgba::GREEN)),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(core::class_name(0), Some("inner".to_string()));
        assert_eq!(visual::style(0), Style::fg(Rgba::GREEN));
    }

    #[test]
    fn test_text_target_receives_bag_content() {
        setup();

        let _cleanup = polymorphic(PolyProps {
            as_: Some(TextElement),
            as_props: Some(TextProps {
                content: "Press".into(),
                ..Default::default()
            }),
            ..Default::default()
        });

        assert_eq!(core::component_type(0), ComponentType::Text);
        assert_eq!(text_arrays::content(0), "Press");
    }

    #[test]
    fn test_handle_ref_resolves_to_target_handle() {
        setup();

        // A reference supplied with an input target resolves to the
        // input's own handle, not to the wrapper.
        let value = spark_signals::signal(String::new());
        let input_ref: ElementRef<InputHandle> = ElementRef::new();
        assert!(!input_ref.is_bound());

        let cleanup = polymorphic(PolyProps {
            as_: Some(InputElement),
            as_props: Some(InputProps::new(value.clone())),
            handle_ref: Some(input_ref.clone()),
            ..Default::default()
        });

        // Bound after mount, with real input operations
        assert!(input_ref.is_bound());
        let input = input_ref.get().unwrap();
        input.focus();
        assert!(input.is_focused());

        input.set_value("typed");
        assert_eq!(value.get(), "typed");

        // Unmount clears the reference
        cleanup();
        assert!(!input_ref.is_bound());
    }

    #[test]
    fn test_handle_ref_default_target() {
        setup();

        let box_ref: ElementRef<BoxHandle> = ElementRef::new();
        let props: PolyProps = PolyProps {
            handle_ref: Some(box_ref.clone()),
            ..Default::default()
        };
        let _cleanup = polymorphic(props);

        assert!(box_ref.with(|b| b.is_mounted()).unwrap());
        assert_eq!(box_ref.with(|b| b.index()), Some(0));
    }

    #[test]
    fn test_cleanup_releases_target_and_children() {
        setup();

        let props: PolyProps = PolyProps {
            children: Some(Box::new(|| {
                text_element(TextProps::default());
                text_element(TextProps::default());
            })),
            ..Default::default()
        };
        let cleanup = polymorphic(props);
        assert_eq!(crate::engine::allocated_count(), 3);

        cleanup();
        assert_eq!(crate::engine::allocated_count(), 0);
    }

    // =========================================================================
    // User-defined target
    // =========================================================================

    /// A caller-supplied component: a box with a title text inside.
    #[derive(Default)]
    struct Card;

    #[derive(Default)]
    struct CardProps {
        title: PropValue<String>,
        class_name: Option<String>,
        style: Option<Style>,
        children: Option<Children>,
    }

    impl TargetProps for CardProps {
        fn class_name(&self) -> Option<&str> {
            self.class_name.as_deref()
        }
        fn set_class_name(&mut self, class_name: String) {
            self.class_name = Some(class_name);
        }
        fn style(&self) -> Option<&Style> {
            self.style.as_ref()
        }
        fn set_style(&mut self, style: Style) {
            self.style = Some(style);
        }
        fn set_children(&mut self, children: Children) {
            self.children = Some(children);
        }
    }

    #[derive(Clone)]
    struct CardHandle {
        root: BoxHandle,
    }

    impl Element for Card {
        type Props = CardProps;
        type Handle = CardHandle;

        fn render(self, props: Self::Props) -> Mounted<CardHandle> {
            let title = props.title;
            let children = props.children;
            let mounted = BoxElement.render(BoxProps {
                class_name: props.class_name,
                style: props.style,
                children: Some(Box::new(move || {
                    text_element(TextProps {
                        content: title,
                        ..Default::default()
                    });
                    if let Some(children) = children {
                        children();
                    }
                })),
                ..Default::default()
            });
            Mounted {
                handle: CardHandle {
                    root: mounted.handle,
                },
                cleanup: mounted.cleanup,
            }
        }
    }

    #[test]
    fn test_custom_component_target() {
        setup();

        let style = Style {
            fg: Some(Rgba::RED),
            ..Default::default()
        };
        let card_ref: ElementRef<CardHandle> = ElementRef::new();

        let _cleanup = polymorphic(PolyProps {
            as_: Some(Card),
            class_name: Some("card".to_string()),
            style: Some(style.clone()),
            as_props: Some(CardProps {
                title: "Title".into(),
                ..Default::default()
            }),
            handle_ref: Some(card_ref.clone()),
            ..Default::default()
        });

        // The custom component received className and style among its props
        let root = card_ref.get().unwrap().root;
        assert_eq!(root.class_name(), Some("card".to_string()));
        assert_eq!(root.style(), style);

        // Its internal structure mounted: box at 0, title text nested
        assert_eq!(core::component_type(root.index()), ComponentType::Box);
        assert_eq!(core::parent_index(1), Some(root.index()));
        assert_eq!(text_arrays::content(1), "Title");
    }
}
