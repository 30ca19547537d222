//! Core types for poly-tui.
//!
//! These types flow through the element arrays and define what a mounted
//! element looks like to the rest of the crate.

use bitflags::bitflags;

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Integer channels for exact comparison. Alpha 255 = fully opaque.
/// Special value: r=-1 means "terminal default" (let the terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let the terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const RED: Self = Self::rgb(255, 0, 0);
    pub const GREEN: Self = Self::rgb(0, 255, 0);
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const CYAN: Self = Self::rgb(0, 255, 255);
    pub const MAGENTA: Self = Self::rgb(255, 0, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }
}

// =============================================================================
// Text Attributes
// =============================================================================

bitflags! {
    /// Text attributes (bold, italic, etc.) as a bitmask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Attr: u8 {
        const NONE          = 0;
        const BOLD          = 1 << 0;
        const DIM           = 1 << 1;
        const ITALIC        = 1 << 2;
        const UNDERLINE     = 1 << 3;
        const STRIKETHROUGH = 1 << 4;
    }
}

// =============================================================================
// Text Alignment
// =============================================================================

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

// =============================================================================
// Component Type
// =============================================================================

/// Discriminant stored per element index.
///
/// `None` means the index is unallocated (or released).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ComponentType {
    #[default]
    None,
    Box,
    Text,
    Input,
}

// =============================================================================
// Style
// =============================================================================

/// Visual style mapping forwarded to an element.
///
/// Every field is optional; unset fields inherit whatever the element's
/// defaults are. The whole value is stored verbatim in the visual array -
/// the polymorphic wrapper forwards it without looking inside.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Option<Rgba>,
    /// Background color.
    pub bg: Option<Rgba>,
    /// Text attributes.
    pub attrs: Option<Attr>,
    /// Text alignment.
    pub align: Option<TextAlign>,
    /// Opacity (0-255, 255 = fully opaque).
    pub opacity: Option<u8>,
}

impl Style {
    /// Style with only a foreground color set.
    pub const fn fg(color: Rgba) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            attrs: None,
            align: None,
            opacity: None,
        }
    }

    /// Style with only a background color set.
    pub const fn bg(color: Rgba) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            attrs: None,
            align: None,
            opacity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_default() {
        assert!(Rgba::TERMINAL_DEFAULT.is_terminal_default());
        assert!(!Rgba::RED.is_terminal_default());
    }

    #[test]
    fn test_attr_bits() {
        let attrs = Attr::BOLD | Attr::UNDERLINE;
        assert!(attrs.contains(Attr::BOLD));
        assert!(!attrs.contains(Attr::ITALIC));
    }

    #[test]
    fn test_style_equality() {
        let a = Style {
            fg: Some(Rgba::RED),
            attrs: Some(Attr::BOLD),
            ..Default::default()
        };
        let b = a.clone();
        assert_eq!(a, b);
    }
}
