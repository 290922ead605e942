//! Style types.
//!
//! There is no process-wide theme: a [`Styles`] value is threaded through
//! every draw call, so the theme in effect is always explicit at the call
//! site.

mod color;

pub use color::Color;

/// A resolved style applied to a cell.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Bold text.
    pub bold: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            bold: false,
        }
    }
}

/// The style configuration passed to every draw call.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Styles {
    /// Ordinary widget text.
    pub text: Style,
    /// Border glyphs.
    pub border: Style,
    /// Border titles.
    pub title: Style,
}

impl Default for Styles {
    /// A plain white-on-black theme with bold titles.
    fn default() -> Self {
        Self {
            text: Style::default(),
            border: Style::default(),
            title: Style {
                bold: true,
                ..Style::default()
            },
        }
    }
}
