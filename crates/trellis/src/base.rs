use crate::{
    geom::{Frame, Line, Rect},
    screen::Screen,
    style::{Color, Style, Styles},
};

/// Defines the set of glyphs used to draw a border.
#[derive(Debug, Clone, Copy)]
pub struct FrameGlyphs {
    /// Top-left corner glyph.
    pub topleft: char,
    /// Top-right corner glyph.
    pub topright: char,
    /// Bottom-left corner glyph.
    pub bottomleft: char,
    /// Bottom-right corner glyph.
    pub bottomright: char,
    /// Horizontal edge glyph.
    pub horizontal: char,
    /// Vertical edge glyph.
    pub vertical: char,
}

/// Single line thin Unicode box drawing set.
pub const SINGLE: FrameGlyphs = FrameGlyphs {
    topleft: '┌',
    topright: '┐',
    bottomleft: '└',
    bottomright: '┘',
    horizontal: '─',
    vertical: '│',
};

/// Double line Unicode box drawing set.
pub const DOUBLE: FrameGlyphs = FrameGlyphs {
    topleft: '╔',
    topright: '╗',
    bottomleft: '╚',
    bottomright: '╝',
    horizontal: '═',
    vertical: '║',
};

/// The rectangle/box base every composite embeds: position and size storage,
/// an optional one-cell border with a title, and an optional background
/// fill. The background defaults to `None`, which is transparent - cells the
/// box doesn't draw keep whatever was on screen before.
#[derive(Debug, Clone)]
pub struct Base {
    rect: Rect,
    border: bool,
    background: Option<Color>,
    title: Option<String>,
    glyphs: FrameGlyphs,
}

impl Base {
    /// A new base: zero rect, no border, transparent background.
    pub fn new() -> Self {
        Self {
            rect: Rect::zero(),
            border: false,
            background: None,
            title: None,
            glyphs: SINGLE,
        }
    }

    /// The currently assigned rectangle.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Assign a rectangle.
    pub fn set_rect(&mut self, rect: Rect) -> &mut Self {
        self.rect = rect;
        self
    }

    /// Turn the one-cell border on or off.
    pub fn set_border(&mut self, border: bool) -> &mut Self {
        self.border = border;
        self
    }

    /// Set the background fill. `None` leaves the background transparent.
    pub fn set_background(&mut self, background: Option<Color>) -> &mut Self {
        self.background = background;
        self
    }

    /// Set the title drawn on the top border edge. Only visible when the
    /// border is on.
    pub fn set_title(&mut self, title: impl Into<String>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    /// Set the border glyph set.
    pub fn set_glyphs(&mut self, glyphs: FrameGlyphs) -> &mut Self {
        self.glyphs = glyphs;
        self
    }

    /// The content rectangle: the assigned rect minus the border, if any.
    pub fn inner_rect(&self) -> Rect {
        if self.border {
            Frame::new(self.rect, 1).inner()
        } else {
            self.rect
        }
    }

    /// Draw the background fill and border. Rects too small for their border
    /// draw nothing but the fill.
    pub fn draw(&self, screen: &mut dyn Screen, styles: &Styles) {
        if let Some(bg) = self.background {
            let style = Style {
                bg,
                ..styles.text.clone()
            };
            screen.fill(self.rect, ' ', &style);
        }
        if !self.border {
            return;
        }
        let f = Frame::new(self.rect, 1);
        let g = &self.glyphs;
        screen.fill(f.top, g.horizontal, &styles.border);
        screen.fill(f.bottom, g.horizontal, &styles.border);
        screen.fill(f.left, g.vertical, &styles.border);
        screen.fill(f.right, g.vertical, &styles.border);
        screen.fill(f.topleft, g.topleft, &styles.border);
        screen.fill(f.topright, g.topright, &styles.border);
        screen.fill(f.bottomleft, g.bottomleft, &styles.border);
        screen.fill(f.bottomright, g.bottomright, &styles.border);
        if let Some(title) = &self.title {
            if !f.top.is_empty() {
                let txt = format!(" {title} ");
                screen.text(
                    Line::new(f.top.tl.x, f.top.tl.y, f.top.w),
                    &txt,
                    &styles.title,
                );
            }
        }
    }
}
