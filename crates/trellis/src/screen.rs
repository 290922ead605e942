use crate::{
    geom::{Expanse, Line, Point, Rect},
    style::Style,
};

/// The drawing surface handed to every item. Writes that fall outside the
/// screen are clipped silently; none of these operations can fail.
pub trait Screen {
    /// The current screen dimensions. Containers in full-screen mode size
    /// themselves to this every frame.
    fn size(&self) -> Expanse;

    /// Write a single cell.
    fn put(&mut self, p: Point, ch: char, style: &Style);

    /// Fill a rectangle with a character.
    fn fill(&mut self, r: Rect, ch: char, style: &Style);

    /// Write text along a line, truncated to the line's width.
    fn text(&mut self, l: Line, txt: &str, style: &Style);
}
