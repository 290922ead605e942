use super::Rect;

/// The border region of a rectangle, decomposed into the four sides (corners
/// excluded) and the four corners.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Frame {
    /// The top of the frame, not including corners.
    pub top: Rect,
    /// The bottom of the frame, not including corners.
    pub bottom: Rect,
    /// The left of the frame, not including corners.
    pub left: Rect,
    /// The right of the frame, not including corners.
    pub right: Rect,
    /// The top left corner.
    pub topleft: Rect,
    /// The top right corner.
    pub topright: Rect,
    /// The bottom left corner.
    pub bottomleft: Rect,
    /// The bottom right corner.
    pub bottomright: Rect,
    /// The original outer rect.
    outer: Rect,
    /// The border width.
    border: u32,
}

impl Frame {
    /// Construct a frame over a rect with the given border width. If the rect
    /// is too small to hold the border, the parts are all zero and `inner`
    /// is empty.
    pub fn new(rect: Rect, border: u32) -> Self {
        let (x, y) = (rect.tl.x, rect.tl.y);
        let b = border;
        if rect.w <= b * 2 || rect.h <= b * 2 {
            let mut f = Self::zero();
            f.outer = rect;
            f.border = b;
            return f;
        }
        Self {
            top: Rect::new(x + b, y, rect.w - 2 * b, b),
            bottom: Rect::new(x + b, y + rect.h - b, rect.w - 2 * b, b),
            left: Rect::new(x, y + b, b, rect.h - 2 * b),
            right: Rect::new(x + rect.w - b, y + b, b, rect.h - 2 * b),
            topleft: Rect::new(x, y, b, b),
            topright: Rect::new(x + rect.w - b, y, b, b),
            bottomleft: Rect::new(x, y + rect.h - b, b, b),
            bottomright: Rect::new(x + rect.w - b, y + rect.h - b, b, b),
            outer: rect,
            border: b,
        }
    }

    /// The all-zero frame.
    pub fn zero() -> Self {
        Self {
            top: Rect::zero(),
            bottom: Rect::zero(),
            left: Rect::zero(),
            right: Rect::zero(),
            topleft: Rect::zero(),
            topright: Rect::zero(),
            bottomleft: Rect::zero(),
            bottomright: Rect::zero(),
            outer: Rect::zero(),
            border: 0,
        }
    }

    /// The content rect inside the frame. Empty if the outer rect cannot
    /// hold the border.
    pub fn inner(&self) -> Rect {
        let b = self.border;
        if self.outer.w <= b * 2 || self.outer.h <= b * 2 {
            Rect::zero()
        } else {
            Rect::new(
                self.outer.tl.x + b,
                self.outer.tl.y + b,
                self.outer.w - 2 * b,
                self.outer.h - 2 * b,
            )
        }
    }

    /// The outer rect this frame was constructed over.
    pub fn outer(&self) -> Rect {
        self.outer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tframe() {
        let r = Rect::new(10, 10, 10, 10);
        let f = Frame::new(r, 1);
        assert_eq!(f.top, Rect::new(11, 10, 8, 1));
        assert_eq!(f.bottom, Rect::new(11, 19, 8, 1));
        assert_eq!(f.left, Rect::new(10, 11, 1, 8));
        assert_eq!(f.right, Rect::new(19, 11, 1, 8));
        assert_eq!(f.topleft, Rect::new(10, 10, 1, 1));
        assert_eq!(f.topright, Rect::new(19, 10, 1, 1));
        assert_eq!(f.bottomleft, Rect::new(10, 19, 1, 1));
        assert_eq!(f.bottomright, Rect::new(19, 19, 1, 1));
        assert_eq!(f.inner(), Rect::new(11, 11, 8, 8));
        assert_eq!(f.outer(), r);
    }

    #[test]
    fn degenerate() {
        // A rect too small for its border produces a zero frame, but the
        // outer rect is preserved.
        let r = Rect::new(0, 0, 2, 2);
        let f = Frame::new(r, 1);
        assert_eq!(f.top, Rect::zero());
        assert_eq!(f.inner(), Rect::zero());
        assert_eq!(f.outer(), r);
    }
}
