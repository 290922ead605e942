use crate::{
    geom::{Expanse, Line, Point, Rect},
    screen::Screen,
    style::Style,
};

/// Marks a cell nothing has drawn to yet. Untouched cells are transparent:
/// the backend leaves whatever was previously on screen in place.
const NUL: char = '\0';

/// A single screen cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    /// The character in the cell.
    pub ch: char,
    /// The style the cell is drawn with.
    pub style: Style,
}

/// An in-memory grid of cells. This is the concrete [`Screen`] the backend
/// flushes to the terminal, and the surface tests assert against.
#[derive(Clone, Debug)]
pub struct TermBuf {
    size: Expanse,
    cells: Vec<Cell>,
}

impl TermBuf {
    /// Create a buffer of untouched cells.
    pub fn new(size: impl Into<Expanse>) -> Self {
        let size = size.into();
        let cell = Cell {
            ch: NUL,
            style: Style::default(),
        };
        Self {
            size,
            cells: vec![cell; size.area() as usize],
        }
    }

    /// The buffer's rect, at the origin.
    pub fn rect(&self) -> Rect {
        self.size.rect()
    }

    /// The cell at a point, if it lies within the buffer.
    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// Has anything been drawn to this cell?
    pub fn touched(&self, p: Point) -> bool {
        self.get(p).is_some_and(|c| c.ch != NUL)
    }

    /// The buffer contents as one string per row, with untouched cells
    /// rendered as spaces.
    pub fn lines(&self) -> Vec<String> {
        let mut ret = Vec::with_capacity(self.size.h as usize);
        for y in 0..self.size.h {
            let mut line = String::with_capacity(self.size.w as usize);
            for x in 0..self.size.w {
                let ch = self.cells[self.idx_unchecked(Point { x, y })].ch;
                line.push(if ch == NUL { ' ' } else { ch });
            }
            ret.push(line);
        }
        ret
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if self.rect().contains_point(p) {
            Some(self.idx_unchecked(p))
        } else {
            None
        }
    }

    fn idx_unchecked(&self, p: Point) -> usize {
        p.y as usize * self.size.w as usize + p.x as usize
    }
}

impl Screen for TermBuf {
    fn size(&self) -> Expanse {
        self.size
    }

    fn put(&mut self, p: Point, ch: char, style: &Style) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = Cell {
                ch,
                style: style.clone(),
            };
        }
    }

    fn fill(&mut self, r: Rect, ch: char, style: &Style) {
        if let Some(isec) = self.rect().intersect(&r) {
            for y in isec.tl.y..isec.tl.y + isec.h {
                for x in isec.tl.x..isec.tl.x + isec.w {
                    self.put(Point { x, y }, ch, style);
                }
            }
        }
    }

    fn text(&mut self, l: Line, txt: &str, style: &Style) {
        let mut x = l.tl.x;
        let end = l.tl.x + l.w;
        for ch in txt.chars() {
            if x >= end {
                break;
            }
            self.put(Point { x, y: l.tl.y }, ch, style);
            x += 1;
        }
    }
}
