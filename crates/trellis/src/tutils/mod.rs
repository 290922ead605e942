//! Utilities for testing containers and items.

pub mod buf;

use std::{cell::RefCell, rc::Rc};

use crate::{
    geom::{Expanse, Rect},
    item::{Item, ItemRef},
    screen::Screen,
    style::Styles,
};

/// A shared record of draw calls, in the order they happened.
#[derive(Debug, Default, Clone)]
pub struct DrawLog(Rc<RefCell<Vec<String>>>);

impl DrawLog {
    /// A new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a draw.
    pub fn push(&self, name: &str) {
        self.0.borrow_mut().push(name.into());
    }

    /// The recorded names, in draw order.
    pub fn names(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

/// A minimal item for tests: a fixed natural size, a fill character, a
/// settable focus flag. It records the rectangle it was assigned, the last
/// sizing hint it was given, and (optionally) its draws into a [`DrawLog`].
pub struct TestItem {
    natural: Expanse,
    rect: Rect,
    focused: bool,
    ch: char,
    name: String,
    last_hint: Option<u32>,
    log: Option<DrawLog>,
}

impl TestItem {
    /// A test item with the given natural width and height, drawn with 'x'.
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            natural: Expanse::new(w, h),
            rect: Rect::zero(),
            focused: false,
            ch: 'x',
            name: "item".into(),
            last_hint: None,
            log: None,
        }
    }

    /// Set the name recorded in the draw log and the fill character (the
    /// name's first character).
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        if let Some(c) = name.chars().next() {
            self.ch = c;
        }
        self
    }

    /// Record draws into the given log.
    pub fn logged(mut self, log: &DrawLog) -> Self {
        self.log = Some(log.clone());
        self
    }

    /// Finish construction, yielding a concrete shared handle. The handle
    /// coerces to [`ItemRef`] wherever one is expected.
    pub fn into_handle(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }

    /// Finish construction, yielding an [`ItemRef`] directly.
    pub fn into_ref(self) -> ItemRef {
        self.into_handle()
    }

    /// Set or clear the focus flag.
    pub fn set_focus(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// The rectangle most recently assigned by a container.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The cross-axis hint passed to the most recent natural-size query.
    pub fn last_hint(&self) -> Option<u32> {
        self.last_hint
    }
}

impl Item for TestItem {
    fn natural_width(&mut self, height: u32) -> u32 {
        self.last_hint = Some(height);
        self.natural.w
    }

    fn natural_height(&mut self, width: u32) -> u32 {
        self.last_hint = Some(width);
        self.natural.h
    }

    fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    fn draw(&mut self, screen: &mut dyn Screen, styles: &Styles) {
        screen.fill(self.rect, self.ch, &styles.text);
        if let Some(log) = &self.log {
            log.push(&self.name);
        }
    }

    fn has_focus(&self) -> bool {
        self.focused
    }
}
