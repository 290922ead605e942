use std::{cell::RefCell, rc::Rc};

use crate::{geom::Rect, screen::Screen, style::Styles};

/// The capability a container requires of anything it lays out: report a
/// natural extent along one axis, accept an assigned rectangle, draw, and
/// report input focus. Nothing more - event handling, state, and lifetime
/// all belong to the item's owner.
pub trait Item {
    /// The item's preferred width, given the height it will be allotted.
    fn natural_width(&mut self, height: u32) -> u32;

    /// The item's preferred height, given the width it will be allotted.
    fn natural_height(&mut self, width: u32) -> u32;

    /// Accept the rectangle assigned by a parent. Called on every layout
    /// pass, before the item is asked to draw.
    fn set_rect(&mut self, rect: Rect);

    /// Draw the item onto the screen, within the most recently assigned
    /// rectangle.
    fn draw(&mut self, screen: &mut dyn Screen, styles: &Styles);

    /// Does this item currently hold input focus?
    fn has_focus(&self) -> bool {
        false
    }
}

/// A shared handle to an item. Containers hold these without owning the
/// item: the creator controls the item's lifetime, and the same handle can
/// appear in several entries or several containers. Identity is allocation
/// identity ([`Rc::ptr_eq`]).
pub type ItemRef = Rc<RefCell<dyn Item>>;

/// Wrap an item in a shared handle.
pub fn item<T: Item + 'static>(item: T) -> ItemRef {
    Rc::new(RefCell::new(item))
}
