use std::rc::Rc;

use crate::{
    base::Base,
    geom::Rect,
    item::{Item, ItemRef},
    screen::Screen,
    style::Styles,
};

/// The axis a container stacks its entries along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Entries are placed side by side along the horizontal axis.
    #[default]
    Column,
    /// Entries are stacked along the vertical axis.
    Row,
}

/// How much space an entry is allotted along the layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemSize {
    /// Exactly this many cells.
    Fixed(u32),
    /// Whatever the item reports as its natural size along the layout axis,
    /// given the cross-axis extent as a hint.
    Natural,
}

/// One slot in a container. The item is absent for spacer entries, which
/// consume layout space but draw nothing.
#[derive(Clone)]
struct LayoutEntry {
    item: Option<ItemRef>,
    size: ItemSize,
    attracts_focus: bool,
}

impl LayoutEntry {
    /// Does this entry reference the same item allocation?
    fn references(&self, item: &ItemRef) -> bool {
        self.item.as_ref().is_some_and(|i| Rc::ptr_eq(i, item))
    }
}

/// Stacks items one after another along a single axis, within its own
/// rectangle. Each entry is allotted either a fixed extent or the item's
/// natural extent; entries that no longer fit are clipped and then dropped
/// for the frame. Geometry is recomputed from scratch on every draw - there
/// is no cached layout state between frames.
///
/// A container is itself an [`Item`], so containers nest.
pub struct Container {
    base: Base,
    items: Vec<LayoutEntry>,
    direction: Direction,
    full_screen: bool,
}

impl Container {
    /// A new empty container stacking in [`Direction::Column`], with a
    /// transparent background. Spacer slots therefore leave whatever was
    /// previously drawn beneath them; set a background on the base to clear
    /// the container's area each frame instead.
    pub fn new() -> Self {
        Self {
            base: Base::new(),
            items: Vec::new(),
            direction: Direction::default(),
            full_screen: false,
        }
    }

    /// The embedded box base.
    pub fn base(&self) -> &Base {
        &self.base
    }

    /// The embedded box base, for configuration (border, background, title).
    pub fn base_mut(&mut self) -> &mut Base {
        &mut self.base
    }

    /// Set the axis entries are stacked along. Takes effect on the next
    /// draw.
    pub fn set_direction(&mut self, direction: Direction) -> &mut Self {
        self.direction = direction;
        self
    }

    /// When set, the container's rectangle is overwritten with the full
    /// screen size on every draw, before layout runs.
    pub fn set_full_screen(&mut self, full_screen: bool) -> &mut Self {
        self.full_screen = full_screen;
        self
    }

    /// Append an item. If `attracts_focus` is set, [`Container::focus`]
    /// delegates to this item; when several entries set it, only the first
    /// in insertion order is ever honored. Deliberate blank space goes
    /// through [`Container::add_spacer`].
    pub fn add_item(
        &mut self,
        item: ItemRef,
        size: ItemSize,
        attracts_focus: bool,
    ) -> &mut Self {
        self.items.push(LayoutEntry {
            item: Some(item),
            size,
            attracts_focus,
        });
        self
    }

    /// Append a spacer: an entry that consumes layout space but draws
    /// nothing. A `Fixed` spacer advances the layout cursor by its extent;
    /// a `Natural` spacer advances it by nothing at all.
    pub fn add_spacer(&mut self, size: ItemSize) -> &mut Self {
        self.items.push(LayoutEntry {
            item: None,
            size,
            attracts_focus: false,
        });
        self
    }

    /// Remove every entry referencing the given item, keeping the order of
    /// the remaining entries intact. No-op if the item is not present.
    pub fn remove_item(&mut self, item: &ItemRef) -> &mut Self {
        self.items.retain(|e| !e.references(item));
        self
    }

    /// Discard all entries.
    pub fn clear(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Set a new size on every entry referencing the given item. No-op if
    /// the item is not present. The `proportion` argument is accepted for
    /// call-site symmetry with proportional layout APIs and has no effect.
    pub fn resize_item(&mut self, item: &ItemRef, size: ItemSize, proportion: u32) -> &mut Self {
        let _ = proportion;
        for e in &mut self.items {
            if e.references(item) {
                e.size = size;
            }
        }
        self
    }

    /// The number of entries, spacers included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True if the container has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Draw the container and its entries.
    ///
    /// The base is drawn first, with the rectangle currently assigned; in
    /// full-screen mode the rectangle is then replaced by the screen's size
    /// before any child is placed. Entries are walked in order with a
    /// running cursor: each present item is assigned a rectangle spanning
    /// the full cross-axis extent, clipped to the space left, and drawn.
    /// An entry clipped to nothing is skipped; once the cursor passes the
    /// end of the inner rectangle the walk stops and later entries are not
    /// drawn this frame. An item that reports focus has its draw deferred
    /// until after every other entry, so the cursor it renders stays on
    /// top.
    pub fn draw(&mut self, screen: &mut dyn Screen, styles: &Styles) {
        self.base.draw(screen, styles);

        if self.full_screen {
            self.base.set_rect(screen.size().rect());
        }

        let inner = self.base.inner_rect();
        let (start, extent, cross) = match self.direction {
            Direction::Column => (inner.tl.x, inner.w, inner.h),
            Direction::Row => (inner.tl.y, inner.h, inner.w),
        };

        // A fixed spacer may push the cursor past the limit, so the walk is
        // done in signed arithmetic.
        let limit = i64::from(start) + i64::from(extent);
        let mut pos = i64::from(start);
        let mut deferred: Option<ItemRef> = None;

        for entry in &self.items {
            let Some(item) = &entry.item else {
                // Spacers advance the cursor and are exempt from the
                // overflow stop below.
                if let ItemSize::Fixed(n) = entry.size {
                    pos += i64::from(n);
                }
                continue;
            };

            let mut size = match entry.size {
                ItemSize::Fixed(n) => i64::from(n),
                ItemSize::Natural => i64::from(match self.direction {
                    Direction::Column => item.borrow_mut().natural_width(cross),
                    Direction::Row => item.borrow_mut().natural_height(cross),
                }),
            };
            if pos + size > limit {
                size = limit - pos;
            }

            if size > 0 {
                let rect = match self.direction {
                    Direction::Column => Rect::new(pos as u32, inner.tl.y, size as u32, cross),
                    Direction::Row => Rect::new(inner.tl.x, pos as u32, cross, size as u32),
                };
                item.borrow_mut().set_rect(rect);
                pos += size;
                let focused = item.borrow().has_focus();
                if focused && deferred.is_none() {
                    deferred = Some(item.clone());
                } else {
                    item.borrow_mut().draw(screen, styles);
                }
            }

            if pos > limit {
                break;
            }
        }

        if let Some(item) = deferred {
            item.borrow_mut().draw(screen, styles);
        }
    }

    /// Receive focus: delegate to the first entry whose item is present and
    /// attracts focus, then stop. If no entry qualifies, the delegate is
    /// never called and the container keeps focus itself.
    pub fn focus(&self, delegate: &mut dyn FnMut(ItemRef)) {
        for entry in &self.items {
            if let Some(item) = &entry.item {
                if entry.attracts_focus {
                    delegate(item.clone());
                    return;
                }
            }
        }
    }

    /// Does any child item report holding focus? This is pure aggregation:
    /// the `attracts_focus` flag plays no part, and an item that acquired
    /// focus directly is reflected here too.
    pub fn has_focus(&self) -> bool {
        self.items.iter().any(|e| {
            e.item
                .as_ref()
                .is_some_and(|item| item.borrow().has_focus())
        })
    }
}

impl Item for Container {
    /// The container's natural width is whatever width it currently has.
    fn natural_width(&mut self, _height: u32) -> u32 {
        self.base.rect().w
    }

    /// The container's natural height is whatever height it currently has.
    fn natural_height(&mut self, _width: u32) -> u32 {
        self.base.rect().h
    }

    fn set_rect(&mut self, rect: Rect) {
        self.base.set_rect(rect);
    }

    fn draw(&mut self, screen: &mut dyn Screen, styles: &Styles) {
        Self::draw(self, screen, styles);
    }

    fn has_focus(&self) -> bool {
        Self::has_focus(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tutils::TestItem;

    #[test]
    fn remove_hits_every_entry_of_the_item() {
        let a = TestItem::new(1, 1).into_ref();
        let b = TestItem::new(1, 1).into_ref();
        let c = TestItem::new(1, 1).into_ref();

        let mut cont = Container::new();
        cont.add_item(a.clone(), ItemSize::Natural, false)
            .add_item(b.clone(), ItemSize::Natural, false)
            .add_item(a.clone(), ItemSize::Natural, false)
            .add_item(c.clone(), ItemSize::Natural, false);
        assert_eq!(cont.len(), 4);

        cont.remove_item(&a);
        assert_eq!(cont.len(), 2);
        assert!(cont.items[0].references(&b));
        assert!(cont.items[1].references(&c));
    }

    #[test]
    fn remove_missing_is_a_noop() {
        let a = TestItem::new(1, 1).into_ref();
        let b = TestItem::new(1, 1).into_ref();

        let mut cont = Container::new();
        cont.add_item(a.clone(), ItemSize::Natural, false);
        cont.remove_item(&b);
        assert_eq!(cont.len(), 1);
    }

    #[test]
    fn resize_hits_every_entry_of_the_item() {
        let a = TestItem::new(1, 1).into_ref();
        let b = TestItem::new(1, 1).into_ref();

        let mut cont = Container::new();
        cont.add_item(a.clone(), ItemSize::Fixed(3), false)
            .add_item(b.clone(), ItemSize::Fixed(5), false)
            .add_item(a.clone(), ItemSize::Natural, false);

        cont.resize_item(&a, ItemSize::Fixed(7), 1);
        assert_eq!(cont.items[0].size, ItemSize::Fixed(7));
        assert_eq!(cont.items[1].size, ItemSize::Fixed(5));
        assert_eq!(cont.items[2].size, ItemSize::Fixed(7));

        // Resizing an absent item changes nothing.
        let c = TestItem::new(1, 1).into_ref();
        cont.resize_item(&c, ItemSize::Fixed(9), 1);
        assert_eq!(cont.items[1].size, ItemSize::Fixed(5));
    }

    #[test]
    fn clear_discards_all_entries() {
        let a = TestItem::new(1, 1).into_ref();
        let mut cont = Container::new();
        cont.add_item(a, ItemSize::Natural, false)
            .add_spacer(ItemSize::Fixed(2));
        assert!(!cont.is_empty());
        cont.clear();
        assert!(cont.is_empty());
    }

    #[test]
    fn spacers_are_plain_entries() {
        let mut cont = Container::new();
        cont.add_spacer(ItemSize::Fixed(4));
        assert_eq!(cont.len(), 1);
        assert!(cont.items[0].item.is_none());
        assert!(!cont.items[0].attracts_focus);
    }

    #[test]
    fn distinct_allocations_are_distinct_items() {
        // Two identically configured items are still different entries.
        let a = TestItem::new(1, 1).into_ref();
        let b = TestItem::new(1, 1).into_ref();
        let mut cont = Container::new();
        cont.add_item(a.clone(), ItemSize::Natural, false)
            .add_item(b, ItemSize::Natural, false);
        cont.remove_item(&a);
        assert_eq!(cont.len(), 1);
    }
}
