//! Integration tests for layout behavior.

#[cfg(test)]
mod tests {
    use trellis::{
        Container, Direction, ItemSize, Rect, Styles, TermBuf,
        tutils::{DrawLog, TestItem},
    };

    /// A 20x5 undecorated container at the origin, ready to lay out.
    fn container(w: u32, h: u32) -> Container {
        let mut c = Container::new();
        c.base_mut().set_rect(Rect::new(0, 0, w, h));
        c
    }

    #[test]
    fn fixed_sizes_stack_at_cumulative_offsets() {
        let a = TestItem::new(1, 1).into_handle();
        let b = TestItem::new(1, 1).into_handle();
        let c = TestItem::new(1, 1).into_handle();

        let mut cont = container(20, 5);
        cont.add_item(a.clone(), ItemSize::Fixed(3), false)
            .add_item(b.clone(), ItemSize::Fixed(5), false)
            .add_item(c.clone(), ItemSize::Fixed(2), false);

        let mut buf = TermBuf::new((20, 5));
        cont.draw(&mut buf, &Styles::default());

        assert_eq!(a.borrow().rect(), Rect::new(0, 0, 3, 5));
        assert_eq!(b.borrow().rect(), Rect::new(3, 0, 5, 5));
        assert_eq!(c.borrow().rect(), Rect::new(8, 0, 2, 5));
    }

    #[test]
    fn overflow_clips_to_remainder_and_stops_allocating() {
        let log = DrawLog::new();
        let a = TestItem::new(1, 1).named("a").logged(&log).into_handle();
        let b = TestItem::new(1, 1).named("b").logged(&log).into_handle();
        let c = TestItem::new(1, 1).named("c").logged(&log).into_handle();

        let mut cont = container(10, 2);
        cont.add_item(a.clone(), ItemSize::Fixed(6), false)
            .add_item(b.clone(), ItemSize::Fixed(6), false)
            .add_item(c.clone(), ItemSize::Fixed(3), false);

        let mut buf = TermBuf::new((10, 2));
        cont.draw(&mut buf, &Styles::default());

        assert_eq!(a.borrow().rect(), Rect::new(0, 0, 6, 2));
        // The partially fitting item is clipped to exactly fill the remainder.
        assert_eq!(b.borrow().rect(), Rect::new(6, 0, 4, 2));
        // The rest of the entries receive no rectangle and are not drawn.
        assert_eq!(c.borrow().rect(), Rect::zero());
        assert_eq!(log.names(), vec!["a", "b"]);
    }

    #[test]
    fn natural_size_uses_cross_axis_hint() {
        let a = TestItem::new(4, 7).into_handle();

        let mut cont = container(10, 6);
        cont.add_item(a.clone(), ItemSize::Natural, false);

        let mut buf = TermBuf::new((10, 6));
        cont.draw(&mut buf, &Styles::default());

        // Column direction: the natural width is requested with the shared
        // height as the hint.
        assert_eq!(a.borrow().rect(), Rect::new(0, 0, 4, 6));
        assert_eq!(a.borrow().last_hint(), Some(6));

        let mut cont = container(10, 6);
        cont.set_direction(Direction::Row)
            .add_item(a.clone(), ItemSize::Natural, false);
        cont.draw(&mut buf, &Styles::default());

        // Row direction: natural height, hinted with the shared width.
        assert_eq!(a.borrow().rect(), Rect::new(0, 0, 10, 6));
        assert_eq!(a.borrow().last_hint(), Some(10));
    }

    #[test]
    fn mixed_sizes_worked_example() {
        // Inner width 10: fixed 3, natural 4, fixed 10 become widths 3, 4 and a
        // clipped 3, at x = 0, 3 and 7.
        let a = TestItem::new(1, 1).into_handle();
        let b = TestItem::new(4, 1).into_handle();
        let c = TestItem::new(1, 1).into_handle();

        let mut cont = container(10, 3);
        cont.add_item(a.clone(), ItemSize::Fixed(3), false)
            .add_item(b.clone(), ItemSize::Natural, false)
            .add_item(c.clone(), ItemSize::Fixed(10), false);

        let mut buf = TermBuf::new((10, 3));
        cont.draw(&mut buf, &Styles::default());

        assert_eq!(a.borrow().rect(), Rect::new(0, 0, 3, 3));
        assert_eq!(b.borrow().rect(), Rect::new(3, 0, 4, 3));
        assert_eq!(c.borrow().rect(), Rect::new(7, 0, 3, 3));
    }

    #[test]
    fn fixed_spacer_advances_the_cursor() {
        let a = TestItem::new(1, 1).into_handle();

        let mut cont = container(10, 2);
        cont.add_spacer(ItemSize::Fixed(4))
            .add_item(a.clone(), ItemSize::Fixed(3), false);

        let mut buf = TermBuf::new((10, 2));
        cont.draw(&mut buf, &Styles::default());

        assert_eq!(a.borrow().rect(), Rect::new(4, 0, 3, 2));
    }

    #[test]
    fn natural_spacer_advances_nothing() {
        let a = TestItem::new(1, 1).into_handle();

        let mut cont = container(10, 2);
        cont.add_spacer(ItemSize::Natural)
            .add_item(a.clone(), ItemSize::Fixed(3), false);

        let mut buf = TermBuf::new((10, 2));
        cont.draw(&mut buf, &Styles::default());

        assert_eq!(a.borrow().rect(), Rect::new(0, 0, 3, 2));
    }

    #[test]
    fn spacer_overflow_does_not_stop_walk() {
        // A spacer may push the cursor past the limit without ending the walk;
        // the walk only stops at the next item entry, which is first clipped to
        // nothing and skipped.
        let log = DrawLog::new();
        let a = TestItem::new(1, 1).named("a").logged(&log).into_handle();
        let b = TestItem::new(1, 1).named("b").logged(&log).into_handle();

        let mut cont = container(5, 2);
        cont.add_spacer(ItemSize::Fixed(10))
            .add_item(a.clone(), ItemSize::Fixed(3), false)
            .add_item(b.clone(), ItemSize::Fixed(2), false);

        let mut buf = TermBuf::new((5, 2));
        cont.draw(&mut buf, &Styles::default());

        assert_eq!(a.borrow().rect(), Rect::zero());
        assert_eq!(b.borrow().rect(), Rect::zero());
        assert!(log.names().is_empty());
    }

    #[test]
    fn zero_size_entries_are_skipped_without_stopping() {
        let log = DrawLog::new();
        let a = TestItem::new(1, 1).named("a").logged(&log).into_handle();
        let b = TestItem::new(1, 1).named("b").logged(&log).into_handle();

        let mut cont = container(10, 2);
        cont.add_item(a.clone(), ItemSize::Fixed(0), false)
            .add_item(b.clone(), ItemSize::Fixed(3), false);

        let mut buf = TermBuf::new((10, 2));
        cont.draw(&mut buf, &Styles::default());

        // The zero-size entry gets no rectangle, and the next entry still lays
        // out from the unchanged cursor.
        assert_eq!(a.borrow().rect(), Rect::zero());
        assert_eq!(b.borrow().rect(), Rect::new(0, 0, 3, 2));
        assert_eq!(log.names(), vec!["b"]);
    }

    #[test]
    fn exact_fit_leaves_later_entries_undrawn() {
        let log = DrawLog::new();
        let a = TestItem::new(1, 1).named("a").logged(&log).into_handle();
        let b = TestItem::new(1, 1).named("b").logged(&log).into_handle();

        let mut cont = container(10, 2);
        cont.add_item(a.clone(), ItemSize::Fixed(10), false)
            .add_item(b.clone(), ItemSize::Fixed(2), false);

        let mut buf = TermBuf::new((10, 2));
        cont.draw(&mut buf, &Styles::default());

        assert_eq!(a.borrow().rect(), Rect::new(0, 0, 10, 2));
        assert_eq!(b.borrow().rect(), Rect::zero());
        assert_eq!(log.names(), vec!["a"]);
    }

    #[test]
    fn row_direction_stacks_vertically() {
        let a = TestItem::new(1, 1).into_handle();
        let b = TestItem::new(1, 3).into_handle();

        let mut cont = container(8, 10);
        cont.set_direction(Direction::Row)
            .add_item(a.clone(), ItemSize::Fixed(2), false)
            .add_item(b.clone(), ItemSize::Natural, false);

        let mut buf = TermBuf::new((8, 10));
        cont.draw(&mut buf, &Styles::default());

        assert_eq!(a.borrow().rect(), Rect::new(0, 0, 8, 2));
        assert_eq!(b.borrow().rect(), Rect::new(0, 2, 8, 3));
    }

    #[test]
    fn full_screen_overrides_assigned_rect() {
        let a = TestItem::new(1, 1).into_handle();

        let mut cont = container(10, 10);
        cont.base_mut().set_rect(Rect::new(5, 5, 10, 10));
        cont.set_full_screen(true)
            .add_item(a.clone(), ItemSize::Fixed(5), false);

        // An 80x24 screen.
        let mut buf = TermBuf::new((80, 24));
        cont.draw(&mut buf, &Styles::default());

        assert_eq!(cont.base().rect(), Rect::new(0, 0, 80, 24));
        assert_eq!(a.borrow().rect(), Rect::new(0, 0, 5, 24));
    }

    #[test]
    fn border_offsets_children_into_inner_rect() {
        let a = TestItem::new(1, 1).into_handle();

        let mut cont = container(10, 5);
        cont.base_mut().set_border(true);
        cont.add_item(a.clone(), ItemSize::Fixed(3), false);

        let mut buf = TermBuf::new((10, 5));
        cont.draw(&mut buf, &Styles::default());

        assert_eq!(a.borrow().rect(), Rect::new(1, 1, 3, 3));
    }

    #[test]
    fn layout_is_recomputed_every_draw() {
        let a = TestItem::new(1, 1).into_handle();

        let mut cont = container(10, 2);
        cont.add_item(a.clone(), ItemSize::Fixed(4), false);

        let mut buf = TermBuf::new((10, 2));
        cont.draw(&mut buf, &Styles::default());
        assert_eq!(a.borrow().rect(), Rect::new(0, 0, 4, 2));

        // Configuration changes take effect on the next draw, with no state
        // carried over.
        let handle: trellis::ItemRef = a.clone();
        cont.resize_item(&handle, ItemSize::Fixed(6), 0);
        cont.base_mut().set_rect(Rect::new(2, 0, 10, 2));
        cont.draw(&mut buf, &Styles::default());
        assert_eq!(a.borrow().rect(), Rect::new(2, 0, 6, 2));
    }
}
