//! A small demo of nested containers.
//!
//! Left/Right move the focus highlight between blocks, `+` appends a block,
//! backspace removes the focused one, `q` or Esc quits. Set `TRELLIS_LOG` to
//! a path to capture tracing output.

use std::{cell::RefCell, env, fs::File, rc::Rc, sync::Mutex};

use crossterm::event::KeyCode;
use trellis::{
    Base, Container, DOUBLE, Direction, Item, ItemRef, ItemSize, Line, Rect, Result, SINGLE,
    Screen, Styles, backend::crossterm::runloop,
};

/// A bordered block of text that highlights its border when focused.
struct TextBlock {
    base: Base,
    lines: Vec<String>,
    focused: bool,
}

impl TextBlock {
    fn new(text: &str) -> Rc<RefCell<Self>> {
        let mut base = Base::new();
        base.set_border(true);
        Rc::new(RefCell::new(Self {
            base,
            lines: text.lines().map(String::from).collect(),
            focused: false,
        }))
    }
}

impl Item for TextBlock {
    fn natural_width(&mut self, _height: u32) -> u32 {
        self.lines.iter().map(|l| l.chars().count() as u32).max().unwrap_or(0) + 2
    }

    fn natural_height(&mut self, _width: u32) -> u32 {
        self.lines.len() as u32 + 2
    }

    fn set_rect(&mut self, rect: Rect) {
        self.base.set_rect(rect);
    }

    fn draw(&mut self, screen: &mut dyn Screen, styles: &Styles) {
        if self.focused {
            self.base.set_glyphs(DOUBLE);
        } else {
            self.base.set_glyphs(SINGLE);
        }
        self.base.draw(screen, styles);
        let inner = self.base.inner_rect();
        for (i, line) in self.lines.iter().enumerate() {
            if i as u32 >= inner.h {
                break;
            }
            screen.text(
                Line::new(inner.tl.x, inner.tl.y + i as u32, inner.w),
                line,
                &styles.text,
            );
        }
    }

    fn has_focus(&self) -> bool {
        self.focused
    }
}

fn main() -> Result<()> {
    if let Ok(path) = env::var("TRELLIS_LOG") {
        let file = File::create(path)?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .init();
    }

    let mut blocks = vec![
        TextBlock::new("left\nhand"),
        TextBlock::new("middle\nblock"),
        TextBlock::new("right"),
    ];
    let mut current = 0;
    blocks[current].borrow_mut().focused = true;

    let column = {
        let mut c = Container::new();
        for b in &blocks {
            c.add_item(b.clone(), ItemSize::Natural, false);
        }
        Rc::new(RefCell::new(c))
    };

    let mut root = Container::new();
    root.set_direction(Direction::Row).set_full_screen(true);
    root.base_mut().set_border(true).set_title("trellis");
    root.add_spacer(ItemSize::Fixed(1))
        .add_item(column.clone(), ItemSize::Fixed(8), true);

    runloop(&mut root, &Styles::default(), |_root, key| {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Left => {
                blocks[current].borrow_mut().focused = false;
                current = current.saturating_sub(1);
                blocks[current].borrow_mut().focused = true;
            }
            KeyCode::Right => {
                blocks[current].borrow_mut().focused = false;
                current = (current + 1).min(blocks.len() - 1);
                blocks[current].borrow_mut().focused = true;
            }
            KeyCode::Char('+') => {
                let b = TextBlock::new("new");
                column
                    .borrow_mut()
                    .add_item(b.clone(), ItemSize::Natural, false);
                blocks.push(b);
            }
            KeyCode::Backspace => {
                if blocks.len() > 1 {
                    let gone: ItemRef = blocks.remove(current);
                    column.borrow_mut().remove_item(&gone);
                    if current >= blocks.len() {
                        current = blocks.len() - 1;
                    }
                    blocks[current].borrow_mut().focused = true;
                }
            }
            _ => {}
        }
        true
    })
}
