//! A crossterm-backed terminal, and a minimal run loop for driving a
//! container from a demo or small application.

use std::io::{self, Write};
use std::panic;

use color_backtrace::{BacktracePrinter, default_output_stream};
use crossterm::{
    QueueableCommand,
    cursor::{Hide, MoveTo, Show},
    event::{Event, KeyCode, KeyEvent, KeyModifiers, read},
    execute,
    style::{
        Attribute, Color as CColor, Print, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, size},
};
use scopeguard::defer;
use tracing::{debug, trace};

use crate::{
    Container, Result, TermBuf,
    backend::BackendControl,
    geom::Expanse,
    screen::Screen,
    style::{Color, Style, Styles},
};

fn translate_color(c: Color) -> CColor {
    match c {
        Color::Black => CColor::Black,
        Color::DarkGrey => CColor::DarkGrey,
        Color::Red => CColor::Red,
        Color::DarkRed => CColor::DarkRed,
        Color::Green => CColor::Green,
        Color::DarkGreen => CColor::DarkGreen,
        Color::Yellow => CColor::Yellow,
        Color::Blue => CColor::Blue,
        Color::Magenta => CColor::Magenta,
        Color::Cyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Grey => CColor::Grey,
        Color::Rgb { r, g, b } => CColor::Rgb { r, g, b },
        Color::AnsiValue(a) => CColor::AnsiValue(a),
    }
}

/// A terminal driven through crossterm, writing to stderr.
pub struct Terminal {
    fp: io::Stderr,
}

impl Terminal {
    /// A new terminal handle. Call [`BackendControl::start`] before
    /// rendering.
    pub fn new() -> Self {
        Self {
            fp: io::stderr(),
        }
    }

    /// The terminal's current dimensions.
    pub fn size(&self) -> Result<Expanse> {
        let (w, h) = size()?;
        Ok(Expanse::new(u32::from(w), u32::from(h)))
    }

    /// Flush a buffer to the terminal. Untouched cells are skipped, leaving
    /// previous screen content in place.
    pub fn render(&mut self, buf: &TermBuf) -> Result<()> {
        let sz = buf.size();
        for y in 0..sz.h {
            let mut x = 0;
            while x < sz.w {
                let p = (x, y).into();
                if !buf.touched(p) {
                    x += 1;
                    continue;
                }
                // Coalesce a run of cells with a single style.
                let style = buf.get(p).map(|c| c.style.clone()).unwrap_or_default();
                let mut run = String::new();
                while x < sz.w {
                    match buf.get((x, y).into()) {
                        Some(c) if buf.touched((x, y).into()) && c.style == style => {
                            run.push(c.ch);
                            x += 1;
                        }
                        _ => break,
                    }
                }
                self.fp.queue(MoveTo(p.x as u16, p.y as u16))?;
                self.apply_style(&style)?;
                self.fp.queue(Print(run))?;
            }
        }
        self.fp.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, s: &Style) -> Result<()> {
        // Reset before setting colors - the other order loses them.
        self.fp.queue(SetAttribute(Attribute::Reset))?;
        if s.bold {
            self.fp.queue(SetAttribute(Attribute::Bold))?;
        }
        self.fp.queue(SetForegroundColor(translate_color(s.fg)))?;
        self.fp.queue(SetBackgroundColor(translate_color(s.bg)))?;
        Ok(())
    }
}

impl BackendControl for Terminal {
    fn start(&mut self) -> Result<()> {
        debug!("starting terminal backend");
        enable_raw_mode()?;
        execute!(self.fp, EnterAlternateScreen, Hide)?;
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        debug!("stopping terminal backend");
        execute!(self.fp, LeaveAlternateScreen, Show)?;
        disable_raw_mode()?;
        Ok(())
    }
}

/// Drive a container: redraw every frame, hand key events to `on_key`, and
/// return when it reports the loop is done. Ctrl-C always quits, and resize
/// events trigger a redraw. The terminal is restored on the way out, panics
/// included.
pub fn runloop<F>(root: &mut Container, styles: &Styles, mut on_key: F) -> Result<()>
where
    F: FnMut(&mut Container, KeyEvent) -> bool,
{
    let mut term = Terminal::new();
    term.start()?;
    defer! {
        let mut stderr = io::stderr();
        #[allow(unused_must_use)]
        {
            execute!(stderr, LeaveAlternateScreen, Show);
            disable_raw_mode();
        }
    }

    panic::set_hook(Box::new(|pi| {
        let mut stderr = io::stderr();
        #[allow(unused_must_use)]
        {
            execute!(stderr, LeaveAlternateScreen, Show);
            disable_raw_mode();
            BacktracePrinter::new().print_panic_info(pi, &mut default_output_stream());
        }
    }));

    loop {
        let sz = term.size()?;
        let mut buf = TermBuf::new(sz);
        root.draw(&mut buf, styles);
        term.render(&buf)?;

        match read()? {
            Event::Key(k) => {
                if k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL) {
                    break;
                }
                if !on_key(&mut *root, k) {
                    break;
                }
            }
            Event::Resize(w, h) => {
                trace!(w, h, "terminal resized");
            }
            _ => {}
        }
    }
    Ok(())
}
