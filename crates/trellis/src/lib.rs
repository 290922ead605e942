#![allow(clippy::new_without_default)]
//! A stacking layout container for terminal UIs.
//!
//! The central type is [`Container`], which arranges a sequence of
//! heterogeneous drawable items along one axis, giving each entry either a
//! caller-specified fixed size or the item's self-reported natural size, and
//! redrawing the lot every frame. Everything else here is the substrate a
//! container needs to be driven for real: the [`Item`] capability, the
//! [`Base`] box it embeds, a [`Screen`] to draw on, and a crossterm backend.

pub mod backend;
/// The rectangle/box base embedded by composites.
mod base;
/// The container core: entries, layout, draw, focus.
mod container;
pub mod error;
/// The drawable-item capability.
mod item;
/// The screen drawing surface.
mod screen;
pub mod style;
/// In-memory cell buffer.
mod termbuf;
pub mod tutils;

pub use base::{Base, DOUBLE, FrameGlyphs, SINGLE};
pub use container::{Container, Direction, ItemSize};
pub use error::{Error, Result};
pub use item::{Item, ItemRef, item};
pub use screen::Screen;
pub use style::{Color, Style, Styles};
pub use termbuf::{Cell, TermBuf};
pub use trellis_geom as geom;

// Export commonly used geometry types at the root.
pub use trellis_geom::{Expanse, Line, Point, Rect};
