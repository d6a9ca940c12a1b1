//! Drawing parameters handed to a graph's plot routine.

mod bbox;
mod color;
mod options;
mod palette;

pub use bbox::BoundingBox;
pub use color::Color;
pub use options::{ColorSpec, Layout, PlotOptions, PlotOptionsBuilder, PlotOptionsError};
pub use palette::{Palette, DEFAULT_PALETTE_NAME, DEFAULT_PALETTE_SIZE};
