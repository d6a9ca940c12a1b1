//! Draw graphs inside a plotting host's render pass.
//!
//! A [`GraphArtist`] wraps a [`Graph`], a [`BoundingBox`], a [`Palette`] and
//! [`PlotOptions`] into an [`Artist`]. When the host walks its
//! [`DrawList`](render::DrawList), the artist hands the renderer's Cairo
//! context to the graph's own plot routine. Layout and rasterization stay
//! with the graph and with Cairo.

pub mod artist;
pub mod drawing;
pub mod errors;
pub mod graph;
pub mod render;

pub use artist::{Artist, GraphArtist};
pub use drawing::{BoundingBox, Color, ColorSpec, Layout, Palette, PlotOptions, PlotOptionsError};
pub use errors::ArtistError;
pub use graph::Graph;
