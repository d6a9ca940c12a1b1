//! Plot options.
//!
//! `PlotOptions` carries the layout and style settings a [`GraphArtist`]
//! forwards untouched to [`Graph::plot`]. How each option is honored is up to
//! the graph implementation; the artist never interprets them.
//!
//! `PlotOptions` provides defaults via [`Default`] and a fluent
//! [`PlotOptions::builder()`] with validation. Options can also be loaded from
//! JSON, where missing fields take their defaults.
//!
//! # Examples
//!
//! ```rust
//! use graph_artist::{Layout, PlotOptions};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let opts = PlotOptions::builder()
//!     .layout(Layout::KamadaKawai)
//!     .vertex_size(6.0)
//!     .margin(10.0)
//!     .build()?;
//! assert_eq!(opts.layout, "kk".parse::<Layout>()?);
//!
//! let from_json =
//!     PlotOptions::from_json(r#"{ "layout": "kk", "vertex_size": 6.0, "margin": 10.0 }"#)?;
//! assert_eq!(opts, from_json);
//! # Ok(()) }
//! ```
//!
//! # Fields (summary)
//! - `layout`: Layout algorithm to request from the graph (default: `auto`).
//! - `margin`: Space left free inside the bounding box (default: 20).
//! - `vertex_size`: Vertex diameter (default: 10).
//! - `vertex_color` / `vertex_frame_color` / `edge_color`: palette index or explicit RGB.
//! - `edge_width`: Edge stroke width (default: 1).
//! - `vertex_labels`: Draw vertex labels if `true`.
//! - `label_size`: Label font size (default: 10).
//!
//! # Errors
//!
//! Building or loading returns [`PlotOptionsError`] if a size is negative or
//! not finite, if an explicit RGB channel lies outside `0.0..=1.0`, if the
//! layout name is unknown, or if the JSON is malformed.
//!
//! [`GraphArtist`]: crate::GraphArtist
//! [`Graph::plot`]: crate::Graph::plot

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::drawing::{Color, Palette};

/// Layout algorithm requested from the graph.
///
/// Serialized as its short name; deserialization accepts everything [`FromStr`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Layout {
    /// Let the graph pick, typically its own stored coordinates.
    #[default]
    Auto,
    Circle,
    Star,
    Grid,
    Random,
    FruchtermanReingold,
    KamadaKawai,
    DrL,
    ReingoldTilford,
}

impl Layout {
    /// The conventional short name, as accepted by [`FromStr`].
    pub fn short_name(&self) -> &'static str {
        match self {
            Layout::Auto => "auto",
            Layout::Circle => "circle",
            Layout::Star => "star",
            Layout::Grid => "grid",
            Layout::Random => "random",
            Layout::FruchtermanReingold => "fr",
            Layout::KamadaKawai => "kk",
            Layout::DrL => "drl",
            Layout::ReingoldTilford => "rt",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Layout {
    type Err = PlotOptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Layout::Auto),
            "circle" | "circular" => Ok(Layout::Circle),
            "star" => Ok(Layout::Star),
            "grid" => Ok(Layout::Grid),
            "random" => Ok(Layout::Random),
            "fr" | "fruchterman_reingold" => Ok(Layout::FruchtermanReingold),
            "kk" | "kamada_kawai" => Ok(Layout::KamadaKawai),
            "drl" => Ok(Layout::DrL),
            "rt" | "tree" | "reingold_tilford" => Ok(Layout::ReingoldTilford),
            _ => Err(PlotOptionsError::UnknownLayout(s.to_string())),
        }
    }
}

impl TryFrom<String> for Layout {
    type Error = PlotOptionsError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Layout> for String {
    fn from(layout: Layout) -> Self {
        layout.short_name().to_string()
    }
}

/// A color given either as a palette index or as an explicit RGB value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Index(usize),
    Rgb(Color),
}

impl ColorSpec {
    pub fn resolve(&self, palette: &Palette) -> Color {
        match self {
            ColorSpec::Index(i) => palette.resolve(*i),
            ColorSpec::Rgb(c) => *c,
        }
    }
}

impl From<usize> for ColorSpec {
    fn from(index: usize) -> Self {
        ColorSpec::Index(index)
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Rgb(color)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotOptions {
    pub layout: Layout,
    pub margin: f64,
    pub vertex_size: f64,
    pub vertex_color: ColorSpec,
    pub vertex_frame_color: ColorSpec,
    pub edge_color: ColorSpec,
    pub edge_width: f64,
    pub vertex_labels: bool,
    pub label_size: f64,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            layout: Layout::Auto,
            margin: 20.0,
            vertex_size: 10.0,
            vertex_color: ColorSpec::Index(255),
            vertex_frame_color: ColorSpec::Index(0),
            edge_color: ColorSpec::Index(128),
            edge_width: 1.0,
            vertex_labels: false,
            label_size: 10.0,
        }
    }
}

impl PlotOptions {
    pub fn builder() -> PlotOptionsBuilder {
        PlotOptionsBuilder::default()
    }

    /// Parses and validates options from JSON.
    pub fn from_json(json: &str) -> Result<PlotOptions, PlotOptionsError> {
        let opts: PlotOptions =
            serde_json::from_str(json).map_err(|e| PlotOptionsError::Json(e.to_string()))?;
        validate(&opts)?;
        Ok(opts)
    }
}

/// Builder for [`PlotOptions`], mirroring the field list.
#[derive(Debug, Clone, Default)]
pub struct PlotOptionsBuilder {
    inner: PlotOptions,
}

impl PlotOptionsBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut PlotOptions)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn layout(self, layout: Layout) -> Self { self.map(|o| o.layout = layout) }
    pub fn margin(self, margin: f64) -> Self { self.map(|o| o.margin = margin) }
    pub fn vertex_size(self, size: f64) -> Self { self.map(|o| o.vertex_size = size) }
    pub fn vertex_color<C: Into<ColorSpec>>(self, c: C) -> Self {
        self.map(|o| o.vertex_color = c.into())
    }
    pub fn vertex_frame_color<C: Into<ColorSpec>>(self, c: C) -> Self {
        self.map(|o| o.vertex_frame_color = c.into())
    }
    pub fn edge_color<C: Into<ColorSpec>>(self, c: C) -> Self {
        self.map(|o| o.edge_color = c.into())
    }
    pub fn edge_width(self, width: f64) -> Self { self.map(|o| o.edge_width = width) }
    pub fn vertex_labels(self, on: bool) -> Self { self.map(|o| o.vertex_labels = on) }
    pub fn label_size(self, size: f64) -> Self { self.map(|o| o.label_size = size) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut PlotOptions)) -> Self { self.map(f) }

    /// Validate and build the final options.
    pub fn build(self) -> Result<PlotOptions, PlotOptionsError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

// ---------- Validation ----------

#[derive(Debug, Clone, PartialEq)]
pub enum PlotOptionsError {
    UnknownLayout(String),
    Negative { field: &'static str, value: f64 },
    NotFinite { field: &'static str },
    ColorOutOfRange { field: &'static str },
    Json(String),
}

impl fmt::Display for PlotOptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlotOptionsError::UnknownLayout(name) =>
                write!(f, "unknown layout '{name}'"),
            PlotOptionsError::Negative { field, value } =>
                write!(f, "{field} must not be negative (got {value})"),
            PlotOptionsError::NotFinite { field } =>
                write!(f, "{field} must be a finite number"),
            PlotOptionsError::ColorOutOfRange { field } =>
                write!(f, "{field} channels must lie in 0.0..=1.0"),
            PlotOptionsError::Json(msg) =>
                write!(f, "invalid plot options: {msg}"),
        }
    }
}
impl std::error::Error for PlotOptionsError {}

fn validate(o: &PlotOptions) -> Result<(), PlotOptionsError> {
    let sizes = [
        ("margin", o.margin),
        ("vertex_size", o.vertex_size),
        ("edge_width", o.edge_width),
        ("label_size", o.label_size),
    ];
    for (field, value) in sizes {
        if !value.is_finite() {
            return Err(PlotOptionsError::NotFinite { field });
        }
        if value < 0.0 {
            return Err(PlotOptionsError::Negative { field, value });
        }
    }

    let colors = [
        ("vertex_color", o.vertex_color),
        ("vertex_frame_color", o.vertex_frame_color),
        ("edge_color", o.edge_color),
    ];
    for (field, spec) in colors {
        if let ColorSpec::Rgb(c) = spec {
            if ![c.r, c.g, c.b, c.a].iter().all(|v| (0.0..=1.0).contains(v)) {
                return Err(PlotOptionsError::ColorOutOfRange { field });
            }
        }
    }
    Ok(())
}
