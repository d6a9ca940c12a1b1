//! Palettes turn small integer color ids into RGB colors.
//!
//! The default palette is a 256-step grayscale gradient from black (index 0)
//! to white (index 255). It is a plain value: callers that want something else
//! pass their own palette when building an artist.

use serde::{Deserialize, Serialize};

use crate::drawing::Color;
use crate::errors::ArtistError;

/// Name of the palette used when none is supplied.
pub const DEFAULT_PALETTE_NAME: &str = "gray";

/// Number of entries in each built-in palette.
pub const DEFAULT_PALETTE_SIZE: usize = 256;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn from_colors(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Evenly spaced gradient of `n` colors from `start` to `end`, both included.
    pub fn gradient(start: Color, end: Color, n: usize) -> Self {
        let colors = match n {
            0 => Vec::new(),
            1 => vec![start],
            _ => (0..n)
                .map(|i| start.lerp(&end, i as f64 / (n - 1) as f64))
                .collect(),
        };
        Self { colors }
    }

    /// The default grayscale palette.
    pub fn gray() -> Self {
        Self::gradient(Color::BLACK, Color::WHITE, DEFAULT_PALETTE_SIZE)
    }

    /// Looks up one of the built-in palettes.
    pub fn by_name(name: &str) -> Result<Self, ArtistError> {
        match name {
            "gray" | "grey" => Ok(Self::gray()),
            "red-blue" => Ok(Self::gradient(Color::RED, Color::BLUE, DEFAULT_PALETTE_SIZE)),
            "red-green" => Ok(Self::gradient(Color::RED, Color::GREEN, DEFAULT_PALETTE_SIZE)),
            other => Err(ArtistError::UnknownPalette(other.to_string())),
        }
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Like [`get`](Self::get), but indices past the end map to the last color.
    /// An empty palette resolves everything to black.
    pub fn resolve(&self, index: usize) -> Color {
        self.get(index)
            .or_else(|| self.colors.last().copied())
            .unwrap_or(Color::BLACK)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::gray()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gray_runs_from_black_to_white() {
        let gray = Palette::gray();
        assert_eq!(gray.len(), DEFAULT_PALETTE_SIZE);
        assert_eq!(gray.get(0), Some(Color::BLACK));
        assert_eq!(gray.get(255), Some(Color::WHITE));

        let mid = gray.get(51).unwrap();
        assert!((mid.r - 0.2).abs() < 1e-12);
        assert_eq!(mid.r, mid.g);
        assert_eq!(mid.g, mid.b);
    }

    #[test]
    fn default_is_the_named_default() {
        assert_eq!(Palette::default(), Palette::by_name(DEFAULT_PALETTE_NAME).unwrap());
    }

    #[test]
    fn resolve_clamps_past_the_end() {
        let p = Palette::from_colors(vec![Color::RED, Color::BLUE]);
        assert_eq!(p.resolve(1), Color::BLUE);
        assert_eq!(p.resolve(99), Color::BLUE);
        assert_eq!(p.get(99), None);
        assert_eq!(Palette::from_colors(Vec::new()).resolve(0), Color::BLACK);
    }

    #[test]
    fn gradient_edge_sizes() {
        assert!(Palette::gradient(Color::RED, Color::BLUE, 0).is_empty());
        assert_eq!(Palette::gradient(Color::RED, Color::BLUE, 1).colors(), &[Color::RED]);
    }

    #[test]
    fn unknown_name_fails() {
        let err = Palette::by_name("rainbow").unwrap_err();
        assert_eq!(err, ArtistError::UnknownPalette("rainbow".into()));
    }

    #[test]
    fn red_blue_endpoints() {
        let p = Palette::by_name("red-blue").unwrap();
        assert_eq!(p.get(0), Some(Color::RED));
        assert_eq!(p.get(DEFAULT_PALETTE_SIZE - 1), Some(Color::BLUE));
    }
}
