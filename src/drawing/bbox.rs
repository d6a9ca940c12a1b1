//! Bounding box for graph drawing.
//!
//! A [`BoundingBox`] is the rectangle a graph must paint itself into. It is
//! defined by its top-left corner `(left, top)` and its `width`/`height` in
//! the renderer's user-space units. `(0, 0)` is the top-left of the surface.
//!
//! # Examples
//!
//! Building a box from a 4-tuple:
//! ```
//! use graph_artist::BoundingBox;
//!
//! let bbox = BoundingBox::try_from((10.0, 10.0, 150.0, 150.0)).unwrap();
//! assert_eq!(bbox.right(), 160.0);
//! assert_eq!(bbox, BoundingBox::new(10.0, 10.0, 150.0, 150.0).unwrap());
//! ```
//!
//! Negative sizes are rejected:
//! ```
//! use graph_artist::BoundingBox;
//!
//! assert!(BoundingBox::new(0.0, 0.0, -1.0, 10.0).is_err());
//! ```

use crate::errors::ArtistError;
use crate::render::SurfaceSize;

/// Represents the rectangle a graph is drawn in.
///
/// Fields are private so a box can only exist in its validated form.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl std::fmt::Debug for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BoundingBox {{ left: {}, top: {}, width: {}, height: {} }}",
            self.left, self.top, self.width, self.height
        )
    }
}

impl BoundingBox {
    /// Creates a new [`BoundingBox`], failing on non-finite values or a negative size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Result<Self, ArtistError> {
        let invalid = |reason| ArtistError::InvalidBoundingBox {
            left,
            top,
            width,
            height,
            reason,
        };

        if ![left, top, width, height].iter().all(|v| v.is_finite()) {
            return Err(invalid("coordinates must be finite"));
        }
        if width < 0.0 || height < 0.0 {
            return Err(invalid("width and height must not be negative"));
        }

        Ok(Self { left, top, width, height })
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Returns the center point as `(x, y)`.
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Returns the aspect ratio (`width / height`).
    ///
    /// Returns `0.0` if `height` is `0` to avoid division by zero.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0.0 {
            0.0
        } else {
            self.width / self.height
        }
    }

    /// Returns a box shrunk by `margin` on every side.
    ///
    /// Width and height never drop below zero; a box that collapses keeps its center.
    pub fn contract(&self, margin: f64) -> Self {
        let (cx, cy) = self.center();
        let width = (self.width - 2.0 * margin).max(0.0);
        let height = (self.height - 2.0 * margin).max(0.0);

        Self {
            left: cx - width / 2.0,
            top: cy - height / 2.0,
            width,
            height,
        }
    }

    /// Returns `true` if the point lies inside the box (edges included).
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right() && y >= self.top && y <= self.bottom()
    }

    /// Returns `(left, top, width, height)`.
    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.left, self.top, self.width, self.height)
    }
}

impl TryFrom<(f64, f64, f64, f64)> for BoundingBox {
    type Error = ArtistError;

    fn try_from((left, top, width, height): (f64, f64, f64, f64)) -> Result<Self, Self::Error> {
        BoundingBox::new(left, top, width, height)
    }
}

impl TryFrom<[f64; 4]> for BoundingBox {
    type Error = ArtistError;

    fn try_from([left, top, width, height]: [f64; 4]) -> Result<Self, Self::Error> {
        BoundingBox::new(left, top, width, height)
    }
}

impl From<SurfaceSize> for BoundingBox {
    fn from(size: SurfaceSize) -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: size.width as f64,
            height: size.height as f64,
        }
    }
}
