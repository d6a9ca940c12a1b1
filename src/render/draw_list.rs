//! Draw list of artists.
//!
//! A [`DrawList`] is what a host render pass walks: it holds boxed
//! [`Artist`]s and calls them in ascending z-order, so an artist with
//! `zorder = f64::INFINITY` lands on top of everything else.
//!
//! # Example
//!
//! ```rust
//! use graph_artist::render::DrawList;
//! use graph_artist::render::backends::null::NullRenderer;
//! use graph_artist::render::SurfaceSize;
//!
//! let list = DrawList::new();
//! let mut renderer = NullRenderer::new(SurfaceSize { width: 640, height: 480 });
//! assert!(list.is_empty());
//! list.draw_all(&mut renderer).unwrap();
//! ```

use std::cmp::Ordering;

use crate::artist::Artist;
use crate::render::backend::Renderer;

/// A list of artists to be drawn.
#[derive(Default)]
pub struct DrawList {
    /// Artists in insertion order.
    artists: Vec<Box<dyn Artist>>,
}

impl DrawList {
    /// Creates a new, empty draw list.
    pub fn new() -> Self {
        DrawList { artists: Vec::new() }
    }

    /// Adds an artist to the list.
    pub fn add(&mut self, artist: Box<dyn Artist>) {
        self.artists.push(artist);
    }

    pub fn len(&self) -> usize {
        self.artists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
    }

    /// Removes all artists from the list.
    pub fn clear(&mut self) {
        self.artists.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &(dyn Artist + 'static)> {
        self.artists.iter().map(|a| a.as_ref())
    }

    /// Starts a frame on `renderer`, then draws every visible artist in ascending z-order.
    ///
    /// Artists with equal z-order keep their insertion order; NaN sorts last.
    /// Stops at the first failing artist and returns its error as-is.
    pub fn draw_all(&self, renderer: &mut dyn Renderer) -> anyhow::Result<()> {
        let mut ordered: Vec<_> = self.iter().filter(|a| a.is_visible()).collect();
        ordered.sort_by(|a, b| cmp_zorder(a.zorder(), b.zorder()));

        renderer.begin_frame();
        log::debug!("drawing {} of {} artists on {}", ordered.len(), self.len(), renderer.name());
        for artist in ordered {
            artist.draw(renderer)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for DrawList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(|a| (a.name(), a.zorder()))).finish()
    }
}

fn cmp_zorder(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}
