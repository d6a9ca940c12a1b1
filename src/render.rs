pub mod backend;

/// Renderers a host can hand to its artists.
pub mod backends {
    /// Cairo renderer, the only one graph artists can draw on
    pub mod cairo;
    pub mod null;
}

mod draw_list;
pub use draw_list::*;

pub use backend::{Renderer, SurfaceSize};
