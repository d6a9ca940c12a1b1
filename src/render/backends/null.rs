use crate::render::backend::{Renderer, SurfaceSize};
use std::any::Any;

/// Null renderer that does not expose any drawing API.
///
/// Hosts use it for headless passes; artists that need a drawing context reject it.
/// It only counts the render passes it has seen.
pub struct NullRenderer {
    /// Size of the surface in pixels.
    pub size: SurfaceSize,
    /// Frame ID, bumped once per render pass.
    frame_id: u64,
}

impl NullRenderer {
    /// Creates a new instance of the null renderer.
    pub fn new(size: SurfaceSize) -> Self {
        Self { size, frame_id: 0 }
    }

    /// Number of render passes started on this renderer (wraps on overflow).
    pub fn frame_id(&self) -> u64 {
        self.frame_id
    }
}

impl Renderer for NullRenderer {
    fn name(&self) -> &str {
        "NullRenderer"
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
    fn size(&self) -> SurfaceSize {
        self.size
    }
    fn begin_frame(&mut self) {
        self.frame_id = self.frame_id.wrapping_add(1);
    }
}
