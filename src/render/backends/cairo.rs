use std::any::Any;
use anyhow::Result;
use crate::render::backend::{Renderer, SurfaceSize};

/// Renderer backed by a cairo drawing context.
///
/// The context may target any cairo surface (image, PDF, SVG, ...). The
/// renderer does not own the surface's lifecycle; the host finishes it.
pub struct CairoRenderer {
    ctx: cairo::Context,
    size: SurfaceSize,
}

impl CairoRenderer {
    /// Wraps an existing cairo context.
    pub fn new(ctx: cairo::Context, size: SurfaceSize) -> Self {
        Self { ctx, size }
    }

    /// Creates a fresh context drawing onto `surface`.
    pub fn for_surface(surface: impl AsRef<cairo::Surface>, size: SurfaceSize) -> Result<Self> {
        Ok(Self::new(cairo::Context::new(surface)?, size))
    }

    /// Creates an in-memory ARGB32 image surface of the given size and a context on it.
    pub fn image(size: SurfaceSize) -> Result<Self> {
        let surface = cairo::ImageSurface::create(
            cairo::Format::ARgb32,
            i32::try_from(size.width)?,
            i32::try_from(size.height)?,
        )?;
        Self::for_surface(&surface, size)
    }

    #[inline]
    pub fn context(&self) -> &cairo::Context {
        &self.ctx
    }

    /// Flush the target surface to ensure all operations are completed.
    #[inline]
    pub fn finish(&self) {
        self.ctx.target().flush();
    }
}

impl Renderer for CairoRenderer {
    fn name(&self) -> &str {
        "CairoRenderer"
    }

    fn as_any(&self) -> &dyn Any { self }
    fn as_any_mut(&mut self) -> &mut dyn Any { self }
    fn size(&self) -> SurfaceSize { self.size }
}
