use std::any::Any;

/// Size of a surface in pixels. It's a simple struct to hold width and height.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSize { pub width: u32, pub height: u32 }

/// Type-erased renderer handed to artists during a render pass.
///
/// Artists that need a specific drawing API probe for it through
/// [`as_any`](Renderer::as_any) and fail when it is not there.
/// Calls occur on the host's rendering thread.
pub trait Renderer: Any {
    /// Human readable backend name, used in error messages.
    fn name(&self) -> &str;

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Size of the target surface.
    fn size(&self) -> SurfaceSize;

    /// Called once at the start of every render pass, before any artist draws.
    fn begin_frame(&mut self) {}
}
