use crate::drawing::{BoundingBox, Palette, PlotOptions};

/// A graph that knows how to plot itself onto a cairo context.
///
/// Layout and drawing are entirely up to the implementor. A
/// [`GraphArtist`](crate::GraphArtist) only forwards the context, the
/// bounding box, the palette and the options it was built with.
pub trait Graph {
    fn vertex_count(&self) -> usize;
    fn edge_count(&self) -> usize;

    /// Draws the graph inside `bbox`.
    ///
    /// Palette indices in `options` are resolved through `palette`. Errors are
    /// passed back to the host untouched.
    fn plot(
        &self,
        ctx: &cairo::Context,
        bbox: &BoundingBox,
        palette: &Palette,
        options: &PlotOptions,
    ) -> anyhow::Result<()>;
}
