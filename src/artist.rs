//! Artists: things a host can draw.
//!
//! [`Artist`] is the contract a host render pass relies on, and
//! [`GraphArtist`] is the implementation that puts a [`Graph`] on the
//! canvas. The graph artist only works with a [`CairoRenderer`]; any other
//! renderer is rejected with [`ArtistError::UnsupportedBackend`] before
//! anything is drawn.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use graph_artist::{Artist, GraphArtist, PlotOptions};
//! use graph_artist::render::backends::cairo::CairoRenderer;
//! use graph_artist::render::SurfaceSize;
//! # use graph_artist::{BoundingBox, Graph, Palette};
//! # struct Empty;
//! # impl Graph for Empty {
//! #     fn vertex_count(&self) -> usize { 0 }
//! #     fn edge_count(&self) -> usize { 0 }
//! #     fn plot(&self, _: &cairo::Context, _: &BoundingBox, _: &Palette, _: &PlotOptions)
//! #         -> anyhow::Result<()> { Ok(()) }
//! # }
//! # fn main() -> anyhow::Result<()> {
//! let bbox = (10.0, 10.0, 150.0, 150.0);
//! let artist = GraphArtist::new(Arc::new(Empty), bbox, None, PlotOptions::default())?
//!     .with_zorder(f64::INFINITY);
//!
//! let mut renderer = CairoRenderer::image(SurfaceSize { width: 200, height: 200 })?;
//! artist.draw(&mut renderer)?;
//! # Ok(()) }
//! ```

use std::any::{type_name, Any};
use std::sync::Arc;

use crate::drawing::{BoundingBox, Palette, PlotOptions};
use crate::errors::ArtistError;
use crate::graph::Graph;
use crate::render::backend::Renderer;
use crate::render::backends::cairo::CairoRenderer;

/// Something that can paint itself with a renderer during a render pass.
pub trait Artist {
    /// Paints the artist. Errors stop the render pass.
    fn draw(&self, renderer: &mut dyn Renderer) -> anyhow::Result<()>;

    /// Artists are drawn in ascending z-order.
    fn zorder(&self) -> f64 {
        0.0
    }

    fn is_visible(&self) -> bool {
        true
    }

    fn name(&self) -> &str {
        type_name::<Self>()
    }
}

/// Draws a [`Graph`] inside a fixed bounding box.
///
/// The artist keeps no rendering state: every [`draw`](Artist::draw) calls
/// [`Graph::plot`] again with the same arguments.
pub struct GraphArtist<G: Graph> {
    graph: Arc<G>,
    bbox: BoundingBox,
    palette: Palette,
    options: PlotOptions,
    zorder: f64,
    visible: bool,
}

impl<G: Graph> GraphArtist<G> {
    /// Creates an artist for `graph`.
    ///
    /// `bbox` is either a [`BoundingBox`] or a `(left, top, width, height)`
    /// tuple. A `None` palette means [`Palette::default`] (grayscale).
    pub fn new<B>(
        graph: Arc<G>,
        bbox: B,
        palette: Option<Palette>,
        options: PlotOptions,
    ) -> Result<Self, ArtistError>
    where
        B: TryInto<BoundingBox>,
        B::Error: Into<ArtistError>,
    {
        let bbox = bbox.try_into().map_err(Into::into)?;
        let palette = palette.unwrap_or_default();

        log::debug!(
            "GraphArtist: {} vertices, {} edges in {:?}, layout {}",
            graph.vertex_count(),
            graph.edge_count(),
            bbox,
            options.layout
        );

        Ok(Self {
            graph,
            bbox,
            palette,
            options,
            zorder: 0.0,
            visible: true,
        })
    }

    pub fn with_zorder(mut self, zorder: f64) -> Self {
        self.zorder = zorder;
        self
    }

    pub fn set_zorder(&mut self, zorder: f64) {
        self.zorder = zorder;
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn graph(&self) -> &Arc<G> {
        &self.graph
    }

    pub fn bbox(&self) -> &BoundingBox {
        &self.bbox
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn options(&self) -> &PlotOptions {
        &self.options
    }
}

impl<G: Graph + Send + Sync + 'static> GraphArtist<G> {
    /// Creates an artist from an object whose type is only known at runtime.
    ///
    /// Fails with [`ArtistError::NotAGraph`] unless `object` is a `G`.
    pub fn from_object<B>(
        object: Arc<dyn Any + Send + Sync>,
        bbox: B,
        palette: Option<Palette>,
        options: PlotOptions,
    ) -> Result<Self, ArtistError>
    where
        B: TryInto<BoundingBox>,
        B::Error: Into<ArtistError>,
    {
        let graph = object
            .downcast::<G>()
            .map_err(|_| ArtistError::NotAGraph { expected: type_name::<G>() })?;

        Self::new(graph, bbox, palette, options)
    }
}

impl<G: Graph> Artist for GraphArtist<G> {
    fn draw(&self, renderer: &mut dyn Renderer) -> anyhow::Result<()> {
        let Some(cairo_renderer) = renderer.as_any().downcast_ref::<CairoRenderer>() else {
            log::warn!("GraphArtist: cannot draw on {}", renderer.name());
            let backend = renderer.name().to_string();
            return Err(ArtistError::UnsupportedBackend { backend }.into());
        };

        let cr = cairo_renderer.context();
        log::debug!("GraphArtist: plotting into {:?}", self.bbox);

        // Keep the graph's transforms and sources from leaking into later artists.
        cr.save()?;
        let plotted = self.graph.plot(cr, &self.bbox, &self.palette, &self.options);
        let restored = cr.restore();

        plotted?;
        restored?;
        Ok(())
    }

    fn zorder(&self) -> f64 {
        self.zorder
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn name(&self) -> &str {
        "GraphArtist"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drawing::{Color, Layout};
    use crate::render::backends::null::NullRenderer;
    use crate::render::SurfaceSize;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct PlotCall {
        bbox: BoundingBox,
        palette: Palette,
        options: PlotOptions,
    }

    #[derive(Default)]
    struct RecordingGraph {
        calls: Mutex<Vec<PlotCall>>,
        fail_with: Option<&'static str>,
    }

    impl RecordingGraph {
        fn calls(&self) -> Vec<PlotCall> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Graph for RecordingGraph {
        fn vertex_count(&self) -> usize { 3 }
        fn edge_count(&self) -> usize { 2 }

        fn plot(
            &self,
            ctx: &cairo::Context,
            bbox: &BoundingBox,
            palette: &Palette,
            options: &PlotOptions,
        ) -> anyhow::Result<()> {
            self.calls.lock().unwrap().push(PlotCall {
                bbox: *bbox,
                palette: palette.clone(),
                options: options.clone(),
            });
            ctx.set_line_width(7.0);
            ctx.translate(50.0, 50.0);
            match self.fail_with {
                Some(msg) => Err(anyhow::anyhow!(msg)),
                None => Ok(()),
            }
        }
    }

    fn cairo_renderer() -> CairoRenderer {
        CairoRenderer::image(SurfaceSize { width: 200, height: 200 }).unwrap()
    }

    fn artist(graph: &Arc<RecordingGraph>) -> GraphArtist<RecordingGraph> {
        GraphArtist::new(graph.clone(), (10.0, 10.0, 150.0, 150.0), None, PlotOptions::default())
            .unwrap()
    }

    #[test]
    fn non_graph_objects_are_rejected() {
        let objects: Vec<Arc<dyn Any + Send + Sync>> = vec![
            Arc::new("not a graph".to_string()),
            Arc::new(42_i32),
            Arc::new(vec![1_u8, 2, 3]),
            Arc::new(BoundingBox::default()),
        ];

        for object in objects {
            let err = GraphArtist::<RecordingGraph>::from_object(
                object,
                (0.0, 0.0, 1.0, 1.0),
                None,
                PlotOptions::default(),
            )
            .err()
                .expect("construction must fail");
            assert!(matches!(
                err,
                ArtistError::NotAGraph { expected } if expected.ends_with("RecordingGraph")
            ));
        }
    }

    #[test]
    fn graph_objects_are_accepted() {
        let object: Arc<dyn Any + Send + Sync> = Arc::new(RecordingGraph::default());
        let artist = GraphArtist::<RecordingGraph>::from_object(
            object,
            (0.0, 0.0, 1.0, 1.0),
            None,
            PlotOptions::default(),
        )
        .unwrap();
        assert_eq!(artist.graph().vertex_count(), 3);
    }

    #[test]
    fn tuple_and_box_give_the_same_artist_bbox() {
        let graph = Arc::new(RecordingGraph::default());
        let prebuilt = BoundingBox::new(10.0, 10.0, 150.0, 150.0).unwrap();
        let tuple = (10.0, 10.0, 150.0, 150.0);
        let a = GraphArtist::new(graph.clone(), tuple, None, PlotOptions::default()).unwrap();
        let b = GraphArtist::new(graph, prebuilt, None, PlotOptions::default()).unwrap();
        assert_eq!(a.bbox(), b.bbox());
    }

    #[test]
    fn malformed_bbox_fails_construction() {
        let graph = Arc::new(RecordingGraph::default());
        let err = GraphArtist::new(graph, (0.0, 0.0, -10.0, 10.0), None, PlotOptions::default())
            .err()
            .expect("negative width");
        assert!(matches!(err, ArtistError::InvalidBoundingBox { .. }));
    }

    #[test]
    fn palette_defaults_to_gray_and_keeps_supplied_one() {
        let graph = Arc::new(RecordingGraph::default());
        assert_eq!(artist(&graph).palette(), &Palette::gray());

        let custom = Palette::from_colors(vec![Color::RED, Color::BLUE]);
        let bbox = (0.0, 0.0, 1.0, 1.0);
        let with_custom =
            GraphArtist::new(graph, bbox, Some(custom.clone()), PlotOptions::default()).unwrap();
        assert_eq!(with_custom.palette(), &custom);
    }

    #[test]
    fn construction_does_not_plot() {
        let graph = Arc::new(RecordingGraph::default());
        let _artist = artist(&graph);
        assert!(graph.calls().is_empty());
    }

    #[test]
    fn non_cairo_renderer_is_rejected_without_drawing() {
        let graph = Arc::new(RecordingGraph::default());
        let mut renderer = NullRenderer::new(SurfaceSize { width: 200, height: 200 });

        let err = artist(&graph).draw(&mut renderer).unwrap_err();
        assert_eq!(
            err.downcast_ref::<ArtistError>(),
            Some(&ArtistError::UnsupportedBackend { backend: "NullRenderer".into() })
        );
        assert!(graph.calls().is_empty());
    }

    #[test]
    fn draw_forwards_stored_arguments() {
        let graph = Arc::new(RecordingGraph::default());
        let options = PlotOptions::builder()
            .layout(Layout::KamadaKawai)
            .vertex_size(4.0)
            .build()
            .unwrap();
        let artist =
            GraphArtist::new(graph.clone(), (1.0, 2.0, 3.0, 4.0), None, options.clone()).unwrap();

        artist.draw(&mut cairo_renderer()).unwrap();

        let calls = graph.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].bbox.as_tuple(), (1.0, 2.0, 3.0, 4.0));
        assert_eq!(calls[0].palette, Palette::gray());
        assert_eq!(calls[0].options, options);
    }

    #[test]
    fn drawing_twice_forwards_identical_calls() {
        let graph = Arc::new(RecordingGraph::default());
        let artist = artist(&graph);
        let mut renderer = cairo_renderer();

        artist.draw(&mut renderer).unwrap();
        artist.draw(&mut renderer).unwrap();

        let calls = graph.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
    }

    #[test]
    fn plot_errors_pass_through_unchanged() {
        let graph = Arc::new(RecordingGraph {
            fail_with: Some("layout exploded"),
            ..Default::default()
        });
        let err = artist(&graph).draw(&mut cairo_renderer()).unwrap_err();

        assert_eq!(err.to_string(), "layout exploded");
        assert!(err.downcast_ref::<ArtistError>().is_none());
    }

    #[test]
    fn context_state_is_restored_after_plot() {
        let graph = Arc::new(RecordingGraph::default());
        let renderer = cairo_renderer();
        let cr = renderer.context().clone();
        let line_width = cr.line_width();

        let mut renderer = renderer;
        artist(&graph).draw(&mut renderer).unwrap();

        assert_eq!(cr.line_width(), line_width);
        assert_eq!(cr.matrix().x0(), 0.0);
    }

    #[test]
    fn context_state_is_restored_after_failed_plot() {
        let graph = Arc::new(RecordingGraph { fail_with: Some("boom"), ..Default::default() });
        let mut renderer = cairo_renderer();

        assert!(artist(&graph).draw(&mut renderer).is_err());
        assert_eq!(renderer.context().line_width(), 2.0);
    }

    #[test]
    fn zorder_and_visibility() {
        let graph = Arc::new(RecordingGraph::default());
        let mut artist = artist(&graph).with_zorder(f64::INFINITY);
        assert_eq!(artist.zorder(), f64::INFINITY);
        assert!(artist.is_visible());

        artist.set_zorder(3.0);
        artist.set_visible(false);
        assert_eq!(artist.zorder(), 3.0);
        assert!(!artist.is_visible());
        assert_eq!(artist.name(), "GraphArtist");
    }
}
