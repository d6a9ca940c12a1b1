//! Draws a sine curve and overlays a random geometric graph on top of it,
//! laid out with the graph's Kamada-Kawai layout.
//!
//! Run with `cargo run --example overlay`; the figure is written to `test.pdf`.

mod geometric;
mod line_plot;

use std::sync::Arc;

use geometric::GeometricGraph;
use graph_artist::render::backends::cairo::CairoRenderer;
use graph_artist::render::{DrawList, SurfaceSize};
use graph_artist::{BoundingBox, Color, GraphArtist, Layout, PlotOptions};
use line_plot::LinePlot;
use rand::SeedableRng;

const OUTPUT: &str = "test.pdf";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let size = SurfaceSize { width: 640, height: 480 };
    let surface = cairo::PdfSurface::new(size.width as f64, size.height as f64, OUTPUT)?;
    let mut renderer = CairoRenderer::for_surface(&surface, size)?;

    let mut draw_list = DrawList::new();

    // The host's own content: a sine curve inside a framed plot area.
    let points = (0..200).map(|x| (x as f64, (x as f64 / 10.0).sin())).collect();
    let plot_area = BoundingBox::from(size).contract(48.0);
    draw_list.add(Box::new(LinePlot::new(plot_area, points, Color::BLUE)));

    // The graph goes on top of everything the plot draws, hence the infinite z-order.
    let mut rng = rand::rngs::StdRng::seed_from_u64(1138);
    let graph = Arc::new(GeometricGraph::random(100, 0.2, &mut rng));
    let options = PlotOptions::builder()
        .layout(Layout::KamadaKawai)
        .vertex_size(6.0)
        .margin(5.0)
        .build()?;
    let artist = GraphArtist::new(graph, (10.0, 10.0, 150.0, 150.0), None, options)?
        .with_zorder(f64::INFINITY);
    draw_list.add(Box::new(artist));

    draw_list.draw_all(&mut renderer)?;
    renderer.finish();
    drop(renderer);
    surface.finish();

    println!("Plot saved to {OUTPUT}");
    Ok(())
}
