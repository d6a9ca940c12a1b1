use anyhow::{anyhow, Result};
use graph_artist::render::backends::cairo::CairoRenderer;
use graph_artist::render::Renderer;
use graph_artist::{Artist, BoundingBox, Color};

/// A plain line plot with a frame, standing in for the host's own axes.
pub struct LinePlot {
    area: BoundingBox,
    points: Vec<(f64, f64)>,
    color: Color,
}

impl LinePlot {
    pub fn new(area: BoundingBox, points: Vec<(f64, f64)>, color: Color) -> Self {
        Self { area, points, color }
    }

    fn bounds(&self) -> (f64, f64, f64, f64) {
        self.points.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
            |(x0, x1, y0, y1), &(x, y)| (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
        )
    }
}

impl Artist for LinePlot {
    fn draw(&self, renderer: &mut dyn Renderer) -> Result<()> {
        let cairo_renderer = renderer
            .as_any()
            .downcast_ref::<CairoRenderer>()
            .ok_or_else(|| anyhow!("LinePlot needs a cairo renderer, got {}", renderer.name()))?;
        let cr = cairo_renderer.context();

        Color::WHITE.set_source(cr);
        cr.paint()?;

        Color::BLACK.set_source(cr);
        cr.set_line_width(1.0);
        cr.rectangle(self.area.left(), self.area.top(), self.area.width(), self.area.height());
        cr.stroke()?;

        let (x0, x1, y0, y1) = self.bounds();
        let sx = self.area.width() / (x1 - x0).max(f64::EPSILON);
        let sy = self.area.height() / (y1 - y0).max(f64::EPSILON);

        self.color.set_source(cr);
        cr.set_line_width(1.5);
        for (i, &(x, y)) in self.points.iter().enumerate() {
            let px = self.area.left() + (x - x0) * sx;
            let py = self.area.bottom() - (y - y0) * sy;
            if i == 0 {
                cr.move_to(px, py);
            } else {
                cr.line_to(px, py);
            }
        }
        cr.stroke()?;
        Ok(())
    }

    fn zorder(&self) -> f64 {
        2.0
    }
}
