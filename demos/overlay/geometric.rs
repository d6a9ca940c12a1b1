use anyhow::bail;
use graph_artist::{BoundingBox, Graph, Layout, Palette, PlotOptions};
use rand::Rng;
use std::collections::VecDeque;
use std::f64::consts::TAU;

const KK_ITERATIONS: usize = 200;
const KK_MAX_STEP: f64 = 0.05;

/// A random geometric graph: vertices are random points in the unit square,
/// and two vertices are connected when they are closer than `radius`.
///
/// The generated coordinates double as the graph's own layout
/// ([`Layout::Auto`]). [`Layout::Circle`] and a small Kamada-Kawai spring
/// layout ([`Layout::KamadaKawai`]) are also available; other layouts fail.
pub struct GeometricGraph {
    positions: Vec<(f64, f64)>,
    edges: Vec<(usize, usize)>,
}

impl GeometricGraph {
    pub fn random<R: Rng>(n: usize, radius: f64, rng: &mut R) -> Self {
        let positions: Vec<(f64, f64)> = (0..n)
            .map(|_| (rng.random::<f64>(), rng.random::<f64>()))
            .collect();

        let mut edges = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = (positions[i].0 - positions[j].0, positions[i].1 - positions[j].1);
                if dx.hypot(dy) < radius {
                    edges.push((i, j));
                }
            }
        }

        Self { positions, edges }
    }

    #[cfg(test)]
    fn from_parts(positions: Vec<(f64, f64)>, edges: Vec<(usize, usize)>) -> Self {
        Self { positions, edges }
    }

    /// Hop distances between every pair of vertices, `None` when unreachable.
    fn hop_distances(&self) -> Vec<Vec<Option<usize>>> {
        let n = self.positions.len();
        let mut adjacent = vec![Vec::new(); n];
        for &(a, b) in &self.edges {
            adjacent[a].push(b);
            adjacent[b].push(a);
        }

        (0..n)
            .map(|source| {
                let mut dist = vec![None; n];
                dist[source] = Some(0);
                let mut queue = VecDeque::from([source]);
                while let Some(v) = queue.pop_front() {
                    let next = dist[v].map(|d| d + 1);
                    for &w in &adjacent[v] {
                        if dist[w].is_none() {
                            dist[w] = next;
                            queue.push_back(w);
                        }
                    }
                }
                dist
            })
            .collect()
    }

    /// Spring layout: every pair is pulled towards a length proportional to its
    /// hop distance. Starts from the generated coordinates, so it is deterministic.
    fn kamada_kawai(&self) -> Vec<(f64, f64)> {
        let n = self.positions.len();
        if n < 2 {
            return self.positions.clone();
        }

        let dist = self.hop_distances();
        let max_hops = dist.iter().flatten().flatten().copied().max().unwrap_or(1).max(1) as f64;
        // Unreachable pairs sit one hop further than the graph's diameter.
        let ideal = |i: usize, j: usize| {
            dist[i][j].map_or(max_hops + 1.0, |d| d as f64) / (max_hops + 1.0)
        };

        let mut pos = self.positions.clone();
        for step in 0..KK_ITERATIONS {
            let rate = 1.0 - step as f64 / KK_ITERATIONS as f64;
            for i in 0..n {
                let (mut gx, mut gy) = (0.0, 0.0);
                for j in (0..n).filter(|&j| j != i) {
                    let (dx, dy) = (pos[i].0 - pos[j].0, pos[i].1 - pos[j].1);
                    let d = dx.hypot(dy).max(1e-9);
                    let l = ideal(i, j);
                    let pull = (d - l) / (l * l * d);
                    gx += pull * dx;
                    gy += pull * dy;
                }
                let scale = rate / n as f64;
                pos[i].0 -= (gx * scale).clamp(-KK_MAX_STEP, KK_MAX_STEP);
                pos[i].1 -= (gy * scale).clamp(-KK_MAX_STEP, KK_MAX_STEP);
            }
        }

        normalize(pos)
    }

    /// Unit-square coordinates for the requested layout.
    fn layout(&self, layout: Layout) -> anyhow::Result<Vec<(f64, f64)>> {
        match layout {
            Layout::Auto => Ok(self.positions.clone()),
            Layout::Circle => {
                let n = self.positions.len().max(1) as f64;
                Ok((0..self.positions.len())
                    .map(|i| {
                        let angle = TAU * i as f64 / n;
                        (0.5 + 0.5 * angle.cos(), 0.5 + 0.5 * angle.sin())
                    })
                    .collect())
            }
            Layout::KamadaKawai => Ok(self.kamada_kawai()),
            other => bail!("layout '{other}' is not available for geometric graphs"),
        }
    }
}

/// Stretches each axis onto `0.0..=1.0`; a flat axis is centered.
fn normalize(points: Vec<(f64, f64)>) -> Vec<(f64, f64)> {
    let (x0, x1, y0, y1) = points.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY, f64::INFINITY, f64::NEG_INFINITY),
        |(x0, x1, y0, y1), &(x, y)| (x0.min(x), x1.max(x), y0.min(y), y1.max(y)),
    );
    let fit = |v: f64, lo: f64, hi: f64| if hi - lo > 1e-12 { (v - lo) / (hi - lo) } else { 0.5 };

    points.into_iter().map(|(x, y)| (fit(x, x0, x1), fit(y, y0, y1))).collect()
}

impl Graph for GeometricGraph {
    fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn plot(
        &self,
        ctx: &cairo::Context,
        bbox: &BoundingBox,
        palette: &Palette,
        options: &PlotOptions,
    ) -> anyhow::Result<()> {
        let area = bbox.contract(options.margin);
        let points: Vec<(f64, f64)> = self
            .layout(options.layout)?
            .into_iter()
            .map(|(x, y)| (area.left() + x * area.width(), area.top() + y * area.height()))
            .collect();

        options.edge_color.resolve(palette).set_source(ctx);
        ctx.set_line_width(options.edge_width);
        for &(a, b) in &self.edges {
            ctx.move_to(points[a].0, points[a].1);
            ctx.line_to(points[b].0, points[b].1);
        }
        ctx.stroke()?;

        let r = options.vertex_size / 2.0;
        for &(x, y) in &points {
            ctx.new_sub_path();
            ctx.arc(x, y, r, 0.0, TAU);
        }
        options.vertex_color.resolve(palette).set_source(ctx);
        ctx.fill_preserve()?;
        options.vertex_frame_color.resolve(palette).set_source(ctx);
        ctx.set_line_width(1.0);
        ctx.stroke()?;

        if options.vertex_labels {
            ctx.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
            ctx.set_font_size(options.label_size);
            for (i, &(x, y)) in points.iter().enumerate() {
                ctx.move_to(x + r, y - r);
                ctx.show_text(&i.to_string())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn in_unit_square(points: &[(f64, f64)]) -> bool {
        points.iter().all(|&(x, y)| (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y))
    }

    #[test]
    fn kk_layout_is_deterministic_and_fits_the_unit_square() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(1138);
        let graph = GeometricGraph::random(100, 0.2, &mut rng);

        let first = graph.layout(Layout::KamadaKawai).unwrap();
        let second = graph.layout(Layout::KamadaKawai).unwrap();
        assert_eq!(first.len(), 100);
        assert_eq!(first, second);
        assert!(in_unit_square(&first));
    }

    #[test]
    fn kk_layout_stretches_a_path() {
        let graph = GeometricGraph::from_parts(
            vec![(0.2, 0.3), (0.25, 0.9), (0.6, 0.5)],
            vec![(0, 1), (1, 2)],
        );
        let p = graph.layout(Layout::KamadaKawai).unwrap();
        let d = |a: usize, b: usize| (p[a].0 - p[b].0).hypot(p[a].1 - p[b].1);

        assert!(d(0, 2) > d(0, 1));
        assert!(d(0, 2) > d(1, 2));
    }

    #[test]
    fn hop_distances_mark_unreachable_pairs() {
        let graph = GeometricGraph::from_parts(vec![(0.0, 0.0); 4], vec![(0, 1), (1, 2)]);
        let dist = graph.hop_distances();
        assert_eq!(dist[0][2], Some(2));
        assert_eq!(dist[0][3], None);
    }

    #[test]
    fn unsupported_layouts_fail() {
        let graph = GeometricGraph::from_parts(vec![(0.5, 0.5)], Vec::new());
        let err = graph.layout(Layout::Grid).unwrap_err();
        assert_eq!(err.to_string(), "layout 'grid' is not available for geometric graphs");
    }
}
