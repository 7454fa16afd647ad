use eframe::egui::{pos2, Color32};
use serde::Deserialize;

use super::axis::{AxisMapper, PixelRange, DEFAULT_X_TICKS, DEFAULT_Y_TICKS};
use super::minmax::find_min_max;
use crate::data::{Field, Record};
use crate::render::{Element, ElementKind, PathElement, Surface, TextElement};

pub const X_TITLE: &str = "Year";
pub const Y_TITLE: &str = "Population (in millions)";

const LABEL_SIZE_PT: f32 = 15.0;

/// Primitive kinds owned by the line chart; a redraw removes all of them.
const LINE_CHART_KINDS: [ElementKind; 3] =
    [ElementKind::Path, ElementKind::Text, ElementKind::AxisGroup];

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineChartLayout {
    pub width: f32,
    pub height: f32,
    pub x_range: PixelRange,
    pub y_range: PixelRange,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub stroke_width: f32,
    pub stroke_rgb: [u8; 3],
}

impl Default for LineChartLayout {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 800.0,
            x_range: PixelRange::new(100.0, 1200.0),
            y_range: PixelRange::new(100.0, 750.0),
            x_ticks: DEFAULT_X_TICKS,
            y_ticks: DEFAULT_Y_TICKS,
            stroke_width: 3.0,
            stroke_rgb: [0, 0, 255],
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Population-over-time line for one country.
///
/// The drawn path is also the hover target for the tooltip; the UI layer
/// hit-tests it with [`crate::render::Scene::hit_path`].
#[derive(Clone, Debug, Default)]
pub struct LineChartRenderer {
    pub layout: LineChartLayout,
}

impl LineChartRenderer {
    pub fn new(layout: LineChartLayout) -> Self {
        Self { layout }
    }

    /// Remove the previous chart and draw `country` from scratch.
    pub fn redraw(&self, country: &str, records: &[&Record], surface: &mut impl Surface) {
        surface.remove_kinds(&LINE_CHART_KINDS);
        self.render(country, records, surface);
        log::debug!("Redrew line chart for {country} ({} points)", records.len());
    }

    /// Draw axes, the population line and the three labels.
    ///
    /// Points are joined in the order given; they are not sorted by year.
    /// `records` must be non-empty for the axes to have a finite domain.
    pub fn render(&self, country: &str, records: &[&Record], surface: &mut impl Surface) {
        let layout = &self.layout;
        let times: Vec<f64> = records.iter().map(|r| r.time).collect();
        let pops: Vec<f64> = records.iter().map(|r| r.pop_mlns).collect();
        let limits = find_min_max(&times, &pops);

        let axes = AxisMapper::build(
            &limits,
            Field::Time,
            Field::PopMlns,
            layout.x_range,
            layout.y_range,
        )
        .with_tick_counts(layout.x_ticks, layout.y_ticks);
        axes.draw_ticks(surface);

        let [r, g, b] = layout.stroke_rgb;
        surface.append(Element::Path(PathElement {
            points: records.iter().map(|rec| axes.map(rec)).collect(),
            stroke_width: layout.stroke_width,
            color: Color32::from_rgb(r, g, b),
        }));

        let size = LABEL_SIZE_PT;
        let x_title = TextElement::new(pos2(500.0, 800.0), X_TITLE, size);
        let heading = TextElement::new(pos2(100.0, 80.0), country, size);
        let y_title = TextElement::new(pos2(50.0, 475.0), Y_TITLE, size);
        surface.append(Element::Text(x_title));
        surface.append(Element::Text(heading.bold()));
        surface.append(Element::Text(y_title.rotated(-90.0)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;
    use crate::render::Scene;

    fn scene() -> Scene {
        Scene::new(1400.0, 800.0)
    }

    #[test]
    fn render_draws_line_axes_and_labels() {
        let a0 = record("A", 2000.0, 10.0);
        let a1 = record("A", 2001.0, 12.0);
        let mut s = scene();
        let renderer = LineChartRenderer::default();
        renderer.render("A", &[&a0, &a1], &mut s);

        assert_eq!(s.count(ElementKind::AxisGroup), 2);
        let paths: Vec<_> = s.paths().collect();
        assert_eq!(paths.len(), 1);
        assert_eq!(
            paths[0].points,
            vec![pos2(100.0, 750.0), pos2(1200.0, 100.0)]
        );
        assert_eq!(paths[0].stroke_width, 3.0);

        let texts: Vec<_> = s.texts().collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0].text, X_TITLE);
        assert!(texts[1].bold);
        assert_eq!(texts[1].text, "A");
        assert_eq!(texts[2].text, Y_TITLE);
        assert_eq!(texts[2].rotation_deg, -90.0);
    }

    #[test]
    fn points_keep_input_order() {
        let late = record("A", 2010.0, 20.0);
        let early = record("A", 2000.0, 10.0);
        let mid = record("A", 2005.0, 15.0);
        let mut s = scene();
        let renderer = LineChartRenderer::default();
        renderer.render("A", &[&late, &early, &mid], &mut s);

        let path = s.paths().next().unwrap();
        let xs: Vec<f32> = path.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1200.0, 100.0, 650.0]);
    }

    #[test]
    fn redraw_leaves_no_stale_primitives() {
        let a = record("A", 2000.0, 10.0);
        let b = record("B", 2000.0, 5.0);
        let renderer = LineChartRenderer::default();
        let mut s = scene();

        renderer.redraw("A", &[&a], &mut s);
        renderer.redraw("B", &[&b], &mut s);
        renderer.redraw("B", &[&b], &mut s);

        assert_eq!(s.count(ElementKind::Path), 1);
        assert_eq!(s.count(ElementKind::AxisGroup), 2);
        let bold = s.texts().filter(|t| t.bold);
        let titles: Vec<&str> = bold.map(|t| t.text.as_str()).collect();
        assert_eq!(titles, vec!["B"]);
    }

    #[test]
    fn layout_overrides_ranges_and_stroke() {
        let layout = LineChartLayout {
            x_range: PixelRange::new(0.0, 10.0),
            y_range: PixelRange::new(0.0, 10.0),
            stroke_width: 1.0,
            ..Default::default()
        };
        let a0 = record("A", 0.0, 0.0);
        let a1 = record("A", 1.0, 1.0);
        let mut s = scene();
        let renderer = LineChartRenderer::new(layout);
        renderer.render("A", &[&a0, &a1], &mut s);

        let path = s.paths().next().unwrap();
        assert_eq!(path.points, vec![pos2(0.0, 10.0), pos2(10.0, 0.0)]);
        assert_eq!(path.stroke_width, 1.0);
    }
}
