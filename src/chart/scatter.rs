use eframe::egui::{pos2, Color32};
use serde::Deserialize;

use super::axis::{AxisMapper, PixelRange, DEFAULT_X_TICKS, DEFAULT_Y_TICKS};
use super::minmax::find_min_max;
use crate::data::{Field, Record};
use crate::render::{CircleElement, Element, Surface, TextElement};

pub const TITLE: &str = "Life Expectancy vs. Fertility Rate for all countries";
pub const X_TITLE: &str = "Fertility Rates (Avg Children per Woman)";
pub const Y_TITLE: &str = "Life Expectancy (years)";

const LABEL_SIZE_PT: f32 = 8.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScatterLayout {
    pub width: f32,
    pub height: f32,
    pub x_range: PixelRange,
    pub y_range: PixelRange,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub point_radius: f32,
    pub point_rgb: [u8; 3],
}

impl Default for ScatterLayout {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 300.0,
            x_range: PixelRange::new(50.0, 250.0),
            y_range: PixelRange::new(50.0, 250.0),
            x_ticks: DEFAULT_X_TICKS,
            y_ticks: DEFAULT_Y_TICKS,
            point_radius: 1.0,
            point_rgb: [0, 0, 255],
        }
    }
}

/// Fertility vs. life expectancy for every record, drawn once at startup.
#[derive(Clone, Debug, Default)]
pub struct ScatterChartRenderer {
    pub layout: ScatterLayout,
}

impl ScatterChartRenderer {
    pub fn new(layout: ScatterLayout) -> Self {
        Self { layout }
    }

    /// One point per record. Records with NaN values still get a point, at a
    /// NaN position the painter skips.
    pub fn render(&self, records: &[Record], surface: &mut impl Surface) {
        let layout = &self.layout;
        let fertility: Vec<f64> = records.iter().map(|r| r.fertility_rate).collect();
        let life: Vec<f64> = records.iter().map(|r| r.life_expectancy).collect();
        let limits = find_min_max(&fertility, &life);

        let axes = AxisMapper::build(
            &limits,
            Field::FertilityRate,
            Field::LifeExpectancy,
            layout.x_range,
            layout.y_range,
        )
        .with_tick_counts(layout.x_ticks, layout.y_ticks);
        axes.draw_ticks(surface);

        let [r, g, b] = layout.point_rgb;
        let fill = Color32::from_rgb(r, g, b);
        for record in records {
            surface.append(Element::Circle(CircleElement {
                center: axes.map(record),
                radius: layout.point_radius,
                fill,
            }));
        }

        let size = LABEL_SIZE_PT;
        let title = TextElement::new(pos2(50.0, 30.0), TITLE, size);
        let x_title = TextElement::new(pos2(50.0, 285.0), X_TITLE, size);
        let y_title = TextElement::new(pos2(15.0, 200.0), Y_TITLE, size);
        surface.append(Element::Text(title));
        surface.append(Element::Text(x_title));
        surface.append(Element::Text(y_title.rotated(-90.0)));

        log::debug!("Drew scatter panel with {} points", records.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{ElementKind, Scene};

    fn row(fertility_rate: f64, life_expectancy: f64) -> Record {
        Record {
            location: "X".into(),
            time: 2000.0,
            pop_mlns: 1.0,
            fertility_rate,
            life_expectancy,
        }
    }

    #[test]
    fn one_point_per_record() {
        let records = vec![
            row(1.5, 80.0),
            row(6.0, 50.0),
            row(3.0, 65.0),
            row(1.5, 80.0),
        ];
        let mut s = Scene::new(300.0, 300.0);
        ScatterChartRenderer::default().render(&records, &mut s);

        assert_eq!(s.count(ElementKind::Circle), records.len());
        assert_eq!(s.count(ElementKind::AxisGroup), 2);
        assert_eq!(s.count(ElementKind::Text), 3);
    }

    #[test]
    fn extremes_land_on_the_inset_corners() {
        let records = vec![row(1.0, 80.0), row(7.0, 40.0)];
        let mut s = Scene::new(300.0, 300.0);
        ScatterChartRenderer::default().render(&records, &mut s);

        let centers: Vec<_> = s.circles().map(|c| c.center).collect();
        assert_eq!(centers, vec![pos2(50.0, 50.0), pos2(250.0, 250.0)]);
        assert!(s.circles().all(|c| c.radius == 1.0));
    }

    #[test]
    fn non_numeric_values_still_produce_a_point() {
        let records = vec![row(2.0, 70.0), row(f64::NAN, 60.0), row(4.0, 50.0)];
        let mut s = Scene::new(300.0, 300.0);
        ScatterChartRenderer::default().render(&records, &mut s);

        let centers: Vec<_> = s.circles().map(|c| c.center).collect();
        assert_eq!(centers.len(), 3);
        assert!(centers[1].x.is_nan());
        assert_eq!(centers[2], pos2(250.0, 250.0));
    }

    #[test]
    fn labels_match_the_reference_panel() {
        let mut s = Scene::new(300.0, 300.0);
        let records = [row(2.0, 70.0)];
        ScatterChartRenderer::default().render(&records, &mut s);
        let texts: Vec<_> = s.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec![TITLE, X_TITLE, Y_TITLE]);
    }
}
