use eframe::egui::{pos2, Pos2};
use serde::Deserialize;

use super::minmax::AxisLimits;
use super::scale::{LinearScale, TickFormat};
use crate::data::{Field, Record};
use crate::render::{AxisGroup, AxisOrient, AxisTick, Element, Surface};

/// Requested tick count along the x axis.
pub const DEFAULT_X_TICKS: usize = 25;
/// Requested tick count along the y axis.
pub const DEFAULT_Y_TICKS: usize = 10;

/// Pixel span one axis is drawn across.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct PixelRange {
    pub min: f64,
    pub max: f64,
}

impl PixelRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

// ---------------------------------------------------------------------------
// AxisMapper – record → pixel mapping for two arbitrary fields
// ---------------------------------------------------------------------------

/// Maps `x_field` left-to-right across `range_x` and `y_field` bottom-to-top
/// across `range_y` (larger values get smaller pixel y).
#[derive(Clone, Debug)]
pub struct AxisMapper {
    x_field: Field,
    y_field: Field,
    x_scale: LinearScale,
    y_scale: LinearScale,
    range_x: PixelRange,
    range_y: PixelRange,
    x_ticks: usize,
    y_ticks: usize,
}

impl AxisMapper {
    pub fn build(
        limits: &AxisLimits,
        x_field: Field,
        y_field: Field,
        range_x: PixelRange,
        range_y: PixelRange,
    ) -> Self {
        Self {
            x_field,
            y_field,
            x_scale: LinearScale::new((limits.x_min, limits.x_max), (range_x.min, range_x.max)),
            y_scale: LinearScale::new((limits.y_max, limits.y_min), (range_y.min, range_y.max)),
            range_x,
            range_y,
            x_ticks: DEFAULT_X_TICKS,
            y_ticks: DEFAULT_Y_TICKS,
        }
    }

    pub fn with_tick_counts(mut self, x_ticks: usize, y_ticks: usize) -> Self {
        self.x_ticks = x_ticks;
        self.y_ticks = y_ticks;
        self
    }

    pub fn map_x(&self, record: &Record) -> f64 {
        self.x_scale.map(record.value(self.x_field))
    }

    pub fn map_y(&self, record: &Record) -> f64 {
        self.y_scale.map(record.value(self.y_field))
    }

    /// Pixel position of `record` on the surface.
    pub fn map(&self, record: &Record) -> Pos2 {
        pos2(self.map_x(record) as f32, self.map_y(record) as f32)
    }

    /// Append a bottom axis along `range_y.max` and a left axis along
    /// `range_x.min`. Existing axes are left in place.
    pub fn draw_ticks(&self, surface: &mut impl Surface) {
        surface.append(Element::AxisGroup(self.axis_group(AxisOrient::Bottom)));
        surface.append(Element::AxisGroup(self.axis_group(AxisOrient::Left)));
    }

    fn axis_group(&self, orient: AxisOrient) -> AxisGroup {
        let (scale, field, count, translate, range) = match orient {
            AxisOrient::Bottom => (
                &self.x_scale,
                self.x_field,
                self.x_ticks,
                self.range_y.max,
                self.range_x,
            ),
            AxisOrient::Left => (
                &self.y_scale,
                self.y_field,
                self.y_ticks,
                self.range_x.min,
                self.range_y,
            ),
        };
        let format = if field.is_year() {
            TickFormat::Integer
        } else {
            TickFormat::for_step(scale.tick_step(count))
        };
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|value| AxisTick {
                offset: scale.map(value) as f32,
                label: format.format(value),
            })
            .collect();

        AxisGroup {
            orient,
            translate: translate as f32,
            range: (range.min as f32, range.max as f32),
            ticks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::record;
    use crate::render::Scene;

    fn limits() -> AxisLimits {
        AxisLimits {
            x_min: 2000.0,
            x_max: 2010.0,
            y_min: 10.0,
            y_max: 50.0,
        }
    }

    fn mapper() -> AxisMapper {
        AxisMapper::build(
            &limits(),
            Field::Time,
            Field::PopMlns,
            PixelRange::new(100.0, 1200.0),
            PixelRange::new(100.0, 750.0),
        )
    }

    #[test]
    fn x_increases_and_y_decreases_with_value() {
        let axes = mapper();
        let low = record("A", 2000.0, 10.0);
        let mid = record("A", 2005.0, 30.0);
        let high = record("A", 2010.0, 50.0);

        assert_eq!(axes.map_x(&low), 100.0);
        assert_eq!(axes.map_x(&high), 1200.0);
        assert!(axes.map_x(&low) < axes.map_x(&mid));
        assert!(axes.map_x(&mid) < axes.map_x(&high));

        assert_eq!(axes.map_y(&high), 100.0);
        assert_eq!(axes.map_y(&low), 750.0);
        assert!(axes.map_y(&low) > axes.map_y(&mid));
        assert!(axes.map_y(&mid) > axes.map_y(&high));
    }

    #[test]
    fn fields_are_read_generically() {
        let axes = AxisMapper::build(
            &AxisLimits {
                x_min: 1.0,
                x_max: 3.0,
                y_min: 60.0,
                y_max: 80.0,
            },
            Field::FertilityRate,
            Field::LifeExpectancy,
            PixelRange::new(50.0, 250.0),
            PixelRange::new(50.0, 250.0),
        );
        let r = record("A", 2000.0, 1.0); // fertility 2.0, life expectancy 70.0
        assert_eq!(axes.map(&r), pos2(150.0, 150.0));
    }

    #[test]
    fn single_value_domain_collapses_to_one_pixel() {
        let axes = AxisMapper::build(
            &AxisLimits {
                x_min: 2000.0,
                x_max: 2000.0,
                y_min: 5.0,
                y_max: 5.0,
            },
            Field::Time,
            Field::PopMlns,
            PixelRange::new(100.0, 1200.0),
            PixelRange::new(100.0, 750.0),
        );
        assert_eq!(axes.map(&record("B", 2000.0, 5.0)), pos2(650.0, 425.0));
    }

    #[test]
    fn draw_ticks_appends_bottom_and_left_axes() {
        let mut scene = Scene::new(1400.0, 800.0);
        mapper().draw_ticks(&mut scene);

        let groups: Vec<&AxisGroup> = scene.axis_groups().collect();
        assert_eq!(groups.len(), 2);

        let bottom = groups[0];
        assert_eq!(bottom.orient, AxisOrient::Bottom);
        assert_eq!(bottom.translate, 750.0);
        assert_eq!(bottom.range, (100.0, 1200.0));
        assert_eq!(bottom.ticks.first().unwrap().label, "2000");
        assert_eq!(bottom.ticks.first().unwrap().offset, 100.0);
        assert!(bottom.ticks.len() > 5);

        let left = groups[1];
        assert_eq!(left.orient, AxisOrient::Left);
        assert_eq!(left.translate, 100.0);
        let fifty = left.ticks.iter().find(|t| t.label == "50").unwrap();
        assert_eq!(fifty.offset, 100.0);
    }

    #[test]
    fn draw_ticks_does_not_clear() {
        let mut scene = Scene::new(1400.0, 800.0);
        let axes = mapper();
        axes.draw_ticks(&mut scene);
        axes.draw_ticks(&mut scene);
        assert_eq!(scene.axis_groups().count(), 4);
    }
}
