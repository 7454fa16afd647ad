/// Data extent of a chart, recomputed on every draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLimits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

/// Independent min/max over `xs` and over `ys`.
///
/// NaN entries are skipped. Both slices must be non-empty: an empty (or
/// all-NaN) slice yields NaN bounds, which propagate into the axis mapping.
pub fn find_min_max(xs: &[f64], ys: &[f64]) -> AxisLimits {
    let (x_min, x_max) = extent(xs);
    let (y_min, y_max) = extent(ys);
    AxisLimits {
        x_min,
        x_max,
        y_min,
        y_max,
    }
}

fn extent(values: &[f64]) -> (f64, f64) {
    // f64::min/max return the non-NaN operand, so NaN only survives when
    // every value is NaN.
    let lo = values.iter().copied().fold(f64::NAN, f64::min);
    let hi = values.iter().copied().fold(f64::NAN, f64::max);
    (lo, hi)
}
