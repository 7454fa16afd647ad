//! Linear domain → pixel mapping and "nice" tick generation.

// Thresholds for rounding a raw tick step to 1, 2, 5 or 10 × 10^k.
const E10: f64 = 7.0710678118654755; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Affine map from a data domain onto a pixel range.
///
/// The domain is kept exactly as given, so a reversed domain (`d0 > d1`)
/// gives a decreasing map. Values outside the domain are not clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a data value to a pixel coordinate.
    ///
    /// A zero-width domain maps every value to the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span.is_nan() {
            f64::NAN
        } else if span == 0.0 {
            0.5
        } else {
            (value - d0) / span
        };
        r0 + t * (r1 - r0)
    }

    /// Roughly `count` round-numbered values spanning the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, count)
    }

    /// Spacing between the values returned by [`LinearScale::ticks`].
    pub fn tick_step(&self, count: usize) -> f64 {
        let (d0, d1) = self.domain;
        let (lo, hi) = if d0 <= d1 { (d0, d1) } else { (d1, d0) };
        match tick_spec(lo, hi, count as f64) {
            Some((_, _, inc)) if inc < 0.0 => 1.0 / -inc,
            Some((_, _, inc)) => inc,
            None => f64::NAN,
        }
    }
}

/// Tick values between `start` and `stop` (either order), exact multiples
/// of a 1/2/5 × 10^k step.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let Some((i1, i2, inc)) = tick_spec(lo, hi, count as f64) else {
        return Vec::new();
    };
    if i2 < i1 {
        return Vec::new();
    }

    // Dividing by the inverse step keeps values like 0.3 exact.
    let at = |i: f64| if inc < 0.0 { i / -inc } else { i * inc };
    let n = (i2 - i1) as usize + 1;
    let mut out: Vec<f64> = (0..n).map(|k| at(i1 + k as f64)).collect();
    if reverse {
        out.reverse();
    }
    out
}

/// Returns `(first index, last index, increment)`. A negative increment
/// means "divide by `-inc`" (steps below 1).
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(f64, f64, f64)> {
    let step = (stop - start) / count.max(0.0);
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        let step = 10f64.powf(power) * factor;
        i1 = (start / step).round();
        i2 = (stop / step).round();
        if i1 * step < start {
            i1 += 1.0;
        }
        if i2 * step > stop {
            i2 -= 1.0;
        }
        inc = step;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    Some((i1, i2, inc))
}

// ---------------------------------------------------------------------------
// Tick labels
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// Rounded to a whole number, no digit grouping (years).
    Integer,
    /// Fixed decimals with thousands separators.
    Fixed { precision: usize },
}

impl TickFormat {
    /// Fewest decimals that still distinguish ticks spaced `step` apart.
    pub fn for_step(step: f64) -> Self {
        let precision = if step.is_finite() && step > 0.0 {
            (-step.abs().log10().floor()).max(0.0) as usize
        } else {
            0
        };
        TickFormat::Fixed { precision }
    }

    pub fn format(self, value: f64) -> String {
        match self {
            TickFormat::Integer => format!("{}", value.round()),
            TickFormat::Fixed { precision } => {
                let raw = format!("{value:.precision$}");
                group_thousands(&raw)
            }
        }
    }
}

fn group_thousands(raw: &str) -> String {
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw),
    };
    let (int_part, frac_part) = match digits.find('.') {
        Some(dot) => digits.split_at(dot),
        None => (digits, ""),
    };
    if !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    let mut grouped = String::with_capacity(raw.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}{frac_part}")
}
