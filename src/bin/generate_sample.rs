use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

const OUTPUT_PATH: &str = "data/dataEveryYear.csv";
const FIRST_YEAR: u32 = 1950;
const LAST_YEAR: u32 = 2015;

/// One output line, serialized with the loader's column names.
#[derive(Serialize)]
struct Row<'a> {
    location: &'a str,
    time: u32,
    pop_mlns: f64,
    fertility_rate: f64,
    life_expectancy: f64,
}

/// Starting point and trend of one synthetic country:
/// `(name, population in 1950, yearly growth, fertility 1950 -> 2015,
/// life expectancy 1950 -> 2015)`.
type Profile = (&'static str, f64, f64, (f64, f64), (f64, f64));

const PROFILES: &[Profile] = &[
    ("Algeria", 8.9, 0.024, (7.3, 2.9), (41.0, 75.0)),
    ("Brazil", 53.9, 0.021, (6.1, 1.8), (48.0, 74.5)),
    ("Canada", 13.7, 0.014, (3.6, 1.6), (68.0, 81.8)),
    ("India", 376.3, 0.019, (5.9, 2.4), (35.0, 68.0)),
    ("Japan", 82.8, 0.006, (3.0, 1.4), (59.0, 83.7)),
    ("Nigeria", 37.9, 0.026, (6.4, 5.7), (36.0, 53.0)),
    ("Sweden", 7.0, 0.005, (2.3, 1.9), (71.0, 82.2)),
    ("Viet Nam", 24.8, 0.02, (5.4, 2.0), (40.0, 76.0)),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let path = Path::new(OUTPUT_PATH);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating {}", dir.display()))?;
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {OUTPUT_PATH}"))?;

    let span = f64::from(LAST_YEAR - FIRST_YEAR);
    let mut rows = 0usize;
    for &(name, pop_1950, growth, fertility, life) in PROFILES {
        let mut pop = pop_1950;
        for year in FIRST_YEAR..=LAST_YEAR {
            let t = f64::from(year - FIRST_YEAR) / span;
            let fertility_now = lerp(fertility.0, fertility.1, t);
            let life_now = lerp(life.0, life.1, t);

            writer.serialize(Row {
                location: name,
                time: year,
                pop_mlns: round_to(pop, 3),
                fertility_rate: round_to(fertility_now + rng.gauss(0.0, 0.05), 2),
                life_expectancy: round_to(life_now + rng.gauss(0.0, 0.3), 1),
            })?;
            rows += 1;

            // Growth slows as fertility falls.
            let rate = growth * (fertility_now / fertility.0).sqrt();
            pop *= 1.0 + rate + rng.gauss(0.0, 0.001);
        }
    }
    writer.flush().context("flushing CSV output")?;

    println!(
        "Wrote {rows} rows for {} countries ({FIRST_YEAR}-{LAST_YEAR}) to {OUTPUT_PATH}",
        PROFILES.len()
    );
    Ok(())
}
