//! Write plausible sample copies of the two dashboard CSV files into the
//! current directory, for local runs without the real OECD exports.

use anyhow::{Context, Result};

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
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in [0, 1).
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in [lo, hi).
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }

    fn pick(&mut self, n: u64) -> u64 {
        self.next_u64() % n
    }
}

const CATEGORIES: [&str; 5] = ["CP01", "CP041", "CP045", "CP07", "CP11"];
const YEARS: [i32; 5] = [2020, 2021, 2022, 2023, 2024];

const COUNTRIES: [&str; 20] = [
    "AUT", "BEL", "CAN", "CHE", "CZE", "DEU", "DNK", "ESP", "FIN", "FRA", "GBR", "GRC", "IRL",
    "ITA", "JPN", "MEX", "NLD", "POL", "SWE", "USA",
];

fn write_timeseries(rng: &mut SimpleRng) -> Result<()> {
    let mut writer =
        csv::Writer::from_path("canada_vs_oecd_timeseries.csv").context("creating time series CSV")?;
    writer.write_record([
        "category",
        "year",
        "can_cpi",
        "oecd_cpi",
        "can_exp_share",
        "oecd_exp_share",
        "can_exp_growth",
        "oecd_exp_growth",
    ])?;

    for cat in CATEGORIES {
        // Start each series near a category-specific level and random-walk it,
        // roughly following the 2020-2024 inflation spike shape.
        let mut can_cpi = rng.range(0.5, 2.5);
        let mut oecd_cpi = rng.range(0.5, 2.5);
        let share = rng.range(0.02, 0.18);

        for (i, year) in YEARS.iter().enumerate() {
            let spike = if i == 2 { rng.range(2.0, 5.0) } else { 0.0 };
            can_cpi += rng.range(-0.8, 1.2) + spike;
            oecd_cpi += rng.range(-0.8, 1.2) + spike;

            writer.write_record([
                cat.to_string(),
                year.to_string(),
                format!("{:.2}", can_cpi.max(-1.0)),
                format!("{:.2}", oecd_cpi.max(-1.0)),
                format!("{:.4}", share + rng.range(-0.005, 0.005)),
                format!("{:.4}", share + rng.range(-0.01, 0.01)),
                format!("{:.3}", rng.range(-0.05, 0.10)),
                format!("{:.3}", rng.range(-0.05, 0.10)),
            ])?;
        }
    }

    writer.flush().context("flushing time series CSV")?;
    Ok(())
}

fn write_clusters(rng: &mut SimpleRng) -> Result<()> {
    let mut writer =
        csv::Writer::from_path("cluster_results.csv").context("creating cluster CSV")?;
    writer.write_record(["country", "cluster"])?;

    for country in COUNTRIES {
        writer.write_record([country.to_string(), rng.pick(4).to_string()])?;
    }

    writer.flush().context("flushing cluster CSV")?;
    Ok(())
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(20240527);

    write_timeseries(&mut rng)?;
    write_clusters(&mut rng)?;

    println!(
        "Wrote canada_vs_oecd_timeseries.csv ({} rows) and cluster_results.csv ({} rows)",
        CATEGORIES.len() * YEARS.len(),
        COUNTRIES.len()
    );
    Ok(())
}
