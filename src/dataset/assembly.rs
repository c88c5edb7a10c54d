//! Assembly dataset (variant B): uniform process parameters, a Bernoulli
//! defect outcome, and the per-row optimal-speed-range scan
//!
//! Per sample the shared stream is consumed in a fixed order: temperature,
//! assembly speed, material quality, humidity, then the single Bernoulli
//! draw against the computed defect probability. The speed-range scan is
//! deterministic and consumes no randomness.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::DatasetError;
use crate::core::process::{defect_probability, optimal_speed_range, SpeedRange};

pub const HEADER: [&str; 7] = [
    "Temperature",
    "AssemblySpeed",
    "MaterialQuality",
    "Humidity",
    "Defective",
    "MinAssemblySpeed",
    "MaxAssemblySpeed",
];

/// Configuration for the assembly dataset generator.
#[derive(Debug, Clone)]
pub struct AssemblyConfig {
    pub samples: usize,
    pub seed: u64,
    /// Field delimiter for the output file.
    pub delimiter: u8,
    /// Drop rows whose defective flag is set.
    pub skip_defective: bool,
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        Self {
            samples: 10_000,
            seed: 42,
            delimiter: b';',
            skip_defective: false,
        }
    }
}

/// One simulated assembly run.
#[derive(Debug, Clone, Copy)]
pub struct AssemblyRun {
    pub temperature: f64,
    pub assembly_speed: f64,
    pub material_quality: f64,
    pub humidity: f64,
    pub defective: bool,
    pub speed_range: SpeedRange,
}

impl AssemblyRun {
    /// Draw one run: four uniform feature draws, one Bernoulli draw, then
    /// the deterministic speed-range scan.
    pub fn draw(rng: &mut StdRng) -> Self {
        let temperature = rng.random_range(240.0..260.0);
        let assembly_speed = rng.random_range(30.0..80.0);
        let material_quality = rng.random_range(0.0..1.0);
        let humidity = rng.random_range(20.0..80.0);

        let p = defect_probability(temperature, assembly_speed, material_quality, humidity);
        let defective = rng.random::<f64>() < p;

        let speed_range = optimal_speed_range(temperature, material_quality, humidity);

        Self {
            temperature,
            assembly_speed,
            material_quality,
            humidity,
            defective,
            speed_range,
        }
    }
}

/// Generate and serialize the dataset to any writer. Returns the number of
/// rows written (≤ requested when defective rows are skipped).
///
/// All floats are rendered with exactly two decimal places; the defective
/// flag is an integer 0/1.
pub fn write_to<W: io::Write>(config: &AssemblyConfig, writer: W) -> Result<usize, DatasetError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut csv = csv::WriterBuilder::new()
        .delimiter(config.delimiter)
        .from_writer(writer);

    csv.write_record(HEADER)?;
    let mut written = 0;
    for _ in 0..config.samples {
        let run = AssemblyRun::draw(&mut rng);
        if config.skip_defective && run.defective {
            continue;
        }
        csv.write_record([
            format!("{:.2}", run.temperature),
            format!("{:.2}", run.assembly_speed),
            format!("{:.2}", run.material_quality),
            format!("{:.2}", run.humidity),
            format!("{}", if run.defective { 1 } else { 0 }),
            format!("{:.2}", run.speed_range.min),
            format!("{:.2}", run.speed_range.max),
        ])?;
        written += 1;
    }
    csv.flush()?;

    Ok(written)
}

/// Generate the dataset and write it to `path`.
pub fn write_csv(config: &AssemblyConfig, path: &Path) -> Result<usize, DatasetError> {
    let file = File::create(path)?;
    write_to(config, BufWriter::new(file))
}
