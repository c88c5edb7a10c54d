//! Line dataset (variant A): soldering/placement parameters versus defect
//! count and cycle time
//!
//! Five Gaussian process parameters feed two nonlinear responses. Per sample
//! the shared random stream is consumed in a fixed order: the five feature
//! draws, then the defect-count noise, then the cycle-time noise. Reordering
//! any of these breaks byte-for-byte reproducibility across runs.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::DatasetError;
use crate::core::process::{cycle_time, defect_count};
use crate::core::random::normal;

/// Column order of the output CSV. The regression benchmark loads by these
/// exact names.
pub const HEADER: [&str; 7] = [
    "SolderingTemperature",
    "PlacementSpeed",
    "AmbientTemperature",
    "MaterialQuality",
    "Humidity",
    "NumberOfDefects",
    "CycleTime",
];

/// Parameters of one Gaussian feature distribution.
#[derive(Debug, Clone, Copy)]
pub struct GaussianSpec {
    pub mean: f64,
    pub std_dev: f64,
}

/// Configuration for the line dataset generator.
///
/// Defaults match the historical generator constants (10 000 samples,
/// seed 42).
#[derive(Debug, Clone)]
pub struct LineConfig {
    pub samples: usize,
    pub seed: u64,
    pub soldering_temperature: GaussianSpec,
    pub placement_speed: GaussianSpec,
    pub ambient_temperature: GaussianSpec,
    pub material_quality: GaussianSpec,
    pub humidity: GaussianSpec,
}

impl Default for LineConfig {
    fn default() -> Self {
        Self {
            samples: 10_000,
            seed: 42,
            soldering_temperature: GaussianSpec { mean: 310.0, std_dev: 15.0 },
            placement_speed: GaussianSpec { mean: 50.0, std_dev: 10.0 },
            ambient_temperature: GaussianSpec { mean: 22.0, std_dev: 5.0 },
            // Nominally in [0,1]; the tails are left unclamped.
            material_quality: GaussianSpec { mean: 0.8, std_dev: 0.1 },
            humidity: GaussianSpec { mean: 50.0, std_dev: 20.0 },
        }
    }
}

/// One simulated manufacturing run. Immutable once drawn; exists only long
/// enough to be serialized.
#[derive(Debug, Clone, Copy)]
pub struct LineSample {
    pub soldering_temperature: f64,
    pub placement_speed: f64,
    pub ambient_temperature: f64,
    pub material_quality: f64,
    pub humidity: f64,
    pub number_of_defects: f64,
    pub cycle_time: f64,
}

impl LineSample {
    /// Draw one sample, consuming the stream in documented order.
    pub fn draw(rng: &mut StdRng, config: &LineConfig) -> Self {
        let soldering_temperature = normal(
            rng,
            config.soldering_temperature.mean,
            config.soldering_temperature.std_dev,
        );
        let placement_speed =
            normal(rng, config.placement_speed.mean, config.placement_speed.std_dev);
        let ambient_temperature = normal(
            rng,
            config.ambient_temperature.mean,
            config.ambient_temperature.std_dev,
        );
        let material_quality =
            normal(rng, config.material_quality.mean, config.material_quality.std_dev);
        let humidity = normal(rng, config.humidity.mean, config.humidity.std_dev);

        // Each response draws its own noise term; defects before cycle time.
        let defect_noise = normal(rng, 0.0, 0.5);
        let number_of_defects = defect_count(
            soldering_temperature,
            placement_speed,
            ambient_temperature,
            material_quality,
            humidity,
            defect_noise,
        );

        let cycle_noise = normal(rng, 0.0, 0.01);
        let cycle_time = cycle_time(
            soldering_temperature,
            placement_speed,
            ambient_temperature,
            material_quality,
            humidity,
            cycle_noise,
        );

        Self {
            soldering_temperature,
            placement_speed,
            ambient_temperature,
            material_quality,
            humidity,
            number_of_defects,
            cycle_time,
        }
    }
}

/// Generate and serialize the dataset to any writer. Returns the row count.
///
/// Values use Rust's shortest-round-trip `Display` for `f64`: always a `.`
/// decimal separator, never thousands separators, full precision.
pub fn write_to<W: io::Write>(config: &LineConfig, writer: W) -> Result<usize, DatasetError> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut csv = csv::Writer::from_writer(writer);

    csv.write_record(HEADER)?;
    for _ in 0..config.samples {
        let sample = LineSample::draw(&mut rng, config);
        csv.write_record([
            format!("{}", sample.soldering_temperature),
            format!("{}", sample.placement_speed),
            format!("{}", sample.ambient_temperature),
            format!("{}", sample.material_quality),
            format!("{}", sample.humidity),
            format!("{}", sample.number_of_defects),
            format!("{}", sample.cycle_time),
        ])?;
    }
    csv.flush()?;

    Ok(config.samples)
}

/// Generate the dataset and write it to `path`. All-or-nothing: any I/O
/// failure propagates and the run is abandoned.
pub fn write_csv(config: &LineConfig, path: &Path) -> Result<usize, DatasetError> {
    let file = File::create(path)?;
    write_to(config, BufWriter::new(file))
}
