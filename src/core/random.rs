//! Gaussian sampling over an explicitly threaded generator
//!
//! The generator handle is passed into every sampling call rather than held
//! as ambient state; draw order is part of the reproducibility contract, so
//! callers must keep it fixed.

use rand::rngs::StdRng;
use rand::Rng;

/// Draw one sample from Normal(mean, std_dev) via the basic Box-Muller
/// transform.
///
/// Consumes exactly two uniform draws per call and discards the cosine-paired
/// second variate. Raw [0,1) draws are mapped to (0,1] with `1 - raw` so the
/// log term never sees zero; a raw draw of exactly 0 maps u1 to 1 and yields
/// a valid near-zero variate.
pub fn normal(rng: &mut StdRng, mean: f64, std_dev: f64) -> f64 {
    let u1 = 1.0 - rng.random::<f64>();
    let u2 = 1.0 - rng.random::<f64>();
    let z = (-2.0_f64 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).sin();
    mean + std_dev * z
}
