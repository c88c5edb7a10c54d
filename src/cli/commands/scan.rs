//! `smtgen scan` command - optimal-speed-range scan for a fixed
//! temperature/quality/humidity triple

use console::style;
use miette::Result;

use crate::core::process::{defect_probability, optimal_speed_range, DEFECT_PROBABILITY_THRESHOLD};

#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// Soldering temperature (°C)
    #[arg(long, short = 't', default_value = "250")]
    pub temperature: f64,

    /// Material quality in [0,1]
    #[arg(long, short = 'q', default_value = "0.8")]
    pub quality: f64,

    /// Relative humidity (%)
    #[arg(long, short = 'u', default_value = "50")]
    pub humidity: f64,
}

pub fn run(args: ScanArgs) -> Result<()> {
    let range = optimal_speed_range(args.temperature, args.quality, args.humidity);

    println!(
        "{} Scanning speeds 30.0–80.0 at temp={}, quality={}, humidity={}",
        style("⚙").cyan(),
        args.temperature,
        args.quality,
        args.humidity
    );

    if range.found() {
        let p_min = defect_probability(args.temperature, range.min, args.quality, args.humidity);
        println!(
            "{} Optimal range: {} – {} (defect probability < {})",
            style("✓").green(),
            style(format!("{:.1}", range.min)).cyan(),
            style(format!("{:.1}", range.max)).cyan(),
            DEFECT_PROBABILITY_THRESHOLD
        );
        println!("   Probability at lower bound: {:.6}", p_min);
    } else {
        println!(
            "{} No speed in the scan window keeps defect probability below {}",
            style("✗").red(),
            DEFECT_PROBABILITY_THRESHOLD
        );
    }
    Ok(())
}
