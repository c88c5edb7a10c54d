//! `smtgen generate` commands - write synthetic datasets to disk

use std::path::PathBuf;

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::dataset::{assembly, line, AssemblyConfig, LineConfig};

#[derive(clap::Args, Debug)]
pub struct LineArgs {
    /// Number of samples to generate
    #[arg(long, short = 'n', default_value = "10000")]
    pub samples: usize,

    /// Random seed (fixed seed gives byte-identical output)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output CSV path
    #[arg(long, short = 'o', default_value = "data.csv")]
    pub output: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct AssemblyArgs {
    /// Number of samples to generate
    #[arg(long, short = 'n', default_value = "10000")]
    pub samples: usize,

    /// Random seed (fixed seed gives byte-identical output)
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output path
    #[arg(long, short = 'o', default_value = "assembly.csv")]
    pub output: PathBuf,

    /// Field delimiter
    #[arg(long, default_value = ";")]
    pub delimiter: char,

    /// Drop rows flagged as defective
    #[arg(long)]
    pub skip_defective: bool,
}

pub fn run_line(args: LineArgs) -> Result<()> {
    let config = LineConfig {
        samples: args.samples,
        seed: args.seed,
        ..LineConfig::default()
    };

    let written = line::write_csv(&config, &args.output).into_diagnostic()?;

    println!(
        "{} Generated {} line samples (seed {}) to {}",
        style("✓").green(),
        style(written).cyan(),
        args.seed,
        style(args.output.display()).cyan()
    );
    Ok(())
}

pub fn run_assembly(args: AssemblyArgs) -> Result<()> {
    let mut delimiter_buf = [0u8; 1];
    if args.delimiter.encode_utf8(&mut delimiter_buf).len() != 1 {
        miette::bail!("Delimiter must be a single-byte character");
    }

    let config = AssemblyConfig {
        samples: args.samples,
        seed: args.seed,
        delimiter: delimiter_buf[0],
        skip_defective: args.skip_defective,
    };

    let written = assembly::write_csv(&config, &args.output).into_diagnostic()?;

    if args.skip_defective && written < args.samples {
        println!(
            "{} Skipped {} defective runs",
            style("⚙").cyan(),
            args.samples - written
        );
    }
    println!(
        "{} Generated {} assembly runs (seed {}) to {}",
        style("✓").green(),
        style(written).cyan(),
        args.seed,
        style(args.output.display()).cyan()
    );
    Ok(())
}
