//! Top-level CLI definition

use clap::{Parser, Subcommand};

use super::commands::generate::{AssemblyArgs, LineArgs};
use super::commands::scan::ScanArgs;
use super::commands::train::TrainArgs;

#[derive(Parser, Debug)]
#[command(
    name = "smtgen",
    version,
    about = "Synthetic SMT assembly process datasets and a regression benchmark",
    long_about = "Generates synthetic surface-mount assembly datasets (soldering and \
                  placement parameters versus defect counts and cycle time) and fits \
                  simple regression models against them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a synthetic dataset
    #[command(subcommand)]
    Generate(GenerateCommands),

    /// Scan assembly speeds for the optimal low-defect range
    Scan(ScanArgs),

    /// Fit and evaluate a regression model on a generated dataset
    Train(TrainArgs),
}

#[derive(Subcommand, Debug)]
pub enum GenerateCommands {
    /// Line dataset: Gaussian process parameters, defect count, cycle time
    Line(LineArgs),

    /// Assembly dataset: uniform parameters, defect flag, optimal speed range
    Assembly(AssemblyArgs),
}
