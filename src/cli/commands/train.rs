//! `smtgen train` command - fit and evaluate the regression benchmark

use std::path::PathBuf;

use clap::ValueEnum;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::ml::{evaluate, Label, LineDataset, LinearModel};

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum LabelArg {
    /// Predict the NumberOfDefects column
    NumberOfDefects,
    /// Predict the CycleTime column
    CycleTime,
}

impl From<LabelArg> for Label {
    fn from(arg: LabelArg) -> Self {
        match arg {
            LabelArg::NumberOfDefects => Label::NumberOfDefects,
            LabelArg::CycleTime => Label::CycleTime,
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct TrainArgs {
    /// Input dataset (as written by `smtgen generate line`)
    #[arg(long, short = 'd', default_value = "data.csv")]
    pub data: PathBuf,

    /// Response column to predict
    #[arg(long, short = 'l', value_enum, default_value = "number-of-defects")]
    pub label: LabelArg,

    /// Fraction of rows held out for evaluation
    #[arg(long, default_value = "0.2")]
    pub test_fraction: f64,

    /// Seed for the train/test shuffle
    #[arg(long, default_value = "1")]
    pub seed: u64,
}

pub fn run(args: TrainArgs) -> Result<()> {
    let label: Label = args.label.into();

    let dataset = LineDataset::load(&args.data).into_diagnostic()?;
    let (train, test) = dataset.split(args.test_fraction, args.seed);

    println!(
        "{} Loaded {} rows from {} ({} train / {} test)",
        style("⚙").cyan(),
        dataset.len(),
        style(args.data.display()).cyan(),
        train.len(),
        test.len()
    );

    let model = LinearModel::fit(&train, label).into_diagnostic()?;
    let metrics = evaluate(&model, &test);

    println!(
        "{} Linear regression on {}",
        style("✓").green(),
        style(label.column_name()).yellow()
    );
    println!("   RMSE: {:.6}", metrics.rmse);
    println!("   R2:   {:.6}", metrics.r_squared);
    Ok(())
}
