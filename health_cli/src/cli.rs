//! Argument parsing and command dispatch.

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fmt;

use health_core::metrics::{bmi, ibw};
use health_core::units::{Centimeters, KgPerM2, Kilograms, Meters};
use health_core::{BmiClassification, Gender, HealthCalc, HealthCalculator, HealthResult, IbwFormula};

#[derive(Debug, Parser)]
#[command(name = "health-cli")]
#[command(about = "Body mass index and ideal body weight calculator")]
pub struct Cli {
    /// Print results and errors as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute and classify BMI
    Bmi(BmiArgs),
    /// Classify an existing BMI value
    Classify {
        #[arg(long, allow_negative_numbers = true)]
        bmi: f64,
    },
    /// Ideal body weight, divisors 4 (male) / 2 (female)
    Ibw(IbwArgs),
    /// Ideal body weight by the Lorenz formula, divisors 4 / 2.5
    Lorenz(IbwArgs),
}

#[derive(Debug, Args)]
pub struct BmiArgs {
    /// Weight in kilograms
    #[arg(long, allow_negative_numbers = true)]
    pub weight: f64,

    /// Height in meters
    #[arg(long, allow_negative_numbers = true, required_unless_present = "height_cm", conflicts_with = "height_cm")]
    pub height: Option<f64>,

    /// Height in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub height_cm: Option<f64>,
}

#[derive(Debug, Args)]
pub struct IbwArgs {
    /// Height in centimeters
    #[arg(long, allow_negative_numbers = true)]
    pub height: f64,

    /// m or f (case-insensitive), or male/female
    #[arg(long)]
    pub gender: Gender,
}

/// Successful outcome of a command.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Outcome {
    Bmi(bmi::BmiResult),
    Classification {
        bmi: f64,
        classification: BmiClassification,
    },
    Ibw(ibw::IbwResult),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Bmi(result) => write!(f, "BMI: {} ({})", result.bmi, result.classification),
            Outcome::Classification { bmi, classification } => {
                write!(f, "BMI {bmi}: {classification}")
            }
            Outcome::Ibw(result) => write!(
                f,
                "Ideal body weight ({}, {}): {}",
                result.formula, result.gender, result.ibw
            ),
        }
    }
}

impl Command {
    /// Execute the command against the given calculator.
    pub fn run(&self, calc: &impl HealthCalc) -> HealthResult<Outcome> {
        match self {
            Command::Bmi(args) => {
                let height = match (args.height, args.height_cm) {
                    (_, Some(cm)) => Meters::from(Centimeters(cm)),
                    (Some(m), None) => Meters(m),
                    (None, None) => unreachable!("clap requires --height unless --height-cm is present"),
                };
                let input = bmi::BmiInput::new(Kilograms(args.weight), height);
                tracing::debug!(?input, "bmi");
                let value = calc.bmi(input.weight_kg, input.height_m)?;
                let classification = calc.bmi_classification(value)?;
                Ok(Outcome::Bmi(bmi::BmiResult {
                    bmi: KgPerM2(value),
                    classification,
                }))
            }
            Command::Classify { bmi } => {
                let classification = calc.bmi_classification(*bmi)?;
                Ok(Outcome::Classification {
                    bmi: *bmi,
                    classification,
                })
            }
            Command::Ibw(args) => ibw_outcome(calc, args, IbwFormula::Standard),
            Command::Lorenz(args) => ibw_outcome(calc, args, IbwFormula::Lorenz),
        }
    }
}

fn ibw_outcome(calc: &impl HealthCalc, args: &IbwArgs, formula: IbwFormula) -> HealthResult<Outcome> {
    tracing::debug!(height_cm = args.height, gender = %args.gender, %formula, "ibw");
    let value = match formula {
        IbwFormula::Standard => calc.ibw(args.height, args.gender)?,
        IbwFormula::Lorenz => calc.lorenz_ibw(args.height, args.gender)?,
    };
    Ok(Outcome::Ibw(ibw::IbwResult {
        ibw: Kilograms(value),
        gender: args.gender,
        formula,
    }))
}

/// Parse, run, and return the outcome; used by `main` and the tests.
pub fn execute(cli: &Cli) -> HealthResult<Outcome> {
    cli.command.run(&HealthCalculator)
}
