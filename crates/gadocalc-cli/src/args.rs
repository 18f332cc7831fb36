use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::form::PatientForm;

#[derive(Debug, Parser)]
#[command(
    name = "gadocalc",
    version,
    about = "Educational gadolinium contrast volume calculator for MRI. Not for clinical use."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text, env = "GADOCALC_FORMAT")]
    pub format: OutputFormat,

    /// Log line format (logs go to stderr).
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact, env = "GADOCALC_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Enable debug logging. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List agents, optionally only those allowed for a given age.
    Agents {
        #[arg(long)]
        age: Option<u32>,
    },
    /// Compute the contrast volume for one patient.
    Evaluate(EvaluateArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Compact,
    Json,
}

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Read the form as JSON from a file, or `-` for stdin.
    #[arg(long, conflicts_with_all = ["name", "age", "weight", "agent", "study", "technique", "renal_impairment", "prior_allergy"])]
    pub input: Option<PathBuf>,

    /// Patient's full name.
    #[arg(long, required_unless_present = "input")]
    pub name: Option<String>,

    /// Age in whole years.
    #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
    pub age: Option<i64>,

    /// Weight in kg.
    #[arg(long, allow_negative_numbers = true, required_unless_present = "input")]
    pub weight: Option<f64>,

    /// Agent name, e.g. Dotarem.
    #[arg(long, required_unless_present = "input")]
    pub agent: Option<String>,

    /// Study, e.g. "brain MRI".
    #[arg(long)]
    pub study: Option<String>,

    /// Technique, e.g. "T1 post-contrast".
    #[arg(long)]
    pub technique: Option<String>,

    /// Significant renal impairment (advanced CKD, eGFR < 30 mL/min, dialysis).
    #[arg(long)]
    pub renal_impairment: bool,

    /// Prior allergic reaction to contrast.
    #[arg(long)]
    pub prior_allergy: bool,
}

impl EvaluateArgs {
    /// Form fields from flags. Missing flags leave the field blank so the
    /// form checks report them.
    pub fn to_form(&self) -> PatientForm {
        PatientForm {
            name: self.name.clone().unwrap_or_default(),
            age: self.age.unwrap_or_default(),
            weight_kg: self.weight.unwrap_or_default(),
            agent: self.agent.clone().unwrap_or_default(),
            study: self.study.clone().unwrap_or_default(),
            technique: self.technique.clone().unwrap_or_default(),
            renal_impairment: self.renal_impairment,
            prior_allergy: self.prior_allergy,
        }
    }
}
