//! CLI options.

use clap::{Args, Parser};

use crate::features::FeatureVector;
use crate::normalizer::Norm;
use crate::prelude::*;

pub mod parsers;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Opts {
    /// Sentry DSN
    #[arg(short, long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// Performance monitoring sample rate for Sentry
    #[arg(
        long,
        env = "TRACES_SAMPLE_RATE",
        default_value = "0",
        value_parser = parsers::sample_rate,
    )]
    pub traces_sample_rate: f32,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand)]
pub enum Subcommand {
    Predict(PredictOpts),
    Inspect(InspectOpts),
    Normalize(NormalizeOpts),
}

/// Runs the model on the normalized features
#[derive(Args)]
pub struct PredictOpts {
    #[command(flatten)]
    pub model: ModelOpts,

    #[command(flatten)]
    pub features: FeatureOpts,

    /// Row norm
    #[arg(long, value_enum, default_value_t = Norm::L2)]
    pub norm: Norm,

    /// Print the prediction as JSON
    #[arg(long)]
    pub json: bool,
}

/// Loads the model and prints its parameters
#[derive(Args)]
pub struct InspectOpts {
    #[command(flatten)]
    pub model: ModelOpts,
}

/// Prints the normalized feature row
#[derive(Args)]
pub struct NormalizeOpts {
    #[command(flatten)]
    pub features: FeatureOpts,

    /// Row norm
    #[arg(long, value_enum, default_value_t = Norm::L2)]
    pub norm: Norm,
}

#[derive(Args)]
pub struct ModelOpts {
    /// Model artifact path (pickle or JSON)
    #[arg(short = 'm', long = "model", env = "LINREG_PREDICT_MODEL")]
    pub path: PathBuf,
}

#[derive(Args)]
pub struct FeatureOpts {
    #[arg(allow_negative_numbers = true)]
    pub a: f64,

    #[arg(allow_negative_numbers = true)]
    pub b: f64,

    #[arg(allow_negative_numbers = true)]
    pub c: f64,

    #[arg(allow_negative_numbers = true)]
    pub d: f64,
}

impl From<FeatureOpts> for FeatureVector {
    fn from(opts: FeatureOpts) -> Self {
        Self::new(opts.a, opts.b, opts.c, opts.d)
    }
}
