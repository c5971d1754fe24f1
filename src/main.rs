use clap::{crate_version, Parser};

use crate::opts::{Opts, Subcommand};
use crate::prelude::*;

mod commands;
mod error;
mod features;
mod helpers;
mod math;
mod model;
mod normalizer;
mod opts;
mod prelude;
mod service;

fn main() -> Result {
    let opts = Opts::parse();
    let _sentry_guard = helpers::tracing::init(opts.sentry_dsn.clone(), opts.traces_sample_rate)?;
    debug!(version = crate_version!(), "starting…");

    let result = run_subcommand(opts);
    if let Err(error) = &result {
        sentry::integrations::anyhow::capture_anyhow(error);
        tracing::error!("{:#}", error);
    }
    result
}

fn run_subcommand(opts: Opts) -> Result {
    match opts.subcommand {
        Subcommand::Predict(opts) => commands::predict(opts),
        Subcommand::Inspect(opts) => commands::inspect(opts),
        Subcommand::Normalize(opts) => commands::normalize(opts),
    }
}
