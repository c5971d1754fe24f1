//! Subcommand entry points.

use std::io::{stdout, Write};

use crate::features::FeatureVector;
use crate::model::artifact;
use crate::normalizer::Normalizer;
use crate::opts::{FeatureOpts, InspectOpts, NormalizeOpts, PredictOpts};
use crate::prelude::*;
use crate::service::PredictionService;

pub fn predict(opts: PredictOpts) -> Result {
    write_prediction(opts, &mut stdout().lock())
}

pub fn inspect(opts: InspectOpts) -> Result {
    write_model(opts, &mut stdout().lock())
}

pub fn normalize(opts: NormalizeOpts) -> Result {
    write_normalized(opts, &mut stdout().lock())
}

fn write_prediction(opts: PredictOpts, output: &mut impl Write) -> Result {
    let FeatureOpts { a, b, c, d } = opts.features;
    let prediction = PredictionService::new(opts.model.path)
        .with_norm(opts.norm)
        .predict(a, b, c, d)?;
    info!(%prediction, "predicted");
    if opts.json {
        writeln!(output, "{}", serde_json::to_string(&prediction)?)?;
    } else {
        writeln!(output, "{}", prediction)?;
    }
    Ok(())
}

fn write_model(opts: InspectOpts, output: &mut impl Write) -> Result {
    let artifact = artifact::load(&opts.model.path)?;
    let model = &artifact.model;
    writeln!(output, "format: {}", artifact.format)?;
    writeln!(output, "features: {}", model.n_features())?;
    writeln!(output, "targets: {}", model.n_targets())?;
    writeln!(output, "coef: {}", serde_json::to_string(&model.coef)?)?;
    writeln!(output, "intercept: {}", serde_json::to_string(&model.intercept)?)?;
    Ok(())
}

fn write_normalized(opts: NormalizeOpts, output: &mut impl Write) -> Result {
    let x = FeatureVector::from(opts.features)
        .normalize(Normalizer::new(opts.norm))
        .with_context(|| format!("failed to normalize with the {} norm", opts.norm))?;
    let row: Vec<String> = x.iter().map(ToString::to_string).collect();
    writeln!(output, "{}", row.join(" "))?;
    Ok(())
}
