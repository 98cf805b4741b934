//! Risk Calculator CLI Support
//!
//! Config loading, logging setup, and output formatting for the `riskcalc`
//! binary.

use anyhow::Context;
use risk_engine::{Assessment, AssessorConfig};
use std::fmt::Write as _;
use std::path::Path;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Initialize the global tracing subscriber
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Load the assessor config, layering an optional TOML file over defaults
pub fn load_config(path: Option<&Path>) -> anyhow::Result<AssessorConfig> {
    let Some(path) = path else {
        return Ok(AssessorConfig::default());
    };

    let settings = config::Config::builder()
        .add_source(config::Config::try_from(&AssessorConfig::default())?)
        .add_source(config::File::from(path))
        .build()
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    let loaded = settings
        .try_deserialize()
        .with_context(|| format!("invalid config in {}", path.display()))?;
    info!(path = %path.display(), "config file loaded");
    Ok(loaded)
}

/// Human-readable result block, mirroring the original form's output
pub fn format_text(assessment: &Assessment) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Risque estimé: {:.2}", assessment.score);
    let _ = writeln!(out, "Niveau de risque: {}", assessment.level.label());
    if let Some(uncertainty) = assessment.uncertainty {
        let _ = writeln!(
            out,
            "Incertitude: [{:.2}, {:.2}]",
            uncertainty.lower, uncertainty.upper
        );
    }
    out
}

/// JSON result for machine consumption
pub fn format_json(assessment: &Assessment) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(assessment)?)
}
