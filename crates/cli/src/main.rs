//! Fuzzy Risk Calculator - Main Entry Point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use input_validator::parse_field;
use membership::PresetKind;
use risk_engine::{Assessor, ClassificationMethod, ScoreFormula};
use riskcalc::{format_json, format_text, init_logging, load_config};
use tracing::error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormulaArg {
    /// Plain average of the three measures
    Average,
    /// Sum of signed deviations from the reference midpoints
    DeviationSum,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PresetArg {
    /// Breakpoints carried over from the original assessment sheets
    Legacy,
    /// Nested full-coverage bands
    Balanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum MethodArg {
    /// Fixed half-open score bands
    Threshold,
    /// Interval type-2 fuzzy membership
    Type2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "riskcalc",
    version,
    about = "Fuzzy risk calculator for project assessment",
    long_about = "riskcalc combines three bounded measures into a risk score and\n\
        classifies it with interval type-2 fuzzy membership or a threshold table.\n\n\
        EXAMPLES:\n\
        \n  riskcalc --technology 50 --norms 40 --scope 25\n\
        \n  riskcalc -t 65 -n 30 -s 45 --formula average --preset legacy\n\
        \n  riskcalc -t 50 -n 40 -s 25 --chart out.svg --format json"
)]
struct Cli {
    /// Technology complexity measure (valid range 20-80)
    #[arg(short, long)]
    technology: String,

    /// Norms and standards measure (valid range 9-70)
    #[arg(short, long)]
    norms: String,

    /// Project scope measure (valid range 5-50)
    #[arg(short, long)]
    scope: String,

    /// Score formula preset
    #[arg(long, value_enum)]
    formula: Option<FormulaArg>,

    /// Membership breakpoint preset
    #[arg(long, value_enum)]
    preset: Option<PresetArg>,

    /// Classification method
    #[arg(long, value_enum)]
    method: Option<MethodArg>,

    /// Optional TOML config file layered over the defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the membership chart to this SVG file
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    format: FormatArg,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(formula) = cli.formula {
        config.score.formula = match formula {
            FormulaArg::Average => ScoreFormula::Average,
            FormulaArg::DeviationSum => ScoreFormula::DeviationSum,
        };
    }
    if let Some(preset) = cli.preset {
        config.preset = match preset {
            PresetArg::Legacy => PresetKind::Legacy,
            PresetArg::Balanced => PresetKind::Balanced,
        };
    }
    if let Some(method) = cli.method {
        config.method = match method {
            MethodArg::Threshold => ClassificationMethod::Threshold,
            MethodArg::Type2 => ClassificationMethod::Type2,
        };
    }

    let technology = parse_field("technology", &cli.technology)?;
    let norms = parse_field("norms", &cli.norms)?;
    let scope = parse_field("scope", &cli.scope)?;

    let assessor = Assessor::new(config);
    let assessment = assessor.assess(input_validator::AssessmentInput::new(
        technology, norms, scope,
    ))?;

    match cli.format {
        FormatArg::Text => print!("{}", format_text(&assessment)),
        FormatArg::Json => println!("{}", format_json(&assessment)?),
    }

    // The chart is only drawn for a successfully classified score
    if let Some(chart_path) = &cli.chart {
        chart_render::render_chart(assessor.preset(), assessment.score, chart_path)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            eprintln!("Erreur: {err}");
            ExitCode::FAILURE
        }
    }
}
