//! Membership Chart Rendering
//!
//! Draws each level's lower band (dashed), upper band (solid), the shaded
//! uncertainty region between them, and a vertical marker at the computed
//! score. Purely presentational; consumes an already-computed result.

use membership::{MembershipPreset, SCORE_MAX, SCORE_MIN};
use plotters::prelude::*;
use plotters_svg::SVGBackend;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors during chart rendering
#[derive(Debug, Error)]
pub enum ChartError {
    /// Backend or drawing failure
    #[error("chart rendering failed: {0}")]
    Render(String),

    /// Output path is not valid UTF-8 (SVG backend limitation)
    #[error("output path is not valid UTF-8: {0}")]
    InvalidPath(String),
}

fn render_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}

/// Sampling step over the score domain
const STEP: f64 = 1.0;

fn sample<F: Fn(f64) -> f64>(f: F) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    let mut x = SCORE_MIN;
    while x <= SCORE_MAX {
        points.push((x, f(x)));
        x += STEP;
    }
    points
}

/// Render the preset's membership bands to an SVG file, marking `score`
pub fn render_chart(
    preset: &MembershipPreset,
    score: f64,
    path: &Path,
) -> Result<(), ChartError> {
    let path_str = path
        .to_str()
        .ok_or_else(|| ChartError::InvalidPath(path.display().to_string()))?;

    let root = SVGBackend::new(path_str, (1200, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Fonctions d'appartenance - Type 2", ("sans-serif", 22).into_font())
        .margin(10)
        .x_label_area_size(45)
        .y_label_area_size(60)
        .build_cartesian_2d(SCORE_MIN..SCORE_MAX, 0f64..1.05f64)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Valeur de risque")
        .y_desc("Degré d'appartenance")
        .draw()
        .map_err(render_err)?;

    for (i, (level, set)) in preset.bands().iter().enumerate() {
        let color = Palette99::pick(i).mix(1.0);
        let lower_pts = sample(|x| set.lower().evaluate(x));
        let upper_pts = sample(|x| set.upper().evaluate(x));

        // Shaded uncertainty region between the two bands
        let mut region: Vec<(f64, f64)> = upper_pts.clone();
        region.extend(lower_pts.iter().rev().copied());
        chart
            .draw_series(std::iter::once(Polygon::new(
                region,
                color.mix(0.25).filled(),
            )))
            .map_err(render_err)?;

        chart
            .draw_series(DashedLineSeries::new(lower_pts, 4, 3, color.stroke_width(1)))
            .map_err(render_err)?;
        chart
            .draw_series(LineSeries::new(upper_pts, color.stroke_width(2)))
            .map_err(render_err)?
            .label(level.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    // Vertical marker at the computed score
    chart
        .draw_series(LineSeries::new(
            vec![(score, 0.0), (score, 1.05)],
            RED.stroke_width(2),
        ))
        .map_err(render_err)?
        .label(format!("Risque: {score:.2}"))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .border_style(BLACK)
        .background_style(WHITE.mix(0.85))
        .draw()
        .map_err(render_err)?;
    root.present().map_err(render_err)?;

    info!(path = path_str, score, "chart written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_svg(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("chart-render-test-{name}-{}.svg", std::process::id()))
    }

    #[test]
    fn test_renders_svg_file() {
        let path = temp_svg("balanced");
        let preset = MembershipPreset::balanced();
        render_chart(&preset, 0.0, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("<svg"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_renders_legacy_preset_with_edge_score() {
        let path = temp_svg("legacy");
        let preset = MembershipPreset::legacy();
        render_chart(&preset, SCORE_MAX, &path).unwrap();
        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_sample_covers_domain() {
        let points = sample(|x| x);
        assert_eq!(points.first().map(|p| p.0), Some(SCORE_MIN));
        assert!(points.last().map(|p| p.0).unwrap() <= SCORE_MAX);
        assert!(points.len() as f64 >= (SCORE_MAX - SCORE_MIN) / STEP);
    }
}
