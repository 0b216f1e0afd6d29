use std::io::IsTerminal;

use owo_colors::{AnsiColors, OwoColorize};
use terminal_size::{terminal_size, Width};

use crate::scoring::{Band, PredictionResult};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

fn band_color(band: Band) -> AnsiColors {
    match band.color_token() {
        "green" => AnsiColors::Green,
        "yellow-orange" => AnsiColors::Yellow,
        "orange-red" => AnsiColors::BrightRed,
        _ => AnsiColors::Red,
    }
}

/// Horizontal rule sized to the terminal, capped so piped output stays tidy.
fn rule() -> String {
    let width = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(60)
        .min(60);
    "-".repeat(width)
}

fn score_bar(score: u8, width: usize) -> String {
    let filled = (f64::from(score) / 100.0 * width as f64).round() as usize;
    let empty = width.saturating_sub(filled);
    format!("{}{}", "#".repeat(filled), ".".repeat(empty))
}

/// Format a prediction as a small report card:
/// score line with a bar, category, recommendation.
pub fn format_result(result: &PredictionResult, use_colors: bool) -> String {
    let bar = score_bar(result.score, 20);
    let color = band_color(result.band);

    if use_colors {
        format!(
            "{}\nPerformance score: {}  {}\n{}\n{}\n{}",
            rule(),
            format!("{}/100", result.score).bold(),
            bar.color(color),
            result.band.category().color(color).bold(),
            result.band.recommendation(),
            rule()
        )
    } else {
        format!(
            "{}\nPerformance score: {}/100  {}\n{}\n{}\n{}",
            rule(),
            result.score,
            bar,
            result.band.category(),
            result.band.recommendation(),
            rule()
        )
    }
}

/// Format the per-factor breakdown, one line per contributing metric.
pub fn format_breakdown(result: &PredictionResult, use_colors: bool) -> String {
    let breakdown = &result.breakdown;
    let mut lines = Vec::new();

    lines.push(format!("{:<24}{:>38.1}", "Base score", breakdown.base));
    for factor in &breakdown.factors {
        let delta = factor.after - factor.before;
        let line = format!(
            "{:<24}{:<30}{:>8.1}",
            factor.label, factor.detail, factor.after
        );
        if use_colors {
            if delta < 0.0 {
                lines.push(line.red().to_string());
            } else {
                lines.push(line.green().to_string());
            }
        } else {
            lines.push(line);
        }
    }
    lines.push(format!("{:<24}{:>38.1}", "Raw total", breakdown.raw));
    lines.push(format!(
        "{:<24}{:>38}",
        "Final (0-100)",
        result.score
    ));

    lines.join("\n")
}

/// The machine-readable result record for `--json`.
pub fn result_json(result: &PredictionResult) -> String {
    let value = serde_json::json!({
        "score": result.score,
        "category": result.band.category(),
        "recommendation": result.band.recommendation(),
        "color": result.band.color_token(),
    });
    // json! never produces a non-serializable value
    serde_json::to_string_pretty(&value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MetricsRecord;
    use crate::scoring::compute_prediction;

    fn sample_result(efficiency: &str) -> PredictionResult {
        let mut record = MetricsRecord::default();
        record.company_name.set("Acme");
        record.industry_type.set("automotive");
        record.monthly_output.set("1000");
        record.production_capacity.set("2000");
        record.production_efficiency.set(efficiency);
        compute_prediction(&record).unwrap()
    }

    #[test]
    fn test_plain_result_has_score_and_category() {
        let output = format_result(&sample_result("85"), false);
        assert!(output.contains("64/100"));
        assert!(output.contains("Good Performance"));
        assert!(output.contains("Improve operational efficiency"));
    }

    #[test]
    fn test_score_bar_scales() {
        assert_eq!(score_bar(0, 10), "..........");
        assert_eq!(score_bar(50, 10), "#####.....");
        assert_eq!(score_bar(100, 10), "##########");
    }

    #[test]
    fn test_breakdown_lists_each_factor() {
        let output = format_breakdown(&sample_result("85"), false);
        assert!(output.contains("Base score"));
        assert!(output.contains("Production efficiency"));
        assert!(output.contains("Raw total"));
    }

    #[test]
    fn test_json_shape() {
        let json = result_json(&sample_result("85"));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["score"], 64);
        assert_eq!(value["category"], "Good Performance");
        assert_eq!(value["color"], "yellow-orange");
        assert!(value["recommendation"].as_str().unwrap().len() > 10);
    }
}
