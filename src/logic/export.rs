//! Result Exporter
//!
//! Serializes a prediction (and optionally its insights) to CSV, pretty
//! JSON, or a plain-text report with fixed section banners. Column
//! order and section order are load-bearing - downstream spreadsheets
//! and diff-based tests key on them.

use std::io::Write;
use std::path::Path;

use chrono::Local;
use serde::Serialize;

use crate::logic::features::FeatureRecord;
use crate::logic::insight::InsightBundle;
use crate::logic::model::Prediction;

// ============================================================================
// EXPORT FORMATS
// ============================================================================

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Single-row CSV for spreadsheet analysis
    Csv,
    /// Pretty JSON mirroring the prediction + insights structure
    Json,
    /// Human-readable text report
    Report,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Report => "txt",
        }
    }
}

/// CSV column order. Fixed; append-only.
pub const CSV_HEADER: &str = "Timestamp,Funding ($),Team Size,Market Size ($),\
Monthly Revenue ($),Growth Rate (%),Success Score,Prediction,Confidence (%),\
Low Potential (%),Moderate Potential (%),High Potential (%)";

// ============================================================================
// JSON SHAPE
// ============================================================================

#[derive(Serialize)]
struct InputMetrics {
    funding: f64,
    team_size: f64,
    market_size: f64,
    monthly_revenue: f64,
    growth_rate: f64,
}

#[derive(Serialize)]
struct ExportData<'a> {
    timestamp: String,
    input_metrics: InputMetrics,
    prediction: &'a Prediction,
    #[serde(skip_serializing_if = "Option::is_none")]
    insights: Option<&'a InsightBundle>,
}

// ============================================================================
// RENDERERS
// ============================================================================

/// Header plus one data row.
pub fn to_csv(record: &FeatureRecord, prediction: &Prediction) -> String {
    let row = format!(
        "{},{},{},{},{},{},{},{},{},{},{},{}",
        timestamp(),
        record.funding,
        record.team_size,
        record.market_size,
        record.revenue,
        record.growth_rate,
        prediction.success_score,
        prediction.label,
        prediction.confidence,
        prediction.probabilities.low,
        prediction.probabilities.moderate,
        prediction.probabilities.high,
    );
    format!("{}\n{}\n", CSV_HEADER, row)
}

/// 2-space indented JSON.
pub fn to_json(
    record: &FeatureRecord,
    prediction: &Prediction,
    insights: Option<&InsightBundle>,
) -> serde_json::Result<String> {
    let data = ExportData {
        timestamp: timestamp(),
        input_metrics: InputMetrics {
            funding: record.funding,
            team_size: record.team_size,
            market_size: record.market_size,
            monthly_revenue: record.revenue,
            growth_rate: record.growth_rate,
        },
        prediction,
        insights,
    };
    serde_json::to_string_pretty(&data)
}

/// Banner-sectioned text report: INPUT METRICS, PREDICTION RESULTS,
/// PROBABILITY BREAKDOWN, then DETAILED INSIGHTS when available.
pub fn to_report(
    record: &FeatureRecord,
    prediction: &Prediction,
    insights: Option<&InsightBundle>,
) -> String {
    let heavy = "=".repeat(60);
    let light = "-".repeat(60);
    let mut lines: Vec<String> = Vec::new();

    lines.push(heavy.clone());
    lines.push("STARTUP SUCCESS PREDICTOR - ANALYSIS REPORT".to_string());
    lines.push(heavy.clone());
    lines.push(format!("\nGenerated: {}\n", timestamp()));

    lines.push(format!("\n{}", light));
    lines.push("INPUT METRICS".to_string());
    lines.push(light.clone());
    lines.push(format!("{:<23}${}", "Funding Amount:", group_thousands(record.funding)));
    lines.push(format!("{:<23}{} members", "Team Size:", record.team_size));
    lines.push(format!("{:<23}${}", "Market Size:", group_thousands(record.market_size)));
    lines.push(format!("{:<23}${}", "Monthly Revenue:", group_thousands(record.revenue)));
    lines.push(format!("{:<23}{}%", "Growth Rate:", record.growth_rate));

    lines.push(format!("\n{}", light));
    lines.push("PREDICTION RESULTS".to_string());
    lines.push(light.clone());
    lines.push(format!("{:<23}{}/100", "Success Score:", prediction.success_score));
    lines.push(format!("{:<23}{}", "Prediction:", prediction.label));
    lines.push(format!("{:<23}{}%", "Confidence:", prediction.confidence));

    lines.push(format!("\n{}", light));
    lines.push("PROBABILITY BREAKDOWN".to_string());
    lines.push(light.clone());
    lines.push(format!("{:<23}{}%", "Low Potential:", prediction.probabilities.low));
    lines.push(format!("{:<23}{}%", "Moderate Potential:", prediction.probabilities.moderate));
    lines.push(format!("{:<23}{}%", "High Potential:", prediction.probabilities.high));

    if let Some(insights) = insights {
        lines.push(format!("\n{}", light));
        lines.push("DETAILED INSIGHTS".to_string());
        lines.push(light.clone());

        if !insights.strengths.is_empty() {
            lines.push("\nSTRENGTHS:".to_string());
            for strength in &insights.strengths {
                lines.push(format!("  • {}: {}", strength.factor.as_str(), strength.description));
            }
        }

        if !insights.risk_factors.is_empty() {
            lines.push("\nRISK FACTORS:".to_string());
            for risk in &insights.risk_factors {
                lines.push(format!(
                    "  • {} ({}): {}",
                    risk.factor.as_str(),
                    risk.severity,
                    risk.description
                ));
            }
        }

        lines.push(format!(
            "\n{:<23}{}",
            "Funding Adequacy:",
            insights.funding_adequacy.status.as_str()
        ));
        lines.push(format!("  {}", insights.funding_adequacy.message));
        lines.push(format!(
            "\n{:<23}{}",
            "Team Efficiency:",
            insights.team_efficiency.status.as_str()
        ));
        lines.push(format!("  {}", insights.team_efficiency.message));
        lines.push(format!(
            "\n{:<23}{}",
            "Growth Momentum:",
            insights.growth_momentum.status.as_str()
        ));
        lines.push(format!("  {}", insights.growth_momentum.message));
    }

    lines.push(format!("\n{}", heavy));
    lines.push("END OF REPORT".to_string());
    lines.push(heavy);

    lines.join("\n")
}

// ============================================================================
// FILE EXPORT
// ============================================================================

/// Render and write in one step.
pub fn export_to_file(
    path: &Path,
    format: ExportFormat,
    record: &FeatureRecord,
    prediction: &Prediction,
    insights: Option<&InsightBundle>,
) -> std::io::Result<()> {
    let content = match format {
        ExportFormat::Csv => to_csv(record, prediction),
        ExportFormat::Json => to_json(record, prediction, insights)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?,
        ExportFormat::Report => to_report(record, prediction, insights),
    };

    let mut file = std::fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    log::info!("Exported {:?} report to {}", format, path.display());
    Ok(())
}

// ============================================================================
// FORMATTING HELPERS
// ============================================================================

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// "1234567.5" -> "1,234,567.50"
pub fn group_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (sign, rest) = if let Some(stripped) = formatted.strip_prefix('-') {
        ("-", stripped)
    } else {
        ("", formatted.as_str())
    };
    let (integer, fraction) = rest.split_once('.').unwrap_or((rest, "00"));

    let mut grouped = String::new();
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}{}.{}", sign, grouped, fraction)
}

/// Compact currency for terminal display: $1.50M, $25.00K, ...
pub fn format_currency(amount: f64) -> String {
    if amount >= 1e9 {
        format!("${:.2}B", amount / 1e9)
    } else if amount >= 1e6 {
        format!("${:.2}M", amount / 1e6)
    } else if amount >= 1e3 {
        format!("${:.2}K", amount / 1e3)
    } else {
        format!("${:.2}", amount)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::insight::generate_insights;
    use crate::logic::model::{Tier, TierProbabilities};
    use tempfile::TempDir;

    fn sample_prediction() -> Prediction {
        Prediction {
            success_score: 61.25,
            label: Tier::Moderate,
            confidence: 55.0,
            probabilities: TierProbabilities {
                low: 11.25,
                moderate: 55.0,
                high: 33.75,
            },
        }
    }

    #[test]
    fn test_csv_header_is_exact() {
        assert_eq!(
            CSV_HEADER,
            "Timestamp,Funding ($),Team Size,Market Size ($),Monthly Revenue ($),\
Growth Rate (%),Success Score,Prediction,Confidence (%),Low Potential (%),\
Moderate Potential (%),High Potential (%)"
        );
    }

    #[test]
    fn test_csv_has_header_and_one_row() {
        let csv = to_csv(&FeatureRecord::default(), &sample_prediction());
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], CSV_HEADER);
        assert!(lines[1].contains("Moderate Potential"));
        assert!(lines[1].contains("500000"));
        assert_eq!(lines[1].split(',').count(), 12);
    }

    #[test]
    fn test_json_shape_and_indentation() {
        let record = FeatureRecord::default();
        let prediction = sample_prediction();
        let insights = generate_insights(&record, prediction.label, prediction.success_score);
        let json = to_json(&record, &prediction, Some(&insights)).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed["timestamp"].is_string());
        assert_eq!(parsed["input_metrics"]["monthly_revenue"], 25_000.0);
        assert_eq!(parsed["prediction"]["prediction_label"], "Moderate Potential");
        assert_eq!(parsed["prediction"]["probabilities"]["high"], 33.75);
        assert!(parsed["insights"]["funding_adequacy"]["status"].is_string());

        // serde_json pretty printing indents with two spaces.
        assert!(json.contains("\n  \"timestamp\""));
    }

    #[test]
    fn test_json_omits_missing_insights() {
        let json = to_json(&FeatureRecord::default(), &sample_prediction(), None).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(parsed.get("insights").is_none());
    }

    #[test]
    fn test_report_sections_in_order() {
        let record = FeatureRecord::default();
        let prediction = sample_prediction();
        let insights = generate_insights(&record, prediction.label, prediction.success_score);
        let report = to_report(&record, &prediction, Some(&insights));

        let sections = [
            "INPUT METRICS",
            "PREDICTION RESULTS",
            "PROBABILITY BREAKDOWN",
            "DETAILED INSIGHTS",
            "END OF REPORT",
        ];
        let mut last = 0;
        for section in sections {
            let position = report.find(section).unwrap_or_else(|| panic!("missing {}", section));
            assert!(position > last, "{} out of order", section);
            last = position;
        }
        assert!(report.contains("$500,000.00"));
        assert!(report.contains("61.25/100"));
    }

    #[test]
    fn test_report_skips_insights_when_absent() {
        let report = to_report(&FeatureRecord::default(), &sample_prediction(), None);
        assert!(!report.contains("DETAILED INSIGHTS"));
        assert!(report.contains("END OF REPORT"));
    }

    #[test]
    fn test_export_to_file_writes_all_formats() {
        let dir = TempDir::new().unwrap();
        let record = FeatureRecord::default();
        let prediction = sample_prediction();

        for format in [ExportFormat::Csv, ExportFormat::Json, ExportFormat::Report] {
            let path = dir.path().join(format!("out.{}", format.extension()));
            export_to_file(&path, format, &record, &prediction, None).unwrap();
            let content = std::fs::read_to_string(&path).unwrap();
            assert!(!content.is_empty());
        }
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(500_000.0), "500,000.00");
        assert_eq!(group_thousands(1_234_567.5), "1,234,567.50");
        assert_eq!(group_thousands(999.0), "999.00");
        assert_eq!(group_thousands(-1_000.0), "-1,000.00");
        assert_eq!(group_thousands(0.0), "0.00");
    }

    #[test]
    fn test_format_currency_bands() {
        assert_eq!(format_currency(2_500_000_000.0), "$2.50B");
        assert_eq!(format_currency(1_500_000.0), "$1.50M");
        assert_eq!(format_currency(25_000.0), "$25.00K");
        assert_eq!(format_currency(999.99), "$999.99");
    }
}
