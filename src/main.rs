//! Startup Success Predictor - Terminal Session
//!
//! One interactive loop: prompt for the five metrics, validate,
//! predict, print the analysis, optionally export. Rendering stays
//! here; every number comes from the engines in `logic`.

use std::io::{self, Write};
use std::path::PathBuf;

use startup_success_core::constants::{APP_NAME, APP_VERSION};
use startup_success_core::logic::advisor;
use startup_success_core::logic::export::{self, ExportFormat};
use startup_success_core::logic::features::{self, validate, FeatureRecord};
use startup_success_core::logic::insight;
use startup_success_core::logic::model::{self, Prediction, SuccessModel};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("Starting {} v{}", APP_NAME, APP_VERSION);

    let predictor = match model::shared() {
        Ok(predictor) => predictor,
        Err(e) => {
            log::error!("Model training failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("{} v{}", APP_NAME, APP_VERSION);
    println!("Enter your startup's metrics (press Enter to accept the default).\n");

    loop {
        let Some(record) = read_record() else {
            break;
        };

        run_analysis(predictor, &record);

        if !ask_yes_no("\nAnalyze another startup? [y/N] ") {
            break;
        }
        println!();
    }

    log::info!(
        "Session finished after {} prediction(s)",
        predictor.status().prediction_count
    );
}

// ============================================================================
// INPUT
// ============================================================================

/// Prompt for all five metrics until a valid record comes back.
/// Returns None on end of input.
fn read_record() -> Option<FeatureRecord> {
    loop {
        let defaults = FeatureRecord::default();
        let record = FeatureRecord {
            funding: prompt_metric("Funding amount ($)", defaults.funding)?,
            team_size: prompt_metric("Team size", defaults.team_size)?,
            market_size: prompt_metric("Market size ($)", defaults.market_size)?,
            revenue: prompt_metric("Monthly revenue ($)", defaults.revenue)?,
            growth_rate: prompt_metric("Growth rate (%)", defaults.growth_rate)?,
        };

        match validate(&record) {
            Ok(()) => return Some(record),
            Err(e) => println!("\nInvalid input: {}\nPlease try again.\n", e),
        }
    }
}

fn prompt_metric(label: &str, default: f64) -> Option<f64> {
    loop {
        print!("{} [{}]: ", label, default);
        let _ = io::stdout().flush();

        let mut line = String::new();
        if io::stdin().read_line(&mut line).ok()? == 0 {
            return None; // EOF
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Some(default);
        }
        match trimmed.replace([',', '$'], "").parse::<f64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Not a number, try again."),
        }
    }
}

fn ask_yes_no(question: &str) -> bool {
    print!("{}", question);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(n) if n > 0 => matches!(line.trim().to_lowercase().as_str(), "y" | "yes"),
        _ => false,
    }
}

// ============================================================================
// ANALYSIS OUTPUT
// ============================================================================

fn run_analysis(predictor: &SuccessModel, record: &FeatureRecord) {
    let prediction = predictor.predict(record);
    let insights = insight::generate_insights(record, prediction.label, prediction.success_score);

    println!("\n{}", export::to_report(record, &prediction, Some(&insights)));

    let runway = insight::calculate_runway(record);
    println!("\nRUNWAY");
    println!(
        "  Burn {}/month, net {}/month",
        export::format_currency(runway.monthly_burn),
        export::format_currency(runway.monthly_net)
    );
    println!("  Runway: {} ({})", runway.estimate, runway.status);

    println!("\nVS TYPICAL STARTUP");
    for comparison in insight::compare_to_typical(record) {
        println!(
            "  {:<17}{:>6.2}x typical - {}",
            comparison.metric,
            comparison.ratio,
            comparison.status.as_str()
        );
    }

    println!("\nKEY MODEL FACTORS");
    for (name, percent) in predictor.feature_importance() {
        println!("  {:<17}{:>5.1}%", name, percent);
    }

    let benchmark = insight::benchmark_for(prediction.label);
    println!("\nTIER BENCHMARK ({})", prediction.label);
    for (name, value) in features::FEATURE_DISPLAY_NAMES
        .iter()
        .zip(benchmark.as_array())
    {
        println!("  {:<17}{:>3}/100", name, value);
    }

    println!("\nSUGGESTIONS");
    for (i, suggestion) in advisor::suggestions(prediction.label, record).iter().enumerate() {
        println!("  {}. {}", i + 1, suggestion);
    }

    offer_export(record, &prediction, &insights);
}

// ============================================================================
// EXPORT
// ============================================================================

fn offer_export(record: &FeatureRecord, prediction: &Prediction, insights: &insight::InsightBundle) {
    print!("\nExport results? [csv/json/txt/N] ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).unwrap_or(0) == 0 {
        return;
    }

    let format = match line.trim().to_lowercase().as_str() {
        "csv" => ExportFormat::Csv,
        "json" => ExportFormat::Json,
        "txt" | "text" | "report" => ExportFormat::Report,
        _ => return,
    };

    let path = PathBuf::from(format!(
        "startup_report_{}.{}",
        chrono::Local::now().format("%Y%m%d_%H%M%S"),
        format.extension()
    ));

    match export::export_to_file(&path, format, record, prediction, Some(insights)) {
        Ok(()) => println!("Saved {}", path.display()),
        Err(e) => log::warn!("Export failed: {}", e),
    }
}
