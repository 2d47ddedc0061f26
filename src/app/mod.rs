use crate::config::dry_run::DryRunStorage;
use crate::config::plan::AssetPlan;
use crate::config::{cli::LocalStorage, CliConfig};
use crate::core::generator::AssetGenerator;
use crate::domain::model::GenerationReport;
use crate::utils::error::{AssetError, Result};
use crate::utils::validation::Validate;
use anyhow::Context;

/// What the binary prints and returns when `run` fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    pub exit_code: i32,
    pub message: String,
    pub suggestion: Option<&'static str>,
}

pub fn run(config: &CliConfig) -> anyhow::Result<GenerationReport> {
    config.validate()?;

    let plan = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading asset plan from: {}", path);
            AssetPlan::from_file(path)?
        }
        None => AssetPlan::default(),
    };

    let report = if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - nothing will be written");
        perform_dry_run(plan)?
    } else {
        let storage = LocalStorage::new(&config.output_dir);
        AssetGenerator::new(storage, plan).generate_all()?
    };

    if let Some(report_path) = &config.report {
        write_report(&report, report_path)
            .with_context(|| format!("failed to write report to {}", report_path))?;
        println!("📄 Report written to {}", report_path);
    }

    Ok(report)
}

pub fn perform_dry_run(plan: AssetPlan) -> Result<GenerationReport> {
    let generator = AssetGenerator::new(DryRunStorage::new(), plan).with_progress(false);
    let report = generator.generate_all()?;

    for dir in generator.storage().dirs() {
        println!("Would create directory {}/", dir);
    }
    for file in generator.storage().files() {
        println!("Would write {} ({} bytes)", file.path, file.content.len());
    }
    println!("\n🔍 Dry run complete: {} files planned", report.files.len());

    Ok(report)
}

pub fn write_report(report: &GenerationReport, path: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(|e| AssetError::io(path, e))
}

/// Maps a failed run to its exit code and a one-line message carrying the
/// whole cause chain.
pub fn describe_failure(e: &anyhow::Error) -> Failure {
    let message = format!("{:#}", e);
    match e.downcast_ref::<AssetError>() {
        Some(asset_error) => Failure {
            exit_code: asset_error.exit_code(),
            message,
            suggestion: Some(asset_error.recovery_suggestion()),
        },
        None => Failure {
            exit_code: 1,
            message,
            suggestion: None,
        },
    }
}
