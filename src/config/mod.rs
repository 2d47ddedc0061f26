pub mod cli;
pub mod dry_run;
pub mod plan;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "pwa-assets")]
#[command(about = "Generate placeholder PWA icons and screenshots")]
pub struct CliConfig {
    /// Root directory the icons/ and screenshots/ folders are created in
    #[arg(long, default_value = ".")]
    pub output_dir: String,

    /// TOML asset plan overriding the built-in icon list
    #[arg(short, long)]
    pub config: Option<String>,

    /// Show what would be written without touching the disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON report of generated files and manifest icon entries
    #[arg(long)]
    pub report: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl crate::utils::validation::Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        crate::utils::validation::validate_path("output_dir", &self.output_dir)?;
        if let Some(config) = &self.config {
            crate::utils::validation::validate_path("config", config)?;
        }
        if let Some(report) = &self.report {
            crate::utils::validation::validate_path("report", report)?;
        }
        Ok(())
    }
}
