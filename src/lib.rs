#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, dry_run::DryRunStorage, plan::AssetPlan};
pub use crate::core::generator::AssetGenerator;
pub use crate::domain::model::{GenerationReport, IconSpec};
pub use crate::utils::error::{AssetError, Result};
