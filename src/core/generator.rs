use crate::config::plan::AssetPlan;
use crate::core::svg;
use crate::domain::model::{GenerationReport, IconSpec, OutputFile};
use crate::domain::ports::Storage;
use crate::utils::error::{AssetError, Result};
use crate::utils::validation::{self, Validate};
use std::path::Path;

/// Builds the SVG and the placeholder for one icon without writing anything.
/// Returns `(svg, placeholder)`.
pub fn icon_files(spec: &IconSpec, output_path: &str) -> Result<(OutputFile, OutputFile)> {
    validation::validate_positive_number("size", spec.size, 1)?;
    validation::validate_image_extension("output_path", output_path)?;

    let svg_path = Path::new(output_path)
        .with_extension("svg")
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| AssetError::InvalidConfigValueError {
            field: "output_path".to_string(),
            value: output_path.to_string(),
            reason: "Path is not valid UTF-8".to_string(),
        })?;

    Ok((
        OutputFile {
            path: svg_path,
            content: svg::render_icon(spec),
        },
        OutputFile {
            path: output_path.to_string(),
            content: svg::placeholder_comment(spec.size),
        },
    ))
}

pub struct AssetGenerator<S: Storage> {
    storage: S,
    plan: AssetPlan,
    progress: bool,
}

impl<S: Storage> AssetGenerator<S> {
    pub fn new(storage: S, plan: AssetPlan) -> Self {
        Self {
            storage,
            plan,
            progress: true,
        }
    }

    /// Turns the stdout progress lines on or off. Tracing events are
    /// emitted either way.
    pub fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Writes the SVG next to `output_path`, then the placeholder at
    /// `output_path`. The parent directory must already exist.
    pub fn generate_icon(&self, spec: &IconSpec, output_path: &str) -> Result<(OutputFile, OutputFile)> {
        let (svg_file, placeholder) = icon_files(spec, output_path)?;

        self.storage
            .write_file(&svg_file.path, svg_file.content.as_bytes())?;
        self.storage
            .write_file(&placeholder.path, placeholder.content.as_bytes())?;

        tracing::info!(
            size = spec.size,
            "Created {} and placeholder {}",
            svg_file.path,
            placeholder.path
        );
        if self.progress {
            println!(
                "Created {} and placeholder {}",
                svg_file.path, placeholder.path
            );
        }

        Ok((svg_file, placeholder))
    }

    pub fn generate_all(&self) -> Result<GenerationReport> {
        self.plan.validate()?;

        let output = &self.plan.output;
        self.storage.ensure_dir(&output.icons_dir)?;
        self.storage.ensure_dir(&output.screenshots_dir)?;

        let mut report = GenerationReport::default();

        let targets = self.plan.icon_targets();
        tracing::debug!("Generating {} icons", targets.len());
        for target in &targets {
            let (svg_file, placeholder) = self.generate_icon(&target.spec, &target.output_path)?;
            report.record(&svg_file.path);
            report.record(&placeholder.path);
            report.record_icon(&svg_file.path, target.spec.size);
        }

        for screenshot in &self.plan.screenshots.0 {
            let path = self.plan.screenshot_path(screenshot);
            self.storage
                .write_file(&path, screenshot.placeholder().as_bytes())?;
            tracing::info!("Created screenshot placeholder {}", path);
            report.record(&path);
        }

        tracing::info!("Generated {} files", report.files.len());
        if self.progress {
            println!("\n✅ All PWA assets generated!");
            println!(
                "📝 Note: SVG files created. In production, convert to PNG for better compatibility."
            );
        }

        Ok(report)
    }
}
