use crate::domain::model::{IconSpec, IconTarget, ScreenshotSpec, DEFAULT_BACKGROUND, DEFAULT_EMOJI};
use crate::utils::error::{AssetError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

pub const DEFAULT_ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// The full list of assets to emit. Every table is optional in TOML; a
/// table that is present replaces its default wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AssetPlan {
    pub output: OutputConfig,
    pub icons: IconsConfig,
    pub shortcuts: Shortcuts,
    pub screenshots: Screenshots,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub icons_dir: String,
    pub screenshots_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            icons_dir: "icons".to_string(),
            screenshots_dir: "screenshots".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    pub sizes: Vec<u32>,
    pub emoji: String,
    pub background: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            sizes: DEFAULT_ICON_SIZES.to_vec(),
            emoji: DEFAULT_EMOJI.to_string(),
            background: DEFAULT_BACKGROUND.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutConfig {
    pub name: String,
    #[serde(default = "default_shortcut_size")]
    pub size: u32,
    pub emoji: String,
    pub background: String,
}

fn default_shortcut_size() -> u32 {
    96
}

/// Newtype so an absent `[[shortcuts]]` falls back to feed/battle while an
/// explicit empty array still means "no shortcuts".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shortcuts(pub Vec<ShortcutConfig>);

impl Default for Shortcuts {
    fn default() -> Self {
        Self(vec![
            ShortcutConfig {
                name: "feed".to_string(),
                size: default_shortcut_size(),
                emoji: "🍖".to_string(),
                background: "#ff9500".to_string(),
            },
            ShortcutConfig {
                name: "battle".to_string(),
                size: default_shortcut_size(),
                emoji: "⚔️".to_string(),
                background: "#ff4444".to_string(),
            },
        ])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Screenshots(pub Vec<ScreenshotSpec>);

impl Default for Screenshots {
    fn default() -> Self {
        Self(vec![
            ScreenshotSpec {
                name: "desktop".to_string(),
                label: "Desktop".to_string(),
            },
            ScreenshotSpec {
                name: "mobile".to_string(),
                label: "Mobile".to_string(),
            },
        ])
    }
}

impl AssetPlan {
    /// 從 TOML 檔案載入資產計畫
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AssetError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Main icons in size order, then shortcuts.
    pub fn icon_targets(&self) -> Vec<IconTarget> {
        let icons_dir = &self.output.icons_dir;
        let main = self.icons.sizes.iter().map(|&size| IconTarget {
            spec: IconSpec::new(size, &self.icons.emoji, &self.icons.background),
            output_path: join(icons_dir, &format!("icon-{}x{}.png", size, size)),
        });
        let shortcuts = self.shortcuts.0.iter().map(|shortcut| IconTarget {
            spec: IconSpec::new(shortcut.size, &shortcut.emoji, &shortcut.background),
            output_path: join(icons_dir, &format!("shortcut-{}.png", shortcut.name)),
        });
        main.chain(shortcuts).collect()
    }

    pub fn screenshot_path(&self, screenshot: &ScreenshotSpec) -> String {
        join(
            &self.output.screenshots_dir,
            &format!("screenshot-{}.png", screenshot.name),
        )
    }
}

fn join(dir: &str, file: &str) -> String {
    format!("{}/{}", dir.trim_end_matches('/'), file)
}

fn validate_file_stem(field_name: &str, name: &str) -> Result<()> {
    validation::validate_non_empty_string(field_name, name)?;
    if name.contains(['/', '\\', '\0']) {
        return Err(AssetError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Name must not contain path separators".to_string(),
        });
    }
    Ok(())
}

impl Validate for AssetPlan {
    fn validate(&self) -> Result<()> {
        validation::validate_relative_dir("output.icons_dir", &self.output.icons_dir)?;
        validation::validate_relative_dir("output.screenshots_dir", &self.output.screenshots_dir)?;

        if self.icons.sizes.is_empty() {
            return Err(AssetError::InvalidConfigValueError {
                field: "icons.sizes".to_string(),
                value: "[]".to_string(),
                reason: "At least one icon size is required".to_string(),
            });
        }
        for &size in &self.icons.sizes {
            validation::validate_positive_number("icons.sizes", size, 1)?;
        }
        validation::validate_non_empty_string("icons.emoji", &self.icons.emoji)?;
        validation::validate_hex_color("icons.background", &self.icons.background)?;

        for shortcut in &self.shortcuts.0 {
            validate_file_stem("shortcuts.name", &shortcut.name)?;
            validation::validate_positive_number("shortcuts.size", shortcut.size, 1)?;
            validation::validate_non_empty_string("shortcuts.emoji", &shortcut.emoji)?;
            validation::validate_hex_color("shortcuts.background", &shortcut.background)?;
        }

        for screenshot in &self.screenshots.0 {
            validate_file_stem("screenshots.name", &screenshot.name)?;
            validation::validate_non_empty_string("screenshots.label", &screenshot.label)?;
        }

        Ok(())
    }
}
