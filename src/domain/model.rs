use serde::{Deserialize, Serialize};

pub const DEFAULT_EMOJI: &str = "🐾";
pub const DEFAULT_BACKGROUND: &str = "#6c63ff";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconSpec {
    pub size: u32,
    pub emoji: String,
    pub background: String,
}

impl IconSpec {
    pub fn new(size: u32, emoji: impl Into<String>, background: impl Into<String>) -> Self {
        Self {
            size,
            emoji: emoji.into(),
            background: background.into(),
        }
    }

    /// An icon of `size` with the paw glyph on the default purple.
    pub fn with_defaults(size: u32) -> Self {
        Self::new(size, DEFAULT_EMOJI, DEFAULT_BACKGROUND)
    }

    pub fn font_size(&self) -> u32 {
        self.size / 2
    }
}

/// One icon to emit. `output_path` is the placeholder path; the SVG lands
/// next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTarget {
    pub spec: IconSpec,
    pub output_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenshotSpec {
    pub name: String,
    pub label: String,
}

impl ScreenshotSpec {
    pub fn placeholder(&self) -> String {
        format!("<!-- {} screenshot placeholder -->", self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: String,
    pub content: String,
}

/// Icon entry in the shape a web app manifest's `icons` array expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestIcon {
    pub src: String,
    pub sizes: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Every path written, in write order.
    pub files: Vec<String>,
    pub icons: Vec<ManifestIcon>,
}

impl GenerationReport {
    pub fn record(&mut self, path: &str) {
        self.files.push(path.to_string());
    }

    pub fn record_icon(&mut self, svg_path: &str, size: u32) {
        self.icons.push(ManifestIcon {
            src: svg_path.to_string(),
            sizes: format!("{}x{}", size, size),
            mime_type: "image/svg+xml".to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_json_uses_manifest_keys() {
        let mut report = GenerationReport::default();
        report.record("icons/icon-96x96.svg");
        report.record("icons/icon-96x96.png");
        report.record_icon("icons/icon-96x96.svg", 96);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["files"][1], "icons/icon-96x96.png");
        assert_eq!(json["icons"][0]["src"], "icons/icon-96x96.svg");
        assert_eq!(json["icons"][0]["sizes"], "96x96");
        assert_eq!(json["icons"][0]["type"], "image/svg+xml");
        assert!(json["icons"][0].get("mime_type").is_none());
    }
}
