use crate::domain::model::IconSpec;

/// Renders the placeholder icon: a rounded square in the background color
/// with the glyph centered at half the icon size.
pub fn render_icon(spec: &IconSpec) -> String {
    let size = spec.size;
    let background = escape_xml(&spec.background);
    let emoji = escape_xml(&spec.emoji);
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg width="{size}" height="{size}" xmlns="http://www.w3.org/2000/svg">
  <rect width="{size}" height="{size}" fill="{background}" rx="20%"/>
  <text x="50%" y="50%" font-size="{font_size}" text-anchor="middle" dy=".35em" fill="white">{emoji}</text>
</svg>"#,
        font_size = spec.font_size(),
    )
}

pub fn placeholder_comment(size: u32) -> String {
    format!("<!-- PWA Icon {}x{} - Replace with actual PNG -->", size, size)
}

fn escape_xml(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
