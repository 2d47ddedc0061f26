use pwa_assets::config::plan::DEFAULT_ICON_SIZES;
use pwa_assets::{AssetError, AssetGenerator, AssetPlan, IconSpec, LocalStorage};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn generate_default(root: &Path) -> pwa_assets::GenerationReport {
    let storage = LocalStorage::new(root);
    AssetGenerator::new(storage, AssetPlan::default())
        .with_progress(false)
        .generate_all()
        .unwrap()
}

#[test]
fn test_all_icon_sizes_have_svg_and_placeholder() {
    let temp_dir = TempDir::new().unwrap();
    generate_default(temp_dir.path());

    for size in DEFAULT_ICON_SIZES {
        let svg = temp_dir.path().join(format!("icons/icon-{size}x{size}.svg"));
        let png = temp_dir.path().join(format!("icons/icon-{size}x{size}.png"));
        assert!(svg.is_file(), "missing {}", svg.display());
        assert!(png.is_file(), "missing {}", png.display());

        let svg_content = fs::read_to_string(&svg).unwrap();
        assert!(svg_content.contains(&format!(r#"width="{size}" height="{size}""#)));
        assert!(svg_content.contains(&format!(r#"font-size="{}""#, size / 2)));
        assert!(svg_content.contains("🐾"));

        let png_content = fs::read_to_string(&png).unwrap();
        assert_eq!(
            png_content,
            format!("<!-- PWA Icon {size}x{size} - Replace with actual PNG -->")
        );
    }
}

#[test]
fn test_size_96_example() {
    let temp_dir = TempDir::new().unwrap();
    generate_default(temp_dir.path());

    let svg = fs::read_to_string(temp_dir.path().join("icons/icon-96x96.svg")).unwrap();
    assert!(svg.contains(r#"width="96" height="96""#));
    assert!(svg.contains(r#"font-size="48""#));
}

#[test]
fn test_shortcut_icons_use_overrides() {
    let temp_dir = TempDir::new().unwrap();
    generate_default(temp_dir.path());

    let feed = fs::read_to_string(temp_dir.path().join("icons/shortcut-feed.svg")).unwrap();
    assert!(feed.contains("🍖"));
    assert!(feed.contains("#ff9500"));
    assert!(!feed.contains("#6c63ff"));

    let battle = fs::read_to_string(temp_dir.path().join("icons/shortcut-battle.svg")).unwrap();
    assert!(battle.contains("⚔️"));
    assert!(battle.contains("#ff4444"));
    assert!(!battle.contains("🐾"));

    assert!(temp_dir.path().join("icons/shortcut-feed.png").is_file());
    assert!(temp_dir.path().join("icons/shortcut-battle.png").is_file());
}

#[test]
fn test_screenshots_have_no_svg() {
    let temp_dir = TempDir::new().unwrap();
    generate_default(temp_dir.path());

    let screenshots = temp_dir.path().join("screenshots");
    assert_eq!(
        fs::read_to_string(screenshots.join("screenshot-desktop.png")).unwrap(),
        "<!-- Desktop screenshot placeholder -->"
    );
    assert_eq!(
        fs::read_to_string(screenshots.join("screenshot-mobile.png")).unwrap(),
        "<!-- Mobile screenshot placeholder -->"
    );
    assert!(!screenshots.join("screenshot-desktop.svg").exists());
    assert!(!screenshots.join("screenshot-mobile.svg").exists());
}

#[test]
fn test_second_run_is_identical() {
    let temp_dir = TempDir::new().unwrap();
    let first_report = generate_default(temp_dir.path());
    let first: Vec<String> = first_report
        .files
        .iter()
        .map(|p| fs::read_to_string(temp_dir.path().join(p)).unwrap())
        .collect();

    // existing directories and files must not trip the second run
    let second_report = generate_default(temp_dir.path());
    let second: Vec<String> = second_report
        .files
        .iter()
        .map(|p| fs::read_to_string(temp_dir.path().join(p)).unwrap())
        .collect();

    assert_eq!(first_report, second_report);
    assert_eq!(first, second);
}

#[test]
fn test_generate_icon_requires_existing_dir() {
    let temp_dir = TempDir::new().unwrap();
    let generator = AssetGenerator::new(LocalStorage::new(temp_dir.path()), AssetPlan::default())
        .with_progress(false);

    let err = generator
        .generate_icon(&IconSpec::with_defaults(72), "missing/icon-72x72.png")
        .unwrap_err();
    assert!(matches!(err, AssetError::IoError { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_generate_icon_single() {
    let temp_dir = TempDir::new().unwrap();
    let generator = AssetGenerator::new(LocalStorage::new(temp_dir.path()), AssetPlan::default())
        .with_progress(false);

    let (svg_file, placeholder) = generator
        .generate_icon(&IconSpec::new(64, "🎯", "#000000"), "badge.png")
        .unwrap();

    assert_eq!(svg_file.path, "badge.svg");
    assert_eq!(placeholder.path, "badge.png");
    let on_disk = fs::read_to_string(temp_dir.path().join("badge.svg")).unwrap();
    assert_eq!(on_disk, svg_file.content);
    assert!(on_disk.contains("🎯"));
}

#[test]
fn test_custom_plan_from_toml() {
    let temp_dir = TempDir::new().unwrap();
    let plan = AssetPlan::from_toml_str(
        r##"
shortcuts = []

[output]
icons_dir = "public/icons"
screenshots_dir = "public/screenshots"

[icons]
sizes = [48]
emoji = "🦀"
background = "#dea584"
"##,
    )
    .unwrap();

    let report = AssetGenerator::new(LocalStorage::new(temp_dir.path()), plan)
        .with_progress(false)
        .generate_all()
        .unwrap();

    assert_eq!(
        report.files,
        vec![
            "public/icons/icon-48x48.svg",
            "public/icons/icon-48x48.png",
            "public/screenshots/screenshot-desktop.png",
            "public/screenshots/screenshot-mobile.png",
        ]
    );
    let svg = fs::read_to_string(temp_dir.path().join("public/icons/icon-48x48.svg")).unwrap();
    assert!(svg.contains("🦀"));
    assert!(svg.contains(r#"font-size="24""#));
}
