//! Command-line interface tests

use std::fs;

use assert_cmd::Command;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const SHELL: &str = r#"<!doctype html>
<html>
<body class="page">
<header class="site-header"></header>
</body>
</html>"#;

fn folio() -> Command {
    Command::new(env!("CARGO_BIN_EXE_folio"))
}

// ═══════════════════════════════════════════════════════════════════════
// sidebar-data
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_sidebar_data_prints_menu_json() {
    let output = folio()
        .args(["sidebar-data", "--page", "hobbies.html"])
        .output()
        .expect("run sidebar-data");
    assert!(output.status.success());

    let data: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(data["title"], "Hobbies");
    assert_eq!(data["sections"].as_array().map(Vec::len), Some(1));
}

#[test]
fn test_sidebar_data_for_plain_page_fails() {
    let output = folio()
        .args(["sidebar-data", "--page", "about.html"])
        .output()
        .expect("run sidebar-data");
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Page about.html has no secondary menu"));
}

// ═══════════════════════════════════════════════════════════════════════
// grid / export
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_unknown_catalog_is_usage_error() {
    let output = folio().args(["grid", "recipes"]).output().expect("run grid");
    assert_eq!(output.status.code(), Some(2));

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Unknown catalog: recipes"));
}

#[test]
fn test_export_groups_by_heading() {
    let output = folio().args(["export", "workspace"]).output().expect("run export");
    assert!(output.status.success());

    let data: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
    let headings: Vec<&str> = data
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert!(headings.contains(&"Devices"));
    assert!(headings.contains(&"Accessories"));
}

// ═══════════════════════════════════════════════════════════════════════
// render
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_render_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("workspace.html");
    let output_path = dir.path().join("out.html");
    fs::write(&input, SHELL).unwrap();

    let output = folio()
        .args(["render", "--location", "/pages/workspace.html", "--input"])
        .arg(&input)
        .arg("--output")
        .arg(&output_path)
        .output()
        .expect("run render");
    assert!(output.status.success());
    assert!(output.stdout.is_empty());

    let html = fs::read_to_string(&output_path).unwrap();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains(r#"<body class="page with-secondary-sidebar">"#));
    assert!(html.contains(r#"<header class="site-header"><div class="profile-section">"#));
    assert!(html.contains(r#"<aside class="secondary-sidebar active">"#));
    // The input shell is left alone.
    assert_eq!(fs::read_to_string(&input).unwrap(), SHELL);
}

#[test]
fn test_render_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.html");

    let output = folio()
        .args(["render", "--location", "/index.html", "--input"])
        .arg(&missing)
        .output()
        .expect("run render");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Failed to read"));
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("site.json");
    fs::write(&config, "{ not json").unwrap();

    let output = folio()
        .arg("--config")
        .arg(&config)
        .args(["nav", "--location", "/index.html"])
        .output()
        .expect("run nav");
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).expect("utf8 stderr");
    assert!(stderr.contains("Failed to load site configuration"));
}
