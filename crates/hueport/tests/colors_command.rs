//! Runs the `colors` command against snapshot directories on disk.

use std::fs;
use std::path::Path;

use clap::Parser;
use hueport::{run, Cli};
use tempfile::TempDir;

fn write_document(root: &Path, id: &str, styles: &str, nodes: &str) {
    let dir = root.join(id);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("styles.json"), styles).unwrap();
    fs::write(dir.join("nodes.json"), nodes).unwrap();
}

fn workspace(config: &str) -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("hueport.yaml"), config).unwrap();
    write_document(
        tmp.path(),
        "ALL",
        r#"{"meta": {"styles": [
            {"node_id": "1:1", "name": "light_brand", "style_type": "FILL"},
            {"node_id": "1:2", "name": "dark_brand", "description": "android", "style_type": "FILL"},
            {"node_id": "1:3", "name": "Body", "style_type": "TEXT"}
        ]}}"#,
        r#"{"nodes": {
            "1:1": {"document": {"id": "1:1", "fills": [{"type": "SOLID", "color": {"r": 1, "g": 1, "b": 1, "a": 1}}]}},
            "1:2": {"document": {"id": "1:2", "fills": [{"type": "SOLID", "color": {"r": 0, "g": 0, "b": 0, "a": 1}, "opacity": 0.5}]}}
        }}"#,
    );
    tmp
}

fn run_in(dir: &Path, extra: &[&str]) -> anyhow::Result<String> {
    let config = dir.join("hueport.yaml");
    let mut args = vec![
        "hueport".to_string(),
        "colors".to_string(),
        "--config".to_string(),
        config.display().to_string(),
        "--snapshots".to_string(),
        dir.display().to_string(),
    ];
    args.extend(extra.iter().map(|s| s.to_string()));
    run(&Cli::try_parse_from(args).unwrap())
}

const SINGLE_FILE: &str = r#"
figma:
  light_file_id: ALL
colors:
  use_single_file: true
  light: { prefix: "light_" }
  dark: { prefix: "dark_" }
"#;

#[test]
fn single_file_text_output() {
    let tmp = workspace(SINGLE_FILE);
    let out = run_in(tmp.path(), &["--format", "text"]).unwrap();
    assert_eq!(
        out,
        "light\tbrand\t#FFFFFF\ndark\tbrand\t#00000080\tandroid\n"
    );
}

#[test]
fn single_file_json_output() {
    let tmp = workspace(SINGLE_FILE);
    let out = run_in(tmp.path(), &[]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["light"][0]["name"], "brand");
    assert_eq!(value["dark"][0]["alpha"], 0.5);
    assert_eq!(value["light_high_contrast"], serde_json::json!([]));
    assert_eq!(value["dark_high_contrast"], serde_json::json!([]));
}

#[test]
fn per_file_mode_reports_missing_dark_document() {
    let tmp = workspace("figma: { light_file_id: ALL, dark_file_id: NOPE }");
    let err = run_in(tmp.path(), &[]).unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("could not resolve colors"));
    assert!(chain.contains("NOPE"));
}

#[test]
fn filter_matching_nothing_fails() {
    let tmp = workspace(SINGLE_FILE);
    let err = run_in(tmp.path(), &["--filter", "icons/*"]).unwrap_err();
    assert!(format!("{err:#}").contains("no usable color styles"));
}

#[test]
fn blank_filter_exports_everything() {
    let tmp = workspace(SINGLE_FILE);
    let out = run_in(tmp.path(), &["--filter", "", "--format", "text"]).unwrap();
    assert_eq!(out.lines().count(), 2);
}

#[test]
fn missing_config_is_reported() {
    let tmp = TempDir::new().unwrap();
    let err = run_in(tmp.path(), &[]).unwrap_err();
    assert!(format!("{err:#}").contains("could not load"));
}
