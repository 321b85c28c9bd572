use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;
use wheel::prelude::*;

mod report;

use report::GeometryReport;

/// Height used when only a width is given: 16:9 portrait.
const DEFAULT_ASPECT: f64 = 1.78;

#[derive(Parser)]
#[command(name = "wheel-cli")]
#[command(about = "Inspect wheel geometry for a viewport")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the geometry record for one viewport
    Geometry {
        width: f64,
        /// Defaults to width * 1.78
        height: Option<f64>,
        /// Write the JSON record here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Print a human-readable summary after the record
        #[arg(long)]
        summary: bool,
    },
    /// List common device viewports with their radius and status
    Presets,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Geometry {
            width,
            height,
            out,
            summary: with_summary,
        } => geometry(width, height, out.as_deref(), with_summary),
        Action::Presets => presets(),
    }
}

fn geometry(width: f64, height: Option<f64>, out: Option<&Path>, with_summary: bool) -> Result<()> {
    let height = height.unwrap_or(width * DEFAULT_ASPECT);
    tracing::info!(width, height, out = ?out, "geometry");
    let g = compute_geometry(width, height)?;
    if g.gap_risk {
        tracing::warn!(
            arc_length = g.arc_length,
            min_width = g.panel_min_width,
            "gap risk"
        );
    }
    let json = serde_json::to_string_pretty(&GeometryReport::from(&g))?;
    match out {
        Some(path) => write_record(path, &json)?,
        None => println!("{json}"),
    }
    if with_summary {
        print!("{}", summary(&g));
    }
    Ok(())
}

fn write_record(path: &Path, json: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn summary(g: &WheelGeometry) -> String {
    let rule = "=".repeat(50);
    let report = GeometryReport::from(g);
    let mut s = format!(
        "\n{rule}\nSUMMARY for {}x{}\n{rule}\n",
        g.viewport.width(),
        g.viewport.height()
    );
    s += &format!("Radius:       {}px\n", report.wheel.radius);
    s += &format!("Panel Width:  {}px (min)\n", report.panels.min_width);
    s += &format!("Panel Height: {}px\n", report.panels.height);
    s += &format!("Font Size:    {}px\n", report.panels.font_size);
    s += &format!("Status:       {}\n", g.status());
    if g.gap_risk {
        s += "\nWARNING: Gap risk detected. Consider reducing the radius multiplier.\n";
    }
    s
}

fn preset_line(preset: &DevicePreset) -> Result<String> {
    let report = GeometryReport::from(&preset.geometry()?);
    Ok(format!(
        "{}: {}x{} → radius={}px [{}]",
        preset.name, preset.width, preset.height, report.wheel.radius, report.validation.status
    ))
}

fn presets() -> Result<()> {
    tracing::info!(count = DEVICE_PRESETS.len(), "presets");
    for preset in &DEVICE_PRESETS {
        println!("  {}", preset_line(preset)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    #[test]
    fn preset_lines_match_expected_format() {
        let lines: Vec<String> = DEVICE_PRESETS
            .iter()
            .map(|p| preset_line(p).unwrap())
            .collect();
        assert_eq!(lines[0], "iPhone SE: 375x667 → radius=110px [OK]");
        assert_eq!(lines[3], "iPad Mini: 768x1024 → radius=138.24px [OK]");
        assert_eq!(lines[4], "iPad Pro 12.9: 1024x1366 → radius=160px [OK]");
    }

    #[test]
    fn geometry_writes_record_to_nested_path() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("wheel.json");
        geometry(700.0, Some(700.0), Some(&out), false).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["panels"]["minWidth"], 42);
        assert_eq!(parsed["validation"]["status"], "OK");
    }

    #[test]
    fn height_defaults_to_portrait_aspect() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("wheel.json");
        geometry(500.0, None, Some(&out), false).unwrap();
        let parsed: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(parsed["viewport"]["height"], 890.0);
    }

    #[test]
    fn invalid_viewport_is_an_error() {
        let err = geometry(0.0, Some(500.0), None, false).unwrap_err();
        assert!(err.downcast_ref::<GeometryError>().is_some());
    }

    #[test]
    fn summary_flags_gap_risk() {
        let risky = compute_geometry(707.2, 800.0).unwrap();
        let text = summary(&risky);
        assert!(text.contains("SUMMARY for 707.2x800"));
        assert!(text.contains("Status:       WARNING"));
        assert!(text.contains("Gap risk detected"));
        let ok = compute_geometry(700.0, 700.0).unwrap();
        assert!(!summary(&ok).contains("Gap risk"));
    }
}
