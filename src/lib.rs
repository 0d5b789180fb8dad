//! # Fingerbox
//!
//! Generates finger-jointed boxes for sheet material: per-panel outlines,
//! extruded panel solids placed in an assembled box, and flat cutting
//! layouts.
//!
//! ## Architecture
//!
//! 1. **fingerbox-core** - Errors and measurement units
//! 2. **fingerbox-joinery** - Joint geometry, outlines, placement, assembly, export
//! 3. **fingerbox-settings** - JSON / TOML box configuration files
//! 4. **fingerbox** - Binary that loads a config and reports the assembled box

pub use fingerbox_core::{BoxError, BoxResult, MeasurementSystem};
pub use fingerbox_joinery::{
    assemble_box, front_outline, sheet_layout, BoxAssembler, BoxAssembly, BoxSpec, BoxType,
    ExportOutline, JointType, Panel, PanelGeometry, PanelSide,
};
pub use fingerbox_settings::{default_config_path, BoxConfig, ExportSettings, SettingsError};

use serde_json::{json, Value};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Logs go to stderr so stdout stays clean for the report. A valid
/// `RUST_LOG` replaces the filter; otherwise the level is `info`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// JSON summary of an assembled box and its cutting sheet.
pub fn assembly_report(assembly: &BoxAssembly, spacing: f64) -> Value {
    let panels: Vec<Value> = assembly
        .iter()
        .map(|panel| {
            let bounds = panel
                .world_bounds()
                .map(|(lo, hi)| json!({ "min": [lo.x, lo.y, lo.z], "max": [hi.x, hi.y, hi.z] }));
            json!({
                "label": panel.label,
                "fingered": panel.geometry.is_fingered(),
                "vertices": panel.outline.vertex_count(),
                "material": panel.material,
                "world_bounds": bounds,
            })
        })
        .collect();

    json!({
        "version": VERSION,
        "spec": assembly.spec,
        "units": assembly.spec.units.unit_label(),
        "panels": panels,
        "sheet": sheet_layout(assembly, spacing),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_report_lists_every_panel() {
        let assembly = assemble_box(&BoxSpec::default()).unwrap();
        let report = assembly_report(&assembly, 5.0);

        let panels = report["panels"].as_array().unwrap();
        assert_eq!(panels.len(), 6);
        assert_eq!(panels[0]["label"], "Front");
        assert_eq!(panels[0]["fingered"], true);
        assert_eq!(report["sheet"].as_array().unwrap().len(), 6);
        assert_eq!(report["spec"]["joint_type"], "finger");
    }

    #[test]
    fn test_open_box_config_to_report() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("open.json");

        let mut config = BoxConfig::new(BoxSpec {
            box_type: BoxType::Open,
            ..BoxSpec::default()
        });
        config.export.spacing = 2.0;
        config.save_to_file(&path).unwrap();

        let loaded = BoxConfig::load_from_file(&path).unwrap();
        let assembly = assemble_box(&loaded.spec).unwrap();
        let report = assembly_report(&assembly, loaded.export.spacing);

        let labels: Vec<_> = report["panels"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["label"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(labels, ["Front", "Back", "Left", "Right", "Bottom"]);
        assert_eq!(report["spec"]["box_type"], "open");
    }

    #[test]
    fn test_flat_config_from_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("flat.toml");
        std::fs::write(
            &path,
            r#"
[spec]
width = 200.0
height = 50.0
depth = 120.0
thickness = 6.0
units = "metric"
joint_type = "flat"
box_type = "closed"
"#,
        )
        .unwrap();

        let config = BoxConfig::load_from_file(&path).unwrap();
        assert_eq!(config.spec.joint_type, JointType::Flat);
        assert!(config.spec.finger_size.is_none());

        let assembly = assemble_box(&config.spec).unwrap();
        let report = assembly_report(&assembly, config.export.spacing);
        assert!(report["panels"]
            .as_array()
            .unwrap()
            .iter()
            .all(|p| p["fingered"] == false && p["vertices"] == 4));
    }
}
