//! Shared helpers for CLI commands.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

use gridq_device::{DeviceConfig, GridDevice};
use gridq_ir::Circuit;

/// Load a circuit from a JSON file.
pub fn load_circuit(path: &str) -> Result<Circuit> {
    let path_obj = Path::new(path);

    if !path_obj.exists() {
        anyhow::bail!("File not found: {path}");
    }

    let source =
        fs::read_to_string(path).with_context(|| format!("Failed to read file: {path}"))?;

    let circuit =
        Circuit::from_json(&source).with_context(|| format!("Failed to parse circuit: {path}"))?;
    debug!(
        "Loaded circuit {} with {} moments",
        circuit.name(),
        circuit.depth()
    );
    Ok(circuit)
}

/// Save a circuit as JSON.
pub fn save_circuit(circuit: &Circuit, path: &str) -> Result<()> {
    let content = circuit.to_json().context("Failed to serialize circuit")?;
    fs::write(path, content).with_context(|| format!("Failed to write file: {path}"))?;
    Ok(())
}

/// Resolve the device configuration from a preset name or a configuration file.
///
/// Without either, the Foxtail preset is used. Environment overrides apply
/// in both cases.
pub fn resolve_config(device: Option<&str>, config: Option<&str>) -> Result<DeviceConfig> {
    if let Some(path) = config {
        return DeviceConfig::load(Some(Path::new(path)))
            .with_context(|| format!("Failed to load device config: {path}"));
    }

    let name = device.unwrap_or("foxtail");
    let preset = DeviceConfig::preset(&name.to_lowercase()).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown device: '{name}'. Available: {}",
            DeviceConfig::preset_names().join(", ")
        )
    })?;
    let preset = preset.merge_env()?;
    preset.validate()?;
    Ok(preset)
}

/// Resolve and build the device.
pub fn resolve_device(device: Option<&str>, config: Option<&str>) -> Result<(String, GridDevice)> {
    let config = resolve_config(device, config)?;
    let built = config.build_device()?;
    Ok((config.name, built))
}

/// Format a duration in nanoseconds.
pub fn format_duration(duration: Duration) -> String {
    format!("{} ns", duration.as_nanos())
}

/// Default output path: `<stem>_optimized.json` next to the input.
pub fn default_output_path(input: &str) -> String {
    let p = Path::new(input);
    let stem = p.file_stem().unwrap_or_default().to_string_lossy();
    p.with_file_name(format!("{stem}_optimized.json"))
        .to_string_lossy()
        .into_owned()
}
