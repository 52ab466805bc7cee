//! Validate command implementation.

use std::time::Duration;

use anyhow::{Context, Result};
use console::style;

use gridq_compile::passes::moment_durations;

use super::common::{format_duration, load_circuit, resolve_device};

/// Execute the validate command.
pub fn execute(input: &str, device: Option<&str>, config: Option<&str>) -> Result<()> {
    let (name, device) = resolve_device(device, config)?;

    println!(
        "{} Validating {} against {}",
        style("→").cyan().bold(),
        style(input).green(),
        style(&name).yellow()
    );

    let circuit = load_circuit(input)?;
    println!(
        "  Loaded: {} qubits, {} moments, {} ops",
        circuit.qubits().len(),
        circuit.depth(),
        circuit.num_operations()
    );

    device
        .validate_circuit(&circuit)
        .with_context(|| format!("Circuit {} is not valid on {name}", circuit.name()))?;

    let durations = moment_durations(&device, &circuit)?;
    for (i, duration) in durations.iter().enumerate() {
        println!("  Moment {i:>3}: {}", format_duration(*duration));
    }
    let total: Duration = durations.iter().sum();

    println!("{} Circuit is valid", style("✓").green().bold());
    println!("  Total duration: {}", style(format_duration(total)).yellow());

    Ok(())
}
