//! Optimize command implementation.

use anyhow::Result;
use console::style;

use gridq_compile::{OptimizerType, line_onto_row, optimized_for_xmon};

use super::common::{default_output_path, load_circuit, resolve_device, save_circuit};

/// Execute the optimize command.
pub fn execute(
    input: &str,
    output: Option<&str>,
    allow_partial: bool,
    row: i32,
    device: Option<&str>,
    config: Option<&str>,
) -> Result<()> {
    let (name, device) = resolve_device(device, config)?;
    let strategy = if allow_partial {
        OptimizerType::XmonPartialCz
    } else {
        OptimizerType::Xmon
    };

    println!(
        "{} Optimizing {} for {} ({})",
        style("→").cyan().bold(),
        style(input).green(),
        style(&name).yellow(),
        strategy
    );

    let circuit = load_circuit(input)?;
    println!(
        "  Loaded: depth {}, {} ops",
        circuit.depth(),
        circuit.num_operations()
    );

    let optimized = optimized_for_xmon(&circuit, Some(&device), line_onto_row(row), allow_partial)?;

    println!("{} Optimization complete", style("✓").green().bold());
    println!(
        "  Result: depth {}, {} ops",
        optimized.depth(),
        optimized.num_operations()
    );

    let output_path = output.map_or_else(|| default_output_path(input), str::to_string);
    save_circuit(&optimized, &output_path)?;
    println!("  Output: {}", style(&output_path).green());

    Ok(())
}
