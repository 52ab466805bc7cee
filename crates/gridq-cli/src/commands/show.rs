//! Show command implementation.

use anyhow::Result;
use console::style;
use serde::Serialize;

use super::common::{format_duration, resolve_device};

/// Machine-readable device summary.
#[derive(Serialize)]
struct DeviceSummary<'a> {
    name: &'a str,
    qubits: usize,
    pairs: usize,
    measurement_ns: u128,
    single_qubit_ns: u128,
    two_qubit_ns: u128,
}

/// Execute the show command.
pub fn execute(device: Option<&str>, config: Option<&str>, json: bool) -> Result<()> {
    let (name, device) = resolve_device(device, config)?;
    let durations = device.durations();

    if json {
        let summary = DeviceSummary {
            name: &name,
            qubits: device.qubit_set().len(),
            pairs: device.qubit_pairs().len(),
            measurement_ns: durations.measurement.as_nanos(),
            single_qubit_ns: durations.single_qubit.as_nanos(),
            two_qubit_ns: durations.two_qubit.as_nanos(),
        };
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} Device {}",
        style("→").cyan().bold(),
        style(&name).green()
    );
    println!(
        "  Qubits: {}, couplers: {}",
        device.qubit_set().len(),
        device.qubit_pairs().len()
    );
    println!(
        "  Durations: measurement {}, single-qubit {}, two-qubit {}",
        style(format_duration(durations.measurement)).yellow(),
        style(format_duration(durations.single_qubit)).yellow(),
        style(format_duration(durations.two_qubit)).yellow()
    );
    println!();
    println!("{device}");

    Ok(())
}
