//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - grid-device placement validation",
        style("gridq").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  gridq-ir       Circuit, moment and operation value types");
    println!("  gridq-device   Grid topology, timing and placement validation");
    println!("  gridq-compile  Optimization pipeline");
    println!("  gridq-cli      Command-line interface");
    println!();
    println!("License:    {}", style("Apache-2.0").dim());
}
