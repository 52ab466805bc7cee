//! gridq Command-Line Interface
//!
//! The main entry point for the gridq CLI tool.
//!
//! ```text
//! q(0, 0)───q(0, 1)───q(0, 2)
//! │         │         │
//! q(1, 0)───q(1, 1)───q(1, 2)
//!
//!            G R I D Q
//!   Grid-device placement validation
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{optimize, show, validate, version};

/// gridq - validate and optimize circuits for grid devices
#[derive(Parser)]
#[command(name = "gridq")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a device and its grid diagram
    Show {
        /// Preset device name (foxtail)
        #[arg(short, long, conflicts_with = "config")]
        device: Option<String>,

        /// Device configuration file (YAML or JSON)
        #[arg(short, long)]
        config: Option<String>,

        /// Print a JSON summary instead of the diagram
        #[arg(long)]
        json: bool,
    },

    /// Validate a circuit against a device
    Validate {
        /// Input circuit (JSON)
        #[arg(short, long)]
        input: String,

        /// Preset device name (foxtail)
        #[arg(short, long, conflicts_with = "config")]
        device: Option<String>,

        /// Device configuration file (YAML or JSON)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Optimize a circuit for a device
    Optimize {
        /// Input circuit (JSON)
        #[arg(short, long)]
        input: String,

        /// Output file
        #[arg(short, long)]
        output: Option<String>,

        /// Keep partial interactions (xmon_partial_cz strategy)
        #[arg(long)]
        allow_partial: bool,

        /// Grid row receiving line qubits
        #[arg(long, default_value = "0")]
        row: i32,

        /// Preset device name (foxtail)
        #[arg(short, long, conflicts_with = "config")]
        device: Option<String>,

        /// Device configuration file (YAML or JSON)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Show {
            device,
            config,
            json,
        } => show::execute(device.as_deref(), config.as_deref(), json),

        Commands::Validate {
            input,
            device,
            config,
        } => validate::execute(&input, device.as_deref(), config.as_deref()),

        Commands::Optimize {
            input,
            output,
            allow_partial,
            row,
            device,
            config,
        } => optimize::execute(
            &input,
            output.as_deref(),
            allow_partial,
            row,
            device.as_deref(),
            config.as_deref(),
        ),

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
