//! ecudiff CLI
//!
//! Compares two ECU configuration backups and writes a diff report.

use clap::Parser;
use ecudiff_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "ecudiff")]
#[command(about = "ecudiff - ECU configuration backup diff tool", long_about = None)]
struct Cli {
    #[command(flatten)]
    compare: commands::compare::CompareArgs,
}

fn main() {
    let cli = Cli::parse();

    init(if cli.compare.log_json {
        Profile::Production
    } else {
        Profile::Development
    });

    if let Err(e) = commands::compare::execute(cli.compare) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
