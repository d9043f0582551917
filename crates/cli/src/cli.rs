//! Command-line arguments
//!
//! Only diagnostics are configurable. Nothing here changes the generated
//! document.

use crate::tracing::LogLevel;
use clap::Parser;

/// Write the pstore Travis CI configuration to standard output
#[derive(Debug, Parser)]
#[command(name = "write-travis-yml", version, about)]
pub struct Cli {
    /// Log level for diagnostics written to stderr
    #[arg(short = 'L', long, value_enum, default_value = "warn", global = true)]
    pub level: LogLevel,

    /// Emit diagnostics as JSON lines
    #[arg(long)]
    pub json: bool,
}
