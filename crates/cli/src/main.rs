//! write-travis-yml
//!
//! Expands the pstore build matrix and writes the resulting `.travis.yml`
//! to standard output:
//!
//! ```text
//! write-travis-yml > .travis.yml
//! ```

mod cli;
mod tracing;

use crate::cli::Cli;
use crate::tracing::{TracingConfig, TracingFormat};
use clap::Parser;
use pstore_travis::{Emitter, GeneratorConfig, PipelineDocument, TravisEmitter};
use std::io::Write;

fn main() -> miette::Result<()> {
    let cli = Cli::parse();

    tracing::init_tracing(TracingConfig {
        format: if cli.json {
            TracingFormat::Json
        } else {
            TracingFormat::Compact
        },
        level: cli.level.into(),
    })?;

    let config = GeneratorConfig::pstore();
    let document = PipelineDocument::assemble(&config);
    let emitter = TravisEmitter::new().with_generator(env!("CARGO_BIN_NAME"));
    let output = emitter.emit(&document)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|e| pstore_travis::Error::io(e, "writing to stdout"))?;

    ::tracing::info!(jobs = document.job_count(), "Wrote Travis configuration");
    Ok(())
}
