//! Travis CI configuration generator for pstore
//!
//! This crate expands a small, hand-authored build matrix into the
//! `.travis.yml` document Travis CI consumes. Each base job descriptor is
//! crossed with every build type, and the build type's derived environment
//! variables are appended to an independent copy of the base.
//!
//! # Example
//!
//! ```ignore
//! use pstore_travis::{Emitter, GeneratorConfig, PipelineDocument, TravisEmitter};
//!
//! let config = GeneratorConfig::pstore();
//! let document = PipelineDocument::assemble(&config);
//! let yaml = TravisEmitter::new().emit(&document)?;
//!
//! print!("{yaml}");
//! ```
//!
//! # Matrix to Travis Mapping
//!
//! | Matrix | Travis YAML |
//! |--------|-------------|
//! | base descriptor x build type | `jobs.include[]` |
//! | build type label | `env: CMAKE_BUILD_TYPE=<label>` |
//! | label is `debug` (any case) | `env: PSTORE_ALWAYS_SPANNING=Yes` (else `No`) |

pub mod build_type;
pub mod config;
mod document;
pub mod emitter;
pub mod error;
pub mod expand;
pub mod schema;

pub use build_type::BuildType;
pub use config::{BuildMatrix, GeneratorConfig};
pub use emitter::{Emitter, TravisEmitter};
pub use error::{EmitterError, EmitterResult, Error, Result};
pub use expand::expand;
pub use schema::{
    Addons, AptAddon, AptSource, JobDescriptor, JobMatrix, PipelineDocument, SourceLine,
};
