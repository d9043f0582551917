//! CI Configuration Emitter
//!
//! Renders an assembled [`PipelineDocument`] into the text a CI provider
//! reads. The whole output is built in memory, so callers either get a
//! complete document or an error and never a partial write.

use crate::error::EmitterResult;
use crate::schema::PipelineDocument;

/// Generator name written into the header when none is configured
pub const DEFAULT_GENERATOR: &str = "write-travis-yml";

/// Trait for CI configuration emitters
pub trait Emitter {
    /// Render the document, including any header
    ///
    /// # Errors
    /// Returns `EmitterError::Serialization` if the document cannot be serialized
    fn emit(&self, document: &PipelineDocument) -> EmitterResult<String>;

    /// Format identifier (e.g. "travis")
    fn format_name(&self) -> &'static str;

    /// File extension for output files
    fn file_extension(&self) -> &'static str;

    /// Human-readable description of this emitter
    fn description(&self) -> &'static str {
        "CI configuration emitter"
    }
}

/// Travis CI `.travis.yml` emitter
///
/// Output starts with a comment line marking the file as generated,
/// followed by the YAML document.
#[derive(Debug, Clone)]
pub struct TravisEmitter {
    /// Name of the generator shown in the header
    pub generator: String,
}

impl Default for TravisEmitter {
    fn default() -> Self {
        Self {
            generator: DEFAULT_GENERATOR.to_string(),
        }
    }
}

impl TravisEmitter {
    /// Create a new Travis emitter
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generator name shown in the header
    #[must_use]
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    /// The generated-file warning line
    #[must_use]
    pub fn header(&self) -> String {
        format!("# Auto-generated by {}. DO NOT EDIT!", self.generator)
    }
}

impl Emitter for TravisEmitter {
    fn emit(&self, document: &PipelineDocument) -> EmitterResult<String> {
        let yaml = serde_yaml::to_string(document)?;

        tracing::debug!(
            format = self.format_name(),
            jobs = document.job_count(),
            bytes = yaml.len(),
            "Rendered pipeline document"
        );

        Ok(format!("{}\n{yaml}", self.header()))
    }

    fn format_name(&self) -> &'static str {
        "travis"
    }

    fn file_extension(&self) -> &'static str {
        "yml"
    }

    fn description(&self) -> &'static str {
        "Travis CI configuration emitter"
    }
}
