//! Pipeline document assembly

use crate::config::GeneratorConfig;
use crate::expand::expand;
use crate::schema::{JobMatrix, PipelineDocument};

impl PipelineDocument {
    /// Expand the configured matrix and wrap it in the document skeleton
    ///
    /// Step strings are copied as-is; `${VAR}` placeholders are left for
    /// Travis to substitute at run time.
    #[must_use]
    pub fn assemble(config: &GeneratorConfig) -> Self {
        let include = expand(&config.matrix, &config.build_types);

        tracing::debug!(
            bases = config.matrix.len(),
            build_types = config.build_types.len(),
            jobs = include.len(),
            "Expanded build matrix"
        );

        Self {
            language: config.language.clone(),
            jobs: JobMatrix { include },
            before_install: config.before_install.clone(),
            script: config.script.clone(),
        }
    }

    /// Number of jobs in the document
    #[must_use]
    pub fn job_count(&self) -> usize {
        self.jobs.include.len()
    }
}
