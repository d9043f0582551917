//! Generator configuration
//!
//! The build matrix and the fixed document literals live in a
//! [`GeneratorConfig`] value built once at startup and passed by reference.
//! [`GeneratorConfig::pstore`] holds the matrix the pstore project builds on.

use crate::build_type::BuildType;
use crate::schema::{AptAddon, AptSource, JobDescriptor};

const TOOLCHAIN_PPA: &str = "ubuntu-toolchain-r-test";
const LLVM_9_SOURCE: &str = "deb http://apt.llvm.org/xenial/ llvm-toolchain-xenial-9 main";
const LLVM_KEY_URL: &str = "https://apt.llvm.org/llvm-snapshot.gpg.key";

/// The ordered list of base job descriptors
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildMatrix(Vec<JobDescriptor>);

impl BuildMatrix {
    /// Create a matrix from base descriptors
    #[must_use]
    pub fn new(jobs: Vec<JobDescriptor>) -> Self {
        Self(jobs)
    }

    /// Add a base descriptor
    pub fn push(&mut self, job: JobDescriptor) {
        self.0.push(job);
    }

    /// Iterate base descriptors in order
    pub fn iter(&self) -> std::slice::Iter<'_, JobDescriptor> {
        self.0.iter()
    }

    /// Number of base descriptors
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the matrix has no base descriptors
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The base descriptors as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[JobDescriptor] {
        &self.0
    }
}

impl FromIterator<JobDescriptor> for BuildMatrix {
    fn from_iter<I: IntoIterator<Item = JobDescriptor>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BuildMatrix {
    type Item = &'a JobDescriptor;
    type IntoIter = std::slice::Iter<'a, JobDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Everything needed to assemble a Travis document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Base job descriptors
    pub matrix: BuildMatrix,
    /// Build types each base descriptor is expanded with
    pub build_types: Vec<BuildType>,
    /// Travis `language` value
    pub language: String,
    /// `before_install` steps
    pub before_install: Vec<String>,
    /// `script` steps
    pub script: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::pstore()
    }
}

impl GeneratorConfig {
    /// The pstore build matrix and build steps
    #[must_use]
    pub fn pstore() -> Self {
        Self {
            matrix: pstore_matrix(),
            build_types: vec![BuildType::debug(), BuildType::release()],
            language: "cpp".to_string(),
            before_install: vec![r#"eval "${MATRIX_EVAL}""#.to_string()],
            script: pstore_script(),
        }
    }

    /// Replace the build matrix
    #[must_use]
    pub fn with_matrix(mut self, matrix: BuildMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    /// Replace the build types
    #[must_use]
    pub fn with_build_types<I>(mut self, build_types: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<BuildType>,
    {
        self.build_types = build_types.into_iter().map(Into::into).collect();
        self
    }
}

fn toolchain_job(dist: &str, compiler: &str, cc: &str, cxx: &str) -> JobDescriptor {
    JobDescriptor::new("linux")
        .with_dist(dist)
        .with_apt(AptAddon::new(
            [AptSource::named(TOOLCHAIN_PPA)],
            [compiler, "ninja-build", "valgrind"],
        ))
        .with_env(format!(r#"MATRIX_EVAL="CC={cc} && CXX={cxx}""#))
}

fn pstore_matrix() -> BuildMatrix {
    BuildMatrix::new(vec![
        // Valgrind 3.11.0 on xenial rejects instructions used by this standard library.
        toolchain_job("xenial", "clang-3.8", "clang-3.8", "clang++-3.8")
            .with_env("PSTORE_VALGRIND=No"),
        JobDescriptor::new("linux")
            .with_dist("xenial")
            .with_apt(AptAddon::new(
                [
                    AptSource::named(TOOLCHAIN_PPA),
                    AptSource::line(LLVM_9_SOURCE, LLVM_KEY_URL),
                ],
                ["clang-9", "ninja-build"],
            ))
            .with_env(r#"MATRIX_EVAL="CC=clang-9 && CXX=clang++-9""#),
        toolchain_job("trusty", "g++-9", "gcc-9", "g++-9").with_env("PSTORE_VALGRIND=Yes"),
        toolchain_job("trusty", "g++-5", "gcc-5", "g++-5").with_env("PSTORE_VALGRIND=Yes"),
        JobDescriptor::new("osx").with_osx_image("xcode9.3"),
        JobDescriptor::new("windows"),
    ])
}

fn pstore_script() -> Vec<String> {
    let configure = [
        "./utils/make_build.py",
        "--verbose",
        "-o build",
        "-D CMAKE_BUILD_TYPE=${CMAKE_BUILD_TYPE}",
        "-D PSTORE_EXAMPLES=Yes",
        "-D PSTORE_VALGRIND=${PSTORE_VALGRIND}",
        "-D PSTORE_ALWAYS_SPANNING=${PSTORE_ALWAYS_SPANNING}",
    ]
    .join(" ");

    vec![
        configure,
        "cmake --build build --config ${CMAKE_BUILD_TYPE}".to_string(),
        "cmake --build build --config ${CMAKE_BUILD_TYPE} --target pstore-system-tests"
            .to_string(),
    ]
}
