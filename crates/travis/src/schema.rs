//! Travis CI Configuration Schema Types
//!
//! Defines the data structures for `.travis.yml` generation.
//! See: <https://docs.travis-ci.com/user/build-matrix/>

use crate::build_type::BuildType;
use serde::{Deserialize, Serialize};

/// A complete Travis CI configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDocument {
    /// Source language tag (e.g. `cpp`)
    pub language: String,

    /// Job matrix
    pub jobs: JobMatrix,

    /// Steps run before the install phase of every job
    pub before_install: Vec<String>,

    /// Build and test steps
    pub script: Vec<String>,
}

/// The `jobs` section of a Travis configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatrix {
    /// Explicitly listed jobs
    pub include: Vec<JobDescriptor>,
}

/// One concrete CI job
///
/// Every field is owned, so `clone()` yields a fully independent copy.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDescriptor {
    /// Operating system (`linux`, `osx`, `windows`)
    pub os: String,

    /// Linux distribution codename
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dist: Option<String>,

    /// macOS Xcode image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub osx_image: Option<String>,

    /// Package manager addons
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addons: Option<Addons>,

    /// Environment variable assignments (`NAME=value`)
    #[serde(default)]
    pub env: Vec<String>,
}

impl JobDescriptor {
    /// Create a job for the given operating system
    pub fn new(os: impl Into<String>) -> Self {
        Self {
            os: os.into(),
            ..Self::default()
        }
    }

    /// Set the distribution codename
    #[must_use]
    pub fn with_dist(mut self, dist: impl Into<String>) -> Self {
        self.dist = Some(dist.into());
        self
    }

    /// Set the macOS image
    #[must_use]
    pub fn with_osx_image(mut self, image: impl Into<String>) -> Self {
        self.osx_image = Some(image.into());
        self
    }

    /// Attach an apt addon
    #[must_use]
    pub fn with_apt(mut self, apt: AptAddon) -> Self {
        self.addons = Some(Addons { apt });
        self
    }

    /// Append an environment assignment
    #[must_use]
    pub fn with_env(mut self, assignment: impl Into<String>) -> Self {
        self.env.push(assignment.into());
        self
    }

    /// Copy this job and append the build type's derived environment
    #[must_use]
    pub fn with_build_type(&self, build_type: &BuildType) -> Self {
        let mut job = self.clone();
        job.env.extend(build_type.env_assignments());
        job
    }
}

/// Addon configuration for a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Addons {
    /// APT package manager configuration
    pub apt: AptAddon,
}

/// APT sources and packages to install
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AptAddon {
    /// Package sources (aliases or explicit source lines)
    #[serde(default)]
    pub sources: Vec<AptSource>,

    /// Packages to install
    #[serde(default)]
    pub packages: Vec<String>,
}

impl AptAddon {
    /// Create an addon from sources and package names
    pub fn new<S, P>(sources: S, packages: P) -> Self
    where
        S: IntoIterator<Item = AptSource>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            sources: sources.into_iter().collect(),
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }
}

/// An APT source can be a safelisted alias or an explicit source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AptSource {
    /// Safelisted source alias (e.g. `ubuntu-toolchain-r-test`)
    Named(String),
    /// Explicit `deb` line with its signing key
    Line(SourceLine),
}

impl AptSource {
    /// Create a named source alias
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create an explicit source line
    pub fn line(sourceline: impl Into<String>, key_url: impl Into<String>) -> Self {
        Self::Line(SourceLine {
            sourceline: sourceline.into(),
            key_url: key_url.into(),
        })
    }
}

/// Explicit APT source line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLine {
    /// The `deb ...` line
    pub sourceline: String,

    /// URL of the repository signing key
    pub key_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_serialization_skips_absent_fields() {
        let job = JobDescriptor::new("windows").with_env("X=1");

        let yaml = serde_yaml::to_string(&job).unwrap();
        assert!(yaml.contains("os: windows"));
        assert!(yaml.contains("X=1"));
        assert!(!yaml.contains("dist"));
        assert!(!yaml.contains("osx_image"));
        assert!(!yaml.contains("addons"));
    }

    #[test]
    fn test_empty_env_is_serialized() {
        let job = JobDescriptor::new("osx").with_osx_image("xcode9.3");

        let yaml = serde_yaml::to_string(&job).unwrap();
        assert!(yaml.contains("osx_image: xcode9.3"));
        assert!(yaml.contains("env: []"));
    }

    #[test]
    fn test_apt_sources_serialize_untagged() {
        let apt = AptAddon::new(
            [
                AptSource::named("ubuntu-toolchain-r-test"),
                AptSource::line(
                    "deb http://apt.llvm.org/xenial/ llvm-toolchain-xenial-9 main",
                    "https://apt.llvm.org/llvm-snapshot.gpg.key",
                ),
            ],
            ["clang-9"],
        );

        let yaml = serde_yaml::to_string(&apt).unwrap();
        assert!(yaml.contains("- ubuntu-toolchain-r-test"));
        assert!(yaml.contains("sourceline: deb http://apt.llvm.org/xenial/"));
        assert!(yaml.contains("key_url: https://apt.llvm.org/llvm-snapshot.gpg.key"));
        assert!(!yaml.contains("Named"));
        assert!(!yaml.contains("Line"));
    }

    #[test]
    fn test_apt_sources_deserialize_untagged() {
        let yaml = r"
sources:
  - ubuntu-toolchain-r-test
  - sourceline: deb http://example.invalid/ main
    key_url: https://example.invalid/key
packages: [ninja-build]
";
        let apt: AptAddon = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(apt.sources[0], AptSource::named("ubuntu-toolchain-r-test"));
        assert_eq!(
            apt.sources[1],
            AptSource::line(
                "deb http://example.invalid/ main",
                "https://example.invalid/key"
            )
        );
        assert_eq!(apt.packages, vec!["ninja-build".to_string()]);
    }

    #[test]
    fn test_with_build_type_leaves_base_untouched() {
        let base = JobDescriptor::new("linux")
            .with_dist("xenial")
            .with_apt(AptAddon::new([AptSource::named("ppa")], ["clang-9"]))
            .with_env("X=1");

        let job = base.with_build_type(&BuildType::debug());

        assert_eq!(base.env, vec!["X=1".to_string()]);
        assert_eq!(
            job.env,
            vec![
                "X=1".to_string(),
                "CMAKE_BUILD_TYPE=Debug".to_string(),
                "PSTORE_ALWAYS_SPANNING=Yes".to_string(),
            ]
        );
        assert_eq!(job.addons, base.addons);
        assert_eq!(job.dist, base.dist);
    }

    #[test]
    fn test_missing_env_deserializes_empty() {
        let job: JobDescriptor = serde_yaml::from_str("os: windows\n").unwrap();
        assert_eq!(job, JobDescriptor::new("windows"));
    }
}
