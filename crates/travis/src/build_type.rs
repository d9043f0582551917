//! Build type labels and their derived environment

use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable carrying the build type label
pub const BUILD_TYPE_VAR: &str = "CMAKE_BUILD_TYPE";

/// Environment variable derived from the build type
pub const ALWAYS_SPANNING_VAR: &str = "PSTORE_ALWAYS_SPANNING";

/// A build type label such as `Debug` or `Release`
///
/// The label is kept verbatim; only the spanning flag derivation
/// compares it case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BuildType(String);

impl BuildType {
    /// Create a build type from any label
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The `Debug` build type
    #[must_use]
    pub fn debug() -> Self {
        Self::new("Debug")
    }

    /// The `Release` build type
    #[must_use]
    pub fn release() -> Self {
        Self::new("Release")
    }

    /// The label as given
    #[must_use]
    pub fn label(&self) -> &str {
        &self.0
    }

    /// Whether this label names the debug build (case-insensitive)
    #[must_use]
    pub fn is_debug(&self) -> bool {
        self.0.eq_ignore_ascii_case("debug")
    }

    /// `Yes` for debug builds, `No` otherwise
    #[must_use]
    pub fn always_spanning(&self) -> &'static str {
        if self.is_debug() { "Yes" } else { "No" }
    }

    /// Environment assignments appended to every job of this build type
    ///
    /// Order is fixed: the build type first, then the spanning flag.
    #[must_use]
    pub fn env_assignments(&self) -> [String; 2] {
        [
            format!("{BUILD_TYPE_VAR}={}", self.0),
            format!("{ALWAYS_SPANNING_VAR}={}", self.always_spanning()),
        ]
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BuildType {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for BuildType {
    fn from(label: String) -> Self {
        Self(label)
    }
}
