//! Build matrix expansion
//!
//! Crosses every base descriptor with every build type. Each output job is
//! a fresh copy of its base with the build type's environment appended, so
//! no two jobs share storage and the matrix itself is never modified.

use crate::build_type::BuildType;
use crate::config::BuildMatrix;
use crate::schema::JobDescriptor;

/// Expand `matrix` by `build_types`
///
/// Jobs are ordered by base descriptor first, then by build type: for
/// `[A, B] x [Debug, Release]` the result is
/// `[A+Debug, A+Release, B+Debug, B+Release]`. An empty matrix or an empty
/// build type list yields no jobs.
#[must_use]
pub fn expand(matrix: &BuildMatrix, build_types: &[BuildType]) -> Vec<JobDescriptor> {
    let mut jobs = Vec::with_capacity(matrix.len() * build_types.len());
    for base in matrix {
        jobs.extend(build_types.iter().map(|bt| base.with_build_type(bt)));
    }
    jobs
}
