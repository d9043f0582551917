//! Integration tests for document assembly and Travis emission.

use pstore_travis::{
    BuildMatrix, BuildType, Emitter, GeneratorConfig, JobDescriptor, PipelineDocument,
    TravisEmitter, expand,
};

/// The worked example: one linux base crossed with Debug and Release.
#[test]
fn single_linux_base_expands_to_debug_and_release() {
    let matrix = BuildMatrix::new(vec![JobDescriptor::new("linux").with_env("X=1")]);

    let jobs = expand(&matrix, &[BuildType::from("Debug"), BuildType::from("Release")]);

    let expected: Vec<JobDescriptor> = serde_yaml::from_str(
        r"
- os: linux
  env: [X=1, CMAKE_BUILD_TYPE=Debug, PSTORE_ALWAYS_SPANNING=Yes]
- os: linux
  env: [X=1, CMAKE_BUILD_TYPE=Release, PSTORE_ALWAYS_SPANNING=No]
",
    )
    .unwrap();
    assert_eq!(jobs, expected);
}

#[test]
fn pstore_document_round_trips_through_yaml() {
    let document = PipelineDocument::assemble(&GeneratorConfig::pstore());
    let output = TravisEmitter::new().emit(&document).unwrap();

    let parsed: PipelineDocument = serde_yaml::from_str(&output).unwrap();
    assert_eq!(parsed, document);
    assert_eq!(parsed.jobs.include.len(), 12);
}

#[test]
fn pstore_output_is_stable_across_runs() {
    let emitter = TravisEmitter::new();
    let first = emitter
        .emit(&PipelineDocument::assemble(&GeneratorConfig::pstore()))
        .unwrap();
    let second = emitter
        .emit(&PipelineDocument::assemble(&GeneratorConfig::pstore()))
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn pstore_jobs_alternate_debug_and_release() {
    let document = PipelineDocument::assemble(&GeneratorConfig::pstore());

    for (i, job) in document.jobs.include.iter().enumerate() {
        let (label, spanning) = if i % 2 == 0 {
            ("Debug", "Yes")
        } else {
            ("Release", "No")
        };
        let n = job.env.len();
        assert_eq!(job.env[n - 2], format!("CMAKE_BUILD_TYPE={label}"));
        assert_eq!(job.env[n - 1], format!("PSTORE_ALWAYS_SPANNING={spanning}"));
    }
}

#[test]
fn pstore_output_keeps_quoted_matrix_eval() {
    let document = PipelineDocument::assemble(&GeneratorConfig::pstore());
    let output = TravisEmitter::new().emit(&document).unwrap();

    let parsed: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();
    let first_env = &parsed["jobs"]["include"][0]["env"][0];
    assert_eq!(
        first_env.as_str(),
        Some(r#"MATRIX_EVAL="CC=clang-3.8 && CXX=clang++-3.8""#)
    );
    assert_eq!(
        parsed["jobs"]["include"][2]["addons"]["apt"]["sources"][1]["key_url"].as_str(),
        Some("https://apt.llvm.org/llvm-snapshot.gpg.key")
    );
    assert_eq!(parsed["before_install"][0].as_str(), Some(r#"eval "${MATRIX_EVAL}""#));
}
