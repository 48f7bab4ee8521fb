mod common;

use std::path::Path;

use common::{dimensions_of, file_names, write_source_icon};
use wondericons::{
    artifact::artifact_file_name,
    config::{GenerationConfig, DEFAULT_SIZES},
    encode::OutputFormat,
    error::ErrorKind,
    job::GenerationJob,
};

fn config_for(dir: &Path) -> GenerationConfig {
    GenerationConfig {
        source: write_source_icon(dir),
        output_dir: dir.join("icons"),
        ..Default::default()
    }
}

#[test]
fn every_size_is_written_with_exact_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let report = GenerationJob::new(config.clone()).unwrap().run().unwrap();

    assert_eq!(report.output_dir, config.output_dir);
    assert_eq!(report.artifacts.len(), DEFAULT_SIZES.len());
    for (artifact, &size) in report.artifacts.iter().zip(DEFAULT_SIZES.iter()) {
        assert_eq!(artifact.size, size);
        assert_eq!(artifact.path, config.output_dir.join(format!("icon-{size}x{size}.png")));
        assert_eq!(dimensions_of(&artifact.path), (size, size));
    }

    let mut expected: Vec<String> = DEFAULT_SIZES
        .iter()
        .map(|&s| artifact_file_name(s, OutputFormat::Png))
        .collect();
    expected.sort();
    assert_eq!(file_names(&config.output_dir), expected);
}

#[test]
fn rerun_produces_identical_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let job = GenerationJob::new(config.clone()).unwrap();

    let first = job.run().unwrap();
    let first_bytes: Vec<Vec<u8>> = first
        .artifacts
        .iter()
        .map(|a| std::fs::read(&a.path).unwrap())
        .collect();

    let second = job.run().unwrap();
    assert_eq!(first, second);
    for (artifact, bytes) in second.artifacts.iter().zip(first_bytes) {
        assert_eq!(std::fs::read(&artifact.path).unwrap(), bytes);
    }
    assert_eq!(file_names(&config.output_dir).len(), DEFAULT_SIZES.len());
}

#[test]
fn existing_directory_and_unrelated_files_are_kept() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    std::fs::create_dir_all(&config.output_dir).unwrap();
    let unrelated = config.output_dir.join("favicon.ico");
    std::fs::write(&unrelated, b"keep me").unwrap();
    // a stale icon from an earlier run gets overwritten
    let stale = config.output_dir.join("icon-72x72.png");
    std::fs::write(&stale, b"stale").unwrap();

    GenerationJob::new(config.clone()).unwrap().run().unwrap();

    assert_eq!(std::fs::read(&unrelated).unwrap(), b"keep me");
    assert_eq!(dimensions_of(&stale), (72, 72));
    assert_eq!(file_names(&config.output_dir).len(), DEFAULT_SIZES.len() + 1);
}

#[test]
fn missing_parent_directories_are_created() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerationConfig {
        output_dir: dir.path().join("public").join("assets").join("icons"),
        sizes: vec![32],
        ..config_for(dir.path())
    };
    GenerationJob::new(config.clone()).unwrap().run().unwrap();
    assert_eq!(file_names(&config.output_dir), vec!["icon-32x32.png"]);
}

#[test]
fn missing_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerationConfig {
        source: dir.path().join("does-not-exist.png"),
        output_dir: dir.path().join("icons"),
        ..Default::default()
    };
    let err = GenerationJob::new(config.clone()).unwrap().run().unwrap_err();
    assert_eq!(err.kind, ErrorKind::SourceUnavailable);
    assert!(file_names(&config.output_dir).is_empty());
}

#[test]
fn corrupt_source_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("original-icon.png");
    std::fs::write(&source, b"\x89PNG\r\n\x1a\nthis is not really a png").unwrap();
    let config = GenerationConfig {
        source,
        output_dir: dir.path().join("icons"),
        ..Default::default()
    };
    let err = GenerationJob::new(config.clone()).unwrap().run().unwrap_err();
    assert_eq!(err.kind, ErrorKind::DecodeFailure);
    assert!(file_names(&config.output_dir).is_empty());
}

#[test]
fn write_failure_keeps_earlier_sizes_and_stops() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    // a directory squatting on the 144px file name makes that write fail
    std::fs::create_dir_all(config.output_dir.join("icon-144x144.png")).unwrap();

    let mut progress = Vec::new();
    let err = GenerationJob::new(config.clone())
        .unwrap()
        .run_with_progress(|artifact| progress.push(artifact.size))
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::EncodeOrWriteFailure);
    assert!(err.message.contains("icon-144x144.png"));
    assert_eq!(progress, vec![72, 96, 128]);
    for size in [72, 96, 128] {
        let path = config.output_dir.join(format!("icon-{size}x{size}.png"));
        assert_eq!(dimensions_of(&path), (size, size));
    }
    assert!(config.output_dir.join("icon-144x144.png").is_dir());
    for size in [152, 192, 384, 512] {
        assert!(!config.output_dir.join(format!("icon-{size}x{size}.png")).exists());
    }
}

#[test]
fn output_path_taken_by_a_file_is_a_directory_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    std::fs::write(&config.output_dir, b"not a directory").unwrap();

    let err = GenerationJob::new(config).unwrap().run().unwrap_err();
    assert_eq!(err.kind, ErrorKind::DirectoryCreateFailure);
}

#[test]
fn name_for_192_is_fixed() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerationConfig {
        sizes: vec![192],
        ..config_for(dir.path())
    };
    let report = GenerationJob::new(config).unwrap().run().unwrap();
    assert_eq!(report.artifacts[0].file_name(), "icon-192x192.png");
    assert_eq!(
        report.artifacts[0].path.file_name().unwrap(),
        "icon-192x192.png"
    );
}

#[test]
fn artifacts_are_lazy_and_ordered() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerationConfig {
        sizes: vec![512, 16, 64],
        ..config_for(dir.path())
    };
    let job = GenerationJob::new(config.clone()).unwrap();

    let mut artifacts = job.artifacts();
    assert!(!config.output_dir.exists(), "nothing happens before next()");

    let first = artifacts.next().unwrap().unwrap();
    assert_eq!(first.size, 512);
    assert_eq!(file_names(&config.output_dir), vec!["icon-512x512.png"]);

    let rest: Vec<u32> = artifacts.map(|r| r.unwrap().size).collect();
    assert_eq!(rest, vec![16, 64]);
}

#[test]
fn artifacts_stop_after_the_first_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerationConfig {
        source: dir.path().join("missing.png"),
        output_dir: dir.path().join("icons"),
        ..Default::default()
    };
    let job = GenerationJob::new(config).unwrap();
    let mut artifacts = job.artifacts();
    assert!(artifacts.next().unwrap().is_err());
    assert!(artifacts.next().is_none());
    assert!(artifacts.next().is_none());
}

#[test]
fn invalid_config_is_rejected_up_front() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerationConfig {
        sizes: vec![72, 72],
        ..config_for(dir.path())
    };
    let err = GenerationJob::new(config.clone()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidConfig);
    assert!(!config.output_dir.exists());
}

#[test]
fn ico_with_stock_sizes_is_rejected_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerationConfig {
        format: OutputFormat::Ico,
        ..config_for(dir.path())
    };
    let err = GenerationJob::new(config.clone()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidConfig);
    assert!(!config.output_dir.exists());
}

#[cfg(feature = "jpeg")]
#[test]
fn jpeg_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerationConfig {
        sizes: vec![48, 96],
        format: OutputFormat::Jpeg,
        quality: Some(80),
        ..config_for(dir.path())
    };
    GenerationJob::new(config.clone()).unwrap().run().unwrap();
    assert_eq!(
        file_names(&config.output_dir),
        vec!["icon-48x48.jpg", "icon-96x96.jpg"]
    );
    assert_eq!(dimensions_of(&config.output_dir.join("icon-96x96.jpg")), (96, 96));
}

#[cfg(feature = "webp")]
#[test]
fn webp_output() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerationConfig {
        sizes: vec![64],
        format: OutputFormat::WebP,
        ..config_for(dir.path())
    };
    GenerationJob::new(config.clone()).unwrap().run().unwrap();
    assert_eq!(
        dimensions_of(&config.output_dir.join("icon-64x64.webp")),
        (64, 64)
    );
}

#[cfg(feature = "ico")]
#[test]
fn ico_output_through_the_generic_encoder() {
    let dir = tempfile::tempdir().unwrap();
    let config = GenerationConfig {
        sizes: vec![16, 32],
        format: OutputFormat::Ico,
        ..config_for(dir.path())
    };
    GenerationJob::new(config.clone()).unwrap().run().unwrap();
    assert_eq!(
        dimensions_of(&config.output_dir.join("icon-32x32.ico")),
        (32, 32)
    );
}
