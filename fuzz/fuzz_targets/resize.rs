#![no_main]

use std::num::NonZeroU8;

use libfuzzer_sys::fuzz_target;
use wondericons::{config::GenerationConfig, job::GenerationJob};
use wondericons_fuzz::StructuredImage;

fuzz_target!(|input: (StructuredImage, Vec<NonZeroU8>)| {
    let (image, sizes) = input;
    let mut sizes: Vec<u32> = sizes.into_iter().map(|s| s.get() as u32).collect();
    sizes.sort_unstable();
    sizes.dedup();
    if sizes.is_empty() {
        return;
    }

    let temp_directory = tempfile::tempdir().expect("failed to create temporary directory");
    let input_path = temp_directory.path().join("input_image.png");
    image
        .save_as_png(&input_path)
        .expect("failed to save image as PNG");

    let config = GenerationConfig {
        source: input_path,
        output_dir: temp_directory.path().join("icons"),
        sizes: sizes.clone(),
        ..Default::default()
    };
    let report = GenerationJob::new(config)
        .expect("config must be valid")
        .run()
        .expect("generation must succeed");

    assert_eq!(report.artifacts.len(), sizes.len());
    for (artifact, size) in report.artifacts.iter().zip(sizes) {
        let dimensions = image::image_dimensions(&artifact.path)
            .expect("could not read the generated icon");
        assert_eq!(dimensions, (size, size), "{}", artifact.path.display());
    }
});
