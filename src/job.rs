//! The icon generation job: one source image in, one file per size out.

use std::{
    iter::FusedIterator,
    path::{Path, PathBuf},
};

use crate::{
    artifact::Artifact, config::GenerationConfig, decode::decode, encode::write_artifact,
    error::IconError, icon_err, resize::PreparedSource,
};

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    /// Written icons, in the order they were generated
    pub artifacts: Vec<Artifact>,
}

#[derive(Debug, Clone)]
pub struct GenerationJob {
    config: GenerationConfig,
}

impl GenerationJob {
    pub fn new(config: GenerationConfig) -> Result<Self, IconError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Runs the job to completion or to the first failure.
    pub fn run(&self) -> Result<GenerationReport, IconError> {
        self.run_with_progress(|_| {})
    }

    /// Like [`run`](Self::run), but calls `on_artifact` after each icon is written.
    ///
    /// Icons written before a failure stay on disk.
    pub fn run_with_progress(
        &self,
        mut on_artifact: impl FnMut(&Artifact),
    ) -> Result<GenerationReport, IconError> {
        let mut artifacts = Vec::with_capacity(self.config.sizes.len());
        for result in self.artifacts() {
            let artifact = result?;
            on_artifact(&artifact);
            artifacts.push(artifact);
        }
        Ok(GenerationReport {
            output_dir: self.config.output_dir.clone(),
            artifacts,
        })
    }

    /// Lazily generates the icons one at a time.
    ///
    /// Nothing touches the filesystem until the first call to `next()`.
    /// The iterator stops for good after yielding the first error.
    pub fn artifacts(&self) -> Artifacts<'_> {
        Artifacts {
            config: &self.config,
            source: None,
            next_index: 0,
            finished: false,
        }
    }
}

/// Iterator over the results of generating each icon size, in order.
/// See [`GenerationJob::artifacts`].
pub struct Artifacts<'a> {
    config: &'a GenerationConfig,
    source: Option<PreparedSource>,
    next_index: usize,
    finished: bool,
}

impl Artifacts<'_> {
    fn step(&mut self) -> Option<Result<Artifact, IconError>> {
        if self.source.is_none() {
            match prepare(self.config) {
                Ok(source) => self.source = Some(source),
                Err(error) => return Some(Err(error)),
            }
        }
        let source = self.source.as_ref()?;
        let &size = self.config.sizes.get(self.next_index)?;
        self.next_index += 1;
        Some(generate_one(self.config, source, size))
    }
}

impl Iterator for Artifacts<'_> {
    type Item = Result<Artifact, IconError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let item = self.step();
        if !matches!(item, Some(Ok(_))) {
            self.finished = true;
        }
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.finished {
            (0, Some(0))
        } else {
            (0, Some(self.config.sizes.len() - self.next_index))
        }
    }
}

impl FusedIterator for Artifacts<'_> {}

/// Creates the output directory and decodes the source, in that order.
fn prepare(config: &GenerationConfig) -> Result<PreparedSource, IconError> {
    create_output_dir(&config.output_dir)?;
    let image = decode(&config.source)?;
    log::debug!(
        "decoded '{}': {}x{} {:?}",
        config.source.display(),
        image.width(),
        image.height(),
        image.color()
    );
    Ok(PreparedSource::new(image))
}

/// Creates the directory and any missing parents. An existing directory is fine,
/// anything else already occupying the path is not.
fn create_output_dir(dir: &Path) -> Result<(), IconError> {
    std::fs::create_dir_all(dir).map_err(|error| {
        icon_err!(
            DirectoryCreateFailure,
            "unable to create output directory '{}': {error}",
            dir.display()
        )
    })
}

fn generate_one(
    config: &GenerationConfig,
    source: &PreparedSource,
    size: u32,
) -> Result<Artifact, IconError> {
    let pixels = source.resize_square(size, config.filter)?;
    let artifact = Artifact::new(&config.output_dir, size, config.format);
    write_artifact(&pixels, &artifact, config.quality)?;
    log::info!("wrote {}", artifact.path.display());
    Ok(artifact)
}
