use crate::core::generator::write_artifacts;
use crate::core::packer::pack;
use crate::core::source::PartSource;
use crate::core::{ConfigProvider, CutPipeline, Storage};
use crate::domain::model::{CutJob, GeneratedArtifacts, Layout, LayoutSettings};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct GenerationPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    source: PartSource,
}

impl<S: Storage, C: ConfigProvider> GenerationPipeline<S, C> {
    pub fn new(storage: S, config: C, source: PartSource) -> Self {
        Self {
            storage,
            config,
            source,
        }
    }
}

impl<S: Storage, C: ConfigProvider> CutPipeline for GenerationPipeline<S, C> {
    fn layout_settings(&self) -> &LayoutSettings {
        self.config.layout()
    }

    fn collect(&self) -> Result<CutJob> {
        tracing::debug!("Collecting parts from {}", self.source.describe());
        let parts = self.source.resolve()?;

        let job = CutJob::new(parts, self.config.svg_filename(), self.config.gcode_filename());
        job.validate()?;
        Ok(job)
    }

    fn layout<'a>(&self, job: &'a CutJob) -> Layout<'a> {
        pack(&job.parts, self.layout_settings())
    }

    fn emit(&self, job: &CutJob, layout: &Layout<'_>) -> Result<GeneratedArtifacts> {
        write_artifacts(
            job,
            layout,
            &self.storage,
            self.config.layout(),
            self.config.coordinate_mode(),
        )
    }
}
