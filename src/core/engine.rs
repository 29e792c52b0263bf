use crate::core::packer::overflow_count;
use crate::core::CutPipeline;
use crate::domain::model::{GeneratedArtifacts, LayoutReport, PlacementRecord};
use crate::utils::error::Result;

pub struct CutEngine<P: CutPipeline> {
    pipeline: P,
}

impl<P: CutPipeline> CutEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<GeneratedArtifacts> {
        tracing::info!("🪚 Starting cut file generation");

        let job = self.pipeline.collect()?;
        tracing::info!(
            "📋 Job {}: {} part spec(s), {} instance(s)",
            job.id,
            job.parts.len(),
            job.instance_count()
        );

        let layout = self.pipeline.layout(&job);
        tracing::info!(
            "📐 Layout: {} row(s), final cursor ({}, {})",
            layout.rows,
            layout.cursor.x,
            layout.cursor.y
        );

        let artifacts = self.pipeline.emit(&job, &layout)?;
        tracing::info!(
            "💾 Wrote {} and {}",
            artifacts.svg_path.display(),
            artifacts.gcode_path.display()
        );

        Ok(artifacts)
    }

    /// 只排版不寫檔
    pub fn plan(&self) -> Result<LayoutReport> {
        let job = self.pipeline.collect()?;
        let layout = self.pipeline.layout(&job);
        let overflowing = overflow_count(&layout, self.pipeline.layout_settings());

        let placements: Vec<PlacementRecord> = layout
            .placements
            .iter()
            .map(|p| PlacementRecord {
                name: p.source.name.clone(),
                x: p.x,
                y: p.y,
                width: p.source.width,
                height: p.source.height,
            })
            .collect();

        Ok(LayoutReport {
            job_id: job.id,
            placements,
            final_cursor: (layout.cursor.x, layout.cursor.y),
            rows: layout.rows,
            overflowing,
        })
    }
}
