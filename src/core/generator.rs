use crate::core::gcode::render_gcode;
use crate::core::packer::pack;
use crate::core::svg::render_svg;
use crate::core::Storage;
use crate::domain::model::{CoordinateMode, CutJob, GeneratedArtifacts, Layout, LayoutSettings};
use crate::utils::error::Result;

/// 排版並寫出 SVG 與 G-code 兩個檔案
pub fn generate<S: Storage>(
    job: &CutJob,
    storage: &S,
    settings: &LayoutSettings,
    mode: CoordinateMode,
) -> Result<GeneratedArtifacts> {
    let layout = pack(&job.parts, settings);
    write_artifacts(job, &layout, storage, settings, mode)
}

/// 先寫 SVG 再寫 G-code；任一寫入失敗就直接回傳錯誤，不清理已寫出的檔案
pub fn write_artifacts<S: Storage>(
    job: &CutJob,
    layout: &Layout<'_>,
    storage: &S,
    settings: &LayoutSettings,
    mode: CoordinateMode,
) -> Result<GeneratedArtifacts> {
    let svg = render_svg(layout, settings);
    tracing::debug!("Writing SVG ({} bytes) to {}", svg.len(), job.svg_path);
    let svg_path = storage.write_file(&job.svg_path, svg.as_bytes())?;

    let gcode = render_gcode(job, layout, mode);
    tracing::debug!("Writing G-code ({} bytes) to {}", gcode.len(), job.gcode_path);
    let gcode_path = storage.write_file(&job.gcode_path, gcode.as_bytes())?;

    Ok(GeneratedArtifacts {
        job_id: job.id,
        svg_path,
        gcode_path,
        instance_count: layout.placements.len(),
    })
}
