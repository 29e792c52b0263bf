use crate::domain::model::{CoordinateMode, CutJob, GeneratedArtifacts, Layout, LayoutSettings};
use crate::utils::error::Result;
use std::path::PathBuf;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    /// 寫入檔案（覆蓋既有內容），回傳實際寫入位置
    fn write_file(&self, path: &str, data: &[u8]) -> Result<PathBuf>;
}

pub trait ConfigProvider {
    fn output_dir(&self) -> &str;
    fn svg_filename(&self) -> &str;
    fn gcode_filename(&self) -> &str;
    fn layout(&self) -> &LayoutSettings;
    fn coordinate_mode(&self) -> CoordinateMode;
}

pub trait CutPipeline {
    fn layout_settings(&self) -> &LayoutSettings;
    fn collect(&self) -> Result<CutJob>;
    fn layout<'a>(&self, job: &'a CutJob) -> Layout<'a>;
    fn emit(&self, job: &CutJob, layout: &Layout<'_>) -> Result<GeneratedArtifacts>;
}
