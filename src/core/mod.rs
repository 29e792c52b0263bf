pub mod engine;
pub mod gcode;
pub mod generator;
pub mod interpreter;
pub mod packer;
pub mod parts_file;
pub mod pipeline;
pub mod presets;
pub mod source;
pub mod svg;

pub use crate::domain::model::{CutJob, Layout, PartSpec, PlacedInstance};
pub use crate::domain::ports::{ConfigProvider, CutPipeline, Storage};
pub use crate::utils::error::Result;
