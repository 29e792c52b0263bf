pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::JobConfig, GenerationSettings};

pub use core::{
    engine::CutEngine, generator::generate, interpreter::interpret, packer::pack,
    pipeline::GenerationPipeline, source::PartSource,
};
pub use domain::model::{CoordinateMode, CutJob, GeneratedArtifacts, LayoutSettings, PartSpec};
pub use utils::error::{CutError, Result};
