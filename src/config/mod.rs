pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{CoordinateMode, LayoutSettings};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_extension, validate_non_negative, validate_path, validate_positive, Validate,
};
use toml_config::JobConfig;

#[cfg(feature = "cli")]
use crate::core::source::PartSource;
#[cfg(feature = "cli")]
use crate::domain::model::PartSpec;
#[cfg(feature = "cli")]
use crate::utils::error::CutError;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_SVG_FILENAME: &str = "cut_layout.svg";
pub const DEFAULT_GCODE_FILENAME: &str = "cut_output.gcode";
pub const GCODE_EXTENSIONS: &[&str] = &["gcode", "nc", "ngc"];

/// 一次產生所需的全部設定，由 TOML 與 CLI 疊加而成
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub output_dir: String,
    pub svg_filename: String,
    pub gcode_filename: String,
    pub layout: LayoutSettings,
    pub coordinate_mode: CoordinateMode,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            svg_filename: DEFAULT_SVG_FILENAME.to_string(),
            gcode_filename: DEFAULT_GCODE_FILENAME.to_string(),
            layout: LayoutSettings::default(),
            coordinate_mode: CoordinateMode::default(),
        }
    }
}

impl GenerationSettings {
    pub fn from_job_config(config: &JobConfig) -> Self {
        let mut settings = Self::default();

        if let Some(dir) = config.output_dir() {
            settings.output_dir = dir.to_string();
        }
        if let Some(svg) = config.svg_filename() {
            settings.svg_filename = svg.to_string();
        }
        if let Some(gcode) = config.gcode_filename() {
            settings.gcode_filename = gcode.to_string();
        }
        if let Some(mode) = config.coordinate_mode() {
            settings.coordinate_mode = mode;
        }
        if let Some(layout) = &config.layout {
            let target = &mut settings.layout;
            target.spacing = layout.spacing.unwrap_or(target.spacing);
            target.sheet_width = layout.sheet_width.unwrap_or(target.sheet_width);
            target.min_row_height = layout.min_row_height.unwrap_or(target.min_row_height);
            target.canvas_width = layout.canvas_width.unwrap_or(target.canvas_width);
            target.canvas_height = layout.canvas_height.unwrap_or(target.canvas_height);
        }

        settings
    }
}

impl ConfigProvider for GenerationSettings {
    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn svg_filename(&self) -> &str {
        &self.svg_filename
    }

    fn gcode_filename(&self) -> &str {
        &self.gcode_filename
    }

    fn layout(&self) -> &LayoutSettings {
        &self.layout
    }

    fn coordinate_mode(&self) -> CoordinateMode {
        self.coordinate_mode
    }
}

impl Validate for GenerationSettings {
    fn validate(&self) -> Result<()> {
        validate_path("output_dir", &self.output_dir)?;
        validate_path("svg_filename", &self.svg_filename)?;
        validate_file_extension("svg_filename", &self.svg_filename, &["svg"])?;
        validate_path("gcode_filename", &self.gcode_filename)?;
        validate_file_extension("gcode_filename", &self.gcode_filename, GCODE_EXTENSIONS)?;
        validate_non_negative("layout.spacing", self.layout.spacing)?;
        validate_positive("layout.sheet_width", self.layout.sheet_width)?;
        validate_non_negative("layout.min_row_height", self.layout.min_row_height)?;
        validate_positive("layout.canvas_width", self.layout.canvas_width)?;
        validate_positive("layout.canvas_height", self.layout.canvas_height)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "cutlist")]
#[command(about = "Generate an SVG cut layout and a G-code file from a woodworking part list")]
pub struct CliConfig {
    /// Path to a TOML job file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Directory the output files are written to
    #[arg(long, global = true)]
    pub output_dir: Option<String>,

    /// File name of the SVG layout
    #[arg(long, global = true)]
    pub svg_name: Option<String>,

    /// File name of the G-code output
    #[arg(long, global = true)]
    pub gcode_name: Option<String>,

    /// Which position the G1 lines carry
    #[arg(long, value_enum, global = true)]
    pub coordinates: Option<CoordinateMode>,

    /// Show the computed layout without writing any files
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Use a built-in part list
    Preset {
        #[arg(default_value = crate::core::presets::COFFEE_TABLE)]
        name: String,
    },
    /// Cut a single custom part
    Custom {
        #[arg(long, default_value = "Custom Part")]
        name: String,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        qty: u32,
        #[arg(long, default_value_t = 100.0)]
        width: f64,
        #[arg(long, default_value_t = 100.0)]
        height: f64,
    },
    /// Describe the furniture, e.g. "2x2 ft table with four 28-inch legs"
    Prompt { text: String },
    /// Read parts from a .csv, .json or .toml file
    File { path: String },
    /// Use the [[parts]] list of the --config job file
    Job,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 以 TOML 為底，再套用命令列覆蓋
    pub fn settings(&self, job: Option<&JobConfig>) -> GenerationSettings {
        let mut settings = job
            .map(GenerationSettings::from_job_config)
            .unwrap_or_default();

        if let Some(dir) = &self.output_dir {
            settings.output_dir = dir.clone();
        }
        if let Some(svg) = &self.svg_name {
            settings.svg_filename = svg.clone();
        }
        if let Some(gcode) = &self.gcode_name {
            settings.gcode_filename = gcode.clone();
        }
        if let Some(mode) = self.coordinates {
            settings.coordinate_mode = mode;
        }

        settings
    }

    pub fn part_source(&self, job: Option<&JobConfig>) -> Result<PartSource> {
        let source = match &self.command {
            Command::Preset { name } => PartSource::Preset(name.clone()),
            Command::Custom {
                name,
                qty,
                width,
                height,
            } => PartSource::Custom(PartSpec::new(name.clone(), *qty, *width, *height)),
            Command::Prompt { text } => PartSource::Prompt(text.clone()),
            Command::File { path } => PartSource::File(path.into()),
            Command::Job => {
                let job = job.ok_or_else(|| CutError::ValidationError {
                    message: "the job command needs --config <job.toml>".to_string(),
                })?;
                PartSource::Parts(job.part_specs()?)
            }
        };
        Ok(source)
    }
}
