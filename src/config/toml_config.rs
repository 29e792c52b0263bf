use crate::domain::model::{specs_from_raw, CoordinateMode, PartSpec, RawPart};
use crate::utils::error::{CutError, Result};
use crate::utils::validation::{validate_non_negative, validate_path, validate_positive, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobConfig {
    pub job: Option<JobSection>,
    pub output: Option<OutputConfig>,
    pub layout: Option<LayoutConfig>,
    pub gcode: Option<GcodeConfig>,
    #[serde(default)]
    pub parts: Vec<RawPart>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobSection {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    pub directory: Option<String>,
    pub svg_filename: Option<String>,
    pub gcode_filename: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutConfig {
    pub spacing: Option<f64>,
    pub sheet_width: Option<f64>,
    pub min_row_height: Option<f64>,
    pub canvas_width: Option<f64>,
    pub canvas_height: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GcodeConfig {
    pub coordinates: Option<CoordinateMode>,
}

impl JobConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn name(&self) -> Option<&str> {
        self.job.as_ref().and_then(|j| j.name.as_deref())
    }

    pub fn output_dir(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.directory.as_deref())
    }

    pub fn svg_filename(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.svg_filename.as_deref())
    }

    pub fn gcode_filename(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.gcode_filename.as_deref())
    }

    pub fn coordinate_mode(&self) -> Option<CoordinateMode> {
        self.gcode.as_ref().and_then(|g| g.coordinates)
    }

    /// `[[parts]]` 轉成 PartSpec，缺欄位時回傳 MissingField
    pub fn part_specs(&self) -> Result<Vec<PartSpec>> {
        if self.parts.is_empty() {
            return Err(CutError::ValidationError {
                message: "job config has no [[parts]] entries".to_string(),
            });
        }
        specs_from_raw(self.parts.clone())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(output) = &self.output {
            if let Some(dir) = &output.directory {
                validate_path("output.directory", dir)?;
            }
            if let Some(svg) = &output.svg_filename {
                validate_path("output.svg_filename", svg)?;
            }
            if let Some(gcode) = &output.gcode_filename {
                validate_path("output.gcode_filename", gcode)?;
            }
        }

        if let Some(layout) = &self.layout {
            if let Some(spacing) = layout.spacing {
                validate_non_negative("layout.spacing", spacing)?;
            }
            if let Some(width) = layout.sheet_width {
                validate_positive("layout.sheet_width", width)?;
            }
            if let Some(height) = layout.min_row_height {
                validate_non_negative("layout.min_row_height", height)?;
            }
            if let Some(width) = layout.canvas_width {
                validate_positive("layout.canvas_width", width)?;
            }
            if let Some(height) = layout.canvas_height {
                validate_positive("layout.canvas_height", height)?;
            }
        }

        Ok(())
    }
}

impl Validate for JobConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_job_config() {
        let toml_content = r#"
[job]
name = "coffee-table"

[output]
directory = "./out"
svg_filename = "layout.svg"
gcode_filename = "output.gcode"

[layout]
spacing = 10
sheet_width = 1200

[gcode]
coordinates = "per-instance"

[[parts]]
part = "Tabletop"
qty = 1
width = 480
height = 480

[[parts]]
part = "Leg"
qty = 4
width = 60
height = 400
"#;

        let config = JobConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.name(), Some("coffee-table"));
        assert_eq!(config.output_dir(), Some("./out"));
        assert_eq!(config.svg_filename(), Some("layout.svg"));
        assert_eq!(config.coordinate_mode(), Some(CoordinateMode::PerInstance));
        assert_eq!(config.layout.as_ref().and_then(|l| l.spacing), Some(10.0));

        let parts = config.part_specs().unwrap();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1], PartSpec::new("Leg", 4, 60.0, 400.0));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = JobConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert!(config.parts.is_empty());
        assert!(config.part_specs().is_err());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("CUTLIST_TEST_OUTPUT_DIR", "/tmp/cutlist-out");

        let config = JobConfig::from_toml_str(
            r#"
[output]
directory = "${CUTLIST_TEST_OUTPUT_DIR}"
svg_filename = "${CUTLIST_TEST_UNSET_VAR}.svg"
"#,
        )
        .unwrap();
        assert_eq!(config.output_dir(), Some("/tmp/cutlist-out"));
        assert_eq!(config.svg_filename(), Some("${CUTLIST_TEST_UNSET_VAR}.svg"));

        std::env::remove_var("CUTLIST_TEST_OUTPUT_DIR");
    }

    #[test]
    fn test_config_validation() {
        let config = JobConfig::from_toml_str(
            r#"
[layout]
sheet_width = 0
"#,
        )
        .unwrap();
        assert!(matches!(
            config.validate(),
            Err(CutError::InvalidConfigValueError { ref field, .. }) if field == "layout.sheet_width"
        ));

        let config = JobConfig::from_toml_str("[layout]\nspacing = -5\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_coordinate_mode_is_toml_error() {
        let result = JobConfig::from_toml_str("[gcode]\ncoordinates = \"diagonal\"\n");
        assert!(matches!(result, Err(CutError::TomlError(_))));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[job]\nname = \"file-test\"\n")
            .unwrap();

        let config = JobConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.name(), Some("file-test"));
    }

    #[test]
    fn test_missing_job_file_is_io_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = JobConfig::from_file(dir.path().join("job.toml")).unwrap_err();

        assert!(matches!(err, CutError::IoError(_)));
        assert_eq!(err.severity().exit_code(), 3);
    }
}
