use crate::core::{interpreter, parts_file, presets};
use crate::domain::model::PartSpec;
use crate::utils::error::{CutError, Result};
use std::path::PathBuf;

/// 零件清單的來源，對應 CLI 的各種輸入模式
#[derive(Debug, Clone, PartialEq)]
pub enum PartSource {
    Preset(String),
    Custom(PartSpec),
    Prompt(String),
    File(PathBuf),
    Parts(Vec<PartSpec>),
}

impl PartSource {
    pub fn resolve(&self) -> Result<Vec<PartSpec>> {
        match self {
            PartSource::Preset(name) => {
                presets::by_name(name).ok_or_else(|| CutError::InvalidConfigValueError {
                    field: "preset".to_string(),
                    value: name.clone(),
                    reason: format!("Unknown preset. Available: {}", presets::names().join(", ")),
                })
            }
            PartSource::Custom(part) => Ok(vec![part.clone()]),
            PartSource::Prompt(text) => {
                interpreter::interpret(text).ok_or_else(|| CutError::PromptNotUnderstood {
                    prompt: text.clone(),
                })
            }
            PartSource::File(path) => parts_file::load_parts(path),
            PartSource::Parts(parts) => Ok(parts.clone()),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            PartSource::Preset(name) => format!("preset '{}'", name),
            PartSource::Custom(part) => format!("custom part '{}'", part.name),
            PartSource::Prompt(_) => "prompt".to_string(),
            PartSource::File(path) => format!("parts file {}", path.display()),
            PartSource::Parts(parts) => format!("{} configured part(s)", parts.len()),
        }
    }
}
