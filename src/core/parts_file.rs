//! 從檔案讀取零件清單，依副檔名選擇格式（csv / json / toml）。

use crate::domain::model::{specs_from_raw, PartSpec, RawPart};
use crate::utils::error::{CutError, Result};
use crate::utils::validation::validate_file_extension;
use serde::Deserialize;
use std::path::Path;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["csv", "json", "toml"];

#[derive(Debug, Deserialize)]
struct PartsDocument {
    #[serde(default)]
    parts: Vec<RawPart>,
}

pub fn load_parts<P: AsRef<Path>>(path: P) -> Result<Vec<PartSpec>> {
    let path = path.as_ref();
    let shown = path.display().to_string();
    validate_file_extension("parts_file", &shown, SUPPORTED_EXTENSIONS)?;

    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();

    let rows = match extension.as_str() {
        "csv" => parse_csv(&content)?,
        "json" => parse_json(&content)?,
        _ => parse_toml(&content)?,
    };
    tracing::debug!("Read {} row(s) from {}", rows.len(), shown);

    let parts = specs_from_raw(rows)?;
    if parts.is_empty() {
        return Err(CutError::ValidationError {
            message: format!("part list in {} is empty", shown),
        });
    }
    Ok(parts)
}

/// CSV 需要標題列：part,qty,width,height（qty 可省略）
pub fn parse_csv(content: &str) -> Result<Vec<RawPart>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: RawPart = record?;
        rows.push(row);
    }
    Ok(rows)
}

pub fn parse_json(content: &str) -> Result<Vec<RawPart>> {
    Ok(serde_json::from_str(content)?)
}

pub fn parse_toml(content: &str) -> Result<Vec<RawPart>> {
    let doc: PartsDocument = toml::from_str(content)?;
    Ok(doc.parts)
}
