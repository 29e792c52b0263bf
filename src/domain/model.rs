use crate::utils::error::{CutError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_required_field, Validate};
use serde::Deserialize;
use std::path::PathBuf;
use uuid::Uuid;

/// 一種要切割的零件及其數量，尺寸單位為 layout unit (1 inch ≈ 20)
#[derive(Debug, Clone, PartialEq)]
pub struct PartSpec {
    pub name: String,
    pub quantity: u32,
    pub width: f64,
    pub height: f64,
}

fn default_quantity() -> u32 {
    1
}

impl PartSpec {
    pub fn new(name: impl Into<String>, quantity: u32, width: f64, height: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            width,
            height,
        }
    }
}

/// 從 CSV / JSON / TOML 讀進來的鬆散零件列，欄位都可能缺少
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPart {
    #[serde(alias = "name")]
    pub part: Option<String>,
    #[serde(alias = "quantity")]
    pub qty: Option<u32>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl RawPart {
    /// 轉成 PartSpec。`row` 只用在錯誤訊息，name 缺少時標示第幾列
    pub fn into_spec(self, row: usize) -> Result<PartSpec> {
        let label = self
            .part
            .clone()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("row {}", row + 1));

        let name = validate_required_field(&label, "part", &self.part)?;
        validate_non_empty_string(&label, "part", name)?;
        let width = *validate_required_field(&label, "width", &self.width)?;
        let height = *validate_required_field(&label, "height", &self.height)?;

        Ok(PartSpec {
            name: name.clone(),
            quantity: self.qty.unwrap_or_else(default_quantity),
            width,
            height,
        })
    }
}

/// 將整批鬆散零件列轉成 PartSpec，遇到第一個錯誤就停止
pub fn specs_from_raw(rows: Vec<RawPart>) -> Result<Vec<PartSpec>> {
    rows.into_iter()
        .enumerate()
        .map(|(row, raw)| raw.into_spec(row))
        .collect()
}

/// 一個被放到板材上的零件實例
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedInstance<'a> {
    pub source: &'a PartSpec,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
}

/// 單次排版的結果：依序的放置位置與排版結束時的游標
#[derive(Debug, Clone, PartialEq)]
pub struct Layout<'a> {
    pub placements: Vec<PlacedInstance<'a>>,
    pub cursor: Cursor,
    pub rows: usize,
}

/// G-code 座標要用哪一個位置
///
/// `FinalCursor` 保留既有輸出：每一行都是排版結束後的游標位置，
/// 與零件實際位置無關。`PerInstance` 改用各實例自己的左上角。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum CoordinateMode {
    #[default]
    FinalCursor,
    PerInstance,
}

/// 排版與畫布常數
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSettings {
    pub spacing: f64,
    pub sheet_width: f64,
    pub min_row_height: f64,
    pub label_offset: (f64, f64),
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub physical_width: String,
    pub physical_height: String,
    pub stroke_width: f64,
    pub font_size: String,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            spacing: 20.0,
            sheet_width: 1800.0,
            min_row_height: 60.0,
            label_offset: (5.0, 15.0),
            canvas_width: 1920.0,
            canvas_height: 960.0,
            physical_width: "48in".to_string(),
            physical_height: "96in".to_string(),
            stroke_width: 2.0,
            font_size: "12px".to_string(),
        }
    }
}

/// 一次完整的工作：依序的零件、工作 ID、兩個輸出目標
#[derive(Debug, Clone, PartialEq)]
pub struct CutJob {
    pub id: Uuid,
    pub parts: Vec<PartSpec>,
    pub svg_path: String,
    pub gcode_path: String,
}

impl CutJob {
    pub fn new(parts: Vec<PartSpec>, svg_path: impl Into<String>, gcode_path: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), parts, svg_path, gcode_path)
    }

    pub fn with_id(
        id: Uuid,
        parts: Vec<PartSpec>,
        svg_path: impl Into<String>,
        gcode_path: impl Into<String>,
    ) -> Self {
        Self {
            id,
            parts,
            svg_path: svg_path.into(),
            gcode_path: gcode_path.into(),
        }
    }

    pub fn instance_count(&self) -> usize {
        self.parts.iter().map(|p| p.quantity as usize).sum()
    }
}

impl Validate for CutJob {
    // 只檢查清單非空與輸出路徑，尺寸範圍不檢查
    fn validate(&self) -> Result<()> {
        if self.parts.is_empty() {
            return Err(CutError::ValidationError {
                message: "part list is empty".to_string(),
            });
        }
        validate_path("svg_path", &self.svg_path)?;
        validate_path("gcode_path", &self.gcode_path)?;
        Ok(())
    }
}

/// 產生完成後回報給呼叫端的結果
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedArtifacts {
    pub job_id: Uuid,
    pub svg_path: PathBuf,
    pub gcode_path: PathBuf,
    pub instance_count: usize,
}

/// 一筆排版位置的擁有權版本，給 dry run 顯示用
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutReport {
    pub job_id: Uuid,
    pub placements: Vec<PlacementRecord>,
    pub final_cursor: (f64, f64),
    pub rows: usize,
    pub overflowing: usize,
}
