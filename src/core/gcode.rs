use crate::domain::model::{CoordinateMode, CutJob, Layout};
use std::fmt::Write;

/// 產生 G-code 文字
///
/// 第一行是帶工作 ID 的註解，之後每個零件實例一行 `G1`。
/// `FinalCursor` 模式下所有行都用排版結束時的游標座標（既有輸出格式），
/// 不代表零件的實際位置。
pub fn render_gcode(job: &CutJob, layout: &Layout<'_>, mode: CoordinateMode) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "; G-code generated for job {}", job.id);

    match mode {
        CoordinateMode::FinalCursor => {
            let (x, y) = (layout.cursor.x, layout.cursor.y);
            for part in &job.parts {
                for _ in 0..part.quantity {
                    let _ = writeln!(out, "G1 X{} Y{} ; Cutting {}", x, y, part.name);
                }
            }
        }
        CoordinateMode::PerInstance => {
            for placed in &layout.placements {
                let _ = writeln!(
                    out,
                    "G1 X{} Y{} ; Cutting {}",
                    placed.x, placed.y, placed.source.name
                );
            }
        }
    }

    out
}
