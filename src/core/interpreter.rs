//! 把簡短的家具描述轉成零件清單。
//!
//! 只認得兩種固定句型，彼此獨立比對：
//! - `<W>x<H> ft ... table` → 一塊 Tabletop，尺寸以每英尺 240 單位換算
//! - `four <N>-inch legs` → 四支 Leg，寬 60，高直接用 N（不換算）

use crate::domain::model::PartSpec;
use regex::Regex;
use std::sync::LazyLock;

/// 每英尺對應的 layout unit
pub const UNITS_PER_FOOT: f64 = 240.0;
pub const LEG_WIDTH: f64 = 60.0;
pub const LEG_COUNT: u32 = 4;

// 數字只收 ASCII；`\d` 會對到其他文字的數字，而 f64 parse 不接受
static TABLETOP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(\.[0-9]+)?)x([0-9]+(\.[0-9]+)?)\s*ft.*table").expect("tabletop pattern is valid")
});

static LEGS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"four ([0-9]+)-inch legs").expect("legs pattern is valid"));

/// 解析描述；兩個句型都沒對到時回傳 `None`，不會回傳空清單
pub fn interpret(text: &str) -> Option<Vec<PartSpec>> {
    let parts: Vec<PartSpec> = [tabletop(text), legs(text)].into_iter().flatten().collect();

    if parts.is_empty() {
        tracing::debug!("Prompt matched no known phrase");
        None
    } else {
        tracing::debug!("Prompt produced {} part spec(s)", parts.len());
        Some(parts)
    }
}

fn tabletop(text: &str) -> Option<PartSpec> {
    let caps = TABLETOP_PATTERN.captures(text)?;
    let w_ft: f64 = caps.get(1)?.as_str().parse().ok()?;
    let h_ft: f64 = caps.get(3)?.as_str().parse().ok()?;

    Some(PartSpec::new(
        "Tabletop",
        1,
        (w_ft * UNITS_PER_FOOT).trunc(),
        (h_ft * UNITS_PER_FOOT).trunc(),
    ))
}

// Leg height stays in raw inches while the tabletop is scaled per foot.
fn legs(text: &str) -> Option<PartSpec> {
    let caps = LEGS_PATTERN.captures(text)?;
    let height: f64 = caps.get(1)?.as_str().parse().ok()?;

    Some(PartSpec::new("Leg", LEG_COUNT, LEG_WIDTH, height))
}
