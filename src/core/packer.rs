use crate::domain::model::{Cursor, Layout, LayoutSettings, PartSpec, PlacedInstance};

/// 由左到右、由上到下的貪婪列排版
///
/// 每放一個實例就把游標右移 `width + spacing`；超過 `sheet_width` 時換列，
/// 新列往下移 `max(height, min_row_height) + spacing`。不做最佳化，
/// 超出板材高度也照放，只記一筆警告。
pub fn pack<'a>(parts: &'a [PartSpec], settings: &LayoutSettings) -> Layout<'a> {
    let mut cursor = Cursor::default();
    let mut placements = Vec::new();
    let mut rows = 0;
    let mut row_open = false;

    for part in parts {
        for _ in 0..part.quantity {
            if !row_open {
                rows += 1;
                row_open = true;
            }
            placements.push(PlacedInstance {
                source: part,
                x: cursor.x,
                y: cursor.y,
            });

            if cursor.y + part.height > settings.canvas_height {
                tracing::warn!(
                    "⚠️ {} at y={} overflows the sheet height {}",
                    part.name,
                    cursor.y,
                    settings.canvas_height
                );
            }

            cursor.x += part.width + settings.spacing;
            if cursor.x > settings.sheet_width {
                cursor.x = 0.0;
                cursor.y += part.height.max(settings.min_row_height) + settings.spacing;
                row_open = false;
            }
        }
    }

    tracing::debug!(
        "Packed {} instance(s) into {} row(s), final cursor ({}, {})",
        placements.len(),
        rows,
        cursor.x,
        cursor.y
    );

    Layout {
        placements,
        cursor,
        rows,
    }
}

/// 有多少實例的下緣超出畫布高度
pub fn overflow_count(layout: &Layout<'_>, settings: &LayoutSettings) -> usize {
    layout
        .placements
        .iter()
        .filter(|p| p.y + p.source.height > settings.canvas_height)
        .count()
}
