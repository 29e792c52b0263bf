use crate::domain::model::{Layout, LayoutSettings};
use std::fmt::Write;

fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// 輸出排版圖：每個實例一個無填色的框加一個標籤，順序與排版相同
pub fn render_svg(layout: &Layout<'_>, settings: &LayoutSettings) -> String {
    let mut s = String::new();
    let (label_dx, label_dy) = settings.label_offset;

    s.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
    let _ = writeln!(
        s,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" baseProfile=\"full\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">",
        xml_escape(&settings.physical_width),
        xml_escape(&settings.physical_height),
        settings.canvas_width,
        settings.canvas_height
    );

    for placed in &layout.placements {
        let part = placed.source;
        let _ = writeln!(
            s,
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"{}\" />",
            placed.x, placed.y, part.width, part.height, settings.stroke_width
        );
        let _ = writeln!(
            s,
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"black\">{}</text>",
            placed.x + label_dx,
            placed.y + label_dy,
            xml_escape(&settings.font_size),
            xml_escape(&part.name)
        );
    }

    s.push_str("</svg>\n");
    s
}
