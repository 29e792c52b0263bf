use crate::domain::model::PartSpec;

pub const COFFEE_TABLE: &str = "coffee-table";

/// 內建的茶几零件清單
pub fn coffee_table() -> Vec<PartSpec> {
    vec![
        PartSpec::new("Tabletop", 1, 480.0, 480.0),
        PartSpec::new("Leg", 4, 60.0, 400.0),
        PartSpec::new("Apron Long", 2, 420.0, 80.0),
        PartSpec::new("Apron Short", 2, 300.0, 80.0),
    ]
}

pub fn names() -> &'static [&'static str] {
    &[COFFEE_TABLE]
}

pub fn by_name(name: &str) -> Option<Vec<PartSpec>> {
    match name.trim().to_ascii_lowercase().replace(' ', "-").as_str() {
        COFFEE_TABLE => Some(coffee_table()),
        _ => None,
    }
}
