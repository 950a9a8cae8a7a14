//! Attribute value formatting for result documents

use crate::config::constants::star::AREA_COUNT;

/// Shortest decimal that reads back to the same value (`0.1`, `3`)
pub fn float(value: f32) -> String {
    format!("{}", value)
}

pub fn boolean(value: bool) -> String {
    if value { "True" } else { "False" }.to_string()
}

/// Screen point with one decimal per coordinate
pub fn point(value: (f32, f32)) -> String {
    format!("({:.1}, {:.1})", value.0, value.1)
}

/// `(a,b,c,...)` with no spaces
pub fn area_list<T: std::fmt::Display>(values: &[T; AREA_COUNT]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("({})", items.join(","))
}
