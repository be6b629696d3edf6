use crate::domain::entities::row::Row;

/// Display value for a table cell. Absent and unknown fields render as "-",
/// except `picture` and `link` whose consumers want the empty string so
/// they can skip rendering entirely.
pub fn display_field(row: &Row, name: &str) -> String {
    let value = row.field(name).unwrap_or("");
    if value.is_empty() && name != "picture" && name != "link" {
        "-".to_string()
    } else {
        value.to_string()
    }
}

/// Display value for the parent column. Broken or absent parent links are
/// tolerated and render as "-".
pub fn display_parent(row: &Row) -> String {
    match row.parent_id.as_deref() {
        Some(parent_id) if !parent_id.is_empty() => parent_id.to_string(),
        _ => "-".to_string(),
    }
}
