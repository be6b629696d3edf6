use crate::domain::entities::row::Row;
use crate::infra::csv::HEADERS;

/// Serializes rows to organogram-format CSV. Every row writes all thirteen
/// columns, empty for inapplicable fields, in the canonical header order.
pub fn generate(rows: &[Row]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(HEADERS.join(","));

    for row in rows {
        let values: Vec<String> = HEADERS
            .iter()
            .map(|header| escape_field(row.field(header).unwrap_or("")))
            .collect();
        lines.push(values.join(","));
    }

    lines.join("\n")
}

/// Quotes a field when it contains a delimiter, quote, or line break;
/// embedded quotes are doubled.
fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
